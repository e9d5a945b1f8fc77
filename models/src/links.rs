use serde::{Deserialize, Serialize};

/// Relation name for a resource's link to itself.
pub const SELF_REL: &str = "self";

/// Relation name for a link to the exam endpoint.
pub const EXAM_REL: &str = "exam";

/// A typed hyperlink descriptor: relation name plus target URL.
///
/// Resources carry a plain list of these, computed by explicit function
/// calls in the API layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}
