use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record identifying one test-taking session.
///
/// Constructed fresh per lookup request; this crate never persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: Uuid,
}

impl Exam {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
