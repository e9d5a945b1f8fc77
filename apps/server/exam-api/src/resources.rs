//! Resource DTOs: payloads plus explicit link descriptors.
//!
//! Links are computed by plain function calls on known route shapes, not
//! derived from routing metadata.

use models::links::{EXAM_REL, SELF_REL};
use models::{Exam, ExamApproval, Link, Response};

use serde::Serialize;
use uuid::Uuid;

/// Target URL of the exam endpoint for one exam id.
pub fn exam_href(exam_id: Uuid) -> String {
    format!("/exam/{exam_id}")
}

/// Exam payload wrapped with its hyperlinks.
#[derive(Debug, Clone, Serialize)]
pub struct ExamResource {
    #[serde(flatten)]
    pub exam: Exam,
    pub links: Vec<Link>,
}

/// Wrap an exam with a self-referencing link.
pub fn exam_resource(exam: Exam) -> ExamResource {
    let links = vec![Link::new(SELF_REL, exam_href(exam.id))];
    ExamResource { exam, links }
}

/// Approval response wrapped with its hyperlinks.
///
/// Success carries a link to the exam endpoint; failure carries the
/// validation errors from the wrapped response and no links.
#[derive(Debug, Clone, Serialize)]
pub struct ExamApprovalResource {
    #[serde(flatten)]
    pub response: Response<ExamApproval>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

/// Wrap an approval response, linking to the exam when approval succeeded.
pub fn exam_approval_resource(response: Response<ExamApproval>) -> ExamApprovalResource {
    let links = match response.data() {
        Some(approval) => vec![Link::new(EXAM_REL, exam_href(approval.exam_id))],
        None => Vec::new(),
    };

    ExamApprovalResource { response, links }
}
