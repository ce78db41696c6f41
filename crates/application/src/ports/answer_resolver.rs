use loopdns_domain::{Question, ResourceRecord};

/// Produces the answer record for a question.
///
/// Implementations run inline on the request path and must not block.
pub trait AnswerResolver: Send + Sync {
    fn resolve(&self, question: &Question) -> ResourceRecord;
}
