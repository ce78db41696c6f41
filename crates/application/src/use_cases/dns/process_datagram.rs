use crate::ports::AnswerResolver;
use crate::services::ResponseBuilder;
use loopdns_domain::{DomainError, Message};
use std::sync::Arc;
use tracing::trace;

/// Request bytes in, response bytes out.
///
/// Holds no per-request state, so one instance can serve any number of
/// callers concurrently.
pub struct ProcessDatagramUseCase {
    builder: ResponseBuilder,
}

impl ProcessDatagramUseCase {
    pub fn new(resolver: Arc<dyn AnswerResolver>) -> Self {
        Self {
            builder: ResponseBuilder::new(resolver),
        }
    }

    pub fn execute(&self, request_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.respond(request_bytes).map(|response| response.encode())
    }

    /// Same as [`execute`](Self::execute) but hands back the response before
    /// encoding, so callers can log what was answered.
    pub fn respond(&self, request_bytes: &[u8]) -> Result<Message, DomainError> {
        let request = Message::decode(request_bytes)?;
        let response = self.builder.build(&request);

        trace!(
            id = response.header.id,
            opcode = request.header.opcode(),
            rcode = response.header.rcode(),
            "Built response"
        );

        Ok(response)
    }
}
