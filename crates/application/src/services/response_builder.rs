use crate::ports::AnswerResolver;
use loopdns_domain::dns_message::header::{FLAG_OPCODE, FLAG_QR, FLAG_RD, RCODE_NOT_IMPLEMENTED};
use loopdns_domain::{Header, Message, Question};
use std::sync::Arc;

/// Flags for a response to a request carrying `request_flags`.
///
/// QR is set, OPCODE and RD are echoed, every other bit is cleared. A
/// non-zero OPCODE gets RCODE 4 (Not Implemented), anything else RCODE 0.
pub fn derive_response_flags(request_flags: u16) -> u16 {
    let opcode = request_flags & FLAG_OPCODE;
    let mut flags = FLAG_QR | opcode | (request_flags & FLAG_RD);
    if opcode != 0 {
        flags |= RCODE_NOT_IMPLEMENTED as u16;
    }
    flags
}

pub struct ResponseBuilder {
    resolver: Arc<dyn AnswerResolver>,
}

impl ResponseBuilder {
    pub fn new(resolver: Arc<dyn AnswerResolver>) -> Self {
        Self { resolver }
    }

    /// Derives the response to `request`: one question copied from the
    /// request and one answer from the resolver.
    ///
    /// Never fails. An unsupported OPCODE is reported through RCODE in the
    /// returned header.
    pub fn build(&self, request: &Message) -> Message {
        let question = Question::new(
            request.question.name.clone(),
            request.question.record_type,
            request.question.class,
        );
        let answer = self.resolver.resolve(&question);

        let header = Header {
            id: request.header.id,
            flags: derive_response_flags(request.header.flags),
            qdcount: 1,
            ancount: 1,
            ..Header::default()
        };

        Message {
            header,
            question,
            answer,
        }
    }
}
