#![allow(dead_code)]

use loopdns_application::ports::AnswerResolver;
use loopdns_domain::{Question, ResourceRecord};
use std::sync::Mutex;

/// Answers with a fixed A record and remembers every question it saw.
pub struct MockAnswerResolver {
    rdata: Vec<u8>,
    ttl: i32,
    seen: Mutex<Vec<Question>>,
}

impl MockAnswerResolver {
    pub fn new() -> Self {
        Self::with_rdata(vec![127, 0, 0, 1], 60)
    }

    pub fn with_rdata(rdata: Vec<u8>, ttl: i32) -> Self {
        Self {
            rdata,
            ttl,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<Question> {
        self.seen.lock().unwrap().clone()
    }
}

impl AnswerResolver for MockAnswerResolver {
    fn resolve(&self, question: &Question) -> ResourceRecord {
        self.seen.lock().unwrap().push(question.clone());
        ResourceRecord::new(
            question.name.clone(),
            question.record_type,
            question.class,
            self.ttl,
            self.rdata.clone(),
        )
        .unwrap()
    }
}
