mod answer_resolver;

pub use answer_resolver::AnswerResolver;
