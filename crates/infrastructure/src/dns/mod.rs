pub mod server;
pub mod static_answer;
pub mod transport;

pub use server::DnsServerHandler;
pub use static_answer::StaticAnswerResolver;
