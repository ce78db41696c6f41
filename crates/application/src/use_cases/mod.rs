pub mod dns;

pub use dns::ProcessDatagramUseCase;
