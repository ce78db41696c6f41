pub mod process_datagram;

pub use process_datagram::ProcessDatagramUseCase;
