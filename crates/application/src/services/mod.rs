pub mod response_builder;

pub use response_builder::{derive_response_flags, ResponseBuilder};
