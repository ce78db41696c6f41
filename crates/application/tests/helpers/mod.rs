#![allow(dead_code)]
pub mod mock_resolvers;

pub use mock_resolvers::*;
