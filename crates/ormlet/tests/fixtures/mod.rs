//! Test fixtures for ormlet integration tests.

pub mod generators;
pub mod mock_executor;
pub mod sample_schema;

pub use generators::*;
pub use mock_executor::*;
pub use sample_schema::*;
