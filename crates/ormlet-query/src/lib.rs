//! SQL statement builders for ormlet.
//!
//! This crate turns entity data into parameterized PostgreSQL statements.
//! Every builder ends in a `build()` that returns the SQL text together
//! with the `Vec<Value>` to bind, keeping user data out of the SQL string.
//! The session crate is the only intended consumer; builders trust their
//! inputs because the session validates field names first.

pub mod builder;

pub use builder::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};
