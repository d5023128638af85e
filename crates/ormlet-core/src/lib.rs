//! Core types and traits for ormlet.
//!
//! `ormlet-core` is the foundation layer for the whole workspace. It defines
//! the data model every other crate builds on.
//!
//! # Role In The Architecture
//!
//! - **Declaration model**: [`EntityDef`], [`FieldDef`], and [`FieldType`]
//!   describe tables; [`Instance`] is a runtime row bound to its definition.
//! - **Data model**: [`Row`] and [`Value`] represent statement inputs and
//!   outputs shared across the query, schema, and session crates.
//! - **Driver seam**: [`SqlExecutor`] is the capability a database
//!   connection must provide; the engine owns no connections itself.
//!
//! # Who Uses This Crate
//!
//! - `ormlet-schema` registers entity definitions and generates DDL.
//! - `ormlet-query` consumes definitions and `Value` to build statements.
//! - `ormlet-session` drives `SqlExecutor` and maps `Row`s onto instances.
//!
//! Most applications should use the `ormlet` facade; reach for
//! `ormlet-core` directly when implementing an executor.

pub mod entity;
pub mod error;
pub mod executor;
pub mod field;
pub mod instance;
pub mod row;
pub mod types;
pub mod value;

pub use entity::{EntityBuilder, EntityDef};
pub use error::{Error, Result};
pub use executor::{ExecuteError, QueryOutput, SqlExecutor};
pub use field::{FieldDef, ForeignKeyRef};
pub use instance::Instance;
pub use row::Row;
pub use types::{FieldType, SqlEnum};
pub use value::Value;
