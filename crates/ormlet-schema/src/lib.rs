//! Schema catalog and DDL generation for ormlet.
//!
//! This crate owns the declarative side of the engine: a [`SchemaCatalog`]
//! holding every registered [`EntityDef`](ormlet_core::EntityDef), plus the
//! `CREATE TABLE` generation for entity tables and many-to-many junction
//! tables. The session crate executes what is generated here.

pub mod catalog;
pub mod ddl;

pub use catalog::{PendingLink, SchemaCatalog};
pub use ddl::{create_table_sql, junction_table_name, link_table_sql};
