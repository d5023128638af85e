//! ormlet: a minimal declarative object-relational mapping layer.
//!
//! Callers declare entity schemas with a typed builder and get table DDL,
//! inserts, lookups, updates, deletes, and many-to-many junction tables
//! generated for them. The target dialect is PostgreSQL: `$n` placeholders,
//! `SERIAL` keys, `RETURNING *`. The database connection itself stays
//! outside the engine; anything implementing [`SqlExecutor`] will do.
//!
//! This crate is the facade over the workspace layers:
//!
//! - `ormlet-core`: values, rows, field and entity definitions, instances,
//!   the executor seam, the error taxonomy.
//! - `ormlet-schema`: the schema catalog and DDL generation.
//! - `ormlet-query`: parameterized statement builders.
//! - `ormlet-session`: the CRUD engine driving an executor.
//!
//! # Example
//!
//! ```ignore
//! use ormlet::prelude::*;
//!
//! let mut catalog = SchemaCatalog::new();
//! let users = catalog.register(
//!     EntityDef::builder("users")
//!         .field(FieldDef::new("user_id", FieldType::Serial).primary_key(true))
//!         .field(FieldDef::new("email", FieldType::VarChar).max_length(255))
//!         .build()?,
//! )?;
//!
//! let mut session = Session::new(executor);
//! session.create_table(&mut catalog, &users)?;
//!
//! let mut ada = Instance::with_values(users, [("email", "ada@example.com")])?;
//! session.save(&mut ada)?;
//! assert!(ada.get("user_id").is_some_and(|v| !v.is_null()));
//! ```

pub use ormlet_core::{
    EntityBuilder, EntityDef, Error, ExecuteError, FieldDef, FieldType, ForeignKeyRef, Instance,
    QueryOutput, Result, Row, SqlEnum, SqlExecutor, Value,
};
pub use ormlet_query::{DeleteBuilder, InsertBuilder, SelectBuilder, UpdateBuilder};
pub use ormlet_schema::{PendingLink, SchemaCatalog, create_table_sql, junction_table_name, link_table_sql};
pub use ormlet_session::Session;

/// The commonly used surface in one import.
pub mod prelude {
    pub use ormlet_core::{
        EntityBuilder, EntityDef, Error, ExecuteError, FieldDef, FieldType, ForeignKeyRef,
        Instance, QueryOutput, Result, Row, SqlEnum, SqlExecutor, Value,
    };
    pub use ormlet_schema::SchemaCatalog;
    pub use ormlet_session::Session;
}
