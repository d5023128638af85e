//! Error types for schema declaration and persistence.

use std::fmt;

use crate::executor::ExecuteError;

/// Convenience alias used across the ormlet crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between declaring an entity and running
/// its statements.
///
/// Declaration-time failures (`SchemaDefinition`, `InvalidFieldType`,
/// `DuplicateEntity`) surface before the database is ever touched.
/// `StatementExecution` wraps a driver failure after the session has rolled
/// the transaction back.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A malformed entity declaration, rejected while building it.
    SchemaDefinition {
        /// Entity being declared.
        entity: String,
        /// The field or clause that failed validation.
        clause: String,
        /// What was wrong with it.
        message: String,
    },
    /// A textual type tag that names no known field type.
    InvalidFieldType {
        /// The unrecognized tag.
        tag: String,
    },
    /// An entity name registered twice in the same catalog.
    DuplicateEntity {
        /// The conflicting name.
        entity: String,
    },
    /// A field name the entity does not declare.
    UnknownField {
        /// Entity that was addressed.
        entity: String,
        /// The undeclared field name.
        field: String,
    },
    /// A junction table requested before both partner tables registered
    /// their primary keys.
    UnresolvedRelationship {
        /// The junction table that could not be built.
        table: String,
        /// The partner table whose primary key is missing.
        missing: String,
    },
    /// An INSERT attempted with an empty column set.
    NoFieldsToInsert {
        /// Entity being saved.
        entity: String,
    },
    /// The operation needed a primary key the entity or instance could
    /// not supply.
    MissingPrimaryKey {
        /// Entity being updated or deleted.
        entity: String,
    },
    /// The executor rejected a statement. Raised after rollback.
    StatementExecution {
        /// Entity the statement belonged to.
        entity: String,
        /// The statement that failed.
        sql: String,
        /// The driver-side failure.
        source: ExecuteError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SchemaDefinition {
                entity,
                clause,
                message,
            } => {
                write!(f, "invalid definition of entity '{entity}' ({clause}): {message}")
            }
            Error::InvalidFieldType { tag } => write!(f, "unrecognized field type tag '{tag}'"),
            Error::DuplicateEntity { entity } => {
                write!(f, "entity '{entity}' is already registered")
            }
            Error::UnknownField { entity, field } => {
                write!(f, "entity '{entity}' declares no field named '{field}'")
            }
            Error::UnresolvedRelationship { table, missing } => write!(
                f,
                "cannot create junction table '{table}': no primary key registered for '{missing}'"
            ),
            Error::NoFieldsToInsert { entity } => {
                write!(f, "nothing to insert for entity '{entity}': all fields are null")
            }
            Error::MissingPrimaryKey { entity } => {
                write!(f, "entity '{entity}' has no usable primary key for this operation")
            }
            Error::StatementExecution {
                entity,
                sql,
                source,
            } => {
                write!(f, "statement failed for entity '{entity}': {source} (sql: {sql})")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::StatementExecution { source, .. } => Some(source),
            _ => None,
        }
    }
}
