//! The sample application schema used across integration tests.
//!
//! Ten entities modelling a small software-distribution service: users,
//! applications, paid modifications, purchases and their checks, hardware
//! ids, operations, subscriptions, tokens, and mod versions. The
//! `users.subscriptions` field carries the one many-to-many link in the
//! schema, against `modification`.

use ormlet::prelude::*;

/// Kinds of user operation stored in the `operation` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Login,
    Logout,
    Purchase,
    UpdateProfile,
}

impl SqlEnum for OperationType {
    fn to_value(&self) -> Value {
        let tag = match self {
            Self::Login => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::Purchase => "PURCHASE",
            Self::UpdateProfile => "UPDATE_PROFILE",
        };
        Value::Text(tag.to_string())
    }
}

pub fn application() -> EntityDef {
    EntityDef::builder("application")
        .field(FieldDef::new("app_id", FieldType::Serial).primary_key(true))
        .field(FieldDef::new("app_name", FieldType::VarChar).max_length(255))
        .build()
        .unwrap()
}

pub fn users() -> EntityDef {
    EntityDef::builder("users")
        .field(FieldDef::new("user_id", FieldType::Serial).primary_key(true))
        .field(FieldDef::new("full_name", FieldType::VarChar).max_length(100))
        .field(FieldDef::new("email", FieldType::VarChar).max_length(255))
        .field(FieldDef::new("password", FieldType::VarChar).max_length(100))
        .field(FieldDef::new("registration_date", FieldType::Date))
        .field(
            FieldDef::new("app_availability", FieldType::Int)
                .foreign_key("application", "app_id")
                .min_value(1)
                .max_value(100),
        )
        .field(
            FieldDef::new("subscriptions", FieldType::Int)
                .foreign_key("modification", "mod_id")
                .many_to_many(true),
        )
        .build()
        .unwrap()
}

pub fn modification() -> EntityDef {
    EntityDef::builder("modification")
        .field(FieldDef::new("mod_id", FieldType::Serial).primary_key(true))
        .field(FieldDef::new("mod_name", FieldType::VarChar).max_length(100))
        .field(FieldDef::new("mod_desc", FieldType::VarChar).max_length(255))
        .field(
            FieldDef::new("app_id", FieldType::Int)
                .foreign_key("application", "app_id")
                .min_value(1)
                .max_value(100),
        )
        .build()
        .unwrap()
}

pub fn purchase() -> EntityDef {
    EntityDef::builder("purchase")
        .field(FieldDef::new("purchase_id", FieldType::Serial).primary_key(true))
        .field(
            FieldDef::new("user_id", FieldType::Int)
                .foreign_key("users", "user_id")
                .min_value(1)
                .max_value(100),
        )
        .field(
            FieldDef::new("mod_id", FieldType::Int)
                .foreign_key("modification", "mod_id")
                .min_value(1)
                .max_value(100),
        )
        .field(FieldDef::new("purchase_date", FieldType::Date))
        .build()
        .unwrap()
}

pub fn checks() -> EntityDef {
    EntityDef::builder("checks")
        .field(FieldDef::new("check_id", FieldType::Serial).primary_key(true))
        .field(
            FieldDef::new("purchase_id", FieldType::Int)
                .foreign_key("purchase", "purchase_id")
                .min_value(1)
                .max_value(100),
        )
        .field(FieldDef::new("amount", FieldType::Decimal))
        .field(FieldDef::new("payment_method", FieldType::VarChar).max_length(50))
        .build()
        .unwrap()
}

pub fn hwid() -> EntityDef {
    EntityDef::builder("hwid")
        .field(FieldDef::new("hwid_id", FieldType::Serial).primary_key(true))
        .field(
            FieldDef::new("user_id", FieldType::Int)
                .foreign_key("users", "user_id")
                .min_value(1)
                .max_value(100),
        )
        .field(FieldDef::new("processor", FieldType::VarChar).max_length(50))
        .field(FieldDef::new("videocard", FieldType::VarChar).max_length(50))
        .field(FieldDef::new("os_version", FieldType::VarChar).max_length(50))
        .field(FieldDef::new("os_type", FieldType::VarChar).max_length(50))
        .field(FieldDef::new("disks", FieldType::VarChar).max_length(50))
        .field(FieldDef::new("network_card", FieldType::VarChar).max_length(50))
        .build()
        .unwrap()
}

pub fn operation() -> EntityDef {
    EntityDef::builder("operation")
        .field(FieldDef::new("operation_id", FieldType::Serial).primary_key(true))
        .field(
            FieldDef::new("user_id", FieldType::Int)
                .foreign_key("users", "user_id")
                .min_value(1)
                .max_value(100),
        )
        .field(FieldDef::new("operation_type", FieldType::VarChar).max_length(100))
        .field(FieldDef::new("operation_date", FieldType::DateTime))
        .build()
        .unwrap()
}

pub fn subscription() -> EntityDef {
    EntityDef::builder("subscription")
        .field(FieldDef::new("subscription_id", FieldType::Serial).primary_key(true))
        .field(
            FieldDef::new("user_id", FieldType::Int)
                .foreign_key("users", "user_id")
                .min_value(1)
                .max_value(100),
        )
        .field(
            FieldDef::new("mod_id", FieldType::Int)
                .foreign_key("modification", "mod_id")
                .min_value(1)
                .max_value(100),
        )
        .field(FieldDef::new("subscription_time", FieldType::DateTime))
        .build()
        .unwrap()
}

pub fn token() -> EntityDef {
    EntityDef::builder("token")
        .field(FieldDef::new("token_id", FieldType::Serial).primary_key(true))
        .field(
            FieldDef::new("user_id", FieldType::Int)
                .foreign_key("users", "user_id")
                .min_value(1)
                .max_value(100),
        )
        .field(
            FieldDef::new("hwid_id", FieldType::Int)
                .foreign_key("hwid", "hwid_id")
                .min_value(1)
                .max_value(100),
        )
        .field(FieldDef::new("last_login", FieldType::DateTime))
        .build()
        .unwrap()
}

pub fn version() -> EntityDef {
    EntityDef::builder("version")
        .field(FieldDef::new("version_id", FieldType::Serial).primary_key(true))
        .field(
            FieldDef::new("mod_id", FieldType::Int)
                .foreign_key("modification", "mod_id")
                .min_value(1)
                .max_value(100),
        )
        .field(
            FieldDef::new("version_number", FieldType::VarChar)
                .min_value(1)
                .max_value(10),
        )
        .field(FieldDef::new("version_name", FieldType::VarChar).max_length(50))
        .field(FieldDef::new("version_description", FieldType::VarChar).max_length(255))
        .field(FieldDef::new("version_link", FieldType::VarChar).max_length(255))
        .build()
        .unwrap()
}

/// Every sample entity, in declaration order.
pub fn all_entities() -> Vec<EntityDef> {
    vec![
        application(),
        users(),
        modification(),
        purchase(),
        checks(),
        hwid(),
        operation(),
        subscription(),
        token(),
        version(),
    ]
}

/// Register the whole sample schema into a fresh catalog.
pub fn sample_catalog() -> SchemaCatalog {
    let mut catalog = SchemaCatalog::new();
    for entity in all_entities() {
        catalog.register(entity).unwrap();
    }
    catalog
}
