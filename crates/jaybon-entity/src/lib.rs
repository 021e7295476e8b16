//! # jaybon-entity
//!
//! Domain entity models for the Jaybon courier portal. Every struct in
//! this crate represents a database table row or a domain value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.
//!
//! Status vocabularies are closed enums. Legacy spellings that exist in
//! external feeds and older records (`pending`, `paid`, `in transit`,
//! `cod`) are accepted at the parsing boundary and mapped onto the
//! canonical variants.

pub mod payment;
pub mod session;
pub mod shipment;
pub mod user;
