// File: src/schemas/mod.rs
// Purpose: The application form schemas

mod individual;
mod organization;

pub use individual::{individual_schema, INDIVIDUAL_SCHEMA};
pub use organization::{organization_schema, ORGANIZATION_SCHEMA};
