// Ataa Forms - schema-driven validation for the Ataa application portal
// Field rules, form schemas, and the validation pass with Arabic messages

pub mod config;
pub mod form_context;
pub mod report;
pub mod runner;
pub mod schema;
pub mod schemas;
pub mod submit;
pub mod value;

// Re-export core types
pub use config::Limits;
pub use form_context::FormContext;
pub use report::{FieldErrors, FormReport, ValidationResult};
pub use runner::{validate_field, validate_form, validate_goals};
pub use schema::{Schema, Validator};
pub use schemas::{
    individual_schema, organization_schema, INDIVIDUAL_SCHEMA, ORGANIZATION_SCHEMA,
};
pub use submit::{resolve_other_selections, to_payload, OTHER_CHOICE};
pub use value::{FieldValue, FormValues};

// Re-export upload metadata types from the validation core
pub use ataa_validation::{FileMeta, FileRules};
