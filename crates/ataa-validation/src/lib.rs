//! Ataa validation core
//!
//! Pure validation functions for the Ataa application forms.
//! Every function is deterministic, never panics on user input, and
//! returns `Ok(())` for a blank value: presence is enforced separately
//! by the required check, so each rule only judges what is actually
//! there.

pub mod collection;
pub mod date;
pub mod email;
pub mod file;
pub mod iban;
pub mod identity;
pub mod numeric;
pub mod phone;
pub mod string;
pub mod url;

// Re-export all validators
pub use collection::*;
pub use date::*;
pub use email::*;
pub use file::*;
pub use iban::*;
pub use identity::*;
pub use numeric::*;
pub use phone::*;
pub use string::*;
pub use url::*;
