//! Upload validation
//!
//! The engine only sees upload metadata; bytes stay with the widget
//! that collected them and travel to the backend as multipart.

use serde::{Deserialize, Serialize};

const BYTES_PER_MB: u64 = 1_048_576;

/// Metadata for a selected upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// Rules for a single upload field.
#[derive(Debug, Clone)]
pub struct FileRules {
    pub required: bool,
    pub max_size_mb: u64,
    pub allowed_types: Vec<String>,
}

/// Checks a MIME type against an allowed pattern. A `*` subtype
/// matches the whole top-level type, e.g. `image/*` accepts
/// `image/png`.
pub fn mime_matches(mime: &str, pattern: &str) -> bool {
    let mime = mime.trim().to_ascii_lowercase();
    let pattern = pattern.trim().to_ascii_lowercase();
    if let Some(top) = pattern.strip_suffix("/*") {
        mime.strip_prefix(top)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
    } else {
        mime == pattern
    }
}

/// Validates an upload against its rules. An absent file fails only
/// when the rules require one.
pub fn validate_file(file: Option<&FileMeta>, rules: &FileRules, label: &str) -> Result<(), String> {
    let meta = match file {
        Some(meta) => meta,
        None => {
            return if rules.required {
                Err(format!("{} مطلوب", label))
            } else {
                Ok(())
            };
        }
    };
    if meta.size_bytes > rules.max_size_mb * BYTES_PER_MB {
        return Err(format!(
            "حجم الملف يجب أن لا يتجاوز {} ميجابايت",
            rules.max_size_mb
        ));
    }
    if !rules
        .allowed_types
        .iter()
        .any(|pattern| mime_matches(&meta.mime_type, pattern))
    {
        return Err("نوع الملف غير مدعوم".to_string());
    }
    Ok(())
}
