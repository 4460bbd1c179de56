//! Field rules shared by the resource operations.
//!
//! Each check returns `Ok(())` or an [`YousignError::Argument`] naming the
//! field and the rule it broke, so request types can chain them with `?`.

use crate::error::{Result, YousignError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

static UUID_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-([0-9a-f]{4}-){3}[0-9a-f]{12}$").expect("valid regex")
});

static UUID_LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-f]{8}-(?:[0-9a-f]{4}-){3}[0-9a-f]{12}").expect("valid regex")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("valid regex")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("valid regex"));

/// Whole-string lowercase UUID (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
pub fn uuid_strict(field: &'static str, value: &str) -> Result<()> {
    if UUID_STRICT.is_match(value) {
        Ok(())
    } else {
        Err(YousignError::argument(field, "must be a UUID"))
    }
}

/// A UUID appearing anywhere in the value, e.g. `/procedures/<uuid>`.
pub fn uuid_loose(field: &'static str, value: &str) -> Result<()> {
    if UUID_LOOSE.is_match(value) {
        Ok(())
    } else {
        Err(YousignError::argument(field, "must contain a UUID"))
    }
}

/// Pull the first UUID out of a server identifier such as `/users/<uuid>`.
pub fn extract_uuid(value: &str) -> Option<Uuid> {
    UUID_LOOSE
        .find(value)
        .and_then(|m| Uuid::parse_str(m.as_str()).ok())
}

/// Email address of at most 254 characters.
pub fn email(field: &'static str, value: &str) -> Result<()> {
    if value.len() <= 254 && EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(YousignError::argument(field, "must be a valid email address"))
    }
}

/// E.164-like phone number, optional leading '+'.
pub fn phone(field: &'static str, value: &str) -> Result<()> {
    if PHONE.is_match(value) {
        Ok(())
    } else {
        Err(YousignError::argument(
            field,
            "must be a phone number in E.164 format",
        ))
    }
}

/// File name with a non-empty stem and a `.pdf` extension.
pub fn pdf_filename(field: &'static str, value: &str) -> Result<()> {
    if value.len() > ".pdf".len() && value.ends_with(".pdf") {
        Ok(())
    } else {
        Err(YousignError::argument(field, "must be a file name ending in .pdf"))
    }
}

/// Canonical standard base64: decoding then re-encoding must give the input back.
pub fn base64_content(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(YousignError::argument(field, "must not be empty"));
    }
    match BASE64.decode(value) {
        Ok(bytes) if BASE64.encode(&bytes) == value => Ok(()),
        _ => Err(YousignError::argument(field, "must be base64 encoded")),
    }
}

/// Rejects empty and whitespace-only values.
pub fn non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(YousignError::argument(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Check membership in a fixed set of allowed values.
pub fn one_of(field: &'static str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(YousignError::argument(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        ))
    }
}
