// SPDX-License-Identifier: MPL-2.0
//! Pure per-field validation rules for the contact and signup forms.
//!
//! Each rule maps raw input text to an optional [`FieldError`]. The UI
//! resolves errors to localized messages at render time via
//! [`FieldError::i18n_key`], so validation itself never touches i18n state.

/// Name length bounds (trimmed).
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

/// Message length bounds (trimmed).
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 1000;

/// Minimum password length (not trimmed).
pub const PASSWORD_MIN_LEN: usize = 8;

/// A validatable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
    Password,
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Empty (after trimming, for text fields).
    Required,
    /// Below the field's minimum length.
    TooShort,
    /// Above the field's maximum length.
    TooLong,
    /// Not a plausible `local@domain.tld` address.
    InvalidEmail,
    /// Password missing a required character class.
    TooWeak,
}

impl FieldError {
    /// Returns the i18n message key for this error on the given field.
    #[must_use]
    pub fn i18n_key(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, FieldError::Required) => "error-name-required",
            (Field::Name, FieldError::TooLong) => "error-name-too-long",
            (Field::Name, _) => "error-name-too-short",
            (Field::Email, FieldError::Required) => "error-email-required",
            (Field::Email, _) => "error-email-invalid",
            (Field::Message, FieldError::Required) => "error-message-required",
            (Field::Message, FieldError::TooLong) => "error-message-too-long",
            (Field::Message, _) => "error-message-too-short",
            (Field::Password, FieldError::Required) => "error-password-required",
            (Field::Password, FieldError::TooShort) => "error-password-too-short",
            (Field::Password, _) => "error-password-too-weak",
        }
    }
}

/// Validates a single field value.
#[must_use]
pub fn validate(field: Field, value: &str) -> Option<FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Message => validate_message(value),
        Field::Password => validate_password(value),
    }
}

/// Name: required, trimmed length in `[NAME_MIN_LEN, NAME_MAX_LEN]`.
#[must_use]
pub fn validate_name(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return Some(FieldError::TooShort);
    }
    if len > NAME_MAX_LEN {
        return Some(FieldError::TooLong);
    }
    None
}

/// Email: required, must look like `local@domain.tld`.
#[must_use]
pub fn validate_email(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    if is_plausible_email(trimmed) {
        None
    } else {
        Some(FieldError::InvalidEmail)
    }
}

/// Message: required, trimmed length in `[MESSAGE_MIN_LEN, MESSAGE_MAX_LEN]`.
#[must_use]
pub fn validate_message(value: &str) -> Option<FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldError::Required);
    }
    let len = trimmed.chars().count();
    if len < MESSAGE_MIN_LEN {
        return Some(FieldError::TooShort);
    }
    if len > MESSAGE_MAX_LEN {
        return Some(FieldError::TooLong);
    }
    None
}

/// Password: required, at least [`PASSWORD_MIN_LEN`] characters, with at
/// least one lowercase letter, one uppercase letter, and one digit.
///
/// Unlike the text fields, the password is never trimmed: leading and
/// trailing whitespace is part of the secret.
#[must_use]
pub fn validate_password(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Some(FieldError::TooShort);
    }
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if has_lower && has_upper && has_digit {
        None
    } else {
        Some(FieldError::TooWeak)
    }
}

/// Matches the shape `local@domain.tld`: a single `@` with a non-empty
/// local part, and a domain containing at least one dot with non-empty
/// segments on both sides. No whitespace anywhere.
fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
