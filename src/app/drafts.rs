// SPDX-License-Identifier: MPL-2.0
//! Form draft persistence.
//!
//! In-progress form input is saved to disk as the user types, so a
//! closed window never loses a half-written message. Drafts live in the
//! app data directory as small JSON files, one per form, and are
//! deleted on successful submission.
//!
//! Passwords are never written to disk: the signup draft carries only
//! the name and email fields.
//!
//! # Path Resolution
//!
//! The draft file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. `--data-dir` CLI argument / `ROFA_STUDIO_DATA_DIR` env var
//! 3. Platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contact form draft file within the app data directory.
const CONTACT_DRAFT_FILE: &str = "contact-draft.json";

/// Signup form draft file within the app data directory.
const SIGNUP_DRAFT_FILE: &str = "signup-draft.json";

/// In-progress contact form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        load_draft(CONTACT_DRAFT_FILE, base_dir)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        save_draft(self, CONTACT_DRAFT_FILE, base_dir)
    }

    pub fn clear_from(base_dir: Option<PathBuf>) -> Option<String> {
        clear_draft(CONTACT_DRAFT_FILE, base_dir)
    }
}

/// In-progress signup modal input. The password field is deliberately
/// absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl SignupDraft {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        load_draft(SIGNUP_DRAFT_FILE, base_dir)
    }

    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        save_draft(self, SIGNUP_DRAFT_FILE, base_dir)
    }

    pub fn clear_from(base_dir: Option<PathBuf>) -> Option<String> {
        clear_draft(SIGNUP_DRAFT_FILE, base_dir)
    }
}

fn draft_path(file: &str, base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(file);
        path
    })
}

/// Loads a draft, falling back to the default on any failure.
///
/// Returns `(draft, optional_warning_key)`. A missing file is normal
/// (no draft yet) and produces no warning; unreadable or malformed
/// files produce a warning key for the notification system.
fn load_draft<T>(file: &str, base_dir: Option<PathBuf>) -> (T, Option<String>)
where
    T: Default + DeserializeOwned,
{
    let Some(path) = draft_path(file, base_dir) else {
        return (T::default(), None);
    };

    if !path.exists() {
        return (T::default(), None);
    }

    match read_draft(&path) {
        Ok(draft) => (draft, None),
        Err(Error::Draft(_)) => (
            T::default(),
            Some("notification-draft-parse-error".to_string()),
        ),
        Err(_) => (
            T::default(),
            Some("notification-draft-read-error".to_string()),
        ),
    }
}

fn read_draft<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Saves a draft, creating the parent directory if needed.
///
/// Returns an optional warning key if the save failed. Draft writes are
/// best-effort; a failure never interrupts typing.
fn save_draft<T>(draft: &T, file: &str, base_dir: Option<PathBuf>) -> Option<String>
where
    T: Serialize,
{
    let Some(path) = draft_path(file, base_dir) else {
        return Some("notification-draft-path-error".to_string());
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return Some("notification-draft-dir-error".to_string());
        }
    }

    if write_draft(draft, &path).is_err() {
        return Some("notification-draft-write-error".to_string());
    }
    None
}

fn write_draft<T: Serialize>(draft: &T, path: &Path) -> Result<()> {
    let content = serde_json::to_string(draft)?;
    fs::write(path, content)?;
    Ok(())
}

/// Removes a draft file after a successful submission.
///
/// A file that is already gone is not an error.
fn clear_draft(file: &str, base_dir: Option<PathBuf>) -> Option<String> {
    let Some(path) = draft_path(file, base_dir) else {
        return None;
    };
    if !path.exists() {
        return None;
    }
    if fs::remove_file(&path).is_err() {
        return Some("notification-draft-clear-error".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn contact_draft_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = ContactDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "I have a project in mind.".to_string(),
        };

        let warning = original.save_to(Some(base_dir.clone()));
        assert!(warning.is_none(), "save should succeed");

        let (loaded, warning) = ContactDraft::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded, original);
    }

    #[test]
    fn signup_draft_round_trip() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = SignupDraft {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
        };

        assert!(original.save_to(Some(base_dir.clone())).is_none());
        let (loaded, warning) = SignupDraft::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_draft_yields_default_without_warning() {
        let temp_dir = tempdir().expect("create temp dir");

        let (draft, warning) = ContactDraft::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn corrupted_draft_yields_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONTACT_DRAFT_FILE), "]not json[").expect("write garbage");

        let (draft, warning) = ContactDraft::load_from(Some(base_dir));
        assert_eq!(draft, ContactDraft::default());
        assert_eq!(
            warning.as_deref(),
            Some("notification-draft-parse-error")
        );
    }

    #[test]
    fn clear_removes_the_file() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let draft = ContactDraft {
            name: "N".to_string(),
            email: "n@example.com".to_string(),
            message: "hello".to_string(),
        };
        assert!(draft.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(CONTACT_DRAFT_FILE).exists());

        assert!(ContactDraft::clear_from(Some(base_dir.clone())).is_none());
        assert!(!base_dir.join(CONTACT_DRAFT_FILE).exists());
    }

    #[test]
    fn clear_of_missing_file_is_not_an_error() {
        let temp_dir = tempdir().expect("create temp dir");
        assert!(SignupDraft::clear_from(Some(temp_dir.path().to_path_buf())).is_none());
    }

    #[test]
    fn drafts_use_separate_files() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let contact = ContactDraft {
            name: "Contact".to_string(),
            ..ContactDraft::default()
        };
        let signup = SignupDraft {
            name: "Signup".to_string(),
            ..SignupDraft::default()
        };
        assert!(contact.save_to(Some(base_dir.clone())).is_none());
        assert!(signup.save_to(Some(base_dir.clone())).is_none());

        let (loaded_contact, _) = ContactDraft::load_from(Some(base_dir.clone()));
        let (loaded_signup, _) = SignupDraft::load_from(Some(base_dir));
        assert_eq!(loaded_contact.name, "Contact");
        assert_eq!(loaded_signup.name, "Signup");
    }

    #[test]
    fn signup_draft_json_never_contains_a_password_key() {
        let json = serde_json::to_string(&SignupDraft {
            name: "A".to_string(),
            email: "a@b.c".to_string(),
        })
        .expect("serialize");
        assert!(!json.contains("password"));
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        let draft = ContactDraft::default();
        assert!(draft.save_to(Some(nested.clone())).is_none());
        assert!(nested.join(CONTACT_DRAFT_FILE).exists());
    }
}
