//! # Session data model
//!
//! Types describing the authenticated user as the CODEFLIX backend returns it,
//! plus the payload written to durable storage.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`SessionUser`] | The logged-in user: identity, display name, instructor flags, profile image and contact fields. |
//! | [`UserPatch`] | A partial edit of a [`SessionUser`] (profile form, bio/phone edits). Absent fields are left untouched. |
//! | [`PersistedSession`] | Exactly what is serialised to durable storage: the user and the bearer token. |
//!
//! All types use `camelCase` field names on the wire so they deserialize directly
//! from backend JSON.

use serde::{Deserialize, Serialize};

/// The authenticated user record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub is_instructor: bool,
    #[serde(default)]
    pub instructor_id: Option<u64>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl SessionUser {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_instructor: false,
            instructor_id: None,
            profile_image: None,
            phone: None,
            github_link: None,
            bio: None,
        }
    }

    /// Merge the fields present in `patch` into this record.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(is_instructor) = patch.is_instructor {
            self.is_instructor = is_instructor;
        }
        if let Some(instructor_id) = patch.instructor_id {
            self.instructor_id = Some(instructor_id);
        }
        merge_optional(&mut self.profile_image, &patch.profile_image);
        merge_optional(&mut self.phone, &patch.phone);
        merge_optional(&mut self.github_link, &patch.github_link);
        merge_optional(&mut self.bio, &patch.bio);
    }
}

/// `None` leaves the field alone, `Some("")` clears it.
fn merge_optional(field: &mut Option<String>, value: &Option<String>) {
    if let Some(value) = value {
        *field = Some(value.clone()).filter(|v| !v.is_empty());
    }
}

/// Partial update for a [`SessionUser`].
///
/// Absent fields are left untouched. For the optional text fields
/// (`profile_image`, `phone`, `github_link`, `bio`) an empty string clears the
/// value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_instructor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Serialized form of the session in durable storage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl PersistedSession {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.access_token.is_none()
    }
}
