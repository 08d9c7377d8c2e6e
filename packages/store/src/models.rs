//! # Records and their drafts
//!
//! The four record types kept by [`crate::ContentStore`]. They are
//! `Serialize + Deserialize` with camelCase field names, so a collection stored as
//! a JSON array stays readable by anything else writing the same keys.
//!
//! | Record | Created by | Deletable |
//! |--------|-----------|-----------|
//! | [`Project`] | admin panel | yes |
//! | [`Client`] | admin panel (testimonials) | yes |
//! | [`ContactSubmission`] | public contact form | no |
//! | [`Subscriber`] | public newsletter form | no |
//!
//! ## Drafts
//!
//! A record never exists without an id, so callers build a draft instead
//! ([`NewProject`], [`NewClient`], [`NewContact`], [`NewSubscriber`]). Each draft
//! constructor trims its input and rejects blank required fields with
//! [`StoreError::MissingField`]. The store turns a draft into a record by
//! assigning the id (and timestamp where the record carries one).

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// A showcased real-estate project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// A client testimonial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Role or company line shown under the name: "CEO, Foreclosure"
    pub designation: String,
    /// The testimonial text
    pub description: String,
    pub image_url: String,
}

/// An inquiry sent from the public contact form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub city: String,
    /// RFC 3339 UTC, second precision
    pub timestamp: String,
}

/// A newsletter sign-up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub timestamp: String,
}

/// Input for a new [`Project`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewProject {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) image_url: Option<String>,
}

impl NewProject {
    /// An empty `image_url` means "use a placeholder".
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            description: required("description", description)?,
            image_url: optional(image_url),
        })
    }
}

/// Input for a new [`Client`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub(crate) name: String,
    pub(crate) designation: String,
    pub(crate) description: String,
    pub(crate) image_url: Option<String>,
}

impl NewClient {
    /// An empty `image_url` means "use a placeholder".
    pub fn new(
        name: impl Into<String>,
        designation: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            designation: required("designation", designation)?,
            description: required("description", description)?,
            image_url: optional(image_url),
        })
    }
}

/// Input for a new [`ContactSubmission`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewContact {
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) mobile: String,
    pub(crate) city: String,
}

impl NewContact {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            full_name: required("fullName", full_name)?,
            email: required("email", email)?,
            mobile: required("mobile", mobile)?,
            city: required("city", city)?,
        })
    }
}

/// Input for a new [`Subscriber`].
#[derive(Clone, Debug, PartialEq)]
pub struct NewSubscriber {
    pub(crate) email: String,
}

impl NewSubscriber {
    pub fn new(email: impl Into<String>) -> Result<Self> {
        Ok(Self {
            email: required("email", email)?,
        })
    }
}

fn required(field: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_rejects_blank_required_fields() {
        let err = NewProject::new("  ", "desc", "").unwrap_err();
        assert!(matches!(err, StoreError::MissingField("name")));

        let err = NewClient::new("Ana", "", "Great", "").unwrap_err();
        assert!(matches!(err, StoreError::MissingField("designation")));

        let err = NewContact::new("Jane Doe", "jane@x.com", "555-0100", "\t").unwrap_err();
        assert!(matches!(err, StoreError::MissingField("city")));

        assert!(NewSubscriber::new("").is_err());
    }

    #[test]
    fn test_draft_trims_and_treats_blank_image_as_missing() {
        let draft = NewProject::new(" Harbor View ", "Waterfront flats", "   ").unwrap();
        assert_eq!(draft.name, "Harbor View");
        assert!(draft.image_url.is_none());

        let draft = NewClient::new("Ana", "Investor", "Great", "https://img/a.png").unwrap();
        assert_eq!(draft.image_url.as_deref(), Some("https://img/a.png"));
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let contact = ContactSubmission {
            id: "1".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            mobile: "555-0100".to_string(),
            city: "Springfield".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");

        let project: Project = serde_json::from_str(
            r#"{"id":"7","name":"Loft","description":"d","imageUrl":"https://x"}"#,
        )
        .unwrap();
        assert_eq!(project.image_url, "https://x");
    }
}
