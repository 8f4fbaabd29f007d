//! Legal text entity and input types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::LegalTextError;
use core_kernel::LegalTextId;

/// A library record: one article or extract of a legal text.
///
/// `category` is a free string (e.g. `civil_law`, `procedural_law`) so
/// imported or scraped texts can introduce categories without a schema
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LegalText {
    pub id: LegalTextId,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(default)]
    pub article_number: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub official_gazette_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_gazette_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

/// Payload for creating a legal text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLegalText {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub article_number: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub official_gazette_number: String,
    #[serde(default)]
    pub official_gazette_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Default for NewLegalText {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            article_number: String::new(),
            content: String::new(),
            publish_date: String::new(),
            official_gazette_number: String::new(),
            official_gazette_url: None,
            tags: Vec::new(),
            is_active: true,
        }
    }
}

/// Partial update for a legal text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalTextPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub article_number: Option<String>,
    pub content: Option<String>,
    pub publish_date: Option<String>,
    pub official_gazette_number: Option<String>,
    pub official_gazette_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl LegalText {
    /// Builds a record from a creation payload, assigning id and
    /// timestamps.
    pub fn new(fields: NewLegalText) -> Self {
        let now = Utc::now();
        Self {
            id: LegalTextId::new(),
            title: fields.title,
            category: fields.category,
            article_number: fields.article_number,
            content: fields.content,
            publish_date: fields.publish_date,
            official_gazette_number: fields.official_gazette_number,
            official_gazette_url: fields.official_gazette_url,
            tags: fields.tags,
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a patch over this record, preserving id and `created_at`.
    pub fn apply(&mut self, patch: LegalTextPatch) {
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.category {
            self.category = v;
        }
        if let Some(v) = patch.article_number {
            self.article_number = v;
        }
        if let Some(v) = patch.content {
            self.content = v;
        }
        if let Some(v) = patch.publish_date {
            self.publish_date = v;
        }
        if let Some(v) = patch.official_gazette_number {
            self.official_gazette_number = v;
        }
        if let Some(v) = patch.official_gazette_url {
            self.official_gazette_url = Some(v);
        }
        if let Some(v) = patch.tags {
            self.tags = v;
        }
        if let Some(v) = patch.is_active {
            self.is_active = v;
        }
    }

    /// Checks the required-field contract: title, category, content.
    pub fn check_required(&self) -> Result<(), LegalTextError> {
        self.validate()
            .map_err(|errors| LegalTextError::missing_fields(&errors))
    }
}
