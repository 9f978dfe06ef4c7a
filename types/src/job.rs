//! Job posting record as delivered by the job source.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Card;

const fn default_active() -> bool {
    true
}

/// Explicit `null` falls back to the type's default, same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_active))
}

/// Creation time as the job source recorded it.
///
/// Sources either write a string or a seconds/nanoseconds timestamp object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Text(String),
    Timestamp {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
}

/// A job posting shown on one card.
///
/// Every field except `id` is optional in the source document and falls back
/// to an empty/zero value, so partially-filled postings still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCard {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience_required: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills_needed: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_lat: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_lng: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary_min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary_max: f64,
    #[serde(default = "default_active", deserialize_with = "null_as_active")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub industry: String,
    #[serde(
        default,
        rename = "imageUrls",
        alias = "image_urls",
        deserialize_with = "null_as_default"
    )]
    pub image_urls: Vec<String>,
    /// Creation time, when the source recorded one.
    #[serde(default)]
    pub created_at: Option<CreatedAt>,
}

impl JobCard {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            business_id: String::new(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            experience_required: String::new(),
            skills_needed: Vec::new(),
            location_lat: 0.0,
            location_lng: 0.0,
            salary_min: 0.0,
            salary_max: 0.0,
            is_active: true,
            industry: String::new(),
            image_urls: Vec::new(),
            created_at: None,
        }
    }

    #[must_use]
    pub fn salary_range(&self) -> (f64, f64) {
        (self.salary_min, self.salary_max)
    }

    /// Tags rendered as `#tag  #tag`.
    #[must_use]
    pub fn tag_line(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl Card for JobCard {
    fn card_id(&self) -> &str {
        &self.id
    }
}
