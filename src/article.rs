use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Strapi wraps every entity in an `{ id, attributes }` envelope, and
/// collections in a `{ data: [...] }` envelope. The same wrappers cover the
/// top-level response payload and nested relations like `Article::authors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<T> {
    #[serde(default)]
    pub id: u64,
    pub attributes: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    pub data: Vec<Entry<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

/// One article as served by the CMS. Fields the API leaves out decode to
/// their defaults rather than failing the whole payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub title: String,
    pub summary: String,
    pub slug: String,
    pub authors: Collection<Author>,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_attribution: Option<ImageAttribution>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageAttribution {
    pub author: String,
    pub author_url: String,
    pub platform: String,
    pub platform_url: String,
}
