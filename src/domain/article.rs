//! Content entities
//!
//! Entities are constructed per-request from upstream responses and dropped
//! once the response is serialized. Nothing here is cached or mutated after
//! construction.

use chrono::{DateTime, Utc};

/// A blog article from either content source
///
/// The identifier is source-defined: an opaque content id for the CMS, the
/// article slug for the Zenn source. The body may be empty when the source
/// does not expose full body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    /// Header image URL, when the source provides one
    pub image: Option<String>,
    pub category: Category,
    pub description: String,
    pub body: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An article category
///
/// The slug is the stable identifier used in URLs and filters. Categories
/// come from the primary CMS; Zenn articles carry the fixed synthetic
/// `zenn` category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

impl Category {
    /// The synthetic category attached to every secondary-source article.
    #[must_use]
    pub fn zenn() -> Self {
        Self {
            slug: "zenn".to_string(),
            name: "Zenn".to_string(),
        }
    }
}
