//! On-disk catalog document types.

use crate::catalog::{CatalogKey, CategoryId, ContentPath, SubcategoryId, ThreadId, TopicId};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Catalog document as stored on disk.
pub struct KnowledgeCatalog {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub icon: Icon,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub threads: Vec<Thread>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
/// Leaf content item; the article body lives behind `content_path`.
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    #[serde(default)]
    pub content_preview: String,
    pub content_path: ContentPath,
}

/// Category icon reference. Names outside the known set are preserved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Book,
    Server,
    Cog,
    Network,
    Database,
    Other(String),
}

impl Icon {
    pub fn as_str(&self) -> &str {
        match self {
            Icon::Book => "book",
            Icon::Server => "server",
            Icon::Cog => "cog",
            Icon::Network => "network",
            Icon::Database => "database",
            Icon::Other(name) => name.as_str(),
        }
    }

    /// Single-glyph stand-in used by the HTML renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Book => "\u{1F4D6}",
            Icon::Server => "\u{1F5A5}",
            Icon::Cog => "\u{2699}",
            Icon::Network => "\u{1F310}",
            Icon::Database => "\u{1F5C4}",
            Icon::Other(_) => "\u{2022}",
        }
    }
}

impl From<&str> for Icon {
    fn from(value: &str) -> Self {
        match value {
            "book" => Icon::Book,
            "server" => Icon::Server,
            "cog" => Icon::Cog,
            "network" => Icon::Network,
            "database" => Icon::Database,
            other => Icon::Other(other.to_string()),
        }
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Icon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Icon::from(raw.as_str()))
    }
}

/// Parse a catalog document from a file without validating it.
pub fn load_catalog_from_path(path: &Path) -> Result<KnowledgeCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&data).with_context(|| format!("parsing catalog {}", path.display()))
}

pub fn parse_catalog(data: &str) -> Result<KnowledgeCatalog> {
    serde_json::from_str(data).context("catalog is not a valid knowledge catalog document")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_round_trip_and_keep_unknowns() {
        assert_eq!(Icon::from("cog"), Icon::Cog);
        assert_eq!(Icon::from("rocket"), Icon::Other("rocket".to_string()));
        assert_eq!(Icon::from("rocket").as_str(), "rocket");
    }

    #[test]
    fn thread_defaults_empty_preview() {
        let thread: Thread = serde_json::from_str(
            r#"{"id":"ngmodule","title":"NgModule","content_path":"angular/architecture/ngmodule"}"#,
        )
        .unwrap();
        assert_eq!(thread.content_preview, "");
        assert_eq!(thread.content_path.as_str(), "angular/architecture/ngmodule");
    }
}
