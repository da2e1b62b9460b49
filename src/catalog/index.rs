//! Indexed, validated view of a knowledge catalog.
//!
//! Loading enforces the identifier invariants of every level (unique ids,
//! URL-safe segments, well-formed content paths) so pages and the exporter
//! never need to second-guess the data they are handed.

use crate::catalog::{
    BUNDLED_CATALOG, Category, CatalogKey, CatalogMetadata, KnowledgeCatalog, NotFound,
    SubcategoryRef, ThreadRef, TopicRef, load_catalog_from_path, parse_catalog,
};
use crate::catalog::{CategoryId, SubcategoryId};
use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;
use std::path::Path;

const DEFAULT_SCHEMA_VERSION: &str = "kb_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "KBVIEW_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug)]
/// Validated catalog plus lookup helpers.
pub struct CatalogIndex {
    catalog: KnowledgeCatalog,
}

/// Node counts per level, in the order the hierarchy nests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub categories: usize,
    pub subcategories: usize,
    pub topics: usize,
    pub threads: usize,
}

impl CatalogIndex {
    /// Load and validate a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog).with_context(|| format!("validating {}", path.display()))
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Result<Self> {
        let catalog = parse_catalog(BUNDLED_CATALOG).context("parsing bundled catalog")?;
        Self::from_catalog(catalog).context("validating bundled catalog")
    }

    pub fn from_catalog(catalog: KnowledgeCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_metadata(&catalog.catalog)?;
        validate_hierarchy(&catalog.categories)?;
        Ok(Self { catalog })
    }

    pub fn key(&self) -> &CatalogKey {
        &self.catalog.catalog.key
    }

    pub fn title(&self) -> &str {
        &self.catalog.catalog.title
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.catalog.categories
    }

    pub fn catalog(&self) -> &KnowledgeCatalog {
        &self.catalog
    }

    pub fn category(&self, category: &str) -> Result<&Category, NotFound> {
        self.catalog
            .categories
            .iter()
            .find(|candidate| candidate.id.as_str() == category)
            .ok_or_else(|| NotFound::Category(CategoryId::from(category)))
    }

    pub fn subcategory(
        &self,
        category: &str,
        subcategory: &str,
    ) -> Result<SubcategoryRef<'_>, NotFound> {
        let parent = self.category(category)?;
        parent
            .subcategories
            .iter()
            .find(|candidate| candidate.id.as_str() == subcategory)
            .map(|found| SubcategoryRef {
                category: parent,
                subcategory: found,
            })
            .ok_or_else(|| NotFound::Subcategory {
                category: parent.id.clone(),
                subcategory: SubcategoryId::from(subcategory),
            })
    }

    pub fn topic(
        &self,
        category: &str,
        subcategory: &str,
        topic: &str,
    ) -> Result<TopicRef<'_>, NotFound> {
        self.subcategory(category, subcategory)?.find_topic(topic)
    }

    pub fn thread(
        &self,
        category: &str,
        subcategory: &str,
        topic: &str,
        thread: &str,
    ) -> Result<ThreadRef<'_>, NotFound> {
        self.topic(category, subcategory, topic)?.find_thread(thread)
    }

    /// Every (category, subcategory) pair in catalog order.
    pub fn subcategories(&self) -> impl Iterator<Item = SubcategoryRef<'_>> {
        self.catalog.categories.iter().flat_map(|category| {
            category
                .subcategories
                .iter()
                .map(move |subcategory| SubcategoryRef {
                    category,
                    subcategory,
                })
        })
    }

    /// Every topic chain in catalog order.
    pub fn topics(&self) -> impl Iterator<Item = TopicRef<'_>> {
        self.subcategories().flat_map(|parent| {
            parent.subcategory.topics.iter().map(move |topic| TopicRef {
                category: parent.category,
                subcategory: parent.subcategory,
                topic,
            })
        })
    }

    /// Every thread chain in catalog order.
    pub fn threads(&self) -> impl Iterator<Item = ThreadRef<'_>> {
        self.topics().flat_map(|parent| {
            parent.topic.threads.iter().map(move |thread| ThreadRef {
                category: parent.category,
                subcategory: parent.subcategory,
                topic: parent.topic,
                thread,
            })
        })
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            categories: self.catalog.categories.len(),
            subcategories: self.subcategories().count(),
            topics: self.topics().count(),
            threads: self.threads().count(),
        }
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_catalog_metadata(meta: &CatalogMetadata) -> Result<()> {
    if meta.key.0.is_empty() {
        bail!("catalog.key must not be empty");
    }
    if !meta
        .key
        .0
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got {}", meta.key.0);
    }
    if meta.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    Ok(())
}

fn validate_hierarchy(categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        bail!("catalog contains no categories");
    }

    let mut category_ids = BTreeSet::new();
    for category in categories {
        validate_segment("category", category.id.as_str())?;
        if !category_ids.insert(category.id.as_str()) {
            bail!("duplicate category id {}", category.id);
        }

        let mut subcategory_ids = BTreeSet::new();
        for subcategory in &category.subcategories {
            validate_segment("subcategory", subcategory.id.as_str())?;
            if !subcategory_ids.insert(subcategory.id.as_str()) {
                bail!(
                    "duplicate subcategory id {} in category {}",
                    subcategory.id,
                    category.id
                );
            }

            let mut topic_ids = BTreeSet::new();
            for topic in &subcategory.topics {
                validate_segment("topic", topic.id.as_str())?;
                if !topic_ids.insert(topic.id.as_str()) {
                    bail!(
                        "duplicate topic id {} in {}/{}",
                        topic.id,
                        category.id,
                        subcategory.id
                    );
                }

                let mut thread_ids = BTreeSet::new();
                for thread in &topic.threads {
                    validate_segment("thread", thread.id.as_str())?;
                    if !thread_ids.insert(thread.id.as_str()) {
                        bail!(
                            "duplicate thread id {} in {}/{}/{}",
                            thread.id,
                            category.id,
                            subcategory.id,
                            topic.id
                        );
                    }
                    validate_content_path(thread.content_path.as_str()).with_context(|| {
                        format!(
                            "thread {}/{}/{}/{}",
                            category.id, subcategory.id, topic.id, thread.id
                        )
                    })?;
                }
            }
        }
    }
    Ok(())
}

/// Ids double as URL path segments and export directory names.
fn validate_segment(level: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("encountered {level} with no id");
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!("{level} id '{id}' must match ^[A-Za-z0-9_.-]+$");
    }
    if id == "." || id == ".." {
        bail!("{level} id '{id}' is a relative path segment");
    }
    Ok(())
}

fn validate_content_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail!("content_path must not be empty");
    }
    if path.starts_with('/') {
        bail!("content_path '{path}' must be relative");
    }
    if path
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        bail!("content_path '{path}' contains an empty or relative segment");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog_with(categories: serde_json::Value) -> KnowledgeCatalog {
        serde_json::from_value(json!({
            "schema_version": "kb_catalog_v1",
            "catalog": {"key": "fixture", "title": "Fixture"},
            "categories": categories
        }))
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_topic_ids_within_subcategory() {
        let catalog = catalog_with(json!([{
            "id": "frontend", "name": "Frontend", "icon": "book",
            "subcategories": [{
                "id": "angular", "name": "Angular",
                "topics": [
                    {"id": "components", "title": "A", "threads": []},
                    {"id": "components", "title": "B", "threads": []}
                ]
            }]
        }]));
        let err = CatalogIndex::from_catalog(catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate topic id components"));
    }

    #[test]
    fn same_topic_id_allowed_under_different_subcategories() {
        let catalog = catalog_with(json!([{
            "id": "backend", "name": "Backend", "icon": "server",
            "subcategories": [
                {"id": "junior", "name": "Junior", "topics": [{"id": "basics", "title": "Basics"}]},
                {"id": "senior", "name": "Senior", "topics": [{"id": "basics", "title": "Basics"}]}
            ]
        }]));
        assert!(CatalogIndex::from_catalog(catalog).is_ok());
    }

    #[test]
    fn rejects_escaping_content_path() {
        let catalog = catalog_with(json!([{
            "id": "sql", "name": "SQL", "icon": "database",
            "subcategories": [{
                "id": "query", "name": "Query",
                "topics": [{"id": "joins", "title": "Joins", "threads": [
                    {"id": "inner", "title": "Inner", "content_path": "query/../../secrets"}
                ]}]
            }]
        }]));
        let err = CatalogIndex::from_catalog(catalog).unwrap_err();
        assert!(format!("{err:#}").contains("relative segment"));
    }

    #[test]
    fn rejects_ids_that_are_not_url_segments() {
        for bad in ["what?", "a#b", "50%", "has space", "a/b", ".."] {
            let catalog = catalog_with(json!([{
                "id": "csharp", "name": "C#", "icon": "book",
                "subcategories": [{"id": bad, "name": "Odd", "topics": []}]
            }]));
            let err = CatalogIndex::from_catalog(catalog).unwrap_err();
            assert!(
                err.to_string().contains("subcategory id"),
                "{bad} should be rejected, got {err:#}"
            );
        }
    }

    #[test]
    fn lookup_reports_first_missing_level() {
        let index = CatalogIndex::bundled().unwrap();
        let err = index
            .topic("frontend", "angular", "doesnotexist")
            .unwrap_err();
        assert_eq!(
            err,
            NotFound::Topic {
                category: "frontend".into(),
                subcategory: "angular".into(),
                topic: "doesnotexist".into(),
            }
        );
        assert!(matches!(
            index.thread("nope", "angular", "components", "x"),
            Err(NotFound::Category(_))
        ));
    }
}
