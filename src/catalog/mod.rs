//! Knowledge catalog wiring.
//!
//! The catalog is the four-level hierarchy (category → subcategory → topic →
//! thread) that every page reads from. It is loaded once, validated, and then
//! treated as immutable reference data. `CatalogIndex` owns the validated
//! document and answers identifier-chain lookups with tagged results.

pub mod identity;
pub mod index;
pub mod lookup;
pub mod model;

pub use identity::{CatalogKey, CategoryId, ContentPath, SubcategoryId, ThreadId, TopicId};
pub use index::{CatalogIndex, CatalogSummary, allowed_schema_versions};
pub use lookup::{NotFound, SubcategoryRef, ThreadRef, TopicRef};
pub use model::{
    CatalogMetadata, Category, Icon, KnowledgeCatalog, Subcategory, Thread, Topic,
    load_catalog_from_path, parse_catalog,
};

/// Default relative path to the bundled catalog fixture.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/knowledge_base_v1.json";

/// The bundled catalog, compiled into every binary.
pub const BUNDLED_CATALOG: &str = include_str!("../../catalogs/knowledge_base_v1.json");
