//! Typed identifiers for catalog nodes.
//!
//! Each level of the hierarchy gets its own newtype so a topic id can never
//! be passed where a thread id is expected. The wire form is the bare string.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

string_id!(
    /// Identifier of a top-level category, unique among categories.
    CategoryId
);
string_id!(
    /// Identifier of a subcategory, unique within its category.
    SubcategoryId
);
string_id!(
    /// Identifier of a topic, unique within its subcategory.
    TopicId
);
string_id!(
    /// Identifier of a thread, unique within its topic.
    ThreadId
);
string_id!(
    /// Relative content path of a thread, e.g. `angular/components/componentanatomy`.
    ContentPath
);
string_id!(
    /// Key declared in the catalog metadata block.
    CatalogKey
);
