//! Declarative classification schemes.
//!
//! A scheme is a flat, ordered list of category definitions plus the
//! parent/child references between them. The flat form is what makes
//! malformed hierarchies (duplicate parentage, dangling references, cycles)
//! representable at all; structural validation lives in `fisc-agg`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::row::{Direction, LedgerRow, Section};

/// Identifier of a category within a scheme, e.g. `"RF"`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        CategoryId::new(id)
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        CategoryId(id)
    }
}

/// Stable identity of a scheme, paired with a dataset identity as cache key.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SchemeId(String);

impl SchemeId {
    pub fn new(id: impl Into<String>) -> Self {
        SchemeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemeId {
    fn from(id: &str) -> Self {
        SchemeId::new(id)
    }
}

/// Declarative row predicate attached to a category.
///
/// A row matches when every present constraint matches. Prefix lists match
/// when any listed prefix starts the row's code; an empty list constrains
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fonction_prefixes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nature_prefixes: Vec<String>,
}

impl RowFilter {
    pub fn direction(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            ..Self::default()
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_fonction_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fonction_prefixes.push(prefix.into());
        self
    }

    pub fn with_nature_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.nature_prefixes.push(prefix.into());
        self
    }

    /// Returns `true` when the row satisfies every present constraint.
    pub fn matches(&self, row: &LedgerRow) -> bool {
        if let Some(direction) = self.direction {
            if row.direction != direction {
                return false;
            }
        }
        if let Some(section) = self.section {
            if row.section != section {
                return false;
            }
        }
        if !self.fonction_prefixes.is_empty()
            && !self
                .fonction_prefixes
                .iter()
                .any(|prefix| row.fonction.starts_with(prefix.as_str()))
        {
            return false;
        }
        if !self.nature_prefixes.is_empty()
            && !self
                .nature_prefixes
                .iter()
                .any(|prefix| row.nature.starts_with(prefix.as_str()))
        {
            return false;
        }
        true
    }
}

/// One category in a scheme's flat declaration.
///
/// A category without a filter accepts every row its parent hands down
/// (a pure grouping node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub id: CategoryId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<RowFilter>,
    /// Child references in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryId>,
}

impl CategoryDef {
    pub fn new(id: impl Into<CategoryId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            filter: None,
            children: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: RowFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CategoryId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }
}

/// Declarative, ordered category hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationScheme {
    pub id: SchemeId,
    #[serde(default)]
    pub label: String,
    /// Top-level categories in display order.
    pub roots: Vec<CategoryId>,
    pub categories: Vec<CategoryDef>,
}

impl ClassificationScheme {
    pub fn new(id: impl Into<SchemeId>) -> Self {
        let id = id.into();
        let label = id.as_str().to_string();
        Self {
            id,
            label,
            roots: Vec::new(),
            categories: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_roots<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CategoryId>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryDef>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Looks a category definition up by id.
    pub fn category(&self, id: &CategoryId) -> Option<&CategoryDef> {
        self.categories.iter().find(|category| &category.id == id)
    }
}
