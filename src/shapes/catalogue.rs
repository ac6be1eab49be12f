//! The shape catalogue.
//!
//! Every legal combination for the variant, loaded once and shared read-only
//! by any number of trackers. Cloning shares the same backing storage.

use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::sync::Arc;

use super::shape::CardShape;
use crate::core::CatalogueError;

/// Ordered, immutable collection of card shapes.
///
/// ## Example
///
/// ```
/// use doudizhu_judger::shapes::ShapeCatalogue;
///
/// let catalogue = ShapeCatalogue::from_tokens(["3", "33", "345"]).unwrap();
/// assert_eq!(catalogue.len(), 3);
/// assert!(catalogue.get("33").is_some());
/// assert!(catalogue.get("44").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ShapeCatalogue {
    inner: Arc<CatalogueInner>,
}

#[derive(Debug)]
struct CatalogueInner {
    shapes: Vec<CardShape>,
    index: FxHashMap<CardShape, usize>,
}

/// On-disk catalogue layouts.
///
/// Either a plain list of tokens, or a table keyed by token whose values
/// (shape type annotations) are ignored.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogueFile {
    List(Vec<String>),
    Table(serde_json::Map<String, serde_json::Value>),
}

impl ShapeCatalogue {
    /// Build a catalogue from tokens, keeping their order.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, CatalogueError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let shapes = tokens
            .into_iter()
            .map(|t| CardShape::parse(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_shapes(shapes)
    }

    /// Build a catalogue from already-parsed shapes.
    pub fn from_shapes(shapes: Vec<CardShape>) -> Result<Self, CatalogueError> {
        let mut index = FxHashMap::default();
        index.reserve(shapes.len());
        for (i, shape) in shapes.iter().enumerate() {
            if index.insert(shape.clone(), i).is_some() {
                return Err(CatalogueError::DuplicateShape {
                    token: shape.token().to_string(),
                });
            }
        }
        Ok(Self {
            inner: Arc::new(CatalogueInner { shapes, index }),
        })
    }

    /// Load a catalogue from JSON.
    ///
    /// Accepts `["3", "33", ...]` or `{"3": ..., "33": ..., ...}`. Both keep
    /// the order tokens appear in the file.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        match serde_json::from_str::<CatalogueFile>(json)? {
            CatalogueFile::List(tokens) => Self::from_tokens(tokens),
            CatalogueFile::Table(table) => Self::from_tokens(table.keys()),
        }
    }

    /// Look up a shape by token.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&CardShape> {
        self.inner
            .index
            .get(token)
            .map(|&i| &self.inner.shapes[i])
    }

    /// Iterate over shapes in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = &CardShape> {
        self.inner.shapes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.shapes.is_empty()
    }

    /// Do two handles share the same backing storage?
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
