//! Ordered sequences of repeated entities.

use roxmltree::Node;
use serde::Serialize;

use super::FromXmlNode;
use crate::config::Namespaces;
use crate::xml::find_all;

/// An entity that appears as a repeated element inside a wrapper.
pub trait CollectionItem: FromXmlNode {
    /// Path locating every item below the parent node.
    const ITEM_PATH: &'static str;

    /// Mapping the item path is resolved against.
    const NAMESPACES: Namespaces;
}

/// Ordered, append-only sequence of entities in document order.
///
/// Serializes as a plain list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Build a sequence from already deserialized items, keeping their order.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

// Written by hand so `T` does not need to implement `Default`.
impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: CollectionItem> FromXmlNode for Sequence<T> {
    fn deserialize(node: Node<'_, '_>) -> Self {
        let nodes = find_all(node, T::ITEM_PATH, &T::NAMESPACES);
        tracing::debug!(
            item = T::ITEM_PATH,
            count = nodes.len(),
            "Deserializing collection"
        );
        Self::from_items(nodes.into_iter().map(T::deserialize))
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}
