/// Shared data structures for the gallery state
///
/// These structs represent the data model that flows between
/// the catalog source, the reaction store and the UI layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder in an image template that is replaced with the item id
pub const ID_PLACEHOLDER: &str = "{id}";

/// Where an item's image comes from before it is resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// URL template containing `{id}` (e.g. "https://randomfox.ca/images/{id}.jpg")
    Template(String),
    /// Reference supplied as-is by the catalog payload
    Supplied(String),
}

impl ImageSource {
    /// Derive the image reference for an item id
    pub fn derive(&self, id: u32) -> String {
        match self {
            ImageSource::Template(template) => template.replace(ID_PLACEHOLDER, &id.to_string()),
            ImageSource::Supplied(reference) => reference.clone(),
        }
    }
}

/// Represents a single card in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// 1-based id, contiguous within the catalog
    pub id: u32,
    /// Display name (e.g., "Fox #7")
    pub display_name: String,
    /// How to derive the image reference on first visit
    pub source: ImageSource,
    /// Resolved image reference (None until the item is first navigated to)
    pub image_ref: Option<String>,
}

impl Item {
    /// Create an unresolved item
    pub fn new(id: u32, display_name: impl Into<String>, source: ImageSource) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            source,
            image_ref: None,
        }
    }

    /// Whether the image reference has been resolved
    pub fn is_loaded(&self) -> bool {
        self.image_ref.is_some()
    }

    /// A copy of this item with its image reference resolved
    pub fn resolved(&self) -> Self {
        Self {
            image_ref: Some(self.source.derive(self.id)),
            ..self.clone()
        }
    }
}

/// The two kinds of reaction a user can leave on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// Like/dislike counters for one item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reaction {
    pub likes: u64,
    pub dislikes: u64,
}

/// Per-item reaction counters, one map per counter type
///
/// Entries are created lazily; an absent id means zero/zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: BTreeMap<u32, u64>,
    pub dislikes: BTreeMap<u32, u64>,
}

impl ReactionCounts {
    /// Counters for an item (zero/zero if it was never reacted to)
    pub fn get(&self, id: u32) -> Reaction {
        Reaction {
            likes: self.likes.get(&id).copied().unwrap_or(0),
            dislikes: self.dislikes.get(&id).copied().unwrap_or(0),
        }
    }

    /// Increment one counter and return its new value
    pub fn increment(&mut self, id: u32, kind: ReactionKind) -> u64 {
        let map = match kind {
            ReactionKind::Like => &mut self.likes,
            ReactionKind::Dislike => &mut self.dislikes,
        };
        let count = map.entry(id).or_insert(0);
        *count += 1;
        *count
    }

    pub fn is_empty(&self) -> bool {
        self.likes.is_empty() && self.dislikes.is_empty()
    }
}
