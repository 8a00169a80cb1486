use super::data::{Item, Reaction, ReactionCounts, ReactionKind};
use super::reactions::ReactionStore;
use super::storage::Storage;

/// A state change the presentation layer may want to react to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The catalog arrived (possibly empty) and the cursor was placed
    Initialized { len: usize, cursor: usize },
    /// The cursor moved to a neighbouring card
    CursorMoved { from: usize, to: usize },
    /// An item's image reference was resolved for the first time
    ImageResolved { index: usize, id: u32 },
    /// A counter was incremented and persisted
    Reacted { id: u32, kind: ReactionKind, count: u64 },
}

type Listener = Box<dyn FnMut(&Change)>;

/// The in-memory gallery model: catalog, cursor and reaction counters.
///
/// All mutation goes through this type. Navigation is clamped to the
/// catalog bounds, reactions are written through the `ReactionStore`
/// synchronously, and subscribers are notified after every effective change.
pub struct Gallery<S: Storage> {
    items: Vec<Item>,
    cursor: usize,
    loading: bool,
    counts: ReactionCounts,
    store: ReactionStore<S>,
    listeners: Vec<Listener>,
}

impl<S: Storage> Gallery<S> {
    /// Create an empty, loading gallery with counters restored from `store`
    pub fn new(store: ReactionStore<S>) -> Self {
        let counts = store.load();
        if counts.is_empty() {
            tracing::info!("💾 No saved reactions yet");
        } else {
            tracing::info!(
                "💾 Restored reactions for {} liked / {} disliked items",
                counts.likes.len(),
                counts.dislikes.len()
            );
        }

        Self {
            items: Vec::new(),
            cursor: 0,
            loading: true,
            counts,
            store,
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked after every state change
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Change) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Install the catalog and place the cursor.
    ///
    /// An out-of-range `initial_cursor` (including any cursor on an empty
    /// catalog) falls back to 0.
    pub fn initialize(&mut self, catalog: Vec<Item>, initial_cursor: usize) {
        self.items = catalog;
        self.cursor = if initial_cursor < self.items.len() {
            initial_cursor
        } else {
            0
        };
        self.loading = false;

        tracing::info!("🎨 Gallery initialized with {} items at {}", self.items.len(), self.cursor);
        self.notify(Change::Initialized {
            len: self.items.len(),
            cursor: self.cursor,
        });

        self.resolve_image(self.cursor);
    }

    /// Move to the next card. Returns false at the last card.
    pub fn navigate_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.move_to(self.cursor + 1);
        true
    }

    /// Move to the previous card. Returns false at the first card.
    pub fn navigate_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.move_to(self.cursor - 1);
        true
    }

    fn move_to(&mut self, to: usize) {
        let from = self.cursor;
        self.cursor = to;
        tracing::debug!("➡️  Cursor {} -> {}", from, to);
        self.notify(Change::CursorMoved { from, to });
        self.resolve_image(to);
    }

    /// Resolve the image of the item at `index` if it is not loaded yet.
    ///
    /// Returns true only when work was done; already-loaded and
    /// out-of-range indices are no-ops.
    pub fn resolve_image(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.is_loaded() {
            return false;
        }

        let resolved = item.resolved();
        let id = resolved.id;
        self.items[index] = resolved;
        self.notify(Change::ImageResolved { index, id });
        true
    }

    /// Increment a counter for `id`, persist all counters and notify.
    /// Returns the new value of that counter.
    pub fn react(&mut self, id: u32, kind: ReactionKind) -> u64 {
        let count = self.counts.increment(id, kind);

        if let Err(e) = self.store.save(&self.counts) {
            tracing::warn!("⚠️  Could not persist reactions: {e}");
        }

        self.notify(Change::Reacted { id, kind, count });
        count
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(&change);
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True until `initialize` has been called
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// The item under the cursor (None for an empty catalog)
    pub fn current(&self) -> Option<&Item> {
        self.items.get(self.cursor)
    }

    pub fn reactions_for(&self, id: u32) -> Reaction {
        self.counts.get(id)
    }

    #[cfg(test)]
    pub fn counts(&self) -> &ReactionCounts {
        &self.counts
    }

    pub fn can_go_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor + 1 < self.items.len()
    }

    /// Human-readable position, e.g. "3 / 51"
    pub fn position_label(&self) -> String {
        if self.items.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.cursor + 1, self.items.len())
    }

    #[cfg(test)]
    pub fn store(&self) -> &ReactionStore<S> {
        &self.store
    }
}
