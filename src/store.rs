use std::fmt::Debug;

/// Lifecycle of a collection's initial fetch. Mutating actions carry their
/// own per-row cycle, tracked separately so one row's spinner never blocks
/// another.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

pub trait Record: Clone {
    type Id: Clone + PartialEq + Debug;

    fn id(&self) -> Self::Id;

    /// `needle` is already lowercased; implementations match it against
    /// their searchable string fields, treating absent fields as
    /// non-matching.
    fn matches(&self, needle: &str) -> bool;
}

/// Page-local mirror of one server-owned collection. The server stays
/// authoritative; this is only the last response, patched in place after
/// each successful mutation.
pub struct Collection<R: Record> {
    state: LoadState,
    items: Vec<R>,
    pending: Vec<R::Id>,
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            items: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.items.iter().any(|item| &item.id() == id)
    }

    pub fn find(&self, id: &R::Id) -> Option<&R> {
        self.items.iter().find(|item| &item.id() == id)
    }

    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Wholesale replacement; loads are never incremental.
    pub fn complete_load(&mut self, items: Vec<R>) {
        self.items = items;
        self.state = LoadState::Ready;
    }

    /// The previous items stay visible; worst case is a stale list with a
    /// retry affordance.
    pub fn fail_load(&mut self) {
        self.state = LoadState::Failed;
    }

    /// Order-preserving, case-insensitive substring filter. An empty query
    /// shows everything.
    pub fn filtered(&self, query: &str) -> Vec<&R> {
        if query.is_empty() {
            return self.items.iter().collect();
        }

        let needle = query.to_lowercase();

        self.items
            .iter()
            .filter(|item| item.matches(&needle))
            .collect()
    }

    pub fn sync_created(&mut self, item: R) {
        self.items.insert(0, item);
    }

    pub fn sync_updated(&mut self, item: R) {
        let id = item.id();

        if let Some(slot) = self.items.iter_mut().find(|existing| existing.id() == id) {
            *slot = item;
        }
    }

    pub fn sync_removed(&mut self, id: &R::Id) {
        self.items.retain(|item| &item.id() != id);
    }

    pub fn begin_action(&mut self, id: R::Id) {
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
    }

    pub fn finish_action(&mut self, id: &R::Id) {
        self.pending.retain(|pending| pending != id);
    }

    pub fn is_action_pending(&self, id: &R::Id) -> bool {
        self.pending.contains(id)
    }
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}
