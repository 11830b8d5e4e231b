//! Client-side pagination over a fully fetched record list.
//!
//! The list is fetched once and then reconciled record by record after each
//! server-confirmed mutation, so the page cursor has to stay valid while the
//! list grows and shrinks underneath it.
//!
//! Invariant: `current_page` is always within `[1, max(1, total_pages)]`.

use std::num::NonZeroUsize;

use crate::constants::DEFAULT_ITEMS_PER_PAGE;

/// Records that carry a stable server-assigned id.
pub trait Keyed {
    fn key(&self) -> i64;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination<T> {
    items: Vec<T>,
    items_per_page: NonZeroUsize,
    current_page: usize,
}

impl<T> Default for Pagination<T> {
    fn default() -> Self {
        Self::new(default_items_per_page())
    }
}

const fn default_items_per_page() -> NonZeroUsize {
    match NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE) {
        Some(n) => n,
        None => NonZeroUsize::MIN,
    }
}

impl<T> Pagination<T> {
    /// Empty state on page 1.
    #[must_use]
    pub const fn new(items_per_page: NonZeroUsize) -> Self {
        Self { items: Vec::new(), items_per_page, current_page: 1 }
    }

    #[must_use]
    pub fn with_items(items_per_page: NonZeroUsize, items: Vec<T>) -> Self {
        Self { items, items_per_page, current_page: 1 }
    }

    /// Replaces the collection and rewinds to page 1.
    pub fn initialize(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
    }

    /// Drops the cached collection ahead of a full re-fetch.
    pub fn reset(&mut self) {
        self.items.clear();
        self.current_page = 1;
    }

    /// Moves the cursor, clamping `page` into the valid range.
    ///
    /// Returns the page actually selected.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.last_page());
        self.current_page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Appends a record the server just created.
    ///
    /// When the current page was the full last page, the cursor follows the
    /// record onto the new last page so it is visible.
    pub fn apply_insert(&mut self, record: T) {
        let len_before = self.items.len();
        self.items.push(record);
        if len_before == self.current_page.saturating_mul(self.items_per_page.get()) {
            self.current_page += 1;
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page.get()
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(len / items_per_page)`; zero for an empty list.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.items_per_page.get())
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Records on the current page.
    #[must_use]
    pub fn page_items(&self) -> &[T] {
        let per_page = self.items_per_page.get();
        let start = (self.current_page - 1).saturating_mul(per_page).min(self.items.len());
        let end = start.saturating_add(per_page).min(self.items.len());
        &self.items[start..end]
    }

    /// 1-based positions of the first and last record on the current page,
    /// `None` for an empty list.
    #[must_use]
    pub fn page_range(&self) -> Option<(usize, usize)> {
        let shown = self.page_items().len();
        if shown == 0 {
            return None;
        }
        let first = (self.current_page - 1) * self.items_per_page.get() + 1;
        Some((first, first + shown - 1))
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }
}

impl<T: Keyed> Pagination<T> {
    /// Replaces the record with `id` in place. Paging is untouched.
    ///
    /// Returns `false`, leaving the list alone, when no record has that id.
    pub fn apply_update(&mut self, id: i64, record: T) -> bool {
        match self.items.iter_mut().find(|item| item.key() == id) {
            Some(slot) => {
                *slot = record;
                true
            },
            None => false,
        }
    }

    /// Removes the record with `id` and pulls the cursor back if its page
    /// no longer exists.
    pub fn apply_delete(&mut self, id: i64) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == id)?;
        let removed = self.items.remove(index);
        let total = self.total_pages();
        if total > 0 && self.current_page > total {
            self.current_page = total;
        }
        Some(removed)
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.key() == id)
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == id)
    }
}
