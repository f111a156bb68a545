//! The match engine.
//!
//! Every edit of the filter text rebuilds the whole [`MatchList`]; there is
//! no incremental diffing. Matching items are ranked into three tiers, exact
//! then prefix then substring, and concatenated into one flat order that
//! preserves the store order inside each tier.

use crate::item::{ItemId, ItemStore};

/// String comparison mode selected by `-i`.
///
/// The case-insensitive mode folds ASCII case only, matching what dmenu's
/// `-i` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparator {
    #[default]
    Respect,
    Ignore,
}

impl Comparator {
    pub fn eq(self, a: &str, b: &str) -> bool {
        match self {
            Comparator::Respect => a == b,
            Comparator::Ignore => a.eq_ignore_ascii_case(b),
        }
    }

    pub fn starts_with(self, text: &str, prefix: &str) -> bool {
        match self {
            Comparator::Respect => text.starts_with(prefix),
            Comparator::Ignore => text
                .as_bytes()
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes())),
        }
    }

    pub fn contains(self, text: &str, needle: &str) -> bool {
        match self {
            Comparator::Respect => text.contains(needle),
            Comparator::Ignore => {
                needle.is_empty()
                    || text
                        .as_bytes()
                        .windows(needle.len())
                        .any(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
            }
        }
    }
}

/// The ranked, filtered order of items for the current filter text.
///
/// Stored as an index vector over the item arena; a position's neighbors are
/// the adjacent positions, which gives the prev/next traversal the pager and
/// the selection need without any pointers to invalidate. A rebuild
/// supersedes the previous list entirely, so positions must never be carried
/// across a [`MatchList::rematch`].
#[derive(Debug, Default)]
pub struct MatchList {
    order: Vec<ItemId>,
    exact: usize,
    prefix: usize,
}

impl MatchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the match order for `filter`.
    ///
    /// The filter is tokenized on whitespace and an item matches only when
    /// every token is a substring of its text. With no tokens at all every
    /// item matches and is classified exact, which is what makes an empty
    /// prompt show the full list in input order.
    pub fn rematch(store: &ItemStore, filter: &str, comparator: Comparator) -> Self {
        let tokens: Vec<&str> = filter.split_whitespace().collect();

        let mut exact = Vec::new();
        let mut prefix = Vec::new();
        let mut substring = Vec::new();

        for (id, item) in store.iter().enumerate() {
            if !tokens.iter().all(|tok| comparator.contains(item.text(), tok)) {
                continue;
            }
            if tokens.is_empty() || comparator.eq(filter, item.text()) {
                exact.push(id);
            } else if comparator.starts_with(item.text(), tokens[0]) {
                prefix.push(id);
            } else {
                substring.push(id);
            }
        }

        trace!(
            "rematch {:?}: {} exact, {} prefix, {} substring",
            filter,
            exact.len(),
            prefix.len(),
            substring.len()
        );

        let exact_len = exact.len();
        let prefix_len = prefix.len();
        let mut order = exact;
        order.append(&mut prefix);
        order.append(&mut substring);

        Self {
            order,
            exact: exact_len,
            prefix: prefix_len,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Item at the given match position.
    pub fn get(&self, pos: usize) -> ItemId {
        self.order[pos]
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.order.iter().copied()
    }

    pub fn first(&self) -> Option<usize> {
        if self.order.is_empty() { None } else { Some(0) }
    }

    pub fn last(&self) -> Option<usize> {
        self.order.len().checked_sub(1)
    }

    pub fn prev(&self, pos: usize) -> Option<usize> {
        pos.checked_sub(1)
    }

    pub fn next(&self, pos: usize) -> Option<usize> {
        if pos + 1 < self.order.len() { Some(pos + 1) } else { None }
    }

    /// Number of items in the exact tier.
    pub fn exact_count(&self) -> usize {
        self.exact
    }

    /// Number of items in the prefix tier.
    pub fn prefix_count(&self) -> usize {
        self.prefix
    }
}
