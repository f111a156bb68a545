//! Ranking behavior of the match engine.

use tmenu::{Comparator, ItemStore, MatchList};

fn store(items: &[&str]) -> ItemStore {
    ItemStore::from_lines(items.iter().copied().map(String::from))
}

fn texts(store: &ItemStore, matches: &MatchList) -> Vec<String> {
    matches
        .iter()
        .map(|id| store.get(id).text().to_string())
        .collect()
}

#[test]
fn tiers_are_exact_then_prefix_then_substring() {
    let store = store(&["foo", "foobar", "barfoo"]);
    let matches = MatchList::rematch(&store, "foo", Comparator::Respect);
    assert_eq!(texts(&store, &matches), ["foo", "foobar", "barfoo"]);
    assert_eq!(matches.exact_count(), 1);
    assert_eq!(matches.prefix_count(), 1);
}

#[test]
fn store_order_is_kept_inside_a_tier() {
    let store = store(&["bb", "ab", "ba"]);
    let matches = MatchList::rematch(&store, "b", Comparator::Respect);
    // bb and ba are prefix matches in input order, ab only a substring one
    assert_eq!(texts(&store, &matches), ["bb", "ba", "ab"]);
    assert_eq!(matches.exact_count(), 0);
    assert_eq!(matches.prefix_count(), 2);
}

#[test]
fn empty_filter_matches_everything_as_exact() {
    let store = store(&["c", "a", "b", "a"]);
    let matches = MatchList::rematch(&store, "", Comparator::Respect);
    assert_eq!(texts(&store, &matches), ["c", "a", "b", "a"]);
    assert_eq!(matches.exact_count(), 4);
}

#[test]
fn prefix_scenario_excludes_non_matches() {
    let store = store(&["apple", "apricot", "banana"]);
    let matches = MatchList::rematch(&store, "ap", Comparator::Respect);
    assert_eq!(texts(&store, &matches), ["apple", "apricot"]);
    assert_eq!(matches.exact_count(), 0);
    assert_eq!(matches.prefix_count(), 2);
}

#[test]
fn exact_requires_the_whole_string() {
    let store = store(&["ab", "abc"]);
    let matches = MatchList::rematch(&store, "ab", Comparator::Respect);
    assert_eq!(matches.exact_count(), 1);
    assert_eq!(texts(&store, &matches)[0], "ab");
}

#[test]
fn all_tokens_must_match_in_any_order() {
    let store = store(&["foo and bar", "bar then foo", "just foo", "neither"]);
    let matches = MatchList::rematch(&store, "foo bar", Comparator::Respect);
    assert_eq!(texts(&store, &matches), ["foo and bar", "bar then foo"]);
}

#[test]
fn case_insensitive_mode_folds_ascii_case() {
    let store = store(&["hello world"]);

    let sensitive = MatchList::rematch(&store, "HELLO", Comparator::Respect);
    assert!(sensitive.is_empty());

    let insensitive = MatchList::rematch(&store, "HELLO", Comparator::Ignore);
    assert_eq!(insensitive.len(), 1);
    assert_eq!(insensitive.prefix_count(), 1);
}

#[test]
fn case_insensitive_exact_tier_still_applies() {
    let store = store(&["Firefox"]);
    let matches = MatchList::rematch(&store, "firefox", Comparator::Ignore);
    assert_eq!(matches.exact_count(), 1);
}

#[test]
fn neighbor_traversal_walks_the_flat_order() {
    let store = store(&["a", "b", "c"]);
    let matches = MatchList::rematch(&store, "", Comparator::Respect);
    assert_eq!(matches.first(), Some(0));
    assert_eq!(matches.last(), Some(2));
    assert_eq!(matches.next(0), Some(1));
    assert_eq!(matches.next(2), None);
    assert_eq!(matches.prev(1), Some(0));
    assert_eq!(matches.prev(0), None);

    let empty = MatchList::rematch(&store, "zzz", Comparator::Respect);
    assert!(empty.is_empty());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
}
