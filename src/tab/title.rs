//! Collision-free display titles.
//!
//! A title may carry a trailing ` (N)` counter. Every title is reduced to its
//! root before comparison, so "Server A" and "Server A (2)" compete for the
//! same root and the next free counter is always the smallest one unused.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NUMBERED_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \((\d+)\)$").expect("invalid regex"));

/// Split `"root (N)"` into `("root", Some(N))`; other titles come back whole.
pub fn split_numbered_suffix(title: &str) -> (&str, Option<u64>) {
    if let Some(caps) = NUMBERED_SUFFIX.captures(title)
        && let (Some(root), Some(counter)) = (caps.get(1), caps.get(2))
        && let Ok(n) = counter.as_str().parse::<u64>()
    {
        return (root.as_str(), Some(n));
    }
    (title, None)
}

/// Derive a title from `candidate` that does not collide with `existing`.
///
/// Returns the bare root when nobody uses it, otherwise `"root (N)"` with the
/// smallest `N >= 2` not already taken.
pub fn uniquify<'a, I>(candidate: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let (root, _) = split_numbered_suffix(candidate);

    let mut root_taken = false;
    let mut counters = HashSet::new();
    for title in existing {
        if title == root {
            root_taken = true;
            continue;
        }
        if let (other_root, Some(n)) = split_numbered_suffix(title)
            && other_root == root
        {
            counters.insert(n);
        }
    }

    if !root_taken {
        return root.to_string();
    }

    let mut n = 2;
    while counters.contains(&n) {
        n += 1;
    }
    format!("{root} ({n})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_title_is_kept() {
        assert_eq!(uniquify("Server A", ["Server B"]), "Server A");
    }

    #[test]
    fn second_copy_gets_counter_two() {
        assert_eq!(uniquify("Server A", ["Server A"]), "Server A (2)");
    }

    #[test]
    fn smallest_free_counter_is_chosen() {
        let existing = ["Server A", "Server A (2)", "Server A (4)"];
        assert_eq!(uniquify("Server A", existing), "Server A (3)");
    }

    #[test]
    fn typed_suffix_is_normalized_to_root() {
        // Root is free, so the literal counter is dropped
        assert_eq!(uniquify("Server A (2)", ["Other"]), "Server A");
        // Root is taken, so the typed counter competes like any other
        assert_eq!(uniquify("Server A (2)", ["Server A"]), "Server A (2)");
        assert_eq!(
            uniquify("Server A (7)", ["Server A", "Server A (2)"]),
            "Server A (3)"
        );
    }

    #[test]
    fn counters_of_other_roots_are_ignored() {
        let existing = ["Server A", "Server AB (2)", "Server (2)"];
        assert_eq!(uniquify("Server A", existing), "Server A (2)");
    }

    #[test]
    fn suffix_parsing() {
        assert_eq!(split_numbered_suffix("db (12)"), ("db", Some(12)));
        assert_eq!(split_numbered_suffix("db(12)"), ("db(12)", None));
        assert_eq!(split_numbered_suffix("db (x)"), ("db (x)", None));
        assert_eq!(split_numbered_suffix("a (2) (3)"), ("a (2)", Some(3)));
        // Counters that overflow are treated as ordinary text
        assert_eq!(
            split_numbered_suffix("db (99999999999999999999999)"),
            ("db (99999999999999999999999)", None)
        );
    }
}
