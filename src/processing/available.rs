//! Available subnet computation.

use super::classify::subnet_index;
use itertools::Itertools;
use std::collections::HashSet;

/// Blocks in `pool` that are not in `existing`, ordered by numeric index.
///
/// Ordering uses [`subnet_index`], so `10.1.2.0/24` comes before `10.1.10.0/24`.
pub fn compute_available(pool: &HashSet<String>, existing: &HashSet<String>) -> Vec<String> {
    pool.difference(existing)
        .cloned()
        .sorted_by_key(|cidr| subnet_index(cidr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::build_candidate_pool;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_existing_returns_whole_pool_in_order() {
        let pool = build_candidate_pool();
        let available = compute_available(&pool, &HashSet::new());
        let expected: Vec<String> = (1..=19).map(|n| format!("10.1.{n}.0/24")).collect();
        assert_eq!(available, expected);
    }

    #[test]
    fn test_full_overlap_is_empty() {
        let pool = build_candidate_pool();
        let existing = pool.clone();
        assert!(compute_available(&pool, &existing).is_empty());
    }

    #[test]
    fn test_partial_out_of_order() {
        let pool = build_candidate_pool();
        let existing = set(&["10.1.15.0/24", "10.1.2.0/24"]);
        let available = compute_available(&pool, &existing);
        assert_eq!(available.len(), 17);
        assert_eq!(available.first().map(String::as_str), Some("10.1.1.0/24"));
        assert_eq!(available.last().map(String::as_str), Some("10.1.19.0/24"));
        assert!(!available.contains(&"10.1.2.0/24".to_string()));
        assert!(!available.contains(&"10.1.15.0/24".to_string()));
        // numeric, not lexicographic
        let pos3 = available.iter().position(|c| c == "10.1.3.0/24").unwrap();
        let pos10 = available.iter().position(|c| c == "10.1.10.0/24").unwrap();
        assert!(pos3 < pos10);
    }

    #[test]
    fn test_existing_outside_pool_is_ignored() {
        let pool = build_candidate_pool();
        let existing = set(&["10.1.25.0/24", "192.168.1.0/24", "172.1.4.0/24"]);
        let available = compute_available(&pool, &existing);
        assert_eq!(available.len(), 19);
        assert!(available.iter().all(|c| pool.contains(c)));
    }

    #[test]
    fn test_is_deterministic() {
        let pool = build_candidate_pool();
        let existing = set(&["10.1.7.0/24", "10.1.11.0/24"]);
        let first = compute_available(&pool, &existing);
        for _ in 0..5 {
            assert_eq!(compute_available(&build_candidate_pool(), &existing), first);
        }
    }
}
