//! Candidate pool generation.

use crate::config::{POOL_BASE_ADDR, POOL_FIRST_INDEX, POOL_LAST_INDEX, POOL_PREFIX_LEN};
use crate::models::Ipv4;
use std::collections::HashSet;
use std::iter;

/// All managed blocks, `10.1.1.0/24` through `10.1.19.0/24`.
pub fn build_candidate_pool() -> HashSet<String> {
    let size = (POOL_LAST_INDEX - POOL_FIRST_INDEX + 1) as usize;
    let start = Ipv4 {
        addr: POOL_BASE_ADDR,
        mask: POOL_PREFIX_LEN,
    };
    iter::successors(Some(start), |block| block.next_subnet().ok())
        .take(size)
        .map(|block| block.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::subnet_index;

    #[test]
    fn test_build_candidate_pool() {
        let pool = build_candidate_pool();
        assert_eq!(pool.len(), 19);
        for n in 1..=19 {
            assert!(pool.contains(&format!("10.1.{n}.0/24")), "missing index {n}");
        }
        assert!(!pool.contains("10.1.0.0/24"));
        assert!(!pool.contains("10.1.20.0/24"));
    }

    #[test]
    fn test_pool_indices_are_in_range() {
        let pool = build_candidate_pool();
        let mut indices: Vec<u32> = pool.iter().filter_map(|c| subnet_index(c)).collect();
        indices.sort();
        assert_eq!(indices, (1..=19).collect::<Vec<u32>>());
    }
}
