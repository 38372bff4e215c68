//! Subnet classification against the managed address space.
//!
//! [`subnet_index`] is the single source for both range filtering and
//! ordering, so the two can never disagree.

use crate::config::{POOL_FIRST_INDEX, POOL_LAST_INDEX};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Matches `<n>.1.<index>.<n>` at the start of a cidr.
static INDEX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_index_regex() -> &'static Regex {
    INDEX_REGEX.get_or_init(|| Regex::new(r"^\d+\.1\.(\d+)\.\d+").expect("Invalid Regex"))
}

/// Third-octet index of a cidr of the form `<n>.1.<index>.<n>...`.
///
/// Returns `None` when the string does not have that shape.
pub fn subnet_index(cidr: &str) -> Option<u32> {
    get_index_regex()
        .captures(cidr)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// True when `index` lies strictly between 0 and 20.
pub fn in_managed_range(index: u32) -> bool {
    (POOL_FIRST_INDEX as u32..=POOL_LAST_INDEX as u32).contains(&index)
}

/// Keep only the cidrs belonging to the managed address space.
///
/// Anything else, IPv6 or foreign ranges included, is dropped silently.
pub fn filter_existing<'a, I>(cidrs: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    cidrs
        .into_iter()
        .filter(|cidr| match subnet_index(cidr) {
            Some(index) if in_managed_range(index) => true,
            _ => {
                log::debug!("Ignoring subnet outside managed range: {cidr}");
                false
            }
        })
        .map(|cidr| cidr.to_string())
        .collect()
}
