//! Groups domains by exact length.

use crate::aggregate::DomainSet;
use std::collections::BTreeMap;

/// Length → domains of exactly that length, each bucket sorted.
pub type Buckets = BTreeMap<usize, Vec<String>>;

/// Partitions `domains` by string length. Iteration over the result is in
/// ascending length order and each bucket is lexicographically sorted.
pub fn bucketize(domains: &DomainSet) -> Buckets {
    let mut buckets = Buckets::new();
    // BTreeSet iterates in sorted order, so each bucket is built already sorted.
    for domain in domains {
        buckets
            .entry(domain.len())
            .or_insert_with(Vec::new)
            .push(domain.clone());
    }
    buckets
}
