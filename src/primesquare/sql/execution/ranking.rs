//! Bounded per-partition ranking.
//!
//! The city ranking report needs the five highest-priced rows per city with
//! row-number rank semantics. Rather than materializing and sorting every
//! partition, each partition keeps a bounded selection of its strongest
//! candidates: a binary heap whose top is the weakest kept row, so an
//! incoming row either displaces the weakest or is discarded in O(log k).
//!
//! Rank strength is price descending, with equal prices ordered by input
//! sequence: earlier rows outrank later ones, so ties receive distinct
//! sequential ranks instead of sharing one.

use crate::primesquare::sql::execution::types::TableRecord;
use rust_decimal::Decimal;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One candidate row in a partition's top-K selection
#[derive(Debug, Clone)]
struct RankCandidate {
    price: Decimal,
    seq: usize,
    record: TableRecord,
}

impl PartialEq for RankCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.price == other.price && self.seq == other.seq
    }
}

impl Eq for RankCandidate {}

impl PartialOrd for RankCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankCandidate {
    /// Greater means stronger: higher price first, then earlier input
    /// sequence between equal prices.
    fn cmp(&self, other: &Self) -> Ordering {
        self.price
            .cmp(&other.price)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Bounded top-K selection for one partition
#[derive(Debug, Clone)]
pub struct BoundedTopK {
    capacity: usize,
    // Reverse turns the max-heap into weakest-at-top
    heap: BinaryHeap<Reverse<RankCandidate>>,
}

impl BoundedTopK {
    /// Create a selection keeping at most `capacity` rows
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    /// Offer a candidate row; keeps it only if it ranks within the top K
    /// seen so far
    pub fn offer(&mut self, price: Decimal, seq: usize, record: TableRecord) {
        let candidate = RankCandidate { price, seq, record };
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(candidate));
            return;
        }
        if let Some(Reverse(weakest)) = self.heap.peek() {
            if candidate > *weakest {
                self.heap.pop();
                self.heap.push(Reverse(candidate));
            }
        }
    }

    /// Consume the selection, returning `(rank, record)` pairs strongest
    /// first with ranks assigned 1..=len
    pub fn into_ranked(self) -> Vec<(u32, TableRecord)> {
        let mut candidates: Vec<RankCandidate> =
            self.heap.into_iter().map(|Reverse(c)| c).collect();
        candidates.sort_by(|a, b| b.cmp(a));
        candidates
            .into_iter()
            .enumerate()
            .map(|(i, c)| (i as u32 + 1, c.record))
            .collect()
    }
}
