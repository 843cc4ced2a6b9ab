//! Ordering of parallel solver results for streaming output.
//!
//! Results arrive in completion order but should print in (year, day, part)
//! order. Two min-heaps do the buffering: one holds the keys still
//! expected, the other the results that arrived early.

use crate::executor::PartOutcome;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Ordering key for one part's result.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&PartOutcome> for ResultKey {
    fn from(outcome: &PartOutcome) -> Self {
        Self {
            year: outcome.year,
            day: outcome.day,
            part: outcome.part,
        }
    }
}

/// Min-heap wrapper ordering outcomes by key.
struct OrderedOutcome(PartOutcome);

impl Ord for OrderedOutcome {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed for a min-heap
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedOutcome {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedOutcome {}

impl PartialEq for OrderedOutcome {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Buffers out-of-order results and releases them in key order.
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<OrderedOutcome>,
}

impl ResultAggregator {
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Accepts one result and returns every result now ready, in order.
    pub fn add(&mut self, outcome: PartOutcome) -> Vec<PartOutcome> {
        self.pending.push(OrderedOutcome(outcome));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) == *next_expected {
                self.expected.pop();
                ready.push(self.pending.pop().expect("peeked above").0);
            } else {
                break;
            }
        }
        ready
    }

    /// Remaining buffered results in order; used once the channel closes.
    pub fn drain(&mut self) -> Vec<PartOutcome> {
        let mut outcomes: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        outcomes.sort_by_key(|o| ResultKey::from(o));
        outcomes
    }

    /// True once every expected result has been released.
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn outcome(year: u16, day: u8, part: u8) -> PartOutcome {
        PartOutcome {
            year,
            day,
            part,
            answer: Ok(format!("{}-{}-{}", year, day, part)),
            parse_duration: Some(TimeDelta::milliseconds(1)),
            solve_duration: TimeDelta::milliseconds(2),
            submitted_at: None,
            submission: None,
            submission_wait: None,
        }
    }

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    #[test]
    fn releases_in_order_arrivals_immediately() {
        let mut agg = ResultAggregator::new(vec![key(2025, 1, 1), key(2025, 1, 2)]);

        let ready = agg.add(outcome(2025, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(outcome(2025, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn buffers_until_the_missing_result_arrives() {
        let mut agg =
            ResultAggregator::new(vec![key(2025, 1, 1), key(2025, 1, 2), key(2025, 2, 1)]);

        assert!(agg.add(outcome(2025, 1, 2)).is_empty());
        assert!(agg.add(outcome(2025, 2, 1)).is_empty());

        let ready = agg.add(outcome(2025, 1, 1));
        assert_eq!(ready.len(), 3);
        assert_eq!(
            ready.iter().map(|r| (r.day, r.part)).collect::<Vec<_>>(),
            vec![(1, 1), (1, 2), (2, 1)]
        );
    }

    #[test]
    fn drain_returns_leftovers_sorted() {
        let mut agg = ResultAggregator::new(vec![key(2025, 1, 1), key(2025, 1, 2)]);

        agg.add(outcome(2025, 1, 2));
        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }
}
