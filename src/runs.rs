//! Finished runs of the current session
//!
//! Kept in memory only; a new process starts with an empty log.

use serde::{Deserialize, Serialize};

/// Outcome of one run, captured on the tick it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// 1-based run number within the session
    pub run: u32,
    pub score: u64,
    /// Ticks survived
    pub ticks: u64,
}

/// Finished runs in the order they ended
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLog {
    records: Vec<RunRecord>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&RunRecord> {
        self.records.last()
    }

    /// Highest-scoring run; on a tie the one that got there first
    pub fn best(&self) -> Option<&RunRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.score > best.score { r } else { best })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(run: u32, score: u64) -> RunRecord {
        RunRecord {
            run,
            score,
            ticks: score * 6,
        }
    }

    #[test]
    fn test_empty_log() {
        let log = RunLog::new();
        assert!(log.is_empty());
        assert_eq!(log.best(), None);
        assert_eq!(log.last(), None);
    }

    #[test]
    fn test_keeps_end_order() {
        let mut log = RunLog::new();
        for (n, score) in [(1, 40), (2, 0), (3, 95)] {
            log.record(run(n, score));
        }
        let order: Vec<u32> = log.records().iter().map(|r| r.run).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(log.last().map(|r| r.run), Some(3));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_best_prefers_earlier_run_on_tie() {
        let mut log = RunLog::new();
        log.record(run(1, 12));
        log.record(run(2, 30));
        log.record(run(3, 30));
        log.record(run(4, 7));
        assert_eq!(log.best().map(|r| r.run), Some(2));
    }
}
