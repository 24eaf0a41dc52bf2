//! Best-effort cleanup steps.
//!
//! Deleting a classroom, a slot or a student fans out into several independent
//! deletes. Each one is a step: its failure is logged and counted, and the
//! remaining steps still run. Nothing reconciles the leftovers afterwards, so a
//! failed step can leave an orphaned code-index entry or submission behind.

use std::fmt::Display;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub completed: usize,
    /// Logical paths of the steps that failed.
    pub failed: Vec<String>,
}

impl CascadeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one step.
    pub fn step<T, E: Display>(&mut self, path: String, result: Result<T, E>) {
        match result {
            Ok(_) => {
                debug!(step = %path, "Cascade step done");
                self.completed += 1;
            }
            Err(e) => {
                warn!(step = %path, error = %e, "Cascade step failed");
                self.failed.push(path);
            }
        }
    }

    pub fn merge(&mut self, other: CascadeReport) {
        self.completed += other.completed;
        self.failed.extend(other.failed);
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_counted_and_failures_kept() {
        let mut report = CascadeReport::new();
        report.step("a".into(), Ok::<_, String>(true));
        report.step("b".into(), Err::<bool, _>("boom"));

        let mut other = CascadeReport::new();
        other.step("c".into(), Ok::<_, String>(()));
        report.merge(other);

        assert_eq!(report.completed, 2);
        assert_eq!(report.failed, vec!["b".to_string()]);
        assert!(!report.is_clean());
    }
}
