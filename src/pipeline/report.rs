//! Per-group outcome reporting.
//!
//! This module contains the [`GroupReport`] struct and [`GroupStatus`] enum
//! describing how an asset group fared: whether every fragment was verified
//! and the archive was extracted, or why the group stopped short.

use crate::error::Error;
use crate::fragment::Summary;

/// Group status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupStatus {
    /// Every fragment was verified and the archive was extracted.
    Complete,
    /// Fewer fragments than expected were verified; assembly was skipped.
    Incomplete {
        /// Number of fragments that passed verification.
        verified: usize,
        /// Number of fragments the group expects.
        expected: usize,
    },
    /// Assembly or extraction failed after a full download.
    Failed(String),
}

/// Represents the outcome of one asset group.
#[derive(Debug, Clone)]
pub struct GroupReport {
    /// Name of the group.
    name: String,
    /// Per-fragment summaries, in specification order.
    summaries: Vec<Summary>,
    /// Outcome.
    status: GroupStatus,
}

impl GroupReport {
    /// Create a new [`GroupReport`].
    pub fn new(name: impl Into<String>, summaries: Vec<Summary>, status: GroupStatus) -> Self {
        Self {
            name: name.into(),
            summaries,
            status,
        }
    }

    /// The group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-fragment summaries, in specification order.
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// The group's outcome.
    pub fn status(&self) -> &GroupStatus {
        &self.status
    }

    /// Whether the group completed end to end.
    pub fn is_complete(&self) -> bool {
        self.status == GroupStatus::Complete
    }

    /// Convert the report into a result, keeping the fragment summaries on
    /// success and surfacing the group outcome as an [`Error`] otherwise.
    pub fn into_result(self) -> crate::error::Result<Vec<Summary>> {
        match self.status {
            GroupStatus::Complete => Ok(self.summaries),
            GroupStatus::Incomplete { verified, expected } => Err(Error::IncompleteGroup {
                group: self.name,
                verified,
                expected,
            }),
            GroupStatus::Failed(message) => Err(Error::Internal(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_status_equality() {
        assert_eq!(GroupStatus::Complete, GroupStatus::Complete);
        assert_eq!(
            GroupStatus::Incomplete {
                verified: 2,
                expected: 4
            },
            GroupStatus::Incomplete {
                verified: 2,
                expected: 4
            }
        );
        assert_ne!(
            GroupStatus::Complete,
            GroupStatus::Failed("boom".to_string())
        );
    }

    #[test]
    fn test_report_complete() {
        let report = GroupReport::new("tool", Vec::new(), GroupStatus::Complete);
        assert_eq!(report.name(), "tool");
        assert!(report.is_complete());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_report_incomplete_into_result() {
        let report = GroupReport::new(
            "tool",
            Vec::new(),
            GroupStatus::Incomplete {
                verified: 3,
                expected: 4,
            },
        );
        assert!(!report.is_complete());

        match report.into_result() {
            Err(Error::IncompleteGroup {
                group,
                verified,
                expected,
            }) => {
                assert_eq!(group, "tool");
                assert_eq!(verified, 3);
                assert_eq!(expected, 4);
            }
            other => panic!("Expected IncompleteGroup error, got {:?}", other),
        }
    }

    #[test]
    fn test_report_failed_into_result() {
        let report = GroupReport::new(
            "tool",
            Vec::new(),
            GroupStatus::Failed("archive unreadable".to_string()),
        );
        assert!(report.into_result().is_err());
    }
}
