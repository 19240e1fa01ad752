use serde::{Deserialize, Serialize};

use crate::dom::document::{ControlId, ControlKind};
use crate::profile::field_key::FieldKey;

// ============================================================================
// Fill outcome — what one pass did to each control
// ============================================================================

/// Acknowledgment of a pass. A pass always completes, so there is only one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStatus {
    Success,
}

/// Why a control was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// Hidden fields and buttons carry no user data
    NotFillable,
    /// Control kind could not be read
    Unreadable { error: String },
    NoMatch,
    /// Matched a key whose profile value is absent or empty
    EmptyValue { key: FieldKey },
    /// The document rejected the write or the notification
    WriteFailed { key: FieldKey, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilledControl {
    pub control: ControlId,
    pub kind: ControlKind,
    pub key: FieldKey,
    /// First extracted hint, for display
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedControl {
    pub control: ControlId,
    pub kind: Option<ControlKind>,
    pub hint: Option<String>,
    #[serde(flatten)]
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillOutcome {
    pub status: FillStatus,
    pub controls_visited: usize,
    pub filled: Vec<FilledControl>,
    pub skipped: Vec<SkippedControl>,
}

impl FillOutcome {
    pub fn new() -> Self {
        Self {
            status: FillStatus::Success,
            controls_visited: 0,
            filled: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Key written into `control`, if the pass filled it.
    pub fn key_for(&self, control: ControlId) -> Option<&FieldKey> {
        self.filled
            .iter()
            .find(|f| f.control == control)
            .map(|f| &f.key)
    }

    /// Skip reason for `control`, if the pass left it untouched.
    pub fn skip_reason(&self, control: ControlId) -> Option<&SkipReason> {
        self.skipped
            .iter()
            .find(|s| s.control == control)
            .map(|s| &s.reason)
    }
}

impl Default for FillOutcome {
    fn default() -> Self {
        Self::new()
    }
}
