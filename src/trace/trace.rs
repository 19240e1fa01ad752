use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    dom::document::{ControlId, ControlKind},
    profile::field_key::FieldKey,
};

/// One fill decision for one control.
///
/// Profile values are personal data and never logged; `value_fingerprint`
/// identifies what was written without revealing it.
#[derive(Debug, Serialize)]
pub struct FillTraceEvent {
    pub timestamp_ms: u128,
    pub control: ControlId,
    pub kind: Option<String>,

    pub hints: Vec<String>,

    pub decision: String,
    pub matched_key: Option<String>,
    pub value_fingerprint: Option<String>,
    pub error: Option<String>,
}

impl FillTraceEvent {
    pub fn now(control: ControlId) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            control,
            kind: None,
            hints: vec![],
            decision: String::new(),
            matched_key: None,
            value_fingerprint: None,
            error: None,
        }
    }

    pub fn with_kind(mut self, kind: &ControlKind) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn with_hints(mut self, hints: &[String]) -> Self {
        self.hints = hints.to_vec();
        self
    }

    pub fn with_decision(mut self, decision: impl ToString) -> Self {
        self.decision = decision.to_string();
        self
    }

    pub fn with_key(mut self, key: &FieldKey) -> Self {
        self.matched_key = Some(key.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value_fingerprint = Some(value_fingerprint(value));
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

pub fn value_fingerprint(value: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
