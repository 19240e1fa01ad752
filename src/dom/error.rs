use std::fmt;

use crate::dom::document::{ControlId, ControlKind};

/// Failure reading or writing one control. Never fatal to a fill pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// Control id does not exist in this document
    UnknownControl(ControlId),

    /// Control kind does not accept a programmatic value (file inputs)
    ReadOnlyValue { control: ControlId, kind: ControlKind },

    /// Select control has no option with the requested value
    UnknownOption { control: ControlId, value: String },
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomError::UnknownControl(control) => {
                write!(f, "Control {} not found", control)
            }
            DomError::ReadOnlyValue { control, kind } => {
                write!(f, "Control {} ({}) does not accept a value", control, kind)
            }
            DomError::UnknownOption { control, value } => {
                write!(f, "Control {} has no option '{}'", control, value)
            }
        }
    }
}

impl std::error::Error for DomError {}
