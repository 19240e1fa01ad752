pub mod cli;
pub mod dom;
pub mod extractor;
pub mod filler;
pub mod matcher;
pub mod profile;
pub mod report;
pub mod trace;

pub use crate::{
    dom::{
        document::{ControlId, ControlKind, FormDocument},
        snapshot::SnapshotDocument,
    },
    filler::{
        form_filler::{FormFiller, fill_form},
        outcome::{FillOutcome, FillStatus},
    },
    matcher::field_matcher::find_match,
    profile::{field_key::FieldKey, profile_model::Profile},
};
