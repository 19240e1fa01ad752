use serde::{Deserialize, Serialize};

use crate::dom::document::FormDocument;
use crate::filler::form_filler::FormFiller;
use crate::filler::outcome::FillStatus;
use crate::profile::profile_model::Profile;

pub const FILL_FORM_ACTION: &str = "FILL_FORM";

/// Message asking the filler to act on the current document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRequest {
    pub action: String,
    #[serde(default)]
    pub profile: Profile,
}

impl FillRequest {
    pub fn fill_form(profile: Profile) -> Self {
        Self {
            action: FILL_FORM_ACTION.to_string(),
            profile,
        }
    }
}

/// Acknowledgment sent back once a handled request completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillResponse {
    pub status: FillStatus,
}

/// Handle one request against `document`.
///
/// Returns `None` for any action other than `FILL_FORM`; the sender gets no
/// response for messages it was not meant to receive one for.
pub fn handle_request<D: FormDocument + ?Sized>(
    document: &mut D,
    request: &FillRequest,
    filler: &FormFiller,
) -> Option<FillResponse> {
    if request.action != FILL_FORM_ACTION {
        return None;
    }

    let outcome = filler.fill(document, &request.profile);
    Some(FillResponse {
        status: outcome.status,
    })
}
