use crate::dom::document::{ControlId, FormDocument, HintAttribute};

/// Collect the raw textual hints of one control.
///
/// Order: `name`, `id`, `placeholder`, `aria-label`, then the text of the
/// first `<label for=id>` when the control has an id. Missing, empty or
/// unreadable sources are left out. No normalization happens here.
pub fn extract_hints<D: FormDocument + ?Sized>(document: &D, control: ControlId) -> Vec<String> {
    let mut hints: Vec<String> = HintAttribute::ALL
        .iter()
        .filter_map(|attribute| document.attribute(control, *attribute).ok().flatten())
        .filter(|hint| !hint.is_empty())
        .collect();

    let element_id = document
        .attribute(control, HintAttribute::Id)
        .ok()
        .flatten()
        .filter(|id| !id.is_empty());

    if let Some(id) = element_id {
        if let Ok(Some(text)) = document.label_text_for(&id) {
            if !text.is_empty() {
                hints.push(text);
            }
        }
    }

    hints
}
