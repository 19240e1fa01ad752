use form_autofill::{
    dom::{
        document::{ControlId, ControlKind, FormDocument, HintAttribute},
        error::DomError,
        snapshot::{DocumentSnapshot, SnapshotControl, SnapshotDocument, SnapshotLabel},
    },
    extractor::attributes::extract_hints,
};

fn label(for_id: &str, text: &str) -> SnapshotLabel {
    SnapshotLabel {
        for_id: Some(for_id.into()),
        text: text.into(),
    }
}

fn document(controls: Vec<SnapshotControl>, labels: Vec<SnapshotLabel>) -> SnapshotDocument {
    SnapshotDocument::new(DocumentSnapshot {
        url: None,
        title: None,
        controls,
        labels,
    })
}

// =========================================================================
// Source order and omission
// =========================================================================

#[test]
fn hints_follow_fixed_source_order() {
    let doc = document(
        vec![SnapshotControl {
            name: Some("fname".into()),
            id: Some("first".into()),
            placeholder: Some("Jane".into()),
            aria_label: Some("Given name".into()),
            ..SnapshotControl::input("text")
        }],
        vec![label("first", "First name")],
    );

    assert_eq!(
        extract_hints(&doc, ControlId(0)),
        vec!["fname", "first", "Jane", "Given name", "First name"]
    );
}

#[test]
fn missing_and_empty_sources_are_omitted() {
    let doc = document(
        vec![SnapshotControl {
            name: Some("".into()),
            id: None,
            placeholder: Some("Postcode".into()),
            ..SnapshotControl::input("text")
        }],
        vec![],
    );

    assert_eq!(extract_hints(&doc, ControlId(0)), vec!["Postcode"]);
}

#[test]
fn bare_control_has_no_hints() {
    let doc = document(vec![SnapshotControl::input("text")], vec![]);
    assert!(extract_hints(&doc, ControlId(0)).is_empty());
}

// =========================================================================
// Label lookup
// =========================================================================

#[test]
fn first_matching_label_wins() {
    let doc = document(
        vec![SnapshotControl {
            id: Some("city".into()),
            ..SnapshotControl::input("text")
        }],
        vec![
            label("zip", "Zip"),
            label("city", "Town / City"),
            label("city", "Ignored duplicate"),
        ],
    );

    assert_eq!(extract_hints(&doc, ControlId(0)), vec!["city", "Town / City"]);
}

#[test]
fn label_needs_a_non_empty_id() {
    let doc = document(
        vec![SnapshotControl {
            id: Some("".into()),
            name: Some("q".into()),
            ..SnapshotControl::input("text")
        }],
        vec![label("", "Ghost label")],
    );

    assert_eq!(extract_hints(&doc, ControlId(0)), vec!["q"]);
}

#[test]
fn empty_label_text_is_omitted() {
    let doc = document(
        vec![SnapshotControl {
            id: Some("tel".into()),
            ..SnapshotControl::input("tel")
        }],
        vec![label("tel", "")],
    );

    assert_eq!(extract_hints(&doc, ControlId(0)), vec!["tel"]);
}

#[test]
fn hints_are_not_normalized() {
    let doc = document(
        vec![SnapshotControl {
            aria_label: Some("  E-Mail Address * ".into()),
            ..SnapshotControl::input("email")
        }],
        vec![],
    );

    assert_eq!(extract_hints(&doc, ControlId(0)), vec!["  E-Mail Address * "]);
}

// =========================================================================
// Read failures
// =========================================================================

#[test]
fn unknown_control_yields_no_hints() {
    let doc = document(vec![], vec![label("x", "X")]);
    assert!(extract_hints(&doc, ControlId(3)).is_empty());
}

/// Document whose aria-label and label lookups always fail.
struct FlakyDocument {
    inner: SnapshotDocument,
}

impl FormDocument for FlakyDocument {
    fn controls(&self) -> Vec<ControlId> {
        self.inner.controls()
    }

    fn control_kind(&self, control: ControlId) -> Result<ControlKind, DomError> {
        self.inner.control_kind(control)
    }

    fn attribute(
        &self,
        control: ControlId,
        attribute: HintAttribute,
    ) -> Result<Option<String>, DomError> {
        match attribute {
            HintAttribute::AriaLabel => Err(DomError::UnknownControl(control)),
            other => self.inner.attribute(control, other),
        }
    }

    fn label_text_for(&self, _element_id: &str) -> Result<Option<String>, DomError> {
        Err(DomError::UnknownControl(ControlId(usize::MAX)))
    }

    fn value(&self, control: ControlId) -> Result<String, DomError> {
        self.inner.value(control)
    }

    fn set_value(&mut self, control: ControlId, value: &str) -> Result<(), DomError> {
        self.inner.set_value(control, value)
    }

    fn notify_value_changed(&mut self, control: ControlId) -> Result<(), DomError> {
        self.inner.notify_value_changed(control)
    }
}

#[test]
fn failing_sources_are_skipped_not_propagated() {
    let doc = FlakyDocument {
        inner: document(
            vec![SnapshotControl {
                name: Some("email".into()),
                id: Some("mail".into()),
                aria_label: Some("never read".into()),
                ..SnapshotControl::input("email")
            }],
            vec![label("mail", "never read either")],
        ),
    };

    assert_eq!(extract_hints(&doc, ControlId(0)), vec!["email", "mail"]);
}
