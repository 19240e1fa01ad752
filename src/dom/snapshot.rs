use serde::{Deserialize, Serialize};

use crate::dom::document::{ControlId, ControlKind, FormDocument, HintAttribute};
use crate::dom::error::DomError;

// ============================================================================
// Snapshot model — the JSON shape a DOM extractor produces
// ============================================================================

/// One form control as captured from a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotControl {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(rename = "ariaLabel", default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub value: String,
    /// Option values of a `<select>`; empty for every other control.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl SnapshotControl {
    pub fn input(input_type: &str) -> Self {
        Self {
            tag: "input".into(),
            r#type: Some(input_type.into()),
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ControlKind {
        ControlKind::from_tag(&self.tag, self.r#type.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotLabel {
    #[serde(rename = "for", default, skip_serializing_if = "Option::is_none")]
    pub for_id: Option<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub controls: Vec<SnapshotControl>,
    #[serde(default)]
    pub labels: Vec<SnapshotLabel>,
}

// ============================================================================
// Change notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Input,
    Change,
}

/// A notification dispatched at a control after a programmatic write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub control: ControlId,
    pub kind: EventKind,
    pub bubbles: bool,
}

// ============================================================================
// SnapshotDocument — in-memory FormDocument
// ============================================================================

/// In-memory document over a `DocumentSnapshot`.
///
/// Writes land in the snapshot; notifications are appended to an event log
/// so callers can see what an observing framework would have received.
#[derive(Debug, Clone, Default)]
pub struct SnapshotDocument {
    snapshot: DocumentSnapshot,
    events: Vec<ChangeEvent>,
}

impl SnapshotDocument {
    pub fn new(snapshot: DocumentSnapshot) -> Self {
        Self {
            snapshot,
            events: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let snapshot: DocumentSnapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &DocumentSnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> DocumentSnapshot {
        self.snapshot
    }

    pub fn events(&self) -> &[ChangeEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Display title: page title, then URL.
    pub fn title(&self) -> &str {
        self.snapshot
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.snapshot.url.as_deref())
            .unwrap_or("<untitled>")
    }

    fn control(&self, control: ControlId) -> Result<&SnapshotControl, DomError> {
        self.snapshot
            .controls
            .get(control.0)
            .ok_or(DomError::UnknownControl(control))
    }

    fn control_mut(&mut self, control: ControlId) -> Result<&mut SnapshotControl, DomError> {
        self.snapshot
            .controls
            .get_mut(control.0)
            .ok_or(DomError::UnknownControl(control))
    }
}

impl FormDocument for SnapshotDocument {
    fn controls(&self) -> Vec<ControlId> {
        (0..self.snapshot.controls.len()).map(ControlId).collect()
    }

    fn control_kind(&self, control: ControlId) -> Result<ControlKind, DomError> {
        Ok(self.control(control)?.kind())
    }

    fn attribute(
        &self,
        control: ControlId,
        attribute: HintAttribute,
    ) -> Result<Option<String>, DomError> {
        let el = self.control(control)?;
        let value = match attribute {
            HintAttribute::Name => &el.name,
            HintAttribute::Id => &el.id,
            HintAttribute::Placeholder => &el.placeholder,
            HintAttribute::AriaLabel => &el.aria_label,
        };
        Ok(value.clone())
    }

    fn label_text_for(&self, element_id: &str) -> Result<Option<String>, DomError> {
        Ok(self
            .snapshot
            .labels
            .iter()
            .find(|label| label.for_id.as_deref() == Some(element_id))
            .map(|label| label.text.clone()))
    }

    fn value(&self, control: ControlId) -> Result<String, DomError> {
        Ok(self.control(control)?.value.clone())
    }

    fn set_value(&mut self, control: ControlId, value: &str) -> Result<(), DomError> {
        let el = self.control_mut(control)?;

        match el.kind() {
            ControlKind::File if !value.is_empty() => {
                return Err(DomError::ReadOnlyValue {
                    control,
                    kind: ControlKind::File,
                });
            }
            ControlKind::Select
                if !el.options.is_empty() && !el.options.iter().any(|o| o == value) =>
            {
                return Err(DomError::UnknownOption {
                    control,
                    value: value.to_string(),
                });
            }
            _ => {}
        }

        el.value = value.to_string();
        Ok(())
    }

    fn notify_value_changed(&mut self, control: ControlId) -> Result<(), DomError> {
        self.control(control)?;

        for kind in [EventKind::Input, EventKind::Change] {
            self.events.push(ChangeEvent {
                control,
                kind,
                bubbles: true,
            });
        }
        Ok(())
    }
}
