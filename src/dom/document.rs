use std::fmt;

use serde::{Serialize, Serializer};

use crate::dom::error::DomError;

// ============================================================================
// FormDocument trait — what the fill pass needs from a host document
// ============================================================================

/// Position of a control within one document, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ControlId(pub usize);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element attributes that can carry a textual hint, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintAttribute {
    Name,
    Id,
    Placeholder,
    AriaLabel,
}

impl HintAttribute {
    pub const ALL: [HintAttribute; 4] = [
        HintAttribute::Name,
        HintAttribute::Id,
        HintAttribute::Placeholder,
        HintAttribute::AriaLabel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HintAttribute::Name => "name",
            HintAttribute::Id => "id",
            HintAttribute::Placeholder => "placeholder",
            HintAttribute::AriaLabel => "aria-label",
        }
    }
}

/// The host document as seen by the fill pass.
///
/// A live DOM binding implements this over real elements; `SnapshotDocument`
/// implements it in memory. The filler holds `&mut` for a whole pass, so at
/// most one pass writes to a document at a time.
pub trait FormDocument {
    /// Every form control (`input`, `select`, `textarea`) in document order.
    fn controls(&self) -> Vec<ControlId>;

    fn control_kind(&self, control: ControlId) -> Result<ControlKind, DomError>;

    /// Attribute value, `None` when the attribute is absent.
    fn attribute(&self, control: ControlId, attribute: HintAttribute)
    -> Result<Option<String>, DomError>;

    /// Text of the first `<label>` whose `for` equals `element_id`.
    fn label_text_for(&self, element_id: &str) -> Result<Option<String>, DomError>;

    fn value(&self, control: ControlId) -> Result<String, DomError>;

    fn set_value(&mut self, control: ControlId, value: &str) -> Result<(), DomError>;

    /// Announce a programmatic value change to anything observing the page
    /// (input-then-change notifications in a browser).
    fn notify_value_changed(&mut self, control: ControlId) -> Result<(), DomError>;
}

// ============================================================================
// Control kinds
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// Textual input; carries the normalized `type` ("text", "email", "tel", ...)
    Text(String),
    TextArea,
    Select,
    /// "checkbox" or "radio"
    Checkable(String),
    File,
    Hidden,
    Submit,
    Button,
    Reset,
    Image,
}

impl ControlKind {
    /// Derive the kind from the element tag and its `type` attribute.
    pub fn from_tag(tag: &str, input_type: Option<&str>) -> Self {
        let tag = tag.to_ascii_lowercase();
        match tag.as_str() {
            "textarea" => return ControlKind::TextArea,
            "select" => return ControlKind::Select,
            "button" => return ControlKind::Button,
            _ => {}
        }

        let input_type = input_type
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "text".to_string());

        match input_type.as_str() {
            "hidden" => ControlKind::Hidden,
            "submit" => ControlKind::Submit,
            "button" => ControlKind::Button,
            "reset" => ControlKind::Reset,
            "image" => ControlKind::Image,
            "file" => ControlKind::File,
            "checkbox" | "radio" => ControlKind::Checkable(input_type),
            _ => ControlKind::Text(input_type),
        }
    }

    /// Whether the control carries user data at all.
    pub fn is_fillable(&self) -> bool {
        !matches!(
            self,
            ControlKind::Hidden
                | ControlKind::Submit
                | ControlKind::Button
                | ControlKind::Reset
                | ControlKind::Image
        )
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Text(t) | ControlKind::Checkable(t) => f.write_str(t),
            ControlKind::TextArea => f.write_str("textarea"),
            ControlKind::Select => f.write_str("select"),
            ControlKind::File => f.write_str("file"),
            ControlKind::Hidden => f.write_str("hidden"),
            ControlKind::Submit => f.write_str("submit"),
            ControlKind::Button => f.write_str("button"),
            ControlKind::Reset => f.write_str("reset"),
            ControlKind::Image => f.write_str("image"),
        }
    }
}

impl Serialize for ControlKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
