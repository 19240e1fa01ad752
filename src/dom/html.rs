use scraper::{ElementRef, Html, Selector};

use crate::dom::snapshot::{DocumentSnapshot, SnapshotControl, SnapshotLabel};

/// Parse an HTML page into a snapshot of its form controls and labels.
///
/// Controls are `input`, `select` and `textarea` elements in document order.
/// Label text is whitespace-collapsed text content, close to what a browser
/// renders as the label's visible text.
pub fn parse_html(html: &str) -> DocumentSnapshot {
    let document = Html::parse_document(html);

    DocumentSnapshot {
        url: None,
        title: extract_title(&document),
        controls: extract_controls(&document),
        labels: extract_labels(&document),
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(collapsed_text)
        .filter(|t| !t.is_empty())
}

fn extract_controls(document: &Html) -> Vec<SnapshotControl> {
    let Ok(selector) = Selector::parse("input, select, textarea") else {
        return Vec::new();
    };

    document.select(&selector).map(to_control).collect()
}

fn extract_labels(document: &Html) -> Vec<SnapshotLabel> {
    let Ok(selector) = Selector::parse("label") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|label| SnapshotLabel {
            for_id: attr(label, "for"),
            text: collapsed_text(label),
        })
        .collect()
}

fn to_control(el: ElementRef) -> SnapshotControl {
    let tag = el.value().name().to_ascii_lowercase();

    let (value, options) = match tag.as_str() {
        "textarea" => (el.text().collect::<String>(), Vec::new()),
        "select" => select_state(el),
        _ => (attr(el, "value").unwrap_or_default(), Vec::new()),
    };

    SnapshotControl {
        r#type: attr(el, "type"),
        name: attr(el, "name"),
        id: attr(el, "id"),
        placeholder: attr(el, "placeholder"),
        aria_label: attr(el, "aria-label"),
        value,
        options,
        tag,
    }
}

/// Current value and option values of a `<select>`.
///
/// The value is the first `selected` option, else the first option, the way
/// a single-choice select initializes.
fn select_state(el: ElementRef) -> (String, Vec<String>) {
    let Ok(selector) = Selector::parse("option") else {
        return (String::new(), Vec::new());
    };

    let mut options = Vec::new();
    let mut selected = None;

    for option in el.select(&selector) {
        let value = attr(option, "value").unwrap_or_else(|| collapsed_text(option));
        if selected.is_none() && option.value().attr("selected").is_some() {
            selected = Some(value.clone());
        }
        options.push(value);
    }

    let value = selected
        .or_else(|| options.first().cloned())
        .unwrap_or_default();
    (value, options)
}

fn attr(el: ElementRef, name: &str) -> Option<String> {
    el.value().attr(name).map(|v| v.to_string())
}

fn collapsed_text(el: ElementRef) -> String {
    el.text()
        .flat_map(|chunk| chunk.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
