use crate::filler::outcome::{FillOutcome, SkipReason, SkippedControl};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a fill outcome for terminal output.
///
/// Produces output like:
/// ```text
/// === Fill: Checkout ===
///
/// ✓ FILL  #0 text "first_name" -> firstName
/// - SKIP  #2 submit (not fillable)
///
/// === Results: 1 filled, 1 skipped (2 controls) ===
/// ```
pub fn format_console_report(title: &str, outcome: &FillOutcome) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Fill: {} ===\n\n", title));

    let mut lines: Vec<(usize, String)> = outcome
        .filled
        .iter()
        .map(|f| {
            (
                f.control.0,
                format!(
                    "\u{2713} FILL  {} {}{} -> {}\n",
                    f.control,
                    f.kind,
                    format_hint(f.hint.as_deref()),
                    f.key
                ),
            )
        })
        .collect();

    lines.extend(
        outcome
            .skipped
            .iter()
            .map(|s| (s.control.0, format_skipped(s))),
    );

    // Document order, not filled-then-skipped
    lines.sort_by_key(|(idx, _)| *idx);
    for (_, line) in lines {
        out.push_str(&line);
    }

    out.push_str(&format!(
        "\n=== Results: {} filled, {} skipped ({} controls) ===\n",
        outcome.filled.len(),
        outcome.skipped.len(),
        outcome.controls_visited
    ));

    out
}

fn format_skipped(s: &SkippedControl) -> String {
    let kind = s
        .kind
        .as_ref()
        .map(|k| k.to_string())
        .unwrap_or_else(|| "?".to_string());

    format!(
        "- SKIP  {} {}{} ({})\n",
        s.control,
        kind,
        format_hint(s.hint.as_deref()),
        format_reason(&s.reason)
    )
}

fn format_hint(hint: Option<&str>) -> String {
    match hint {
        Some(h) => format!(" \"{}\"", h),
        None => String::new(),
    }
}

fn format_reason(reason: &SkipReason) -> String {
    match reason {
        SkipReason::NotFillable => "not fillable".to_string(),
        SkipReason::Unreadable { error } => format!("unreadable: {}", error),
        SkipReason::NoMatch => "no match".to_string(),
        SkipReason::EmptyValue { key } => format!("{} is empty", key),
        SkipReason::WriteFailed { key, error } => format!("{} not written: {}", key, error),
    }
}
