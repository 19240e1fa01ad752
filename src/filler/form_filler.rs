use crate::dom::document::{ControlId, ControlKind, FormDocument};
use crate::extractor::attributes::extract_hints;
use crate::filler::outcome::{FillOutcome, FilledControl, SkipReason, SkippedControl};
use crate::matcher::field_matcher::find_match;
use crate::profile::field_key::FieldKey;
use crate::profile::profile_model::Profile;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::FillTraceEvent;

/// Fill every matching control of `document` from `profile`.
pub fn fill_form<D: FormDocument + ?Sized>(document: &mut D, profile: &Profile) -> FillOutcome {
    FormFiller::new().fill(document, profile)
}

/// A single-pass form filler.
///
/// Holds no state between passes; the builder options only narrow which
/// profile keys take part and where decisions are traced.
#[derive(Default)]
pub struct FormFiller<'a> {
    excluded: Vec<FieldKey>,
    tracer: Option<&'a TraceLogger>,
}

impl<'a> FormFiller<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys that must never be matched, on top of the profile name.
    pub fn with_excluded_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldKey>,
    {
        self.excluded.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn with_tracer(mut self, tracer: &'a TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Run one pass over all controls. Per-control failures are recorded in
    /// the outcome and never stop the pass.
    pub fn fill<D: FormDocument + ?Sized>(&self, document: &mut D, profile: &Profile) -> FillOutcome {
        let keys: Vec<&FieldKey> = profile
            .keys()
            .filter(|key| !self.excluded.contains(key))
            .collect();

        let mut outcome = FillOutcome::new();

        for control in document.controls() {
            outcome.controls_visited += 1;
            match self.fill_control(document, control, &keys, profile) {
                Ok(filled) => outcome.filled.push(filled),
                Err(skipped) => outcome.skipped.push(skipped),
            }
        }

        outcome
    }

    fn fill_control<D: FormDocument + ?Sized>(
        &self,
        document: &mut D,
        control: ControlId,
        keys: &[&FieldKey],
        profile: &Profile,
    ) -> Result<FilledControl, SkippedControl> {
        let event = FillTraceEvent::now(control);

        let kind = match document.control_kind(control) {
            Ok(kind) => kind,
            Err(e) => {
                self.trace(event.with_decision("unreadable").with_error(&e));
                return Err(SkippedControl {
                    control,
                    kind: None,
                    hint: None,
                    reason: SkipReason::Unreadable {
                        error: e.to_string(),
                    },
                });
            }
        };

        let event = event.with_kind(&kind);

        if !kind.is_fillable() {
            self.trace(event.with_decision("not_fillable"));
            return Err(SkippedControl {
                control,
                kind: Some(kind),
                hint: None,
                reason: SkipReason::NotFillable,
            });
        }

        let hints = extract_hints(document, control);
        let hint = hints.first().cloned();
        let event = event.with_hints(&hints);

        let skipped = |kind: ControlKind, hint: Option<String>, reason: SkipReason| SkippedControl {
            control,
            kind: Some(kind),
            hint,
            reason,
        };

        let Some(key) = find_match(&hints, keys.iter().copied()) else {
            self.trace(event.with_decision("no_match"));
            return Err(skipped(kind, hint, SkipReason::NoMatch));
        };

        let event = event.with_key(key);

        let Some(value) = profile.value(key) else {
            self.trace(event.with_decision("empty_value"));
            return Err(skipped(kind, hint, SkipReason::EmptyValue { key: key.clone() }));
        };

        let written = document
            .set_value(control, value)
            .and_then(|()| document.notify_value_changed(control));

        match written {
            Ok(()) => {
                self.trace(event.with_decision("filled").with_value(value));
                Ok(FilledControl {
                    control,
                    kind,
                    key: key.clone(),
                    hint,
                })
            }
            Err(e) => {
                self.trace(event.with_decision("write_failed").with_error(&e));
                Err(skipped(
                    kind,
                    hint,
                    SkipReason::WriteFailed {
                        key: key.clone(),
                        error: e.to_string(),
                    },
                ))
            }
        }
    }

    fn trace(&self, event: FillTraceEvent) {
        if let Some(tracer) = self.tracer {
            tracer.log(&event);
        }
    }
}
