use std::io::{BufRead, Write};
use std::time::Duration;

use crate::cli::config::{AppConfig, FetchConfig};
use crate::dom::html::parse_html;
use crate::dom::snapshot::{DocumentSnapshot, SnapshotDocument};
use crate::filler::error::AutofillError;
use crate::filler::form_filler::FormFiller;
use crate::filler::outcome::FillOutcome;
use crate::filler::request::{FillRequest, handle_request};
use crate::matcher::field_matcher::find_match;
use crate::matcher::normalize::normalize_hints;
use crate::profile::field_key::FieldKey;
use crate::profile::profile_model::Profile;
use crate::report::console::format_console_report;
use crate::trace::logger::TraceLogger;

// ============================================================================
// fill subcommand
// ============================================================================

/// Fill a page from a profile, print the report, optionally save the result.
pub fn cmd_fill(
    page: &str,
    profile_path: &str,
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<FillOutcome, Box<dyn std::error::Error>> {
    let mut document = load_page(page, &config.fetch)?;
    let profile = load_profile(profile_path)?;

    if verbose > 0 {
        eprintln!(
            "Filling {} controls on {} from {} profile fields...",
            document.snapshot().controls.len(),
            document.title(),
            profile.len()
        );
    }

    let filler = build_filler(config, tracer);
    let outcome = filler.fill(&mut document, &profile);

    let report = match format {
        "json" => serde_json::to_string_pretty(&outcome).map_err(|e| {
            AutofillError::JsonSerialize {
                context: "fill outcome".into(),
                source: e,
            }
        })? + "\n",
        _ => format_console_report(document.title(), &outcome),
    };
    print!("{}", report);

    if let Some(path) = output {
        write_snapshot(path, document.snapshot())?;
        if verbose > 0 {
            eprintln!("  Wrote: {}", path);
        }
    }

    Ok(outcome)
}

// ============================================================================
// match subcommand
// ============================================================================

/// Resolve the key a set of hints matches, printing the normalized hints.
pub fn cmd_match(
    hints: &[String],
    profile_path: Option<&str>,
    config: &AppConfig,
) -> Result<Option<FieldKey>, Box<dyn std::error::Error>> {
    let keys: Vec<FieldKey> = match profile_path {
        Some(path) => load_profile(path)?.keys().cloned().collect(),
        None => FieldKey::known().to_vec(),
    };
    let excluded = excluded_keys(config);
    let candidates = keys.iter().filter(|k| !excluded.contains(k));

    println!("hints: {:?}", normalize_hints(hints));

    let matched = find_match(hints, candidates).cloned();
    match &matched {
        Some(key) => println!("match: {}", key),
        None => println!("match: <none>"),
    }

    Ok(matched)
}

// ============================================================================
// serve subcommand
// ============================================================================

pub fn cmd_serve(
    page: &str,
    output: Option<&str>,
    config: &AppConfig,
    tracer: &TraceLogger,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut document = load_page(page, &config.fetch)?;
    let filler = build_filler(config, tracer);

    if verbose > 0 {
        eprintln!("Serving fill requests for {}...", document.title());
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled = serve_requests(
        &mut document,
        &filler,
        stdin.lock(),
        stdout.lock(),
        verbose,
    )?;

    if verbose > 0 {
        eprintln!("Handled {} requests", handled);
    }

    if let Some(path) = output {
        write_snapshot(path, document.snapshot())?;
    }

    Ok(())
}

/// Read one JSON `FillRequest` per line and write one JSON response per
/// handled request. Malformed lines and unknown actions get no response.
/// Returns the number of requests answered.
pub fn serve_requests<R: BufRead, W: Write>(
    document: &mut SnapshotDocument,
    filler: &FormFiller,
    reader: R,
    mut writer: W,
    verbose: u8,
) -> Result<usize, AutofillError> {
    let mut handled = 0;

    for line in reader.lines() {
        let line = line.map_err(|e| AutofillError::Io {
            path: "<stdin>".into(),
            source: e,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let request: FillRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Warning: ignoring malformed request: {}", e);
                continue;
            }
        };

        let Some(response) = handle_request(document, &request, filler) else {
            if verbose > 1 {
                eprintln!("  Ignored action: {}", request.action);
            }
            continue;
        };

        let json = serde_json::to_string(&response).map_err(|e| AutofillError::JsonSerialize {
            context: "fill response".into(),
            source: e,
        })?;
        writeln!(writer, "{}", json)
            .and_then(|()| writer.flush())
            .map_err(|e| AutofillError::Io {
                path: "<stdout>".into(),
                source: e,
            })?;
        handled += 1;
    }

    Ok(handled)
}

// ============================================================================
// Loading
// ============================================================================

/// Load a page from an http(s) URL, a JSON snapshot file, or an HTML file.
pub fn load_page(source: &str, fetch: &FetchConfig) -> Result<SnapshotDocument, AutofillError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let html = fetch_page(source, fetch)?;
        let mut snapshot = parse_html(&html);
        snapshot.url = Some(source.to_string());
        return Ok(SnapshotDocument::new(snapshot));
    }

    let content = read_file(source)?;

    if source.ends_with(".json") {
        return SnapshotDocument::from_json(&content).map_err(|e| AutofillError::JsonParse {
            context: format!("snapshot {}", source),
            source: e,
        });
    }

    let mut snapshot = parse_html(&content);
    snapshot.url = Some(source.to_string());
    Ok(SnapshotDocument::new(snapshot))
}

/// Load a profile from a JSON or YAML file, keeping field order.
pub fn load_profile(path: &str) -> Result<Profile, AutofillError> {
    let content = read_file(path)?;

    if path.ends_with(".yaml") || path.ends_with(".yml") {
        serde_yaml::from_str(&content).map_err(|e| AutofillError::YamlParse {
            context: format!("profile {}", path),
            source: e,
        })
    } else {
        serde_json::from_str(&content).map_err(|e| AutofillError::JsonParse {
            context: format!("profile {}", path),
            source: e,
        })
    }
}

fn fetch_page(url: &str, fetch: &FetchConfig) -> Result<String, AutofillError> {
    let fetch_error = |e: reqwest::Error| AutofillError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(fetch.timeout_secs))
        .user_agent(fetch.user_agent.clone())
        .build()
        .map_err(fetch_error)?;

    client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.text())
        .map_err(fetch_error)
}

fn read_file(path: &str) -> Result<String, AutofillError> {
    std::fs::read_to_string(path).map_err(|e| AutofillError::Io {
        path: path.to_string(),
        source: e,
    })
}

fn write_snapshot(path: &str, snapshot: &DocumentSnapshot) -> Result<(), AutofillError> {
    let json = serde_json::to_string_pretty(snapshot).map_err(|e| AutofillError::JsonSerialize {
        context: "document snapshot".into(),
        source: e,
    })?;
    std::fs::write(path, json).map_err(|e| AutofillError::Io {
        path: path.to_string(),
        source: e,
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the filler from config: excluded keys and the trace sink.
pub fn build_filler<'a>(config: &AppConfig, tracer: &'a TraceLogger) -> FormFiller<'a> {
    let filler = FormFiller::new().with_excluded_keys(excluded_keys(config));
    if tracer.is_enabled() {
        filler.with_tracer(tracer)
    } else {
        filler
    }
}

fn excluded_keys(config: &AppConfig) -> Vec<FieldKey> {
    config
        .fill
        .exclude_keys
        .iter()
        .map(|k| FieldKey::from(k.as_str()))
        .collect()
}
