mod common;

use clap::Parser;
use common::{fixture, temp_path};
use form_autofill::cli::commands::{build_filler, cmd_fill, cmd_match, load_page, load_profile};
use form_autofill::cli::config::{AppConfig, Cli, Commands, load_config, resolve_trace_path};
use form_autofill::dom::document::{ControlId, FormDocument};
use form_autofill::dom::snapshot::{DocumentSnapshot, SnapshotDocument};
use form_autofill::filler::error::AutofillError;
use form_autofill::profile::field_key::FieldKey;
use form_autofill::trace::logger::TraceLogger;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_fill_minimal() {
    let cli = Cli::parse_from([
        "form-autofill",
        "fill",
        "--page",
        "signup.html",
        "--profile",
        "me.json",
    ]);
    match cli.command {
        Commands::Fill {
            page,
            profile,
            format,
            output,
        } => {
            assert_eq!(page, "signup.html");
            assert_eq!(profile, "me.json");
            assert_eq!(format, "console");
            assert!(output.is_none());
        }
        _ => panic!("Expected Fill command"),
    }
}

#[test]
fn cli_parse_fill_all_args() {
    let cli = Cli::parse_from([
        "form-autofill",
        "fill",
        "--page",
        "https://example.com/signup",
        "--profile",
        "me.yaml",
        "--format",
        "json",
        "-o",
        "filled.json",
    ]);
    match cli.command {
        Commands::Fill {
            page,
            profile,
            format,
            output,
        } => {
            assert_eq!(page, "https://example.com/signup");
            assert_eq!(profile, "me.yaml");
            assert_eq!(format, "json");
            assert_eq!(output, Some("filled.json".to_string()));
        }
        _ => panic!("Expected Fill command"),
    }
}

#[test]
fn cli_parse_match_repeated_hints() {
    let cli = Cli::parse_from([
        "form-autofill",
        "match",
        "--hint",
        "billing_first_name",
        "--hint",
        "First name",
    ]);
    match cli.command {
        Commands::Match { hints, profile } => {
            assert_eq!(hints, vec!["billing_first_name", "First name"]);
            assert!(profile.is_none());
        }
        _ => panic!("Expected Match command"),
    }
}

#[test]
fn cli_parse_match_requires_a_hint() {
    let result = Cli::try_parse_from(["form-autofill", "match"]);
    assert!(result.is_err());
}

#[test]
fn cli_parse_serve() {
    let cli = Cli::parse_from(["form-autofill", "serve", "--page", "checkout.json"]);
    match cli.command {
        Commands::Serve { page, output } => {
            assert_eq!(page, "checkout.json");
            assert!(output.is_none());
        }
        _ => panic!("Expected Serve command"),
    }
}

#[test]
fn cli_parse_global_flags() {
    let cli = Cli::parse_from([
        "form-autofill",
        "-vv",
        "--config",
        "custom.yaml",
        "--trace",
        "fill.jsonl",
        "serve",
        "--page",
        "p.html",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some("custom.yaml".to_string()));
    assert_eq!(cli.trace, Some("fill.jsonl".to_string()));
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_load_missing_file() {
    let config = load_config(Some("nonexistent_file_that_does_not_exist.yaml"));
    // Should return defaults without error
    assert!(config.fill.exclude_keys.is_empty());
    assert!(config.trace.path.is_none());
    assert_eq!(config.fetch.timeout_secs, 30);
    assert!(config.fetch.user_agent.starts_with("form-autofill/"));
}

#[test]
fn config_load_fixture() {
    let config = load_config(Some(&fixture("config.yaml")));
    assert_eq!(config.fill.exclude_keys, vec!["id", "userId"]);
    assert_eq!(
        config.trace.path.as_deref(),
        Some("/tmp/form-autofill-trace.jsonl")
    );
    assert_eq!(config.fetch.timeout_secs, 5);
    // Unset fields keep their defaults
    assert!(config.fetch.user_agent.starts_with("form-autofill/"));
}

#[test]
fn config_partial_yaml() {
    let yaml = r#"
fetch:
  user_agent: "test-agent"
"#;
    let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.fetch.user_agent, "test-agent");
    assert_eq!(config.fetch.timeout_secs, 30);
    assert!(config.fill.exclude_keys.is_empty());
}

#[test]
fn trace_path_flag_overrides_config() {
    let config = load_config(Some(&fixture("config.yaml")));

    assert_eq!(
        resolve_trace_path(Some("cli.jsonl"), &config),
        Some("cli.jsonl")
    );
    assert_eq!(
        resolve_trace_path(None, &config),
        Some("/tmp/form-autofill-trace.jsonl")
    );
    assert_eq!(resolve_trace_path(None, &AppConfig::default()), None);
}

// ============================================================================
// Loading Tests
// ============================================================================

#[test]
fn load_page_from_json_snapshot() {
    let doc = load_page(&fixture("checkout.json"), &AppConfig::default().fetch).unwrap();
    assert_eq!(doc.title(), "Checkout");
    assert_eq!(doc.controls().len(), 6);
    assert_eq!(
        doc.snapshot().url.as_deref(),
        Some("https://shop.example/checkout")
    );
}

#[test]
fn load_page_from_html_file() {
    let path = fixture("signup.html");
    let doc = load_page(&path, &AppConfig::default().fetch).unwrap();
    assert_eq!(doc.title(), "Create your account");
    assert_eq!(doc.controls().len(), 9);
    assert_eq!(doc.snapshot().url.as_deref(), Some(path.as_str()));
}

#[test]
fn load_page_missing_file_is_io_error() {
    let result = load_page("no_such_page.html", &AppConfig::default().fetch);
    assert!(matches!(result, Err(AutofillError::Io { .. })));
}

#[test]
fn load_profile_yaml_keeps_order() {
    let profile = load_profile(&fixture("profile.yaml")).unwrap();
    let keys: Vec<&FieldKey> = profile.keys().collect();
    assert_eq!(
        keys,
        vec![
            &FieldKey::ProfileName,
            &FieldKey::LastName,
            &FieldKey::FirstName,
            &FieldKey::City,
            &FieldKey::Zip,
        ]
    );
    assert_eq!(profile.value(&FieldKey::Zip), Some("SW1Y 4JH"));
}

#[test]
fn load_profile_json_api_record() {
    let profile = load_profile(&fixture("profile.json")).unwrap();
    assert_eq!(profile.keys().next(), Some(&FieldKey::from("id")));
    assert_eq!(profile.value(&FieldKey::from("id")), Some("3"));
    assert_eq!(profile.value(&FieldKey::FirstName), Some("Ada"));
}

#[test]
fn load_profile_rejects_non_object() {
    let path = temp_path("list_profile.json");
    std::fs::write(&path, "[\"Ada\"]").unwrap();

    let result = load_profile(&path);
    assert!(matches!(result, Err(AutofillError::JsonParse { .. })));

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn cmd_match_against_known_fields() {
    let hints = vec!["billing_postcode".to_string(), "Postcode".to_string()];
    let matched = cmd_match(&hints, None, &AppConfig::default()).unwrap();
    assert_eq!(matched, Some(FieldKey::Zip));
}

#[test]
fn cmd_match_with_no_candidate() {
    let hints = vec!["promo".to_string()];
    let matched = cmd_match(&hints, None, &AppConfig::default()).unwrap();
    assert_eq!(matched, None);
}

#[test]
fn cmd_match_honours_excluded_keys() {
    let hints = vec!["customer_id".to_string()];
    let profile = fixture("profile.json");

    let matched = cmd_match(&hints, Some(&profile), &AppConfig::default()).unwrap();
    assert_eq!(matched, Some(FieldKey::from("id")));

    let config = load_config(Some(&fixture("config.yaml")));
    let matched = cmd_match(&hints, Some(&profile), &config).unwrap();
    assert_eq!(matched, None);
}

#[test]
fn cmd_fill_writes_filled_snapshot() {
    let output = temp_path("filled_checkout.json");
    let tracer = TraceLogger::disabled();

    let outcome = cmd_fill(
        &fixture("checkout.json"),
        &fixture("profile.yaml"),
        "json",
        Some(&output),
        &AppConfig::default(),
        &tracer,
        0,
    )
    .unwrap();

    assert_eq!(outcome.controls_visited, 6);
    assert_eq!(outcome.filled.len(), 4);

    let saved: DocumentSnapshot =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let doc = SnapshotDocument::new(saved);
    assert_eq!(doc.value(ControlId(0)).unwrap(), "Ada");
    assert_eq!(doc.value(ControlId(1)).unwrap(), "Lovelace");
    assert_eq!(doc.value(ControlId(2)).unwrap(), "SW1Y 4JH");
    assert_eq!(doc.value(ControlId(3)).unwrap(), "London");
    assert_eq!(doc.value(ControlId(4)).unwrap(), "keep@me");

    std::fs::remove_file(&output).ok();
}

#[test]
fn cmd_fill_missing_profile_fails() {
    let tracer = TraceLogger::disabled();
    let result = cmd_fill(
        &fixture("checkout.json"),
        "no_such_profile.json",
        "console",
        None,
        &AppConfig::default(),
        &tracer,
        0,
    );
    assert!(result.is_err());
}

#[test]
fn build_filler_applies_config_exclusions() {
    let config = load_config(Some(&fixture("config.yaml")));
    let tracer = TraceLogger::disabled();
    let filler = build_filler(&config, &tracer);

    let mut doc = load_page(&fixture("checkout.json"), &config.fetch).unwrap();
    let profile = load_profile(&fixture("profile.json")).unwrap();
    let outcome = filler.fill(&mut doc, &profile);

    assert_eq!(outcome.key_for(ControlId(0)), Some(&FieldKey::FirstName));
    assert_eq!(outcome.key_for(ControlId(3)), Some(&FieldKey::City));
    assert_eq!(outcome.filled.len(), 4);
}
