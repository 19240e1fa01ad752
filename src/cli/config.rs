use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-autofill",
    version,
    about = "Fill web forms from a saved profile by matching field hints"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: form-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// JSONL trace file for fill decisions (overrides config)
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill a page's form controls from a profile
    Fill {
        /// HTML file, JSON DOM snapshot, or http(s) URL
        #[arg(long)]
        page: String,

        /// Profile file (JSON or YAML object of field -> value)
        #[arg(long)]
        profile: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Write the filled document snapshot (JSON) to this path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show which profile field a set of hints would match
    Match {
        /// Hint text as found on a control (repeatable, in extraction order)
        #[arg(long = "hint", required = true)]
        hints: Vec<String>,

        /// Profile whose key order to match against (default: all known fields)
        #[arg(long)]
        profile: Option<String>,
    },

    /// Answer fill requests read line by line from stdin
    Serve {
        /// HTML file, JSON DOM snapshot, or http(s) URL
        #[arg(long)]
        page: String,

        /// Write the document snapshot (JSON) here once stdin closes
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-autofill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fill: FillConfig,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FillConfig {
    /// Profile keys never matched, in addition to `profileName`
    /// (e.g. `id`, `userId` from API records)
    #[serde(default)]
    pub exclude_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// Serde default helpers
fn default_timeout() -> u64 { 30 }
fn default_user_agent() -> String { concat!("form-autofill/", env!("CARGO_PKG_VERSION")).to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the trace path: CLI flag > config file > disabled.
pub fn resolve_trace_path<'a>(cli_trace: Option<&'a str>, config: &'a AppConfig) -> Option<&'a str> {
    cli_trace.or(config.trace.path.as_deref())
}
