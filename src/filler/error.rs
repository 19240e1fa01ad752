use std::fmt;

/// Failure loading inputs for a fill or writing its results.
///
/// The fill pass itself never fails; these come from the surrounding
/// plumbing (files, fetching pages, parsing profiles and snapshots).
#[derive(Debug)]
pub enum AutofillError {
    /// Reading or writing a local file failed
    Io { path: String, source: std::io::Error },

    /// JSON parsing failed (profile, snapshot or request)
    JsonParse { context: String, source: serde_json::Error },

    /// YAML parsing failed (profile)
    YamlParse { context: String, source: serde_yaml::Error },

    /// JSON serialization failed (outcome or snapshot output)
    JsonSerialize { context: String, source: serde_json::Error },

    /// Fetching a page over HTTP failed
    Fetch { url: String, message: String },
}

impl fmt::Display for AutofillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutofillError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            AutofillError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            AutofillError::YamlParse { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
            AutofillError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            AutofillError::Fetch { url, message } => {
                write!(f, "Failed to fetch {}: {}", url, message)
            }
        }
    }
}

impl std::error::Error for AutofillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutofillError::Io { source, .. } => Some(source),
            AutofillError::JsonParse { source, .. } => Some(source),
            AutofillError::YamlParse { source, .. } => Some(source),
            AutofillError::JsonSerialize { source, .. } => Some(source),
            AutofillError::Fetch { .. } => None,
        }
    }
}
