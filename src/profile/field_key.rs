use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Field keys — identifiers of profile attributes
// ============================================================================

/// Identifier of a profile attribute.
///
/// The known keys mirror the columns of a saved profile. Anything else the
/// profile source delivers (record metadata such as `id` or `userId`) is kept
/// as `Other` with its original spelling so it can still take part in
/// matching through the fallback term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Display name of the profile ("Personal", "Work"). Never matched.
    ProfileName,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    Zip,
    Country,
    Other(String),
}

impl FieldKey {
    /// All known keys in the order a saved profile declares them.
    pub fn known() -> [FieldKey; 9] {
        [
            FieldKey::ProfileName,
            FieldKey::FirstName,
            FieldKey::LastName,
            FieldKey::Email,
            FieldKey::Phone,
            FieldKey::Address,
            FieldKey::City,
            FieldKey::Zip,
            FieldKey::Country,
        ]
    }

    /// Wire spelling of the key.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKey::ProfileName => "profileName",
            FieldKey::FirstName => "firstName",
            FieldKey::LastName => "lastName",
            FieldKey::Email => "email",
            FieldKey::Phone => "phone",
            FieldKey::Address => "address",
            FieldKey::City => "city",
            FieldKey::Zip => "zip",
            FieldKey::Country => "country",
            FieldKey::Other(name) => name,
        }
    }

    /// The profile's display-name key, excluded from matching.
    pub fn is_escape(&self) -> bool {
        matches!(self, FieldKey::ProfileName)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        match s {
            "profileName" => FieldKey::ProfileName,
            "firstName" => FieldKey::FirstName,
            "lastName" => FieldKey::LastName,
            "email" => FieldKey::Email,
            "phone" => FieldKey::Phone,
            "address" => FieldKey::Address,
            "city" => FieldKey::City,
            "zip" => FieldKey::Zip,
            "country" => FieldKey::Country,
            other => FieldKey::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldKey {
    fn from(s: String) -> Self {
        match FieldKey::from(s.as_str()) {
            FieldKey::Other(_) => FieldKey::Other(s),
            known => known,
        }
    }
}

impl FromStr for FieldKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FieldKey::from(s))
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FieldKey::from(s))
    }
}
