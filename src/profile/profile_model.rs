use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::profile::field_key::FieldKey;

/// A saved profile: field keys in declaration order, each with an optional value.
///
/// Iteration order is insertion order. Deserialization reads the source
/// object entry by entry so the order of the JSON/YAML document is kept.
/// Never route a profile through `serde_json::Value` first: its map is
/// sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    entries: Vec<(FieldKey, Option<String>)>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<FieldKey>, value: impl Into<String>) -> Self {
        self.insert(key.into(), Some(value.into()));
        self
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(&mut self, key: FieldKey, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k, v.as_deref()))
    }

    /// Value for `key`, or `None` when the key is missing, null or empty.
    pub fn value(&self, key: &FieldKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    pub fn contains_key(&self, key: &FieldKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProfileVisitor)
    }
}

struct ProfileVisitor;

impl<'de> Visitor<'de> for ProfileVisitor {
    type Value = Profile;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of profile field names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Profile, A::Error> {
        let mut profile = Profile::new();
        while let Some(key) = access.next_key::<String>()? {
            let ProfileValue(value) = access.next_value()?;
            profile.insert(FieldKey::from(key), value);
        }
        Ok(profile)
    }
}

// ============================================================================
// Value coercion
// ============================================================================

/// One profile value as delivered by the profile source.
///
/// Scalars are coerced the way a form control would receive them: numbers
/// become their decimal text, `true` becomes `"true"`. Values that would be
/// skipped anyway (`null`, `false`, zero) load as absent.
struct ProfileValue(Option<String>);

impl<'de> Deserialize<'de> for ProfileValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ProfileValueVisitor)
    }
}

struct ProfileValueVisitor;

impl<'de> Visitor<'de> for ProfileValueVisitor {
    type Value = ProfileValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ProfileValue, E> {
        Ok(ProfileValue(Some(v.to_string())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<ProfileValue, E> {
        Ok(ProfileValue(Some(v)))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ProfileValue, E> {
        Ok(ProfileValue(v.then(|| "true".to_string())))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ProfileValue, E> {
        Ok(ProfileValue((v != 0).then(|| v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ProfileValue, E> {
        Ok(ProfileValue((v != 0).then(|| v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<ProfileValue, E> {
        Ok(ProfileValue((v != 0.0 && !v.is_nan()).then(|| v.to_string())))
    }

    fn visit_none<E: de::Error>(self) -> Result<ProfileValue, E> {
        Ok(ProfileValue(None))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ProfileValue, E> {
        Ok(ProfileValue(None))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ProfileValue, D::Error> {
        deserializer.deserialize_any(ProfileValueVisitor)
    }
}
