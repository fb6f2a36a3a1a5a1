use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One axis of the combinatorial space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroup {
    pub name: String,
    pub values: Vec<String>,
}

impl VariantGroup {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A concrete point in the variant space: one value per group, kept in
/// group declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Combination {
    entries: Vec<(String, String)>,
}

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut combination = Self::new();
        for (group, value) in pairs {
            combination.set(group, value);
        }
        combination
    }

    /// Set a group's value, replacing an existing entry in place.
    pub fn set(&mut self, group: impl Into<String>, value: impl Into<String>) {
        let group = group.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == group) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((group, value)),
        }
    }

    pub fn with(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(group, value);
        self
    }

    pub fn get(&self, group: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(group, value)| (group.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Host naming form, e.g. `state=hover, size=sm`.
    pub fn variant_name(&self) -> String {
        if self.entries.is_empty() {
            return "Default".to_string();
        }
        self.entries
            .iter()
            .map(|(group, value)| format!("{group}={value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.variant_name())
    }
}

impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (group, value) in &self.entries {
            map.serialize_entry(group, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Combination {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CombinationVisitor;

        impl<'de> Visitor<'de> for CombinationVisitor {
            type Value = Combination;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of variant group names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut combination = Combination::new();
                while let Some((group, value)) = access.next_entry::<String, String>()? {
                    combination.set(group, value);
                }
                Ok(combination)
            }
        }

        deserializer.deserialize_map(CombinationVisitor)
    }
}
