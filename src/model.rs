use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Structured outcome of one evaluation, consumed by the renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub title: String,
    pub checks: Vec<CheckStatus>,
    pub percentages: Percentages,
    pub guidelines: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub report: Option<AnalysisReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckStatus {
    pub aspect: String,
    pub status: bool,
}

impl CheckStatus {
    pub fn new(aspect: impl Into<String>, status: bool) -> Self {
        Self {
            aspect: aspect.into(),
            status,
        }
    }
}

/// Category → 0..=100 mapping that keeps insertion order.
/// Serialized as a map, entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Percentages(Vec<(String, u8)>);

impl Percentages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace in place. Values above 100 are clamped.
    pub fn insert(&mut self, category: impl Into<String>, value: u32) {
        let category = category.into();
        let value = value.min(100) as u8;
        match self.0.iter_mut().find(|(k, _)| *k == category) {
            Some(entry) => entry.1 = value,
            None => self.0.push((category, value)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<u8> {
        self.0.iter().find(|(k, _)| k == category).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for Percentages {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut p = Percentages::new();
        for (k, v) in iter {
            p.insert(k, v);
        }
        p
    }
}

impl Serialize for Percentages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Percentages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PercentagesVisitor;

        impl<'de> Visitor<'de> for PercentagesVisitor {
            type Value = Percentages;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category names to percentages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Percentages, A::Error> {
                let mut p = Percentages::new();
                while let Some((k, v)) = access.next_entry::<String, u32>()? {
                    p.insert(k, v);
                }
                Ok(p)
            }
        }

        deserializer.deserialize_map(PercentagesVisitor)
    }
}

/// Full per-check breakdown produced by the HTML analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub load_time_secs: f64,
    pub checks: Vec<CheckReport>,
    pub earned_points: u32,
    pub total_points: u32,
    pub overall_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub key: String,
    pub name: String,
    pub passed: bool,
    pub score: u8,
    pub message: String,
    pub details: String,
}

// ── Tests ──
