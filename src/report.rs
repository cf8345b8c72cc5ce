//! Grouped report derived from the log history.
//!
//! Groups follow the first-occurrence order of each name; messages within a
//! group follow call order. The report is recomputed on every request and
//! never stored.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::logger::LogEntry;

/// Value of one group in the rendered JSON object.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    /// Slim mode, exactly one message.
    Single(String),
    Many(Vec<String>),
}

/// Name-to-messages mapping in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedReport {
    groups: Vec<(String, ReportValue)>,
}

impl GroupedReport {
    /// Builds the report from an ordered entry history.
    pub fn from_entries(entries: &[LogEntry], slim: bool) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut grouped: Vec<(&str, Vec<String>)> = Vec::new();

        for entry in entries {
            match index.get(entry.name.as_str()) {
                Some(&pos) => grouped[pos].1.push(entry.message.clone()),
                None => {
                    index.insert(entry.name.as_str(), grouped.len());
                    grouped.push((entry.name.as_str(), vec![entry.message.clone()]));
                }
            }
        }

        let groups = grouped
            .into_iter()
            .map(|(name, mut messages)| {
                let value = if slim && messages.len() == 1 {
                    ReportValue::Single(messages.remove(0))
                } else {
                    ReportValue::Many(messages)
                };
                (name.to_string(), value)
            })
            .collect();

        Self { groups }
    }

    pub fn groups(&self) -> &[(String, ReportValue)] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&ReportValue> {
        self.groups
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Renders the report as a JSON object indented with four spaces.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Serialize for GroupedReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, value) in &self.groups {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
