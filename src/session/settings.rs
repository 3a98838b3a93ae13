//! Session-wide lobby settings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Global settings shared by every participant.
///
/// Replaced as a whole on every sync; never merged field by field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub server_name: String,
    pub map: String,
    pub mods: Vec<String>,
    /// Frames of input delay applied to every order.
    pub order_latency: u32,
}

impl GlobalSettings {
    pub fn new(map: impl Into<String>, mods: &[&str], order_latency: u32) -> Self {
        GlobalSettings {
            server_name: String::new(),
            map: map.into(),
            mods: mods.iter().map(|m| m.to_string()).collect(),
            order_latency,
        }
    }

    /// Returns the mods present in exactly one of the two settings, sorted.
    pub fn mod_difference(&self, other: &GlobalSettings) -> Vec<String> {
        let ours: BTreeSet<&str> = self.mods.iter().map(String::as_str).collect();
        let theirs: BTreeSet<&str> = other.mods.iter().map(String::as_str).collect();
        ours.symmetric_difference(&theirs)
            .map(|m| m.to_string())
            .collect()
    }
}
