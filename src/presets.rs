//! Tabs and their preset durations.
//!
//! The table ships as `presets.json` and is parsed once at start-up; the app
//! hands each preset tab its slice of options.

use crate::config::{DEFAULT_DURATION_SECS, PRESETS_JSON};
use crate::TimerHubError;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Cook,
    Sport,
    Study,
    General,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Cook, Tab::Sport, Tab::Study, Tab::General];

    /// Identifier used for element ids (`panel-cook`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Tab::Cook => "cook",
            Tab::Sport => "sport",
            Tab::Study => "study",
            Tab::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Cook => "Cooking",
            Tab::Sport => "Sport",
            Tab::Study => "Study",
            Tab::General => "General",
        }
    }

    /// The General tab takes manual input instead of presets.
    pub fn has_manual_input(self) -> bool {
        self == Tab::General
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresetOption {
    pub label: String,
    pub seconds: f64,
}

fn default_seconds() -> f64 {
    DEFAULT_DURATION_SECS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresetTable {
    /// Duration every timer starts with.
    #[serde(default = "default_seconds")]
    pub default_seconds: f64,
    #[serde(default)]
    pub tabs: BTreeMap<Tab, Vec<PresetOption>>,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self {
            default_seconds: DEFAULT_DURATION_SECS,
            tabs: BTreeMap::new(),
        }
    }
}

impl PresetTable {
    /// The table embedded in the binary.
    pub fn builtin() -> Result<Self, TimerHubError> {
        Self::from_json(PRESETS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, TimerHubError> {
        let table: PresetTable =
            serde_json::from_str(json).map_err(|e| TimerHubError::PresetConfig(e.to_string()))?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), TimerHubError> {
        if !self.default_seconds.is_finite() || self.default_seconds < 0.0 {
            return Err(TimerHubError::PresetConfig(format!(
                "default_seconds must be a non-negative number, got {}",
                self.default_seconds
            )));
        }
        if self.tabs.get(&Tab::General).is_some_and(|p| !p.is_empty()) {
            return Err(TimerHubError::PresetConfig(
                "the general tab takes manual input and cannot have presets".to_string(),
            ));
        }
        for option in self.tabs.values().flatten() {
            if !option.seconds.is_finite() || option.seconds <= 0.0 {
                return Err(TimerHubError::InvalidPreset {
                    label: option.label.clone(),
                    seconds: option.seconds,
                });
            }
        }
        Ok(())
    }

    pub fn presets_for(&self, tab: Tab) -> &[PresetOption] {
        self.tabs.get(&tab).map(Vec::as_slice).unwrap_or(&[])
    }
}
