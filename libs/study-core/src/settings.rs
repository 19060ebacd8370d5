//! Study policy settings: global defaults merged with per-deck overrides.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How out-of-range review inputs are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Confidence outside 1..=5 or a zero repetition level is an error.
    Reject,
    /// Confidence is clamped into 1..=5 and a zero level is read as 1.
    Clamp,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self::Reject
    }
}

/// Global settings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    pub input_policy: InputPolicy,
    /// Upper bound on a review interval. `None` leaves growth unbounded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval_days: Option<u32>,
}

impl GlobalSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Per-deck settings (all fields optional for overrides).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_policy: Option<InputPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval_days: Option<u32>,
}

impl DeckSettings {
    pub fn is_empty(&self) -> bool {
        self.input_policy.is_none() && self.max_interval_days.is_none()
    }
}

/// Effective settings (global merged with deck overrides).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub input_policy: InputPolicy,
    pub max_interval_days: Option<u32>,
}

impl EffectiveSettings {
    /// Merge global settings with optional deck settings.
    pub fn merge(global: &GlobalSettings, deck: Option<&DeckSettings>) -> Self {
        match deck {
            Some(d) => Self {
                input_policy: d.input_policy.unwrap_or(global.input_policy),
                max_interval_days: d.max_interval_days.or(global.max_interval_days),
            },
            None => Self {
                input_policy: global.input_policy,
                max_interval_days: global.max_interval_days,
            },
        }
    }
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self::merge(&GlobalSettings::default(), None)
    }
}
