//! JSON configuration: game version plus layout overrides
//!
//! ```json
//! {
//!   "version": "emerald",
//!   "layout": { "badge_flag_base": 2151, "bag": { "items": { "offset": 1376, "capacity": 30 } } },
//!   "options": { "battle_scene_bit": 7 }
//! }
//! ```
//!
//! Every key is optional. `layout` and `options` are merged over the
//! defaults for the chosen version, so a file only lists what differs.

use std::path::Path;

use anyhow::{Context, Result};
use hoenn_codec::{GameVersion, MemoryLayout, OptionsLayout};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resolved reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    pub layout: MemoryLayout,
    pub options: OptionsLayout,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    version: Option<GameVersion>,
    #[serde(default)]
    layout: Option<Value>,
    #[serde(default)]
    options: Option<Value>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::for_version(GameVersion::Emerald)
    }
}

/// Overlay `overrides` onto `base`, recursing into objects
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn overlay<T>(defaults: &T, overrides: Option<Value>, what: &str) -> Result<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let mut value = serde_json::to_value(defaults).with_context(|| format!("Failed to serialize default {what}"))?;
    if let Some(overrides) = overrides {
        merge(&mut value, overrides);
    }
    serde_json::from_value(value).with_context(|| format!("Invalid {what} override"))
}

impl ReaderConfig {
    pub fn for_version(version: GameVersion) -> Self {
        Self {
            layout: version.layout(),
            options: OptionsLayout::default(),
        }
    }

    pub fn version(&self) -> GameVersion {
        self.layout.version
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json).context("Failed to parse reader config")?;
        let version = raw.version.unwrap_or(GameVersion::Emerald);
        let layout = overlay(&version.layout(), raw.layout, "layout")?;
        let options = overlay(&OptionsLayout::default(), raw.options, "options layout")?;
        crate::check_layout(&layout).context("Invalid layout override")?;
        tracing::debug!(%version, "loaded reader config");
        Ok(Self { layout, options })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In config {}", path.display()))
    }
}
