use std::time::Duration;

use layout::ScrollHeightModel;
use serde::{Deserialize, Deserializer};

use crate::error::FlextError;

/// Class and attribute names that switch features on for an element.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassNames {
    /// Marks elements picked up by [`FlextPage::scan`](crate::FlextPage::scan).
    pub marker_class: String,
    pub grow_class: String,
    pub enter_stopped_class: String,
    pub enter_submits_class: String,
    pub replace_ghost_text_class: String,
    pub grow_parents_class: String,
    pub ghost_text_attr: String,
    pub ghost_class_attr: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            marker_class: "flext".into(),
            grow_class: "growme".into(),
            enter_stopped_class: "stopenter".into(),
            enter_submits_class: "entersubmits".into(),
            replace_ghost_text_class: "replaceghosttext".into(),
            grow_parents_class: "growparents".into(),
            ghost_text_attr: "ghosttext".into(),
            ghost_class_attr: "ghostclass".into(),
        }
    }
}

/// Construction-time overrides. Everything not set falls back to
/// [`FlextOptions::default`], including when read from TOML:
///
/// ```toml
/// ani_time_ms = 150
/// default_max_height = 400
///
/// [classes]
/// grow_class = "autogrow"
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlextOptions {
    /// Length of the grow animation.
    #[serde(rename = "ani_time_ms", deserialize_with = "duration_from_millis")]
    pub ani_time: Duration,
    /// Max height in px. `0` means: take it from a `maxheight-<n>` class,
    /// else use `default_max_height`.
    pub max_height: f32,
    pub default_max_height: f32,
    /// How many ancestor levels to look at when growing parents.
    pub parent_depth: usize,
    pub scroll_height_model: ScrollHeightModel,
    pub classes: ClassNames,
}

impl Default for FlextOptions {
    fn default() -> Self {
        Self {
            ani_time: Duration::from_millis(300),
            max_height: 0.0,
            default_max_height: 1000.0,
            parent_depth: 6,
            scroll_height_model: ScrollHeightModel::default(),
            classes: ClassNames::default(),
        }
    }
}

impl FlextOptions {
    pub fn from_toml_str(input: &str) -> Result<Self, FlextError> {
        let options: FlextOptions =
            toml::from_str(input).map_err(|e| FlextError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), FlextError> {
        if !self.max_height.is_finite() || self.max_height < 0.0 {
            return Err(FlextError::InvalidOptions(format!(
                "max_height must be >= 0, got {}",
                self.max_height
            )));
        }
        if !self.default_max_height.is_finite() || self.default_max_height <= 0.0 {
            return Err(FlextError::InvalidOptions(format!(
                "default_max_height must be > 0, got {}",
                self.default_max_height
            )));
        }
        Ok(())
    }

    pub fn with_ani_time(mut self, ani_time: Duration) -> Self {
        self.ani_time = ani_time;
        self
    }

    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn with_parent_depth(mut self, parent_depth: usize) -> Self {
        self.parent_depth = parent_depth;
        self
    }

    pub fn with_scroll_height_model(mut self, model: ScrollHeightModel) -> Self {
        self.scroll_height_model = model;
        self
    }
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = FlextOptions::default();
        assert_eq!(options.ani_time, Duration::from_millis(300));
        assert_eq!(options.max_height, 0.0);
        assert_eq!(options.default_max_height, 1000.0);
        assert_eq!(options.parent_depth, 6);
        assert_eq!(options.classes.grow_class, "growme");
        assert_eq!(options.classes.ghost_class_attr, "ghostclass");
    }

    #[test]
    fn partial_toml_overrides_named_keys_only() {
        let options = FlextOptions::from_toml_str(
            r#"
            ani_time_ms = 150
            scroll_height_model = "content-only"

            [classes]
            grow_class = "autogrow"
            "#,
        )
        .unwrap();

        assert_eq!(options.ani_time, Duration::from_millis(150));
        assert_eq!(options.scroll_height_model, ScrollHeightModel::ContentOnly);
        assert_eq!(options.classes.grow_class, "autogrow");
        assert_eq!(options.classes.enter_stopped_class, "stopenter");
        assert_eq!(options.default_max_height, 1000.0);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            FlextOptions::from_toml_str("max_heigth = 10"),
            Err(FlextError::InvalidOptions(_))
        ));
        assert!(matches!(
            FlextOptions::from_toml_str("default_max_height = 0"),
            Err(FlextError::InvalidOptions(_))
        ));
        assert!(matches!(
            FlextOptions::from_toml_str("max_height = -5"),
            Err(FlextError::InvalidOptions(_))
        ));
    }
}
