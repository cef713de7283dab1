use crate::layout::LayoutProfile;

pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 40.0;

pub const COMPACT_PROFILE: LayoutProfile = LayoutProfile {
    target_row_height: 400.0,
    box_spacing: 12.0,
};

pub const WIDE_PROFILE: LayoutProfile = LayoutProfile {
    target_row_height: 280.0,
    box_spacing: 10.0,
};

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryConfig {
    pub breakpoint_px: f64,
    pub compact: LayoutProfile,
    pub wide: LayoutProfile,
    pub swipe_threshold_px: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            compact: COMPACT_PROFILE,
            wide: WIDE_PROFILE,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub breakpoint_px: Option<f64>,
    pub compact_row_height: Option<f64>,
    pub compact_spacing: Option<f64>,
    pub wide_row_height: Option<f64>,
    pub wide_spacing: Option<f64>,
    pub swipe_threshold_px: Option<f64>,
}

impl GalleryConfig {
    pub fn with_overrides(overrides: &ConfigOverrides) -> Self {
        let mut config = Self::default();
        apply_positive(&mut config.breakpoint_px, overrides.breakpoint_px);
        apply_positive(&mut config.compact.target_row_height, overrides.compact_row_height);
        apply_non_negative(&mut config.compact.box_spacing, overrides.compact_spacing);
        apply_positive(&mut config.wide.target_row_height, overrides.wide_row_height);
        apply_non_negative(&mut config.wide.box_spacing, overrides.wide_spacing);
        apply_non_negative(&mut config.swipe_threshold_px, overrides.swipe_threshold_px);
        config
    }

    pub fn profile(&self, compact: bool) -> LayoutProfile {
        if compact {
            self.compact
        } else {
            self.wide
        }
    }

    pub fn is_compact_width(&self, viewport_width: f64) -> bool {
        viewport_width <= self.breakpoint_px
    }

    pub fn compact_media_query(&self) -> String {
        format!("(max-width: {}px)", self.breakpoint_px)
    }
}

fn apply_positive(slot: &mut f64, value: Option<f64>) {
    if let Some(value) = value.filter(|value| value.is_finite() && *value > 0.0) {
        *slot = value;
    }
}

fn apply_non_negative(slot: &mut f64, value: Option<f64>) {
    if let Some(value) = value.filter(|value| value.is_finite() && *value >= 0.0) {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let config = GalleryConfig::default();
        assert!(config.is_compact_width(768.0));
        assert!(!config.is_compact_width(769.0));
        assert_eq!(config.compact_media_query(), "(max-width: 768px)");
    }

    #[test]
    fn profiles_match_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.profile(true), COMPACT_PROFILE);
        assert_eq!(config.profile(false).target_row_height, 280.0);
        assert_eq!(config.profile(false).box_spacing, 10.0);
    }

    #[test]
    fn overrides_skip_invalid_values() {
        let config = GalleryConfig::with_overrides(&ConfigOverrides {
            breakpoint_px: Some(0.0),
            wide_row_height: Some(320.0),
            wide_spacing: Some(-1.0),
            compact_spacing: Some(0.0),
            swipe_threshold_px: Some(f64::NAN),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.breakpoint_px, DEFAULT_BREAKPOINT_PX);
        assert_eq!(config.wide.target_row_height, 320.0);
        assert_eq!(config.wide.box_spacing, 10.0);
        assert_eq!(config.compact.box_spacing, 0.0);
        assert_eq!(config.swipe_threshold_px, DEFAULT_SWIPE_THRESHOLD_PX);
    }
}
