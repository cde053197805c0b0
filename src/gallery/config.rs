use crate::animation::{TimingFunction, Tolerance, Transition};
use crate::error::{Error, Result};
use crate::widgets::SectionSpec;

/// Header height a tall viewport never drops below.
pub const DEFAULT_MAX_HEIGHT: f32 = 812.0;
pub const DEFAULT_MID_HEIGHT: f32 = 256.0;
pub const DEFAULT_MIN_HEIGHT: f32 = 90.0;
/// Nominal width of a section indicator.
pub const SECTION_INDICATOR_WIDTH: f32 = 32.0;
pub const SECTION_INDICATOR_INSET: f32 = 16.0;

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub min_height: f32,
    pub mid_height: f32,
    pub max_height: f32,
    pub sections: Vec<SectionSpec>,
    pub device_pixel_ratio: f32,
    /// Animation used when the header settles on a new height tier
    pub height_transition: Transition,
    /// Animation used when the selected index settles on a page
    pub page_transition: Transition,
    pub tolerance: Tolerance,
    pub indicator_width: f32,
    pub indicator_inset: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            min_height: DEFAULT_MIN_HEIGHT,
            mid_height: DEFAULT_MID_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            sections: Vec::new(),
            device_pixel_ratio: 1.0,
            height_transition: Transition::default(),
            page_transition: Transition::default(),
            tolerance: Tolerance::DEFAULT,
            indicator_width: SECTION_INDICATOR_WIDTH,
            indicator_inset: SECTION_INDICATOR_INSET,
        }
    }
}

impl GalleryConfig {
    /// Create a validated configuration with default animation settings.
    pub fn new(
        min_height: f32,
        mid_height: f32,
        max_height: f32,
        sections: Vec<SectionSpec>,
    ) -> Result<Self> {
        let config = Self {
            min_height,
            mid_height,
            max_height,
            sections,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Default tiers with the maximum height stretched to fill a viewport of
    /// `viewport_height`.
    pub fn with_viewport_height(viewport_height: f32) -> Self {
        Self {
            max_height: viewport_height.max(DEFAULT_MAX_HEIGHT),
            ..Self::default()
        }
    }

    pub fn sections(mut self, sections: Vec<SectionSpec>) -> Self {
        self.sections = sections;
        self
    }

    pub fn section(mut self, section: SectionSpec) -> Self {
        self.sections.push(section);
        self
    }

    pub fn device_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    pub fn height_transition(mut self, transition: Transition) -> Self {
        self.height_transition = transition;
        self
    }

    pub fn page_transition(mut self, transition: Transition) -> Self {
        self.page_transition = transition;
        self
    }

    pub fn tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let heights = [self.min_height, self.mid_height, self.max_height];
        let ordered = heights.iter().all(|h| h.is_finite())
            && 0.0 < self.min_height
            && self.min_height < self.mid_height
            && self.mid_height < self.max_height;
        if !ordered {
            return Err(Error::HeightsOutOfOrder {
                min: self.min_height,
                mid: self.mid_height,
                max: self.max_height,
            });
        }
        if !(self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0) {
            return Err(Error::InvalidPixelRatio(self.device_pixel_ratio));
        }
        for transition in [&self.height_transition, &self.page_transition] {
            if let TimingFunction::Spring(spring) = transition.timing {
                spring.validate()?;
            }
        }
        Ok(())
    }

    pub fn card_count(&self) -> usize {
        self.sections.len()
    }

    /// Largest valid selected index.
    pub fn max_index(&self) -> f32 {
        self.card_count().saturating_sub(1) as f32
    }

    pub fn clamp_height(&self, height: f32) -> f32 {
        crate::layout::clamp(height, self.min_height, self.max_height)
    }

    /// Horizontal release speed, in px/ms, above which a release commits to
    /// the neighbouring page.
    pub fn fling_threshold(&self) -> f32 {
        // 2 / (0.05 * dpr)
        40.0 / self.device_pixel_ratio
    }

    /// Nearest tier height to `height`; the lower tier wins a tie.
    pub fn snap_height(&self, height: f32) -> f32 {
        let mut best = self.min_height;
        for tier in [self.mid_height, self.max_height] {
            if (tier - height).abs() < (best - height).abs() {
                best = tier;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::SpringConfig;

    #[test]
    fn test_default_heights() {
        let config = GalleryConfig::default();
        assert_eq!(config.min_height, 90.0);
        assert_eq!(config.mid_height, 256.0);
        assert_eq!(config.max_height, 812.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_viewport_height_stretches_max() {
        assert_eq!(GalleryConfig::with_viewport_height(600.0).max_height, 812.0);
        assert_eq!(GalleryConfig::with_viewport_height(1024.0).max_height, 1024.0);
    }

    #[test]
    fn test_rejects_unordered_heights() {
        let err = GalleryConfig::new(256.0, 90.0, 812.0, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            Error::HeightsOutOfOrder {
                min: 256.0,
                mid: 90.0,
                max: 812.0
            }
        );
        assert!(GalleryConfig::new(0.0, 90.0, 812.0, Vec::new()).is_err());
        assert!(GalleryConfig::new(90.0, 256.0, 256.0, Vec::new()).is_err());
        assert!(GalleryConfig::new(90.0, f32::NAN, 812.0, Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_bad_pixel_ratio_and_spring() {
        let config = GalleryConfig::default().device_pixel_ratio(0.0);
        assert_eq!(config.validate(), Err(Error::InvalidPixelRatio(0.0)));

        let config = GalleryConfig::default()
            .height_transition(Transition::spring(SpringConfig::new(0.0, 1.0, 1.0)));
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidSpring { .. })
        ));
    }

    #[test]
    fn test_fling_threshold_scales_with_pixel_ratio() {
        assert_eq!(GalleryConfig::default().fling_threshold(), 40.0);
        assert_eq!(
            GalleryConfig::default().device_pixel_ratio(2.0).fling_threshold(),
            20.0
        );
    }

    #[test]
    fn test_snap_height() {
        let config = GalleryConfig::default();
        assert_eq!(config.snap_height(100.0), 90.0);
        assert_eq!(config.snap_height(200.0), 256.0);
        assert_eq!(config.snap_height(600.0), 812.0);
        assert_eq!(config.snap_height(173.0), 90.0);
    }

    #[test]
    fn test_max_index_with_no_sections() {
        assert_eq!(GalleryConfig::default().max_index(), 0.0);
    }
}
