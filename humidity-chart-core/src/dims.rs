use humidity_chart_common::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Fixed aspect ratio: chart height is 60% of its width.
pub const ASPECT_RATIO: f64 = 0.6;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 10.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Dimensions {
    pub fn from_width(width: f64) -> Self {
        Self {
            width,
            height: width * ASPECT_RATIO,
            margin: Margin::default(),
        }
    }

    /// Drawable width after subtracting left/right margins.
    pub fn bounded_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Drawable height after subtracting top/bottom margins.
    pub fn bounded_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Bounded dimensions must be usable as positive scale ranges.
    pub fn validate(&self) -> Result<()> {
        if self.bounded_width() <= 0.0 || self.bounded_height() <= 0.0 {
            return Err(ChartError::InvalidDimensions(format!(
                "bounded area {}x{} is not positive (outer {}x{})",
                self.bounded_width(),
                self.bounded_height(),
                self.width,
                self.height,
            )));
        }
        Ok(())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::from_width(600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions_match_layout() {
        let d = Dimensions::default();
        assert_eq!(d.width, 600.0);
        assert_eq!(d.height, 360.0);
        assert_eq!(d.bounded_width(), 540.0);
        assert_eq!(d.bounded_height(), 280.0);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn pathological_margins_fail_validation() {
        let mut d = Dimensions::from_width(40.0);
        d.margin = Margin {
            top: 100.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        };
        assert!(d.validate().is_err());
    }
}
