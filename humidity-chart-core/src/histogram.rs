use crate::binner::{bin_values, Bin};
use crate::dataset::{humidity_values, WeatherRecord};
use crate::dims::Dimensions;
use crate::scale::LinearScale;
use crate::stats::{extent, mean};
use humidity_chart_common::{ChartConfig, ChartError, Result};
use serde::{Deserialize, Serialize};

/// Everything needed to draw the chart, computed once per render:
/// dimensions, both scales, the binned counts and the dataset mean.
/// Building this is the explicit entry point of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    pub dims: Dimensions,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub bins: Vec<Bin>,
    pub mean: f64,
    pub record_count: usize,
    pub bar_padding: f64,
}

/// Pixel-space rectangle for one bar, in bounded coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Histogram {
    pub fn build(records: &[WeatherRecord], config: &ChartConfig) -> Result<Self> {
        let values = humidity_values(records);
        let (min, max) = extent(&values).ok_or(ChartError::EmptyDataset)?;
        let dims = Dimensions::from_width(config.width);
        dims.validate()?;

        let x_scale = LinearScale::new((min, max), (0.0, dims.bounded_width())).nice(10);
        let bins = bin_values(&values, x_scale.domain(), config.bin_count);
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
        let y_scale =
            LinearScale::new((0.0, max_count as f64), (dims.bounded_height(), 0.0)).nice(10);

        // extent() returned, so the slice is non-empty
        let mean = mean(&values).ok_or(ChartError::EmptyDataset)?;

        Ok(Self {
            dims,
            x_scale,
            y_scale,
            bins,
            mean,
            record_count: records.len(),
            bar_padding: config.bar_padding,
        })
    }

    /// Bar rectangle for one bin: padded horizontally, width clamped at
    /// zero, growing upward from the baseline as the count rises.
    pub fn bar_geometry(&self, bin: &Bin) -> BarGeometry {
        let x = self.x_scale.scale(bin.x0) + self.bar_padding / 2.0;
        let y = self.y_scale.scale(bin.count as f64);
        let width =
            (self.x_scale.scale(bin.x1) - self.x_scale.scale(bin.x0) - self.bar_padding).max(0.0);
        let height = self.dims.bounded_height() - y;
        BarGeometry {
            x,
            y,
            width,
            height,
        }
    }
}
