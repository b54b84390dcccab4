use crate::histogram::Histogram;

/// Tooltip panel state after a pointer event. Position is in outer
/// chart coordinates (margins included), horizontally centered over the
/// hovered bar and vertically at its top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub opacity: f64,
    pub count: String,
    pub range: String,
    pub x: f64,
    pub y: f64,
}

impl TooltipState {
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            count: String::new(),
            range: String::new(),
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

pub fn format_humidity(value: f64) -> String {
    format!("{value:.2}")
}

/// Pointer entered the bar for `bins[bin_index]`. Returns `None` for an
/// index with no bar.
pub fn on_pointer_enter(histogram: &Histogram, bin_index: usize) -> Option<TooltipState> {
    let bin = histogram.bins.get(bin_index)?;
    let x0_px = histogram.x_scale.scale(bin.x0);
    let x1_px = histogram.x_scale.scale(bin.x1);
    let x = x0_px + (x1_px - x0_px) / 2.0 + histogram.dims.margin.left;
    let y = histogram.y_scale.scale(bin.count as f64) + histogram.dims.margin.top;
    Some(TooltipState {
        opacity: 1.0,
        count: bin.count.to_string(),
        range: format!("{} - {}", format_humidity(bin.x0), format_humidity(bin.x1)),
        x,
        y,
    })
}

pub fn on_pointer_leave() -> TooltipState {
    TooltipState::hidden()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::WeatherRecord;
    use humidity_chart_common::ChartConfig;

    fn fixture() -> Histogram {
        let records: Vec<WeatherRecord> = [30.0, 31.0, 32.0, 33.0, 34.0]
            .iter()
            .map(|&humidity| WeatherRecord { humidity })
            .collect();
        Histogram::build(&records, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn range_uses_two_decimal_places() {
        assert_eq!(format_humidity(30.0), "30.00");
        assert_eq!(format_humidity(35.125), "35.12");
    }

    #[test]
    fn enter_populates_count_and_range() {
        let h = fixture();
        let idx = h.bins.iter().position(|b| b.count > 0).unwrap();
        let state = on_pointer_enter(&h, idx).unwrap();
        assert!(state.is_visible());
        assert_eq!(state.count, h.bins[idx].count.to_string());
        let expected = format!(
            "{:.2} - {:.2}",
            h.bins[idx].x0, h.bins[idx].x1
        );
        assert_eq!(state.range, expected);
    }

    #[test]
    fn enter_positions_over_bar_in_outer_coordinates() {
        let h = fixture();
        let state = on_pointer_enter(&h, 0).unwrap();
        let x0_px = h.x_scale.scale(h.bins[0].x0);
        let x1_px = h.x_scale.scale(h.bins[0].x1);
        assert_eq!(state.x, (x0_px + x1_px) / 2.0 + h.dims.margin.left);
        assert_eq!(
            state.y,
            h.y_scale.scale(h.bins[0].count as f64) + h.dims.margin.top
        );
    }

    #[test]
    fn hovering_a_five_count_bar_shows_its_range() {
        let mut h = fixture();
        h.bins[0] = crate::binner::Bin {
            x0: 30.0,
            x1: 35.0,
            count: 5,
        };
        let state = on_pointer_enter(&h, 0).unwrap();
        assert_eq!(state.count, "5");
        assert_eq!(state.range, "30.00 - 35.00");
    }

    #[test]
    fn enter_out_of_bounds_is_none() {
        let h = fixture();
        assert!(on_pointer_enter(&h, h.bins.len()).is_none());
    }

    #[test]
    fn leave_hides_the_panel() {
        let state = on_pointer_leave();
        assert!(!state.is_visible());
        assert_eq!(state.opacity, 0.0);
    }
}
