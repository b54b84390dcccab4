pub mod binner;
pub mod dataset;
pub mod dims;
pub mod export;
pub mod histogram;
pub mod render;
pub mod scale;
pub mod stats;
pub mod tooltip;

pub use binner::{bin_values, Bin};
pub use dataset::{humidity_values, load_records, WeatherRecord};
pub use dims::{Dimensions, Margin};
pub use export::{export_csv, export_json, print_summary, write_svg};
pub use histogram::{BarGeometry, Histogram};
pub use render::render_svg;
pub use scale::LinearScale;
pub use tooltip::{on_pointer_enter, on_pointer_leave, TooltipState};
pub use humidity_chart_common::{ChartError, Result};
