use crate::histogram::Histogram;
use humidity_chart_common::{ChartError, Result};
use std::io::Write;
use std::path::Path;

pub fn write_svg(output_path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, svg)?;
    Ok(())
}

// --- headless summary output ---

pub fn print_summary(histogram: &Histogram) {
    let (lo, hi) = histogram.x_scale.domain();
    println!("{:<16} {}", "Records:", histogram.record_count);
    println!("{:<16} [{:.2}, {:.2}]", "Domain:", lo, hi);
    println!("{:<16} {:.2}", "Mean:", histogram.mean);
    println!("{:<16} {}", "Bins:", histogram.bins.len());
    for bin in &histogram.bins {
        println!("  [{:>7.2}, {:>7.2})  {}", bin.x0, bin.x1, bin.count);
    }
}

// --- JSON export ---

pub fn export_json(output_path: &Path, histogram: &Histogram) -> Result<()> {
    let (lo, hi) = histogram.x_scale.domain();
    let doc = serde_json::json!({
        "record_count": histogram.record_count,
        "domain": [lo, hi],
        "mean": histogram.mean,
        "dimensions": histogram.dims,
        "bins": histogram.bins,
    });
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &doc)
        .map_err(|e| ChartError::Other(e.to_string()))?;
    Ok(())
}

// --- CSV export ---

pub fn export_csv(output_path: &Path, histogram: &Histogram) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    writeln!(file, "x0,x1,count")?;
    for bin in &histogram.bins {
        writeln!(file, "{:.6},{:.6},{}", bin.x0, bin.x1, bin.count)?;
    }
    Ok(())
}
