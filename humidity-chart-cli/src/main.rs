use clap::{Parser, Subcommand};
use humidity_chart_common::Config;
use humidity_chart_core::{
    export_csv, export_json, load_records, print_summary, render_svg, write_svg, Histogram,
};

fn parse_width(s: &str) -> Result<f64, String> {
    // validate outer width at CLI parse time
    let v: f64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(format!("width must be positive, got {v}"))
    }
}

#[derive(Parser)]
#[command(name = "humidity-chart", version, about = "Humidity histogram renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the histogram SVG from a JSON dataset (path or URL)
    Render {
        input: String,
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_parser = parse_width)]
        width: Option<f64>,
        #[arg(long)]
        bins: Option<usize>,
    },
    /// Print bins, domain and mean without rendering
    Inspect { input: String },
    /// Export histogram data
    Export {
        input: String,
        #[arg(long, default_value = "json")]
        format: String,
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        Commands::Render {
            input,
            output,
            width,
            bins,
        } => run_render(input, output, width, bins, config)?,
        Commands::Inspect { input } => run_inspect(input, &config)?,
        Commands::Export {
            input,
            format,
            output,
        } => run_export(input, format, output, config)?,
    }
    Ok(())
}

fn build_histogram(input: &str, config: &Config) -> anyhow::Result<Histogram> {
    let records = load_records(input).map_err(|e| anyhow::anyhow!("{e}"))?;
    if records.is_empty() {
        anyhow::bail!("No records in dataset: {input}");
    }
    Histogram::build(&records, &config.chart).map_err(|e| anyhow::anyhow!("{e}"))
}

fn run_render(
    input: String,
    output: Option<String>,
    width: Option<f64>,
    bins: Option<usize>,
    mut config: Config,
) -> anyhow::Result<()> {
    if let Some(w) = width {
        config.chart.width = w;
    }
    if let Some(b) = bins {
        config.chart.bin_count = b;
    }
    let histogram = build_histogram(&input, &config)?;
    let svg = render_svg(&histogram, &config.chart).map_err(|e| anyhow::anyhow!("{e}"))?;
    let out_path: std::path::PathBuf = if let Some(ref o) = output {
        std::path::PathBuf::from(o)
    } else {
        std::path::Path::new(&config.export.output_dir).join("humidity.svg")
    };
    write_svg(&out_path, &svg).map_err(|e| anyhow::anyhow!("{e}"))?;
    println!("Rendered to {}", out_path.display());
    Ok(())
}

fn run_inspect(input: String, config: &Config) -> anyhow::Result<()> {
    let histogram = build_histogram(&input, config)?;
    print_summary(&histogram);
    Ok(())
}

fn run_export(
    input: String,
    format: String,
    output: Option<String>,
    config: Config,
) -> anyhow::Result<()> {
    let histogram = build_histogram(&input, &config)?;
    let default_name = format!("histogram.{format}");
    let out_path: std::path::PathBuf = if let Some(ref o) = output {
        std::path::PathBuf::from(o)
    } else {
        std::path::Path::new(&config.export.output_dir).join(&default_name)
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format.as_str() {
        "json" => {
            export_json(&out_path, &histogram).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Exported to {}", out_path.display());
        }
        "csv" => {
            export_csv(&out_path, &histogram).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Exported to {}", out_path.display());
        }
        _ => anyhow::bail!("Unknown format: {format} (use json or csv)"),
    }
    Ok(())
}
