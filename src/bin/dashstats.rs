use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dashstats::{Client, Query, VisitorGraph, format, map, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dashstats",
    version,
    about = "Fetch, export & render web-analytics dashboard stats"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the visitor graph (and optionally save, plot, and print breakdowns).
    Get(GetArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Site domain (e.g., example.com)
    #[arg(short = 'D', long)]
    domain: String,
    /// Period filter (e.g., 7d, 30d, month, day)
    #[arg(short, long)]
    period: Option<String>,
    /// Reference date for the period (YYYY-MM-DD)
    #[arg(short = 'd', long)]
    date: Option<String>,
    /// Stats API base URL.
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,
    /// Save the graph to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Render the graph at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1054).
    #[arg(long, default_value_t = 1054)]
    width: u32,
    /// Height of the plot (default 342).
    #[arg(long, default_value_t = 342)]
    height: u32,
    /// Print the country breakdown with map shades.
    #[arg(long, default_value_t = false)]
    countries: bool,
    /// Print the top pages.
    #[arg(long, default_value_t = false)]
    pages: bool,
    /// Row limit for --pages (default 100).
    #[arg(long, default_value_t = 100)]
    limit: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Get(args) => cmd_get(args),
    }
}

fn fmt_count(stat: &dashstats::models::TopStat) -> String {
    match (stat.count, stat.percentage) {
        (Some(count), _) => format::number_format(count),
        (None, Some(pct)) => format!("{}%", pct),
        (None, None) => "-".to_string(),
    }
}

fn cmd_get(args: GetArgs) -> Result<()> {
    let client = Client::with_base_url(&args.base_url);
    let query = Query::new(args.period.clone(), args.date.clone());

    let graph = client.main_graph(&args.domain, &query)?;

    for stat in &graph.top_stats {
        println!(
            "{}: {} ({})",
            stat.name,
            fmt_count(stat),
            format::change_label(stat.change)
        );
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "json" => storage::save_json(&graph, path)?,
            _ => storage::save_csv(&graph, path)?,
        }
        println!("saved {}", path.display());
    }

    if let Some(path) = args.plot.as_ref() {
        let chart = VisitorGraph::from_graph(&graph, args.width, args.height)?;
        chart.render(path)?;
        println!("rendered {}", path.display());
    }

    if args.countries {
        let countries = client.countries(&args.domain, &query)?;
        let shades = map::shade_countries(&countries);
        println!("\nCountries:");
        for (name, shade) in &shades {
            println!(
                "  {} {} ({})",
                name,
                format::number_format(shade.count as f64),
                shade.fill_color
            );
        }
    }

    if args.pages {
        let pages = client.pages(&args.domain, &query, args.limit, true)?;
        println!("\nTop pages:");
        for page in &pages {
            let bounce = page
                .bounce_rate
                .map(|r| format!("{}%", r))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {} {} {}",
                page.name,
                format::number_format(page.count as f64),
                bounce
            );
        }
    }

    Ok(())
}
