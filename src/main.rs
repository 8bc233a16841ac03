//! skipyard - A skip-hire catalog browser with TUI.
//!
//! Usage:
//!   skipyard [CATALOG]           Launch interactive TUI
//!   skipyard list [CATALOG]      Print the filtered catalog
//!   skipyard export [CATALOG]    Export the validated catalog to JSON
//!   skipyard --help              Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};

use skipyard_browse::{derive_view, FilterState, SortKey};
use skipyard_core::Catalog;

#[derive(Parser)]
#[command(
    name = "skipyard",
    version,
    about = "A skip-hire catalog browser",
    long_about = "skipyard helps you pick the right skip for the job.\n\n\
                  Launch the interactive browser by running `skipyard [CATALOG]`, or use \
                  subcommands for quick operations."
)]
struct Cli {
    /// Catalog file to browse (defaults to the bundled catalog)
    catalog: Option<PathBuf>,

    /// Checkout step to highlight in the step bar
    #[arg(long, default_value_t = skipyard_tui::SELECT_SKIP_STEP)]
    step: usize,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the catalog as a filtered, sorted table
    List {
        /// Catalog file (defaults to the bundled catalog)
        catalog: Option<PathBuf>,

        /// Keep only skips of exactly this size (yards)
        #[arg(short, long)]
        size: Option<u32>,

        /// Keep only skips allowed on a public road
        #[arg(short, long)]
        road_only: bool,

        /// Upper bound on the VAT-inclusive price
        #[arg(short, long)]
        max_price: Option<u32>,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortArg::Popularity)]
        sort: SortArg,
    },

    /// Export the validated catalog to JSON
    Export {
        /// Catalog file (defaults to the bundled catalog)
        catalog: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum SortArg {
    #[default]
    Popularity,
    PriceAsc,
    PriceDesc,
    SizeAsc,
    SizeDesc,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Popularity => SortKey::Popularity,
            SortArg::PriceAsc => SortKey::PriceAsc,
            SortArg::PriceDesc => SortKey::PriceDesc,
            SortArg::SizeAsc => SortKey::SizeAsc,
            SortArg::SizeDesc => SortKey::SizeDesc,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::List {
            catalog,
            size,
            road_only,
            max_price,
            sort,
        }) => {
            run_list(catalog.as_deref(), size, road_only, max_price, sort.into())?;
        }
        Some(Command::Export { catalog, output }) => {
            run_export(catalog.as_deref(), output)?;
        }
        None => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let config = skipyard_tui::TuiConfig::new().with_current_step(cli.step);
            skipyard_tui::run_with_config(catalog, config)?;
        }
    }

    Ok(())
}

/// Load the given catalog file, or the bundled catalog when none given.
fn load_catalog(path: Option<&std::path::Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => skipyard_catalog::load(path).context("Failed to load catalog")?,
        None => skipyard_catalog::bundled().context("Bundled catalog is invalid")?,
    };

    for warning in &catalog.warnings {
        eprintln!("warning: {}", warning.message);
    }

    Ok(catalog)
}

/// Print the derived view as a table.
fn run_list(
    path: Option<&std::path::Path>,
    size: Option<u32>,
    road_only: bool,
    max_price: Option<u32>,
    sort: SortKey,
) -> Result<()> {
    let catalog = load_catalog(path)?;

    let mut filter = FilterState::new(&catalog.stats);
    filter.selected_size = size;
    filter.only_on_road = road_only;
    if let Some(bound) = max_price {
        filter.set_max_price(bound, &catalog.stats);
    }
    filter.sort_by = sort;

    let items = derive_view(&catalog, &filter);

    println!();
    println!("{}", "─".repeat(64));
    println!(
        " {} of {} offerings (prices incl. VAT)",
        items.len(),
        catalog.len()
    );
    println!("{}", "─".repeat(64));
    println!();

    for item in &items {
        let mut tags = Vec::new();
        if item.offering.recommended {
            tags.push("recommended");
        }
        if !item.offering.allowed_on_road {
            tags.push("not road-legal");
        }
        if item.offering.not_suitable_for_heavy_waste {
            tags.push("no heavy waste");
        }

        println!(
            " {:<14} {:>6} {:>12} {}",
            item.offering.title(),
            format!("£{}", item.price),
            format!("{} days", item.offering.hire_period_days),
            tags.join(", ")
        );
    }

    if items.is_empty() {
        println!(" No offerings match the given filters.");
    }
    println!();

    Ok(())
}

/// Export the validated catalog to JSON.
fn run_export(path: Option<&std::path::Path>, output: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(path)?;

    let json = serde_json::to_string_pretty(&catalog)?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}
