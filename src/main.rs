//! Bombe Menu - plot a Turing bombe menu
//!
//! Reads a menu file, echoes its uppercased lines and registers, and draws
//! the wiring graph.
//!
//! # Usage
//!
//! ```bash
//! bombe-menu data/menu.txt --open
//! bombe-menu data/menu.txt --format dot -o menu.dot
//! ```

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bombe_menu::{
    error::{MenuError, Result},
    layout::DEFAULT_ITERATIONS,
    menu, output,
    render::{to_dot, Figure, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    spring_layout, LayoutConfig, WiringGraph, DEFAULT_MENU_PATH,
};

/// Output formats for the rendered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// SVG picture with spring layout
    Svg,
    /// Graphviz DOT source
    Dot,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Dot => "dot",
        }
    }
}

/// Turing bombe menu plotter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the menu file
    #[arg(value_name = "MENU_FILE", default_value = DEFAULT_MENU_PATH)]
    menu_file: PathBuf,

    /// Output file (defaults to the menu path with the format's extension)
    #[arg(short, long, env = "BOMBE_MENU_OUTPUT")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Open the rendering in the system viewer
    #[arg(long)]
    open: bool,

    /// Seed of the spring layout
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Spring layout iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Figure width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Figure height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse the menu, echoing every line
    let menu = menu::parse_file_with_trace(&args.menu_file, io::stdout().lock())?;
    println!("Registers: {}", menu.register_list());

    // Build the wiring graph
    let graph = WiringGraph::from_menu(&menu);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built wiring graph"
    );

    let title = args.menu_file.display().to_string();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| output::default_output_path(&args.menu_file, args.format.extension()));

    match args.format {
        Format::Svg => {
            let config = LayoutConfig::new()
                .with_iterations(args.iterations)
                .with_seed(args.seed);
            let layout = spring_layout(&graph, &config);

            let mut figure = Figure::new(title).with_size(args.width, args.height);
            figure.draw(&graph, &layout);
            figure.draw_edge_labels(&graph, &layout);

            let mut sink = output::create_output(&output_path)?;
            figure
                .show(&mut sink)
                .map_err(|e| MenuError::output_write(&output_path, e))?;
        }
        Format::Dot => {
            output::write_output(&output_path, &to_dot(&graph, &title))?;
        }
    }

    if args.open {
        output::open_viewer(&output_path)?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
