use anyhow::{Context, Result, bail};
use booklet_impose::{BookletOptions, ValidationPolicy};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "booklet", about = "Saddle-stitch booklet printing helper", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a PDF into front-side and back-side booklet PDFs
    Prepare {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the two output PDFs (defaults to the input's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// First page of the range
        #[arg(long)]
        start: Option<usize>,

        /// Last page of the range (defaults to the last page of the document)
        #[arg(long)]
        end: Option<usize>,

        /// Load options from a JSON file; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the page numbers to enter in a printer dialog
    Pages {
        /// First page of the range
        #[arg(long)]
        start: Option<String>,

        /// Last page of the range
        #[arg(long)]
        end: Option<String>,

        /// Split the numbers into print runs of this many sheets
        #[arg(long)]
        wrap: Option<String>,

        /// Load options from a JSON file; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show sheet and padding statistics for a page count
    Stats {
        /// Number of pages in the booklet
        #[arg(long)]
        pages: usize,
    },
}

async fn load_options(config: Option<&Path>) -> Result<BookletOptions> {
    match config {
        Some(path) => {
            let options = BookletOptions::load(path)
                .await
                .with_context(|| format!("failed to load {}", path.display()))?;
            options.validate()?;
            Ok(options)
        }
        None => Ok(BookletOptions::default()),
    }
}

fn print_page_numbers(
    start: Option<String>,
    end: Option<String>,
    wrap: Option<String>,
    mut options: BookletOptions,
) -> Result<()> {
    let start = start.unwrap_or_else(|| options.start.to_string());
    let Some(end) = end.or_else(|| options.end.map(|end| end.to_string())) else {
        bail!("an end page is required (use --end or set it in the config file)");
    };

    let range = booklet_impose::validate_input(&start, &end, None, ValidationPolicy::Strict)?;

    if let Some(sheets) = wrap {
        options.set_wrap_sheets(&sheets)?;
    }
    let chunk_size = options.chunk_size();
    log::debug!("Formatting pages {}-{} in groups of {}", range.start, range.end, chunk_size);

    let plan = booklet_impose::impose(range.page_count());
    let front = booklet_impose::format_batch(&plan.front, range.offset(), chunk_size);
    let back = booklet_impose::format_batch(&plan.back, range.offset(), chunk_size);

    println!("--- FRONT SIDE PAGE NUMBERS ---");
    println!("{front}");
    println!();
    println!("--- BACK SIDE PAGE NUMBERS ---");
    println!("{back}");
    println!();
    println!("Note: enter these numbers manually in the printer dialog.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Prepare {
            input,
            output_dir,
            start,
            end,
            config,
        } => {
            let mut options = load_options(config.as_deref()).await?;
            if let Some(start) = start {
                options.start = start;
            }
            if end.is_some() {
                options.end = end;
            }

            let output_dir = output_dir
                .or_else(|| input.parent().map(Path::to_path_buf))
                .unwrap_or_default();

            log::debug!("Resolved options: {:?}", options);

            let prepared = booklet_impose::prepare_booklet(&input, &options, &output_dir).await?;
            println!("Front side → {}", prepared.front_path.display());
            println!("Back side  → {}", prepared.back_path.display());
        }

        Commands::Pages {
            start,
            end,
            wrap,
            config,
        } => {
            let options = load_options(config.as_deref()).await?;
            print_page_numbers(start, end, wrap, options)?;
        }

        Commands::Stats { pages } => {
            let stats = booklet_impose::calculate_statistics(pages)?;
            println!("Booklet Statistics:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Padded pages: {}", stats.padded_pages);
            println!("  Blank pages added: {}", stats.blank_pages_added);
            println!("  Sheets: {}", stats.sheets);
            println!("  Pages per face: {}", stats.pages_per_face);
        }
    }

    Ok(())
}
