use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rfc::client::RfcClient;
use rfc::highlight::Color;
use rfc::index::{self, INDEX_MAX_AGE, IndexCache};
use rfc::{render, search};

#[derive(Parser, Debug)]
#[command(name = "rfc", version, about = "Search for and read RFCs")]
struct Cli {
    /// The RFC number to read, or search terms to match against the index
    rfc: Vec<String>,

    /// Return general information about an RFC instead of its text
    #[arg(long)]
    info: bool,

    /// Force search, even when the first term looks like an RFC number
    #[arg(short, long)]
    search: bool,

    /// Highlight colour (default: peach for search matches, cyan for links)
    #[arg(long, value_enum)]
    color: Option<Color>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only document and search output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rfc=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.rfc.is_empty() {
        eprintln!("A search term is required!");
        process::exit(1);
    }

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = RfcClient::new()?;

    let rfc_number = if cli.search {
        None
    } else {
        cli.rfc[0].parse::<u32>().ok()
    };

    match rfc_number {
        Some(number) => {
            let id = format!("{number:04}");
            let record = client.fetch_rfc(&id).await?;
            if cli.info {
                println!("{}", render::render_info(&record));
            } else {
                let color = cli.color.unwrap_or(Color::Cyan);
                println!("{}", render::render_document(&record, color));
            }
        }
        None => {
            let query = search::compile_query(&cli.rfc)?;
            let cache = IndexCache::new(IndexCache::default_path()?, INDEX_MAX_AGE);
            let index_text = cache.get_index(&client).await?;
            let entries = index::parse_entries(&index_text);
            let matches = search::search(&entries, &query);

            let color = cli.color.unwrap_or(Color::Peach);
            render::write_search_results(&mut io::stdout().lock(), &matches, &query, color)?;
        }
    }

    Ok(())
}
