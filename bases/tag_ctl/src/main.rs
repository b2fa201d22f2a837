use clap::Parser;
use color_eyre::Result;
mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut resolver = commands::resolver();

    match cli.command {
        Commands::Probe { source, json } => {
            let metadata = resolver.resolve(&source).await;
            commands::print_metadata(&source, &metadata, json)?;
        }

        Commands::Batch { sources, json } => {
            for source in sources {
                let metadata = resolver.resolve(&source).await;
                commands::print_metadata(&source, &metadata, json)?;
            }
        }
    }

    Ok(())
}
