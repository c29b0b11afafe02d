mod cli;
mod config;
mod engine;
mod error;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use engine::{Converter, Merger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("pmd_sarif=debug")
    } else if cli.quiet {
        EnvFilter::new("pmd_sarif=error")
    } else {
        EnvFilter::new("pmd_sarif=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    debug!("pmd-sarif v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Convert(args) => {
            let converter = Converter::new();
            let doc = converter.run(&args.pmd_json, &args.sarif_out, config.output.pretty)?;
            if cli.summary {
                report::terminal::render(&doc, &args.sarif_out);
            }
        }
        Commands::Merge(args) => {
            let merger = Merger::new();
            let doc = merger.run(&args.pmd_sarif, &args.spot_sarif, &args.out, config.output.pretty)?;
            if cli.summary {
                report::terminal::render(&doc, &args.out);
            }
        }
        Commands::Fingerprint(args) => {
            let fp = report::fingerprint::fingerprint(&args.file, args.line, &args.rule, &args.message);
            println!("{}", fp);
        }
        Commands::Init => {
            if config::init_config(&std::env::current_dir()?)? {
                info!("Pass it with --config to apply its settings.");
            }
        }
    }

    Ok(())
}
