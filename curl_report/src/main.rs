use clap::Parser;
use curl_report::{generate, load, Flavor};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "curl-report")]
#[command(about = "Run recorded curl commands and print their output as a document")]
struct Cli {
    /// Test plan (TOML, or JSON with a .json extension). Reads stdin when omitted.
    plan: Option<PathBuf>,

    /// Output markup
    #[arg(long, value_enum, default_value_t = Flavor::Org)]
    format: Flavor,

    /// Dump parsed cases and captured output to stderr
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "curl_report=debug" } else { "curl_report=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let plan = match load(cli.plan.as_deref()) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("curl-report: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?plan, "loaded test plan");
    print!("{}", generate(&plan, cli.format));
}
