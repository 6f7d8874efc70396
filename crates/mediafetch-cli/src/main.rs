//! CLI entry point - the composition root.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use mediafetch_cli::handlers::download::Destination;
use mediafetch_cli::{Cli, CliError, Commands, bootstrap, handlers, tool_config};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> anyhow::Result<Result<(), CliError>> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(Ok(()));
    };

    let ctx = bootstrap(tool_config(cli.system_tools));

    let result = match command {
        Commands::Download {
            url,
            format,
            output,
            choose,
        } => {
            let destination = Destination::from_args(output, choose);
            handlers::download::execute(&ctx.backend, url, format, destination).await
        }
        Commands::Check => handlers::check::execute(&ctx.config),
        Commands::Paths => handlers::paths::execute(&ctx.config),
        Commands::Open { path } => handlers::open::execute(&ctx.backend, &path),
    };
    Ok(result)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli).await? {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}
