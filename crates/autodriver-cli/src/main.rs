//! CLI entry point - the composition root.
//!
//! Configuration is resolved once here and handed to handlers. Only the
//! `build` command constructs the Gemini-backed workbench.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use autodriver_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use autodriver_gui::WorkbenchOptions;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::load(cli.model.as_deref())?;

    match command {
        Commands::Build(args) => {
            let ctx = bootstrap(&config)?;
            handlers::build::execute(&ctx, &args).await?;
        }
        Commands::Web {
            port,
            host,
            allow_origins,
        } => {
            handlers::web::execute(&config, &host, port, allow_origins).await?;
        }
        Commands::Options => {
            let options =
                WorkbenchOptions::with_default_flags(config.settings.effective_extra_flags());
            handlers::options::execute(&options);
        }
        Commands::Schema => {
            handlers::schema::execute()?;
        }
        Commands::Prompt(input) => {
            handlers::prompt::execute(&input, &config.settings)?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        // A failed build has already printed its own report.
        if !matches!(err.downcast_ref::<CliError>(), Some(CliError::BuildFailed)) {
            eprintln!("{} {err:#}", console::style("error:").red().bold());
        }
        std::process::exit(code);
    }
}
