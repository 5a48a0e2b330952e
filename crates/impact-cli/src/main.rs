use std::{
    env,
    path::{Path, PathBuf},
};

use clap::Parser;
use cli::{Args, Commands};
use error::{CliResult, ErrorContext};
use impact_config::config::{default_config_path, generate_default_config, Config};
use list::{dump_repo_data, list_repositories, search_libraries, show_library};
use logging::setup_logging;
use state::{client_config, AppState};
use tracing::debug;

mod cli;
mod error;
mod list;
mod logging;
mod state;
mod utils;

fn config_path(args: &Args) -> CliResult<PathBuf> {
    let Some(path) = args.config.as_deref() else {
        return Ok(default_config_path());
    };

    let path = PathBuf::from(path);
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(env::current_dir()
            .with_context(|| "retrieving current directory".into())?
            .join(path))
    }
}

fn load_state(config_path: &Path, args: &Args) -> CliResult<AppState> {
    let config = Config::load_from(config_path)?;
    let client = client_config(&config, args)?;
    Ok(AppState::new(config, client))
}

fn run(args: &Args) -> CliResult<()> {
    let config_path = config_path(args)?;
    debug!("using configuration at {}", config_path.display());

    match &args.command {
        Commands::DefConfig => generate_default_config(&config_path)?,
        Commands::Repos => list_repositories(&load_state(&config_path, args)?, args.json)?,
        Commands::Search {
            query,
            case_sensitive,
            limit,
        } => {
            let state = load_state(&config_path, args)?;
            search_libraries(&state, query, *case_sensitive, *limit, args.json)?
        }
        Commands::Info {
            name,
        } => show_library(&load_state(&config_path, args)?, name, args.json)?,
        Commands::Dump => dump_repo_data(&load_state(&config_path, args)?)?,
    }

    Ok(())
}

fn handle_cli() -> CliResult<()> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        utils::set_color(false);
    }

    run(&args)
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
