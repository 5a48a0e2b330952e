use impact_registry::{find_library, search, LibraryInfo};
use nu_ansi_term::Color::{Blue, Cyan, Green, LightRed, Yellow};
use tracing::info;

use crate::{error::CliResult, state::AppState, utils::Colored};

pub fn list_repositories(state: &AppState, json: bool) -> CliResult<()> {
    let repositories = &state.config().repositories;

    if json {
        let entries: Vec<_> = repositories
            .iter()
            .map(|repo| {
                serde_json::json!({
                    "name": repo.name,
                    "url": repo.url,
                    "enabled": repo.is_enabled(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if repositories.is_empty() {
        info!("No repositories configured");
        return Ok(());
    }

    for (idx, repo) in repositories.iter().enumerate() {
        let disabled = if repo.is_enabled() {
            String::new()
        } else {
            format!(" {}", Colored(Yellow, "[disabled]"))
        };
        info!(
            "[{}] {} {}{}",
            idx + 1,
            Colored(Green, &repo.name),
            repo.url,
            disabled
        );
    }

    Ok(())
}

pub fn search_libraries(
    state: &AppState,
    query: &str,
    case_sensitive: bool,
    limit: Option<usize>,
    json: bool,
) -> CliResult<()> {
    let data = state.repo_data()?;
    let limit = limit.unwrap_or_else(|| state.config().search_limit());
    let results = search(&data, query, case_sensitive, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        info!("No libraries found matching '{}'", query);
        return Ok(());
    }

    for (idx, library) in results.iter().enumerate() {
        info!(
            "[{}] {}{} | {}",
            idx + 1,
            Colored(Blue, &library.name),
            version_suffix(library),
            library.description.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub fn show_library(state: &AppState, name: &str, json: bool) -> CliResult<()> {
    let data = state.repo_data()?;
    let library = find_library(&data, name)?;

    if json {
        let entry = &data[library.name.as_str()];
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    info!("{}: {}", Colored(Cyan, "Name"), Colored(Blue, &library.name));
    if let Some(description) = &library.description {
        info!("{}: {}", Colored(Cyan, "Description"), description);
    }
    if let Some(homepage) = &library.homepage {
        info!("{}: {}", Colored(Cyan, "Homepage"), homepage);
    }
    if library.versions.is_empty() {
        info!("{}: -", Colored(Cyan, "Versions"));
    } else {
        info!(
            "{}: {}",
            Colored(Cyan, "Versions"),
            library
                .versions
                .iter()
                .map(|v| Colored(LightRed, v).to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

pub fn dump_repo_data(state: &AppState) -> CliResult<()> {
    let data = state.repo_data()?;
    println!("{}", serde_json::to_string_pretty(&*data)?);
    Ok(())
}

fn version_suffix(library: &LibraryInfo) -> String {
    library
        .latest_version()
        .map(|v| format!(":{}", Colored(LightRed, v)))
        .unwrap_or_default()
}
