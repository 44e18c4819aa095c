//! Terminal client driving a live list session against the inventory API.
//!
//! Usage: `inventory_search [assets|categories|locations|maintenance]`.
//! Every line typed on stdin replaces the search box content; lines starting
//! with `:` are commands (`:clear`, `:page N`, `:delete ID`, `:quit`).

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};

use asset_inventory::domain::Resource;
use asset_inventory::domain::asset::Asset;
use asset_inventory::domain::category::Category;
use asset_inventory::domain::location::Location;
use asset_inventory::domain::maintenance::MaintenanceRecord;
use asset_inventory::dto::table::Tabular;
use asset_inventory::models::config::ServerConfig;
use asset_inventory::pagination::PageControl;
use asset_inventory::repository::{ApiClient, ListEndpoint, ListQuery, SharedEndpoint};
use asset_inventory::session::{SessionCommand, spawn_session};
use asset_inventory::view::{AlertLevel, ListView, TableBody};

/// One parsed line of user input.
#[derive(Debug, PartialEq)]
enum Input<Id> {
    Command(SessionCommand<Id>),
    Quit,
}

fn parse_line<Id>(line: &str) -> Result<Input<Id>, String>
where
    Id: FromStr,
    Id::Err: Display,
{
    let Some(command) = line.trim().strip_prefix(':') else {
        return Ok(Input::Command(SessionCommand::Input(line.to_string())));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "q"), None) => Ok(Input::Quit),
        (Some("clear"), None) => Ok(Input::Command(SessionCommand::Clear)),
        (Some("page"), Some(page)) => match page.parse::<u32>() {
            Ok(page) if page > 0 => Ok(Input::Command(SessionCommand::GoToPage(page))),
            _ => Err(format!("invalid page number: {page}")),
        },
        (Some("delete"), Some(id)) => {
            let id = id.parse::<Id>().map_err(|err| format!("invalid id {id}: {err}"))?;
            Ok(Input::Command(SessionCommand::Delete(id)))
        }
        _ => Err(format!("unknown command: :{command}")),
    }
}

fn render<T: Tabular>(view: &ListView<T>) -> String {
    let mut out = format!("== {} ==\n", T::TITLE);
    if let Some(filter) = view.search().applied_filter() {
        out.push_str(&format!("search: {filter}\n"));
    }

    match view.body() {
        TableBody::Skeleton(rows) => {
            for _ in 0..rows {
                out.push_str("  ░░░░░░░░░░░░░░░░░░░░\n");
            }
        }
        TableBody::Empty { filter: Some(term) } => {
            out.push_str(&format!("  No {} match \"{term}\".\n", T::TITLE.to_lowercase()));
        }
        TableBody::Empty { filter: None } => {
            out.push_str(&format!("  No {} yet.\n", T::TITLE.to_lowercase()));
        }
        TableBody::Rows(records) => {
            out.push_str(&format!("  #  | {}\n", T::COLUMNS.join(" | ")));
            for record in records {
                let row = record.table_row();
                let cells: Vec<&str> = row.cells.iter().map(|cell| cell.text.as_str()).collect();
                out.push_str(&format!("  {} | {}\n", row.id, cells.join(" | ")));
            }
        }
    }

    let meta = view.meta();
    if let (Some(from), Some(to)) = (meta.from, meta.to) {
        out.push_str(&format!("Showing {from} to {to} of {} results\n", meta.total));
    }

    let plan = view.pagination();
    if !plan.is_empty() {
        let pages: Vec<String> = plan
            .pages
            .iter()
            .map(|control| match control {
                PageControl::Page {
                    number,
                    active: true,
                    ..
                } => format!("[{number}]"),
                PageControl::Page { number, .. } => number.to_string(),
                PageControl::Ellipsis => "…".to_string(),
            })
            .collect();
        out.push_str(&format!("Pages: {}\n", pages.join(" ")));
    }

    out
}

async fn run_session<T: Tabular>(endpoint: SharedEndpoint<T>, per_page: u32) -> std::io::Result<()> {
    let first_page = endpoint
        .fetch_page(&ListQuery::new().paginate(1, per_page))
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to load {}: {e}", T::PATH)))?;

    let mut session = spawn_session(ListView::new(first_page, None), endpoint, Some(per_page));
    println!("{}", render(&*session.updates.borrow_and_update()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line::<T::Id>(&line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Command(command)) => {
                        if session.commands.send(command).await.is_err() {
                            break;
                        }
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
            changed = session.updates.changed() => {
                if changed.is_err() {
                    break;
                }
                println!("{}", render(&*session.updates.borrow_and_update()));
            }
            Some(notification) = session.notifications.recv() => match notification.level {
                AlertLevel::Success => println!("✔ {}", notification.message),
                AlertLevel::Error => eprintln!("✘ {}", notification.message),
            },
        }
    }

    drop(session.commands);
    if let Err(err) = session.task.await {
        log::error!("List session ended abnormally: {err}");
    }
    Ok(())
}

fn endpoint<T: Resource>(api: &Arc<ApiClient>) -> SharedEndpoint<T> {
    Arc::new(api.endpoint::<T>())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let api = ApiClient::new(server_config.api_client_config())
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
    let api = Arc::new(api);
    let per_page = server_config.per_page;

    let collection = env::args().nth(1).unwrap_or_else(|| Asset::PATH.to_string());
    if collection == Asset::PATH {
        run_session(endpoint::<Asset>(&api), per_page).await
    } else if collection == Category::PATH {
        run_session(endpoint::<Category>(&api), per_page).await
    } else if collection == Location::PATH {
        run_session(endpoint::<Location>(&api), per_page).await
    } else if collection == MaintenanceRecord::PATH {
        run_session(endpoint::<MaintenanceRecord>(&api), per_page).await
    } else {
        log::error!("Unknown collection '{collection}'");
        std::process::exit(2);
    }
}
