use clap::{Arg, ArgAction, ArgMatches, Command};
use color_eyre::Result;
use std::sync::Arc;

mod adapters;
mod application;
mod domain;
mod ports;

use adapters::storage::{FileTaskStorage, InMemoryTaskStorage};
use application::{AppError, TaskStore};
use domain::{Metrics, Task, TaskUpdate};
use ports::TaskStorage;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize color-eyre for better error reporting
    color_eyre::install()?;

    // Initialize logging to file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("taskdeck.log")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Parse command line arguments
    let matches = Command::new("taskdeck")
        .version("0.1.0")
        .about("A local task manager with durable storage")
        .long_about("Create, edit, complete, and delete short text tasks.\n\nTasks persist across runs in a single JSON file. Positions shown by `list` are 1-based and address tasks for done/edit/delete.")
        .arg(
            Arg::new("file")
                .long("file")
                .value_name("PATH")
                .help("Storage file (defaults to taskObjects.json in the platform data directory)")
                .global(true),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .action(ArgAction::SetTrue)
                .help("Run against in-memory storage; nothing is persisted")
                .global(true),
        )
        .subcommand(
            Command::new("add")
                .about("Add a task")
                .arg(Arg::new("title").help("Task title").required(true).index(1))
                .arg(
                    Arg::new("description")
                        .help("Task description")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("list").about("List tasks as JSON"))
        .subcommand(
            Command::new("done")
                .about("Toggle completion for the task at a position")
                .arg(
                    Arg::new("number")
                        .help("1-based task position as shown by `list`")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit the task at a position")
                .arg(
                    Arg::new("number")
                        .help("1-based task position as shown by `list`")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .value_name("TITLE")
                        .help("New title"),
                )
                .arg(
                    Arg::new("description")
                        .long("description")
                        .value_name("DESCRIPTION")
                        .help("New description"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete the task at a position")
                .arg(
                    Arg::new("number")
                        .help("1-based task position as shown by `list`")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("metrics").about("Show completion metrics as JSON"))
        .get_matches();

    // Pick the storage backend
    let storage: Arc<dyn TaskStorage> = if matches.get_flag("ephemeral") {
        Arc::new(InMemoryTaskStorage::new())
    } else if let Some(path) = matches.get_one::<String>("file") {
        Arc::new(FileTaskStorage::with_path(path.into()))
    } else {
        Arc::new(FileTaskStorage::new().map_err(AppError::Storage)?)
    };

    // Hydrate the store before any command reads or mutates the collection
    let store = TaskStore::new(storage);
    store.initialize().await;

    match matches.subcommand() {
        Some(("add", add_matches)) => {
            let title = add_matches
                .get_one::<String>("title")
                .map(String::as_str)
                .unwrap_or_default();
            let description = add_matches
                .get_one::<String>("description")
                .map(String::as_str)
                .unwrap_or_default();

            // The store silently absorbs blank input; pre-check so the user
            // hears about it
            if title.trim().is_empty() || description.trim().is_empty() {
                eprintln!("❌ Title and description must not be empty");
                std::process::exit(1);
            }

            store.add_task(title, description).await;
            println!("Added: {title}");
        }
        Some(("list", _)) => {
            let tasks = store.tasks().await;
            let json = serde_json::to_string_pretty(&tasks)?;
            println!("{json}");
        }
        Some(("done", done_matches)) => {
            let (index, task) = task_at_position(done_matches, &store.tasks().await);
            let toggled = TaskUpdate {
                complete: Some(!task.complete),
                ..Default::default()
            }
            .apply(&task);
            let status = toggled.status_display();

            if let Err(e) = store.update_task(index, toggled).await {
                eprintln!("❌ Failed to update task: {e}");
                std::process::exit(1);
            }
            println!("{}: {status}", task.title);
        }
        Some(("edit", edit_matches)) => {
            let (index, task) = task_at_position(edit_matches, &store.tasks().await);
            let update = TaskUpdate {
                title: edit_matches.get_one::<String>("title").cloned(),
                description: edit_matches.get_one::<String>("description").cloned(),
                complete: None,
            };
            if update.title.is_none() && update.description.is_none() {
                eprintln!("❌ Nothing to change: pass --title and/or --description");
                std::process::exit(1);
            }

            if let Err(e) = store.update_task(index, update.apply(&task)).await {
                eprintln!("❌ Failed to update task: {e}");
                std::process::exit(1);
            }
            println!("Updated task {}", index + 1);
        }
        Some(("delete", delete_matches)) => {
            let (_, task) = task_at_position(delete_matches, &store.tasks().await);
            store.delete_task(task.id).await;
            println!("Deleted: {}", task.title);
        }
        Some(("metrics", _)) | None => {
            let metrics = Metrics::from_tasks(&store.tasks().await);
            let json = serde_json::to_string_pretty(&metrics)?;
            println!("{json}");
        }
        _ => {
            eprintln!("❌ Unknown command");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Resolve the required 1-based `number` argument against the current
/// collection, exiting with a message when it does not name a task.
fn task_at_position(matches: &ArgMatches, tasks: &[Task]) -> (usize, Task) {
    let raw = matches
        .get_one::<String>("number")
        .map(String::as_str)
        .unwrap_or_default();

    let number: usize = match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("❌ '{raw}' is not a task number");
            std::process::exit(1);
        }
    };

    match number.checked_sub(1).and_then(|i| tasks.get(i).map(|t| (i, t.clone()))) {
        Some(found) => found,
        None => {
            eprintln!(
                "❌ No task at position {number} (the list has {} tasks)",
                tasks.len()
            );
            std::process::exit(1);
        }
    }
}
