use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};

use todosync::config::Config;
use todosync::logging::init_tracing;
use todosync::store::{Filter, MessageKind, Store, TaskChanges};

#[derive(Parser)]
#[command(name = "todosync", about = "Todo list client synced to a remote collection")]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the remote server base URL.
    #[arg(long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the task list.
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Add a task and save.
    Add {
        /// Task text; multiple words are joined.
        text: Vec<String>,
    },
    /// Mark a task done and save.
    Done { id: String },
    /// Remove a task and save.
    Remove { id: String },
    /// Mark every task done and save.
    CompleteAll,
    /// Drop all completed tasks and save.
    ClearCompleted,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for Filter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Filter::All,
            FilterArg::Active => Filter::Active,
            FilterArg::Completed => Filter::Completed,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(server) = cli.server {
        config.server.base_url = server;
        config.validate()?;
    }

    // The store lives exactly as long as this invocation.
    let store = Store::new(&config);
    store.fetch_todos().await;
    ensure_synced(&store)?;

    match cli.command {
        Command::List { filter } => {
            store.set_filter(filter.into());
            for task in store.filtered_tasks() {
                let mark = if task.done { "x" } else { " " };
                println!("[{}] {}  {}", mark, task.id, task.text);
            }
            let stats = store.task_stats();
            println!(
                "{} total / {} completed / {} active ({}% open)",
                stats.total, stats.completed, stats.active, stats.percent
            );
            return Ok(());
        }
        Command::Add { text } => {
            let text = text.join(" ");
            if store.create_task(&text).is_none() {
                bail!("refusing to add an empty task");
            }
        }
        Command::Done { id } => {
            require_task(&store, &id)?;
            store.update_task(&id, TaskChanges::done(true));
        }
        Command::Remove { id } => {
            require_task(&store, &id)?;
            store.remove_task(&id);
        }
        Command::CompleteAll => store.complete_all(),
        Command::ClearCompleted => store.clear_completed(),
    }

    let local = store.all_tasks();
    store.save_todos(&local).await;
    ensure_synced(&store)?;

    Ok(())
}

fn require_task(store: &Store, id: &str) -> anyhow::Result<()> {
    if store.task_by_id(id).is_none() {
        bail!("no task with id '{}'", id);
    }
    Ok(())
}

fn ensure_synced(store: &Store) -> anyhow::Result<()> {
    if store.message().map(|m| m.kind) == Some(MessageKind::Error) {
        bail!("synchronization failed; see log for details");
    }
    Ok(())
}
