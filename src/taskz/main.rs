use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::str::FromStr;
use taskz::cli::print::print_messages;
use taskz::cli::render::TermSurface;
use taskz::config::TaskzConfig;
use taskz::controller::{CmdMessage, TaskList};
use taskz::error::{Result, TaskzError};
use taskz::model::Filter;
use taskz::store::fs::FileStore;
use taskz::surface::Event;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    data_dir: PathBuf,
    config: TaskzConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { text }) => handle_event(ctx, Event::Add(text.join(" "))),
        Some(Commands::List { filter }) => {
            let filter = parse_filter(filter.as_deref())?;
            handle_event(ctx, Event::SetFilter(filter))
        }
        Some(Commands::Done { id }) => handle_event(ctx, Event::Toggle(id)),
        Some(Commands::Delete { id }) => handle_event(ctx, Event::Delete(id)),
        Some(Commands::Clear) => handle_event(ctx, Event::Clear),
        Some(Commands::Ui) => handle_ui(ctx),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
        None => handle_event(ctx, Event::SetFilter(Filter::All)),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = resolve_data_dir()?;
    let config = TaskzConfig::load(&data_dir).unwrap_or_default();
    Ok(AppContext { data_dir, config })
}

fn resolve_data_dir() -> Result<PathBuf> {
    // Env override first, mainly for tests and portable setups
    if let Ok(dir) = std::env::var("TASKZ_DATA") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "taskz", "taskz")
        .ok_or_else(|| TaskzError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn open_list(ctx: AppContext) -> Result<TaskList<FileStore, TermSurface>> {
    let store = FileStore::new(ctx.data_dir);
    let surface = TermSurface::new(ctx.config.line_width);
    TaskList::open(store, surface)
}

fn handle_event(ctx: AppContext, event: Event) -> Result<()> {
    let mut list = open_list(ctx)?;
    let messages = list.handle(event)?;
    print_messages(&messages);
    Ok(())
}

fn handle_ui(ctx: AppContext) -> Result<()> {
    let mut list = open_list(ctx)?;
    list.run()
}

fn handle_config(ctx: AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("line-width"), None) => {
            println!("line-width = {}", ctx.config.line_width);
        }
        (Some("line-width"), Some(v)) => {
            let width: usize = v
                .parse()
                .map_err(|_| TaskzError::Api(format!("Not a width: {}", v)))?;
            let mut config = ctx.config;
            config.set_line_width(width);
            config.save(&ctx.data_dir)?;
            print_messages(&[CmdMessage::success(format!(
                "line-width = {}",
                config.line_width
            ))]);
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn parse_filter(arg: Option<&str>) -> Result<Filter> {
    match arg {
        None => Ok(Filter::All),
        Some(s) => Filter::from_str(s),
    }
}
