use super::menu;
use super::render::{render_messages, render_result};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use shelf::api::{CmdMessage, CmdResult, ShelfApi};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::store::fs::FileStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DATA_FILE_KEY: &str = "data-file";

struct AppContext {
    api: ShelfApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        // Config does not need a catalog
        Some(Commands::Config { key, value }) => handle_config(key.as_deref(), value.as_deref()),
        command => dispatch(command, init_context(cli.data.as_deref())?),
    }
}

fn dispatch(command: Option<Commands>, ctx: AppContext) -> Result<()> {
    match command {
        Some(Commands::Add {
            title,
            author,
            year,
        }) => print_result(ctx.api.add_update_book(&title, &author, &year)?),
        Some(Commands::Status { id, status }) => {
            print_result(ctx.api.change_status_by_id(&id, &status)?)
        }
        Some(Commands::Lend { id }) => print_result(ctx.api.borrow_book(&id)?),
        Some(Commands::Delete { id }) => print_result(ctx.api.delete_book_by_id(&id)?),
        Some(Commands::List) => print_result(ctx.api.print_all_books_info()?),
        Some(Commands::Search { keyword }) => print_result(ctx.api.find_all_by_keyword(&keyword)?),
        Some(Commands::Config { key, value }) => {
            handle_config(key.as_deref(), value.as_deref())
        }
        Some(Commands::Menu) | None => {
            let stdin = std::io::stdin();
            menu::run(&ctx.api, stdin.lock(), std::io::stdout())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "shelf=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "shelf", "shelf")
        .ok_or_else(|| ShelfError::Config("Could not determine a home directory".to_string()))
}

fn init_context(data_override: Option<&Path>) -> Result<AppContext> {
    let data_file = match data_override {
        Some(path) => path.to_path_buf(),
        None => default_data_file()?,
    };
    debug!(path = %data_file.display(), "using catalog file");

    Ok(AppContext {
        api: ShelfApi::new(FileStore::new(data_file)),
    })
}

/// Configured data file, or `lib_data.json` in the platform data directory, which
/// is created on first use.
fn default_data_file() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config = ShelfConfig::load(dirs.config_dir())?;

    if let Some(path) = config.data_file {
        return Ok(path);
    }

    let data_dir = dirs.data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }
    Ok(config.resolve_data_file(None, data_dir))
}

fn handle_config(key: Option<&str>, value: Option<&str>) -> Result<()> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();
    let mut config = ShelfConfig::load(config_dir)?;

    match (key, value) {
        (None, _) | (Some(DATA_FILE_KEY), None) => {
            let current = config.resolve_data_file(None, dirs.data_dir());
            println!("{} = {}", DATA_FILE_KEY, current.display());
        }
        (Some(DATA_FILE_KEY), Some(path)) => {
            config.data_file = Some(PathBuf::from(path));
            config.save(config_dir)?;
            print!(
                "{}",
                render_messages(&[CmdMessage::success(format!(
                    "{} set to {}",
                    DATA_FILE_KEY, path
                ))])
            );
        }
        (Some(other), _) => {
            print!(
                "{}",
                render_messages(&[CmdMessage::error(format!(
                    "Unknown config key: {}",
                    other
                ))])
            );
        }
    }
    Ok(())
}

fn print_result(result: CmdResult) -> Result<()> {
    print!("{}", render_result(&result));
    Ok(())
}
