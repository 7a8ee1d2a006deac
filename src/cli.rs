// Command-line surface: clap definitions plus the dispatch from a parsed
// command to the flows in `ui`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use crate::api::ApiClient;
use crate::config::Config;
use crate::endpoints::Endpoints;
use crate::ui::{self, DownloadOptions};

#[derive(Parser, Debug)]
#[command(name = "storecli", version, about = "Client for a remote file storage server")]
pub struct Cli {
    /// Server address; `http://` is assumed when no scheme is given
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// Storage name on the server
    #[arg(short, long, global = true)]
    pub storage: Option<String>,

    /// Use the permanent area of the storage
    #[arg(short, long, global = true)]
    pub permanent: bool,

    /// Print downloaded files instead of saving them (get only)
    #[arg(short, long, global = true)]
    pub view: bool,

    /// Directory downloads are saved to
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Config file to read instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (repeat for more)
    #[arg(long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not draw progress bars
    #[arg(long, global = true)]
    pub no_progress: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the files in the current storage with their numbers
    List,
    /// Download files by number (see `list`), e.g. `get 1 2 3`
    Get {
        #[arg(value_name = "INDEX", allow_negative_numbers = true)]
        indices: Vec<String>,
    },
    /// Upload local files to the current storage
    Push {
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
    /// Delete files by number (see `list`), e.g. `del 1 2`
    Del {
        #[arg(value_name = "INDEX", allow_negative_numbers = true)]
        indices: Vec<String>,
    },
    /// Share a text message under a title
    Text { title: String, body: String },
    /// Show the effective settings, optionally writing them to the config file
    Config {
        #[arg(long)]
        save: bool,
    },
}

impl Cli {
    /// Settings after layering the config file, environment and flags.
    pub fn settings(&self) -> Result<Config> {
        let cfg = Config::load(self.config.as_deref())?
            .apply_env(|key| std::env::var(key).ok())
            .apply_flags(self.host.as_deref(), self.storage.as_deref());
        debug!(host = %cfg.host, storage = %cfg.storage, "settings resolved");
        Ok(cfg)
    }
}

/// Execute the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let cfg = cli.settings()?;
    let progress = !cli.no_progress;

    match cli.command {
        Command::List => ui::list(&connect(&cfg, cli.permanent)?)?,
        Command::Get { indices } => {
            let opts = DownloadOptions {
                view: cli.view,
                dir: cli.dir,
                progress,
            };
            ui::download(&connect(&cfg, cli.permanent)?, &indices, &opts)?
        }
        Command::Push { paths } => ui::push(&connect(&cfg, cli.permanent)?, &paths, progress)?,
        Command::Del { indices } => ui::delete(&connect(&cfg, cli.permanent)?, &indices)?,
        Command::Text { title, body } => {
            ui::share_text(&connect(&cfg, cli.permanent)?, &title, &body)?
        }
        Command::Config { save } => show_config(cli.config.as_deref(), &cfg, save)?,
    }
    Ok(())
}

fn connect(cfg: &Config, permanent: bool) -> Result<ApiClient> {
    let endpoints = Endpoints::new(&cfg.host, &cfg.storage, permanent)?;
    ApiClient::new(endpoints).context("Failed to build HTTP client")
}

fn show_config(explicit: Option<&Path>, cfg: &Config, save: bool) -> Result<()> {
    let path = explicit.map(Path::to_path_buf).or_else(Config::default_path);
    println!("host    = {}", cfg.host);
    println!("storage = {}", cfg.storage);
    match &path {
        Some(p) => println!("file    = {}", p.display()),
        None => println!("file    = (none)"),
    }

    if save {
        let path = path.context("No config directory on this platform; pass --config")?;
        cfg.save(&path)?;
        println!("Saved to {}", path.display());
    }
    Ok(())
}
