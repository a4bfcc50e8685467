//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::storage_from_config;
use crate::adapters::web::{build_router, AppState, DEFAULT_SYMBOL};
use crate::domain::error::TavaultError;
use crate::domain::query::ArtifactQuery;
use crate::domain::retrieval::retrieve;
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "tavault", about = "Technical-analysis artifact server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Retrieve artifacts for a symbol/date and print the combined JSON
    Fetch {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Validate a configuration file
    CheckConfig {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Serve { config } => run_serve(&config),
        Command::Fetch {
            config,
            symbol,
            date,
        } => run_fetch(&config, symbol.as_deref(), date.as_deref()),
        Command::CheckConfig { config } => run_check_config(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = TavaultError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn run_serve(config_path: &PathBuf) -> ExitCode {
    dotenvy::dotenv().ok();
    crate::logging::setup_logger();

    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let storage = match storage_from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let addr: SocketAddr = match config
        .get_string("server", "listen")
        .unwrap_or_else(|| "127.0.0.1:3000".to_string())
        .parse()
    {
        Ok(addr) => addr,
        Err(e) => {
            let err = TavaultError::ConfigInvalid {
                section: "server".into(),
                key: "listen".into(),
                reason: e.to_string(),
            };
            eprintln!("error: {err}");
            return (&err).into();
        }
    };

    let state = AppState {
        storage,
        default_symbol: config
            .get_string("server", "default_symbol")
            .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
    };
    let router = build_router(state);

    info!("starting server on {addr}");

    tokio::runtime::Runtime::new().unwrap().block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        axum::serve(listener, router).await.unwrap();
    });

    ExitCode::SUCCESS
}

fn run_fetch(config_path: &PathBuf, symbol: Option<&str>, date: Option<&str>) -> ExitCode {
    dotenvy::dotenv().ok();
    crate::logging::setup_logger();

    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let storage = match storage_from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let symbol = symbol
        .map(str::to_string)
        .or_else(|| config.get_string("server", "default_symbol"))
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let query = match date {
        Some(date) => ArtifactQuery::new(symbol, date),
        None => ArtifactQuery::for_today(symbol),
    };

    let outcome = tokio::runtime::Runtime::new()
        .unwrap()
        .block_on(retrieve(storage.as_ref(), &query));

    match outcome {
        Ok(result) => {
            // Serialization of a just-parsed Value cannot fail.
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_check_config(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = storage_from_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    println!("config ok");
    ExitCode::SUCCESS
}
