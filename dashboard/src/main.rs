use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard::{DashboardShell, Notification, ShellCommand, ShellView, auth, setup_environment};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "dashboard",
    version,
    about = "Restaurant admin dashboard driven by JSON-lines commands"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read one JSON command per stdin line and answer on stdout (default)
    Run,
    /// Print an argon2 hash for ADMIN_PASSWORD_HASH
    HashPassword {
        /// Plain-text password to hash
        password: String,
    },
}

/// One stdout line per input line
#[derive(Serialize)]
struct Response<'a> {
    notification: Option<Notification>,
    view: ShellView<'a>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(),
        Command::HashPassword { password } => {
            let hash = auth::hash_password(&password)
                .map_err(|e| anyhow::anyhow!("failed to hash password: {}", e))?;
            println!("{}", hash);
            Ok(())
        }
    }
}

fn run() -> Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment();
    tracing::info!(environment = %config.environment, "Dashboard starting");

    // 2. 构建外壳
    let mut shell = DashboardShell::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build dashboard: {}", e))?;

    // 3. 命令循环
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let notification = match serde_json::from_str::<ShellCommand>(&line) {
            Ok(command) => shell.dispatch(command),
            Err(e) => {
                tracing::warn!(error = %e, "Unparseable command");
                Some(Notification::destructive("Error", format!("Invalid command: {}", e)))
            }
        };

        let response = Response {
            notification,
            view: shell.render(),
        };
        serde_json::to_writer(&mut stdout, &response).context("failed to encode response")?;
        writeln!(stdout).context("failed to write stdout")?;
        stdout.flush().context("failed to flush stdout")?;
    }

    tracing::info!("Input closed, dashboard stopped");
    Ok(())
}
