// SPDX-FileCopyrightText: 2026 NEO Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! NEO - facilities team console.
//!
//! This is the binary entry point. It loads configuration, opens the demo
//! workspace and runs one command against it.

mod console;
mod render;

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use colored::Colorize;
use neo_core::{ChannelId, GroupId, NeoError};

use crate::console::Console;

/// NEO - facilities team console.
#[derive(Parser, Debug)]
#[command(name = "neo", version, about, long_about = None)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List chat channels with unread counts and previews.
    Channels,
    /// Show one channel's timeline, including routed system messages.
    Channel {
        /// Channel id, e.g. `ch1`.
        id: String,
    },
    /// List tasks with their status summary.
    Tasks {
        /// Only tasks of this group id.
        #[arg(long)]
        group: Option<String>,
    },
    /// Show unread totals, ignoring muted channels.
    Unread,
    /// Toggle the mute state of a channel on this device.
    Mute {
        /// Channel id to mute or unmute.
        id: String,
    },
    /// Post a message as the current user.
    Send {
        /// Channel id to post to.
        channel: String,
        /// Message text.
        text: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match neo_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            neo_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.console.log_level);

    if cli.plain || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli.command, config).await {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

async fn run(command: Option<Commands>, config: neo_config::NeoConfig) -> Result<(), NeoError> {
    let Some(command) = command else {
        println!("neo: use --help for available commands");
        return Ok(());
    };
    let mut console = Console::open(config)?;

    let lines = match command {
        Commands::Channels => console.channels(),
        Commands::Channel { id } => console.channel(&ChannelId::from(id))?,
        Commands::Tasks { group } => console.tasks(group.map(GroupId::from).as_ref()),
        Commands::Unread => {
            let (chat, notifications) = console.unread();
            vec![
                format!("  Unread messages:      {chat}"),
                format!("  Unread notifications: {notifications}"),
            ]
        }
        Commands::Mute { id } => {
            let id = ChannelId::from(id);
            let muted = console.toggle_mute(&id)?;
            let state = if muted { "muted".yellow() } else { "unmuted".green() };
            vec![format!("  {id} {state}")]
        }
        Commands::Send { channel, text } => {
            let channel = ChannelId::from(channel);
            let typist = console.send(&channel, &text).await?;
            let mut lines = vec![format!("  {} sent to {channel}", "✓".green())];
            if let Some(name) = typist {
                lines.push(format!("  {}", format!("{name} is typing…").italic().dimmed()));
            }
            lines
        }
    };

    for line in lines {
        println!("{line}");
    }
    println!();
    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("neo={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_channel_and_mute() {
        let cli = Cli::try_parse_from(["neo", "channel", "ch5"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Channel { id }) if id == "ch5"));

        let cli = Cli::try_parse_from(["neo", "--plain", "mute", "ch1"]).unwrap();
        assert!(cli.plain);
        assert!(matches!(cli.command, Some(Commands::Mute { .. })));
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = neo_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.console.name, "neo");
    }
}
