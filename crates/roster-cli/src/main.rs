use anyhow::Context;
use clap::{Arg, ArgAction, Command, value_parser};
use roster_cli::shell::{self, Outcome, Shell};
use roster_core::{RosterSession, SessionConfig};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Command::new("roster")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Gated, continuously ordered driver trip roster")
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .value_parser(value_parser!(PathBuf))
                .help("Default path for the save/load commands"),
        )
        .arg(
            Arg::new("secret-file")
                .long("secret-file")
                .value_parser(value_parser!(PathBuf))
                .help("Read the session pass-value from this file"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress the startup banner"),
        );

    let matches = cli.get_matches();
    let snapshot_path = matches.get_one::<PathBuf>("snapshot").cloned();
    let quiet = matches.get_flag("quiet");

    let mut config = SessionConfig::default();
    if let Some(path) = matches.get_one::<PathBuf>("secret-file") {
        let pass_value = std::fs::read_to_string(path)
            .with_context(|| format!("reading secret file {}", path.display()))?;
        config = config.with_pass_value(pass_value.trim_end_matches(['\r', '\n']));
    }

    let mut repl = Shell::new(RosterSession::new(&config), snapshot_path);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    if !quiet {
        println!("trip roster {} - type 'help' for commands", roster_core::VERSION);
    }

    for line in stdin.lock().lines() {
        let line = line.context("reading input")?;
        match shell::Command::parse(&line) {
            Ok(Some(command)) => {
                if repl.execute(command, &mut stdout)? == Outcome::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(error) => writeln!(stdout, "{error}")?,
        }
        stdout.flush()?;
    }

    Ok(())
}
