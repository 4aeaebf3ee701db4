//! Command-line front end.
//!
//! Subcommands:
//! - `pick`: draw one or more winners
//! - `teams`: split the list into teams by count or by size
//! - `draw`: run several pick rounds over one list, removing winners by default
//!
//! Entries come from `--file` or stdin, one per line.

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::client_adapter::{pick_to_json, teams_to_json};
use crate::config::{OutputFormat, Settings};
use crate::error::{PickerError, Result};
use crate::logging::init_logging;
use crate::picker_engine::{
    parse_entries, pick, split_teams, Entry, PartitionMode, PickMode, PickRequest,
    PickerSession, TeamRequest, MAX_DRAWS,
};

/// Random Picker - pick random winners or split a list into teams
#[derive(Parser)]
#[command(name = "random-picker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./random_picker.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain text (overrides config)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Pick random entries from the list
    Pick(PickArgs),

    /// Split the list into teams
    Teams(TeamArgs),

    /// Pick one winner per round over several rounds
    Draw(DrawArgs),
}

/// Where the list comes from, shared by every subcommand
#[derive(Args, Clone, Default)]
pub struct InputArgs {
    /// File with one entry per line (reads stdin when omitted)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Seed for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Clone, Default)]
pub struct PickArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of entries to pick (defaults to config `default_count`)
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Allow the same entry to be picked more than once
    #[arg(long)]
    pub replace: bool,
}

#[derive(Args, Clone)]
pub struct TeamArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// `count` for a fixed number of teams, `size` for a fixed team size
    #[arg(long, short, default_value = "count")]
    pub mode: PartitionMode,

    /// Team count or team size (defaults to config `default_teams`)
    #[arg(long, short, allow_negative_numbers = true)]
    pub value: Option<i64>,
}

#[derive(Args, Clone)]
pub struct DrawArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of rounds
    #[arg(long, short, default_value_t = 1)]
    pub rounds: usize,

    /// Keep winners in the list between rounds
    #[arg(long)]
    pub keep: bool,
}

impl Command {
    fn input(&self) -> &InputArgs {
        match self {
            Command::Pick(args) => &args.input,
            Command::Teams(args) => &args.input,
            Command::Draw(args) => &args.input,
        }
    }
}

/// Load settings, start logging, read the list and print the result.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(&settings.logging);

    let text = read_input(cli.command.input())?;
    let output = if cli.json { OutputFormat::Json } else { settings.output };

    let rendered = execute(&cli.command, &settings, output, &text)?;
    println!("{rendered}");
    Ok(())
}

fn read_input(input: &InputArgs) -> Result<String> {
    match &input.file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Run one subcommand over already-read input text and render the result.
pub fn execute(
    command: &Command,
    settings: &Settings,
    output: OutputFormat,
    text: &str,
) -> Result<String> {
    let entries = parse_entries(text);
    if entries.is_empty() {
        return Err(PickerError::NoEntries);
    }
    info!(entries = entries.len(), "entries loaded");

    let rendered = match command {
        Command::Pick(args) => {
            let request = PickRequest {
                entries,
                count: args.count.unwrap_or(settings.default_count),
                with_replacement: args.replace,
                rng_seed: args.input.seed,
            };
            request.validate()?;
            let result = pick(request);
            match output {
                OutputFormat::Text => result.to_string(),
                OutputFormat::Json => pick_to_json(&result).to_string(),
            }
        }
        Command::Teams(args) => {
            let request = TeamRequest {
                entries,
                mode: args.mode,
                value: args.value.unwrap_or(settings.default_teams),
                rng_seed: args.input.seed,
            };
            request.validate()?;
            let set = split_teams(request);
            match output {
                OutputFormat::Text => set.to_string(),
                OutputFormat::Json => teams_to_json(&set).to_string(),
            }
        }
        Command::Draw(args) => {
            let mode = if args.keep { PickMode::Once } else { PickMode::Remove };
            if args.keep && args.rounds > MAX_DRAWS {
                return Err(PickerError::TooManyDraws {
                    requested: i64::try_from(args.rounds).unwrap_or(i64::MAX),
                    max: MAX_DRAWS,
                });
            }
            let winners = draw_rounds(entries, args.rounds, mode, args.input.seed);
            match output {
                OutputFormat::Text => winners
                    .iter()
                    .enumerate()
                    .map(|(i, w)| format!("Round {}: {w}", i + 1))
                    .collect::<Vec<_>>()
                    .join("\n"),
                OutputFormat::Json => serde_json::json!({
                    "kind": "draw",
                    "mode": mode,
                    "winners": winners,
                })
                .to_string(),
            }
        }
    };

    Ok(rendered)
}

/// Pick up to `rounds` winners; stops early once a remove-mode list runs dry.
fn draw_rounds(entries: Vec<Entry>, rounds: usize, mode: PickMode, seed: Option<u64>) -> Vec<Entry> {
    let mut session = PickerSession::new(entries, seed);
    (0..rounds).map_while(|_| session.pick(mode)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> InputArgs {
        InputArgs { file: None, seed: Some(seed) }
    }

    #[test]
    fn empty_input_is_rejected() {
        let cmd = Command::Pick(PickArgs::default());
        let err = execute(&cmd, &Settings::default(), OutputFormat::Text, " \n\n").unwrap_err();
        assert!(matches!(err, PickerError::NoEntries));
    }

    #[test]
    fn pick_uses_default_count_from_settings() {
        let settings = Settings { default_count: 2, ..Settings::default() };
        let cmd = Command::Pick(PickArgs { input: seeded(3), ..PickArgs::default() });
        let out = execute(&cmd, &settings, OutputFormat::Text, "A\nB\nC").unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn teams_text_lists_every_member_once() {
        let cmd = Command::Teams(TeamArgs {
            input: seeded(4),
            mode: PartitionMode::BySize,
            value: Some(2),
        });
        let out = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB\nC\nD\nE").unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.starts_with("Team 1: "));
        let mut members: Vec<&str> = out
            .lines()
            .flat_map(|l| l.split_once(": ").map(|(_, m)| m).unwrap_or("").split(", "))
            .collect();
        members.sort_unstable();
        assert_eq!(members, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn teams_json_output_parses() {
        let cmd = Command::Teams(TeamArgs {
            input: seeded(5),
            mode: PartitionMode::ByCount,
            value: None,
        });
        let out = execute(&cmd, &Settings::default(), OutputFormat::Json, "A\nB\nC").unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["team_count"], 2);
        assert_eq!(v["member_count"], 3);
    }

    #[test]
    fn draw_stops_when_list_runs_out() {
        let cmd = Command::Draw(DrawArgs { input: seeded(6), rounds: 10, keep: false });
        let out = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB\nC").unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.lines().last().unwrap().starts_with("Round 3: "));
    }

    #[test]
    fn draw_keep_runs_every_round() {
        let cmd = Command::Draw(DrawArgs { input: seeded(7), rounds: 5, keep: true });
        let out = execute(&cmd, &Settings::default(), OutputFormat::Json, "A\nB").unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["winners"].as_array().unwrap().len(), 5);
        assert_eq!(v["mode"], "once");
    }

    fn parse(args: &[&str]) -> Command {
        Cli::try_parse_from(args).unwrap().command
    }

    #[test]
    fn huge_team_count_is_rejected() {
        let cmd = parse(&["random-picker", "teams", "-v", "9223372036854775807", "--seed", "1"]);
        let err = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB\nC").unwrap_err();
        assert!(matches!(err, PickerError::TooManyTeams { entries: 3, .. }), "{err}");
    }

    #[test]
    fn team_count_above_entry_count_is_rejected() {
        let cmd = parse(&["random-picker", "teams", "-v", "4"]);
        let err = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB\nC").unwrap_err();
        assert!(matches!(err, PickerError::TooManyTeams { requested: 4, entries: 3 }));
    }

    #[test]
    fn huge_team_size_makes_one_team() {
        let cmd = parse(&["random-picker", "teams", "-m", "size", "-v", "9223372036854775807"]);
        let out = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB\nC").unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn huge_pick_with_replacement_is_rejected() {
        let cmd = parse(&["random-picker", "pick", "-n", "9223372036854775807", "--replace"]);
        let err = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB").unwrap_err();
        assert!(matches!(err, PickerError::TooManyDraws { max: MAX_DRAWS, .. }), "{err}");
    }

    #[test]
    fn huge_pick_without_replacement_returns_whole_list() {
        let cmd = parse(&["random-picker", "pick", "-n", "9223372036854775807", "--seed", "2"]);
        let out = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB").unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn huge_keep_mode_rounds_are_rejected() {
        let cmd = Command::Draw(DrawArgs { input: seeded(8), rounds: usize::MAX, keep: true });
        let err = execute(&cmd, &Settings::default(), OutputFormat::Text, "A\nB").unwrap_err();
        assert!(matches!(err, PickerError::TooManyDraws { .. }));
    }

    #[test]
    fn cli_parses_team_mode_from_text() {
        let cli = Cli::try_parse_from(["random-picker", "teams", "--mode", "size", "-v", "3"]).unwrap();
        match cli.command {
            Command::Teams(args) => {
                assert_eq!(args.mode, PartitionMode::BySize);
                assert_eq!(args.value, Some(3));
            }
            _ => panic!("expected teams subcommand"),
        }
        assert!(Cli::try_parse_from(["random-picker", "teams", "--mode", "pairs"]).is_err());
    }
}
