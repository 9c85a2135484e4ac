//! ArgMatches → Command conversion.

use clap::ArgMatches;
use widgetboard_executor::{Command, WidgetInput};

use crate::commands::build_pipe_cmd;

/// Translate parsed arguments into an executor command.
pub fn matches_to_command(matches: &ArgMatches) -> Result<Command, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "list" => Ok(Command::WidgetList),
        "get" => Ok(Command::WidgetGet {
            id: id(sub_matches)?,
        }),
        "create" => Ok(Command::WidgetCreate {
            widget: widget_input(sub_matches),
        }),
        "update" => Ok(Command::WidgetUpdate {
            id: id(sub_matches)?,
            widget: widget_input(sub_matches),
        }),
        "delete" => Ok(Command::WidgetDelete {
            id: id(sub_matches)?,
        }),
        "ping" => Ok(Command::Ping),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Parse one pipe-mode line.
///
/// Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens = shlex::split(trimmed).ok_or_else(|| format!("Invalid quoting: {}", trimmed))?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let matches = build_pipe_cmd()
        .try_get_matches_from(tokens)
        .map_err(|e| e.to_string())?;
    matches_to_command(&matches).map(Some)
}

fn id(matches: &ArgMatches) -> Result<String, String> {
    matches
        .get_one::<String>("id")
        .cloned()
        .ok_or_else(|| "Missing widget id".to_string())
}

fn widget_input(matches: &ArgMatches) -> WidgetInput {
    WidgetInput {
        x: matches.get_one::<i32>("x").copied(),
        y: matches.get_one::<i32>("y").copied(),
        z: matches.get_one::<i32>("z").copied(),
        width: matches.get_one::<i32>("width").copied(),
        height: matches.get_one::<i32>("height").copied(),
    }
}
