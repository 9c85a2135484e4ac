//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by shell mode (directly) and by pipe
//! mode (per line, via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("widgetboard")
        .about("Z-ordered in-memory widget board")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default: ./widgetboard.toml if present)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_list())
        .subcommand(build_get())
        .subcommand(build_create())
        .subcommand(build_update())
        .subcommand(build_delete())
        .subcommand(build_ping())
}

/// Build the command tree for a single pipe-mode line (no global flags).
pub fn build_pipe_cmd() -> Command {
    Command::new("pipe")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(build_list())
        .subcommand(build_get())
        .subcommand(build_create())
        .subcommand(build_update())
        .subcommand(build_delete())
        .subcommand(build_ping())
}

// =========================================================================
// Widgets
// =========================================================================

fn build_list() -> Command {
    Command::new("list").about("List widgets in ascending z order")
}

fn build_get() -> Command {
    Command::new("get")
        .about("Show one widget")
        .arg(id_arg())
}

fn build_create() -> Command {
    with_geometry(Command::new("create").about("Create a widget"))
}

fn build_update() -> Command {
    with_geometry(
        Command::new("update")
            .about("Replace a widget's geometry")
            .arg(id_arg()),
    )
}

fn build_delete() -> Command {
    Command::new("delete")
        .about("Delete a widget")
        .arg(id_arg())
}

fn build_ping() -> Command {
    Command::new("ping").about("Check the board is responding")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_name("ID")
        .help("Widget id")
}

// Presence and positivity are checked by the executor, so every value is
// optional here.
fn with_geometry(cmd: Command) -> Command {
    cmd.arg(int_arg("x", "X coordinate"))
        .arg(int_arg("y", "Y coordinate"))
        .arg(int_arg("z", "Z-index (default: above every other widget)"))
        .arg(int_arg("width", "Width, positive"))
        .arg(int_arg("height", "Height, positive"))
}

fn int_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("INT")
        .value_parser(clap::value_parser!(i32))
        .allow_negative_numbers(true)
        .help(help)
}
