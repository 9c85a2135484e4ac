//! Command execution and pipe mode.
//!
//! Pipe mode reads commands line by line and runs them against one shared
//! store, so a script can build up a board:
//!
//! ```text
//! $ printf 'create --x 0 --y 0 --width 10 --height 10\nlist\n' | widgetboard
//! ```

use std::io::{self, BufRead, Write};

use widgetboard_executor::{Command, Executor};

use crate::format::{format_error, format_output, OutputMode};
use crate::parse::parse_line;

/// Execute one command, printing the result. Returns true on success.
pub fn run_command<W: Write, E: Write>(
    executor: &Executor,
    cmd: Command,
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
) -> bool {
    match executor.execute(cmd) {
        Ok(output) => {
            let formatted = format_output(&output, mode);
            if !formatted.is_empty() {
                let _ = writeln!(out, "{}", formatted);
            }
            true
        }
        Err(e) => {
            let _ = writeln!(err, "{}", format_error(&e, mode));
            false
        }
    }
}

/// Run every line of `input`. Returns the process exit code.
///
/// A failing line is reported and the remaining lines still run; the exit
/// code is 1 if any line failed. A line that is not UTF-8 counts as failed.
/// A read error is reported and ends the run.
pub fn run_lines<R: BufRead, W: Write, E: Write>(
    executor: &Executor,
    mut input: R,
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
) -> i32 {
    let mut exit_code = 0;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_no += 1,
            Err(e) => {
                let _ = writeln!(err, "(error) failed to read input: {}", e);
                exit_code = 1;
                break;
            }
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(l) => l,
            Err(_) => {
                let _ = writeln!(err, "(error) line {}: input is not valid UTF-8", line_no);
                exit_code = 1;
                continue;
            }
        };

        match parse_line(line) {
            Ok(None) => {}
            Ok(Some(cmd)) => {
                if !run_command(executor, cmd, mode, out, err) {
                    exit_code = 1;
                }
            }
            Err(e) => {
                let _ = writeln!(err, "(error) {}", e.trim_end());
                exit_code = 1;
            }
        }
    }

    exit_code
}

/// Pipe mode over the process's stdin.
pub fn run_pipe(executor: &Executor, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_lines(
        executor,
        stdin.lock(),
        mode,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
