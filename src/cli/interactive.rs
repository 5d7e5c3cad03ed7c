//! Menu-driven query loop over an already built index.

use std::io::{BufRead, Write};
use std::path::Path;

use log::debug;

use crate::cli::args::ShabdaArgs;
use crate::cli::commands::{autocomplete_report, search_report};
use crate::cli::output::output_result;
use crate::error::Result;
use crate::index::IndexEngine;

const MENU: &str = "\
Choose an action:
  1. Search a word
  2. Autocomplete a prefix
  3. Exit";

enum Action {
    Search,
    Autocomplete,
    Exit,
}

/// Read one trimmed line, or `None` once the input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    read_line(input)
}

/// Answer search and autocomplete requests until the user exits or the
/// input ends.
///
/// Autocomplete answers also write the full node dump to `dump_path`.
pub fn run_interactive<R: BufRead, W: Write>(
    engine: &IndexEngine,
    mut input: R,
    out: &mut W,
    dump_path: &Path,
    args: &ShabdaArgs,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "{MENU}")?;

        let Some(choice) = prompt(&mut input, out, "Enter choice [1/2/3]: ")? else {
            break;
        };

        let action = match choice.parse::<u32>() {
            Ok(1) => Action::Search,
            Ok(2) => Action::Autocomplete,
            Ok(3) => Action::Exit,
            Ok(_) => {
                writeln!(out, "Invalid action. Try again.")?;
                continue;
            }
            Err(_) => {
                writeln!(out, "Invalid input. Enter 1, 2 or 3.")?;
                continue;
            }
        };

        match action {
            Action::Exit => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            Action::Search => {
                let Some(query) = prompt(&mut input, out, "Enter word to search: ")? else {
                    break;
                };
                if query.is_empty() {
                    writeln!(out, "Empty input. Try again.")?;
                    continue;
                }
                debug!("interactive search: {query:?}");
                let report = search_report(engine, &query);
                output_result(&mut *out, "Search completed", &report, args)?;
            }
            Action::Autocomplete => {
                let Some(prefix) = prompt(&mut input, out, "Enter prefix to autocomplete: ")?
                else {
                    break;
                };
                if prefix.is_empty() {
                    writeln!(out, "Empty input. Try again.")?;
                    continue;
                }
                debug!("interactive autocomplete: {prefix:?}");
                let report = autocomplete_report(engine, &prefix, Some(dump_path))?;
                output_result(&mut *out, "Autocomplete completed", &report, args)?;
            }
        }
    }

    Ok(())
}
