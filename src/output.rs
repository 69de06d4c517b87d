//! Output formatting for `sufx` results
//!
//! Every printer has a plain colored form for terminals and a JSON form
//! (one document per command) for scripts.

use crate::tree::{Symbol, TreeStats, Violation};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// How the sentinel is shown in rendered suffixes
const SENTINEL_MARK: &str = "$";

/// Symbols that can be read from and rendered as display text
pub trait Printable: Symbol {
    /// Symbols of a command-line pattern
    fn encode(text: &str) -> Vec<Self>;

    fn render(symbols: &[Self], sentinel: Self) -> String;
}

impl Printable for u8 {
    fn encode(text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }

    fn render(symbols: &[u8], sentinel: u8) -> String {
        let body_len = symbols
            .iter()
            .position(|&b| b == sentinel)
            .unwrap_or(symbols.len());
        let mut out: String = String::from_utf8_lossy(&symbols[..body_len])
            .escape_debug()
            .collect();
        if body_len < symbols.len() {
            out.push_str(SENTINEL_MARK);
        }
        out
    }
}

impl Printable for char {
    fn encode(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn render(symbols: &[char], sentinel: char) -> String {
        let mut out = String::with_capacity(symbols.len());
        for &c in symbols {
            if c == sentinel {
                out.push_str(SENTINEL_MARK);
            } else {
                out.extend(c.escape_debug());
            }
        }
        out
    }
}

/// Output options shared by all printers
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub color: bool,
}

impl OutputOptions {
    fn stdout(&self) -> StandardStream {
        let choice = if self.color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        StandardStream::stdout(choice)
    }
}

#[derive(Serialize)]
struct ContainsResult<'a> {
    pattern: &'a str,
    found: bool,
}

#[derive(Serialize)]
struct OccurrencesResult<'a> {
    pattern: &'a str,
    count: usize,
    positions: &'a [usize],
}

#[derive(Serialize)]
struct SuffixLine<'a> {
    start: usize,
    suffix: &'a str,
}

#[derive(Serialize)]
struct ValidationResult {
    valid: bool,
    violation: Option<String>,
}

fn print_json<S: Serialize + ?Sized>(value: &S) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)
}

fn write_label(stdout: &mut StandardStream, label: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(stdout, "{:18}", label)?;
    stdout.reset()
}

/// Print tree statistics
pub fn print_stats(stats: &TreeStats, options: OutputOptions) -> io::Result<()> {
    if options.json {
        return print_json(stats);
    }

    let mut stdout = options.stdout();
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "Suffix Tree Statistics")?;
    writeln!(stdout, "======================")?;
    stdout.reset()?;

    let rows = [
        ("Text length:", stats.text_len),
        ("Nodes:", stats.nodes),
        ("Internal nodes:", stats.internal_nodes),
        ("Leaves:", stats.leaves),
        ("Edges:", stats.edges),
        ("Max depth:", stats.max_internal_depth),
    ];
    for (label, value) in rows {
        write_label(&mut stdout, label)?;
        writeln!(stdout, "{}", value)?;
    }

    Ok(())
}

/// Print one line per pattern: found or not found
pub fn print_contains(results: &[(String, bool)], options: OutputOptions) -> io::Result<()> {
    if options.json {
        let rows: Vec<_> = results
            .iter()
            .map(|(pattern, found)| ContainsResult {
                pattern,
                found: *found,
            })
            .collect();
        return print_json(&rows);
    }

    let mut stdout = options.stdout();
    for (pattern, found) in results {
        let (color, word) = if *found {
            (Color::Green, "found")
        } else {
            (Color::Red, "missing")
        };
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stdout, "{:8}", word)?;
        stdout.reset()?;
        writeln!(stdout, "{}", pattern)?;
    }

    Ok(())
}

/// Print every start position of a pattern
pub fn print_occurrences(
    pattern: &str,
    positions: &[usize],
    options: OutputOptions,
) -> io::Result<()> {
    if options.json {
        return print_json(&OccurrencesResult {
            pattern,
            count: positions.len(),
            positions,
        });
    }

    let mut stdout = options.stdout();
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", pattern)?;
    stdout.reset()?;
    writeln!(stdout, ": {} occurrence(s)", positions.len())?;

    for position in positions {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "{}", position)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print enumerated suffixes as `start<TAB>suffix`
pub fn print_suffixes(
    suffixes: impl Iterator<Item = (usize, String)>,
    options: OutputOptions,
) -> io::Result<()> {
    if options.json {
        let rows: Vec<(usize, String)> = suffixes.collect();
        let lines: Vec<_> = rows
            .iter()
            .map(|(start, suffix)| SuffixLine {
                start: *start,
                suffix,
            })
            .collect();
        return print_json(&lines);
    }

    let mut stdout = options.stdout();
    for (start, suffix) in suffixes {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", start)?;
        stdout.reset()?;
        writeln!(stdout, "\t{}", suffix)?;
    }

    Ok(())
}

/// Print the outcome of an invariant check
pub fn print_validation(result: &Result<(), Violation>, options: OutputOptions) -> io::Result<()> {
    if options.json {
        return print_json(&ValidationResult {
            valid: result.is_ok(),
            violation: result.as_ref().err().map(|v| v.to_string()),
        });
    }

    let mut stdout = options.stdout();
    match result {
        Ok(()) => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            writeln!(stdout, "valid")?;
        }
        Err(violation) => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(stdout, "invalid: ")?;
            stdout.reset()?;
            writeln!(stdout, "{}", violation)?;
        }
    }
    stdout.reset()
}
