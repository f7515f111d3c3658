//! Tally CLI
//!
//! Interactive front end for the three calculator tools. Reads lines
//! from stdin, dispatches them to the core, renders text to stdout;
//! diagnostics go to stderr via tracing (`RUST_LOG` controls the
//! level).
//!
//! Modes mirror the calculator's tabs:
//! - standard: characters are keypad keys (`0-9 . + - * / = %`), plus
//!   the word commands `clear`, `ce`, `back`
//! - convert:  `<value> <from-unit> <to-unit>` per line
//! - log:      `<value> <ln|log10|log2>` per line

use std::io::{self, BufRead, Write};

use tally::{ExpressionState, Key};
use tally_math::{log_text, ALL_KINDS};
use tally_units::{convert_text, ALL_UNITS};
use tracing::{debug, info};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Standard,
    Convert,
    Log,
}

impl Tab {
    fn name(self) -> &'static str {
        match self {
            Tab::Standard => "standard",
            Tab::Convert => "convert",
            Tab::Log => "log",
        }
    }
}

/// One interactive session: the active tab plus the expression state
/// backing the standard calculator
struct Session {
    tab: Tab,
    state: ExpressionState,
}

impl Session {
    fn new() -> Self {
        Self {
            tab: Tab::Standard,
            state: ExpressionState::new(),
        }
    }

    fn dispatch(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        debug!(tab = self.tab.name(), input, "dispatch");

        if input.eq_ignore_ascii_case("help") {
            return self.print_help(out);
        }
        if let Some(rest) = input.strip_prefix("tab ") {
            return self.switch_tab(rest.trim(), out);
        }

        match self.tab {
            Tab::Standard => self.handle_standard(input, out),
            Tab::Convert => self.handle_convert(input, out),
            Tab::Log => self.handle_log(input, out),
        }
    }

    fn switch_tab(&mut self, name: &str, out: &mut impl Write) -> io::Result<()> {
        match name.to_lowercase().as_str() {
            "standard" => self.tab = Tab::Standard,
            "convert" | "conversion" => self.tab = Tab::Convert,
            "log" | "logarithm" => self.tab = Tab::Log,
            other => {
                writeln!(out, "No tab named '{}'. Tabs: standard, convert, log", other)?;
                return Ok(());
            }
        }
        info!(tab = self.tab.name(), "switched tab");
        writeln!(out, "[{}]", self.tab.name())
    }

    fn handle_standard(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        match input.to_lowercase().as_str() {
            "clear" | "c" => self.state.press(Key::Clear),
            "ce" => self.state.press(Key::ClearEntry),
            "back" => self.state.press(Key::Backspace),
            _ => {
                for c in input.chars() {
                    match Key::from_char(c) {
                        Some(key) => self.state.press(key),
                        None if c.is_whitespace() => {}
                        None => {
                            writeln!(out, "No key for '{}'. Keys: 0-9 . + - * / = %", c)?;
                            return Ok(());
                        }
                    }
                }
            }
        }
        self.render_displays(out)
    }

    fn handle_convert(&self, input: &str, out: &mut impl Write) -> io::Result<()> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let [value, from, to] = parts.as_slice() else {
            writeln!(out, "Usage: <value> <from-unit> <to-unit>  (e.g. 1 miles meters)")?;
            return Ok(());
        };
        match convert_text(value, from, to) {
            Ok(result) => writeln!(out, "= {}", result),
            Err(e) => writeln!(out, "{}", e),
        }
    }

    fn handle_log(&self, input: &str, out: &mut impl Write) -> io::Result<()> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let [value, kind] = parts.as_slice() else {
            writeln!(out, "Usage: <value> <ln|log10|log2>  (e.g. 8 log2)")?;
            return Ok(());
        };
        match log_text(value, kind) {
            Ok(result) => writeln!(out, "= {}", result),
            Err(e) => writeln!(out, "{}", e),
        }
    }

    /// The two display regions of the standard tab: accumulated
    /// expression on top, entry below (capped at 11 characters)
    fn render_displays(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "  {}", self.state.total_display())?;
        writeln!(out, "> {}", self.state.current_display())
    }

    fn print_help(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "tab standard | convert | log   switch tool")?;
        writeln!(out, "quit                           exit")?;
        writeln!(out)?;
        writeln!(out, "standard: type keys 0-9 . + - * / = %  (words: clear, ce, back)")?;
        write!(out, "convert:  <value> <from> <to>, units:")?;
        for unit in ALL_UNITS {
            write!(out, " {}", unit.name())?;
        }
        writeln!(out)?;
        write!(out, "log:      <value> <kind>, kinds:")?;
        for kind in ALL_KINDS {
            write!(out, " {}", kind)?;
        }
        writeln!(out)
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    info!(version = APP_VERSION, "tally started");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "tally v{} (type 'help' for commands)", APP_VERSION)?;
    out.flush()?;

    let mut session = Session::new();
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
                    break;
                }
                session.dispatch(input, &mut out)?;
                out.flush()?;
            }
            Err(e) => {
                info!("error reading input: {}", e);
                break;
            }
        }
    }

    info!("tally shutting down");
    Ok(())
}
