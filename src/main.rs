// sortstep: step-by-step insertion sort tracer

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    cursor, execute,
    style::Stylize,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortstep::logging::{self, LogOutput};
use sortstep::snapshot::{Snapshot, Trace};
use sortstep::ui::App;

#[derive(Parser)]
#[command(
    name = "sortstep",
    version,
    about = "Trace insertion sort over 3 to 8 single digits"
)]
struct Cli {
    /// Numbers to sort, e.g. "9 8 3 2 4 6 1" or "931". Opens the viewer when omitted.
    input: Option<String>,

    /// How each step is printed in non-interactive mode.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Color)]
    format: OutputFormat,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Settled values green, unsettled grey
    Color,
    /// Settled prefix in brackets
    Annotated,
    /// Values only
    Plain,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = LogOutput::select(cli.log_file.as_deref(), cli.input.is_none());
    logging::init(output).context("open log file")?;

    match cli.input {
        Some(input) => {
            let trace = sortstep::sort(&input)?;
            write_trace(&mut io::stdout().lock(), &trace, cli.format)?;
            Ok(())
        }
        None => with_session(enable_raw_mode, run_viewer, restore_terminal),
    }
}

/// Print one line per snapshot
fn write_trace<W: Write>(out: &mut W, trace: &Trace, format: OutputFormat) -> io::Result<()> {
    for snapshot in trace {
        let line = match format {
            OutputFormat::Color => colored(snapshot),
            OutputFormat::Annotated => snapshot.annotated(),
            OutputFormat::Plain => snapshot.to_string(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn colored(snapshot: &Snapshot) -> String {
    snapshot
        .cells()
        .iter()
        .map(|cell| {
            let text = cell.value.to_string();
            if cell.settled {
                text.green().bold().to_string()
            } else {
                text.dark_grey().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `body` after `enter` succeeds; `leave` runs whatever `body` returns.
/// A `body` error takes precedence over a `leave` error.
fn with_session<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
    leave: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    enter().context("enable raw mode")?;
    let res = body();
    let restored = leave().context("restore terminal");
    let value = res?;
    restored?;
    Ok(value)
}

fn run_viewer() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    app.run(&mut terminal).context("terminal viewer failed")
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, cursor::Show)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn render(input: &str, format: OutputFormat) -> String {
        let trace = sortstep::sort(input).unwrap();
        let mut out = Vec::new();
        write_trace(&mut out, &trace, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["sortstep", "931"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("931"));
        assert_eq!(cli.format, OutputFormat::Color);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_cli_no_input_means_viewer() {
        let cli = Cli::try_parse_from(["sortstep"]).unwrap();
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_cli_format_and_log_file() {
        let cli = Cli::try_parse_from([
            "sortstep",
            "--format",
            "annotated",
            "--log-file",
            "trace.log",
            "9 8 3",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Annotated);
        assert_eq!(cli.log_file, Some(PathBuf::from("trace.log")));
        assert_eq!(cli.input.as_deref(), Some("9 8 3"));

        let cli = Cli::try_parse_from(["sortstep", "-f", "plain", "931"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Plain);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["sortstep", "--format", "json", "931"]).is_err());
    }

    #[test]
    fn test_plain_output() {
        assert_eq!(render("931", OutputFormat::Plain), "9 3 1\n3 9 1\n1 3 9\n");
    }

    #[test]
    fn test_annotated_output() {
        assert_eq!(
            render("931", OutputFormat::Annotated),
            "9 3 1\n[3 9] 1\n[1 3 9]\n"
        );
    }

    #[test]
    fn test_colored_marks_settled_green() {
        let trace = sortstep::sort("931").unwrap();
        let expected = format!(
            "{} {} {}",
            "3".green().bold(),
            "9".green().bold(),
            "1".dark_grey()
        );
        assert_eq!(colored(trace.get(1).unwrap()), expected);

        let lines = render("931", OutputFormat::Color);
        assert_eq!(lines.lines().count(), 3);
        assert_eq!(lines.lines().nth(1), Some(expected.as_str()));
    }

    #[test]
    fn test_session_restores_after_body_error() {
        let left = Cell::new(false);
        let res: Result<()> = with_session(
            || Ok(()),
            || anyhow::bail!("alternate screen unavailable"),
            || {
                left.set(true);
                Ok(())
            },
        );

        assert!(left.get());
        assert!(format!("{:#}", res.unwrap_err()).contains("alternate screen unavailable"));
    }

    #[test]
    fn test_session_skips_body_when_enter_fails() {
        let ran = Cell::new(false);
        let left = Cell::new(false);
        let res = with_session(
            || Err(io::Error::other("not a tty")),
            || {
                ran.set(true);
                Ok(())
            },
            || {
                left.set(true);
                Ok(())
            },
        );

        assert!(res.is_err());
        assert!(!ran.get());
        assert!(!left.get());
    }

    #[test]
    fn test_session_reports_leave_error() {
        let res = with_session(
            || Ok(()),
            || Ok(7),
            || Err(io::Error::other("stuck in raw mode")),
        );
        assert!(format!("{:#}", res.unwrap_err()).contains("restore terminal"));
    }
}
