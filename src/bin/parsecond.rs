//! Interactive console for the bundled grammars
//!
//! Reads one line at a time from stdin, runs the selected grammar over it and
//! prints either the parsed value or the error. Set `RUST_LOG=trace` to see the
//! runner's log output. Build with `--features cli`.

use clap::{Parser as _, ValueEnum};
use parsecond::eoi::ended;
use parsecond::error::ParseError;
use parsecond::grammars::shell::{self, Shell};
use parsecond::grammars::{expr, list};
use parsecond::parser::{Parser, run};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, clap::Parser)]
#[command(name = "parsecond", version, about = "Try the parsecond example grammars.")]
struct Args {
    /// Grammar to run each line through
    #[arg(long, value_enum, default_value_t = Grammar::Calc)]
    grammar: Grammar,
    /// Accept input left over after the grammar matched
    #[arg(long)]
    allow_trailing: bool,
    /// Name shown in the banner and the prompt
    #[arg(long, default_value = "parsecond")]
    prompt: String,
    /// When to color error output
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Grammar {
    /// Print the expression tree
    Expr,
    /// Evaluate the expression
    Calc,
    /// Print the semicolon list tree
    List,
    /// Run a shell command
    Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn render<'code, P>(
    parser: P,
    line: &'code str,
    allow_trailing: bool,
) -> Result<String, ParseError<'code>>
where
    P: Parser<'code, Error = ParseError<'code>>,
    P::Output: Display,
{
    let (value, _) = if allow_trailing {
        run(&parser, line)?
    } else {
        run(&ended(parser), line)?
    };
    Ok(value.to_string())
}

fn print_error(stdout: &mut StandardStream, error: &ParseError<'_>) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "Error [{}]", error.kind())?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    writeln!(stdout, ": {}", error)?;
    stdout.reset()
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("starting console with {:?}", args);

    let commands = Shell::default();
    let mut stdout = StandardStream::stdout(args.color.into());
    writeln!(stdout, "Parsecond REPL - {}", args.prompt)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buffer = String::new();
    loop {
        write!(stdout, "{}> ", args.prompt)?;
        stdout.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(stdout)?;
            break;
        }
        let line = buffer.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match args.grammar {
            Grammar::Expr => render(expr::expr(), line, args.allow_trailing),
            Grammar::Calc => render(expr::calculator(), line, args.allow_trailing),
            Grammar::List => render(list::list(), line, args.allow_trailing),
            Grammar::Shell => render(shell::command(&commands), line, args.allow_trailing),
        };
        match outcome {
            Ok(value) => writeln!(stdout, "{}", value)?,
            Err(error) => print_error(&mut stdout, &error)?,
        }
    }

    Ok(())
}
