//! CLI tool that cleans command lines before they are handed to a shell.

use std::io;
use std::process::ExitCode;

use cmdclean::Cleaner;
use log::trace;

const USAGE: &str = "\
Usage: cmdclean [options] [--] [words...]

Cleans a command line: re-quotes option values and escapes shell
metacharacters. With words, cleans them as one line. Without words,
cleans stdin line by line.

Options:
  --trace            Log every lexer transition (to stderr)
  --quote <char>     Quote used around option values (default \")
  --separator <str>  Separator between tokens (default space)
  -h, --help         Show this help

Examples:
  cmdclean grep --color=auto file
  echo 'echo a && b' | cmdclean";

struct Options {
    trace: bool,
    cleaner: Cleaner,
    words: Vec<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Try 'cmdclean --help' for more information.");
            return ExitCode::from(2);
        }
    };

    init_logging(options.trace);

    if options.words.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        match options.cleaner.clean_lines(stdin.lock(), stdout.lock()) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("cmdclean: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        let line = options.words.join(" ");
        let cleaned = if options.trace {
            options
                .cleaner
                .clean_with(&line, |step| trace!("lex event=step {step}"))
        } else {
            options.cleaner.clean(&line)
        };
        println!("{cleaned}");
        ExitCode::SUCCESS
    }
}

fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let env = env_logger::Env::default().filter_or("CMDCLEAN_LOG", default);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

/// Parse command-line arguments. `Ok(None)` means help was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>, String> {
    let mut options = Options {
        trace: false,
        cleaner: Cleaner::new(),
        words: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--trace" => options.trace = true,
            "--quote" => {
                let value = iter.next().ok_or("--quote needs a value")?;
                let mut chars = value.chars();
                let quote = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(format!("--quote expects one character, got {value:?}")),
                };
                options.cleaner = options
                    .cleaner
                    .with_quote(quote)
                    .map_err(|e| e.to_string())?;
            }
            "--separator" => {
                let value = iter.next().ok_or("--separator needs a value")?;
                options.cleaner = options.cleaner.with_separator(value.as_str());
            }
            "--" => {
                options.words.extend(iter.by_ref().cloned());
            }
            _ => {
                options.words.push(arg.clone());
                options.words.extend(iter.by_ref().cloned());
            }
        }
    }

    Ok(Some(options))
}
