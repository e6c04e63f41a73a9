mod debug_report;
mod logging;

use chrono::{NaiveDateTime, Utc};
use metar_decoder::{Compliance, Context, Options, decode_verbose_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    logging::init(config.verbosity);

    let ctx = Context { reference_time: Some(config.reference_time) };
    let opts = Options { compliance: config.compliance };
    match decode_verbose_with(&config.input, &ctx, &opts) {
        Ok(res) => debug_report::print_run(&config.input, &res, config.color),
        Err(err) => {
            debug_report::print_error(&config.input, &err, config.color);
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input: String,
    reference_time: NaiveDateTime,
    compliance: Compliance,
    color: bool,
    verbosity: u8,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_time = Utc::now().naive_utc();
    let mut compliance = Compliance::Strict;
    let mut color = io::stdout().is_terminal();
    let mut verbosity: u8 = 0;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("metar-decoder {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--strict" => compliance = Compliance::Strict,
            "--loose" => compliance = Compliance::Loose,
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" => verbosity = verbosity.saturating_add(1),
            "-vv" => verbosity = verbosity.saturating_add(2),
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = parse_reference(&value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_time = parse_reference(value)?;
            }
            _ if arg.starts_with('-') && !is_weather_chunk(&arg) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no report provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, reference_time, compliance, color, verbosity })
}

/// A light-intensity weather group such as `-RA` is report text, not a flag.
fn is_weather_chunk(arg: &str) -> bool {
    arg.len() >= 3 && arg[1..].bytes().all(|b| b.is_ascii_uppercase())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "metar-decoder {version}

Decode a METAR/SPECI report and print the decoded fields.

Usage:
  metar-decoder [OPTIONS] [--] <report...>
  echo '<report>' | metar-decoder [OPTIONS]

Options:
  --strict                   Fail on any unrecognised body text (default).
  --loose                    Keep unrecognised body text as unparsed chunks.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS (UTC),
                             used to resolve the observation day.
                             Default: now.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, -vv                    Log decoder steps to stderr (debug, trace).
                             RUST_LOG overrides.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  The report could not be decoded.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
