use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rut_core::{Rut, Style};
use std::process;

/// RUT — Chilean tax identifier CLI
///
/// Validate, parse, and format RUTs.
#[derive(Parser)]
#[command(name = "rut", version, about, long_about = None)]
struct Cli {
    /// Suppress all output on stdout
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one or more RUTs (format + check digit)
    Validate {
        /// RUTs to check, in any accepted layout
        #[arg(required = true)]
        ruts: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split a RUT into number and check digit
    Parse {
        /// RUT text
        rut: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reformat a RUT in a canonical layout
    Format {
        /// RUT text
        rut: String,
        /// Output layout
        #[arg(long, value_enum, default_value_t = StyleArg::Complete)]
        style: StyleArg,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the check digit for a RUT number
    CheckDigit {
        /// Number without check digit
        number: u32,
        /// Print the whole RUT instead of the digit alone
        /// (number must have 4 to 9 digits)
        #[arg(long)]
        full: bool,
        /// Layout used with --full
        #[arg(long, value_enum, default_value_t = StyleArg::Complete)]
        style: StyleArg,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Complete,
    Escaped,
    WithDash,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Complete => Style::Complete,
            StyleArg::Escaped => Style::Escaped,
            StyleArg::WithDash => Style::WithDash,
        }
    }
}

// Exit codes
const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    let exit_code = match cli.command {
        Commands::Validate { ruts, json } => cmd_validate(&ruts, json, quiet),
        Commands::Parse { rut, json } => cmd_parse(&rut, json, quiet),
        Commands::Format { rut, style, json } => cmd_format(&rut, style.into(), json, quiet),
        Commands::CheckDigit {
            number,
            full,
            style,
        } => cmd_check_digit(number, full, style.into(), quiet),
        Commands::Version => {
            if !quiet {
                println!(
                    "rut {} (rut-core {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("CARGO_PKG_VERSION")
                );
            }
            EXIT_OK
        }
    };

    process::exit(exit_code);
}

// ── Commands ───────────────────────────────────────────────

fn cmd_validate(ruts: &[String], json: bool, quiet: bool) -> i32 {
    let mut all_valid = true;
    let mut results = Vec::with_capacity(ruts.len());

    for text in ruts {
        let (valid, error) = match rut_core::parse(text) {
            Ok(rut) => (rut.is_valid(), None),
            Err(e) => (false, Some(e)),
        };
        all_valid &= valid;

        if json {
            results.push(serde_json::json!({
                "input": text,
                "valid": valid,
                "error": error.map(|e| e.kind()),
            }));
        } else if !quiet {
            match error {
                Some(e) => eprintln!("{} {} ({})", "✗".red(), text, e),
                None if valid => println!("{} {} is {}", "✓".green(), text, "valid".green()),
                None => println!("{} {} is {}", "✗".red(), text, "invalid".red()),
            }
        }
    }

    if json && !quiet {
        let output = serde_json::json!({
            "valid": all_valid,
            "results": results,
        });
        print_json(&output);
    }

    if all_valid {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

fn cmd_parse(text: &str, json: bool, quiet: bool) -> i32 {
    let rut = match rut_core::parse(text) {
        Ok(rut) => rut,
        Err(e) => return report_error(text, e, json, quiet),
    };

    if quiet {
        return EXIT_OK;
    }
    if json {
        print_json(&serde_json::json!({
            "number": rut.number,
            "dv": rut.dv.to_string(),
            "valid": rut.is_valid(),
        }));
    } else {
        println!("number: {}", rut.number);
        println!("dv:     {}", rut.dv);
    }
    EXIT_OK
}

fn cmd_format(text: &str, style: Style, json: bool, quiet: bool) -> i32 {
    let formatted = match rut_core::format(text, style) {
        Ok(formatted) => formatted,
        Err(e) => return report_error(text, e, json, quiet),
    };

    if quiet {
        return EXIT_OK;
    }
    if json {
        print_json(&serde_json::json!({
            "input": text,
            "style": style.name(),
            "formatted": formatted,
        }));
    } else {
        println!("{}", formatted);
    }
    EXIT_OK
}

fn cmd_check_digit(number: u32, full: bool, style: Style, quiet: bool) -> i32 {
    if full && !(rut_core::MIN_NUMBER..=rut_core::MAX_NUMBER).contains(&number) {
        eprintln!(
            "{} {}: number must be between {} and {}",
            "error:".red().bold(),
            number,
            rut_core::MIN_NUMBER,
            rut_core::MAX_NUMBER
        );
        return EXIT_ERROR;
    }
    if quiet {
        return EXIT_OK;
    }
    if full {
        println!("{}", Rut::from_number(number).render(style));
    } else {
        println!("{}", rut_core::compute_check(number));
    }
    EXIT_OK
}

// ── Output helpers ─────────────────────────────────────────

fn report_error(text: &str, err: rut_core::Error, json: bool, quiet: bool) -> i32 {
    if json && !quiet {
        print_json(&serde_json::json!({
            "input": text,
            "error": err.kind(),
            "message": err.to_string(),
        }));
    } else {
        eprintln!("{} {}: {}", "error:".red().bold(), text, err);
    }
    EXIT_ERROR
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("{} Serialization error: {}", "error:".red().bold(), e),
    }
}
