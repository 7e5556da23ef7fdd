//! VDSH command-line front end.
//!
//! Usage:
//!   vdsh tokenize <SRC>         Print the token stream
//!   vdsh parse <SRC>            Print the syntax tree
//!   vdsh build <SRC>            Compile to a shell script
//!   vdsh run <SRC>              Compile and execute with bash
//!   vdsh build -c <CODE>        Treat SRC as inline source

mod output;

use clap::{Args, Parser, Subcommand};
use output::{format_debug, format_error_json, format_json, parse_output_mode, OutputMode};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use vdsh_lang::error::VdshError;
use vdsh_lang::lexer::{lex, tokenize};
use vdsh_lang::parser::Parser as VdshParser;
use vdsh_lang::pipeline::compile;

/// VDSH to shell-script compiler
#[derive(Parser, Debug)]
#[command(name = "vdsh")]
#[command(version, about = "VDSH to shell-script compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print errors with full debug detail
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tokenize the source and print the token stream
    Tokenize(StageArgs),
    /// Parse the source and print the syntax tree
    Parse(StageArgs),
    /// Compile the source to a shell script
    Build(BuildArgs),
    /// Compile the source and execute it with bash
    Run(SourceArgs),
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Script file to read, or inline source with -c
    src: String,

    /// Treat SRC as inline source instead of a file path
    #[arg(short = 'c', long = "code")]
    code: bool,
}

#[derive(Args, Debug)]
struct StageArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output format: text (default), json
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    output: Option<String>,

    /// Print the text output on a single line
    #[arg(long = "oneline")]
    oneline: bool,
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Write the generated script to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match &cli.command {
        Command::Tokenize(args) => tokenize_command(&cli, args),
        Command::Parse(args) => parse_command(&cli, args),
        Command::Build(args) => build_command(&cli, args),
        Command::Run(args) => run_command(&cli, args),
    }
}

/// Resolve the source text: inline with `-c`, otherwise read from a file.
fn read_source(args: &SourceArgs) -> Result<String, String> {
    if args.code {
        return Ok(args.src.clone());
    }

    std::fs::read_to_string(&args.src).map_err(|e| format!("Error reading file '{}': {}", args.src, e))
}

/// Render a compile error in the selected mode and fail the process.
fn report_error(error: &VdshError, mode: OutputMode, verbose: bool) -> ExitCode {
    match mode {
        OutputMode::Json => println!("{}", format_error_json(error)),
        OutputMode::Text if verbose => eprintln!("{:?}", error),
        OutputMode::Text => eprintln!("{}", error),
    }

    ExitCode::from(1)
}

/// Print a stage result in the selected mode.
fn print_stage<T: std::fmt::Debug + Serialize>(value: &T, mode: OutputMode, oneline: bool) -> ExitCode {
    match mode {
        OutputMode::Text => {
            println!("{}", format_debug(value, oneline));
            ExitCode::SUCCESS
        }
        OutputMode::Json => match format_json(value) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::from(1)
            }
        },
    }
}

fn tokenize_command(cli: &Cli, args: &StageArgs) -> ExitCode {
    let mode = match parse_output_mode(args.output.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let source = match read_source(&args.source) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    match lex(&source) {
        Ok(tokens) => print_stage(&tokens, mode, args.oneline),
        Err(e) => report_error(&VdshError::from(e), mode, cli.verbose),
    }
}

fn parse_command(cli: &Cli, args: &StageArgs) -> ExitCode {
    let mode = match parse_output_mode(args.output.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let source = match read_source(&args.source) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let mut parser = VdshParser::new(tokenize(&source));
    match parser.parse_statement() {
        Ok(node) => print_stage(&node, mode, args.oneline),
        Err(e) => report_error(&VdshError::from(e), mode, cli.verbose),
    }
}

fn build_command(cli: &Cli, args: &BuildArgs) -> ExitCode {
    let source = match read_source(&args.source) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let script = match compile(&source) {
        Ok(script) => script,
        Err(e) => return report_error(&e, OutputMode::Text, cli.verbose),
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &script) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("{}", script);
            ExitCode::SUCCESS
        }
    }
}

fn run_command(cli: &Cli, args: &SourceArgs) -> ExitCode {
    use std::process::Command;

    let source = match read_source(args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let script = match compile(&source) {
        Ok(script) => script,
        Err(e) => return report_error(&e, OutputMode::Text, cli.verbose),
    };

    let status = match Command::new("bash").arg("-c").arg(&script).status() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Failed to run bash: {}", e);
            return ExitCode::from(1);
        }
    };

    if status.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(status.code().unwrap_or(1) as u8)
    }
}
