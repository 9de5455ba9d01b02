//! ursa: The Ursa front-end CLI.
//!
//! Usage:
//!   ursa [options] [file...]
//!
//! With file arguments, each file is parsed and the rendered program plus any
//! diagnostics are printed. With no arguments, an interactive read loop scans
//! one line at a time and prints the raw tokens; it keeps no state between
//! lines and never invokes the parser.

use clap::Parser as ClapParser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use ursa_parser::Parser;
use ursa_scanner::Scanner;

#[derive(ClapParser, Debug)]
#[command(name = "ursa", about = "The Ursa language front end", disable_version_flag = true)]
struct Cli {
    /// Ursa source files to parse.
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Print the raw token stream instead of parsing.
    #[arg(long)]
    tokens: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const PROMPT: &str = ">> ";

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("ursa Version 0.1.0");
        return;
    }

    if cli.files.is_empty() {
        run_repl();
        return;
    }

    process::exit(run_files(&cli));
}

fn run_files(cli: &Cli) -> i32 {
    let mut exit_code = 0;

    for file in &cli.files {
        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                print_error(&format!("cannot read {}: {}", file, err));
                exit_code = 1;
                continue;
            }
        };

        if cli.tokens {
            print_tokens(&source);
            continue;
        }

        let mut parser = Parser::new(Scanner::new(&source));
        let program = parser.parse_program();

        for diagnostic in parser.errors().diagnostics() {
            println!("{}{}{}: {}", RED, file, RESET, diagnostic);
        }
        if parser.errors().has_errors() {
            exit_code = 1;
        }

        print!("{}", program);
        if !program.statements.is_empty() {
            println!();
        }
    }

    exit_code
}

fn print_tokens(source: &str) {
    let mut scanner = Scanner::new(source);
    loop {
        let token = scanner.next_token();
        if token.is_eof() {
            break;
        }
        println!("{:?} {:?}", token.kind, token.literal);
    }
}

/// One scanner per line, tokens printed until end of line, no parser and no
/// state carried across lines.
fn run_repl() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}{}ursa{} token reader - one line at a time", BOLD, CYAN, RESET);

    loop {
        print!("{}", PROMPT);
        if stdout.flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let mut scanner = Scanner::new(&line);
        loop {
            let token = scanner.next_token();
            if token.is_eof() {
                break;
            }
            println!("{:?} {:?}", token.kind, token.literal);
        }
    }
}

fn print_error(message: &str) {
    eprintln!("{}{}error{}: {}", RED, BOLD, RESET, message);
}
