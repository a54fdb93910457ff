// tapetty: tape-language interpreter, synthesizer and text codec toolkit

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tapetty::codec::{self, base64, morse};
use tapetty::interpreter::constants::{DEFAULT_BUCKET_SIZE, SNAPSHOT_MEMORY_LIMIT};
use tapetty::interpreter::engine::Interpreter;
use tapetty::interpreter::input::{LinePrompt, QueuedInput};
use tapetty::interpreter::interpret_with;
use tapetty::synth;
use tapetty::ui::App;

type CliResult = Result<(), Box<dyn Error>>;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <command> [args...]", program_name);
    eprintln!();
    eprintln!("Tape programs:");
    eprintln!("  run <file>                         Step through a program in the TUI");
    eprintln!("  exec <file> [--input <chars>]      Run a program and print its output");
    eprintln!("  synth <text> [bucket] [--explain]  Build a program that prints <text>");
    eprintln!();
    eprintln!("Codecs:");
    eprintln!("  hash <algorithm> <text>            Uppercase hex digest");
    eprintln!("  hashes                             List supported algorithms");
    eprintln!("  pbkdf2 <algorithm> <password> <salt> <iterations> [dklen]");
    eprintln!("  base64 encode|decode <text>");
    eprintln!("  morse encode|decode <text>");
    eprintln!("  rot13 <text>");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} synth 'Hello, world!' > hello.bf", program_name);
    eprintln!("  {} run hello.bf", program_name);
}

fn main() -> CliResult {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tapetty");

    let Some(command) = args.get(1) else {
        eprintln!("Error: No command provided");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    };
    let rest = &args[2..];

    match command.as_str() {
        "run" => cmd_run(rest),
        "exec" => cmd_exec(rest),
        "synth" => cmd_synth(rest),
        "hash" => cmd_hash(rest),
        "hashes" => {
            for alg in codec::HASH_ALGORITHMS.iter() {
                let kdf = if alg.supports_pbkdf2() { "  (pbkdf2)" } else { "" };
                println!("{:<10} {:>3} bytes{}", alg.name, alg.output_size, kdf);
            }
            Ok(())
        }
        "pbkdf2" => cmd_pbkdf2(rest),
        "base64" => cmd_base64(rest),
        "morse" => cmd_morse(rest),
        "rot13" => arg(rest, 0, "text").map(|text| println!("{}", codec::rot13(text))),
        "help" | "-h" | "--help" => {
            print_usage(program_name);
            Ok(())
        }
        other => {
            eprintln!("Error: Unknown command '{}'", other);
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    }
}

/// Positional argument `index`, or a usage error naming `what`
fn arg<'a>(rest: &'a [String], index: usize, what: &str) -> Result<&'a str, Box<dyn Error>> {
    rest.get(index)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("missing <{}> argument", what).into())
}

fn read_program(path: &str) -> Result<String, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Err(format!("File '{}' not found", path).into());
    }
    Ok(fs::read_to_string(path)?)
}

fn cmd_run(rest: &[String]) -> CliResult {
    let path = arg(rest, 0, "file")?;
    let source = read_program(path)?;

    eprintln!("Loading {}...", path);
    let interpreter = Interpreter::new(&source)?.with_history(SNAPSHOT_MEMORY_LIMIT)?;
    eprintln!(
        "Loaded {} instructions.",
        interpreter.program().len()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;

    let output = app.interpreter.output().as_str();
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn cmd_exec(rest: &[String]) -> CliResult {
    let path = arg(rest, 0, "file")?;
    let source = read_program(path)?;

    let output = match rest.iter().position(|a| a == "--input") {
        Some(i) => {
            let chars = arg(rest, i + 1, "chars")?;
            interpret_with(&source, &mut QueuedInput::new(chars))?
        }
        None => interpret_with(&source, &mut LinePrompt::stdin())?,
    };

    let mut stdout = io::stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn cmd_synth(rest: &[String]) -> CliResult {
    let text = arg(rest, 0, "text")?;
    let explain = rest.iter().any(|a| a == "--explain");

    let bucket_size = match rest.get(1).filter(|a| *a != "--explain") {
        Some(raw) => {
            let n: i64 = raw
                .parse()
                .map_err(|_| format!("bucket size must be an integer, got '{}'", raw))?;
            n.max(1) as usize
        }
        None => DEFAULT_BUCKET_SIZE,
    };

    if explain {
        eprint!("{}", synth::plan(text, bucket_size)?);
    }

    let program = synth::synthesize(text, bucket_size)?;
    info!(len = program.len(), "synthesized program");
    println!("{}", program);
    Ok(())
}

fn cmd_hash(rest: &[String]) -> CliResult {
    let name = arg(rest, 0, "algorithm")?;
    let text = arg(rest, 1, "text")?;
    println!("{}", codec::hash(name, text)?);
    Ok(())
}

fn cmd_pbkdf2(rest: &[String]) -> CliResult {
    let name = arg(rest, 0, "algorithm")?;
    let password = arg(rest, 1, "password")?;
    let salt = arg(rest, 2, "salt")?;
    let iterations: u32 = arg(rest, 3, "iterations")?
        .parse()
        .map_err(|_| "iterations must be a positive integer")?;
    let dklen = match rest.get(4) {
        Some(raw) => Some(
            raw.parse::<usize>()
                .map_err(|_| "dklen must be a positive integer")?,
        ),
        None => None,
    };

    println!(
        "{}",
        codec::pbkdf2_hmac(name, password, salt, iterations, dklen)?
    );
    Ok(())
}

fn cmd_base64(rest: &[String]) -> CliResult {
    let text = arg(rest, 1, "text")?;
    match arg(rest, 0, "encode|decode")? {
        "encode" => println!("{}", base64::encode(text)),
        "decode" => println!("{}", base64::decode(text)?),
        other => return Err(format!("unknown base64 mode '{}'", other).into()),
    }
    Ok(())
}

fn cmd_morse(rest: &[String]) -> CliResult {
    let text = arg(rest, 1, "text")?;
    match arg(rest, 0, "encode|decode")? {
        "encode" => println!("{}", morse::encode(text)?),
        "decode" => println!("{}", morse::decode(text)?),
        other => return Err(format!("unknown morse mode '{}'", other).into()),
    }
    Ok(())
}
