use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, Read};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use quick_info::query::{AnswerEngine, DispatchPolicy, EngineSettings};
use quick_info::resolvers::default_registry;

#[derive(Parser)]
#[command(name = "quick_info_cli")]
#[command(about = "Answer QuickInfo queries locally", long_about = None)]
struct Args {
    /// The query to answer (non-interactive mode)
    #[arg(short, long)]
    query: Option<String>,

    /// Read the query from stdin instead of the command line
    #[arg(long)]
    stdin: bool,

    /// Answer the sub-queries of a multi-query in parallel
    #[arg(long)]
    parallel: bool,

    /// Skip failing resolvers instead of failing the whole sub-query
    #[arg(long)]
    isolate: bool,
}

fn build_engine(args: &Args) -> AnswerEngine {
    let policy = if args.isolate {
        DispatchPolicy::Isolated
    } else {
        DispatchPolicy::FailFast
    };
    let settings = EngineSettings {
        parallel: args.parallel,
        ..EngineSettings::default()
    };
    AnswerEngine::new(Arc::new(default_registry(policy)), settings)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout stays pure HTML
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let engine = build_engine(&args);

    if args.stdin {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let raw = input.trim_end_matches(['\r', '\n']);
        println!("{}", engine.answer(raw, None).into_html());
        return Ok(());
    }

    if let Some(query) = args.query.as_deref() {
        println!("{}", engine.answer(query, None).into_html());
        return Ok(());
    }

    run_interactive(&engine)
}

fn run_interactive(engine: &AnswerEngine) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let _ = rl.load_history(".quick_info_history");

    println!("QuickInfo Interactive Console");
    println!("Type '\\h' for help, '\\q' to quit");
    println!("Resolvers: {}", engine.registry().names().collect::<Vec<_>>().join(", "));

    loop {
        match rl.readline("quick_info> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                if let Some(cmd) = line.trim().strip_prefix('\\') {
                    match cmd {
                        "q" | "quit" | "exit" => {
                            println!("Goodbye!");
                            break;
                        }
                        "h" | "help" => print_help(),
                        "c" | "clear" => print!("\x1B[2J\x1B[1;1H"),
                        _ => eprintln!("Unknown command: \\{}. Type \\h for help.", cmd),
                    }
                    continue;
                }

                println!("{}", engine.answer(&line, None).into_html());
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(".quick_info_history");
    Ok(())
}

fn print_help() {
    println!();
    println!("Enter any query to see its answers as HTML.");
    println!("Separate several queries with '|' to answer them side by side.");
    println!("Enter '?' to list example queries.");
    println!();
    println!("Commands:");
    println!("  \\h, \\help     Show this help");
    println!("  \\c, \\clear    Clear the screen");
    println!("  \\q, \\quit     Exit");
    println!();
}
