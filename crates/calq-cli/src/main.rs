use calq_engine::{EvalConfig, ExpressionNode};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "calq")]
#[command(about = "Evaluate arithmetic expressions")]
#[command(version)]
struct Cli {
    /// Maximum parenthesis nesting depth
    #[arg(long, global = true, default_value_t = calq_engine::config::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an expression and print the result
    Eval {
        /// Expression text; multiple arguments are joined with spaces
        #[arg(required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },

    /// Check an expression for structural errors without evaluating it
    Check {
        #[arg(required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },

    /// Print how an expression is split into a tree
    Tree {
        #[arg(required = true, allow_hyphen_values = true)]
        expr: Vec<String>,
    },

    /// Evaluate one expression per line from stdin
    Repl,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = EvalConfig::new().with_max_depth(cli.max_depth);

    match cli.command {
        Command::Eval { expr } => cmd_eval(&expr.join(" "), &config),
        Command::Check { expr } => cmd_check(&expr.join(" "), &config),
        Command::Tree { expr } => cmd_tree(&expr.join(" "), &config),
        Command::Repl => cmd_repl(&config),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
        })
        .init();
}

fn parse_or_exit(source: &str, config: &EvalConfig) -> ExpressionNode {
    match ExpressionNode::parse_with(source, config) {
        Ok(node) => node,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_eval(source: &str, config: &EvalConfig) {
    let node = parse_or_exit(source, config);

    match node.evaluate() {
        Ok(value) => println!("{}", calq_engine::format_result(value)),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(source: &str, config: &EvalConfig) {
    parse_or_exit(source, config);
    println!("OK");
}

fn cmd_tree(source: &str, config: &EvalConfig) {
    let node = parse_or_exit(source, config);
    println!("{node}");
}

fn cmd_repl(config: &EvalConfig) {
    let stdin = std::io::stdin();
    let mut evaluated = 0usize;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            }
        };

        match calq_engine::evaluate_with(&line, config) {
            Ok(value) => println!("{}", calq_engine::format_result(value)),
            Err(e) => println!("Error: {e}"),
        }
        evaluated += 1;
    }

    log::info!("evaluated {evaluated} expressions");
}
