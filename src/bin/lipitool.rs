use std::fs;
use std::io::{self, BufRead};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use lipi::{scripts, transliterate, ScriptTable};

#[derive(Parser)]
#[command(name = "lipitool", about = "Indic romanization diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Script {
    Malayalam,
    Devanagari,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize text from arguments, or stdin line by line when no text is given
    Romanize {
        /// Built-in script table to use
        #[arg(long, value_enum, default_value = "malayalam")]
        script: Script,
        /// Load a TOML script table instead of a built-in one
        #[arg(long)]
        table: Option<String>,
        /// Text to romanize
        text: Vec<String>,
    },
    /// Validate a TOML script table
    CheckTable {
        /// Path to the table file
        file: String,
    },
}

fn load_table(path: &str) -> ScriptTable {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{path}: {e}");
        process::exit(1);
    });
    ScriptTable::from_toml(&content).unwrap_or_else(|e| {
        eprintln!("{path}: {e}");
        process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Romanize {
            script,
            table,
            text,
        } => {
            let loaded = table.as_deref().map(load_table);
            let table: &ScriptTable = match &loaded {
                Some(t) => t,
                None => match script {
                    Script::Malayalam => scripts::malayalam(),
                    Script::Devanagari => scripts::devanagari(),
                },
            };

            if text.is_empty() {
                for line in io::stdin().lock().lines() {
                    let line = line.unwrap_or_else(|e| {
                        eprintln!("stdin: {e}");
                        process::exit(1);
                    });
                    println!("{}", transliterate(table, &line));
                }
            } else {
                println!("{}", transliterate(table, &text.join(" ")));
            }
        }
        Command::CheckTable { file } => {
            let table = load_table(&file);
            println!(
                "{file}: ok ({} entries, virama U+{:04X})",
                table.entry_count(),
                table.virama() as u32
            );
        }
    }
}
