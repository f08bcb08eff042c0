use anyhow::Result;
use clap::{Parser, Subcommand};
use firc::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "firc", version, about = "Compile fir binding expressions and x-fir-* attributes")]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
    /// JSON file mapping action names to JS calls
    #[arg(long, global = true)]
    actions: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a binding expression, e.g. "create->todo=>save".
    Translate {
        expr: String,
    },
    /// Translate one action attribute, e.g. x-fir-append:todo create
    Action {
        key: String,
        value: String,
    },
    /// Compile all attributes of one element.
    Element {
        /// KEY=VALUE, repeatable
        #[arg(long = "attr", value_name = "KEY=VALUE")]
        attrs: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    firc::setup_tracing(cli.verbose);
    let actions = firc::load_actions(cli.actions.as_deref())?;

    let out = match cli.command {
        Commands::Translate { expr } => firc::run_translate(&expr, &actions)?,
        Commands::Action { key, value } => firc::run_action(&key, &value, &actions)?,
        Commands::Element { attrs, format } => firc::run_element(&attrs, &actions, format)?,
    };
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}
