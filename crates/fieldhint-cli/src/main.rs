mod display;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fieldhint_core::{AnalysisResult, ProcessPlan, RuleConfig};
use fieldhint_rules::{SuggestionEngine, analyze_capacity};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "fieldhint",
    version,
    about = "Standardized-field suggestions for analysed process descriptions"
)]
struct Cli {
    /// Log per-detector detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Suggest standardized fields for an analysis result (or a JSON array of them).
    Suggest {
        /// JSON file, or `-` for stdin.
        input: PathBuf,
        /// JSON rule file replacing the built-in vocabularies.
        #[arg(long, env = "FIELDHINT_RULES")]
        rules: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Analyse a process plan for bottlenecks and deadline risk.
    Capacity {
        /// JSON file, or `-` for stdin.
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the active entity and keyword vocabularies.
    Rules {
        #[arg(long, env = "FIELDHINT_RULES")]
        rules: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// A single analysis result or a batch. `Many` is tried first so an array
/// is never read positionally into a struct.
#[derive(Deserialize)]
#[serde(untagged)]
enum Inputs {
    Many(Vec<AnalysisResult>),
    One(AnalysisResult),
}

#[derive(Serialize)]
struct JsonReport<'a, T: Serialize> {
    generated_at: String,
    results: &'a T,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
    tracing::debug!("fieldhint v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Suggest {
            input,
            rules,
            format,
        } => run_suggest(&input, rules.as_deref(), format),
        Command::Capacity { input, format } => run_capacity(&input, format),
        Command::Rules { rules, format } => run_rules(rules.as_deref(), format),
    }
}

fn run_suggest(input: &Path, rules: Option<&Path>, format: Format) -> anyhow::Result<()> {
    let config = load_rules(rules)?;
    let engine = SuggestionEngine::new(&config).context("building suggestion engine")?;

    let text = read_input(input)?;
    let inputs: Inputs = serde_json::from_str(&text)
        .with_context(|| format!("parsing analysis result from {}", input.display()))?;

    match (inputs, format) {
        (Inputs::One(result), Format::Json) => print_json(&engine.suggest(&result)),
        (Inputs::Many(batch), Format::Json) => print_json(&engine.suggest_batch(&batch)),
        (Inputs::One(result), Format::Text) => {
            let suggestions = engine.suggest(&result);
            print!(
                "{}",
                display::render_suggestions(&input_label(input), &suggestions)
            );
            Ok(())
        }
        (Inputs::Many(batch), Format::Text) => {
            for (i, suggestions) in engine.suggest_batch(&batch).iter().enumerate() {
                let title = format!("{} #{}", input_label(input), i + 1);
                print!("{}", display::render_suggestions(&title, suggestions));
            }
            Ok(())
        }
    }
}

fn run_capacity(input: &Path, format: Format) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let plan: ProcessPlan = serde_json::from_str(&text)
        .with_context(|| format!("parsing process plan from {}", input.display()))?;
    let report = analyze_capacity(&plan);

    match format {
        Format::Json => print_json(&report),
        Format::Text => {
            let title = if plan.name.is_empty() {
                input_label(input)
            } else {
                plan.name.clone()
            };
            print!("{}", display::render_capacity(&title, &report));
            Ok(())
        }
    }
}

fn run_rules(rules: Option<&Path>, format: Format) -> anyhow::Result<()> {
    let config = load_rules(rules)?;
    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        Format::Text => {
            print!("{}", display::render_rules(&config));
            Ok(())
        }
    }
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<RuleConfig> {
    match path {
        Some(p) => RuleConfig::from_path(p)
            .with_context(|| format!("loading rule file {}", p.display())),
        None => Ok(RuleConfig::default()),
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn input_label(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}

fn print_json<T: Serialize>(results: &T) -> anyhow::Result<()> {
    let report = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        results,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
