//! CLI Adapter.

mod wizard;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::api::{self, DEFAULT_SCRIPT_NAME, RenderOptions};
use crate::domain::{AppError, PathSelection};

#[derive(Parser)]
#[command(name = "mailstart")]
#[command(version)]
#[command(
    about = "Generate a PowerShell script that opens Outlook and sends an email at startup",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./mailstart.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the PowerShell script
    #[clap(visible_alias = "r")]
    Render(RenderArgs),
    /// Collect the parameters interactively and render the script
    #[clap(visible_alias = "w")]
    Wizard {
        /// Write the script to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List Outlook installation path presets
    #[clap(visible_alias = "ls")]
    Presets {
        /// Output format
        #[arg(long, value_enum, default_value_t = PresetFormat::Text)]
        format: PresetFormat,
    },
    /// Write a default mailstart.toml
    #[clap(visible_alias = "i")]
    Init,
    /// Show how to run the script at every logon with the Task Scheduler
    Instructions {
        /// File name the script is saved under
        #[arg(long, default_value = DEFAULT_SCRIPT_NAME)]
        script_name: String,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Recipient address
    #[arg(long)]
    to: Option<String>,
    /// Subject line
    #[arg(long)]
    subject: Option<String>,
    /// Message body
    #[arg(long, conflicts_with = "body_file")]
    body: Option<String>,
    /// Read the message body from a file
    #[arg(long)]
    body_file: Option<PathBuf>,
    /// Seconds to wait after launching Outlook (negative values become 0)
    #[arg(long, allow_negative_numbers = true)]
    delay: Option<f64>,
    /// Leave Outlook open after sending
    #[arg(long, conflicts_with = "close")]
    keep_open: bool,
    /// Close Outlook after sending
    #[arg(long)]
    close: bool,
    /// Installation path preset key (see `mailstart presets`)
    #[arg(long, conflicts_with = "custom_path")]
    preset: Option<String>,
    /// Full path to OUTLOOK.EXE
    #[arg(long)]
    custom_path: Option<String>,
    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PresetFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Render(args) => run_render(config, args),
        Commands::Wizard { output } => wizard::run_wizard(config, output.as_deref()),
        Commands::Presets { format } => run_presets(config, format),
        Commands::Init => run_init(config),
        Commands::Instructions { script_name } => run_instructions(config, &script_name),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_render(config: Option<&Path>, args: RenderArgs) -> Result<(), AppError> {
    let body = match args.body_file {
        Some(path) => Some(std::fs::read_to_string(&path)?),
        None => args.body,
    };
    let keep_open = if args.keep_open {
        Some(true)
    } else if args.close {
        Some(false)
    } else {
        None
    };
    let path_selection = match (args.preset, args.custom_path) {
        (Some(key), _) => Some(PathSelection::preset(key)),
        (None, Some(raw_path)) => Some(PathSelection::custom(raw_path)),
        (None, None) => None,
    };

    let options = RenderOptions {
        recipient: args.to,
        subject: args.subject,
        body,
        startup_delay_seconds: args.delay,
        keep_open,
        path_selection,
    };
    let outcome = api::render(config, options)?;
    emit_script(&outcome.script, args.output.as_deref())
}

/// Print the script to stdout, or write it verbatim to `output`.
fn emit_script(script: &str, output: Option<&Path>) -> Result<(), AppError> {
    match output {
        Some(path) => {
            api::write_script(path, script)?;
            println!("✅ Generated {}", path.display());
        }
        None => println!("{}", script),
    }
    Ok(())
}

fn run_presets(config: Option<&Path>, format: PresetFormat) -> Result<(), AppError> {
    let presets = api::presets(config)?;
    match format {
        PresetFormat::Json => {
            let json = serde_json::to_string_pretty(&presets).map_err(|e| {
                AppError::ParseError { what: "presets".into(), details: e.to_string() }
            })?;
            println!("{}", json);
        }
        PresetFormat::Text => {
            println!("Available presets:");
            for preset in presets {
                println!("  {} - {}", preset.key, preset.label);
                println!("    {}", preset.install_path);
            }
        }
    }
    Ok(())
}

fn run_init(config: Option<&Path>) -> Result<(), AppError> {
    let path = api::init(config)?;
    println!("✅ Created {}", path.display());
    Ok(())
}

fn run_instructions(config: Option<&Path>, script_name: &str) -> Result<(), AppError> {
    let text = api::instructions(config, script_name)?;
    print!("{}", text);
    Ok(())
}
