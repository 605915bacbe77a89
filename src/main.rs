use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use triaje_scope::commands::{self, ScopeCheckRequest};
use triaje_scope::config;

/// Check whether a clinical note falls within the respiratory triage scope.
#[derive(Debug, Parser)]
#[command(name = config::APP_NAME, version = config::APP_VERSION)]
struct Cli {
    /// Chief complaint (motivo de consulta).
    #[arg(long)]
    motivo: Option<String>,

    /// Physical exam narrative (examen físico).
    #[arg(long)]
    examen: Option<String>,

    /// Read a JSON request `{"motivo": ..., "examen": ...}` from stdin.
    #[arg(long, conflicts_with_all = ["motivo", "examen"])]
    stdin: bool,

    /// Pretty-print the JSON response.
    #[arg(long)]
    pretty: bool,

    /// Debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_INPUT_ERROR: u8 = 1;
const EXIT_OUT_OF_DOMAIN: u8 = 2;

fn read_request(cli: &Cli) -> Result<ScopeCheckRequest, String> {
    if !cli.stdin {
        return Ok(ScopeCheckRequest {
            motivo: cli.motivo.clone(),
            examen: cli.examen.clone(),
        });
    }

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| format!("Cannot read stdin: {e}"))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid request JSON: {e}"))
}

fn run(cli: &Cli) -> Result<bool, String> {
    let request = read_request(cli)?;
    let response = commands::check_scope(request)?;

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .map_err(|e| e.to_string())?;
    println!("{rendered}");

    Ok(response.out_of_domain)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    triaje_scope::init_tracing(cli.verbose);
    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(EXIT_OUT_OF_DOMAIN),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}
