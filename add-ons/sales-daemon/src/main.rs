//! sales-daemon: places one outbound sales call from the command line.
//!
//! ```text
//! sales-daemon --phone +14155552671 [--assistant-id ID] [--name John] [--dry-run]
//! sales-daemon --verify
//! ```

use sales_core::{BuiltinSolutions, CoreConfig, KnowledgeSource, SolutionGraph};
use sales_skills::{is_valid_e164, CallOutcome, SalesCaller, ENV_API_KEY};
use clap::Parser;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "sales-daemon")]
#[command(about = "Place one outbound AI solutions sales call", long_about = None)]
struct CliArgs {
    /// Run the pre-flight check and exit
    #[arg(long)]
    verify: bool,

    /// Build the call payload and print it instead of sending
    #[arg(long)]
    dry_run: bool,

    /// Callee in E.164 format, e.g. +14155552671
    #[arg(long)]
    phone: Option<String>,

    /// Assistant id from the voice provider dashboard
    #[arg(long)]
    assistant_id: Option<String>,

    /// Customer name used in the greeting
    #[arg(long = "name")]
    customer_name: Option<String>,
}

/// Pre-flight check: config, credentials, and knowledge graph integrity.
fn run_verify(config: &CoreConfig) -> Result<(), String> {
    print!("Checking knowledge graph... ");
    let graph = SolutionGraph::builtin();
    if graph.solution_count() == 0 {
        return Err("knowledge graph is empty".to_string());
    }
    println!("OK ({} sectors, {} solutions)", graph.sector_count(), graph.solution_count());

    let dangling = graph.dangling_cross_references();
    if !dangling.is_empty() {
        println!("  {} cross-sector references do not resolve:", dangling.len());
        for d in &dangling {
            println!("  - {}/{} -> {}", d.sector, d.solution_id, d.similar_to);
        }
    }

    print!("Checking {}... ", ENV_API_KEY);
    match std::env::var(ENV_API_KEY) {
        Ok(k) if !k.trim().is_empty() => println!("OK"),
        _ if config.dry_run => println!("missing (dry run only)"),
        _ => return Err(format!("{} not set", ENV_API_KEY)),
    }

    print!("Checking assistant id... ");
    match config.resolve_assistant_id(None) {
        Some(id) => println!("OK ({})", id),
        None => println!("not configured (pass --assistant-id)"),
    }

    println!("\n✅ SUCCESS: Ready to place calls.");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[sales-daemon] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = CliArgs::parse();

    let mut config = match CoreConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Config load failed: {}", e);
            std::process::exit(1);
        }
    };
    config.dry_run |= args.dry_run;

    if args.verify {
        match run_verify(&config) {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    let Some(phone) = args.phone else {
        eprintln!("--phone is required (E.164, e.g. +14155552671)");
        std::process::exit(2);
    };
    if !is_valid_e164(&phone) {
        eprintln!(
            "Invalid phone number format: {}. Please use E.164 format (e.g., +14155552671)",
            phone
        );
        std::process::exit(2);
    }

    println!("\n=== Sales Agent Configuration ===");
    println!("Phone Number: {}", phone);
    println!(
        "Assistant ID: {}",
        config
            .resolve_assistant_id(args.assistant_id.as_deref())
            .unwrap_or_else(|| "<none>".to_string())
    );
    println!("Customer Name: {}", args.customer_name.as_deref().unwrap_or("<none>"));
    println!("=================================\n");

    let config = Arc::new(config);
    let source: Arc<dyn KnowledgeSource> = Arc::new(BuiltinSolutions);
    let caller = SalesCaller::from_env(Arc::clone(&config), source);
    tracing::info!(target: "sales::daemon", dry_run = config.dry_run, "Placing call");

    match caller
        .place_call(&phone, args.assistant_id.as_deref(), args.customer_name.as_deref())
        .await
    {
        Ok(CallOutcome::Started { handle, .. }) => {
            println!("Call started successfully (id {})", handle.id);
        }
        Ok(CallOutcome::DryRun { call }) => {
            match call.request_body().and_then(|b| Ok(serde_json::to_string_pretty(&b)?)) {
                Ok(body) => println!("{}", body),
                Err(e) => {
                    eprintln!("Error making sales call: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Error making sales call: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("sales-daemon").chain(list.iter().copied()))
    }

    #[test]
    fn parses_call_flags() {
        let parsed = args(&["--phone", "+14155552671", "--name", "John", "--dry-run"]).unwrap();
        assert_eq!(parsed.phone.as_deref(), Some("+14155552671"));
        assert_eq!(parsed.customer_name.as_deref(), Some("John"));
        assert!(parsed.dry_run);
        assert!(!parsed.verify);
    }

    #[test]
    fn missing_value_and_unknown_flag_are_errors() {
        use clap::error::ErrorKind;
        assert_eq!(args(&["--phone"]).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert_eq!(args(&["--loud"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn verify_and_assistant_id_flags() {
        let parsed = args(&["--verify", "--assistant-id", "asst-9"]).unwrap();
        assert!(parsed.verify);
        assert_eq!(parsed.assistant_id.as_deref(), Some("asst-9"));
        assert!(parsed.phone.is_none());
    }

    #[test]
    fn verify_passes_in_dry_run_without_key() {
        let config = CoreConfig {
            dry_run: true,
            ..CoreConfig::default()
        };
        assert!(run_verify(&config).is_ok());
    }
}
