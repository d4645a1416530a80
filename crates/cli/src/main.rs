use clap::Parser;
use ferrous_nscheck_domain::{CliOverrides, Record};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod output;

const EXIT_VALIDATION_FAILED: u8 = 1;
const EXIT_PIPELINE_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "ferrous-nscheck")]
#[command(version)]
#[command(about = "Check that every authoritative nameserver of a zone serves the expected records")]
struct Cli {
    /// Fully qualified name to inspect (trailing dot required)
    qname: String,

    /// Record type to query
    #[arg(default_value = "A")]
    qtype: String,

    /// Expected record as "<name> <TYPE> <value>"; repeatable
    #[arg(short = 'e', long = "expect", value_name = "RECORD")]
    expect: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream resolver used for discovery; repeatable
    #[arg(short = 'u', long = "upstream", value_name = "ADDR")]
    upstream: Vec<String>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Bound on the whole inspection in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Port the authoritative nameservers are queried on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Inspection failed");
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_PIPELINE_ERROR)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cli_overrides = CliOverrides {
        upstream_servers: cli.upstream.clone(),
        timeout_ms: cli.timeout_ms,
        deadline_ms: cli.deadline_ms,
        nameserver_port: cli.port,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let expected = cli
        .expect
        .iter()
        .map(|arg| output::parse_expectation(arg))
        .collect::<anyhow::Result<Vec<Record>>>()?;

    let cancellation = CancellationToken::new();
    let services = di::DnsServices::new(&config)?;
    let use_cases = di::UseCases::new(&services, &config, cancellation.clone());

    let ctrl_c = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling inspection");
            ctrl_c.cancel();
        }
    });

    let report = use_cases.inspect.execute(&cli.qname, &cli.qtype).await?;
    let validation = (!expected.is_empty()).then(|| report.validate(&expected));

    if cli.json {
        println!(
            "{}",
            output::render_json(&cli.qname, &cli.qtype, &report, validation.as_ref())?
        );
    } else {
        print!("{}", output::render_report(&report));
        if let Some(validation) = &validation {
            println!("{}", output::render_validation(validation));
        }
    }

    match validation {
        Some(Err(_)) => Ok(ExitCode::from(EXIT_VALIDATION_FAILED)),
        _ => Ok(ExitCode::SUCCESS),
    }
}
