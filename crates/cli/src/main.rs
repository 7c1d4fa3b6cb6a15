use clap::{Parser, Subcommand};
use prionis_dns_domain::config::DatabaseBackend;
use prionis_dns_domain::CliOverrides;
use prionis_dns_infrastructure::dns::DnsServerHandler;
use tracing::{info, warn};

mod bootstrap;
mod commands;
mod di;
mod server;

use commands::record::RecordCommand;

#[derive(Parser, Debug)]
#[command(name = "prionis-dns")]
#[command(version)]
#[command(about = "Prionis DNS - small authoritative DNS server")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long, global = true)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer DNS queries (default)
    Serve,

    /// Manage stored resource records
    Record {
        #[command(subcommand)]
        action: RecordCommand,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config.logging)?;

    let repos = di::Repositories::new(&config).await?;
    let use_cases = di::UseCases::new(&repos);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting Prionis DNS v{}", env!("CARGO_PKG_VERSION"));
            let handler = DnsServerHandler::new(use_cases.handle_query.clone());
            server::start_dns_server(&config.server, handler).await?;
            info!("Server shutdown complete");
        }
        Command::Record { action } => {
            if config.database.backend == DatabaseBackend::Memory {
                warn!("database.backend is \"memory\": record changes last only for this command");
            }
            commands::record::run(action, &use_cases).await?
        }
    }

    Ok(())
}
