use std::net::SocketAddr;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use payload_sort::server::router;
use payload_sort::sort::{Sort, MAX_WORKERS};

/// Serve payload sorting over HTTP
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Upper bound of the worker pool size per request, 0 for all cores
    #[arg(long, default_value_t = MAX_WORKERS)]
    max_workers: usize,

    /// Reject request bodies larger than this many bytes, no limit by default
    #[arg(long)]
    max_body_bytes: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;
    let args = Args::parse();

    let mut sort = Sort::new();
    sort.with_max_workers(args.max_workers);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    log::info!("Server is running on {}, max workers: {}", args.bind, args.max_workers);
    axum::serve(listener, router(sort, args.max_body_bytes)).await?;
    Ok(())
}
