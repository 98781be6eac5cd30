use anyhow::Context;
use clap::Parser;

/// WebSocket chess room server.
#[derive(Parser, Debug)]
#[command(name = "rookery", about = "Real-time multiplayer chess room server")]
struct Args {
    /// Bind host
    #[arg(long, default_value = rky_core::DEFAULT_HOST)]
    host: String,
    /// Bind port
    #[arg(short, long, default_value_t = rky_core::DEFAULT_PORT)]
    port: u16,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    rky_core::log();
    let args = Args::parse();
    rky_server::run(&args.host, args.port)
        .await
        .with_context(|| format!("failed to serve on {}:{}", args.host, args.port))
}
