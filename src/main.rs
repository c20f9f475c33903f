use wicket::config::Config;
use wicket::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut cfg = Config::load()?;

    // `wicket <port>` overrides the configured listen address.
    if let Some(port) = std::env::args().nth(1) {
        if port.parse::<u16>().is_err() {
            eprintln!("usage: wicket [port]");
            std::process::exit(1);
        }
        cfg.server.listen_addr = format!("0.0.0.0:{port}");
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
