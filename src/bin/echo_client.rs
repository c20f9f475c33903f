//! Line-oriented echo client.
//!
//! Connects to `<host> <port>`, sends each line read from standard input,
//! and prints each line the server sends back. Companion tool for poking
//! at line-oriented servers by hand.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (host, port) = match (args.next(), args.next()) {
        (Some(host), Some(port)) => (host, port),
        _ => {
            eprintln!("usage: echo_client <host> <port>");
            std::process::exit(1);
        }
    };

    let stream = TcpStream::connect(format!("{host}:{port}"))
        .await
        .with_context(|| format!("Failed to connect to {host}:{port}"))?;
    let (read_half, mut write_half) = stream.into_split();
    let mut server_lines = BufReader::new(read_half).lines();

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = input.next_line().await? {
        write_half.write_all(line.as_bytes()).await?;
        write_half.write_all(b"\n").await?;

        match server_lines.next_line().await? {
            Some(echo) => println!("{echo}"),
            None => break,
        }
    }

    Ok(())
}
