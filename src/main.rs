use std::env;
use std::io::BufRead;

use teller::{AccountLedger, Amount, Console, Pin};
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    // Seed values come from the command line; defaults match the classic demo
    let balance: Amount = env::args()
        .nth(1)
        .unwrap_or_else(|| "1000.00".to_string())
        .parse()
        .expect("usage: teller [initial-balance] [pin]");
    let pin: Pin = env::args()
        .nth(2)
        .unwrap_or_else(|| "1234".to_string())
        .parse()
        .expect("usage: teller [initial-balance] [pin]");

    let ledger = AccountLedger::new(balance, pin);
    let mut console = Console::new(ledger, std::io::stdout());
    let (line_sender, line_receiver) = tokio::sync::mpsc::channel(16);

    // Blocking stdin reader; drops the sender on EOF so the loop ends
    tokio::task::spawn_blocking(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_sender.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("failed to read input: {e}");
                    break;
                }
            }
        }
    });

    if let Err(e) = console.run(ReceiverStream::new(line_receiver)).await {
        warn!("output error: {e}");
    }
}
