use std::{env, fs};

use fixifly_core::csv::{read_commands, write_wallets};
use fixifly_core::{Config, Engine};
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let path = args
        .next()
        .expect("usage: fixifly-core <operations.csv> [config.json]");

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let config = match args.next() {
        Some(config_path) => {
            let raw = fs::read_to_string(&config_path).expect("failed to read config file");
            serde_json::from_str(&raw).expect("failed to parse config file")
        }
        None => Config::default(),
    };

    let mut engine = Engine::new(config);
    let (cmd_sender, cmd_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in read_commands(&path) {
            match result {
                Ok(command) => {
                    cmd_sender.send(command).await.unwrap();
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    engine.run(ReceiverStream::new(cmd_receiver)).await;

    write_wallets(engine.wallets());
}
