use std::env;
use std::process::ExitCode;

use coffee_maker::CoffeeMaker;
use coffee_maker::csv::{read_commands, write_inventory};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        error!("usage: coffee-maker <commands.csv>");
        return ExitCode::from(2);
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let commands = match read_commands(path) {
        Ok(commands) => commands,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut machine = CoffeeMaker::new();
    let (cmd_sender, cmd_receiver) = tokio::sync::mpsc::channel(16);

    tokio::spawn(async move {
        for result in commands {
            match result {
                Ok(command) => {
                    if cmd_sender.send(command).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    machine.run(ReceiverStream::new(cmd_receiver)).await;

    if let Err(e) = write_inventory(machine.inventory()) {
        error!("failed to write inventory: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
