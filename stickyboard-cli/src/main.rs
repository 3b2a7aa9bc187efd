use clap::Parser;
use std::io;
use stickyboard_cli::configuration::{get_configuration, Cli};
use stickyboard_cli::shell::Shell;
use stickyboard_cli::startup::open_board;
use stickyboard_cli::telemetry::{get_subscriber, init_tracing};
use tracing_subscriber::layer::SubscriberExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let configuration = match get_configuration(&cli) {
        Ok(configuration) => configuration,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    let subscriber = get_subscriber(&configuration)
        .with(tracing_subscriber::fmt::Layer::default().with_writer(io::stderr));
    init_tracing(subscriber);

    let board = open_board(&configuration).await.map_err(io::Error::other)?;
    let mut shell = Shell::new(board);
    shell.run(io::stdin().lock(), io::stdout()).await
}
