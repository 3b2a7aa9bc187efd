use clap::Parser;
use lazy_static::lazy_static;
use std::path::PathBuf;
use stickyboard_cli::configuration::{get_configuration, Cli, Settings};
use stickyboard_cli::shell::Shell;
use stickyboard_cli::startup::open_board;
use stickyboard_cli::telemetry::{get_subscriber, init_tracing};
use tempfile::TempDir;
use tracing_subscriber::layer::SubscriberExt;

fn configure(args: &[&str]) -> Settings {
    let cli = Cli::parse_from(std::iter::once("stickyboard").chain(args.iter().copied()));
    get_configuration(&cli).expect("Failed to read configuration")
}

lazy_static! {
    static ref TRACING: () = {
        let subscriber = get_subscriber(&configure(&["--debug"]))
            .with(tracing_subscriber::fmt::Layer::default().with_test_writer());
        init_tracing(subscriber);
    };
}

/// An SQLite database in a private directory, opened anew for each session.
pub struct TestDatabase {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDatabase {
    pub fn new() -> Self {
        lazy_static::initialize(&TRACING);
        let dir = tempfile::tempdir().expect("Failed to create a temporary directory");
        let path = dir.path().join("data").join("stickyboard.db");
        TestDatabase { _dir: dir, path }
    }

    /// A directory where the database file should be, so it cannot be opened.
    pub fn unopenable() -> Self {
        let db = TestDatabase::new();
        std::fs::create_dir_all(&db.path).expect("Failed to create a directory");
        db
    }

    pub fn settings(&self) -> Settings {
        let path = self.path.to_string_lossy().into_owned();
        configure(&["-t", "sqlite", "-f", &path])
    }

    /// Start the application on this database and feed it `script`.
    pub async fn session(&self, script: &str) -> String {
        let board = open_board(&self.settings())
            .await
            .expect("Failed to open the board");
        let mut shell = Shell::new(board);
        let mut output = Vec::new();
        shell
            .run(script.as_bytes(), &mut output)
            .await
            .expect("Failed to run the shell");
        String::from_utf8(output).expect("Output is not UTF-8")
    }
}
