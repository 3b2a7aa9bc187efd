use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::postgres::PgConnectOptions;
use std::env;
use std::path::PathBuf;

/// Show sticky notes on your desktop.
#[derive(Parser, Debug, Default)]
#[command(name = "stickyboard", version, about)]
pub struct Cli {
    /// The database engine to connect with [default: sqlite]
    #[arg(short = 't', long = "type", value_name = "sqlite|none|postgre|mysql")]
    pub store_type: Option<String>,
    /// SQLite database file path [default: $DBPATH or $XDG_DATA_HOME/stickyboard.db]
    #[arg(short = 'f', long = "sqlite-db", value_name = "FILE")]
    pub sqlite_db: Option<PathBuf>,
    /// The hostname or IP address of the database server
    #[arg(short = 'o', long)]
    pub host: Option<String>,
    /// The port number to connect to [default: 5432 for PostgreSQL, 3306 for MySQL]
    #[arg(short = 'p', long)]
    pub port: Option<u16>,
    /// The name of the database [default: stickyboard]
    #[arg(short = 'd', long, value_name = "DATABASE")]
    pub dbname: Option<String>,
    /// The username to authenticate with [default: $USER]
    #[arg(short = 'u', long)]
    pub user: Option<String>,
    /// The password to authenticate with
    #[arg(short = 's', long)]
    pub password: Option<String>,
    /// Log what is being done
    #[arg(short = 'v', long)]
    pub verbose: bool,
    /// Log everything, including each SQL statement
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStoreType {
    SQLite,
    NoStorage,
    PostgreSQL,
    MySQL,
}

impl NoteStoreType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sqlite" => Some(NoteStoreType::SQLite),
            "none" => Some(NoteStoreType::NoStorage),
            "postgre" | "postgres" | "postgresql" => Some(NoteStoreType::PostgreSQL),
            "mysql" => Some(NoteStoreType::MySQL),
            _ => None,
        }
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    store_type: String,
    pub sqlite_db: PathBuf,
    pub database: DatabaseSettings,
    pub verbose: bool,
    pub debug: bool,
}

impl Settings {
    /// The configured backend; anything unrecognized means no storage.
    pub fn note_store_type(&self) -> NoteStoreType {
        NoteStoreType::from_name(&self.store_type).unwrap_or_else(|| {
            warn!(store_type = %self.store_type, "not recognized storage type, notes will not be saved");
            NoteStoreType::NoStorage
        })
    }

    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub name: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseSettings {
    /// Without a host, sqlx looks for a local socket before trying localhost.
    pub fn pg_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .port(self.port.unwrap_or(5432))
            .database(&self.name);
        if let Some(ref host) = self.host {
            options = options.host(host);
        }
        if let Some(ref username) = self.username {
            options = options.username(username);
        }
        if let Some(ref password) = self.password {
            options = options.password(password);
        }
        options
    }

    pub fn mysql_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(self.host.as_deref().unwrap_or("localhost"))
            .port(self.port.unwrap_or(3306))
            .database(&self.name);
        if let Some(ref username) = self.username {
            options = options.username(username);
        }
        if let Some(ref password) = self.password {
            options = options.password(password);
        }
        options
    }
}

fn default_sqlite_db(env: &impl Fn(&str) -> Option<String>) -> PathBuf {
    let set = |key: &str| env(key).filter(|v| !v.is_empty());
    if let Some(path) = set("DBPATH") {
        return PathBuf::from(path);
    }
    set("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("share")))
        .unwrap_or_default()
        .join("stickyboard.db")
}

/// `STICKYBOARD_*` variables, with `__` between nested keys.
fn environment() -> Environment {
    Environment::with_prefix("STICKYBOARD")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

pub fn get_configuration(cli: &Cli) -> Result<Settings, ConfigError> {
    build_configuration(cli, |key| env::var(key).ok(), environment())
}

fn build_configuration(
    cli: &Cli,
    env: impl Fn(&str) -> Option<String>,
    environment: Environment,
) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder()
        .set_default("store_type", "sqlite")?
        .set_default(
            "sqlite_db",
            default_sqlite_db(&env).to_string_lossy().into_owned(),
        )?
        .set_default("database.name", "stickyboard")?
        .set_default("verbose", false)?
        .set_default("debug", false)?;
    if let Some(user) = env("USER") {
        builder = builder.set_default("database.username", user)?;
    }
    let config = builder
        .add_source(File::with_name("stickyboard").required(false))
        .add_source(environment)
        .set_override_option("store_type", cli.store_type.clone())?
        .set_override_option(
            "sqlite_db",
            cli.sqlite_db
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        )?
        .set_override_option("database.host", cli.host.clone())?
        .set_override_option("database.port", cli.port.map(i64::from))?
        .set_override_option("database.name", cli.dbname.clone())?
        .set_override_option("database.username", cli.user.clone())?
        .set_override_option("database.password", cli.password.clone())?
        .set_override_option("verbose", cli.verbose.then_some(true))?
        .set_override_option("debug", cli.debug.then_some(true))?
        .build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn configure(args: &[&str], vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let cli = Cli::parse_from(std::iter::once("stickyboard").chain(args.iter().copied()));
        let environment = environment().source(Some(vars.clone().into_iter().collect()));
        build_configuration(&cli, |key| vars.get(key).cloned(), environment)
            .expect("Failed to build configuration")
    }

    #[test]
    fn defaults() {
        let settings = configure(&[], &[("USER", "alice"), ("XDG_DATA_HOME", "/data")]);
        assert_eq!(settings.note_store_type(), NoteStoreType::SQLite);
        assert_eq!(settings.sqlite_db, PathBuf::from("/data/stickyboard.db"));
        assert_eq!(settings.database.name, "stickyboard");
        assert_eq!(settings.database.username.as_deref(), Some("alice"));
        assert_eq!(settings.database.host, None);
        assert_eq!(settings.database.port, None);
        assert_eq!(settings.log_level(), "warn");
    }

    #[test]
    fn dbpath_wins_over_data_home() {
        let settings = configure(
            &[],
            &[("DBPATH", "/tmp/notes.db"), ("XDG_DATA_HOME", "/data")],
        );
        assert_eq!(settings.sqlite_db, PathBuf::from("/tmp/notes.db"));
        let settings = configure(&["-f", "/srv/own.db"], &[("DBPATH", "/tmp/notes.db")]);
        assert_eq!(settings.sqlite_db, PathBuf::from("/srv/own.db"));
    }

    #[test]
    fn command_line_wins_over_environment() {
        let settings = configure(
            &["--type", "postgre", "--host", "db.local", "-p", "6543", "-u", "bob"],
            &[
                ("USER", "alice"),
                ("STICKYBOARD_STORE_TYPE", "mysql"),
                ("STICKYBOARD_DATABASE__HOST", "env.local"),
                ("STICKYBOARD_DATABASE__NAME", "notes"),
            ],
        );
        assert_eq!(settings.note_store_type(), NoteStoreType::PostgreSQL);
        assert_eq!(settings.database.host.as_deref(), Some("db.local"));
        assert_eq!(settings.database.port, Some(6543));
        assert_eq!(settings.database.name, "notes");
        assert_eq!(settings.database.username.as_deref(), Some("bob"));
    }

    #[test]
    fn unrecognized_type_means_no_storage() {
        let settings = configure(&["-t", "oracle"], &[]);
        assert_eq!(settings.note_store_type(), NoteStoreType::NoStorage);
        let settings = configure(&["-t", "none"], &[]);
        assert_eq!(settings.note_store_type(), NoteStoreType::NoStorage);
    }

    #[test]
    fn store_type_names() {
        assert_eq!(NoteStoreType::from_name("SQLite"), Some(NoteStoreType::SQLite));
        assert_eq!(
            NoteStoreType::from_name("postgres"),
            Some(NoteStoreType::PostgreSQL)
        );
        assert_eq!(NoteStoreType::from_name("mysql"), Some(NoteStoreType::MySQL));
        assert_eq!(NoteStoreType::from_name("mariadb"), None);
    }

    #[test]
    fn verbosity() {
        assert_eq!(configure(&["-v"], &[]).log_level(), "info");
        assert_eq!(configure(&["--debug"], &[]).log_level(), "debug");
        assert_eq!(configure(&["-v", "--debug"], &[]).log_level(), "debug");
    }

    #[test]
    fn postgresql_options() {
        let settings = configure(&["-d", "notes"], &[]);
        let options = settings.database.pg_options();
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("notes"));
    }
}
