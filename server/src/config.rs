//! Server configuration.

use std::path::PathBuf;

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface the listener binds to (default: every interface)
    pub host: String,

    /// Listening port (default: 3000, the port the browser page expects)
    pub port: u16,

    /// SQLite file holding the students table; created on first start
    pub database: PathBuf,

    /// Directory the browser page is served from
    pub public_dir: PathBuf,

    /// Insert sample students into an empty store on startup
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database: PathBuf::from("student.db"),
            public_dir: PathBuf::from("public"),
            seed: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` string handed to the TCP listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the active log filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFilterSource {
    /// `--verbose` was given; it wins over `RUST_LOG`.
    Verbose,
    /// `RUST_LOG` was set and `--verbose` was not.
    Env,
    /// Neither was given.
    Default,
}

/// Picks the `tracing` filter directive for the binary.
///
/// `--verbose` always yields `debug`, even when `RUST_LOG` is set.
pub fn log_directive(verbose: bool, rust_log: Option<&str>) -> (String, LogFilterSource) {
    match (verbose, rust_log.map(str::trim).filter(|s| !s.is_empty())) {
        (true, _) => ("debug".to_string(), LogFilterSource::Verbose),
        (false, Some(env)) => (env.to_string(), LogFilterSource::Env),
        (false, None) => ("info".to_string(), LogFilterSource::Default),
    }
}
