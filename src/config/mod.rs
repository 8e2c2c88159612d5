// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, DispatchConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
};

impl Config {
    /// Load configuration from the default `config.toml` (optional) plus
    /// `CASERV_`-prefixed environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CASERV"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "common")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.default_content_type", "text/html; charset=utf-8")?
            .set_default("http.server_name", "caserv/0.1")?
            .set_default("dispatch.root", ".")?
            .set_default("dispatch.index_file", "index.html")?
            .set_default("dispatch.script_suffix", ".cgi")?
            .set_default("dispatch.script_timeout", 30)?
            .set_default("dispatch.sanitize_paths", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.dispatch.index_file, "index.html");
        assert_eq!(cfg.dispatch.script_suffix, ".cgi");
        assert_eq!(cfg.dispatch.root, ".");
        assert!(cfg.dispatch.sanitize_paths);
        assert!(cfg.dispatch.interpreter.is_none());
    }

    #[test]
    fn test_socket_addr_parses_defaults() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }
}
