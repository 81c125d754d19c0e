use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use giveaway::submission::validation::Strictness;
use giveaway::submission::workflow::MAX_ENTRIES;

/// How `/submit` reports its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResponseStyle {
    /// Status code with a plain text reason, for the embedding front-end.
    Api,
    /// Redirect to one of the static result pages.
    Redirect
}

#[derive(Parser, Debug, Clone)]
#[command(name = "giveaway-signup", about = "Signup server for the catalogue giveaway")]
pub struct Config {
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = "giveaway.db")]
    pub datasource: String,

    /// `strict` or `lenient` field validation
    #[arg(long, env = "GIVEAWAY_STRICTNESS", default_value = "strict")]
    pub strictness: Strictness,

    #[arg(long, env = "GIVEAWAY_RESPONSE_STYLE", value_enum, default_value = "api")]
    pub response_style: ResponseStyle,

    #[arg(long, env = "GIVEAWAY_ALLOWED_ORIGIN", default_value = "http://www.malaysia-ikea.com")]
    pub allowed_origin: String,

    #[arg(long, env = "GIVEAWAY_MAX_ENTRIES", default_value_t = MAX_ENTRIES)]
    pub max_entries: i64,

    #[arg(long, env = "GIVEAWAY_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Database executor threads, the connection pool gets the same size
    #[arg(long, env = "GIVEAWAY_DB_WORKERS", default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub db_workers: u32,

    /// Also serve HTTPS next to plain HTTP
    #[arg(long, env = "GIVEAWAY_TLS")]
    pub tls: bool,

    #[arg(long, env = "GIVEAWAY_TLS_PORT", default_value_t = 443)]
    pub tls_port: u16,

    #[arg(long, env = "GIVEAWAY_TLS_CERT", default_value = "/etc/giveaway/tls/cert.pem")]
    pub tls_cert: PathBuf,

    #[arg(long, env = "GIVEAWAY_TLS_KEY", default_value = "/etc/giveaway/tls/key.pem")]
    pub tls_key: PathBuf
}

impl Config {
    pub fn listen_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn tls_address(&self) -> String {
        format!("0.0.0.0:{}", self.tls_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = Config::try_parse_from([
            "giveaway-signup",
            "--port", "9090",
            "--datasource", "/tmp/entries.db",
            "--strictness", "lenient",
            "--response-style", "redirect",
            "--max-entries", "10",
            "--db-workers", "2",
            "--tls",
            "--tls-port", "8443",
        ]).unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.listen_address(), "0.0.0.0:9090");
        assert_eq!(config.datasource, "/tmp/entries.db");
        assert_eq!(config.strictness, Strictness::Lenient);
        assert_eq!(config.response_style, ResponseStyle::Redirect);
        assert_eq!(config.max_entries, 10);
        assert_eq!(config.db_workers, 2);
        assert!(config.tls);
        assert_eq!(config.tls_address(), "0.0.0.0:8443");
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::try_parse_from(["giveaway-signup", "--strictness", "loose"]).is_err());
        assert!(Config::try_parse_from(["giveaway-signup", "--response-style", "json"]).is_err());
        assert!(Config::try_parse_from(["giveaway-signup", "--db-workers", "0"]).is_err());
    }
}
