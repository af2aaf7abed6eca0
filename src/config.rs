use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`. Call `dotenvy::dotenv()` first
    /// if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Self {
            host,
            port,
            static_dir,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Address tried when the configured port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port.saturating_add(1)).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/static"),
        ]));
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(cfg.fallback_addr().unwrap().to_string(), "0.0.0.0:8081");
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(cfg.port, DEFAULT_PORT);
    }
}
