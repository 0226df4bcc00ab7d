use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Server configuration.
///
/// Values are read from the HOST and PORT environment variables. A
/// variable that is unset or does not parse falls back to the default
/// (0.0.0.0:8080).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = lookup("HOST")
            .and_then(|s| s.parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);
        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_host_and_port() {
        let config = Config::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "9999")]));
        assert_eq!(config.addr().to_string(), "127.0.0.1:9999");
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("HOST", "localhost"), ("PORT", "http")]));
        assert_eq!(config, Config::default());
    }
}
