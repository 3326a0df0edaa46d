use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug)]
pub struct Config {
    // Listen address
    pub listen_addr: SocketAddr,

    // log level for http tracing
    pub log_level: tracing::Level,
}

impl Config {
    pub fn new(listen_addr: SocketAddr, log_level: tracing::Level) -> Self {
        Self {
            listen_addr,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from_str("127.0.0.1:3000").unwrap(),
            log_level: tracing::Level::INFO,
        }
    }
}
