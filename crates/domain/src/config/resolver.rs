use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Fixed nameserver IP; when unset the first entry of `resolv_conf` is used.
    #[serde(default)]
    pub nameserver: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameserver: None,
            port: default_port(),
            resolv_conf: default_resolv_conf(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    53
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}
