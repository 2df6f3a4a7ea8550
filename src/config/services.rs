//! WebArena service ports and derived URLs.

use serde::Serialize;

use super::env::EnvSource;

/// Default ports for the single-host WebArena deployment.
const DEFAULT_SHOPPING_PORT: u16 = 9082;
const DEFAULT_SHOPPING_ADMIN_PORT: u16 = 9083;
const DEFAULT_REDDIT_PORT: u16 = 9084;
const DEFAULT_GITLAB_PORT: u16 = 9085;
const DEFAULT_WIKIPEDIA_PORT: u16 = 9086;
const DEFAULT_MAP_PORT: u16 = 9087;
const DEFAULT_HOMEPAGE_PORT: u16 = 9088;
const DEFAULT_RESET_PORT: u16 = 9089;

/// Fixed path suffixes appended to selected service URLs.
const SHOPPING_ADMIN_PATH: &str = "/admin";
const WIKIPEDIA_PATH: &str = "/wikipedia_en_all_maxi_2022-05/A/User:The_other_Kiwix_guy/Landing";
const RESET_PATH: &str = "/reset";

/// Per-service ports, each independently overridable via `WA_*_PORT`.
#[derive(Debug, Clone, Serialize)]
pub struct ServicePorts {
    pub shopping: u16,
    pub shopping_admin: u16,
    pub reddit: u16,
    pub gitlab: u16,
    pub wikipedia: u16,
    pub map: u16,
    pub homepage: u16,
    pub reset: u16,
}

impl Default for ServicePorts {
    fn default() -> Self {
        Self {
            shopping: DEFAULT_SHOPPING_PORT,
            shopping_admin: DEFAULT_SHOPPING_ADMIN_PORT,
            reddit: DEFAULT_REDDIT_PORT,
            gitlab: DEFAULT_GITLAB_PORT,
            wikipedia: DEFAULT_WIKIPEDIA_PORT,
            map: DEFAULT_MAP_PORT,
            homepage: DEFAULT_HOMEPAGE_PORT,
            reset: DEFAULT_RESET_PORT,
        }
    }
}

impl ServicePorts {
    /// Applies port overrides from the given environment source.
    /// Malformed values are logged and replaced by the defaults.
    pub fn from_env(env: &EnvSource) -> Self {
        Self {
            shopping: env.parsed_or("WA_SHOPPING_PORT", DEFAULT_SHOPPING_PORT),
            shopping_admin: env.parsed_or("WA_SHOPPING_ADMIN_PORT", DEFAULT_SHOPPING_ADMIN_PORT),
            reddit: env.parsed_or("WA_REDDIT_PORT", DEFAULT_REDDIT_PORT),
            gitlab: env.parsed_or("WA_GITLAB_PORT", DEFAULT_GITLAB_PORT),
            wikipedia: env.parsed_or("WA_WIKIPEDIA_PORT", DEFAULT_WIKIPEDIA_PORT),
            map: env.parsed_or("WA_MAP_PORT", DEFAULT_MAP_PORT),
            homepage: env.parsed_or("WA_HOMEPAGE_PORT", DEFAULT_HOMEPAGE_PORT),
            reset: env.parsed_or("WA_RESET_PORT", DEFAULT_RESET_PORT),
        }
    }
}

/// Fully qualified service URLs exported to the evaluation harness.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceUrls {
    pub shopping: String,
    pub shopping_admin: String,
    pub reddit: String,
    pub gitlab: String,
    pub wikipedia: String,
    pub map: String,
    pub homepage: String,
    pub full_reset: String,
}

impl ServiceUrls {
    /// Builds every service URL as `http://<host>:<port><path>`.
    pub fn build(host: &str, ports: &ServicePorts) -> Self {
        let url = |port: u16, path: &str| format!("http://{host}:{port}{path}");
        Self {
            shopping: url(ports.shopping, ""),
            shopping_admin: url(ports.shopping_admin, SHOPPING_ADMIN_PATH),
            reddit: url(ports.reddit, ""),
            gitlab: url(ports.gitlab, ""),
            wikipedia: url(ports.wikipedia, WIKIPEDIA_PATH),
            map: url(ports.map, ""),
            homepage: url(ports.homepage, ""),
            full_reset: url(ports.reset, RESET_PATH),
        }
    }

    /// Environment pairs consumed by the harness.
    pub fn exports(&self) -> Vec<(String, String)> {
        vec![
            ("WA_SHOPPING".to_string(), self.shopping.clone()),
            ("WA_SHOPPING_ADMIN".to_string(), self.shopping_admin.clone()),
            ("WA_REDDIT".to_string(), self.reddit.clone()),
            ("WA_GITLAB".to_string(), self.gitlab.clone()),
            ("WA_WIKIPEDIA".to_string(), self.wikipedia.clone()),
            ("WA_MAP".to_string(), self.map.clone()),
            ("WA_HOMEPAGE".to_string(), self.homepage.clone()),
            ("WA_FULL_RESET".to_string(), self.full_reset.clone()),
        ]
    }
}
