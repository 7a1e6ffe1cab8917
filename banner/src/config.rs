//! Refresh behavior knobs, fixed at the values the homepage has always used.

/// Path served by RaspAP when its wifi-info API is installed.
pub const CREDENTIALS_ENDPOINT: &str = "/api/system/wifi-info";

/// First element whose class attribute contains `page` hosts the banner.
pub const PAGE_CONTAINER_SELECTOR: &str = "[class*=\"page\"]";

/// Five minutes between credential refreshes.
pub const REFRESH_PERIOD_MS: u32 = 300_000;

/// Where the banner goes and how often it refreshes.
///
/// Not user-facing configuration; the struct exists so tests can point the
/// fetcher and renderer somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshConfig {
    pub endpoint: String,
    pub container_selector: String,
    pub period_ms: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            endpoint: CREDENTIALS_ENDPOINT.to_string(),
            container_selector: PAGE_CONTAINER_SELECTOR.to_string(),
            period_ms: REFRESH_PERIOD_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_homepage_values() {
        let config = RefreshConfig::default();
        assert_eq!(config.endpoint, "/api/system/wifi-info");
        assert_eq!(config.container_selector, r#"[class*="page"]"#);
        assert_eq!(config.period_ms, 300_000);
    }
}
