/// Process-level settings for the storefront driver, read from `FOODIE_*`
/// environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Root under which named shops publish `<shop>/configuration.json`.
    pub config_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    /// Period of the opening-hours re-check while watching a shop.
    pub availability_interval_secs: u64,
}
