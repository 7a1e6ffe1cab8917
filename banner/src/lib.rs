//! DOM-free core of the Prepper Pi homepage WiFi banner.
//!
//! Everything here compiles and tests on the host: the display state, the
//! update rule applied to fetched credentials, the banner markup, and the
//! refresh configuration. The browser glue lives in `prepper-web`.

mod config;
mod credentials;
mod error;
pub mod markup;
mod state;

pub use config::CREDENTIALS_ENDPOINT;
pub use config::PAGE_CONTAINER_SELECTOR;
pub use config::REFRESH_PERIOD_MS;
pub use config::RefreshConfig;
pub use credentials::CredentialsResponse;
pub use error::BannerError;
pub use state::BannerState;
pub use state::DEFAULT_PASSWORD;
pub use state::DEFAULT_SSID;
