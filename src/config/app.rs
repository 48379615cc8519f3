//! Process configuration for the clock proxy.

use std::env;

pub const DEFAULT_SHOP_NAME: &str = "H.R燈藝";
pub const DEFAULT_GEOFENCE_METERS: u32 = 50;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Immutable configuration read once at startup and shared by every worker.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Apps Script web app URL that receives clock events. Empty disables `/api/clock`.
    pub gas_webapp_url: String,
    /// LIFF client id embedded in the landing page
    pub liff_id: String,
    /// Display name shown on the landing page
    pub shop_name: String,
    /// Geofence radius shown on the landing page; enforcement happens downstream
    pub geofence_meters: u32,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gas_webapp_url: String::new(),
            liff_id: String::new(),
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            geofence_meters: DEFAULT_GEOFENCE_METERS,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let gas_webapp_url = trimmed_var("GAS_WEBAPP_URL").unwrap_or_default();
        let liff_id = trimmed_var("LIFF_ID").unwrap_or_default();

        let shop_name = trimmed_var("SHOP_NAME")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SHOP_NAME.to_string());

        let geofence_meters = trimmed_var("GEOFENCE_METERS")
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse().unwrap_or_else(|_| {
                    tracing::warn!(value = %v, "GEOFENCE_METERS is not a valid integer, using default");
                    DEFAULT_GEOFENCE_METERS
                })
            })
            .unwrap_or(DEFAULT_GEOFENCE_METERS);

        let host = trimmed_var("HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            gas_webapp_url,
            liff_id,
            shop_name,
            geofence_meters,
            host,
            port,
        }
    }

    /// Whether a downstream URL is configured
    pub fn has_gas_url(&self) -> bool {
        !self.gas_webapp_url.is_empty()
    }

    /// Human-readable warnings about missing settings, logged once at startup
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if !self.has_gas_url() {
            warnings.push("GAS_WEBAPP_URL is not set; every clock request will fail with NO_GAS_URL");
        }
        if self.liff_id.is_empty() {
            warnings.push("LIFF_ID is not set; the landing page cannot initialize LIFF");
        }
        warnings
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn trimmed_var(key: &str) -> Option<String> {
    env::var(key).ok().map(|v| v.trim().to_string())
}
