//! Application state shared by every HTTP worker.

use crate::{
    config::{AppConfig, MetricsConfig, SecurityHeadersConfig},
    error::StartupError,
    services::{AppMetrics, ClockProxy, LandingPage},
};

/// Everything a worker needs, built once at startup and cloned per worker.
///
/// All members are read-only; the metrics collectors share one registry
/// across clones.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub metrics_config: MetricsConfig,
    pub security: SecurityHeadersConfig,
    pub metrics: AppMetrics,
    pub proxy: ClockProxy,
    pub landing: LandingPage,
}

impl AppState {
    /// Build the state for `config` with default metrics and security settings
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        Self::with_settings(config, MetricsConfig::default(), SecurityHeadersConfig::default())
    }

    /// Build the state for `config`, reading the remaining settings from the environment
    pub fn from_env(config: AppConfig) -> Result<Self, StartupError> {
        Self::with_settings(config, MetricsConfig::from_env(), SecurityHeadersConfig::from_env())
    }

    pub fn with_settings(
        config: AppConfig,
        metrics_config: MetricsConfig,
        security: SecurityHeadersConfig,
    ) -> Result<Self, StartupError> {
        let metrics = AppMetrics::new()?;
        let proxy = ClockProxy::new(config.gas_webapp_url.clone(), Some(metrics.clone()))?;
        let landing = LandingPage::render(&config);

        Ok(Self {
            config,
            metrics_config,
            security,
            metrics,
            proxy,
            landing,
        })
    }
}
