//! Shared server state

use std::sync::Arc;
use std::time::{Duration, Instant};

use shared::error::AppResult;
use shared::models::PortalSettings;
use tokio::sync::RwLock;

use super::config::Config;
use crate::store::StoreClient;

/// How long fetched settings stay fresh
const SETTINGS_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy)]
struct CachedSettings {
    value: PortalSettings,
    fetched_at: Instant,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: StoreClient,
    settings: Arc<RwLock<Option<CachedSettings>>>,
}

impl ServerState {
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let store = StoreClient::new(config)?;
        Ok(Self {
            config: Arc::new(config.clone()),
            store,
            settings: Arc::new(RwLock::new(None)),
        })
    }

    /// Portal settings, cached with a short TTL
    ///
    /// The store owns the tax rate; when it is unreachable we degrade to the
    /// configured default rather than failing every price computation.
    pub async fn settings(&self) -> PortalSettings {
        {
            let cached = self.settings.read().await;
            if let Some(entry) = *cached
                && entry.fetched_at.elapsed() < SETTINGS_TTL
            {
                return entry.value;
            }
        }

        match self.store.get_settings().await {
            Ok(value) => {
                let mut cached = self.settings.write().await;
                *cached = Some(CachedSettings {
                    value,
                    fetched_at: Instant::now(),
                });
                value
            }
            Err(e) => {
                tracing::warn!("settings fetch failed, using default tax rate: {}", e);
                PortalSettings {
                    ppn: self.config.default_ppn,
                }
            }
        }
    }
}
