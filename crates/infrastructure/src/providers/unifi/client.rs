use super::models::{ApiResponse, UnifiDevice, UnifiNetwork, UnifiStation};
use async_trait::async_trait;
use home_dns_domain::config::InventoryConfig;
use home_dns_domain::{ConfigError, DomainError};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Path prefix UniFi OS consoles put in front of the network application API.
const UNIFI_OS_PREFIX: &str = "/proxy/network";

/// Read access to the controller's inventory.
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn clients(&self) -> Result<Vec<UnifiStation>, DomainError>;

    async fn networks(&self) -> Result<Vec<UnifiNetwork>, DomainError>;

    async fn devices(&self) -> Result<Vec<UnifiDevice>, DomainError>;
}

/// UniFi controller API client with a cookie-based session.
///
/// Logs in on first use; every later request reuses the session cookie.
pub struct UnifiClient {
    http: reqwest::Client,
    base_url: String,
    site: String,
    unifi_os: bool,
    username: String,
    password: String,
    logged_in: Mutex<bool>,
}

impl UnifiClient {
    pub fn new(config: &InventoryConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(config.insecure)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.hostname.trim_end_matches('/').to_string(),
            site: config.site.clone(),
            unifi_os: config.unifi_os,
            username: config.username.clone(),
            password: config.password.clone(),
            logged_in: Mutex::new(false),
        })
    }

    fn login_url(&self) -> String {
        if self.unifi_os {
            format!("{}/api/auth/login", self.base_url)
        } else {
            format!("{}/api/login", self.base_url)
        }
    }

    fn site_url(&self, path: &str) -> String {
        let prefix = if self.unifi_os { UNIFI_OS_PREFIX } else { "" };
        format!("{}{}/api/s/{}/{}", self.base_url, prefix, self.site, path)
    }

    fn failed(reason: impl std::fmt::Display) -> DomainError {
        DomainError::ProviderFailed {
            provider: "unifi".to_string(),
            reason: reason.to_string(),
        }
    }

    async fn ensure_session(&self) -> Result<(), DomainError> {
        let mut logged_in = self.logged_in.lock().await;
        if *logged_in {
            return Ok(());
        }

        let url = self.login_url();
        debug!(%url, username = %self.username, "Logging in to UniFi controller");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "username": self.username,
                "password": self.password,
            }))
            .send()
            .await
            .map_err(|e| Self::failed(format!("login request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::failed(format!("login rejected: HTTP {}", response.status())));
        }

        info!(controller = %self.base_url, site = %self.site, "Logged in to UniFi controller");
        *logged_in = true;
        Ok(())
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, DomainError> {
        self.ensure_session().await?;

        let url = self.site_url(path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::failed(format!("GET {} failed: {}", path, e)))?;

        if !response.status().is_success() {
            return Err(Self::failed(format!("GET {}: HTTP {}", path, response.status())));
        }

        let reply: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| Self::failed(format!("GET {}: invalid body: {}", path, e)))?;

        if let Some(meta) = reply.meta.as_ref().filter(|m| !m.is_ok()) {
            return Err(Self::failed(format!(
                "GET {}: controller returned rc={} {}",
                path,
                meta.rc,
                meta.msg.as_deref().unwrap_or_default()
            )));
        }

        debug!(path, entries = reply.data.len(), "UniFi inventory fetched");
        Ok(reply.data)
    }
}

#[async_trait]
impl InventorySource for UnifiClient {
    async fn clients(&self) -> Result<Vec<UnifiStation>, DomainError> {
        self.fetch("stat/sta").await
    }

    async fn networks(&self) -> Result<Vec<UnifiNetwork>, DomainError> {
        self.fetch("rest/networkconf").await
    }

    async fn devices(&self) -> Result<Vec<UnifiDevice>, DomainError> {
        self.fetch("stat/device").await
    }
}
