use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::{api::ClientSettings, state::host::HostContext};

pub const DEFAULT_LIST_TITLE: &str = "LeaveRequests";

/// Settings the host page hands to the web part, either through
/// `window.__LEAVE_REQUEST_ENV` (env.js) or `./config.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "SITE_URL")]
    pub site_url: Option<String>,
    #[serde(default, alias = "LIST_TITLE")]
    pub list_title: Option<String>,
    #[serde(default, alias = "USER_EMAIL")]
    pub user_email: Option<String>,
    #[serde(default, alias = "USER_DISPLAY_NAME")]
    pub user_display_name: Option<String>,
    #[serde(default, alias = "IS_DARK_THEME")]
    pub is_dark_theme: Option<bool>,
    #[serde(default, alias = "ACCESS_TOKEN")]
    pub access_token: Option<String>,
    #[serde(default, alias = "REQUEST_DIGEST")]
    pub request_digest: Option<String>,
}

impl RuntimeConfig {
    /// Fills every key missing here from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            site_url: non_blank(self.site_url).or(non_blank(fallback.site_url)),
            list_title: non_blank(self.list_title).or(non_blank(fallback.list_title)),
            user_email: non_blank(self.user_email).or(non_blank(fallback.user_email)),
            user_display_name: non_blank(self.user_display_name)
                .or(non_blank(fallback.user_display_name)),
            is_dark_theme: self.is_dark_theme.or(fallback.is_dark_theme),
            access_token: non_blank(self.access_token).or(non_blank(fallback.access_token)),
            request_digest: non_blank(self.request_digest).or(non_blank(fallback.request_digest)),
        }
    }

    pub fn site_url(&self) -> String {
        self.site_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default()
    }

    pub fn list_title(&self) -> String {
        self.list_title
            .clone()
            .unwrap_or_else(|| DEFAULT_LIST_TITLE.to_string())
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            site_url: self.site_url(),
            access_token: self.access_token.clone(),
            request_digest: self.request_digest.clone(),
        }
    }

    pub fn host_context(&self) -> HostContext {
        HostContext {
            user_email: self
                .user_email
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            user_display_name: self.user_display_name.clone(),
            is_dark_theme: self.is_dark_theme.unwrap_or(false),
            list_title: self.list_title(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn window() -> anyhow::Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow!("no global `window` exists"))
}

fn get_from_env_js() -> Option<RuntimeConfig> {
    // Expect optional global object: window.__LEAVE_REQUEST_ENV = { USER_EMAIL: "...", ... }
    let w = window().ok()?;
    let any = js_sys::Reflect::get(&w, &"__LEAVE_REQUEST_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let raw = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    match serde_json::from_str(&raw) {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed __LEAVE_REQUEST_ENV: {}", err);
            None
        }
    }
}

fn page_origin() -> Option<String> {
    window().ok()?.location().origin().ok()
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let href = window()?
        .location()
        .href()
        .map_err(|_| anyhow!("page location unavailable"))?;
    let url = web_sys::Url::new_with_base("config.json", &href)
        .map_err(|_| anyhow!("cannot resolve config.json against {}", href))?
        .href();
    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("fetching {}", url))?;
    if !resp.status().is_success() {
        return Err(anyhow!("{} answered {}", url, resp.status()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("parsing config.json")
}

fn defaults() -> RuntimeConfig {
    RuntimeConfig {
        site_url: page_origin(),
        list_title: Some(DEFAULT_LIST_TITLE.to_string()),
        ..RuntimeConfig::default()
    }
}

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg.clone());
    cfg
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(existing) = get_from_env_js() {
        return cache(existing.or(defaults()));
    }
    match fetch_runtime_config().await {
        Ok(cfg) => cache(cfg.or(defaults())),
        Err(err) => {
            log::debug!("No runtime config file: {:#}", err);
            cache(defaults())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_accept_both_spellings() {
        let upper: RuntimeConfig = serde_json::from_str(
            r#"{"USER_EMAIL":"alice@example.com","LIST_TITLE":"Leave","IS_DARK_THEME":true}"#,
        )
        .unwrap();
        let lower: RuntimeConfig = serde_json::from_str(
            r#"{"user_email":"alice@example.com","list_title":"Leave","is_dark_theme":true}"#,
        )
        .unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.user_email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn or_keeps_own_values_and_fills_gaps() {
        let primary = RuntimeConfig {
            user_email: Some("alice@example.com".into()),
            list_title: Some("  ".into()),
            ..RuntimeConfig::default()
        };
        let fallback = RuntimeConfig {
            user_email: Some("other@example.com".into()),
            list_title: Some("LeaveRequests".into()),
            site_url: Some("https://tenant.example.com/sites/hr".into()),
            ..RuntimeConfig::default()
        };
        let merged = primary.or(fallback);
        assert_eq!(merged.user_email.as_deref(), Some("alice@example.com"));
        assert_eq!(merged.list_title.as_deref(), Some("LeaveRequests"));
        assert_eq!(
            merged.site_url.as_deref(),
            Some("https://tenant.example.com/sites/hr")
        );
    }

    #[test]
    fn derived_settings_normalise_values() {
        let cfg = RuntimeConfig {
            site_url: Some("https://tenant.example.com/sites/hr/".into()),
            user_email: Some(" alice@example.com ".into()),
            access_token: Some("t".into()),
            ..RuntimeConfig::default()
        };
        assert_eq!(
            cfg.client_settings().site_url,
            "https://tenant.example.com/sites/hr"
        );
        let host = cfg.host_context();
        assert_eq!(host.user_email, "alice@example.com");
        assert_eq!(host.list_title, DEFAULT_LIST_TITLE);
        assert!(!host.is_dark_theme);
    }
}
