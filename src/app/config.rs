//! Typed application settings.
//!
//! Settings are loaded from an optional YAML file layered under environment
//! variables (`NEXUS__SECTION__KEY`). Every field carries a default so a bare
//! environment still boots: the identity provider falls back to a placeholder
//! endpoint, which means missing configuration surfaces as a connectivity
//! error on the first outbound call instead of a startup crash.

use config::{Config as RawConfig, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load or parse configuration")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    pub tools: ToolSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub address: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupabaseSettings {
    /// Base URL of the Supabase project (GoTrue and PostgREST live under it).
    pub url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub anon_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub catalog_url: String,
    pub business_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8080".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for SupabaseSettings {
    fn default() -> Self {
        Self {
            url: "https://placeholder.supabase.co".to_string(),
            anon_key: "placeholder-key".to_string(),
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            catalog_url: "https://catalogo.4millones.com/".to_string(),
            business_url: "https://oportunidad.4millones.com/".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `path` (if present) with `NEXUS__*` environment
    /// variables taking precedence.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let raw = RawConfig::builder()
            .add_source(File::new(path, FileFormat::Yaml).required(false))
            .add_source(Environment::with_prefix("NEXUS").separator("__"))
            .build()?;

        Ok(raw.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_placeholder_endpoint() {
        let settings = Settings::load("does/not/exist.yaml").expect("defaults should load");

        assert_eq!(settings.supabase.url, "https://placeholder.supabase.co");
        assert_eq!(settings.supabase.anon_key, "placeholder-key");
        assert_eq!(settings.server.address, "0.0.0.0:8080");
    }

    #[test]
    fn tool_urls_default_to_portal_destinations() {
        let settings = Settings::default();

        assert_eq!(settings.tools.catalog_url, "https://catalogo.4millones.com/");
        assert_eq!(settings.tools.business_url, "https://oportunidad.4millones.com/");
    }
}
