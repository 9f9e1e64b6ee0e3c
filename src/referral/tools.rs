//! The two shareable tool destinations and their messaging.

use crate::app::config::ToolSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Catalog,
    Business,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::Catalog, Tool::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Catalog => "catalog",
            Tool::Business => "business",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Catalog => "Catálogo Digital",
            Tool::Business => "Oportunidad de Negocio",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::Catalog => "Comparte nuestro catálogo completo",
            Tool::Business => "Invita a conocer la oportunidad",
        }
    }

    /// Campaign message for a deliberate share action. The referral link is
    /// appended directly after the trailing newline.
    pub fn campaign_message(&self) -> &'static str {
        match self {
            Tool::Catalog => {
                "🌿 *Catálogo Premium Gano Excel*\n\n\
                 Experimenta productos únicos con Ganoderma Lucidum de las 6 variedades más potentes del mundo.\n\n\
                 Descubre el bienestar auténtico:\n"
            },
            Tool::Business => {
                "🏗️ *Arquitectura Empresarial 4M*\n\n\
                 El sistema que transforma el consumo diario en un activo empresarial heredable.\n\n\
                 Conoce la plataforma:\n"
            },
        }
    }

    /// Short greeting for the one-tap share button; the link follows the
    /// colon.
    pub fn quick_share_message(&self) -> String {
        format!("¡Hola! 👋 Te comparto {}: ", self.name())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catalog" => Ok(Tool::Catalog),
            "business" => Ok(Tool::Business),
            other => Err(UnknownTool(other.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct UnknownTool(pub String);

impl fmt::Display for UnknownTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tool '{}'", self.0)
    }
}

/// Externally configured base URLs for the tool destinations.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    catalog_url: String,
    business_url: String,
}

impl ToolRegistry {
    pub fn from_settings(settings: &ToolSettings) -> Self {
        Self {
            catalog_url: settings.catalog_url.clone(),
            business_url: settings.business_url.clone(),
        }
    }

    pub fn base_url(&self, tool: Tool) -> &str {
        match tool {
            Tool::Catalog => &self.catalog_url,
            Tool::Business => &self.business_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_round_trips_through_strings() {
        for tool in Tool::ALL {
            assert_eq!(tool.as_str().parse::<Tool>().expect("parses"), tool);
        }
        assert!("catalogue".parse::<Tool>().is_err());
    }

    #[test]
    fn registry_resolves_configured_urls() {
        let registry = ToolRegistry::from_settings(&ToolSettings::default());

        assert_eq!(registry.base_url(Tool::Catalog), "https://catalogo.4millones.com/");
        assert_eq!(registry.base_url(Tool::Business), "https://oportunidad.4millones.com/");
    }
}
