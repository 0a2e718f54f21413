use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{PositionCategory, Season};
use crate::errors::{SppError, SppResult};

const CONFIG_PATH_ENV: &str = "SPP_CONFIG_PATH";
const ADMIN_TOKEN_ENV: &str = "SPP_ADMIN_TOKEN";
const DATABASE_PATH_ENV: &str = "DATABASE_PATH";
const DEFAULT_DATABASE_PATH: &str = "spp_ranking.db";

/// SQLite file named by `DATABASE_PATH`, falling back to the working directory
pub fn database_path() -> String {
    std::env::var(DATABASE_PATH_ENV).unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string())
}

/// Points awarded per event for one position category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventWeights {
    pub goal: f64,
    pub assist: f64,
}

impl EventWeights {
    pub const fn new(goal: f64, assist: f64) -> Self {
        Self { goal, assist }
    }
}

/// Per-position weighting table and card deductions.
///
/// Goalkeeper and defender values are placeholders awaiting product input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringSettings {
    pub goalkeeper: EventWeights,
    pub defender: EventWeights,
    pub midfielder: EventWeights,
    pub attacker: EventWeights,
    pub yellow_card: f64,
    pub red_card: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            goalkeeper: EventWeights::new(15.0, 8.0),
            defender: EventWeights::new(12.0, 6.0),
            midfielder: EventWeights::new(8.0, 6.0),
            attacker: EventWeights::new(6.0, 4.0),
            yellow_card: 1.0,
            red_card: 5.0,
        }
    }
}

impl ScoringSettings {
    pub fn weights_for(&self, category: PositionCategory) -> EventWeights {
        match category {
            PositionCategory::Goalkeeper => self.goalkeeper,
            PositionCategory::Defender => self.defender,
            PositionCategory::Midfielder => self.midfielder,
            PositionCategory::Attacker => self.attacker,
        }
    }

    pub fn validate(&self) -> SppResult<()> {
        for category in PositionCategory::ALL {
            let weights = self.weights_for(category);
            check_weight(&format!("{category}.goal"), weights.goal)?;
            check_weight(&format!("{category}.assist"), weights.assist)?;
        }
        check_weight("yellow_card", self.yellow_card)?;
        check_weight("red_card", self.red_card)?;
        self.check_distinct_categories()
    }

    fn check_distinct_categories(&self) -> SppResult<()> {
        for (idx, first) in PositionCategory::ALL.iter().enumerate() {
            for second in &PositionCategory::ALL[idx + 1..] {
                if self.weights_for(*first) == self.weights_for(*second) {
                    return Err(SppError::InvalidConfig(format!(
                        "{first} and {second} share identical weights"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn check_weight(name: &str, value: f64) -> SppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SppError::InvalidConfig(format!(
            "weight `{name}` must be finite and non-negative (got {value})"
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    pub default_season: Season,
    /// Seasons recomputed when the server starts
    pub warm_seasons: Vec<Season>,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub overview_top_players: usize,
    #[serde(skip)]
    pub admin_token: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            default_season: 2023,
            warm_seasons: vec![2023],
            default_page_size: 100,
            max_page_size: 1000,
            overview_top_players: 10,
            admin_token: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by the JSON file named in `SPP_CONFIG_PATH` when set
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::new(),
        };
        config.server.admin_token = std::env::var(ADMIN_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty());
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse config JSON")?;
        config.scoring.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_is_valid() {
        assert!(ScoringSettings::default().validate().is_ok());
    }

    #[test]
    fn test_default_categories_have_distinct_incentives() {
        let settings = ScoringSettings::default();
        assert!(settings.weights_for(PositionCategory::Defender).goal
            > settings.weights_for(PositionCategory::Attacker).goal);
        assert_ne!(
            settings.weights_for(PositionCategory::Midfielder),
            settings.weights_for(PositionCategory::Attacker)
        );
    }

    #[test]
    fn test_identical_category_weights_rejected() {
        let settings = ScoringSettings {
            midfielder: EventWeights::new(6.0, 4.0),
            ..ScoringSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, SppError::InvalidConfig(msg) if msg.contains("Midfielder and Attacker")));
    }

    #[test]
    fn test_negative_card_weight_rejected() {
        let settings = ScoringSettings {
            red_card: -5.0,
            ..ScoringSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let settings = ScoringSettings {
            attacker: EventWeights::new(f64::NAN, 4.0),
            ..ScoringSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "scoring": { "attacker": { "goal": 9.5, "assist": 4.75 } }, "server": { "default_season": 2024 } }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.scoring.attacker, EventWeights::new(9.5, 4.75));
        assert_eq!(config.scoring.defender, EventWeights::new(12.0, 6.0));
        assert_eq!(config.server.default_season, 2024);
        assert_eq!(config.server.max_page_size, 1000);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(AppConfig::from_json(r#"{ "scoring": { "clean_sheet": 4.0 } }"#).is_err());
    }

    #[test]
    fn test_invalid_weights_in_json_rejected() {
        let json = r#"{ "scoring": { "yellow_card": -1.0 } }"#;
        assert!(AppConfig::from_json(json).is_err());
    }
}
