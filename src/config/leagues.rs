use crate::domain::{League, LeagueId};

/// Static reference entry for a monitored competition
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    pub id: LeagueId,
    pub name: &'static str,
    pub country: &'static str,
    pub continent: &'static str,
    pub multiplier: f64,
}

impl LeagueConfig {
    pub fn new(
        id: LeagueId,
        name: &'static str,
        country: &'static str,
        continent: &'static str,
        multiplier: f64,
    ) -> Self {
        Self {
            id,
            name,
            country,
            continent,
            multiplier,
        }
    }

    pub fn to_league(&self) -> League {
        League {
            id: self.id,
            name: self.name.to_string(),
            country: self.country.to_string(),
            continent: self.continent.to_string(),
            multiplier: self.multiplier,
        }
    }
}

/// Leagues seeded at setup, keyed by their API-Football ids
pub fn get_reference_leagues() -> Vec<LeagueConfig> {
    vec![
        LeagueConfig::new(39, "Premier League", "England", "Europe", 1.0),
        LeagueConfig::new(140, "La Liga", "Spain", "Europe", 0.95),
        LeagueConfig::new(135, "Serie A", "Italy", "Europe", 0.9),
        LeagueConfig::new(78, "Bundesliga", "Germany", "Europe", 0.85),
        LeagueConfig::new(61, "Ligue 1", "France", "Europe", 0.8),
        LeagueConfig::new(71, "Brasileirão", "Brazil", "South America", 0.8),
        LeagueConfig::new(2, "Champions League", "World", "Europe", 2.0),
        LeagueConfig::new(3, "Europa League", "World", "Europe", 1.5),
        LeagueConfig::new(13, "Copa Libertadores", "South America", "South America", 1.8),
    ]
}
