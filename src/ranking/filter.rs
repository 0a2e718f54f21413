use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{LeagueId, PositionCategory, Season};
use crate::errors::{SppError, SppResult};
use crate::snapshot::ScoredPlayer;

/// Loosely typed filter parameters as they arrive from a query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub season: Option<String>,
    pub position: Option<String>,
    #[serde(alias = "league_id", alias = "leagueId")]
    pub league: Option<String>,
    pub continent: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
    #[serde(alias = "page_size")]
    pub page_size: Option<String>,
}

/// Validated ranking filter; `None` on a dimension matches everything
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingFilter {
    pub season: Season,
    pub position: Option<PositionCategory>,
    pub league: Option<LeagueId>,
    pub continent: Option<String>,
    pub search: Option<String>,
}

impl RankingFilter {
    pub fn for_season(season: Season) -> Self {
        Self {
            season,
            position: None,
            league: None,
            continent: None,
            search: None,
        }
    }

    pub fn with_position(mut self, position: PositionCategory) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_league(mut self, league: LeagueId) -> Self {
        self.league = Some(league);
        self
    }

    pub fn with_continent(mut self, continent: &str) -> Self {
        self.continent = normalize_text(Some(continent));
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = normalize_text(Some(search));
        self
    }

    pub fn is_identity(&self) -> bool {
        self.position.is_none()
            && self.league.is_none()
            && self.continent.is_none()
            && self.search.is_none()
    }

    pub fn matches(&self, scored: &ScoredPlayer) -> bool {
        scored.season == self.season
            && self.position.is_none_or(|p| scored.position == p)
            && self.league.is_none_or(|id| scored.league.id == id)
            && self
                .continent
                .as_deref()
                .is_none_or(|c| scored.league.continent.eq_ignore_ascii_case(c))
            && self
                .search
                .as_deref()
                .is_none_or(|needle| matches_search(scored, needle))
    }
}

fn matches_search(scored: &ScoredPlayer, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    scored.player.name.to_lowercase().contains(&needle)
        || scored.team.name.to_lowercase().contains(&needle)
}

impl FilterParams {
    /// Validates every dimension once, before any ranking data is touched
    pub fn to_filter(&self, default_season: Season) -> SppResult<RankingFilter> {
        let season = parse_number::<Season>("season", &self.season)?.unwrap_or(default_season);
        if season <= 0 {
            return Err(SppError::InvalidFilter(format!(
                "season must be positive (got {season})"
            )));
        }

        let position = match normalize_text(self.position.as_deref()) {
            Some(name) => Some(PositionCategory::from_name(&name).ok_or_else(|| {
                SppError::InvalidFilter(format!(
                    "unknown position `{name}` (expected Goalkeeper, Defender, Midfielder or Attacker)"
                ))
            })?),
            None => None,
        };

        Ok(RankingFilter {
            season,
            position,
            league: parse_number::<LeagueId>("league", &self.league)?,
            continent: normalize_text(self.continent.as_deref()),
            search: normalize_text(self.search.as_deref()),
        })
    }
}

fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn parse_number<T: FromStr>(field: &str, value: &Option<String>) -> SppResult<Option<T>> {
    match normalize_text(value.as_deref()) {
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            SppError::InvalidFilter(format!("`{field}` must be a number (got `{raw}`)"))
        }),
        None => Ok(None),
    }
}
