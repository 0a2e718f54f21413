use anyhow::Result;
use std::sync::{PoisonError, RwLock};

use crate::domain::{League, LeagueId, Season, SeasonRecord};

use super::StatisticsSource;

/// In-process statistics source, for embedding callers and tests
#[derive(Debug, Default)]
pub struct MemoryStatisticsSource {
    leagues: RwLock<Vec<League>>,
    records: RwLock<Vec<SeasonRecord>>,
}

impl MemoryStatisticsSource {
    pub fn new(leagues: Vec<League>, records: Vec<SeasonRecord>) -> Self {
        Self {
            leagues: RwLock::new(leagues),
            records: RwLock::new(records),
        }
    }

    pub fn insert_record(&self, record: SeasonRecord) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Applies `update` to every stored record in place
    pub fn update_records<F>(&self, mut update: F)
    where
        F: FnMut(&mut SeasonRecord),
    {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.iter_mut().for_each(|r| update(r));
    }
}

impl StatisticsSource for MemoryStatisticsSource {
    fn leagues(&self) -> Result<Vec<League>> {
        Ok(self
            .leagues
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn season_records(&self, season: Season) -> Result<Vec<SeasonRecord>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.iter().filter(|r| r.season == season).cloned().collect())
    }

    fn update_league_multiplier(&self, league_id: LeagueId, multiplier: f64) -> Result<bool> {
        let mut leagues = self.leagues.write().unwrap_or_else(PoisonError::into_inner);
        match leagues.iter_mut().find(|l| l.id == league_id) {
            Some(league) => {
                league.multiplier = multiplier;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
