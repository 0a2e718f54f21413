use chrono::Utc;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering as CmpOrdering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::config::ScoringSettings;
use crate::domain::{League, LeagueId, PlayerId, Season, SeasonRecord};
use crate::errors::{InvalidStatistics, SppError, SppResult};
use crate::scoring::{calculate_breakdown, validate_multiplier};
use crate::snapshot::{RunInfo, ScoredPlayer, SeasonSnapshot, SnapshotStore};
use crate::store::StatisticsSource;

/// A player left out of a run, with the reason
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPlayer {
    pub player_id: PlayerId,
    pub player_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculationSummary {
    pub season: Season,
    pub run_id: u64,
    pub recomputed: usize,
    pub skipped_invalid: usize,
    /// Players considered, counting each player once
    pub total: usize,
    /// Extra records of players with more than one competition in the season
    pub duplicates_dropped: usize,
    pub failures: Vec<SkippedPlayer>,
}

/// Recomputes season snapshots from the statistics source.
///
/// One run per season at a time; runs for different seasons proceed in
/// parallel. Multiplier updates hold the gate exclusively, so they wait for
/// in-flight runs and keep new ones out until the write lands.
pub struct RecalculationService {
    source: Arc<dyn StatisticsSource>,
    snapshots: Arc<SnapshotStore>,
    scoring: ScoringSettings,
    season_locks: Mutex<HashMap<Season, Arc<Mutex<()>>>>,
    multiplier_gate: RwLock<()>,
    next_run_id: AtomicU64,
}

impl RecalculationService {
    pub fn new(
        source: Arc<dyn StatisticsSource>,
        snapshots: Arc<SnapshotStore>,
        scoring: ScoringSettings,
    ) -> Self {
        Self {
            source,
            snapshots,
            scoring,
            season_locks: Mutex::new(HashMap::new()),
            multiplier_gate: RwLock::new(()),
            next_run_id: AtomicU64::new(1),
        }
    }

    pub fn scoring(&self) -> &ScoringSettings {
        &self.scoring
    }

    pub fn snapshots(&self) -> &Arc<SnapshotStore> {
        &self.snapshots
    }

    pub fn run(&self, season: Season) -> SppResult<RecalculationSummary> {
        let season_lock = self.season_lock(season);
        let _writer = season_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _gate = self.multiplier_gate.read().unwrap_or_else(PoisonError::into_inner);

        let run_id = self.next_run_id.fetch_add(1, Ordering::SeqCst);
        info!("Recalculation run {} started for season {}", run_id, season);

        let leagues: HashMap<LeagueId, League> = self
            .source
            .leagues()?
            .into_iter()
            .map(|league| (league.id, league))
            .collect();
        let mut records = self.source.season_records(season)?;
        records.sort_by_key(|r| (r.player.id, r.league_id));

        let outcomes: Vec<Outcome> = records
            .into_par_iter()
            .map(|record| {
                let outcome = score_record(&record, &leagues, &self.scoring);
                (record, outcome)
            })
            .collect();

        let mut scored = Vec::new();
        let mut failures = Vec::new();
        let mut duplicates_dropped = 0;
        let mut total = 0;
        for group in outcomes.chunk_by(|a, b| a.0.player.id == b.0.player.id) {
            total += 1;
            duplicates_dropped += group.len() - 1;

            let primary = group
                .iter()
                .filter_map(|(_, outcome)| outcome.as_ref().ok())
                .max_by(|a, b| record_preference(a, b));
            match primary {
                Some(player) => scored.push(player.clone()),
                None => failures.extend(group.iter().find_map(|(record, outcome)| {
                    outcome.as_ref().err().map(|reason| skip(record, reason))
                })),
            }
        }

        for skipped in &failures {
            warn!(
                "Skipping player {} ({}) in season {}: {}",
                skipped.player_id, skipped.player_name, season, skipped.reason
            );
        }
        if duplicates_dropped > 0 {
            info!(
                "Dropped {} secondary statistics records in season {}",
                duplicates_dropped, season
            );
        }

        let summary = RecalculationSummary {
            season,
            run_id,
            recomputed: scored.len(),
            skipped_invalid: failures.len(),
            total,
            duplicates_dropped,
            failures,
        };

        let run = RunInfo {
            run_id,
            season,
            computed_at: Utc::now(),
        };
        self.snapshots.publish(SeasonSnapshot::new(run, scored));

        info!(
            "Recalculation run {} finished: {} scored, {} skipped of {}",
            run_id, summary.recomputed, summary.skipped_invalid, summary.total
        );
        Ok(summary)
    }

    /// Applies to the next run; current snapshots keep their old multiplier
    pub fn update_league_multiplier(&self, league_id: LeagueId, multiplier: f64) -> SppResult<()> {
        validate_multiplier(multiplier).map_err(|e| SppError::InvalidConfig(e.to_string()))?;

        let _gate = self.multiplier_gate.write().unwrap_or_else(PoisonError::into_inner);
        if !self.source.update_league_multiplier(league_id, multiplier)? {
            return Err(SppError::NotFound(format!("league {league_id}")));
        }

        info!("League {} multiplier set to {}", league_id, multiplier);
        Ok(())
    }

    fn season_lock(&self, season: Season) -> Arc<Mutex<()>> {
        let mut locks = self.season_locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.entry(season).or_default().clone()
    }
}

type Outcome = (SeasonRecord, Result<ScoredPlayer, InvalidStatistics>);

/// Orders a player's valid records so the primary one compares greatest:
/// most minutes, then most games, then the lower league multiplier.
fn record_preference(a: &ScoredPlayer, b: &ScoredPlayer) -> CmpOrdering {
    a.statistics
        .minutes
        .cmp(&b.statistics.minutes)
        .then(a.statistics.games.cmp(&b.statistics.games))
        .then(b.league.multiplier.total_cmp(&a.league.multiplier))
        .then(b.league.id.cmp(&a.league.id))
}

fn score_record(
    record: &SeasonRecord,
    leagues: &HashMap<LeagueId, League>,
    scoring: &ScoringSettings,
) -> Result<ScoredPlayer, InvalidStatistics> {
    let league = leagues
        .get(&record.league_id)
        .ok_or(InvalidStatistics::UnknownLeague(record.league_id))?;
    let breakdown = calculate_breakdown(
        &record.statistics,
        record.position,
        league.multiplier,
        scoring,
    )?;

    Ok(ScoredPlayer {
        player: record.player.clone(),
        team: record.team.clone(),
        league: league.clone(),
        season: record.season,
        position: record.position,
        statistics: record.statistics.clone(),
        breakdown,
    })
}

fn skip(record: &SeasonRecord, reason: &InvalidStatistics) -> SkippedPlayer {
    SkippedPlayer {
        player_id: record.player.id,
        player_name: record.player.name.clone(),
        reason: reason.to_string(),
    }
}
