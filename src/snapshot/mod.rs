use chrono::{DateTime, Utc};
use log::info;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::{
    League, LeagueId, Player, PlayerId, PositionCategory, ScoreBreakdown, Season, SeasonStatistics,
    Team,
};

/// A scored (player, season) pair with everything rankings filter on
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlayer {
    pub player: Player,
    pub team: Team,
    pub league: League,
    pub season: Season,
    pub position: PositionCategory,
    pub statistics: SeasonStatistics,
    pub breakdown: ScoreBreakdown,
}

impl ScoredPlayer {
    pub fn final_score(&self) -> f64 {
        self.breakdown.final_score
    }
}

/// Descending score, ties broken by ascending player id
pub fn ranking_order(a: &ScoredPlayer, b: &ScoredPlayer) -> Ordering {
    b.final_score()
        .total_cmp(&a.final_score())
        .then_with(|| a.player.id.cmp(&b.player.id))
}

/// Identifies the recompute run that produced a snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct RunInfo {
    pub run_id: u64,
    pub season: Season,
    pub computed_at: DateTime<Utc>,
}

/// Immutable result of one recompute run, stored in ranking order
#[derive(Debug)]
pub struct SeasonSnapshot {
    run: RunInfo,
    players: Vec<ScoredPlayer>,
    positions: HashMap<PlayerId, usize>,
}

impl SeasonSnapshot {
    pub fn new(run: RunInfo, mut players: Vec<ScoredPlayer>) -> Self {
        players.sort_by(ranking_order);
        let positions = players
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.player.id, idx))
            .collect();

        Self {
            run,
            players,
            positions,
        }
    }

    pub fn run(&self) -> &RunInfo {
        &self.run
    }

    pub fn season(&self) -> Season {
        self.run.season
    }

    pub fn players(&self) -> &[ScoredPlayer] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&ScoredPlayer> {
        self.positions.get(&player_id).map(|&idx| &self.players[idx])
    }

    /// 1-based rank in the unfiltered season ranking
    pub fn global_rank(&self, player_id: PlayerId) -> Option<usize> {
        self.positions.get(&player_id).map(|idx| idx + 1)
    }

    pub fn league_ids(&self) -> HashSet<LeagueId> {
        self.players.iter().map(|p| p.league.id).collect()
    }
}

/// Holds the latest completed snapshot of each season.
///
/// Readers clone the `Arc` and never observe a run in progress; a recompute
/// publishes its snapshot by replacing the map entry in one step.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    seasons: RwLock<HashMap<Season, Arc<SeasonSnapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self, season: Season) -> Option<Arc<SeasonSnapshot>> {
        let seasons = self.seasons.read().unwrap_or_else(PoisonError::into_inner);
        seasons.get(&season).cloned()
    }

    /// Replaces the season's snapshot, returning the one it superseded
    pub fn publish(&self, snapshot: SeasonSnapshot) -> Option<Arc<SeasonSnapshot>> {
        let season = snapshot.season();
        let run_id = snapshot.run().run_id;
        let count = snapshot.len();
        let snapshot = Arc::new(snapshot);

        let previous = {
            let mut seasons = self.seasons.write().unwrap_or_else(PoisonError::into_inner);
            seasons.insert(season, snapshot)
        };

        info!(
            "Published snapshot for season {} (run {}, {} players)",
            season, run_id, count
        );
        previous
    }

    pub fn seasons(&self) -> Vec<Season> {
        let seasons = self.seasons.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<Season> = seasons.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}
