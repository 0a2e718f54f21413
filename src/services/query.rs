use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::models::{
    AppliedWeights, LeagueOverview, PlayerBreakdownResponse, PositionOverview, RankingItem,
    RankingResponse, StatsOverview,
};
use crate::config::{AppConfig, ServerSettings};
use crate::domain::{League, LeagueId, PlayerId, PositionCategory, Season};
use crate::errors::{SppError, SppResult};
use crate::ranking::filter::parse_number;
use crate::ranking::{FilterParams, Pagination, RankingFilter, RankingView};
use crate::snapshot::{ScoredPlayer, SnapshotStore};
use crate::store::StatisticsSource;

use super::recalculation::{RecalculationService, RecalculationSummary};

/// Read-side entry point for rankings, breakdowns and overviews.
///
/// Every read works on the snapshot current at call time and never waits
/// for a recompute in progress.
pub struct QueryService {
    source: Arc<dyn StatisticsSource>,
    snapshots: Arc<SnapshotStore>,
    recalculation: RecalculationService,
    settings: ServerSettings,
}

impl QueryService {
    pub fn new(source: Arc<dyn StatisticsSource>, config: &AppConfig) -> Self {
        let snapshots = Arc::new(SnapshotStore::new());
        let recalculation = RecalculationService::new(
            Arc::clone(&source),
            Arc::clone(&snapshots),
            config.scoring.clone(),
        );

        Self {
            source,
            snapshots,
            recalculation,
            settings: config.server.clone(),
        }
    }

    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn global_ranking(&self, params: &FilterParams) -> SppResult<RankingResponse> {
        let filter = params.to_filter(self.settings.default_season)?;
        let pagination = Pagination::from_params(params, &self.settings)?;
        Ok(self.ranking(filter, pagination))
    }

    pub fn league_ranking(&self, league_id: LeagueId, params: &FilterParams) -> SppResult<RankingResponse> {
        let filter = params
            .to_filter(self.settings.default_season)?
            .with_league(league_id);
        let pagination = Pagination::from_params(params, &self.settings)?;
        Ok(self.ranking(filter, pagination))
    }

    pub fn continental_ranking(&self, continent: &str, params: &FilterParams) -> SppResult<RankingResponse> {
        let filter = params
            .to_filter(self.settings.default_season)?
            .with_continent(continent);
        let pagination = Pagination::from_params(params, &self.settings)?;
        Ok(self.ranking(filter, pagination))
    }

    /// An unrecognised category name yields an empty ranking
    pub fn position_ranking(&self, position: &str, params: &FilterParams) -> SppResult<RankingResponse> {
        let filter = params.to_filter(self.settings.default_season)?;
        let pagination = Pagination::from_params(params, &self.settings)?;

        match PositionCategory::from_name(position) {
            Some(category) => Ok(self.ranking(filter.with_position(category), pagination)),
            None => Ok(empty_ranking(filter, pagination)),
        }
    }

    pub fn player_breakdown(&self, player_id: PlayerId, params: &FilterParams) -> SppResult<PlayerBreakdownResponse> {
        let season = self.resolve_season(params)?;
        let not_found = || SppError::NotFound(format!("player {player_id} in season {season}"));

        let snapshot = self.snapshots.current(season).ok_or_else(not_found)?;
        let scored = snapshot.get(player_id).ok_or_else(not_found)?;
        let global_rank = snapshot.global_rank(player_id).ok_or_else(not_found)?;

        let scoring = self.recalculation.scoring();
        let weights = scoring.weights_for(scored.position);

        Ok(PlayerBreakdownResponse {
            player: scored.player.clone(),
            team: scored.team.clone(),
            league: scored.league.clone(),
            season,
            position: scored.position,
            final_score: scored.final_score(),
            global_rank,
            breakdown: scored.breakdown,
            weights: AppliedWeights {
                goal: weights.goal,
                assist: weights.assist,
                yellow_card: scoring.yellow_card,
                red_card: scoring.red_card,
            },
            statistics: scored.statistics.clone(),
            computed_at: snapshot.run().computed_at,
        })
    }

    /// Runs synchronously; callers on an async runtime should move this to a blocking thread
    pub fn recalculate(&self, season: Option<Season>) -> SppResult<RecalculationSummary> {
        self.recalculation
            .run(season.unwrap_or(self.settings.default_season))
    }

    pub fn stats_overview(&self, params: &FilterParams) -> SppResult<StatsOverview> {
        let season = self.resolve_season(params)?;
        let Some(snapshot) = self.snapshots.current(season) else {
            return Ok(StatsOverview::empty(season));
        };
        let players = snapshot.players();
        if players.is_empty() {
            return Ok(StatsOverview::empty(season));
        }

        let top_players = players
            .iter()
            .take(self.settings.overview_top_players)
            .enumerate()
            .map(|(idx, scored)| RankingItem::new(idx + 1, scored))
            .collect();

        Ok(StatsOverview {
            season,
            total_players: players.len(),
            total_leagues: snapshot.league_ids().len(),
            avg_score: average(players.iter().map(ScoredPlayer::final_score)),
            top_score: players[0].final_score(),
            leagues: league_overviews(players),
            positions: position_overviews(players),
            top_players,
            computed_at: Some(snapshot.run().computed_at),
        })
    }

    pub fn leagues(&self) -> SppResult<Vec<League>> {
        Ok(self.source.leagues()?)
    }

    pub fn update_league_multiplier(&self, league_id: LeagueId, multiplier: f64) -> SppResult<()> {
        self.recalculation.update_league_multiplier(league_id, multiplier)
    }

    fn resolve_season(&self, params: &FilterParams) -> SppResult<Season> {
        Ok(parse_number::<Season>("season", &params.season)?.unwrap_or(self.settings.default_season))
    }

    fn ranking(&self, filter: RankingFilter, pagination: Pagination) -> RankingResponse {
        let Some(snapshot) = self.snapshots.current(filter.season) else {
            return empty_ranking(filter, pagination);
        };

        let RankingView { filter, entries } = RankingView::build(snapshot.players(), filter);
        let total = entries.len();
        let ranking = pagination
            .apply(entries)
            .into_iter()
            .map(RankingItem::from)
            .collect();

        RankingResponse {
            ranking,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
            season: filter.season,
            filters: filter,
            computed_at: Some(snapshot.run().computed_at),
        }
    }
}

fn empty_ranking(filter: RankingFilter, pagination: Pagination) -> RankingResponse {
    RankingResponse {
        ranking: Vec::new(),
        total: 0,
        page: pagination.page,
        page_size: pagination.page_size,
        season: filter.season,
        filters: filter,
        computed_at: None,
    }
}

fn average(scores: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = scores.fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Busiest leagues first
fn league_overviews(players: &[ScoredPlayer]) -> Vec<LeagueOverview> {
    let mut by_league: BTreeMap<LeagueId, Vec<&ScoredPlayer>> = BTreeMap::new();
    for scored in players {
        by_league.entry(scored.league.id).or_default().push(scored);
    }

    let mut overviews: Vec<LeagueOverview> = by_league
        .into_values()
        .map(|members| {
            let league = &members[0].league;
            LeagueOverview {
                league_id: league.id,
                name: league.name.clone(),
                continent: league.continent.clone(),
                player_count: members.len(),
                avg_score: average(members.iter().map(|p| p.final_score())),
                max_score: members
                    .iter()
                    .map(|p| p.final_score())
                    .fold(f64::NEG_INFINITY, f64::max),
            }
        })
        .collect();

    overviews.sort_by(|a, b| b.player_count.cmp(&a.player_count).then(a.league_id.cmp(&b.league_id)));
    overviews
}

fn position_overviews(players: &[ScoredPlayer]) -> Vec<PositionOverview> {
    PositionCategory::ALL
        .into_iter()
        .filter_map(|position| {
            let scores: Vec<f64> = players
                .iter()
                .filter(|p| p.position == position)
                .map(ScoredPlayer::final_score)
                .collect();
            (!scores.is_empty()).then(|| PositionOverview {
                position,
                count: scores.len(),
                avg_score: average(scores.into_iter()),
            })
        })
        .collect()
}
