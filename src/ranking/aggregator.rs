use crate::snapshot::{ranking_order, ScoredPlayer};

use super::filter::RankingFilter;

/// A player's position within one filtered view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingEntry<'a> {
    pub rank: usize,
    pub player: &'a ScoredPlayer,
}

/// Ranked entries together with the filter they were computed under
#[derive(Debug, Clone)]
pub struct RankingView<'a> {
    pub filter: RankingFilter,
    pub entries: Vec<RankingEntry<'a>>,
}

impl<'a> RankingView<'a> {
    pub fn build(players: &'a [ScoredPlayer], filter: RankingFilter) -> Self {
        let entries = rank_players(players, &filter);
        Self { filter, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Filters, sorts and ranks an already scored population.
///
/// Ranks are 1-based and reflect the position inside the filtered view.
/// Breakdowns are only read, never recomputed.
pub fn rank_players<'a>(players: &'a [ScoredPlayer], filter: &RankingFilter) -> Vec<RankingEntry<'a>> {
    let mut matched: Vec<&ScoredPlayer> = players.iter().filter(|p| filter.matches(p)).collect();
    matched.sort_by(|a, b| ranking_order(a, b));

    matched
        .into_iter()
        .enumerate()
        .map(|(idx, player)| RankingEntry {
            rank: idx + 1,
            player,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{League, Player, PlayerId, PositionCategory, ScoreBreakdown, SeasonStatistics, Team};

    fn league(id: i64, continent: &str) -> League {
        League {
            id,
            name: format!("League {id}"),
            country: "Somewhere".to_string(),
            continent: continent.to_string(),
            multiplier: 1.0,
        }
    }

    fn scored(id: PlayerId, name: &str, team: &str, league: League, position: PositionCategory, score: f64) -> ScoredPlayer {
        ScoredPlayer {
            player: Player::new(id, name),
            team: Team::new(id * 10, team),
            league,
            season: 2023,
            position,
            statistics: SeasonStatistics::default(),
            breakdown: ScoreBreakdown {
                goal_points: score,
                assist_points: 0.0,
                penalty_points: 0.0,
                raw_subtotal: score,
                league_multiplier: 1.0,
                final_score: score,
            },
        }
    }

    fn population() -> Vec<ScoredPlayer> {
        vec![
            scored(4, "Jude Bellingham", "Real Madrid", league(140, "Europe"), PositionCategory::Midfielder, 210.0),
            scored(1, "Vinícius Júnior", "Real Madrid", league(140, "Europe"), PositionCategory::Attacker, 159.6),
            scored(7, "Germán Cano", "Fluminense", league(71, "South America"), PositionCategory::Attacker, 159.6),
            scored(3, "Erling Haaland", "Manchester City", league(39, "Europe"), PositionCategory::Attacker, 301.0),
            scored(9, "Hard Tackler", "Getafe", league(140, "Europe"), PositionCategory::Defender, -12.5),
            scored(2, "Thibaut Courtois", "Real Madrid", league(140, "Europe"), PositionCategory::Goalkeeper, 0.0),
        ]
    }

    fn ids(entries: &[RankingEntry<'_>]) -> Vec<PlayerId> {
        entries.iter().map(|e| e.player.player.id).collect()
    }

    #[test]
    fn test_identity_filter_orders_and_breaks_ties_by_id() {
        let players = population();
        let entries = rank_players(&players, &RankingFilter::for_season(2023));
        assert_eq!(ids(&entries), vec![3, 4, 1, 7, 2, 9]);
        let ranks: Vec<usize> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_negative_scores_rank_last_not_dropped() {
        let players = population();
        let entries = rank_players(&players, &RankingFilter::for_season(2023));
        let last = entries.last().unwrap();
        assert_eq!(last.player.player.id, 9);
        assert!(last.player.final_score() < 0.0);
    }

    #[test]
    fn test_ranks_restart_inside_filtered_view() {
        let players = population();
        let filter = RankingFilter::for_season(2023).with_position(PositionCategory::Attacker);
        let entries = rank_players(&players, &filter);
        assert_eq!(ids(&entries), vec![3, 1, 7]);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[2].rank, 3);
    }

    #[test]
    fn test_search_matches_player_or_team_case_insensitively() {
        let players = population();
        let by_team = rank_players(&players, &RankingFilter::for_season(2023).with_search("MADRID"));
        assert_eq!(ids(&by_team), vec![4, 1, 2]);

        let by_name = rank_players(&players, &RankingFilter::for_season(2023).with_search("aala"));
        assert_eq!(ids(&by_name), vec![3]);

        let accented = rank_players(&players, &RankingFilter::for_season(2023).with_search("júnior"));
        assert_eq!(ids(&accented), vec![1]);
    }

    #[test]
    fn test_continent_is_case_insensitive() {
        let players = population();
        let entries = rank_players(&players, &RankingFilter::for_season(2023).with_continent("south america"));
        assert_eq!(ids(&entries), vec![7]);
    }

    #[test]
    fn test_combined_dimensions() {
        let players = population();
        let filter = RankingFilter::for_season(2023)
            .with_league(140)
            .with_position(PositionCategory::Attacker);
        assert_eq!(ids(&rank_players(&players, &filter)), vec![1]);
    }

    #[test]
    fn test_league_filter_commutes_with_global_ranking() {
        let players = population();
        let filtered = rank_players(&players, &RankingFilter::for_season(2023).with_league(140));

        let client_side: Vec<PlayerId> = rank_players(&players, &RankingFilter::for_season(2023))
            .into_iter()
            .filter(|e| e.player.league.id == 140)
            .map(|e| e.player.player.id)
            .collect();

        assert_eq!(ids(&filtered), client_side);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let players = population();
        assert!(rank_players(&players, &RankingFilter::for_season(2023).with_league(999)).is_empty());
        assert!(rank_players(&players, &RankingFilter::for_season(1999)).is_empty());
    }

    #[test]
    fn test_view_keeps_filter() {
        let players = population();
        let filter = RankingFilter::for_season(2023).with_league(39);
        let view = RankingView::build(&players, filter.clone());
        assert_eq!(view.filter, filter);
        assert_eq!(view.len(), 1);
    }
}
