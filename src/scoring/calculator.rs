use crate::config::ScoringSettings;
use crate::domain::{PositionCategory, ScoreBreakdown, SeasonStatistics};
use crate::errors::InvalidStatistics;

use super::validation::{validate_multiplier, validate_statistics};

/// Scores one player's season.
///
/// `final_score = (goal_points + assist_points + penalty_points) * league_multiplier`,
/// with no clamping: heavily carded, low-output players end up negative.
pub fn calculate_breakdown(
    stats: &SeasonStatistics,
    category: PositionCategory,
    league_multiplier: f64,
    settings: &ScoringSettings,
) -> Result<ScoreBreakdown, InvalidStatistics> {
    validate_statistics(stats)?;
    validate_multiplier(league_multiplier)?;

    let weights = settings.weights_for(category);
    let goal_points = stats.goals as f64 * weights.goal;
    let assist_points = stats.assists as f64 * weights.assist;
    let penalty_points = calculate_penalty_points(stats, settings);
    let raw_subtotal = goal_points + assist_points + penalty_points;

    Ok(ScoreBreakdown {
        goal_points,
        assist_points,
        penalty_points,
        raw_subtotal,
        league_multiplier,
        final_score: raw_subtotal * league_multiplier,
    })
}

fn calculate_penalty_points(stats: &SeasonStatistics, settings: &ScoringSettings) -> f64 {
    let deductions =
        stats.yellow_cards as f64 * settings.yellow_card + stats.red_cards as f64 * settings.red_card;
    // avoid reporting -0.0 for clean records
    if deductions == 0.0 { 0.0 } else { -deductions }
}
