use crate::domain::{SeasonStatistics, MAX_MINUTES_PER_GAME};
use crate::errors::InvalidStatistics;

pub fn validate_statistics(stats: &SeasonStatistics) -> Result<(), InvalidStatistics> {
    if stats.games < 0 {
        return Err(InvalidStatistics::NegativeGames(stats.games));
    }
    if stats.minutes < 0 {
        return Err(InvalidStatistics::NegativeMinutes(stats.minutes));
    }
    check_minutes_ceiling(stats)?;
    check_counts(stats)?;
    check_rating(stats.rating)
}

pub fn validate_multiplier(multiplier: f64) -> Result<(), InvalidStatistics> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(())
    } else {
        Err(InvalidStatistics::InvalidMultiplier(multiplier))
    }
}

fn check_minutes_ceiling(stats: &SeasonStatistics) -> Result<(), InvalidStatistics> {
    let ceiling = stats.games as i64 * MAX_MINUTES_PER_GAME;
    if stats.minutes as i64 > ceiling {
        return Err(InvalidStatistics::MinutesAboveCeiling {
            minutes: stats.minutes,
            games: stats.games,
            ceiling,
        });
    }
    Ok(())
}

fn check_counts(stats: &SeasonStatistics) -> Result<(), InvalidStatistics> {
    let counts = [
        ("goals", stats.goals),
        ("assists", stats.assists),
        ("yellow cards", stats.yellow_cards),
        ("red cards", stats.red_cards),
        ("penalties scored", stats.penalties_scored),
        ("penalties missed", stats.penalties_missed),
    ];

    match counts.into_iter().find(|(_, value)| *value < 0) {
        Some((field, value)) => Err(InvalidStatistics::NegativeCount { field, value }),
        None => Ok(()),
    }
}

fn check_rating(rating: Option<f64>) -> Result<(), InvalidStatistics> {
    match rating {
        Some(r) if !(0.0..=10.0).contains(&r) => Err(InvalidStatistics::RatingOutOfRange(r)),
        _ => Ok(()),
    }
}
