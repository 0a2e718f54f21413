use colored::Colorize;

use crate::api::models::{RankingItem, StatsOverview};
use crate::services::RecalculationSummary;

pub fn print_summary(summary: &RecalculationSummary) {
    println!(
        "{} season {} (run {})",
        "Recalculated".green().bold(),
        summary.season,
        summary.run_id
    );
    println!(
        "  {} ranked, {} skipped, {} total",
        summary.recomputed.to_string().green(),
        summary.skipped_invalid.to_string().yellow(),
        summary.total
    );
    if summary.duplicates_dropped > 0 {
        println!(
            "  {} secondary competition records ignored",
            summary.duplicates_dropped.to_string().dimmed()
        );
    }
    for failure in &summary.failures {
        println!(
            "  {} {} ({}): {}",
            "skipped".yellow(),
            failure.player_name,
            failure.player_id,
            failure.reason
        );
    }
}

pub fn print_ranking(items: &[RankingItem]) {
    if items.is_empty() {
        println!("{}", "No ranked players".dimmed());
        return;
    }
    for item in items {
        let score = format!("{:>8.2}", item.final_score);
        let score = if item.final_score < 0.0 { score.red() } else { score.cyan() };
        println!(
            "{:>4}. {} {:<28} {:<22} {:<18} {}",
            item.rank,
            score,
            item.player.name,
            item.player.team.dimmed(),
            item.player.league,
            item.position
        );
    }
}

pub fn print_overview(overview: &StatsOverview) {
    println!("{} {}", "Season".bold(), overview.season);
    println!(
        "  players {}  leagues {}  average {:.2}  top {:.2}",
        overview.total_players, overview.total_leagues, overview.avg_score, overview.top_score
    );

    if !overview.leagues.is_empty() {
        println!("{}", "Leagues".bold());
        for league in &overview.leagues {
            println!(
                "  {:<20} {:>4} players  avg {:>8.2}  max {:>8.2}",
                league.name, league.player_count, league.avg_score, league.max_score
            );
        }
    }

    if !overview.positions.is_empty() {
        println!("{}", "Positions".bold());
        for position in &overview.positions {
            println!(
                "  {:<12} {:>4} players  avg {:>8.2}",
                position.position.as_str(),
                position.count,
                position.avg_score
            );
        }
    }

    if !overview.top_players.is_empty() {
        println!("{}", "Top players".bold());
        print_ranking(&overview.top_players);
    }
}
