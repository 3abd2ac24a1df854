//! Terminal tables

use colored::*;
use league_analytics::{Dashboard, League, PickLedger, TeamRating, TradedPick};
use sleeper_provider::SelectedProvider;

const NAME_WIDTH: usize = 24;

pub fn print_source_banner(selected: &SelectedProvider) {
    if selected.is_mock() {
        let banner = "⚠️  Mock Mode: live Sleeper data unavailable, showing demo data";
        println!("{}", banner.yellow().bold());
    } else {
        println!("{}", "✅ Live Sleeper data".green());
    }
    println!();
}

/// Fit `text` into `width` columns, marking truncation with '…'
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{text:<width$}");
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}

fn tier_cell(tier: u8) -> ColoredString {
    let label = format!("T{tier}");
    match tier {
        1 => label.green().bold(),
        2 => label.green(),
        3 => label.yellow(),
        4 => label.magenta(),
        _ => label.red(),
    }
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

pub fn print_leagues(username: &str, season: &str, leagues: &[League]) {
    println!("{}", format!("📋 Leagues for {username} ({season})").cyan().bold());
    if leagues.is_empty() {
        println!("  {}", "No leagues found".dimmed());
        return;
    }
    for league in leagues {
        let teams = league.total_rosters.map(|n| format!("{n} teams")).unwrap_or_default();
        println!(
            "  {}  {}  {}",
            fit(league.display_name(), NAME_WIDTH).bold(),
            league.league_id.dimmed(),
            teams
        );
    }
}

pub fn print_dashboard(dashboard: &Dashboard) {
    println!("{}", format!("📊 Roster {}", dashboard.roster_id).cyan().bold());
    println!(
        "  Starters: {} / {} players",
        dashboard.starters.starters.to_string().bold(),
        dashboard.starters.players
    );

    let mix: Vec<String> = dashboard
        .position_mix
        .iter()
        .map(|c| format!("{} {}", or_dash(&c.position), c.count))
        .collect();
    println!("  Positions: {}", mix.join(", "));
    println!();

    let header = format!(
        "{:<w$} {:<4} {:<4} {:>3} {:>4} {:<10} {:<4}",
        "Player",
        "Pos",
        "Team",
        "Age",
        "Bye",
        "Status",
        "Tier",
        w = NAME_WIDTH
    );
    println!("  {}", header.dimmed());
    for row in &dashboard.rows {
        let name = fit(&row.name, NAME_WIDTH);
        let name = if row.starter { name.bold() } else { name.normal() };
        println!(
            "  {} {:<4} {:<4} {:>3} {:>4} {:<10} {}",
            name,
            or_dash(&row.position),
            or_dash(&row.team),
            row.age,
            row.bye_display(),
            fit(or_dash(&row.injury_status), 10),
            tier_cell(row.tier)
        );
    }
    println!();

    if dashboard.is_balanced() {
        println!("  {}", "✅ No positional needs".green());
    } else {
        let needs: Vec<String> = dashboard.needs.iter().map(|n| n.to_string()).collect();
        println!("  {} {}", "Needs:".bold(), needs.join(", ").yellow());
    }

    if !dashboard.ages.is_empty() {
        let total: u32 = dashboard.ages.iter().map(|a| a.age).sum();
        let average = f64::from(total) / dashboard.ages.len() as f64;
        println!("  {} {:.1}", "Average age:".bold(), average);
    }
    println!();

    print_picks(&dashboard.picks);
    println!();

    println!("{}", "🎯 Targets".cyan().bold());
    if dashboard.targets.is_empty() {
        println!("  {}", "No trending targets".dimmed());
        return;
    }
    for (rank, target) in dashboard.targets.iter().enumerate() {
        let fit_marker = if target.fit { "fit".green().bold() } else { "".normal() };
        println!(
            "  {:>2}. {} {:<4} {:<4} {} {:>4.1} {}",
            rank + 1,
            fit(&target.name, NAME_WIDTH),
            or_dash(&target.position),
            or_dash(&target.team),
            tier_cell(target.tier),
            target.score,
            fit_marker
        );
    }
}

fn pick_label(pick: &TradedPick) -> String {
    format!("{} round {}", pick.season, pick.round)
}

fn print_picks(ledger: &PickLedger) {
    println!("{}", "🔁 Traded Picks".cyan().bold());
    if ledger.is_empty() {
        println!("  {}", "No traded picks".dimmed());
        return;
    }
    for pick in &ledger.acquired {
        println!("  {} {} (from roster {})", "+".green().bold(), pick_label(pick), pick.roster_id);
    }
    for pick in &ledger.traded_away {
        println!("  {} {} (to roster {})", "-".red().bold(), pick_label(pick), pick.owner_id);
    }
    println!("  {} {:+}", "Net:".bold(), ledger.net());
}

pub fn print_ratings(ratings: &[TeamRating]) {
    println!("{}", "🏆 League Ratings (lower is stronger)".cyan().bold());
    if ratings.is_empty() {
        println!("  {}", "No rosters".dimmed());
        return;
    }
    let header = format!(
        "{:<w$} {:>6} {:>7} {:<9} {:<9}",
        "Team",
        "Rating",
        "Players",
        "Strength",
        "Weakness",
        w = NAME_WIDTH
    );
    println!("  {}", header.dimmed());
    for team in ratings {
        let rating = if team.has_data() { format!("{:.2}", team.rating) } else { "-".to_string() };
        println!(
            "  {} {:>6} {:>7} {:<9} {:<9}",
            fit(&team.owner_name, NAME_WIDTH),
            rating,
            team.rated_players,
            team.top_strength.green(),
            team.top_weakness.red()
        );
    }
}
