use streak_core::analyzer::analyzer::{StreakReport, StreakSummary};
use streak_core::common::enums::Direction;
use streak_core::streak::distribution::StreakDistribution;

const RULE: &str = "============================================================";

/// Render the full per-instrument report, section by section
pub fn print_report(symbol: &str, report: &StreakReport) {
    println!("{}", RULE);
    println!("ANALYZING {}", symbol);
    println!("{}", RULE);
    println!("Observations: {} closes", report.observations);

    println!("\nHistorical Streak Analysis:");
    println!("Total up streaks found: {}", report.up.count);
    println!("Total down streaks found: {}", report.down.count);
    print_summary_lines("up", &report.up);
    print_summary_lines("down", &report.down);

    println!("\nCurrent Status:");
    println!(
        "Current streak: {} consecutive {} day(s)",
        report.current.length, report.current.direction
    );
    println!("Last close: {:.2}", report.last_close);
    println!("Previous close: {:.2}", report.prev_close);
    println!("Last day change: {:+.2}%", report.change_pct);

    println!("\n{}", RULE);
    println!("NEXT CLOSE PROBABILITIES");
    println!("{}", RULE);
    println!("Upside probability: {:.1}%", report.projection.next.upside);
    println!(
        "Downside probability: {:.1}%",
        report.projection.next.downside
    );

    println!("\n{}", RULE);
    println!("DAY AFTER NEXT PROBABILITIES");
    println!("{}", RULE);
    println!("If next close is ABOVE current:");
    println!(
        "  {:.1}% up, {:.1}% down",
        report.projection.if_next_up.upside, report.projection.if_next_up.downside
    );
    println!("If next close is BELOW current:");
    println!(
        "  {:.1}% up, {:.1}% down",
        report.projection.if_next_down.upside, report.projection.if_next_down.downside
    );

    println!("\n{}", RULE);
    println!("STREAK DISTRIBUTION (Historical)");
    println!("{}", RULE);
    println!("Up streaks:");
    print_distribution(&report.up.distribution);
    println!("\nDown streaks:");
    print_distribution(&report.down.distribution);
}

fn print_summary_lines(label: &str, summary: &StreakSummary) {
    if summary.count > 0 {
        println!("Longest {} streak: {} days", label, summary.longest);
        println!("Average {} streak: {:.1} days", label, summary.average);
    }
}

fn print_distribution(dist: &StreakDistribution) {
    for bucket in &dist.buckets {
        println!(
            "  {} day(s): {} times ({:.1}%)",
            bucket.length, bucket.count, bucket.share
        );
    }
}

/// One line of the scan ranking
#[derive(Debug)]
pub struct ScanRow {
    pub symbol: String,
    pub observations: usize,
    pub streak_length: usize,
    pub streak_direction: Direction,
    pub upside: f64,
    pub downside: f64,
}

impl ScanRow {
    pub fn from_report(symbol: String, report: &StreakReport) -> Self {
        Self {
            symbol,
            observations: report.observations,
            streak_length: report.current.length,
            streak_direction: report.current.direction,
            upside: report.projection.next.upside,
            downside: report.projection.next.downside,
        }
    }
}

/// Render the scan ranking table, best upside first
pub fn print_ranking(rows: &[ScanRow]) {
    println!("{}", RULE);
    println!("SCAN RESULTS (by next-close upside probability)");
    println!("{}", RULE);
    println!(
        "{:<12} {:>6} {:>10} {:>9} {:>9}",
        "SYMBOL", "OBS", "STREAK", "UPSIDE", "DOWNSIDE"
    );
    for row in rows {
        let streak = format!("{} {}", row.streak_length, row.streak_direction);
        println!(
            "{:<12} {:>6} {:>10} {:>8.1}% {:>8.1}%",
            row.symbol, row.observations, streak, row.upside, row.downside
        );
    }
}
