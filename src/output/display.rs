//! Display functions for command results

use super::formatters::{create_progress_bar, guess_row};
use crate::commands::AuditReport;
use crate::core::LetterVerdict;
use crate::game::GuessRecord;
use crate::store::ProfileStats;
use colored::Colorize;

/// Print the result of a one-shot check
pub fn print_check_result(secret: &str, record: &GuessRecord) {
    let feedback = record.feedback();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {}   Guess: {}",
        secret.to_uppercase().bright_yellow().bold(),
        record.guess().text().to_uppercase().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}  {}", guess_row(record), feedback.to_emoji());
    println!(
        "\n  Exact: {}   Present: {}   Absent: {}",
        feedback.count(LetterVerdict::Exact).to_string().green(),
        feedback.count(LetterVerdict::Present).to_string().yellow(),
        feedback.count(LetterVerdict::Absent)
    );

    if feedback.is_perfect() {
        println!("\n{}", "✅ Solved!".green().bold());
    }
}

/// Print cached profile stats
pub fn print_profile_stats(stats: &ProfileStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PROFILE:".bright_cyan().bold(),
        stats
            .username
            .as_deref()
            .unwrap_or("guest")
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🏅 Rank:              {}", stats.rank.to_string().bright_white().bold());
    println!("✨ XP:                {}", stats.xp.to_string().bright_yellow());
    println!("🏆 Wins:              {}", stats.wins);
    println!("⚔️  PvP wins:          {}", stats.wins_pvp);
    println!("🎯 Tournament wins:   {}", stats.wins_tournament);

    if let Some(next) = stats.rank.next() {
        let floor = stats.rank.threshold();
        let bar = create_progress_bar(
            stats.xp.saturating_sub(floor) as f64,
            (next.threshold() - floor) as f64,
            30,
        );
        println!(
            "\n   [{}] {} XP to {}",
            bar.green(),
            next.threshold().saturating_sub(stats.xp),
            next.as_str().bright_white()
        );
    }
}

/// Print the result of an audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}-letter words ",
        "AUDIT RESULTS:".bright_cyan().bold(),
        report.word_length
    );
    println!("{}", "═".repeat(60).cyan());

    let verdicts = (report.exact + report.present + report.absent).max(1) as f64;

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Words:            {}", report.words);
    println!("   Pairs evaluated:  {}", report.pairs);
    println!("   Perfect matches:  {}", report.perfect);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    println!("\n📈 {}", "Verdicts:".bright_cyan().bold());
    for (label, count) in [
        ("🟩 exact  ", report.exact),
        ("🟨 present", report.present),
        ("⬜ absent ", report.absent),
    ] {
        let pct = count as f64 / verdicts * 100.0;
        println!(
            "   {label} {} {count:8} ({pct:5.1}%)",
            create_progress_bar(pct, 100.0, 30).green()
        );
    }

    println!();
    if report.passed() {
        println!("{}", "✅ All invariants hold".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} violations", report.violation_count)
                .red()
                .bold()
        );
        for violation in &report.violations {
            println!(
                "   {} vs {} → {}: {}",
                violation.secret.to_uppercase(),
                violation.guess.to_uppercase(),
                violation.feedback,
                violation.reason
            );
        }
    }
}
