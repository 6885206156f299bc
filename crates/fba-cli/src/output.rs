//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use fba_core::strength::TeamTiers;
use fba_core::AnalysisResult;
use unicode_width::UnicodeWidthStr;

/// Print a full analysis report.
pub fn print_analysis(result: &AnalysisResult) {
    let width = term_width().min(100);
    let info = &result.match_info;

    println!();
    println!(
        "{} {} {}",
        info.home_team.cyan().bold(),
        "vs".dimmed(),
        info.away_team.cyan().bold()
    );
    println!("{}", format!("{} · {}", info.league, info.date).dimmed());
    println!("{}", "─".repeat(width).dimmed());

    // ── Odds ──
    let cell = (width.saturating_sub(2) / 3).clamp(10, 24);
    println!(
        "{} {} {}",
        pad_right("Home Win", cell).blue().bold(),
        pad_right("Draw", cell).bold(),
        pad_right("Away Win", cell).red().bold()
    );
    println!(
        "{} {} {}",
        pad_right(&format!("{:.2}", result.odds.home), cell),
        pad_right(&format!("{:.2}", result.odds.draw), cell),
        pad_right(&format!("{:.2}", result.odds.away), cell)
    );
    println!();

    // ── Recommendation ──
    println!(
        "{}  {}",
        "Recommended Bet".bold(),
        confidence_badge(result.confidence)
    );
    println!("  {}", result.recommended_bet.green().bold());
    println!("  {}", result.prediction);
    println!();

    println!("{}", "Analysis".bold());
    for line in wrap(&result.analysis, width.saturating_sub(2).max(20)) {
        println!("  {}", line);
    }
    println!();

    println!("{}", "Key Factors".bold());
    for factor in &result.key_factors {
        let mut lines = wrap(factor, width.saturating_sub(4).max(20)).into_iter();
        if let Some(first) = lines.next() {
            println!("  {} {}", "•".green(), first);
        }
        for rest in lines {
            println!("    {}", rest);
        }
    }
    println!();

    println!(
        "{}",
        "Disclaimer: This analysis is for informational purposes only. \
         Gambling involves risk. Please bet responsibly and within your means."
            .yellow()
    );
}

/// Print the reference team table.
pub fn print_team_tiers(tiers: &TeamTiers) {
    let names = tiers.names();

    println!("{:<24} {:<12} {:<6}", "Reference", "Token", "Tier");
    println!("{}", "─".repeat(44));

    for (name, tier) in names
        .top
        .iter()
        .map(|n| (n, "top"))
        .chain(names.good.iter().map(|n| (n, "good")))
    {
        let token = name
            .split_whitespace()
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let tier_colored = match tier {
            "top" => tier.green().bold(),
            _ => tier.yellow(),
        };
        println!(
            "{} {} {}",
            pad_right(&truncate_visual(name, 24), 24),
            pad_right(&token, 12).dimmed(),
            tier_colored
        );
    }

    println!();
    println!(
        "{} reference name(s); anything else falls into the default tier",
        names.top.len() + names.good.len()
    );
}

fn confidence_badge(confidence: u8) -> ColoredString {
    let label = format!(" Confidence: {}% ", confidence);
    match confidence {
        60.. => label.on_green().white().bold(),
        45..=59 => label.on_yellow().black().bold(),
        _ => label.on_white().black(),
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

/// Greedy word wrap on visual width. Words longer than a line stay whole.
fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            UnicodeWidthStr::width(word)
        } else {
            UnicodeWidthStr::width(current.as_str()) + 1 + UnicodeWidthStr::width(word)
        };

        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
