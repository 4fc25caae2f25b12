use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::leaderboard::{CampaignSummary, ScoredPost};
use crate::scoring::{Component, Grade, Platform};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal place ("150.0", "96.7")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a large counter in compact notation (1.5k, 2.3M, 847)
pub fn format_count(value: f64) -> String {
    let formatted = if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    };

    // Trim trailing .0 (e.g., "1.0k" -> "1k")
    formatted.replace(".0M", "M").replace(".0k", "k")
}

/// Grade letter, colored by tier when colors are on
pub fn format_grade(grade: Grade, use_colors: bool) -> String {
    let letter = grade.as_str();
    if !use_colors {
        return letter.to_string();
    }
    match grade {
        Grade::S => letter.magenta().bold().to_string(),
        Grade::A => letter.green().bold().to_string(),
        Grade::B => letter.cyan().to_string(),
        Grade::C => letter.yellow().to_string(),
        Grade::D | Grade::F => letter.red().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the leaderboard: Rank, Total, Grade, Platform, Post id, Influencer
/// No headers (minimal format). The influencer column is truncated to the
/// terminal width; pipes get it whole.
pub fn format_leaderboard(posts: &[ScoredPost], use_colors: bool) -> String {
    if posts.is_empty() {
        return "No posts to score.".to_string();
    }

    let term_width = get_terminal_width();
    let id_width = posts
        .iter()
        .map(|s| s.post.id.chars().count())
        .max()
        .unwrap_or(0);

    // "99." + " " + "150.0" + "  " + "S" + "  " + "instagram" + "  " + id + "  "
    let score_width = 5;
    let platform_width = 9;
    let separator = "  ";
    let fixed_width = 3 + 1 + score_width + 1 + platform_width + id_width + separator.len() * 4;

    posts
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!(
                "{:>width$}",
                format_score(scored.result.total_score),
                width = score_width
            );
            let platform_str = format!(
                "{:<width$}",
                scored.post.platform.as_str(),
                width = platform_width
            );
            let id_str = format!("{:<width$}", scored.post.id, width = id_width);
            let influencer = scored.post.influencer_or_unknown();
            let influencer = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(influencer, width - fixed_width),
                Some(_) => truncate(influencer, 20),
                None => influencer.to_string(),
            };
            let grade = format_grade(scored.result.grade, use_colors);

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    grade,
                    separator,
                    platform_str.cyan(),
                    separator,
                    id_str,
                    separator,
                    influencer.yellow()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}{}{}",
                    index_str,
                    score_str,
                    separator,
                    grade,
                    separator,
                    platform_str,
                    separator,
                    id_str,
                    separator,
                    influencer
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single post with its per-component breakdown (for verbose mode)
pub fn format_post_detail(scored: &ScoredPost, use_colors: bool) -> String {
    let post = &scored.post;
    let result = &scored.result;

    let header = if use_colors {
        format!(
            "{} ({}, {})",
            post.id.bold(),
            post.influencer_or_unknown().yellow(),
            post.platform.cyan()
        )
    } else {
        format!(
            "{} ({}, {})",
            post.id,
            post.influencer_or_unknown(),
            post.platform
        )
    };

    let mut lines = vec![
        header,
        format!(
            "  Weighted engagement: {}",
            format_count(result.weighted_engagement)
        ),
        format!("  Engagement rate: {:.2}%", result.engagement_rate),
    ];

    for c in &result.components {
        let target = match c.target {
            Some(t) if t.is_finite() && t > 0.0 => format_component_value(c.component, t),
            _ => "no target".to_string(),
        };
        let mut line = format!(
            "  {}: {} / {} (actual {}, target {})",
            c.component,
            format_score(c.base),
            c.max_points,
            format_component_value(c.component, c.actual),
            target
        );
        if c.bonus > 0.0 {
            line.push_str(&format!(", bonus +{}", format_score(c.bonus)));
        }
        lines.push(line);
    }

    lines.push(format!(
        "  Base {} + bonus {} = total {}  {} {}",
        format_score(result.base_score),
        format_score(result.bonus_points),
        format_score(result.total_score),
        format_grade(result.grade, use_colors),
        result.status
    ));

    lines.join("\n")
}

fn format_component_value(component: Component, value: f64) -> String {
    match component {
        Component::EngagementRate => format!("{:.2}%", value),
        _ => format_count(value),
    }
}

/// Summary tiles shown above the leaderboard
pub fn format_summary(name: &str, summary: &CampaignSummary, use_colors: bool) -> String {
    let title = if use_colors {
        name.bold().to_string()
    } else {
        name.to_string()
    };

    let distribution = summary
        .grade_distribution
        .iter()
        .map(|g| format!("{}:{}", format_grade(g.grade, use_colors), g.count))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{}\n  Posts: {}  Avg score: {}  Best: {}\n  Reach: {}  Impressions: {}  Weighted engagement: {}  ER: {:.2}%\n  Grades: {}",
        title,
        summary.posts,
        format_score(summary.average_total_score),
        summary.best_post.as_deref().unwrap_or("-"),
        format_count(summary.total_reach as f64),
        format_count(summary.total_impressions as f64),
        format_count(summary.total_weighted_engagement),
        summary.engagement_rate,
        distribution
    )
}

/// Format posts as tab-separated values for scripting
/// Columns: rank, id, influencer, platform, total, base, bonus, grade, status
/// (no headers, no colors)
pub fn format_tsv(posts: &[ScoredPost]) -> String {
    posts
        .iter()
        .enumerate()
        .map(|(idx, scored)| {
            let r = &scored.result;
            format!(
                "{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{}\t{}",
                idx + 1,
                scored.post.id,
                scored.post.influencer_or_unknown(),
                scored.post.platform,
                r.total_score,
                r.base_score,
                r.bonus_points,
                r.grade,
                r.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Interaction weights per platform
pub fn format_weights_table() -> String {
    let mut lines = vec![format!(
        "{:<10}{:>6}{:>9}{:>6}{:>7}",
        "platform", "like", "comment", "save", "share"
    )];
    for platform in Platform::ALL {
        let w = platform.weights();
        lines.push(format!(
            "{:<10}{:>6}{:>9}{:>6}{:>7}",
            platform.as_str(),
            w.like,
            w.comment,
            w.save,
            w.share
        ));
    }
    lines.join("\n")
}

/// Grade bands with their status labels
pub fn format_grade_table(use_colors: bool) -> String {
    Grade::ALL
        .iter()
        .map(|grade| {
            format!(
                "{}  {:<7} {}",
                format_grade(*grade, use_colors),
                grade.band(),
                grade.status()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Campaign, Post};
    use crate::leaderboard::{leaderboard, summarize, LeaderboardFilter};
    use crate::scoring::{CampaignTargets, PostMetrics};

    fn sample_campaign() -> Campaign {
        Campaign {
            name: Some("Summer Launch".to_string()),
            targets: CampaignTargets {
                target_reach: Some(100_000.0),
                target_engagement: Some(5_000.0),
                target_engagement_rate: Some(5.0),
                target_impressions: Some(150_000.0),
                bonus_multiplier: Some(1.5),
                ..Default::default()
            },
            posts: vec![
                Post {
                    id: "ig-001".to_string(),
                    influencer: Some("@alice".to_string()),
                    platform: Platform::Instagram,
                    posted_at: None,
                    metrics: PostMetrics {
                        like_count: 8000,
                        comment_count: 300,
                        save_count: 400,
                        share_count: 200,
                        reach: 150_000,
                        impressions: 200_000,
                    },
                },
                Post {
                    id: "tt-001".to_string(),
                    influencer: None,
                    platform: Platform::Tiktok,
                    posted_at: None,
                    metrics: PostMetrics::default(),
                },
            ],
        }
    }

    fn sample_board() -> Vec<ScoredPost> {
        leaderboard(&sample_campaign(), &LeaderboardFilter::default())
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(150.0), "150.0");
        assert_eq!(format_score(96.66), "96.7");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn test_format_count_small() {
        assert_eq!(format_count(847.0), "847");
        assert_eq!(format_count(0.0), "0");
    }

    #[test]
    fn test_format_count_thousands() {
        assert_eq!(format_count(1000.0), "1k");
        assert_eq!(format_count(11_700.0), "11.7k");
    }

    #[test]
    fn test_format_count_millions() {
        assert_eq!(format_count(1_000_000.0), "1M");
        assert_eq!(format_count(2_300_000.0), "2.3M");
    }

    #[test]
    fn test_format_grade_plain() {
        assert_eq!(format_grade(Grade::S, false), "S");
        assert_eq!(format_grade(Grade::F, false), "F");
    }

    #[test]
    fn test_format_grade_colored_keeps_letter() {
        let colored = format_grade(Grade::A, true);
        assert!(colored.contains('A'));
        assert_ne!(colored, "A");
    }

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("@alice", 20), "@alice");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("@a_very_long_handle_name", 10), "@a_very...");
    }

    #[test]
    fn test_truncate_very_narrow() {
        assert_eq!(truncate("@alice", 3), "@al");
    }

    #[test]
    fn test_format_leaderboard_empty() {
        assert_eq!(format_leaderboard(&[], false), "No posts to score.");
    }

    #[test]
    fn test_format_leaderboard_rows() {
        let result = format_leaderboard(&sample_board(), false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("150.0"));
        assert!(lines[0].contains("  S  "));
        assert!(lines[0].contains("instagram"));
        assert!(lines[0].contains("ig-001"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("0.0"));
        assert!(lines[1].contains("tt-001"));
    }

    #[test]
    fn test_format_post_detail() {
        let board = sample_board();
        let result = format_post_detail(&board[0], false);
        assert!(result.contains("ig-001 (@alice, instagram)"));
        assert!(result.contains("Weighted engagement: 11.7k"));
        assert!(result.contains("Engagement rate: 4.45%"));
        assert!(result.contains("Reach: 25.0 / 25"));
        assert!(result.contains("bonus +10.0"));
        assert!(result.contains("total 150.0"));
        assert!(result.contains("Exceeded Target"));
    }

    #[test]
    fn test_format_post_detail_without_targets() {
        let mut campaign = sample_campaign();
        campaign.targets = CampaignTargets::default();
        let board = leaderboard(&campaign, &LeaderboardFilter::default());
        let result = format_post_detail(&board[0], false);
        assert!(result.contains("no target"));
        assert!(!result.contains("bonus +"));
    }

    #[test]
    fn test_format_summary() {
        let campaign = sample_campaign();
        let board = sample_board();
        let summary = summarize(&campaign, &board);
        let result = format_summary(campaign.display_name(), &summary, false);
        assert!(result.starts_with("Summer Launch"));
        assert!(result.contains("Posts: 2"));
        assert!(result.contains("Avg score: 75.0"));
        assert!(result.contains("Best: ig-001"));
        assert!(result.contains("S:1"));
        assert!(result.contains("F:1"));
    }

    #[test]
    fn test_format_tsv() {
        let result = format_tsv(&sample_board());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split('\t').count(), 9);
        assert_eq!(
            lines[0],
            "1\tig-001\t@alice\tinstagram\t150.00\t96.70\t79.00\tS\tExceeded Target"
        );
        assert!(lines[1].starts_with("2\ttt-001\t-\ttiktok\t0.00\t"));
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[]), "");
    }

    #[test]
    fn test_format_weights_table() {
        let result = format_weights_table();
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("instagram"));
        assert!(lines[1].ends_with('4'));
        assert!(lines[2].starts_with("tiktok"));
        assert!(lines[2].ends_with('6'));
    }

    #[test]
    fn test_format_grade_table() {
        let result = format_grade_table(false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("S  >=120"));
        assert!(lines[0].ends_with("Exceeded Target"));
        assert!(lines[1].contains("90-119"));
        assert!(lines[5].starts_with("F  <30"));
    }
}
