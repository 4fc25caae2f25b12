pub mod formatter;
pub mod report;

pub use formatter::{
    format_count, format_grade, format_grade_table, format_leaderboard, format_post_detail,
    format_score, format_summary, format_tsv, format_weights_table, should_use_colors,
};
pub use report::{save_report, Report};
