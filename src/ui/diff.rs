use crate::domain::services::{DiffResult, DiffTag};

/// Render a manifest diff as unified-style text with line numbers.
pub fn render_unified_diff_with_line_numbers(path: &str, diff: &DiffResult) -> String {
    let max_line = diff
        .lines
        .iter()
        .filter_map(|l| l.old_line.max(l.new_line))
        .max()
        .unwrap_or(1);
    let width = max_line.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("--- a/{}\n", path));
    out.push_str(&format!("+++ b/{}\n", path));

    for line in &diff.lines {
        let sign = match line.tag {
            DiffTag::Delete => "-",
            DiffTag::Insert => "+",
            DiffTag::Equal => " ",
        };
        let old_col = line
            .old_line
            .map(|n| format!("{:>width$}", n, width = width))
            .unwrap_or_else(|| " ".repeat(width));
        let new_col = line
            .new_line
            .map(|n| format!("{:>width$}", n, width = width))
            .unwrap_or_else(|| " ".repeat(width));

        out.push_str(&format!("{old_col} {new_col} {sign} {}\n", line.content));
    }

    out
}
