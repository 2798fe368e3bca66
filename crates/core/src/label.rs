//! Place-label formatting: keep a wrapped label's `" / "` joint from
//! stranding a lone slash at the start or end of a visual line.

const NBSP: char = '\u{00a0}';
const SEPARATOR: &str = " / ";

/// Format a compound place label (`"A / B"`) for display.
///
/// The label is split on the literal `" / "`. A single segment comes
/// back unchanged. With two or more, the joint binds to the shorter
/// neighbor: if the last word of the first segment is strictly shorter
/// than the first word of the second, the space before the slash becomes
/// non-breaking (`"\u{00a0}/ "`), otherwise the space after it does
/// (`" /\u{00a0}"`). Only the first joint is treated; any further
/// segments are rejoined with the plain separator.
pub fn break_place_label(label: &str) -> String {
    let names: Vec<&str> = label.split(SEPARATOR).collect();
    if names.len() < 2 {
        return label.to_string();
    }

    let last_of_first = names[0].split_whitespace().next_back().unwrap_or("");
    let first_of_second = names[1].split_whitespace().next().unwrap_or("");
    let sep = if last_of_first.chars().count() < first_of_second.chars().count() {
        format!("{NBSP}/ ")
    } else {
        format!(" /{NBSP}")
    };

    let mut text = names[0].to_string();
    text.push_str(&sep);
    text.push_str(&names[1..].join(SEPARATOR));
    text
}
