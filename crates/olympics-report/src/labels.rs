//! Axis ordering and display labels.
//!
//! Labels carry `\n` line breaks so a plotter can fit them on narrow axes.

/// Game-name columns above this count are labeled by year alone.
const COMPACT_LABEL_THRESHOLD: usize = 10;

/// Sort game names such as `"Tokyo 2020"` by their trailing token.
///
/// The sort is stable and compares the token as text.
pub fn sort_game_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = names.iter().map(|name| name.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| last_token(a).cmp(last_token(b)));
    sorted
}

fn last_token(value: &str) -> &str {
    value.split_whitespace().next_back().unwrap_or("")
}

/// `"1896"` becomes `"18\n96"`.
pub fn year_label(year: &str) -> String {
    match year.char_indices().nth_back(1) {
        Some((split, _)) if split > 0 => format!("{}\n{}", &year[..split], &year[split..]),
        _ => year.to_string(),
    }
}

/// Break a discipline label at its first space.
pub fn discipline_label(discipline: &str) -> String {
    discipline.replacen(' ', "\n", 1)
}

/// Shorten game-name labels to fit the number of columns.
///
/// Fewer than ten labels keep every word on its own line; otherwise only the
/// trailing year is kept.
pub fn compact_game_labels(labels: &[String]) -> Vec<String> {
    if labels.len() < COMPACT_LABEL_THRESHOLD {
        labels.iter().map(|label| label.replace(' ', "\n")).collect()
    } else {
        labels.iter().map(|label| last_token(label).to_string()).collect()
    }
}
