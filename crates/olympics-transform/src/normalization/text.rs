//! String-level normalization of names and event titles.

/// Event title corrections that also move the row to another discipline.
const DISCIPLINE_EVENT_FIXES: [(&str, &str, &str); 2] = [
    ("Baseball", "Baseball", "baseball men"),
    ("Softball", "Softball", "softball women"),
];

pub const RUGBY_SEVENS: &str = "Rugby Sevens";

const WOMEN_MARKER: &str = "Women's";
const MEN_MARKER: &str = "Men's";

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
///
/// `"JOHN o'neil"` becomes `"John O'Neil"`. Applying it twice gives the same
/// result as applying it once.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                // 'ß' upper-cases to "SS"; only the first letter stays capital.
                let mut upper = ch.to_uppercase();
                out.extend(upper.next());
                out.extend(upper.flat_map(char::to_lowercase));
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Discipline and event replacement for a Baseball or Softball event.
pub fn discipline_event_fix(event: &str) -> Option<(&'static str, &'static str)> {
    DISCIPLINE_EVENT_FIXES
        .iter()
        .find(|(raw, _, _)| *raw == event)
        .map(|(_, discipline, event)| (*discipline, *event))
}

/// Gender of a Rugby Sevens event, written as `rugby-7 men`, `Rugby Sevens Women`
/// and similar.
pub fn rugby_sevens_gender(event: &str) -> Option<&'static str> {
    let lower = event.trim().to_lowercase();
    let is_sevens = lower.contains("rugby") && (lower.contains("-7") || lower.contains("sevens"));
    if !is_sevens {
        return None;
    }
    if lower.contains("women") {
        Some("women")
    } else if lower.contains("men") {
        Some("men")
    } else {
        None
    }
}

/// Move a leading gender marker to the end and lower-case the title.
///
/// `"Women's 4 x 100m Relay"` becomes `"4 x 100m relay women"`. Markers are
/// matched case-sensitively, so normalized titles are left unchanged.
pub fn normalize_event_title(event: &str) -> String {
    let trimmed = event.trim();
    let moved = if let Some(rest) = trimmed.strip_prefix(WOMEN_MARKER) {
        format!("{} women", rest.trim())
    } else if let Some(rest) = trimmed.strip_prefix(MEN_MARKER) {
        format!("{} men", rest.trim())
    } else {
        trimmed.to_string()
    };
    moved.to_lowercase().trim().to_string()
}
