//! Canonical book lookup table.
//!
//! Maps full book names (case/whitespace-insensitive, common aliases
//! included) to the canonical 3-character codes used everywhere downstream.
//! Compact codes themselves ("JHN", "1jn") also resolve.

/// (accepted name, canonical code). Names are stored pre-normalized:
/// lowercase, single spaces.
const BOOKS: &[(&str, &str)] = &[
    ("genesis", "GEN"),
    ("exodus", "EXO"),
    ("leviticus", "LEV"),
    ("numbers", "NUM"),
    ("deuteronomy", "DEU"),
    ("joshua", "JOS"),
    ("judges", "JDG"),
    ("ruth", "RUT"),
    ("1 samuel", "1SA"),
    ("2 samuel", "2SA"),
    ("1 kings", "1KI"),
    ("2 kings", "2KI"),
    ("1 chronicles", "1CH"),
    ("2 chronicles", "2CH"),
    ("ezra", "EZR"),
    ("nehemiah", "NEH"),
    ("esther", "EST"),
    ("job", "JOB"),
    ("psalm", "PSA"),
    ("psalms", "PSA"),
    ("proverbs", "PRO"),
    ("ecclesiastes", "ECC"),
    ("song of solomon", "SNG"),
    ("song of songs", "SNG"),
    ("isaiah", "ISA"),
    ("jeremiah", "JER"),
    ("lamentations", "LAM"),
    ("ezekiel", "EZK"),
    ("daniel", "DAN"),
    ("hosea", "HOS"),
    ("joel", "JOL"),
    ("amos", "AMO"),
    ("obadiah", "OBA"),
    ("jonah", "JON"),
    ("micah", "MIC"),
    ("nahum", "NAM"),
    ("habakkuk", "HAB"),
    ("zephaniah", "ZEP"),
    ("haggai", "HAG"),
    ("zechariah", "ZEC"),
    ("malachi", "MAL"),
    ("matthew", "MAT"),
    ("mark", "MRK"),
    ("luke", "LUK"),
    ("john", "JHN"),
    ("acts", "ACT"),
    ("romans", "ROM"),
    ("1 corinthians", "1CO"),
    ("2 corinthians", "2CO"),
    ("galatians", "GAL"),
    ("ephesians", "EPH"),
    ("philippians", "PHP"),
    ("colossians", "COL"),
    ("1 thessalonians", "1TH"),
    ("2 thessalonians", "2TH"),
    ("1 timothy", "1TI"),
    ("2 timothy", "2TI"),
    ("titus", "TIT"),
    ("philemon", "PHM"),
    ("hebrews", "HEB"),
    ("james", "JAS"),
    ("1 peter", "1PE"),
    ("2 peter", "2PE"),
    ("1 john", "1JN"),
    ("2 john", "2JN"),
    ("3 john", "3JN"),
    ("jude", "JUD"),
    ("revelation", "REV"),
];

/// Resolve a book name or compact code to its canonical code.
/// Matching is case-insensitive and collapses runs of whitespace.
pub fn book_code(name: &str) -> Option<&'static str> {
    let normalized = normalize(name);
    if normalized.is_empty() {
        return None;
    }

    for (alias, code) in BOOKS {
        if *alias == normalized || code.eq_ignore_ascii_case(&normalized) {
            return Some(code);
        }
    }

    None
}

fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_full_names_case_insensitively() {
        assert_eq!(book_code("John"), Some("JHN"));
        assert_eq!(book_code("song OF solomon"), Some("SNG"));
        assert_eq!(book_code("  1   john "), Some("1JN"));
    }

    #[test]
    fn resolves_compact_codes() {
        assert_eq!(book_code("JHN"), Some("JHN"));
        assert_eq!(book_code("1jn"), Some("1JN"));
        assert_eq!(book_code("rom"), Some("ROM"));
    }

    #[test]
    fn rejects_unknown_books() {
        assert_eq!(book_code("Hezekiah"), None);
        assert_eq!(book_code(""), None);
    }
}
