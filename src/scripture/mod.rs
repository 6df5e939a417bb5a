//! Scripture reference parsing and matching.
//!
//! Two textual syntaxes are accepted: full book names with optional leading
//! numeral ("Song of Solomon 1:1", "1 John 2:1-2") and canonical compact
//! codes ("JHN 6:1-5"). Parsing never panics; malformed input yields None,
//! never a partial result.

pub mod books;

pub use books::book_code;

/// A structured scripture reference. `verses` is None for chapter-level
/// references; otherwise an inclusive (start, end) range with end >= start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    pub book: String,
    pub chapter: u32,
    pub verses: Option<(u32, u32)>,
}

impl ParsedReference {
    /// Canonical compact rendering: "JHN 3:16-18", "JHN 3:16", "JHN 3".
    pub fn format(&self) -> String {
        match self.verses {
            Some((start, end)) if start != end => {
                format!("{} {}:{}-{}", self.book, self.chapter, start, end)
            }
            Some((start, _)) => format!("{} {}:{}", self.book, self.chapter, start),
            None => format!("{} {}", self.book, self.chapter),
        }
    }

    /// True when both references carry explicit verse numbers.
    pub fn has_verses(&self) -> bool {
        self.verses.is_some()
    }
}

/// Parse a free-text or compact reference. When a comma-separated list of
/// ranges is given ("JHN 6:1-5,10-12"), only the first range is parsed.
pub fn parse_reference(input: &str) -> Option<ParsedReference> {
    let first_range = input.split(',').next().unwrap_or(input).trim();

    let (book_part, tail) = first_range.rsplit_once(char::is_whitespace)?;
    let book = books::book_code(book_part)?;

    let (chapter_part, verse_part) = match tail.split_once(':') {
        Some((chapter, verses)) => (chapter, Some(verses)),
        None => (tail, None),
    };

    let chapter = parse_positive(chapter_part)?;
    let verses = match verse_part {
        Some(raw) => Some(parse_verse_range(raw)?),
        None => None,
    };

    Some(ParsedReference {
        book: book.to_string(),
        chapter,
        verses,
    })
}

/// Two references match when book and chapter are equal and either side is
/// chapter-level, or their verse ranges overlap.
pub fn references_match(a: &ParsedReference, b: &ParsedReference) -> bool {
    if a.book != b.book || a.chapter != b.chapter {
        return false;
    }

    match (a.verses, b.verses) {
        (Some((start_a, end_a)), Some((start_b, end_b))) => {
            start_a <= end_b && start_b <= end_a
        }
        _ => true,
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

fn parse_verse_range(raw: &str) -> Option<(u32, u32)> {
    match raw.split_once('-') {
        Some((start, end)) => {
            let start = parse_positive(start)?;
            let end = parse_positive(end)?;
            if end < start {
                return None;
            }
            Some((start, end))
        }
        None => {
            let verse = parse_positive(raw)?;
            Some((verse, verse))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> ParsedReference {
        parse_reference(input).unwrap_or_else(|| panic!("should parse: {input}"))
    }

    #[test]
    fn parses_full_names() {
        let reference = parsed("John 3:16");
        assert_eq!(reference.book, "JHN");
        assert_eq!(reference.chapter, 3);
        assert_eq!(reference.verses, Some((16, 16)));

        let reference = parsed("Song of Solomon 1:1");
        assert_eq!(reference.book, "SNG");
        assert_eq!(reference.chapter, 1);

        let reference = parsed("1 John 2:1-2");
        assert_eq!(reference.book, "1JN");
        assert_eq!(reference.verses, Some((1, 2)));
    }

    #[test]
    fn parses_compact_codes_and_chapter_only() {
        let reference = parsed("JHN 6:1-5");
        assert_eq!(reference.book, "JHN");
        assert_eq!(reference.verses, Some((1, 5)));

        let reference = parsed("ROM 8");
        assert_eq!(reference.book, "ROM");
        assert_eq!(reference.verses, None);
    }

    #[test]
    fn takes_first_range_of_comma_list() {
        let reference = parsed("JHN 6:1-5,10-12");
        assert_eq!(reference.verses, Some((1, 5)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_reference("").is_none());
        assert!(parse_reference("John").is_none());
        assert!(parse_reference("John three:16").is_none());
        assert!(parse_reference("John 3:sixteen").is_none());
        assert!(parse_reference("Hezekiah 3:16").is_none());
        assert!(parse_reference("John 0:1").is_none());
        assert!(parse_reference("John 3:16-2").is_none());
    }

    #[test]
    fn matches_on_chapter_and_verse_overlap() {
        let note = parsed("John 3:16");
        let session = parsed("JHN 3:14-18");
        assert!(references_match(&note, &session));

        let chapter_only = parsed("John 3");
        assert!(references_match(&note, &chapter_only));

        let other_chapter = parsed("John 4:16");
        assert!(!references_match(&note, &other_chapter));

        let disjoint = parsed("JHN 3:1-10");
        let tail = parsed("JHN 3:11-15");
        assert!(!references_match(&disjoint, &tail));
    }
}
