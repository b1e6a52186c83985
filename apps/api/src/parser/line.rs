//! Line classification shared by the content parser and the visual renderer.
//!
//! A single classifier replaces the ad hoc prefix tests that used to be
//! duplicated between the DOCX and PDF paths. Heading weight is decided by
//! leading `#` markers: exactly one marker is the document title, two or more
//! are section openers (level-2 and level-3 are deliberately identical).

/// One classified input line. Text is trimmed; heading markers and bullet
/// markers are already stripped from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `# Name` — the document title. Overwrites the record name directly.
    Title(&'a str),
    /// `## Section` or `### Section` — opens a new section.
    Heading(&'a str),
    /// `- item`, `• item`, or `* item` — a list item with its marker stripped.
    Bullet(&'a str),
    /// Any other non-empty line.
    Text(&'a str),
    Blank,
}

const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

/// Classifies a raw input line. Operates on the trimmed line.
pub fn classify(raw: &str) -> Line<'_> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix('#') {
        let text = rest.trim_start_matches('#').trim();
        if rest.starts_with('#') {
            return Line::Heading(text);
        }
        return Line::Title(text);
    }
    if let Some(stripped) = strip_bullet_marker(trimmed) {
        return Line::Bullet(stripped);
    }
    Line::Text(trimmed)
}

/// Strips a single leading bullet marker (`-`, `•`, `*`) plus following
/// whitespace. Returns `None` when the line carries no marker.
pub fn strip_bullet_marker(trimmed: &str) -> Option<&str> {
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if BULLET_MARKERS.contains(&first) {
        Some(chars.as_str().trim_start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_title_single_hash() {
        assert_eq!(classify("# Jane Doe"), Line::Title("Jane Doe"));
    }

    #[test]
    fn test_classify_title_without_space() {
        assert_eq!(classify("#Jane"), Line::Title("Jane"));
    }

    #[test]
    fn test_classify_level_two_and_three_are_headings() {
        assert_eq!(classify("## Skills"), Line::Heading("Skills"));
        assert_eq!(classify("### Skills"), Line::Heading("Skills"));
    }

    #[test]
    fn test_classify_bullet_markers() {
        assert_eq!(classify("- Python"), Line::Bullet("Python"));
        assert_eq!(classify("• Python"), Line::Bullet("Python"));
        assert_eq!(classify("* Python"), Line::Bullet("Python"));
    }

    #[test]
    fn test_classify_only_first_marker_is_stripped() {
        // A double marker strips one level only
        assert_eq!(classify("- - nested"), Line::Bullet("- nested"));
    }

    #[test]
    fn test_classify_blank_and_whitespace() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t"), Line::Blank);
    }

    #[test]
    fn test_classify_plain_text_is_trimmed() {
        assert_eq!(classify("  hello world  "), Line::Text("hello world"));
    }

    #[test]
    fn test_classify_hash_inside_text_is_not_heading() {
        assert_eq!(classify("C# developer"), Line::Text("C# developer"));
    }
}
