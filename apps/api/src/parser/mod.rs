//! Resume content parser — turns a free-form or AI-rewritten text blob into a
//! structured [`ResumeRecord`].
//!
//! The parser is total: it never fails, and every list field is always present
//! (possibly empty) so downstream template substitution cannot trip over a
//! missing section. Known limitations preserved on purpose for behavior
//! compatibility with the shipped product:
//! - contact fields (email/phone/location) are only scanned in the first 5
//!   physical lines of the document, not the full text;
//! - the first `#` title line overwrites `name` unconditionally.

pub mod line;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::line::{classify, strip_bullet_marker, Line};

/// The canonical structured resume record. Constructed fresh on every parse;
/// never persisted — callers store raw text and re-derive the record on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_summary: String,
    pub work_experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    /// Sections whose heading matched no known keyword, keyed by the
    /// normalized heading (lowercased, whitespace → underscore). Nothing is
    /// silently dropped.
    #[serde(flatten)]
    pub extra_sections: BTreeMap<String, String>,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());
static CITY_STATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]+,\s*[A-Z]{2}").unwrap());
static CAP_PAIR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z]+\s+[A-Z][a-z]+").unwrap());

/// How many physical lines from the top of the document are scanned for
/// contact fields. Bounded lookahead avoids false positives from body text.
const CONTACT_SCAN_LINES: usize = 5;

/// Parses resume text into a [`ResumeRecord`]. Total over all inputs.
pub fn parse(text: &str) -> ResumeRecord {
    let mut record = ResumeRecord::default();
    let mut current_section = String::new();
    let mut buffer: Vec<String> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        match classify(raw) {
            Line::Title(name) => {
                record.name = name.to_string();
            }
            Line::Heading(heading) => {
                if !current_section.is_empty() && !buffer.is_empty() {
                    save_section(&mut record, &current_section, &buffer);
                }
                current_section = heading.to_lowercase();
                buffer.clear();
            }
            Line::Bullet(_) | Line::Text(_) => {
                if index < CONTACT_SCAN_LINES {
                    scan_contact_fields(&mut record, trimmed);
                }
                buffer.push(trimmed.to_string());
            }
            Line::Blank => {}
        }
    }

    if !current_section.is_empty() && !buffer.is_empty() {
        save_section(&mut record, &current_section, &buffer);
    }

    record
}

/// Resolves a closed section buffer into the record by keyword classification
/// (case-insensitive substring match on the normalized heading key).
fn save_section(record: &mut ResumeRecord, section: &str, content: &[String]) {
    let key = normalize_section_key(section);

    if key.contains("summary") || key.contains("profile") || key.contains("objective") {
        record.profile_summary = content.join("\n");
    } else if key.contains("experience") || key.contains("work") {
        record.work_experience = parse_list_items(content);
    } else if key.contains("education") {
        record.education = parse_list_items(content);
    } else if key.contains("skill") {
        record.skills = parse_list_items(content);
    } else if key.contains("certif") {
        record.certifications = parse_list_items(content);
    } else if key.contains("achievement") || key.contains("award") {
        record.achievements = parse_list_items(content);
    } else {
        record.extra_sections.insert(key, content.join("\n"));
    }
}

/// Lowercases a heading and collapses whitespace runs into underscores.
fn normalize_section_key(section: &str) -> String {
    section
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Maps buffered lines into list entries: one leading bullet marker stripped,
/// empty results discarded.
fn parse_list_items(content: &[String]) -> Vec<String> {
    content
        .iter()
        .map(|item| {
            strip_bullet_marker(item.trim())
                .unwrap_or_else(|| item.trim())
                .trim()
                .to_string()
        })
        .filter(|item| !item.is_empty())
        .collect()
}

/// Runs the three independent contact scans on one line. Each field is
/// first-match-wins: once populated it is never overwritten.
fn scan_contact_fields(record: &mut ResumeRecord, line: &str) {
    if record.email.is_empty() {
        if let Some(m) = EMAIL_RE.find(line) {
            record.email = m.as_str().to_string();
        }
    }
    if record.phone.is_empty() {
        if let Some(m) = PHONE_RE.find(line) {
            record.phone = m.as_str().to_string();
        }
    }
    if record.location.is_empty() {
        if let Some(location) = extract_location(line) {
            record.location = location;
        }
    }
}

/// Picks the first `|`-separated segment that looks geographic: either a
/// `City, ST` pattern or two consecutive capitalized words.
fn extract_location(line: &str) -> Option<String> {
    line.split('|')
        .map(str::trim)
        .find(|part| CITY_STATE_RE.is_match(part) || CAP_PAIR_RE.is_match(part))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── totality ─────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_empty_string() {
        let record = parse("");
        assert_eq!(record, ResumeRecord::default());
    }

    #[test]
    fn test_parse_single_character() {
        let record = parse("x");
        assert_eq!(record.name, "");
        assert!(record.work_experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.certifications.is_empty());
        assert!(record.achievements.is_empty());
    }

    #[test]
    fn test_parse_no_headings_yields_empty_sections() {
        let record = parse("just some text\nspread over lines\nwith no structure");
        assert!(record.profile_summary.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.extra_sections.is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "# Jane\njane@x.com\n### Skills\n- Go";
        assert_eq!(parse(input), parse(input));
    }

    // ── section classification ───────────────────────────────────────────────

    #[test]
    fn test_bullet_stripping_dash_and_unicode() {
        let record = parse("### Skills\n- Python\n- Go");
        assert_eq!(record.skills, vec!["Python", "Go"]);

        let record = parse("### Skills\n• Python");
        assert_eq!(record.skills, vec!["Python"]);
    }

    #[test]
    fn test_unknown_section_passthrough() {
        let record = parse("### Hobbies\nChess\nReading");
        assert_eq!(
            record.extra_sections.get("hobbies"),
            Some(&"Chess\nReading".to_string())
        );
        assert!(record.work_experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.certifications.is_empty());
        assert!(record.achievements.is_empty());
    }

    #[test]
    fn test_unknown_section_key_is_normalized() {
        let record = parse("### Volunteer  Work History Extra\nFood bank");
        // "work" keyword match would win — pick a heading without keywords
        let record2 = parse("### Side  Projects\nBuilt a compiler");
        assert!(record2
            .extra_sections
            .contains_key("side_projects"));
        // "work" substring routes the first heading into work_experience
        assert_eq!(record.work_experience, vec!["Food bank"]);
    }

    #[test]
    fn test_summary_joins_lines_with_newlines() {
        let record = parse("### Profile Summary\nFirst line.\nSecond line.");
        assert_eq!(record.profile_summary, "First line.\nSecond line.");
    }

    #[test]
    fn test_objective_heading_maps_to_summary() {
        let record = parse("### Career Objective\nShip software.");
        assert_eq!(record.profile_summary, "Ship software.");
    }

    #[test]
    fn test_certificate_and_award_keywords() {
        let record = parse("### Certificates\n- AWS SAA\n### Awards\n- Dean's List");
        assert_eq!(record.certifications, vec!["AWS SAA"]);
        assert_eq!(record.achievements, vec!["Dean's List"]);
    }

    #[test]
    fn test_level_two_heading_flushes_previous_section() {
        // ## and ### are both section openers; either closes the open buffer
        let record = parse("### Skills\n- Go\n## Education\n- BSc");
        assert_eq!(record.skills, vec!["Go"]);
        assert_eq!(record.education, vec!["BSc"]);
    }

    #[test]
    fn test_empty_lines_discarded_from_list_fields() {
        let record = parse("### Skills\n- Go\n\n-   \n- Rust");
        assert_eq!(record.skills, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_title_overwrites_name_unconditionally() {
        let record = parse("# First Name\n### Summary\nText\n# Second Name");
        assert_eq!(record.name, "Second Name");
    }

    // ── contact extraction ───────────────────────────────────────────────────

    #[test]
    fn test_bounded_contact_lookahead() {
        let early = parse("jane@x.com\n### Summary\nHello");
        assert_eq!(early.email, "jane@x.com");

        // Same token on line 7 (index 6) is ordinary content
        let late = parse("a\nb\nc\nd\ne\nf\njane@x.com");
        assert_eq!(late.email, "");
    }

    #[test]
    fn test_first_match_wins_email() {
        let record = parse("a@x.com\nb@y.com");
        assert_eq!(record.email, "a@x.com");
    }

    #[test]
    fn test_phone_extraction_formats() {
        assert_eq!(parse("555-123-4567").phone, "555-123-4567");
        assert_eq!(parse("555.123.4567").phone, "555.123.4567");
        assert_eq!(parse("555 123 4567").phone, "555 123 4567");
        assert_eq!(parse("5551234567").phone, "5551234567");
    }

    #[test]
    fn test_location_city_state_segment() {
        let record = parse("jane@x.com | 555-123-4567 | Austin, TX");
        assert_eq!(record.location, "Austin, TX");
    }

    #[test]
    fn test_location_capitalized_pair() {
        let record = parse("New York");
        assert_eq!(record.location, "New York");
    }

    #[test]
    fn test_heading_lines_do_not_feed_contact_scan() {
        let record = parse("### About a@x.com\nplain body");
        assert_eq!(record.email, "");
    }

    // ── end to end ───────────────────────────────────────────────────────────

    #[test]
    fn test_end_to_end_scenario() {
        let input = "# Jane Doe\njane@x.com\n### Summary\nExperienced engineer.\n### Skills\n- Go\n- Rust";
        let record = parse(input);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@x.com");
        assert_eq!(record.profile_summary, "Experienced engineer.");
        assert_eq!(record.skills, vec!["Go", "Rust"]);
        assert!(record.work_experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.certifications.is_empty());
        assert!(record.achievements.is_empty());
    }

    #[test]
    fn test_full_resume_round() {
        let input = "\
# Jane Doe
jane@x.com | 555-123-4567 | Austin, TX
### Summary
Engineer with ten years of experience.
### Work Experience
- Led the platform team at Acme
- Shipped the billing rewrite
### Education
- BSc Computer Science
### Skills
- Rust
- Go
### Certifications
- AWS Solutions Architect
### Achievements
- Employee of the year";
        let record = parse(input);
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@x.com");
        assert_eq!(record.phone, "555-123-4567");
        assert_eq!(record.location, "Austin, TX");
        assert_eq!(record.work_experience.len(), 2);
        assert_eq!(record.education, vec!["BSc Computer Science"]);
        assert_eq!(record.skills, vec!["Rust", "Go"]);
        assert_eq!(record.certifications, vec!["AWS Solutions Architect"]);
        assert_eq!(record.achievements, vec!["Employee of the year"]);
        assert!(record.extra_sections.is_empty());
    }

    #[test]
    fn test_serialized_record_flattens_extra_sections() {
        let record = parse("### Hobbies\nChess");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["hobbies"], "Chess");
        assert_eq!(json["skills"], serde_json::json!([]));
    }
}
