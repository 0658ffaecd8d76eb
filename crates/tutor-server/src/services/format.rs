//! Reflows raw model output into a single display line.
//!
//! Markdown emphasis and heading markers are dropped, list prefixes are
//! stripped, blank-line separated sections are joined with
//! [`SECTION_DELIMITER`] and whitespace runs collapse to one space.

/// Separator placed between blank-line delimited sections.
pub const SECTION_DELIMITER: &str = " | ";

/// Formats a raw completion for display. Never fails.
pub fn format_response(raw: &str) -> String {
    let text = raw.trim().replace("**", "").replace("##", "").replace('*', "");

    let mut sections: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                sections.push(current.join(" "));
                current.clear();
            }
            continue;
        }
        current.push(strip_list_marker(line));
    }

    if !current.is_empty() {
        sections.push(current.join(" "));
    }

    sections
        .join(SECTION_DELIMITER)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes an ordinal (`"1. "`, `"12."`) or bullet (`-`, `•`) prefix from a trimmed line.
fn strip_list_marker(line: &str) -> &str {
    if has_ordinal_prefix(line) {
        if let Some((_, rest)) = line.split_once('.') {
            return rest.trim();
        }
    }
    if let Some(rest) = line.strip_prefix(|c: char| c == '•' || c == '-') {
        return rest.trim();
    }
    line
}

/// Leading ASCII digit and a `.` among the first three characters.
/// `"100."` has its dot at index 3 and does not qualify.
fn has_ordinal_prefix(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit()) && line.chars().take(3).any(|c| c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(format_response(""), "");
        assert_eq!(format_response("   \n  "), "");
        assert_eq!(format_response("\n\n\t\n"), "");
    }

    #[test]
    fn strips_emphasis_markers() {
        assert_eq!(format_response("**Hello** world"), "Hello world");
        assert_eq!(format_response("*soft* and ***loud***"), "soft and loud");
        assert_eq!(format_response("## Title\nBody"), "Title Body");
    }

    #[test]
    fn triple_hash_keeps_one_hash() {
        assert_eq!(format_response("### Heading"), "# Heading");
    }

    #[test]
    fn consecutive_lines_share_a_section() {
        assert_eq!(
            format_response("1. First step\n2. Second step"),
            "First step Second step"
        );
    }

    #[test]
    fn blank_lines_split_sections() {
        assert_eq!(format_response("Para one.\n\nPara two."), "Para one. | Para two.");
        assert_eq!(format_response("A\n\n\n\nB"), "A | B");
    }

    #[test]
    fn trailing_blank_lines_add_no_segments() {
        assert_eq!(format_response("Only one.\n\n\n   \n"), "Only one.");
        assert_eq!(format_response("\n\nLead\n\n"), "Lead");
    }

    #[test]
    fn bullets_are_stripped() {
        assert_eq!(format_response("- item a\n- item b"), "item a item b");
        assert_eq!(format_response("• first\n•second"), "first second");
    }

    #[test]
    fn lone_bullet_contributes_nothing() {
        assert_eq!(format_response("a\n-\nb"), "a b");
        assert_eq!(format_response("•"), "");
    }

    #[test]
    fn ordinal_prefix_only_within_three_chars() {
        assert_eq!(format_response("10. ok\n100. not stripped"), "ok 100. not stripped");
        assert_eq!(format_response("12.tight"), "tight");
    }

    #[test]
    fn ordinal_detection_needs_leading_digit() {
        assert_eq!(format_response("a. not a list"), "a. not a list");
        assert_eq!(format_response("1) paren style"), "1) paren style");
        // decimal numbers at line start look like ordinals
        assert_eq!(format_response("3.14 is pi"), "14 is pi");
    }

    #[test]
    fn ordinal_takes_precedence_over_bullet() {
        assert_eq!(format_response("1.- dash after number"), "- dash after number");
    }

    #[test]
    fn indented_lists_and_crlf() {
        let raw = "  **Plan**\r\n   1. Read\r\n   - Practice\r\n\r\nKeep going!  ";
        assert_eq!(format_response(raw), "Plan Read Practice | Keep going!");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(format_response("too    many\tspaces"), "too many spaces");
    }

    #[test]
    fn full_completion() {
        let raw = "**Great question!** Recursion is a function calling itself.\n\n\
                   ## Steps\n\
                   1. Find the base case\n\
                   2. Reduce the problem\n\
                   - *Test* small inputs\n\n\
                   You've got this!\n";
        assert_eq!(
            format_response(raw),
            "Great question! Recursion is a function calling itself. | \
             Steps Find the base case Reduce the problem Test small inputs | You've got this!"
        );
    }

    #[test]
    fn formatted_text_is_stable() {
        for text in ["Para one. | Para two.", "Hello world", "Plain words only"] {
            assert_eq!(format_response(text), text);
            assert_eq!(format_response(&format_response(text)), text);
        }
    }
}
