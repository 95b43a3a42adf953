//! Small reStructuredText building blocks.

/// Underline characters per heading depth. Three levels are supported;
/// deeper nesting clamps to the last style.
const HEADING_STYLES: [char; 3] = ['=', '-', '~'];

/// Escape a schema name for display in running text.
pub fn escape(text: &str) -> String {
    text.replace('_', "\\_")
}

/// Capitalize the first character, used for auto-generated headings.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A heading with its underline, followed by a blank line.
pub fn heading(text: &str, level: usize) -> String {
    let style = HEADING_STYLES[level.min(HEADING_STYLES.len() - 1)];
    let underline: String = std::iter::repeat(style).take(text.chars().count()).collect();
    format!("{text}\n{underline}\n\n")
}

/// Render disjunction lists as bullets.
///
/// A single alternative renders as a plain bullet; several alternatives
/// render as one "at least one of the following" bullet with nested
/// sub-bullets. Leaves the buffer on a blank line.
pub fn push_disjunctions(buf: &mut String, lists: &[Vec<String>]) {
    for alternatives in lists {
        match alternatives.as_slice() {
            [] => {}
            [only] => {
                buf.push_str("- ");
                buf.push_str(&escape(only));
                buf.push('\n');
            }
            many => {
                buf.push_str("- at least one of the following:\n\n");
                for name in many {
                    buf.push_str("  - ");
                    buf.push_str(&escape(name));
                    buf.push('\n');
                }
                buf.push('\n');
            }
        }
    }
    if !buf.ends_with("\n\n") {
        buf.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::{capitalize, escape, heading, push_disjunctions};

    #[test]
    fn escapes_underscores() {
        assert_eq!(escape("number_of_atoms"), "number\\_of\\_atoms");
    }

    #[test]
    fn heading_underline_matches_text_width() {
        assert_eq!(heading("Results", 1), "Results\n-------\n\n");
    }

    #[test]
    fn heading_depth_clamps_to_deepest_style() {
        assert_eq!(heading("Deep", 7), "Deep\n~~~~\n\n");
    }

    #[test]
    fn capitalizes_category_labels() {
        assert_eq!(capitalize("results"), "Results");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn singleton_disjunction_is_a_plain_bullet() {
        let mut buf = String::new();
        push_disjunctions(&mut buf, &[vec!["x".to_string()]]);
        assert_eq!(buf, "- x\n\n");
    }

    #[test]
    fn wider_disjunction_nests_alternatives() {
        let mut buf = String::new();
        push_disjunctions(&mut buf, &[vec!["x".to_string(), "y".to_string()]]);
        assert_eq!(buf, "- at least one of the following:\n\n  - x\n  - y\n\n");
    }
}
