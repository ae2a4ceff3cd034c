/// Turns free-form model output into an ordered list of discrete phrases.
///
/// Splits on lines, strips numbered-list and bullet prefixes, and keeps at
/// most `count` entries whose remainder is longer than 10 characters. Never
/// returns an empty list: when nothing survives filtering, the whole input
/// is kept as a single entry so callers always have something to show.
pub fn parse_phrases(text: &str, count: usize) -> Vec<String> {
    let mut phrases = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let cleaned = match trimmed.chars().next() {
            Some(c) if c.is_ascii_digit() || c == '-' || c == '•' => trimmed
                .trim_start_matches(|c: char| {
                    c.is_ascii_digit()
                        || c == '-'
                        || c == '•'
                        || c == ')'
                        || c == '.'
                        || c.is_whitespace()
                })
                .trim(),
            _ => trimmed,
        };

        if cleaned.chars().count() > 10 {
            phrases.push(cleaned.to_string());
            if phrases.len() >= count {
                break;
            }
        }
    }

    if phrases.is_empty() {
        return vec![text.to_string()];
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_numbered_list_markers() {
        let text = "1. foo bar baz - explanation\n2. another phrase here - more";
        let phrases = parse_phrases(text, 10);
        assert_eq!(
            phrases,
            vec![
                "foo bar baz - explanation".to_string(),
                "another phrase here - more".to_string(),
            ]
        );
    }

    #[test]
    fn test_strips_bullet_markers() {
        let text = "- to take the plunge - to commit to something\n• a double-edged sword - has both benefits and drawbacks";
        let phrases = parse_phrases(text, 10);
        assert_eq!(phrases.len(), 2);
        assert!(phrases[0].starts_with("to take the plunge"));
        assert!(phrases[1].starts_with("a double-edged sword"));
    }

    #[test]
    fn test_never_returns_empty() {
        let text = "short\nlines\nonly";
        let phrases = parse_phrases(text, 10);
        assert_eq!(phrases, vec![text.to_string()]);
    }

    #[test]
    fn test_blank_input_wrapped_verbatim() {
        let phrases = parse_phrases("", 10);
        assert_eq!(phrases, vec!["".to_string()]);
    }

    #[test]
    fn test_respects_count_limit() {
        let text = (1..=15)
            .map(|i| format!("{}. a sufficiently long phrase number {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");

        let phrases = parse_phrases(&text, 10);
        assert_eq!(phrases.len(), 10);
        assert!(phrases[0].starts_with("a sufficiently long phrase number 1"));
    }

    #[test]
    fn test_preserves_order_and_skips_blank_lines() {
        let text = "1. first meaningful phrase\n\n\n2. second meaningful phrase";
        let phrases = parse_phrases(text, 10);
        assert_eq!(phrases.len(), 2);
        assert_eq!(phrases[0], "first meaningful phrase");
        assert_eq!(phrases[1], "second meaningful phrase");
    }

    #[test]
    fn test_unmarked_lines_kept_as_is() {
        let text = "a free-standing expression worth keeping";
        let phrases = parse_phrases(text, 10);
        assert_eq!(phrases, vec![text.to_string()]);
    }
}
