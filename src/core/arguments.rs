//! Tokenizing of raw jazzy argument strings
//!
//! The `args` input arrives as one opaque string. It is split into proper
//! tokens (whitespace-separated, quotes respected) so flags are matched by
//! exact token instead of substring search, which would otherwise let
//! `--module` pass for `-o`.

/// Split a raw argument string into tokens.
///
/// Single and double quoted spans keep their spaces and lose their quotes.
/// An unterminated quote swallows the remainder of the string as one token.
pub fn split_args(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_token = true;
                }
                c if c.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                c => {
                    current.push(c);
                    in_token = true;
                }
            },
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

/// Look up the value following a flag, trying each spelling in order.
///
/// The first spelling that matches a token wins, so the more specific
/// `--output` must be listed before its `-o` alias. A flag in final position
/// has no value and yields `None`.
pub fn flag_value<'a>(tokens: &'a [String], flags: &[&str]) -> Option<&'a str> {
    for flag in flags {
        if let Some(position) = tokens.iter().position(|token| token == flag) {
            return tokens.get(position + 1).map(String::as_str);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &str) -> Vec<String> {
        split_args(raw)
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(
            tokens("--clean --output docs"),
            vec!["--clean", "--output", "docs"]
        );
    }

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(tokens("  a \t b  "), vec!["a", "b"]);
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }

    #[test]
    fn test_split_respects_quotes() {
        assert_eq!(
            tokens(r#"--title "My Project" --author 'Jane Doe'"#),
            vec!["--title", "My Project", "--author", "Jane Doe"]
        );
    }

    #[test]
    fn test_split_unterminated_quote_takes_remainder() {
        assert_eq!(tokens(r#"--title "My Proj"#), vec!["--title", "My Proj"]);
    }

    #[test]
    fn test_flag_value_returns_following_token() {
        let tokens = tokens("--module Foo --output site/docs");
        assert_eq!(flag_value(&tokens, &["--output", "-o"]), Some("site/docs"));
    }

    #[test]
    fn test_flag_value_prefers_first_spelling() {
        let tokens = tokens("-o short --output long");
        assert_eq!(flag_value(&tokens, &["--output", "-o"]), Some("long"));
    }

    #[test]
    fn test_flag_value_exact_match_only() {
        // `--module` contains the substring "-o" but is not the flag
        let tokens = tokens("--module Foo");
        assert_eq!(flag_value(&tokens, &["--output", "-o"]), None);
    }

    #[test]
    fn test_flag_value_in_final_position() {
        let tokens = tokens("--clean --output");
        assert_eq!(flag_value(&tokens, &["--output", "-o"]), None);
    }

    #[test]
    fn test_flag_value_stops_at_next_token() {
        let tokens = tokens("--output docs --clean");
        assert_eq!(flag_value(&tokens, &["--output", "-o"]), Some("docs"));
    }
}
