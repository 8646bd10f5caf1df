//! SQL-style LIKE pattern matching
//!
//! `%` matches any sequence (including empty), `_` matches exactly one
//! character. Case folding is the caller's concern: the compiler lowers
//! the pattern once at compile time and the predicate lowers the candidate
//! value at match time, so insensitive matching is symmetric.

/// Matches a value against a `%`/`_` wildcard pattern
pub fn like_match(value: &str, pattern: &str) -> bool {
    let value: Vec<char> = value.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    match_from(&value, &pattern)
}

fn match_from(value: &[char], pattern: &[char]) -> bool {
    match pattern.first() {
        None => value.is_empty(),
        Some('%') => {
            if pattern.len() == 1 {
                return true; // Trailing % matches everything
            }
            // Try the rest of the pattern at every suffix position
            for start in 0..=value.len() {
                if match_from(&value[start..], &pattern[1..]) {
                    return true;
                }
            }
            false
        }
        Some('_') => !value.is_empty() && match_from(&value[1..], &pattern[1..]),
        Some(p) => match value.first() {
            Some(v) if v == p => match_from(&value[1..], &pattern[1..]),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_match() {
        assert!(like_match("Smith", "Smith"));
        assert!(!like_match("Smith", "smith"));
        assert!(!like_match("Smith", "Smit"));
    }

    #[test]
    fn test_percent_wildcard() {
        assert!(like_match("Johnson", "%son"));
        assert!(like_match("Wilson", "%son"));
        assert!(!like_match("Smith", "%son"));
        assert!(like_match("Johnson", "John%"));
        assert!(like_match("abcabc", "%abc"));
        assert!(like_match("anything", "%"));
        assert!(like_match("", "%"));
    }

    #[test]
    fn test_underscore_wildcard() {
        assert!(like_match("cat", "c_t"));
        assert!(!like_match("cart", "c_t"));
        assert!(!like_match("ct", "c_t"));
    }

    #[test]
    fn test_infix_pattern() {
        assert!(like_match("xaby", "%ab%"));
        assert!(like_match("ab", "%ab%"));
        assert!(!like_match("axb", "%ab%"));
    }

    #[test]
    fn test_multiple_percents() {
        assert!(like_match("a-b-c", "a%b%c"));
        assert!(like_match("abc", "a%b%c"));
        assert!(!like_match("acb", "a%b%c"));
    }

    #[test]
    fn test_empty_pattern() {
        assert!(like_match("", ""));
        assert!(!like_match("x", ""));
    }
}
