//! Name-based exemption.

/// `true` when `name` ends with any of `suffixes`. Case-sensitive, no trimming.
///
/// An empty suffix list exempts nothing; a name equal to a suffix is exempt.
pub fn is_suffix_exempt<S: AsRef<str>>(name: &str, suffixes: &[S]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_match_exempts() {
        assert!(is_suffix_exempt("ButtonProps", &["Props"]));
        assert!(is_suffix_exempt("UserDto", &["Props", "Dto"]));
        assert!(!is_suffix_exempt("UserId", &["Props"]));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!is_suffix_exempt("Buttonprops", &["Props"]));
        assert!(!is_suffix_exempt("BUTTONPROPS", &["Props"]));
    }

    #[test]
    fn whole_name_equal_to_suffix_is_exempt() {
        assert!(is_suffix_exempt("Props", &["Props"]));
    }

    #[test]
    fn suffix_must_be_at_the_end() {
        assert!(!is_suffix_exempt("PropsHolder", &["Props"]));
    }

    #[test]
    fn empty_suffix_list_exempts_nothing() {
        let none: [&str; 0] = [];
        assert!(!is_suffix_exempt("ButtonProps", &none));
        assert!(!is_suffix_exempt("", &none));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert!(!is_suffix_exempt("ButtonProps", &["Props "]));
    }

    #[test]
    fn accepts_owned_suffixes() {
        let suffixes = vec!["Props".to_string()];
        assert!(is_suffix_exempt("CardProps", &suffixes));
    }
}
