//! Locale-aware string ordering for directory display names.
//!
//! Approximates root-locale collation with four levels:
//!
//! 1. base letters, ignoring case and accents (`"eclair" == "Éclair"`)
//! 2. unaccented before accented
//! 3. lowercase before uppercase
//! 4. raw code points, so the order is total and consistent with `Eq`

use std::cmp::Ordering;

use crate::domain::foundation::fold_latin;

/// Compares two strings the way a user expects a name list to be ordered.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| a.chars().map(is_accented).cmp(b.chars().map(is_accented)))
        .then_with(|| a.chars().map(is_upper).cmp(b.chars().map(is_upper)))
        .then_with(|| a.cmp(b))
}

/// Character class: whitespace, punctuation, digits, letters, everything else.
fn primary_weight(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_whitespace()) {
        1
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        4
    };
    (class, base_letter(c))
}

fn base_letter(c: char) -> char {
    let folded = fold_latin(c).unwrap_or(c);
    folded.to_lowercase().next().unwrap_or(folded)
}

fn is_accented(c: char) -> bool {
    !c.is_ascii() && fold_latin(c).is_some()
}

fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| locale_cmp(a, b));
        names
    }

    #[test]
    fn ignores_case_at_first_level() {
        assert_eq!(sorted(&["bravo", "Alpha", "charlie"]), ["Alpha", "bravo", "charlie"]);
    }

    #[test]
    fn accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Zoe", "Émile", "Eric", "Adam"]),
            ["Adam", "Émile", "Eric", "Zoe"]
        );
    }

    #[test]
    fn unaccented_precedes_accented_on_tie() {
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn lowercase_precedes_uppercase_on_tie() {
        assert_eq!(locale_cmp("alpha", "Alpha"), Ordering::Less);
        assert_eq!(locale_cmp("Alpha", "alpha"), Ordering::Greater);
    }

    #[test]
    fn shorter_prefix_sorts_first() {
        assert_eq!(locale_cmp("Ann", "Anna"), Ordering::Less);
    }

    #[test]
    fn space_sorts_before_letters() {
        assert_eq!(sorted(&["Mary Ann", "Maryann"]), ["Mary Ann", "Maryann"]);
    }

    #[test]
    fn equal_only_for_identical_strings() {
        assert_eq!(locale_cmp("Same", "Same"), Ordering::Equal);
        assert_ne!(locale_cmp("same", "Same"), Ordering::Equal);
    }
}
