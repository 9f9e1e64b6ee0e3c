//! URL-safe identifiers derived from a member's display name.
//!
//! `distributor_slug` is the canonical algorithm for referral attribution.
//! `compact_slug` survives from an older share surface and is kept only for
//! links already in circulation; new links must not use it, since the two
//! algorithms produce different URLs for the same member.

use unicode_normalization::UnicodeNormalization;

/// Canonical referral slug: the first two whitespace-delimited tokens of the
/// name (one if only one exists), lowercased, accents folded to their base
/// letters, everything outside `[a-z0-9]` dropped, tokens joined by single
/// hyphens.
///
/// The output is already in the canonical character set, so the function is
/// idempotent. Empty input and names that collapse entirely (for example
/// non-Latin scripts) yield an empty string; the caller falls back to the
/// member's opaque id.
pub fn distributor_slug(full_name: &str) -> String {
    let head: Vec<&str> = full_name.split_whitespace().take(2).collect();
    if head.is_empty() {
        return String::new();
    }

    slugify(&head.join(" "))
}

/// Legacy compact slug: lowercase, strip everything outside `[a-z0-9]`, clamp
/// to 15 characters. No accent folding, no hyphens. Superseded by
/// [`distributor_slug`]; kept so previously shared links keep resolving.
pub fn compact_slug(full_name: &str) -> String {
    full_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .take(15)
        .collect()
}

fn slugify(input: &str) -> String {
    let folded: String = input
        .to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();

    // Hyphens count as separators so an already-slugged name survives a
    // second pass unchanged.
    let cleaned: String = folded
        .chars()
        .map(|c| if c.is_whitespace() || c == '-' { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    // split_whitespace collapses runs and drops leading/trailing separators,
    // so the join can never produce doubled or dangling hyphens.
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_first_two_tokens_and_strips_accents() {
        assert_eq!(distributor_slug("María José Pérez"), "maria-jose");
    }

    #[test]
    fn single_token_names_work() {
        assert_eq!(distributor_slug("Alejandro"), "alejandro");
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_slug() {
        assert_eq!(distributor_slug(""), "");
        assert_eq!(distributor_slug("   "), "");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(distributor_slug("O'Brien, Jr."), "obrien-jr");
    }

    #[test]
    fn slugged_output_passes_through_unchanged() {
        assert_eq!(distributor_slug("maria-jose"), "maria-jose");
        assert_eq!(
            distributor_slug(&distributor_slug("María José Pérez")),
            "maria-jose"
        );
    }

    #[test]
    fn non_latin_scripts_collapse_to_empty() {
        assert_eq!(distributor_slug("张伟"), "");
    }

    #[test]
    fn output_is_canonical() {
        for name in ["María José Pérez", "  Juan   Camilo  ", "Ñoño D10s"] {
            let slug = distributor_slug(name);
            assert_eq!(distributor_slug(&slug), slug, "not idempotent for {name:?}");
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unexpected character in {slug:?}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        }
    }

    #[test]
    fn compact_slug_clamps_to_fifteen_chars() {
        assert_eq!(compact_slug("Juan Camilo Restrepo Villa"), "juancamilorestr");
        assert_eq!(compact_slug("María"), "mara");
    }
}
