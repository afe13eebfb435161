//! Skill id transliteration and sort keys
//!
//! Ids synthesized from display names fold German letters into their ASCII
//! transliterations so they survive any host serialization. The sort key
//! folds umlauts to their base letters instead, approximating German
//! dictionary collation.

use crate::core::types::SkillId;

/// Derive a skill id from a display name
///
/// Lowercases, collapses whitespace runs to `_`, expands `&` to `und` and
/// transliterates umlauts: `"Bekehren & Überzeugen"` becomes
/// `bekehren_und_ueberzeugen`.
pub fn sanitize_id(name: &str) -> SkillId {
    let lower = name.trim().to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        match c {
            '&' => out.push_str("und"),
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            _ => out.push(c),
        }
    }
    SkillId::new(out)
}

/// Collation key for sorting skills by display name
///
/// Umlauts sort with their base letters so `Überreden` lands between
/// `Tierkunde` and `Verbergen`, not after `Zechen`.
pub fn collation_key(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    let mut key = String::with_capacity(lower.len());
    for c in lower.chars() {
        match c {
            'ä' => key.push('a'),
            'ö' => key.push('o'),
            'ü' => key.push('u'),
            'ß' => key.push_str("ss"),
            _ => key.push(c),
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_name() {
        assert_eq!(sanitize_id("Klettern").as_str(), "klettern");
    }

    #[test]
    fn test_sanitize_spaces_and_ampersand() {
        assert_eq!(
            sanitize_id("Bekehren & Überzeugen").as_str(),
            "bekehren_und_ueberzeugen"
        );
        assert_eq!(
            sanitize_id("Brett- & Glücksspiel").as_str(),
            "brett-_und_gluecksspiel"
        );
    }

    #[test]
    fn test_sanitize_umlauts() {
        assert_eq!(sanitize_id("Fährtensuchen").as_str(), "faehrtensuchen");
        assert_eq!(sanitize_id("Götter & Kulte").as_str(), "goetter_und_kulte");
        assert_eq!(sanitize_id("Schlösserknacken").as_str(), "schloesserknacken");
    }

    #[test]
    fn test_sanitize_collapses_whitespace_runs() {
        assert_eq!(sanitize_id("Heilkunde  Gift").as_str(), "heilkunde_gift");
        assert_eq!(sanitize_id("  Reiten  ").as_str(), "reiten");
    }

    #[test]
    fn test_collation_folds_umlauts() {
        let mut names = vec!["Zechen", "Überreden", "Tanzen"];
        names.sort_by_key(|n| collation_key(n));
        assert_eq!(names, vec!["Tanzen", "Überreden", "Zechen"]);
    }
}
