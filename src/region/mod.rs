//! Region codes for Brazilian municipalities.
//!
//! IBGE municipality codes are 7-digit numeric identifiers kept as text so
//! the 2-character state prefix survives intact. The first two digits encode
//! the federative unit (UF).

/// Length of a full municipality code.
pub const MUNICIPALITY_CODE_LEN: usize = 7;

/// Length of the state (UF) prefix of a municipality code.
pub const STATE_PREFIX_LEN: usize = 2;

/// IBGE state-code prefix to UF abbreviation, all 27 federative units.
pub const STATE_PREFIXES: [(&str, &str); 27] = [
    ("11", "RO"),
    ("12", "AC"),
    ("13", "AM"),
    ("14", "RR"),
    ("15", "PA"),
    ("16", "AP"),
    ("17", "TO"),
    ("21", "MA"),
    ("22", "PI"),
    ("23", "CE"),
    ("24", "RN"),
    ("25", "PB"),
    ("26", "PE"),
    ("27", "AL"),
    ("28", "SE"),
    ("29", "BA"),
    ("31", "MG"),
    ("32", "ES"),
    ("33", "RJ"),
    ("35", "SP"),
    ("41", "PR"),
    ("42", "SC"),
    ("43", "RS"),
    ("50", "MS"),
    ("51", "MT"),
    ("52", "GO"),
    ("53", "DF"),
];

/// Zero-pad a municipality code to its full width.
/// Codes longer than the full width are kept as-is.
pub fn pad_code(code: &str) -> String {
    format!("{:0>width$}", code, width = MUNICIPALITY_CODE_LEN)
}

/// The state prefix of a (padded) municipality code.
/// If the code is shorter than the prefix, the whole code is returned.
pub fn state_prefix(code: &str) -> &str {
    &code[..code.len().min(STATE_PREFIX_LEN)]
}

/// Resolve a 2-character state prefix to its UF abbreviation.
/// Unknown prefixes resolve to `None`, never an error.
pub fn state_abbr(prefix: &str) -> Option<&'static str> {
    STATE_PREFIXES
        .iter()
        .find(|(code, _)| *code == prefix)
        .map(|(_, uf)| *uf)
}

/// Resolve a full municipality code to its UF abbreviation.
pub fn state_abbr_of_code(code: &str) -> Option<&'static str> {
    state_abbr(state_prefix(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_all_27_federative_units() {
        assert_eq!(STATE_PREFIXES.len(), 27);

        // Prefixes and abbreviations are unique.
        let mut prefixes: Vec<_> = STATE_PREFIXES.iter().map(|(p, _)| *p).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), 27);

        let mut abbrs: Vec<_> = STATE_PREFIXES.iter().map(|(_, a)| *a).collect();
        abbrs.sort_unstable();
        abbrs.dedup();
        assert_eq!(abbrs.len(), 27);
    }

    #[test]
    fn resolution_is_total_over_the_table() {
        for (prefix, uf) in STATE_PREFIXES {
            assert_eq!(state_abbr(prefix), Some(uf));
        }
    }

    #[test]
    fn known_prefixes_resolve() {
        assert_eq!(state_abbr("35"), Some("SP"));
        assert_eq!(state_abbr("33"), Some("RJ"));
        assert_eq!(state_abbr("53"), Some("DF"));
    }

    #[test]
    fn unknown_prefix_resolves_to_none() {
        assert_eq!(state_abbr("99"), None);
        assert_eq!(state_abbr(""), None);
        assert_eq!(state_abbr_of_code("9900001"), None);
    }

    #[test]
    fn code_resolution_uses_the_prefix() {
        assert_eq!(state_abbr_of_code("3550308"), Some("SP"));
        assert_eq!(state_abbr_of_code("3304557"), Some("RJ"));
        assert_eq!(state_abbr_of_code("1"), None);
    }

    #[test]
    fn pad_code_preserves_leading_zeros() {
        assert_eq!(pad_code("123"), "0000123");
        assert_eq!(pad_code("3550308"), "3550308");
        assert_eq!(pad_code("35503080"), "35503080");
    }
}
