//! Label selection for generated ball textures.
//!
//! The numeral printed on a ball comes from its object name: the token after
//! the first underscore is used when it is all digits (`ball_7` -> `7`).
//! Names without a numeric token get a placeholder glyph, except glass balls
//! which read `0`.

/// Pick the label to draw for an object name.
pub fn label_for_name(name: &str, placeholder: &str) -> String {
    if let Some(tok) = name.split('_').nth(1) {
        if !tok.is_empty() && tok.chars().all(|c| c.is_ascii_digit()) {
            return tok.to_string();
        }
    }
    if name.contains("glass") {
        "0".to_string()
    } else {
        placeholder.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_second_token() {
        assert_eq!(label_for_name("ball_7", "?"), "7");
        assert_eq!(label_for_name("ball_12", "?"), "12");
        // Leading zeros survive as-is
        assert_eq!(label_for_name("ball_07", "?"), "07");
        // Extra tokens after the number do not matter
        assert_eq!(label_for_name("ball_3_spare", "?"), "3");
    }

    #[test]
    fn glass_marker_reads_zero() {
        assert_eq!(label_for_name("ball_glass", "?"), "0");
        assert_eq!(label_for_name("glass", "?"), "0");
    }

    #[test]
    fn placeholder_when_no_number() {
        assert_eq!(label_for_name("cue", "?"), "?");
        assert_eq!(label_for_name("ball_red", "?"), "?");
        assert_eq!(label_for_name("ball_", "?"), "?");
        assert_eq!(label_for_name("cue", "-"), "-");
    }
}
