//! Display formatting helpers (en-US style, as the dashboard is shown).

/// Groups the integer part with commas: `45680` -> `"45,680"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    if value < 0 {
        format!("-{}", result)
    } else {
        result
    }
}

/// Dollar amount without cents: `12450` -> `"$12,450"`.
pub fn format_usd(value: i64) -> String {
    if value < 0 {
        format!("-${}", format_thousands(value).trim_start_matches('-'))
    } else {
        format!("${}", format_thousands(value))
    }
}

/// Ownership share: `4.5` -> `"4.5%"`, `3.0` -> `"3%"`.
pub fn format_share(value: f64) -> String {
    format!("{}%", value)
}

/// First letter of every word: `"Marcus Rodriguez"` -> `"MR"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(45680), "45,680");
        assert_eq!(format_thousands(8950), "8,950");
        assert_eq!(format_thousands(127), "127");
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-1234), "-1,234");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(12450), "$12,450");
        assert_eq!(format_usd(340), "$340");
        assert_eq!(format_usd(-6750), "-$6,750");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(4.5), "4.5%");
        assert_eq!(format_share(2.9), "2.9%");
        assert_eq!(format_share(3.0), "3%");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Anita Chen"), "AC");
        assert_eq!(initials("Marcus Rodriguez"), "MR");
        assert_eq!(initials("  David   Kim "), "DK");
        assert_eq!(initials(""), "");
    }
}
