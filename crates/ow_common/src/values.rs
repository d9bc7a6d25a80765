//! Raw text to number coercion and display-name normalization.

use crate::error::ValueError;
use crate::registry::ValueKind;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// H:MM:SS, hours may carry a thousands separator ("1,234:05:06")
static HOURS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+(?:,\d+)*):(\d+):(\d+)$").expect("invalid regex"));
static MINUTES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+):(\d+)$").expect("invalid regex"));
static INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(,\d+)*%?$").expect("invalid regex"));
static FLOAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(,\d+)*\.\d+%?$").expect("invalid regex"));

/// Placeholders the page renders for "no data".
const SENTINELS: [&str; 3] = ["--", "NaN", ""];

/// Kind-agnostic parse result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Integer(i) => Some(*i as f64),
            RawValue::Float(f) => Some(*f),
            RawValue::Text(_) => None,
        }
    }
}

pub fn is_sentinel(raw: &str) -> bool {
    SENTINELS.contains(&raw.trim())
}

/// Total seconds for `H:MM:SS` or `M:SS`. The sign of the leading field
/// applies to the whole value. `None` when the total does not fit an `i64`.
pub fn parse_duration(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Some(caps) = HOURS_RE.captures(raw) {
        let hours: i64 = caps[1].replace(',', "").parse().ok()?;
        let minutes: i64 = caps[2].parse().ok()?;
        let seconds: i64 = caps[3].parse().ok()?;
        let rest = minutes.checked_mul(60)?.checked_add(seconds)?;
        return signed(hours.checked_mul(3600)?, rest, &caps[1]);
    }
    if let Some(caps) = MINUTES_RE.captures(raw) {
        let minutes: i64 = caps[1].parse().ok()?;
        let seconds: i64 = caps[2].parse().ok()?;
        return signed(minutes.checked_mul(60)?, seconds, &caps[1]);
    }
    None
}

fn signed(lead_total: i64, rest: i64, lead_text: &str) -> Option<i64> {
    if lead_text.starts_with('-') {
        lead_total.checked_sub(rest)
    } else {
        lead_total.checked_add(rest)
    }
}

/// Best-effort parse without a declared kind: durations to seconds,
/// integers (with separators or a trailing `%`), then floats, otherwise the
/// trimmed text. Sentinels are zero.
pub fn parse_any(raw: &str) -> RawValue {
    let raw = raw.trim();
    if is_sentinel(raw) {
        return RawValue::Integer(0);
    }
    if let Some(secs) = parse_duration(raw) {
        return RawValue::Integer(secs);
    }
    if INT_RE.is_match(raw) {
        if let Ok(i) = strip_number(raw).parse::<i64>() {
            return RawValue::Integer(i);
        }
    }
    if FLOAT_RE.is_match(raw) {
        if let Ok(f) = strip_number(raw).parse::<f64>() {
            return RawValue::Float(f);
        }
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => RawValue::Float(f),
        _ => RawValue::Text(raw.to_string()),
    }
}

/// Coerce raw text according to `kind`. Sentinels are 0 and never an error;
/// text that matches no numeric shape is.
pub fn coerce(raw: &str, kind: ValueKind) -> Result<f64, ValueError> {
    let trimmed = raw.trim();
    if is_sentinel(trimmed) {
        return Ok(0.0);
    }

    let direct = match kind {
        ValueKind::Duration => parse_duration(trimmed).map(|s| s as f64),
        ValueKind::Percentage => strip_number(trimmed).parse::<f64>().ok(),
        ValueKind::Count => None,
    };

    direct
        .filter(|v| v.is_finite())
        .or_else(|| parse_any(trimmed).as_f64())
        .ok_or_else(|| ValueError::Unrecognized {
            raw: trimmed.to_string(),
            kind,
        })
}

fn strip_number(raw: &str) -> String {
    raw.trim_end_matches('%').replace(',', "")
}

/// Normalize a display name into a metric key: diacritics removed, a
/// separator at lower-to-upper transitions, lowercase, non-alphanumeric runs
/// collapsed to one `_`, no leading or trailing separator.
pub fn string_to_key(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;

    for c in input.replace("- ", " ").chars() {
        let c = fold_diacritic(c);
        if c.is_alphanumeric() {
            if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase()) {
                push_separator(&mut out);
            }
            out.extend(c.to_lowercase());
        } else {
            push_separator(&mut out);
        }
        prev = Some(c);
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}

fn fold_diacritic(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'Ç' | 'Ć' | 'Č' => 'C',
        'ç' | 'ć' | 'č' => 'c',
        'Ď' => 'D',
        'ď' => 'd',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' => 'I',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'Ł' => 'L',
        'ł' => 'l',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ň' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'Ř' => 'R',
        'ř' => 'r',
        'Ś' | 'Š' | 'Ş' => 'S',
        'ś' | 'š' | 'ş' => 's',
        'Ť' => 'T',
        'ť' => 't',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => 'U',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'Ý' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_durations() {
        assert_eq!(coerce("1:02:03", ValueKind::Duration), Ok(3723.0));
        assert_eq!(coerce("12:30:00", ValueKind::Duration), Ok(45000.0));
        assert_eq!(coerce("05:07", ValueKind::Duration), Ok(307.0));
        assert_eq!(coerce("1,234:00:01", ValueKind::Duration), Ok(4_442_401.0));
        assert_eq!(coerce("-1:30", ValueKind::Duration), Ok(-90.0));
        assert_eq!(coerce("-0:30", ValueKind::Duration), Ok(-30.0));
    }

    #[test]
    fn test_oversized_duration_is_discarded_not_wrapped() {
        assert_eq!(parse_duration("9999999999999999:00:00"), None);
        assert_eq!(parse_duration("2562047788015215:30:08"), None);
        assert_eq!(parse_duration("99999999999999999999:00"), None);
        assert!(coerce("9999999999999999:00:00", ValueKind::Duration).is_err());
        assert!(coerce("153722867280912931:00", ValueKind::Duration).is_err());

        // largest hour count that still fits
        assert_eq!(
            parse_duration("2562047788015215:00:00"),
            Some(2_562_047_788_015_215 * 3600)
        );
    }

    #[test]
    fn test_coerce_percentage_and_counts() {
        assert_eq!(coerce("74%", ValueKind::Percentage), Ok(74.0));
        assert_eq!(coerce("12.5%", ValueKind::Percentage), Ok(12.5));
        assert_eq!(coerce("1,234", ValueKind::Count), Ok(1234.0));
        assert_eq!(coerce("3.75", ValueKind::Count), Ok(3.75));
        assert_eq!(coerce("  42 ", ValueKind::Count), Ok(42.0));
    }

    #[test]
    fn test_sentinels_are_zero_for_every_kind() {
        for kind in [ValueKind::Duration, ValueKind::Count, ValueKind::Percentage] {
            assert_eq!(coerce("--", kind), Ok(0.0));
            assert_eq!(coerce("NaN", kind), Ok(0.0));
            assert_eq!(coerce("", kind), Ok(0.0));
        }
    }

    #[test]
    fn test_coerce_rejects_text() {
        let err = coerce("Gold", ValueKind::Count).unwrap_err();
        assert_eq!(
            err,
            ValueError::Unrecognized {
                raw: "Gold".to_string(),
                kind: ValueKind::Count
            }
        );
        assert!(coerce("inf", ValueKind::Count).is_err());
    }

    #[test]
    fn test_parse_any() {
        assert_eq!(parse_any("1:00"), RawValue::Integer(60));
        assert_eq!(parse_any("2,500"), RawValue::Integer(2500));
        assert_eq!(parse_any("55%"), RawValue::Integer(55));
        assert_eq!(parse_any("1,000.25"), RawValue::Float(1000.25));
        assert_eq!(parse_any("--"), RawValue::Integer(0));
        assert_eq!(parse_any(" Hero "), RawValue::Text("Hero".to_string()));
    }

    #[test]
    fn test_string_to_key() {
        assert_eq!(string_to_key("Deflection Kills"), "deflection_kills");
        assert_eq!(string_to_key("Lúcio Kills"), string_to_key("Lucio Kills"));
        assert_eq!(string_to_key("Torbjörn"), "torbjorn");
        assert_eq!(string_to_key("HelixRocket Kills"), "helix_rocket_kills");
        assert_eq!(string_to_key("  Damage - Most in Game  "), "damage_most_in_game");
        assert_eq!(string_to_key("Eliminations per Life"), "eliminations_per_life");
        assert_eq!(string_to_key("Soldier: 76"), "soldier_76");
    }
}
