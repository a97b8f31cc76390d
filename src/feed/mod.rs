//! Defensive normalization for the external holiday feed.
//!
//! The upstream feed has no stable schema: the record array shows up at the
//! root or under a handful of wrapper keys, field names change between
//! deployments (Spanish and English dialects), dates arrive in several
//! layouts, and the mandatory flag has been observed as a boolean, a string,
//! and a number. The alias lists below are the interoperability contract
//! with the real feed; keep their order intact.

mod fetch;

pub use fetch::HolidayFeed;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use utoipa::ToSchema;

/// Wrapper keys probed, in order, when the document root is an object.
const WRAPPER_KEYS: [&str; 6] = ["feriados", "holidays", "data", "items", "result", "results"];

/// Aliases probed, in order, for the holiday date.
const DATE_ALIASES: [&str; 4] = ["fecha", "date", "day", "fecha_iso"];

/// Aliases probed inside a nested `date` object.
const NESTED_DATE_ALIASES: [&str; 2] = ["iso", "fecha"];

/// Aliases probed, in order, for the holiday name.
const NAME_ALIASES: [&str; 5] = ["nombre", "title", "name", "descripcion", "description"];

/// Aliases probed, in order, for the mandatory flag.
const FLAG_ALIASES: [&str; 4] = ["irrenunciable", "mandatory", "isHoliday", "obligatorio"];

/// Date layouts tried after RFC 3339, most common first.
const DATETIME_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_LAYOUTS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d/%m/%Y"];

/// A single canonical holiday record.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// Canonical `YYYY-MM-DD` date.
    pub date: String,
    pub name: String,
    /// Whether the holiday is legally non-waivable ("irrenunciable").
    pub mandatory: bool,
}

/// Normalize an arbitrary feed document into canonical holiday records.
///
/// Never fails: anything that cannot be interpreted yields an empty list.
/// Records missing a date or name are skipped, and duplicates by
/// (date, case-insensitive name) collapse to the first occurrence.
#[must_use]
pub fn normalize(doc: &Value) -> Vec<Holiday> {
    let rows: &[Value] = match doc {
        Value::Array(rows) => rows,
        Value::Object(map) => WRAPPER_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
            .map_or(&[][..], Vec::as_slice),
        _ => &[],
    };

    let mut seen = HashSet::new();
    let mut holidays = Vec::new();

    for row in rows {
        let Some(date) = extract_date(row) else {
            continue;
        };
        let Some(name) = string_field(row, &NAME_ALIASES) else {
            continue;
        };
        if name.trim().is_empty() {
            continue;
        }

        let date = canonical_date(date);
        if date.trim().is_empty() {
            continue;
        }

        if seen.insert((date.clone(), name.to_lowercase())) {
            holidays.push(Holiday {
                date,
                name: name.to_string(),
                mandatory: flag_field(row, &FLAG_ALIASES),
            });
        }
    }

    holidays
}

/// First alias carrying a string value wins; the probe skips values of any
/// other kind.
fn string_field<'a>(row: &'a Value, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .find_map(|name| row.get(*name).and_then(Value::as_str))
}

/// Date string under the flat aliases, falling back to a nested `date`
/// object (`{"date": {"iso": ...}}` is a known feed dialect).
fn extract_date(row: &Value) -> Option<&str> {
    string_field(row, &DATE_ALIASES).or_else(|| {
        row.get("date")
            .filter(|value| value.is_object())
            .and_then(|nested| string_field(nested, &NESTED_DATE_ALIASES))
    })
}

/// Coerce the mandatory flag from boolean, string, or numeric encodings.
///
/// A value of the wrong kind (or an unparseable string) does not stop the
/// probe; later aliases are still consulted. Everything else means `false`.
fn flag_field(row: &Value, aliases: &[&str]) -> bool {
    for name in aliases {
        match row.get(*name) {
            Some(Value::Bool(flag)) => return *flag,
            Some(Value::String(text)) => {
                if let Ok(flag) = text.trim().to_ascii_lowercase().parse::<bool>() {
                    return flag;
                }
            }
            Some(Value::Number(number)) => {
                if let Some(value) = number.as_f64() {
                    return value != 0.0;
                }
            }
            _ => {}
        }
    }
    false
}

/// Best-effort canonicalization to `YYYY-MM-DD`.
///
/// Parse failures fall back to swapping `/` for `-` and keeping the first
/// ten characters, which preserves already-ISO-like strings untouched.
fn canonical_date(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(date) = parse_date(trimmed) {
        return date.format("%Y-%m-%d").to_string();
    }

    let dashed = trimmed.replace('/', "-");
    if dashed.chars().count() > 10 {
        dashed.chars().take(10).collect()
    } else {
        dashed
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, layout) {
            return Some(datetime.date());
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(date) = NaiveDate::parse_from_str(text, layout) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_spanish_dialect_record() {
        let doc = json!([
            {"fecha": "2024-01-01", "nombre": "Año Nuevo", "irrenunciable": true}
        ]);
        assert_eq!(
            normalize(&doc),
            vec![Holiday {
                date: "2024-01-01".to_string(),
                name: "Año Nuevo".to_string(),
                mandatory: true,
            }]
        );
    }

    #[test]
    fn locates_records_under_wrapper_keys() {
        let doc = json!({"data": [{"date": {"iso": "2024/05/01"}, "title": "Labor Day"}]});
        assert_eq!(
            normalize(&doc),
            vec![Holiday {
                date: "2024-05-01".to_string(),
                name: "Labor Day".to_string(),
                mandatory: false,
            }]
        );
    }

    #[test]
    fn first_wrapper_key_with_an_array_wins() {
        let doc = json!({
            "holidays": "not-an-array",
            "items": [{"date": "2024-09-18", "name": "Fiestas Patrias"}]
        });
        let holidays = normalize(&doc);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].date, "2024-09-18");
    }

    #[test]
    fn deduplicates_case_insensitively_preserving_first() {
        let doc = json!([
            {"fecha": "2024-01-01", "nombre": "Año Nuevo", "irrenunciable": true},
            {"date": "2024-01-01", "name": "AÑO NUEVO"},
            {"date": "2024-01-01", "name": "Otro Feriado"}
        ]);
        let holidays = normalize(&doc);
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].name, "Año Nuevo");
        assert!(holidays[0].mandatory);
        assert_eq!(holidays[1].name, "Otro Feriado");
    }

    #[test]
    fn skips_records_missing_date_or_name() {
        let doc = json!([
            {"nombre": "Sin fecha"},
            {"fecha": "2024-06-20"},
            {"fecha": "2024-06-20", "nombre": "   "},
            {"fecha": "2024-06-29", "nombre": "San Pedro y San Pablo"}
        ]);
        let holidays = normalize(&doc);
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].name, "San Pedro y San Pablo");
    }

    #[test]
    fn malformed_documents_yield_empty_lists() {
        assert!(normalize(&json!(null)).is_empty());
        assert!(normalize(&json!("feriados")).is_empty());
        assert!(normalize(&json!(42)).is_empty());
        assert!(normalize(&json!({"unrelated": {"fecha": "2024-01-01"}})).is_empty());
        assert!(normalize(&json!([])).is_empty());
    }

    #[test]
    fn coerces_flag_encodings() {
        let doc = json!([
            {"fecha": "2024-01-01", "nombre": "a", "irrenunciable": "TRUE"},
            {"fecha": "2024-01-02", "nombre": "b", "mandatory": 1},
            {"fecha": "2024-01-03", "nombre": "c", "mandatory": 0},
            {"fecha": "2024-01-04", "nombre": "d", "irrenunciable": "yes", "obligatorio": true},
            {"fecha": "2024-01-05", "nombre": "e", "irrenunciable": "1"},
            {"fecha": "2024-01-06", "nombre": "f"}
        ]);
        let flags: Vec<bool> = normalize(&doc).iter().map(|h| h.mandatory).collect();
        assert_eq!(flags, vec![true, true, false, true, false, false]);
    }

    #[test]
    fn flag_probe_honors_alias_order() {
        let doc = json!([
            {"fecha": "2024-01-01", "nombre": "a", "irrenunciable": false, "mandatory": true}
        ]);
        assert!(!normalize(&doc)[0].mandatory);
    }

    #[test]
    fn canonicalizes_common_date_layouts() {
        assert_eq!(canonical_date("2024-05-01"), "2024-05-01");
        assert_eq!(canonical_date("2024/05/01"), "2024-05-01");
        assert_eq!(canonical_date("01/05/2024"), "2024-05-01");
        assert_eq!(canonical_date("2024-05-01T12:30:00"), "2024-05-01");
        assert_eq!(canonical_date("2024-05-01T12:30:00Z"), "2024-05-01");
        assert_eq!(canonical_date(" 2024-05-01 "), "2024-05-01");
    }

    #[test]
    fn unparseable_dates_fall_back_to_iso_like_best_effort() {
        assert_eq!(canonical_date("2024/13/99"), "2024-13-99");
        assert_eq!(canonical_date("2024-13-99T00:00:00"), "2024-13-99");
        assert_eq!(canonical_date("pronto"), "pronto");
    }

    #[test]
    fn date_probe_prefers_flat_aliases_over_nested_object() {
        let doc = json!([
            {"fecha": "2024-01-01", "date": {"iso": "2024-02-02"}, "nombre": "a"}
        ]);
        assert_eq!(normalize(&doc)[0].date, "2024-01-01");
    }
}
