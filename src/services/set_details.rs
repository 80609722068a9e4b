use serde_json::Value;
use tracing::debug;

use crate::models::entry::SetObservation;

/// Decode the `set_details` column into per-set observations.
///
/// The export escapes embedded quotes CSV-style (`""`), so those are
/// collapsed before parsing. Anything that is not a JSON array yields an
/// empty vector, and array elements without a numeric `load` are dropped.
pub fn decode_set_details(raw: &str) -> Vec<SetObservation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let json = raw.replace("\"\"", "\"");
    let parsed: Value = match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "set_details.malformed");
            return Vec::new();
        }
    };

    let Value::Array(items) = parsed else {
        debug!("set_details.not_an_array");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(fields) => {
                let load = fields.get("load").and_then(Value::as_f64)?;
                Some(SetObservation { load, fields })
            }
            _ => None,
        })
        .collect()
}

pub fn set_loads(sets: &[SetObservation]) -> Vec<f64> {
    sets.iter().map(|set| set.load).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_csv_escaped_payload() {
        let sets = decode_set_details(
            r#"[{""load"":155,""success"":true},{""load"":165,""success"":false}]"#,
        );

        assert_eq!(set_loads(&sets), vec![155.0, 165.0]);
        assert_eq!(sets[1].fields.get("success"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_decode_plain_json() {
        let sets = decode_set_details(r#"[{"load":95.5},{"load":100}]"#);
        assert_eq!(set_loads(&sets), vec![95.5, 100.0]);
    }

    #[test]
    fn test_malformed_payload_is_empty() {
        assert!(decode_set_details("[{\"load\":").is_empty());
        assert!(decode_set_details("not json").is_empty());
        assert!(decode_set_details("").is_empty());
        assert!(decode_set_details("   ").is_empty());
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        assert!(decode_set_details(r#"{"load":135}"#).is_empty());
        assert!(decode_set_details("135").is_empty());
    }

    #[test]
    fn test_elements_without_numeric_load_are_dropped() {
        let sets = decode_set_details(
            r#"[{"load":135},{"load":"145"},{"success":true},7,null,{"load":155}]"#,
        );
        assert_eq!(set_loads(&sets), vec![135.0, 155.0]);
    }
}
