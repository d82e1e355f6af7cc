//! Record file loading
//!
//! Accepts either a bare JSON array of contacts or an object wrapping them
//! under `records`.

use std::collections::HashSet;
use std::path::Path;

use rolodex_core::Contact;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    List(Vec<Contact>),
    Wrapped { records: Vec<Contact> },
}

/// Parse contacts from JSON text
pub fn parse_records(data: &str) -> Result<Vec<Contact>> {
    let records = match serde_json::from_str(data)? {
        RecordFile::List(records) => records,
        RecordFile::Wrapped { records } => records,
    };

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            warn!(id = %record.id, "duplicate record id");
        }
    }

    Ok(records)
}

/// Read and parse a record file
pub fn load_records(path: &Path) -> Result<Vec<Contact>> {
    let data = std::fs::read_to_string(path)?;
    let records = parse_records(&data)?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_array() {
        let records = parse_records(
            r#"[{"id":"1","name":"john smith","tags":["engineer"]},{"id":"2","name":"jane doe","note":"neighbour"}]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![
                Contact::new("1", "john smith").with_tags(["engineer"]),
                Contact::new("2", "jane doe").with_note("neighbour"),
            ]
        );
    }

    #[test]
    fn test_parse_wrapped() {
        let records = parse_records(r#"{"records":[{"id":"1","name":"john smith"}]}"#).unwrap();
        assert_eq!(records, vec![Contact::new("1", "john smith")]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_records(r#"[{"id":"1"}]"#),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(parse_records("not json"), Err(Error::Serialization(_))));
    }
}
