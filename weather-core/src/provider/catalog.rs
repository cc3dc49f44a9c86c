use flate2::write::MultiGzDecoder;
use serde_json::Value;
use std::io::Write;
use tracing::debug;

use crate::{config::MalformedEntryPolicy, error::ForecastError, extract, model::CityCatalog};

/// Incremental gzip inflater for the bulk city list.
///
/// Compressed chunks are fed in as they arrive; only the decompressed text
/// accumulates, and it is parsed once the stream ends. Concatenated gzip
/// members are decoded as one stream.
#[derive(Debug)]
pub struct CatalogDecoder {
    inflater: MultiGzDecoder<Vec<u8>>,
    policy: MalformedEntryPolicy,
}

impl CatalogDecoder {
    pub fn new(policy: MalformedEntryPolicy) -> Self {
        Self { inflater: MultiGzDecoder::new(Vec::new()), policy }
    }

    pub fn push(&mut self, chunk: &[u8]) -> Result<(), ForecastError> {
        self.inflater.write_all(chunk).map_err(ForecastError::Decompression)
    }

    pub fn finish(self) -> Result<CityCatalog, ForecastError> {
        let text = self.inflater.finish().map_err(ForecastError::Decompression)?;
        debug!(bytes = text.len(), "City catalog decompressed");
        parse_catalog(&text, self.policy)
    }
}

/// Parses a JSON array of `{id, name, ..}` objects into a catalog.
///
/// The first occurrence of an id wins; later duplicates are dropped.
pub fn parse_catalog(text: &[u8], policy: MalformedEntryPolicy) -> Result<CityCatalog, ForecastError> {
    let entries: Vec<Value> = serde_json::from_slice(text).map_err(ForecastError::Parse)?;
    let mut catalog = CityCatalog::new();
    let mut skipped = 0usize;

    for (index, entry) in entries.iter().enumerate() {
        match read_entry(entry, index) {
            Ok((id, name)) => {
                catalog.entry(id).or_insert_with(|| name.to_string());
            }
            Err(err) if policy == MalformedEntryPolicy::Skip && err.is_schema_violation() => {
                debug!(index, error = %err, "Skipping malformed city catalog entry");
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(entries = entries.len(), cities = catalog.len(), skipped, "City catalog parsed");
    Ok(catalog)
}

fn read_entry(entry: &Value, index: usize) -> Result<(i64, &str), ForecastError> {
    // Paths are reported relative to the whole array.
    let id = extract::integer(entry, "/id").map_err(|err| at_index(err, index))?;
    let name = extract::text(entry, "/name").map_err(|err| at_index(err, index))?;
    Ok((id, name))
}

fn at_index(err: ForecastError, index: usize) -> ForecastError {
    match err {
        ForecastError::FieldMissing { path } => {
            ForecastError::FieldMissing { path: format!("/{index}{path}") }
        }
        ForecastError::TypeMismatch { path, expected } => {
            ForecastError::TypeMismatch { path: format!("/{index}{path}"), expected }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{Compression, write::GzEncoder};

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    fn decode(compressed: &[u8], chunk_size: usize) -> Result<CityCatalog, ForecastError> {
        let mut decoder = CatalogDecoder::new(MalformedEntryPolicy::Abort);
        for chunk in compressed.chunks(chunk_size) {
            decoder.push(chunk)?;
        }
        decoder.finish()
    }

    #[test]
    fn decodes_single_city() {
        let compressed = gzip(br#"[{"id":524901,"name":"St Petersburg"}]"#);
        let catalog = decode(&compressed, 4096).unwrap();

        assert_eq!(catalog, CityCatalog::from([(524901, "St Petersburg".to_string())]));
    }

    #[test]
    fn byte_sized_chunks_give_same_result() {
        let json = br#"[{"id":1,"name":"A","country":"XX","coord":{"lon":1.0,"lat":2.0}},{"id":2,"name":"B"}]"#;
        let compressed = gzip(json);

        assert_eq!(decode(&compressed, 1).unwrap(), decode(&compressed, compressed.len()).unwrap());
    }

    #[test]
    fn concatenated_members_form_one_document() {
        let mut compressed = gzip(br#"[{"id":1,"name":"A"}"#);
        compressed.extend(gzip(br#",{"id":2,"name":"B"}]"#));

        let expected = CityCatalog::from([(1, "A".to_string()), (2, "B".to_string())]);
        assert_eq!(decode(&compressed, compressed.len()).unwrap(), expected);
        assert_eq!(decode(&compressed, 3).unwrap(), expected);
    }

    #[test]
    fn first_duplicate_wins() {
        let json = br#"[{"id":1,"name":"A"},{"id":2,"name":"B"},{"id":1,"name":"C"}]"#;
        let catalog = parse_catalog(json, MalformedEntryPolicy::Abort).unwrap();

        assert_eq!(catalog, CityCatalog::from([(1, "A".to_string()), (2, "B".to_string())]));
    }

    #[test]
    fn parsing_twice_is_idempotent() {
        let json = br#"[{"id":3,"name":"X"},{"id":3,"name":"Y"}]"#;
        let first = parse_catalog(json, MalformedEntryPolicy::Abort).unwrap();
        let second = parse_catalog(json, MalformedEntryPolicy::Abort).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn not_gzip_is_decompression_error() {
        let err = decode(b"this is plainly not gzip data", 8).unwrap_err();
        assert!(matches!(err, ForecastError::Decompression(_)));
    }

    #[test]
    fn truncated_stream_is_decompression_error() {
        let compressed = gzip(br#"[{"id":1,"name":"A"}]"#);
        let err = decode(&compressed[..compressed.len() - 6], 16).unwrap_err();
        assert!(matches!(err, ForecastError::Decompression(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = decode(&gzip(br#"[{"id":1,"name":"A"}"#), 64).unwrap_err();
        assert!(matches!(err, ForecastError::Parse(_)));
    }

    #[test]
    fn non_array_is_parse_error() {
        let err = parse_catalog(br#"{"id":1,"name":"A"}"#, MalformedEntryPolicy::Abort).unwrap_err();
        assert!(matches!(err, ForecastError::Parse(_)));
    }

    #[test]
    fn abort_policy_reports_first_bad_entry() {
        let json = br#"[{"id":1,"name":"A"},{"name":"B"},{"id":"3","name":"C"}]"#;
        let err = parse_catalog(json, MalformedEntryPolicy::Abort).unwrap_err();

        assert!(matches!(err, ForecastError::FieldMissing { ref path } if path == "/1/id"));
    }

    #[test]
    fn skip_policy_drops_bad_entries() {
        let json = br#"[{"id":1,"name":"A"},{"name":"B"},{"id":"3","name":"C"},{"id":4,"name":null},{"id":5,"name":"E"}]"#;
        let catalog = parse_catalog(json, MalformedEntryPolicy::Skip).unwrap();

        assert_eq!(catalog, CityCatalog::from([(1, "A".to_string()), (5, "E".to_string())]));
    }

    #[test]
    fn wrong_type_reports_indexed_path() {
        let json = br#"[{"id":1,"name":"A"},{"id":2,"name":7}]"#;
        let err = parse_catalog(json, MalformedEntryPolicy::Abort).unwrap_err();

        assert!(matches!(err, ForecastError::TypeMismatch { ref path, .. } if path == "/1/name"));
    }
}
