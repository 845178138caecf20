//! Placeholder enrichment run.
//!
//! Builds an empty dataset root and tells the operator that updates are made
//! by targeted manual edits for now.

use std::io::Write;

use tracing::{debug, instrument};

use verso_enrich_shared::{Dataset, EnrichError, Result};

/// First line written by a run.
pub const DATASET_NOTICE: &str = "Dataset enrichment script - use manual updates for now";

/// Second line written by a run.
pub const MANUAL_UPDATE_NOTICE: &str =
    "Due to file size, we'll do targeted search-replace operations";

/// Notices in emission order.
pub const NOTICES: [&str; 2] = [DATASET_NOTICE, MANUAL_UPDATE_NOTICE];

/// Build the dataset root and write the notices to `out`, one per line.
///
/// The root is returned for inspection only; it is never persisted.
#[instrument(skip_all)]
pub fn run_placeholder<W: Write>(out: &mut W) -> Result<Dataset> {
    let dataset = Dataset::new();
    debug!(countries = dataset.country_count(), "dataset root created");

    for notice in NOTICES {
        writeln!(out, "{notice}").map_err(EnrichError::Output)?;
    }
    out.flush()?;

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that refuses every write.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_exactly_two_lines_in_order() {
        let mut out = Vec::new();
        run_placeholder(&mut out).expect("run");

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "Dataset enrichment script - use manual updates for now\n\
             Due to file size, we'll do targeted search-replace operations\n"
        );
        assert_eq!(text.lines().collect::<Vec<_>>(), NOTICES);
    }

    #[test]
    fn returns_empty_dataset_root() {
        let dataset = run_placeholder(&mut Vec::new()).expect("run");
        assert!(dataset.is_empty());
        assert_eq!(
            serde_json::to_value(&dataset).expect("serialize"),
            serde_json::json!({ "countries": {} })
        );
    }

    #[test]
    fn write_failure_is_reported() {
        let err = run_placeholder(&mut ClosedPipe).unwrap_err();
        assert!(matches!(err, EnrichError::Output(_)));
    }
}
