//! Upload naming and history filtering.
//!
//! Uploaded images are stored under `<epoch-ms>-<original-name>` so the
//! object name itself carries the upload time. The history view filters by
//! parsing that prefix back out; objects whose names don't parse are
//! treated as foreign and skipped.

/// Milliseconds per hour, for the history window arithmetic.
const MS_PER_HOUR: i64 = 3_600_000;

/// Build the storage object name for an upload.
///
/// `now_ms` is the client's epoch timestamp in milliseconds. The original
/// file name is kept verbatim after the prefix.
pub fn object_name(now_ms: i64, file_name: &str) -> String {
    format!("{now_ms}-{file_name}")
}

/// Parse the upload timestamp (epoch ms) back out of an object name.
///
/// Returns `None` for names without a numeric prefix before the first `-`.
pub fn parse_upload_timestamp(name: &str) -> Option<i64> {
    let (prefix, _) = name.split_once('-')?;
    prefix.parse().ok()
}

/// Filter object names down to uploads within the last `hours` hours.
///
/// Names that don't carry a parseable timestamp prefix are skipped, not
/// errored: the bucket may contain objects written by other tooling.
pub fn filter_recent<'a, I>(names: I, now_ms: i64, hours: i64) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let cutoff = now_ms - hours * MS_PER_HOUR;
    names
        .into_iter()
        .filter(|name| parse_upload_timestamp(name).is_some_and(|ts| ts >= cutoff))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_format() {
        assert_eq!(object_name(1700000000000, "photo.png"), "1700000000000-photo.png");
    }

    #[test]
    fn test_object_name_keeps_dashes_in_file_name() {
        let name = object_name(42, "my-vacation-photo.jpg");
        assert_eq!(name, "42-my-vacation-photo.jpg");
        // Round-trips: only the first dash delimits the timestamp
        assert_eq!(parse_upload_timestamp(&name), Some(42));
    }

    #[test]
    fn test_parse_upload_timestamp() {
        assert_eq!(parse_upload_timestamp("1000-a.png"), Some(1000));
        assert_eq!(parse_upload_timestamp("no-prefix.png"), None);
        assert_eq!(parse_upload_timestamp("plain.png"), None);
        assert_eq!(parse_upload_timestamp(""), None);
    }

    #[test]
    fn test_filter_recent_window() {
        let names = ["1000-a.png", "2000-b.png", "9999999999999-c.png"];
        // Cutoff at now - 1h = 9999996400000: only c survives
        let recent = filter_recent(names, 10_000_000_000_000, 1);
        assert_eq!(recent, vec!["9999999999999-c.png"]);
    }

    #[test]
    fn test_filter_recent_includes_boundary() {
        let now = 10 * MS_PER_HOUR;
        let at_cutoff = object_name(now - 24 * MS_PER_HOUR, "edge.png");
        let names = [at_cutoff.as_str()];
        // ts == cutoff is still "within the last 24 hours"
        assert_eq!(filter_recent(names, now, 24).len(), 1);
    }

    #[test]
    fn test_filter_recent_skips_unparseable() {
        let names = ["not-a-timestamp.png", "thumbnail.png", "5000-ok.png"];
        let recent = filter_recent(names, 6000, 1);
        assert_eq!(recent, vec!["5000-ok.png"]);
    }

    #[test]
    fn test_filter_recent_empty_input() {
        assert!(filter_recent([], 1_000_000, 24).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
