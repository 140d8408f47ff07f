//! Request handling shared by the CLI and the HTTP agent.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use statwatch_monitor::{Aggregator, ProbeError, Severity};
use statwatch_protocols::MetricSource;
use statwatch_source_snapshot::SnapshotSource;

/// Query parameter naming the monitored instance.
pub(crate) const INSTANCE_PARAM: &str = "instance";

/// One answered check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Answer {
    pub code: u8,
    pub line: String,
}

impl Answer {
    /// The instance could not be reached at all.
    fn unreachable(reason: impl std::fmt::Display) -> Self {
        Self {
            code: Severity::Critical.code(),
            line: format!("{}|{}", Severity::Critical.code(), reason),
        }
    }
}

/// Snapshot file of an instance: `<dir>/<instance>.json`.
///
/// Returns `None` for names that would leave `dir`.
pub(crate) fn snapshot_path(dir: &Path, instance: &str) -> Option<PathBuf> {
    let valid = !instance.is_empty()
        && instance != "."
        && instance != ".."
        && !instance.contains(['/', '\\']);
    valid.then(|| dir.join(format!("{}.json", instance)))
}

/// Run the selected probes against the snapshot at `path`.
///
/// The report header names the server as the source reports it. A source
/// that cannot be loaded or named yields a CRITICAL line without report.
/// Only a misconfigured statistic is returned as an error.
pub(crate) fn answer(
    aggregator: &Aggregator,
    path: &Path,
    selections: &BTreeMap<String, String>,
) -> Result<Answer, ProbeError> {
    let source = match SnapshotSource::load(path) {
        Ok(source) => source,
        Err(err) => {
            warn!(path = %path.display(), "Cannot load snapshot: {}", err);
            return Ok(Answer::unreachable(err));
        }
    };

    answer_from(aggregator, &source, selections)
}

pub(crate) fn answer_from(
    aggregator: &Aggregator,
    source: &dyn MetricSource,
    selections: &BTreeMap<String, String>,
) -> Result<Answer, ProbeError> {
    let server_name = match source.server_name() {
        Ok(name) => name,
        Err(err) => {
            warn!("Cannot read server name: {}", err);
            return Ok(Answer::unreachable(err));
        }
    };

    match aggregator.process(source, &server_name, selections) {
        Ok(report) => {
            info!(server = %server_name, code = report.code(), "Check answered");
            Ok(Answer {
                code: report.code(),
                line: report.to_string(),
            })
        }
        Err(err) => {
            error!(server = %server_name, "Check aborted: {}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use statwatch_protocols::{StatNode, Statistic};
    use tempfile::NamedTempFile;

    fn selections(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn source() -> SnapshotSource {
        SnapshotSource::new("srv01", "9.0.5.0").with_group(
            "transactionModule",
            StatNode::default().with_statistic("ActiveCount", Statistic::Count { count: 12 }),
        )
    }

    #[test]
    fn test_snapshot_path() {
        let dir = Path::new("/var/lib/statwatch");
        assert_eq!(
            snapshot_path(dir, "srv01"),
            Some(PathBuf::from("/var/lib/statwatch/srv01.json"))
        );
        assert!(snapshot_path(dir, "").is_none());
        assert!(snapshot_path(dir, "..").is_none());
        assert!(snapshot_path(dir, "../etc/passwd").is_none());
        assert!(snapshot_path(dir, "a\\b").is_none());
    }

    #[test]
    fn test_answer_uses_source_server_name() {
        let answer = answer_from(&Aggregator::new(), &source(), &selections(&[("jta", "tx,10,20")]))
            .unwrap();
        assert_eq!(answer.code, 1);
        assert_eq!(
            answer.line,
            "1|srv01: status WARNING - transaction active count (12)|jta-activeCount=12"
        );
    }

    #[test]
    fn test_answer_from_file() {
        let json = serde_json::to_string(source().document()).unwrap();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let answer = answer(&Aggregator::new(), file.path(), &selections(&[("jta", "tx,20,30")]))
            .unwrap();
        assert_eq!(answer.code, 0);
        assert_eq!(answer.line, "0|srv01: status OK|jta-activeCount=12");
    }

    #[test]
    fn test_missing_snapshot_is_critical() {
        let answer = answer(
            &Aggregator::new(),
            Path::new("/nonexistent/srv01.json"),
            &selections(&[("jta", "tx,10,20")]),
        )
        .unwrap();
        assert_eq!(answer.code, 2);
        assert!(answer.line.starts_with("2|IO error"));
    }

    #[test]
    fn test_unparsable_snapshot_is_critical() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let answer = answer(&Aggregator::new(), file.path(), &BTreeMap::new()).unwrap();
        assert_eq!(answer.code, 2);
        assert!(answer.line.starts_with("2|Parse error"));
    }

    #[test]
    fn test_misconfigured_statistic_is_an_error() {
        let err = answer_from(&Aggregator::new(), &source(), &selections(&[("pool", "*,80,90")]))
            .unwrap_err();
        assert!(err.is_fatal());
    }
}
