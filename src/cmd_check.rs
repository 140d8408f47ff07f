//! `check` and `probes` subcommand handlers.

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::{debug, warn};

use statwatch_config::{Config, ConfigLoader};
use statwatch_monitor::{Aggregator, ProbeKind, Severity};

use crate::agent::{answer, snapshot_path};

/// Run one check and print the report line. Returns the exit code.
pub(crate) fn handle_check(
    config: &Config,
    instance: &str,
    snapshot: Option<PathBuf>,
    probes: Vec<(String, String)>,
) -> Result<u8, Box<dyn std::error::Error>> {
    let selections = merge_selections(&config.checks, probes);
    if selections.is_empty() {
        warn!("No probe selected, the report will only carry the status");
    }

    let path = match snapshot {
        Some(path) => path,
        None => {
            let dir = PathBuf::from(ConfigLoader::expand_path(&config.source.snapshot_dir));
            snapshot_path(&dir, instance)
                .ok_or_else(|| format!("invalid instance name '{}'", instance))?
        }
    };
    debug!(instance, path = %path.display(), "Running check");

    match answer(&Aggregator::new(), &path, &selections) {
        Ok(answer) => {
            println!("{}", answer.line);
            Ok(answer.code)
        }
        Err(err) => {
            let code = Severity::Unknown.code();
            println!("{}|{}|", code, err);
            Ok(code)
        }
    }
}

/// Command-line selections override configured ones.
fn merge_selections(
    configured: &BTreeMap<String, String>,
    overrides: Vec<(String, String)>,
) -> BTreeMap<String, String> {
    let mut selections = configured.clone();
    selections.extend(overrides);
    selections
}

/// Print the probe registry in invocation order.
pub(crate) fn handle_probes() {
    println!("{:<10} {:<52} {}", "NAME", "SELECTION", "MEASURES");
    println!("{}", "-".repeat(110));
    for kind in ProbeKind::ALL {
        println!(
            "{:<10} {:<52} {}",
            kind.name(),
            kind.grammar().to_string(),
            kind.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_selections_overrides_config() {
        let mut configured = BTreeMap::new();
        configured.insert("jvm".to_string(), "heap,80,90".to_string());
        configured.insert("pool".to_string(), "*,80,90".to_string());

        let merged = merge_selections(
            &configured,
            vec![
                ("pool".to_string(), "WebContainer,85,95".to_string()),
                ("jta".to_string(), "tx,10,20".to_string()),
            ],
        );

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["jvm"], "heap,80,90");
        assert_eq!(merged["pool"], "WebContainer,85,95");
        assert_eq!(merged["jta"], "tx,10,20");
    }

    #[test]
    fn test_check_with_missing_snapshot_returns_critical() {
        let config = Config::default();
        let code = handle_check(
            &config,
            "srv01",
            Some(PathBuf::from("/nonexistent/srv01.json")),
            vec![("jta".to_string(), "tx,10,20".to_string())],
        )
        .unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_check_rejects_invalid_instance() {
        let config = Config::default();
        assert!(handle_check(&config, "../srv01", None, Vec::new()).is_err());
    }
}
