//! Messaging queue depth probe.

use statwatch_protocols::MetricSource;

use super::{attribute_long, attribute_text};
use crate::error::ProbeError;
use crate::format::perf_value;
use crate::result::{Findings, ProbeResult};
use crate::selection::Selection;

const PREFIX: &str = "queue depth: ";
const QUEUE_POINTS: &str = "WebSphere:*,type=SIBQueuePoint";

/// Queues used internally by the messaging engine.
fn is_internal(identifier: &str) -> bool {
    identifier.is_empty() || identifier.starts_with("_PSIMP") || identifier.starts_with("_PTRM")
}

pub(super) fn evaluate(
    source: &dyn MetricSource,
    selection: &str,
) -> Result<ProbeResult, ProbeError> {
    let selection = Selection::parse(selection)?;

    let mut findings = Findings::new();
    for queue in source.list_objects(QUEUE_POINTS)? {
        let identifier = attribute_text(source, &queue, "identifier")?;
        if is_internal(&identifier) {
            continue;
        }
        let Some(thresholds) = selection.lookup(&identifier) else {
            continue;
        };

        let depth = attribute_long(source, &queue, "depth")?;
        findings.push_perf(perf_value(&format!("sib-queue-{}", identifier), depth));
        findings.record(thresholds.evaluate(depth), || {
            format!("'{}' depth ({})", identifier, depth)
        });
    }

    Ok(findings.into_result(PREFIX))
}
