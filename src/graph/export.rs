//! CSV export of a dependency graph.

use crate::models::DependencyGraph;

/// Flatten a graph into `acronym,target,caller` CSV rows.
///
/// One row per edge, in the graph's stable key order. No header row and no
/// quoting: acronyms, target identifiers, and repository names never contain
/// commas.
#[must_use]
pub fn to_csv(graph: &DependencyGraph) -> String {
    let mut rows = Vec::new();

    for (acronym, targets) in graph {
        for (target, callers) in targets {
            for caller in callers {
                rows.push(format!("{acronym},{target},{caller}"));
            }
        }
    }

    rows.join("\n")
}
