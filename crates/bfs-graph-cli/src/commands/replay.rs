//! Replay command implementation.
//!
//! Feeds labels through the selection machine as if they were clicks and
//! prints one line per click.

use anyhow::{Context, Result};
use bfs_graph_core::{NodeId, SelectionMachine, SelectionOutcome};

use super::{build_machine, load_topology};
use crate::config::Config;

pub fn execute(config: &Config, labels: &[String]) -> Result<()> {
    let topology = load_topology(config)?;
    let mut machine = build_machine(config, &topology)?;

    for line in replay(&mut machine, labels)? {
        println!("{line}");
    }
    Ok(())
}

/// Apply each click in order, returning a description of every step.
pub fn replay(machine: &mut SelectionMachine, labels: &[String]) -> Result<Vec<String>> {
    labels
        .iter()
        .map(|label| {
            let node = NodeId::new(label.as_str());
            let outcome = machine
                .select(&node)
                .with_context(|| format!("Click on {node} failed"))?;
            Ok(format!(
                "{node}: {} | {}",
                describe(&outcome),
                machine.instruction()
            ))
        })
        .collect()
}

fn describe(outcome: &SelectionOutcome) -> String {
    match outcome {
        SelectionOutcome::StartChosen { start } => format!("start {start}"),
        SelectionOutcome::Resolved { path, .. } => format!("path {path}"),
        SelectionOutcome::NoPath { start, end } => {
            format!("no path exists between {start} and {end}")
        }
        SelectionOutcome::Restarted { start } => format!("restart at {start}"),
        SelectionOutcome::Unchanged => "unchanged".to_string(),
    }
}
