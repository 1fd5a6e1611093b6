//! Generation assignment by bounded relaxation
//!
//! Generation is the longest path from any root (a member without parents).
//! Roots start at 0; each pass raises every member to one more than its
//! deepest known parent. On an acyclic graph of `n` members the longest path
//! has at most `n - 1` edges, so `n` passes always reach a fixed point. A
//! change on pass `n` therefore means a cycle.

use crate::error::GraphError;
use stamtavla_domain::member::UNSET_GENERATION;
use stamtavla_domain::{Member, MemberId};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Outcome of a successful assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Relaxation passes run, including the final quiet one
    pub passes: usize,

    /// Number of distinct generation values
    pub distinct_generations: usize,
}

/// Assign a generation to every member in place
///
/// Parent ids that do not name a member in `members` are ignored. On error
/// no generation is written.
///
/// # Errors
/// [`GraphError::CycleDetected`] when parent/child relations loop, either
/// because values are still rising after `n` passes or because some members
/// can only be reached through a cycle.
pub fn assign_generations(members: &mut [Member]) -> Result<GenerationReport, GraphError> {
    let n = members.len();
    let parents: Vec<Vec<usize>> = {
        let index: HashMap<&MemberId, usize> =
            members.iter().enumerate().map(|(i, m)| (&m.id, i)).collect();
        members
            .iter()
            .map(|m| m.parents.iter().filter_map(|p| index.get(p).copied()).collect())
            .collect()
    };

    let mut generations: Vec<i32> = parents
        .iter()
        .map(|p| if p.is_empty() { 0 } else { UNSET_GENERATION })
        .collect();

    let mut passes = 0;
    let mut converged = n == 0;
    let mut last_changed = Vec::new();

    for pass in 1..=n {
        passes = pass;
        let mut changed = Vec::new();

        for (i, member_parents) in parents.iter().enumerate() {
            let deepest = member_parents
                .iter()
                .map(|&p| generations[p])
                .filter(|&g| g != UNSET_GENERATION)
                .max();
            if let Some(deepest) = deepest {
                if deepest + 1 > generations[i] {
                    generations[i] = deepest + 1;
                    changed.push(i);
                }
            }
        }

        debug!("Relaxation pass {}: {} members changed", pass, changed.len());

        if changed.is_empty() {
            converged = true;
            break;
        }
        last_changed = changed;
    }

    if !converged {
        return Err(GraphError::CycleDetected {
            passes,
            members: sorted_ids(members, &last_changed),
        });
    }

    let unreached: Vec<usize> = (0..n)
        .filter(|&i| generations[i] == UNSET_GENERATION)
        .collect();
    if !unreached.is_empty() {
        return Err(GraphError::CycleDetected {
            passes,
            members: sorted_ids(members, &unreached),
        });
    }

    for (member, generation) in members.iter_mut().zip(&generations) {
        member.generation = *generation;
    }

    Ok(GenerationReport {
        passes,
        distinct_generations: generations.iter().collect::<BTreeSet<_>>().len(),
    })
}

fn sorted_ids(members: &[Member], indices: &[usize]) -> Vec<MemberId> {
    let mut ids: Vec<MemberId> = indices.iter().map(|&i| members[i].id.clone()).collect();
    ids.sort();
    ids
}
