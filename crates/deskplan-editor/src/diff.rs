//! Structural diffs between scene snapshots.
//!
//! Objects are compared by their index within each snapshot's
//! object list, not by identity. Positional comparison is only
//! correct while object ordering is stable between the compared
//! states; reordering without content change over-reports
//! modifications. Layer commands therefore count as content
//! changes. The stored snapshot, not the diff, is the source of
//! truth for undo.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::serialization::{ObjectData, SceneSnapshot};

/// A per-index change between two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffChange {
    Add { object: ObjectData },
    Modify { object: ObjectData },
    Delete,
}

/// Structural delta between two snapshots, keyed by object index.
pub type SceneDiff = BTreeMap<usize, DiffChange>;

/// Computes the positional diff from `old` to `new`.
///
/// Index present only in `new`: add. Present in both with
/// different content: modify. Present only in `old`: delete.
pub fn calculate_diff(old: &SceneSnapshot, new: &SceneSnapshot) -> SceneDiff {
    let mut diff = SceneDiff::new();

    for (index, new_obj) in new.objects.iter().enumerate() {
        match old.objects.get(index) {
            None => {
                diff.insert(
                    index,
                    DiffChange::Add {
                        object: new_obj.clone(),
                    },
                );
            }
            Some(old_obj) if old_obj != new_obj => {
                diff.insert(
                    index,
                    DiffChange::Modify {
                        object: new_obj.clone(),
                    },
                );
            }
            Some(_) => {}
        }
    }

    for index in new.objects.len()..old.objects.len() {
        diff.insert(index, DiffChange::Delete);
    }

    diff
}

/// Applies a diff to a snapshot, producing the successor state.
///
/// Adds and modifies are applied in ascending index order; deletes
/// in descending order so earlier removals do not shift the indices
/// of later ones. Provided for incremental replay; undo restores
/// from the stored snapshot instead.
pub fn apply_diff(state: &SceneSnapshot, diff: &SceneDiff) -> SceneSnapshot {
    let mut objects = state.objects.clone();

    for (&index, change) in diff {
        match change {
            DiffChange::Add { object } | DiffChange::Modify { object } => {
                if index < objects.len() {
                    objects[index] = object.clone();
                } else {
                    objects.push(object.clone());
                }
            }
            DiffChange::Delete => {}
        }
    }

    let mut deletions: Vec<usize> = diff
        .iter()
        .filter(|(_, change)| matches!(change, DiffChange::Delete))
        .map(|(&index, _)| index)
        .collect();
    deletions.sort_unstable_by(|a, b| b.cmp(a));
    for index in deletions {
        if index < objects.len() {
            objects.remove(index);
        }
    }

    SceneSnapshot { objects }
}
