use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::PointGroupError;
use crate::symmetries::group_closure::describe;
use crate::symmetries::symmetry_operations::{is_same_matrix, SymmetryOperation};
use crate::Result;

/// A set of mutually conjugate operations, stored as indices into the owning
/// group's operation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConjugacyClass {
    members: Vec<usize>,
}

impl ConjugacyClass {
    fn seeded(index: usize) -> Self {
        Self {
            members: vec![index],
        }
    }

    /// Smallest member under the canonical operation order.
    pub fn representative(&self) -> usize {
        // Members are never empty: every class is seeded with one operation
        self.members.iter().copied().min().unwrap_or_default()
    }

    /// Member indices, ascending.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(&index)
    }

    fn add(&mut self, index: usize) {
        if !self.contains(index) {
            self.members.push(index);
        }
    }
}

/// Partition a closed, canonically ordered operation list into conjugacy classes.
///
/// Every operation needs its inverse linked, which [`GroupClosure::close`]
/// guarantees.
///
/// [`GroupClosure::close`]: crate::symmetries::GroupClosure::close
pub fn compute_classes(operations: &[SymmetryOperation]) -> Result<Vec<ConjugacyClass>> {
    let mut class_of: Vec<Option<usize>> = vec![None; operations.len()];
    let mut classes: Vec<ConjugacyClass> = Vec::new();

    for (index, op) in operations.iter().enumerate() {
        if class_of[index].is_some() {
            continue;
        }
        let class_index = classes.len();
        class_of[index] = Some(class_index);
        let mut class = ConjugacyClass::seeded(index);

        for (g_index, g) in operations.iter().enumerate() {
            if g_index == index {
                continue;
            }
            let g_inverse = g
                .inverse_index()
                .map(|i| &operations[i])
                .ok_or_else(|| PointGroupError::NonUniqueInverse {
                    operation: g.to_string(),
                })?;
            let conjugate = g.matrix() * op.matrix() * g_inverse.matrix();
            let conjugate_index = operations
                .iter()
                .position(|candidate| is_same_matrix(candidate.matrix(), &conjugate))
                .ok_or_else(|| PointGroupError::GroupNotClosed {
                    elements: describe(operations),
                    matrix: conjugate,
                })?;

            match class_of[conjugate_index] {
                None => {
                    class_of[conjugate_index] = Some(class_index);
                    class.add(conjugate_index);
                }
                Some(existing) if existing == class_index => {}
                Some(_) => {
                    return Err(PointGroupError::ClassesNotDisjoint {
                        operation: operations[conjugate_index].to_string(),
                    })
                }
            }
        }

        class.members.sort_unstable();
        classes.push(class);
    }

    classes.sort_by_key(ConjugacyClass::representative);
    debug!(
        "Partitioned {} operations into {} conjugacy classes",
        operations.len(),
        classes.len()
    );
    Ok(classes)
}

/// Class index of every operation, for a partition produced by [`compute_classes`].
pub(crate) fn class_lookup(classes: &[ConjugacyClass], len: usize) -> Vec<usize> {
    let mut lookup = vec![0; len];
    for (class_index, class) in classes.iter().enumerate() {
        for &member in class.members() {
            lookup[member] = class_index;
        }
    }
    lookup
}
