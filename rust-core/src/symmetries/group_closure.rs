use log::{debug, trace, warn};
use nalgebra::Matrix3;

use crate::config::MAX_GROUP_ORDER;
use crate::errors::PointGroupError;
use crate::symmetries::symmetry_operations::{is_same_matrix, OperationKind, SymmetryOperation};
use crate::Result;

/// Completes or validates closure of a set of operations and links inverses.
///
/// With `self_extend` enabled, products that match no known operation are
/// identified from their matrix and appended; otherwise they are a
/// [`PointGroupError::GroupNotClosed`].
#[derive(Debug, Clone)]
pub struct GroupClosure {
    operations: Vec<SymmetryOperation>,
    self_extend: bool,
    max_order: usize,
}

impl GroupClosure {
    /// Generators may come from another group: their name, inverse and
    /// principal-reflection slots are cleared.
    pub fn new(generators: impl IntoIterator<Item = SymmetryOperation>, self_extend: bool) -> Self {
        let mut operations: Vec<SymmetryOperation> = Vec::new();
        for mut op in generators {
            if operations.contains(&op) {
                warn!("Dropping duplicate generator {}", op);
                continue;
            }
            op.set_name("");
            op.set_inverse(None);
            op.set_principal_reflection(false);
            operations.push(op);
        }
        Self {
            operations,
            self_extend,
            max_order: MAX_GROUP_ORDER,
        }
    }

    /// Cap self-extension at `max_order` operations instead of [`MAX_GROUP_ORDER`].
    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    pub fn index_of_matrix(&self, matrix: &Matrix3<f64>) -> Option<usize> {
        self.operations
            .iter()
            .position(|op| is_same_matrix(op.matrix(), matrix))
    }

    /// Index of the operation equal to `op`, inserting `op` when self-extending.
    pub fn element_for(&mut self, op: SymmetryOperation) -> Result<usize> {
        if let Some(index) = self.index_of_matrix(op.matrix()) {
            return Ok(index);
        }
        if !self.self_extend {
            return Err(PointGroupError::OperationNotFound {
                operation: op.to_string(),
            });
        }
        self.insert(op)
    }

    /// Index of the operation with `matrix`, identifying and inserting it when
    /// self-extending.
    pub fn lookup_or_insert_matrix(&mut self, matrix: Matrix3<f64>) -> Result<usize> {
        if let Some(index) = self.index_of_matrix(&matrix) {
            return Ok(index);
        }
        if !self.self_extend {
            return Err(PointGroupError::GroupNotClosed {
                elements: describe(&self.operations),
                matrix,
            });
        }
        self.insert(SymmetryOperation::from_matrix(matrix)?)
    }

    fn insert(&mut self, op: SymmetryOperation) -> Result<usize> {
        if self.operations.len() >= self.max_order {
            return Err(PointGroupError::GroupTooLarge {
                limit: self.max_order,
            });
        }
        trace!("Adding {} to the group", op);
        self.operations.push(op);
        Ok(self.operations.len() - 1)
    }

    /// Run closure to a fixed point and return the operations in canonical order
    /// with every inverse linked.
    pub fn close(mut self) -> Result<Vec<SymmetryOperation>> {
        let identity = self
            .operations
            .iter()
            .position(|op| op.kind() == OperationKind::Identity)
            .ok_or(PointGroupError::MissingIdentity)?;

        let mut pass = 0;
        loop {
            pass += 1;
            let size = self.operations.len();
            for i in 0..size {
                for j in 0..size {
                    let product = self.operations[i].matrix() * self.operations[j].matrix();
                    if self.lookup_or_insert_matrix(product)? == identity {
                        self.link_inverses(i, j)?;
                    }
                }
            }
            let added = self.operations.len() - size;
            debug!(
                "Closure pass {} over {} operations added {}",
                pass, size, added
            );
            if added == 0 {
                break;
            }
        }

        Ok(into_canonical_order(self.operations))
    }

    /// Record `i` and `j` as mutual inverses; an operation already linked to a
    /// different inverse is a [`PointGroupError::NonUniqueInverse`].
    pub(crate) fn link_inverses(&mut self, i: usize, j: usize) -> Result<()> {
        let conflicting = |slot: Option<usize>, expected: usize| slot.is_some_and(|k| k != expected);
        if conflicting(self.operations[i].inverse_index(), j)
            || conflicting(self.operations[j].inverse_index(), i)
        {
            return Err(PointGroupError::NonUniqueInverse {
                operation: self.operations[i].to_string(),
            });
        }
        self.operations[i].set_inverse(Some(j));
        self.operations[j].set_inverse(Some(i));
        Ok(())
    }
}

/// Sort by the canonical total order, remapping inverse indices.
fn into_canonical_order(operations: Vec<SymmetryOperation>) -> Vec<SymmetryOperation> {
    let mut order: Vec<usize> = (0..operations.len()).collect();
    order.sort_by(|&a, &b| operations[a].canonical_cmp(&operations[b]));

    let mut new_position = vec![0; operations.len()];
    for (new, &old) in order.iter().enumerate() {
        new_position[old] = new;
    }

    order
        .iter()
        .map(|&old| {
            let mut op = operations[old].clone();
            op.set_inverse(op.inverse_index().map(|inv| new_position[inv]));
            op
        })
        .collect()
}

pub(crate) fn describe(operations: &[SymmetryOperation]) -> String {
    operations
        .iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
