use std::fmt;

use log::debug;
use nalgebra::Matrix3;
use serde::Serialize;

use crate::errors::PointGroupError;
use crate::symmetries::conjugacy_classes::{compute_classes, ConjugacyClass};
use crate::symmetries::group_closure::{describe, GroupClosure};
use crate::symmetries::operation_naming::name_operations;
use crate::symmetries::schoenflies::{num_c_n_axes, schoenflies_name};
use crate::symmetries::symmetry_operations::{is_same_matrix, OperationKind, SymmetryOperation};
use crate::Result;

/// A finite point group with named operations, conjugacy classes and a
/// Schoenflies name.
///
/// Construction runs closure, class partitioning, operation naming and group
/// naming exactly once, in that order. The result is immutable. `M` is an opaque
/// handle to the molecule the operations were detected on; the group never looks
/// inside it.
#[derive(Debug, Clone, Serialize)]
pub struct PointGroup<M = ()> {
    #[serde(skip)]
    molecule: M,
    operations: Vec<SymmetryOperation>,
    classes: Vec<ConjugacyClass>,
    name: String,

    identity: usize,
    inversion: Option<usize>,
    rotations: Vec<usize>,
    improper_rotations: Vec<usize>,
    reflections: Vec<usize>,
}

impl<M> PointGroup<M> {
    /// Build a group from an operation set that is expected to be closed already.
    pub fn new(molecule: M, operations: impl IntoIterator<Item = SymmetryOperation>) -> Result<Self> {
        Self::with_closure(molecule, operations, false)
    }

    /// Build the group generated by `generators`, adding missing products.
    pub fn from_generators(
        molecule: M,
        generators: impl IntoIterator<Item = SymmetryOperation>,
    ) -> Result<Self> {
        Self::with_closure(molecule, generators, true)
    }

    /// Build a group, self-extending the operation set when `self_extend` is set
    /// and failing with [`PointGroupError::GroupNotClosed`] otherwise.
    pub fn with_closure(
        molecule: M,
        operations: impl IntoIterator<Item = SymmetryOperation>,
        self_extend: bool,
    ) -> Result<Self> {
        let mut operations = GroupClosure::new(operations, self_extend).close()?;
        let classes = compute_classes(&operations)?;
        name_operations(&mut operations, &classes);
        let name = schoenflies_name(&operations, &classes)?;

        let indices_of = |kind: OperationKind| -> Vec<usize> {
            operations
                .iter()
                .enumerate()
                .filter(|(_, op)| op.kind() == kind)
                .map(|(i, _)| i)
                .collect()
        };
        let identity = indices_of(OperationKind::Identity)
            .first()
            .copied()
            .ok_or(PointGroupError::MissingIdentity)?;
        let inversion = indices_of(OperationKind::Inversion).first().copied();
        let rotations = indices_of(OperationKind::Rotation);
        let improper_rotations = indices_of(OperationKind::ImproperRotation);
        let reflections = indices_of(OperationKind::Reflection);

        debug!(
            "Point group {} with {} operations in {} classes",
            name,
            operations.len(),
            classes.len()
        );

        Ok(Self {
            molecule,
            operations,
            classes,
            name,
            identity,
            inversion,
            rotations,
            improper_rotations,
            reflections,
        })
    }

    /// Schoenflies name, e.g. `C_2v` or `T_d`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Operations in canonical order.
    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    /// Conjugacy classes ordered by representative.
    pub fn classes(&self) -> &[ConjugacyClass] {
        &self.classes
    }

    pub fn molecule(&self) -> &M {
        &self.molecule
    }

    /// Group order.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Always false: a group contains at least the identity.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymmetryOperation> {
        self.operations.iter()
    }

    pub fn identity(&self) -> &SymmetryOperation {
        &self.operations[self.identity]
    }

    pub fn inversion(&self) -> Option<&SymmetryOperation> {
        self.inversion.map(|i| &self.operations[i])
    }

    pub fn rotations(&self) -> impl Iterator<Item = &SymmetryOperation> + '_ {
        self.rotations.iter().map(|&i| &self.operations[i])
    }

    pub fn improper_rotations(&self) -> impl Iterator<Item = &SymmetryOperation> + '_ {
        self.improper_rotations.iter().map(|&i| &self.operations[i])
    }

    pub fn reflections(&self) -> impl Iterator<Item = &SymmetryOperation> + '_ {
        self.reflections.iter().map(|&i| &self.operations[i])
    }

    /// Number of distinct `C_n` axes.
    pub fn num_c_n_axes(&self, n: u32) -> usize {
        num_c_n_axes(&self.operations, n)
    }

    /// Index of `op` in [`operations`](Self::operations), by matrix.
    pub fn index_of(&self, op: &SymmetryOperation) -> Option<usize> {
        self.operations.iter().position(|candidate| candidate == op)
    }

    /// The group element with matrix `matrix`.
    pub fn operation_with_matrix(&self, matrix: &Matrix3<f64>) -> Result<&SymmetryOperation> {
        self.operations
            .iter()
            .find(|op| is_same_matrix(op.matrix(), matrix))
            .ok_or_else(|| PointGroupError::GroupNotClosed {
                elements: describe(&self.operations),
                matrix: *matrix,
            })
    }

    /// The group's own copy of an operation equal to `op`.
    pub fn element_for(&self, op: &SymmetryOperation) -> Result<&SymmetryOperation> {
        self.index_of(op)
            .map(|i| &self.operations[i])
            .ok_or_else(|| PointGroupError::OperationNotFound {
                operation: op.to_string(),
            })
    }

    pub fn inverse_of(&self, op: &SymmetryOperation) -> Option<&SymmetryOperation> {
        let index = self.index_of(op)?;
        self.operations[index]
            .inverse_index()
            .map(|i| &self.operations[i])
    }

    pub fn class_of(&self, op: &SymmetryOperation) -> Option<&ConjugacyClass> {
        let index = self.index_of(op)?;
        self.classes.iter().find(|class| class.contains(index))
    }

    pub fn class_members<'a>(
        &'a self,
        class: &'a ConjugacyClass,
    ) -> impl Iterator<Item = &'a SymmetryOperation> + 'a {
        class.members().iter().map(|&i| &self.operations[i])
    }
}

impl<M> fmt::Display for PointGroup<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl<'a, M> IntoIterator for &'a PointGroup<M> {
    type Item = &'a SymmetryOperation;
    type IntoIter = std::slice::Iter<'a, SymmetryOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
