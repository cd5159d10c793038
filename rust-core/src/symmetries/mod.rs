// Symmetries module: Contains point symmetry operations and finite point groups
// This module closes operation sets into groups, partitions them into conjugacy classes,
// labels every operation and assigns the Schoenflies name

// ======================== MODULE DECLARATIONS ========================
pub mod conjugacy_classes;
pub mod group_closure;
pub mod operation_naming;
pub mod point_groups;
pub mod schoenflies;
pub mod symmetry_operations;
pub mod symmetry_point_groups;

mod _tests_group_closure;
mod _tests_operation_naming;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::{
    Element,            // enum - identity, rotation, improper rotation, reflection or inversion with n/exponent/axis
    OperationKind,      // enum - field-less discriminant of Element
    OperationSortKey,   // type - quantised canonical ordering key
    SymmetryOperation,  // struct - element + Cartesian matrix + name/inverse/principal-reflection slots
    is_same_matrix,     // fn(a: &Matrix3<f64>, b: &Matrix3<f64>) -> bool - element-wise equality within SYMMETRY_TOLERANCE
    is_same_axis,       // fn(a: &Vector3<f64>, b: &Vector3<f64>) -> bool - same line within RING_ANGLE_TOLERANCE
    is_perpendicular,   // fn(a: &Vector3<f64>, b: &Vector3<f64>) -> bool - right angle within RING_ANGLE_TOLERANCE
    reflect,            // fn(v: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> - mirror image in a plane
};
// SymmetryOperation impl methods:
//   identity() -> Self                                                 - identity operation E
//   inversion() -> Self                                                - inversion through the origin i
//   rotation(n: u32, exponent: u32, axis: Vector3<f64>) -> Result<Self> - canonical C_n^k
//   improper_rotation(n: u32, exponent: u32, axis: Vector3<f64>) -> Result<Self> - canonical S_n^k
//   reflection(normal: Vector3<f64>) -> Result<Self>                   - mirror plane with the given normal
//   from_matrix(matrix: Matrix3<f64>) -> Result<Self>                  - identifies an orthogonal matrix
//   compose(&self, other: &Self) -> Result<Self>                       - self ∘ other (other applied first)
//   apply(&self, point: Vector3<f64>) -> Vector3<f64>                  - transforms a Cartesian point
//   kind / order / exponent / axis / matrix / element                  - accessors
//   name / inverse_index / is_principal_reflection                     - slots filled by PointGroup
//   sort_key / canonical_cmp                                           - canonical total order
//   symbol(&self) -> String                                            - context-free description

// ======================== CLOSURE ENGINE ========================
pub use group_closure::GroupClosure; // struct - lookup-or-insert closure with inverse linking
// GroupClosure impl methods:
//   new(generators, self_extend: bool) -> Self                         - drops duplicates, clears name/inverse/principal slots
//   with_max_order(self, max_order: usize) -> Self                     - caps self-extension (default MAX_GROUP_ORDER)
//   element_for(&mut self, op: SymmetryOperation) -> Result<usize>     - lookup, inserting when self-extending
//   lookup_or_insert_matrix(&mut self, matrix: Matrix3<f64>) -> Result<usize> - same, keyed by matrix
//   index_of_matrix(&self, matrix: &Matrix3<f64>) -> Option<usize>     - plain lookup
//   close(self) -> Result<Vec<SymmetryOperation>>                      - fixed point, canonical order, inverses linked

// ======================== CONJUGACY CLASSES ========================
pub use conjugacy_classes::{
    ConjugacyClass,  // struct - indices of mutually conjugate operations
    compute_classes, // fn(operations: &[SymmetryOperation]) -> Result<Vec<ConjugacyClass>> - partitions a closed group
};
// ConjugacyClass impl methods:
//   representative(&self) -> usize      - smallest member in canonical order
//   members(&self) -> &[usize]          - member indices, ascending
//   len / is_empty / contains           - set queries

// ======================== NAMING ========================
pub use operation_naming::name_operations; // fn(operations: &mut [SymmetryOperation], classes: &[ConjugacyClass]) - assigns labels
pub use schoenflies::{
    describe_classes, // fn(operations, classes) -> String - "[E], [C_3, C_3^2], ..." inventory
    num_c_n_axes,     // fn(operations: &[SymmetryOperation], n: u32) -> usize - distinct C_n axes
    schoenflies_name, // fn(operations, classes) -> Result<String> - point-group flow chart
};

// ======================== POINT GROUP ========================
pub use point_groups::PointGroup; // struct - immutable group with operations, classes and Schoenflies name
// PointGroup impl methods:
//   new(molecule: M, operations) -> Result<Self>                       - operations must already be closed
//   from_generators(molecule: M, generators) -> Result<Self>           - self-extending closure
//   with_closure(molecule: M, operations, self_extend: bool) -> Result<Self>
//   name / operations / classes / molecule / len / iter               - accessors
//   identity / inversion / rotations / improper_rotations / reflections - derived subsets
//   num_c_n_axes(&self, n: u32) -> usize                               - distinct C_n axes
//   operation_with_matrix(&self, matrix: &Matrix3<f64>) -> Result<&SymmetryOperation>
//   element_for(&self, op: &SymmetryOperation) -> Result<&SymmetryOperation>
//   index_of / inverse_of / class_of / class_members                   - lookups

// ======================== STANDARD GENERATOR SETS ========================
pub use symmetry_point_groups::{
    standard_generators,     // fn(name: &str) -> Result<Vec<SymmetryOperation>> - generators for a Schoenflies name
    cyclic_generators,       // fn(n: u32) -> Result<Vec<SymmetryOperation>> - C_n
    cnv_generators,          // fn(n: u32) -> Result<Vec<SymmetryOperation>> - C_nv
    cnh_generators,          // fn(n: u32) -> Result<Vec<SymmetryOperation>> - C_nh
    s2n_generators,          // fn(n: u32) -> Result<Vec<SymmetryOperation>> - S_2n
    dihedral_generators,     // fn(n: u32) -> Result<Vec<SymmetryOperation>> - D_n
    dnh_generators,          // fn(n: u32) -> Result<Vec<SymmetryOperation>> - D_nh
    dnd_generators,          // fn(n: u32) -> Result<Vec<SymmetryOperation>> - D_nd
    tetrahedral_generators,  // fn() -> Result<Vec<SymmetryOperation>> - T
    td_generators,           // fn() -> Result<Vec<SymmetryOperation>> - T_d
    th_generators,           // fn() -> Result<Vec<SymmetryOperation>> - T_h
    octahedral_generators,   // fn() -> Result<Vec<SymmetryOperation>> - O
    oh_generators,           // fn() -> Result<Vec<SymmetryOperation>> - O_h
    icosahedral_generators,  // fn() -> Result<Vec<SymmetryOperation>> - I
    ih_generators,           // fn() -> Result<Vec<SymmetryOperation>> - I_h
};
