//! Human-readable labels for the operations of a closed point group.
//!
//! Labels follow the usual character-table conventions: `E`, `i`, `C_n^k`,
//! `S_n^k` and `sigma_{h,v,d}`. Where several axes share an order they are told
//! apart by a coordinate suffix (`(z)`, `(xz)`, ...) when the axis lies along a
//! reference direction, and by prime marks otherwise. Every choice is keyed off
//! the canonical operation order, so identical inputs always get identical names.

use log::trace;
use nalgebra::Vector3;

use crate::symmetries::conjugacy_classes::{class_lookup, ConjugacyClass};
use crate::symmetries::symmetry_operations::{
    is_perpendicular, is_same_axis, quantise, reflect, OperationKind, SymmetryOperation,
};

/// Reference directions for proper rotation suffixes.
///
/// The `(y)` entry is the (0, 1, 1) diagonal rather than the y axis. This is the
/// long-standing labeling behaviour and is kept until it can be checked against
/// independent character-table data; improper rotations use (0, 1, 0).
const ROTATION_REFERENCE_AXES: [([f64; 3], &str); 3] = [
    ([0.0, 0.0, 1.0], "(z)"),
    ([0.0, 1.0, 1.0], "(y)"),
    ([1.0, 0.0, 0.0], "(x)"),
];

const IMPROPER_ROTATION_REFERENCE_AXES: [([f64; 3], &str); 3] = [
    ([0.0, 0.0, 1.0], "(z)"),
    ([0.0, 1.0, 0.0], "(y)"),
    ([1.0, 0.0, 0.0], "(x)"),
];

/// Plane normals and the coordinate plane they label.
const REFLECTION_REFERENCE_PLANES: [([f64; 3], &str); 3] = [
    ([0.0, 0.0, 1.0], "(xy)"),
    ([0.0, 1.0, 0.0], "(xz)"),
    ([1.0, 0.0, 0.0], "(yz)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReflectionSubscript {
    Horizontal,
    Dihedral,
    Vertical,
}

impl ReflectionSubscript {
    fn as_str(self) -> &'static str {
        match self {
            ReflectionSubscript::Horizontal => "h",
            ReflectionSubscript::Dihedral => "d",
            ReflectionSubscript::Vertical => "v",
        }
    }

    fn slot(self) -> usize {
        match self {
            ReflectionSubscript::Horizontal => 0,
            ReflectionSubscript::Dihedral => 1,
            ReflectionSubscript::Vertical => 2,
        }
    }
}

/// Flag principal reflections and assign every operation its name.
///
/// `operations` must be in canonical order and `classes` must partition them.
pub fn name_operations(operations: &mut [SymmetryOperation], classes: &[ConjugacyClass]) {
    flag_principal_reflections(operations);

    for op in operations.iter_mut() {
        match op.kind() {
            OperationKind::Identity => op.set_name("E"),
            OperationKind::Inversion => op.set_name("i"),
            _ => {}
        }
    }

    name_axial_family(
        operations,
        OperationKind::Rotation,
        "C",
        &ROTATION_REFERENCE_AXES,
    );
    name_axial_family(
        operations,
        OperationKind::ImproperRotation,
        "S",
        &IMPROPER_ROTATION_REFERENCE_AXES,
    );
    name_reflections(operations, classes);

    for op in operations.iter() {
        trace!("Named {} -> {}", op.symbol(), op.name());
    }
}

fn indices_of(operations: &[SymmetryOperation], kind: OperationKind) -> Vec<usize> {
    operations
        .iter()
        .enumerate()
        .filter(|(_, op)| op.kind() == kind)
        .map(|(i, _)| i)
        .collect()
}

fn axis_of(op: &SymmetryOperation) -> Vector3<f64> {
    op.axis().copied().unwrap_or_else(Vector3::zeros)
}

/// Mark horizontal reflections against the leading `(n, exponent)` rotations.
fn flag_principal_reflections(operations: &mut [SymmetryOperation]) {
    let rotations = indices_of(operations, OperationKind::Rotation);
    let Some(&first) = rotations.first() else {
        return;
    };
    let key = (operations[first].order(), operations[first].exponent());
    let principal_axes: Vec<Vector3<f64>> = rotations
        .iter()
        .take_while(|&&i| (operations[i].order(), operations[i].exponent()) == key)
        .map(|&i| axis_of(&operations[i]))
        .collect();

    let reflections = indices_of(operations, OperationKind::Reflection);
    if key.0 > 2 {
        for &r in &reflections {
            let normal = axis_of(&operations[r]);
            if principal_axes.iter().any(|axis| is_same_axis(&normal, axis)) {
                operations[r].set_principal_reflection(true);
            }
        }
    } else if let Some(&r) = reflections
        .iter()
        .find(|&&r| is_same_axis(&axis_of(&operations[r]), &principal_axes[0]))
    {
        operations[r].set_principal_reflection(true);
    }
}

/// Euler's totient: the number of canonical powers `C_n^k` sharing one axis.
fn powers_per_axis(n: u32) -> usize {
    (1..=n).filter(|&k| gcd(k, n) == 1).count()
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn name_axial_family(
    operations: &mut [SymmetryOperation],
    kind: OperationKind,
    prefix: &str,
    reference_axes: &[([f64; 3], &str)],
) {
    let indices = indices_of(operations, kind);
    let groups: Vec<Vec<usize>> = indices
        .chunk_by(|&a, &b| operations[a].order() == operations[b].order())
        .map(|chunk| chunk.to_vec())
        .collect();

    for group in groups {
        let order = operations[group[0]].order();

        if group.len() == powers_per_axis(order) {
            // A single axis: C_n, C_n^k, ...
            operations[group[0]].set_name(format!("{}_{}", prefix, order));
            for &i in &group[1..] {
                let exponent = operations[i].exponent();
                operations[i].set_name(format!("{}_{}^{}", prefix, order, exponent));
            }
            continue;
        }

        let naxes = group
            .iter()
            .filter(|&&i| operations[i].exponent() == 1)
            .count();
        let mut labels: Vec<String> = Vec::with_capacity(naxes);
        let mut prime_count = 0;
        let mut has_paren_label = false;

        for (position, &i) in group.iter().enumerate() {
            if position < naxes {
                let axis = axis_of(&operations[i]);
                let suffix = reference_axes
                    .iter()
                    .find(|(direction, _)| is_same_axis(&axis, &Vector3::from(*direction)))
                    .map(|(_, suffix)| *suffix);
                let label = match suffix {
                    Some(suffix) => {
                        has_paren_label = true;
                        suffix.to_string()
                    }
                    None => {
                        let primes = "'".repeat(prime_count + usize::from(has_paren_label));
                        prime_count += 1;
                        primes
                    }
                };
                operations[i].set_name(format!("{}_{}{}", prefix, order, label));
                labels.push(label);
            } else {
                let label = labels
                    .get(position % naxes.max(1))
                    .map_or("", String::as_str);
                let exponent = operations[i].exponent();
                operations[i].set_name(format!("{}_{}{}^{}", prefix, order, label, exponent));
            }
        }
    }
}

fn name_reflections(operations: &mut [SymmetryOperation], classes: &[ConjugacyClass]) {
    let class_of = class_lookup(classes, operations.len());
    let mut prime_count = [0usize; 3];
    let mut has_paren_label = false;

    for r in indices_of(operations, OperationKind::Reflection) {
        let subscript = if operations[r].is_principal_reflection() {
            ReflectionSubscript::Horizontal
        } else if is_dihedral(operations, r, &class_of) {
            ReflectionSubscript::Dihedral
        } else {
            ReflectionSubscript::Vertical
        };

        let normal = axis_of(&operations[r]);
        let plane = REFLECTION_REFERENCE_PLANES
            .iter()
            .find(|(direction, _)| is_same_axis(&normal, &Vector3::from(*direction)))
            .map(|(_, plane)| *plane);
        let label = match plane {
            Some(plane) => {
                has_paren_label = true;
                plane.to_string()
            }
            None => {
                let slot = subscript.slot();
                let primes = "'".repeat(prime_count[slot] + usize::from(has_paren_label));
                prime_count[slot] += 1;
                primes
            }
        };
        operations[r].set_name(format!("sigma_{}{}", subscript.as_str(), label));
    }
}

/// Whether the reflection `r` is a dihedral plane.
///
/// The plane must contain some rotation axis p and swap two distinct C2 axes
/// perpendicular to p, while containing none of the C2 axes conjugate to the
/// anchor C2 (those planes are vertical). The anchor is the C2 perpendicular to
/// p with the largest x component, ties going to the first in canonical order.
pub(crate) fn is_dihedral(operations: &[SymmetryOperation], r: usize, class_of: &[usize]) -> bool {
    let normal = axis_of(&operations[r]);
    let rotations = indices_of(operations, OperationKind::Rotation);

    rotations
        .iter()
        .filter(|&&p| operations[p].exponent() == 1)
        .any(|&p| {
            let principal = axis_of(&operations[p]);
            if !is_perpendicular(&normal, &principal) {
                return false;
            }
            let perpendicular_c2: Vec<usize> = rotations
                .iter()
                .copied()
                .filter(|&i| {
                    operations[i].order() == 2 && is_perpendicular(&axis_of(&operations[i]), &principal)
                })
                .collect();
            // Anchor on the C2 nearest the x direction, where the first C2' lies
            // in the standard orientation
            let Some(&anchor) = perpendicular_c2
                .iter()
                .min_by_key(|&&i| -quantise(axis_of(&operations[i]).x.abs()))
            else {
                return false;
            };

            let contains_primary_c2 = perpendicular_c2
                .iter()
                .filter(|&&i| class_of[i] == class_of[anchor])
                .any(|&i| is_perpendicular(&normal, &axis_of(&operations[i])));
            if contains_primary_c2 {
                return false;
            }

            perpendicular_c2.iter().any(|&a| {
                let axis_a = axis_of(&operations[a]);
                let image = reflect(&axis_a, &normal);
                perpendicular_c2.iter().any(|&b| {
                    let axis_b = axis_of(&operations[b]);
                    !is_same_axis(&axis_a, &axis_b) && is_same_axis(&image, &axis_b)
                })
            })
        })
}
