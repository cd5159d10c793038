use nalgebra::Vector3;

use crate::errors::PointGroupError;
use crate::symmetries::conjugacy_classes::ConjugacyClass;
use crate::symmetries::symmetry_operations::{
    is_perpendicular, is_same_axis, OperationKind, SymmetryOperation,
};
use crate::Result;

/// Number of distinct `C_n` axes, counting the exponent-1 rotation of each axis.
///
/// These are physical axes: 6 `C_5` in I, 3 `C_4` in O, not the element counts.
pub fn num_c_n_axes(operations: &[SymmetryOperation], n: u32) -> usize {
    operations
        .iter()
        .filter(|op| op.kind() == OperationKind::Rotation && op.order() == n && op.exponent() == 1)
        .count()
}

/// Determine the Schoenflies name of a closed, named, canonically ordered group.
///
/// Follows the usual point-group flow chart: several high-order axes give the
/// cubic and icosahedral groups, otherwise the principal axis and the C2 axes
/// perpendicular to it separate the dihedral from the cyclic families.
pub fn schoenflies_name(
    operations: &[SymmetryOperation],
    classes: &[ConjugacyClass],
) -> Result<String> {
    let of_kind = |kind: OperationKind| operations.iter().filter(move |op| op.kind() == kind);
    let rotations: Vec<&SymmetryOperation> = of_kind(OperationKind::Rotation).collect();
    let reflection_count = of_kind(OperationKind::Reflection).count();
    let has_inversion = of_kind(OperationKind::Inversion).next().is_some();
    let has_principal_reflection =
        of_kind(OperationKind::Reflection).any(SymmetryOperation::is_principal_reflection);

    let unclassifiable = || PointGroupError::UnclassifiableGroup {
        classes: describe_classes(operations, classes),
    };

    // Distinct lines only: C_6 and C_3 on the same axis count once
    let mut high_order_axes: Vec<Vector3<f64>> = Vec::new();
    for axis in rotations
        .iter()
        .filter(|op| op.order() > 2 && op.exponent() == 1)
        .filter_map(|op| op.axis())
    {
        if !high_order_axes.iter().any(|known| is_same_axis(known, axis)) {
            high_order_axes.push(*axis);
        }
    }

    if high_order_axes.len() >= 2 {
        let name = if num_c_n_axes(operations, 5) == 6 {
            if has_inversion { "I_h" } else { "I" }
        } else if num_c_n_axes(operations, 4) == 3 {
            if has_inversion { "O_h" } else { "O" }
        } else if num_c_n_axes(operations, 3) == 4 {
            match (has_inversion, reflection_count) {
                (true, _) => "T_h",
                (false, 6) => "T_d",
                (false, _) => "T",
            }
        } else {
            return Err(unclassifiable());
        };
        return Ok(name.to_string());
    }

    if let Some(principal) = rotations.first() {
        let n = principal.order();
        let principal_axis = principal.axis().copied().unwrap_or_else(Vector3::zeros);
        let perpendicular_c2 = rotations
            .iter()
            .filter(|op| {
                op.order() == 2
                    && op
                        .axis()
                        .is_some_and(|axis| is_perpendicular(&principal_axis, axis))
            })
            .count();

        let name = if perpendicular_c2 == n as usize {
            if has_principal_reflection {
                format!("D_{}h", n)
            } else if reflection_count == n as usize {
                format!("D_{}d", n)
            } else if reflection_count == 0 {
                format!("D_{}", n)
            } else {
                return Err(unclassifiable());
            }
        } else if has_principal_reflection {
            format!("C_{}h", n)
        } else if reflection_count == n as usize {
            format!("C_{}v", n)
        } else if of_kind(OperationKind::ImproperRotation).any(|op| op.order() == 2 * n) {
            format!("S_{}", 2 * n)
        } else {
            format!("C_{}", n)
        };
        return Ok(name);
    }

    if reflection_count == 1 {
        Ok("C_s".to_string())
    } else if has_inversion {
        Ok("C_i".to_string())
    } else if operations.len() == 1 {
        Ok("C_1".to_string())
    } else {
        Err(unclassifiable())
    }
}

/// Render classes as `[E], [C_3, C_3^2], ...` for diagnostics.
pub fn describe_classes(operations: &[SymmetryOperation], classes: &[ConjugacyClass]) -> String {
    classes
        .iter()
        .map(|class| {
            let members: Vec<String> = class
                .members()
                .iter()
                .map(|&i| operations[i].to_string())
                .collect();
            format!("[{}]", members.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
