use nalgebra::Vector3;

use crate::errors::PointGroupError;
use crate::symmetries::symmetry_operations::SymmetryOperation;
use crate::Result;

// Generator sets in the standard orientation: principal axis along z, the first
// C2' along x and the first sigma_v in the xz plane. Every set contains the
// identity and is meant to be closed with self-extension enabled.

fn z_axis() -> Vector3<f64> {
    Vector3::z()
}

fn with_identity(ops: impl IntoIterator<Item = Result<SymmetryOperation>>) -> Result<Vec<SymmetryOperation>> {
    std::iter::once(Ok(SymmetryOperation::identity()))
        .chain(ops)
        .collect()
}

/// C_n: a single n-fold axis.
pub fn cyclic_generators(n: u32) -> Result<Vec<SymmetryOperation>> {
    with_identity([SymmetryOperation::rotation(n, 1, z_axis())])
}

/// C_nv: n-fold axis plus a vertical mirror plane (xz).
pub fn cnv_generators(n: u32) -> Result<Vec<SymmetryOperation>> {
    with_identity([
        SymmetryOperation::rotation(n, 1, z_axis()),
        SymmetryOperation::reflection(Vector3::y()),
    ])
}

/// C_nh: n-fold axis plus the horizontal mirror plane (xy).
pub fn cnh_generators(n: u32) -> Result<Vec<SymmetryOperation>> {
    with_identity([
        SymmetryOperation::rotation(n, 1, z_axis()),
        SymmetryOperation::reflection(z_axis()),
    ])
}

/// S_2n: a single 2n-fold improper axis.
pub fn s2n_generators(n: u32) -> Result<Vec<SymmetryOperation>> {
    with_identity([SymmetryOperation::improper_rotation(2 * n, 1, z_axis())])
}

/// D_n: n-fold axis plus a perpendicular C2 along x.
pub fn dihedral_generators(n: u32) -> Result<Vec<SymmetryOperation>> {
    with_identity([
        SymmetryOperation::rotation(n, 1, z_axis()),
        SymmetryOperation::rotation(2, 1, Vector3::x()),
    ])
}

/// D_nh: D_n plus the horizontal mirror plane.
pub fn dnh_generators(n: u32) -> Result<Vec<SymmetryOperation>> {
    let mut ops = dihedral_generators(n)?;
    ops.push(SymmetryOperation::reflection(z_axis())?);
    Ok(ops)
}

/// D_nd: 2n-fold improper axis plus a perpendicular C2 along x.
pub fn dnd_generators(n: u32) -> Result<Vec<SymmetryOperation>> {
    with_identity([
        SymmetryOperation::improper_rotation(2 * n, 1, z_axis()),
        SymmetryOperation::rotation(2, 1, Vector3::x()),
    ])
}

/// T: C3 along a body diagonal and C2 along z.
pub fn tetrahedral_generators() -> Result<Vec<SymmetryOperation>> {
    with_identity([
        SymmetryOperation::rotation(3, 1, Vector3::new(1.0, 1.0, 1.0)),
        SymmetryOperation::rotation(2, 1, z_axis()),
    ])
}

/// T_d: T plus a diagonal mirror plane.
pub fn td_generators() -> Result<Vec<SymmetryOperation>> {
    let mut ops = tetrahedral_generators()?;
    ops.push(SymmetryOperation::reflection(Vector3::new(1.0, -1.0, 0.0))?);
    Ok(ops)
}

/// T_h: T plus inversion.
pub fn th_generators() -> Result<Vec<SymmetryOperation>> {
    let mut ops = tetrahedral_generators()?;
    ops.push(SymmetryOperation::inversion());
    Ok(ops)
}

/// O: C4 along z and C3 along a body diagonal.
pub fn octahedral_generators() -> Result<Vec<SymmetryOperation>> {
    with_identity([
        SymmetryOperation::rotation(4, 1, z_axis()),
        SymmetryOperation::rotation(3, 1, Vector3::new(1.0, 1.0, 1.0)),
    ])
}

/// O_h: O plus inversion.
pub fn oh_generators() -> Result<Vec<SymmetryOperation>> {
    let mut ops = octahedral_generators()?;
    ops.push(SymmetryOperation::inversion());
    Ok(ops)
}

/// I: C5 through the icosahedron vertex (0, 1, phi) and C3 through the face
/// centre along (1, 1, 1).
pub fn icosahedral_generators() -> Result<Vec<SymmetryOperation>> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    with_identity([
        SymmetryOperation::rotation(5, 1, Vector3::new(0.0, 1.0, phi)),
        SymmetryOperation::rotation(3, 1, Vector3::new(1.0, 1.0, 1.0)),
    ])
}

/// I_h: I plus inversion.
pub fn ih_generators() -> Result<Vec<SymmetryOperation>> {
    let mut ops = icosahedral_generators()?;
    ops.push(SymmetryOperation::inversion());
    Ok(ops)
}

/// Generators for a Schoenflies name such as `C_1`, `C_s`, `C_3v`, `S_4`,
/// `D_6h` or `O_h`.
pub fn standard_generators(name: &str) -> Result<Vec<SymmetryOperation>> {
    let unknown = || PointGroupError::UnknownPointGroup {
        name: name.to_string(),
    };

    match name {
        "C_1" => return with_identity(std::iter::empty()),
        "C_s" => return with_identity([SymmetryOperation::reflection(z_axis())]),
        "C_i" => return with_identity([Ok(SymmetryOperation::inversion())]),
        "T" => return tetrahedral_generators(),
        "T_d" => return td_generators(),
        "T_h" => return th_generators(),
        "O" => return octahedral_generators(),
        "O_h" => return oh_generators(),
        "I" => return icosahedral_generators(),
        "I_h" => return ih_generators(),
        _ => {}
    }

    let (family, rest) = name.split_once('_').ok_or_else(unknown)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let n: u32 = rest[..digits_end].parse().map_err(|_| unknown())?;
    let suffix = &rest[digits_end..];
    if n == 0 {
        return Err(unknown());
    }

    match (family, suffix) {
        ("C", "") => cyclic_generators(n),
        ("C", "v") => cnv_generators(n),
        ("C", "h") => cnh_generators(n),
        ("S", "") if n % 2 == 0 => s2n_generators(n / 2),
        ("D", "") => dihedral_generators(n),
        ("D", "h") => dnh_generators(n),
        ("D", "d") => dnd_generators(n),
        _ => Err(unknown()),
    }
}
