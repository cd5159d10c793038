use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{MAX_ROTATION_ORDER, RING_ANGLE_TOLERANCE, SYMMETRY_TOLERANCE};
use crate::errors::PointGroupError;
use crate::Result;

/// Field-less discriminant of [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Identity,
    Rotation,
    Inversion,
    ImproperRotation,
    Reflection,
}

impl OperationKind {
    /// Position of the kind in the canonical operation order (E, C, i, S, sigma).
    pub fn priority(self) -> u8 {
        match self {
            OperationKind::Identity => 0,
            OperationKind::Rotation => 1,
            OperationKind::Inversion => 2,
            OperationKind::ImproperRotation => 3,
            OperationKind::Reflection => 4,
        }
    }
}

/// The geometric content of a point symmetry operation.
///
/// Axes are unit vectors in the positive hemisphere (z > 0, else y > 0, else x > 0).
/// For reflections the axis is the plane normal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Identity,
    Rotation {
        n: u32,
        exponent: u32,
        axis: Vector3<f64>,
    },
    ImproperRotation {
        n: u32,
        exponent: u32,
        axis: Vector3<f64>,
    },
    Reflection {
        axis: Vector3<f64>,
    },
    Inversion,
}

/// Quantised canonical ordering key, see [`SymmetryOperation::sort_key`].
pub type OperationSortKey = (u8, i64, u32, [i64; 6]);

/// A point symmetry operation together with the slots a point group fills in.
///
/// The name, inverse and principal-reflection flag are written once while a
/// [`PointGroup`](crate::symmetries::PointGroup) is being built and are read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetryOperation {
    element: Element,
    /// Orthogonal Cartesian matrix with determinant ±1
    matrix: Matrix3<f64>,
    name: String,
    /// Index of the inverse within the owning group's operation list
    inverse: Option<usize>,
    principal_reflection: bool,
}

impl SymmetryOperation {
    fn with_element(element: Element, matrix: Matrix3<f64>) -> Self {
        Self {
            element,
            matrix,
            name: String::new(),
            inverse: None,
            principal_reflection: false,
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self::with_element(Element::Identity, Matrix3::identity())
    }

    /// Create inversion through the origin
    pub fn inversion() -> Self {
        Self::with_element(Element::Inversion, -Matrix3::identity())
    }

    /// Proper rotation `C_n^exponent` about `axis`.
    ///
    /// The result is canonicalised, so a rotation about `-z` comes back as the
    /// matching power about `+z`, and `C_4^2` comes back as `C_2`.
    pub fn rotation(n: u32, exponent: u32, axis: Vector3<f64>) -> Result<Self> {
        let matrix = rotation_matrix(n, exponent, &axis)?;
        Self::from_matrix(matrix)
    }

    /// Improper rotation `S_n^exponent = (sigma_h C_n)^exponent` about `axis`.
    pub fn improper_rotation(n: u32, exponent: u32, axis: Vector3<f64>) -> Result<Self> {
        let mut matrix = rotation_matrix(n, exponent, &axis)?;
        if exponent % 2 == 1 {
            matrix = reflection_matrix(&axis) * matrix;
        }
        Self::from_matrix(matrix)
    }

    /// Reflection through the plane with the given normal.
    pub fn reflection(normal: Vector3<f64>) -> Result<Self> {
        if normal.norm() < SYMMETRY_TOLERANCE {
            return Err(PointGroupError::InvalidOperation {
                reason: "reflection normal has zero length".to_string(),
                matrix: Matrix3::zeros(),
            });
        }
        Self::from_matrix(reflection_matrix(&normal))
    }

    /// Identify the operation represented by an orthogonal matrix.
    ///
    /// The stored matrix is the exact matrix of the identified element, which
    /// may differ from `matrix` by up to the symmetry tolerance.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Result<Self> {
        let invalid = |reason: &str| PointGroupError::InvalidOperation {
            reason: reason.to_string(),
            matrix,
        };

        if (matrix * matrix.transpose() - Matrix3::identity()).amax() > SYMMETRY_TOLERANCE {
            return Err(invalid("not orthogonal"));
        }
        let proper = matrix.determinant() > 0.0;

        if proper && is_same_matrix(&matrix, &Matrix3::identity()) {
            return Self::from_element(Element::Identity);
        }
        if !proper && is_same_matrix(&matrix, &-Matrix3::identity()) {
            return Self::from_element(Element::Inversion);
        }

        // R - R^T = 2 sin(theta) [axis]_x holds for both R and R * sigma_h
        let sin_axis = Vector3::new(
            matrix[(2, 1)] - matrix[(1, 2)],
            matrix[(0, 2)] - matrix[(2, 0)],
            matrix[(1, 0)] - matrix[(0, 1)],
        ) / 2.0;
        let trace_shift = if proper { -1.0 } else { 1.0 };
        let cos = ((matrix.trace() + trace_shift) / 2.0).clamp(-1.0, 1.0);

        if !proper && (cos - 1.0).abs() < SYMMETRY_TOLERANCE {
            // (I - sigma) / 2 = n n^T
            let normal = dominant_column(&((Matrix3::identity() - matrix) / 2.0));
            let (axis, _) = canonical_axis(normal, 0.0);
            return Self::from_element(Element::Reflection { axis });
        }

        let (axis, theta) = if sin_axis.norm() > SYMMETRY_TOLERANCE {
            let theta = sin_axis.norm().atan2(cos);
            canonical_axis(sin_axis.normalize(), theta)
        } else if proper {
            // Half turn: (R + I) / 2 = a a^T
            let axis = dominant_column(&((matrix + Matrix3::identity()) / 2.0));
            canonical_axis(axis, PI)
        } else {
            return Err(invalid("improper half turn that is not an inversion"));
        };

        let (n, exponent) = rotation_fraction(theta).ok_or_else(|| invalid("angle is not 2*pi*k/n"))?;
        let element = if proper {
            Element::Rotation { n, exponent, axis }
        } else {
            // S_n^k with odd n and even k is a proper rotation, the improper one is S_n^(k+n)
            let exponent = if n % 2 == 1 && exponent % 2 == 0 {
                exponent + n
            } else {
                exponent
            };
            Element::ImproperRotation { n, exponent, axis }
        };
        Self::from_element(element)
    }

    /// Operation whose matrix is rebuilt exactly from `element`, so noise in an
    /// identified matrix does not carry into products.
    fn from_element(element: Element) -> Result<Self> {
        let matrix = match &element {
            Element::Identity => Matrix3::identity(),
            Element::Inversion => -Matrix3::identity(),
            Element::Rotation { n, exponent, axis } => rotation_matrix(*n, *exponent, axis)?,
            // Canonical improper exponents are always odd
            Element::ImproperRotation { n, exponent, axis } => {
                reflection_matrix(axis) * rotation_matrix(*n, *exponent, axis)?
            }
            Element::Reflection { axis } => reflection_matrix(axis),
        };
        Ok(Self::with_element(element, matrix))
    }

    /// Composition `self ∘ other`: `other` is applied first.
    pub fn compose(&self, other: &Self) -> Result<Self> {
        Self::from_matrix(self.matrix * other.matrix)
    }

    /// Apply symmetry operation to a point
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.matrix * point
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn kind(&self) -> OperationKind {
        match self.element {
            Element::Identity => OperationKind::Identity,
            Element::Rotation { .. } => OperationKind::Rotation,
            Element::Inversion => OperationKind::Inversion,
            Element::ImproperRotation { .. } => OperationKind::ImproperRotation,
            Element::Reflection { .. } => OperationKind::Reflection,
        }
    }

    /// The n of `C_n` / `S_n`; reflections count as `S_1` and inversion as `S_2`.
    pub fn order(&self) -> u32 {
        match self.element {
            Element::Identity | Element::Reflection { .. } => 1,
            Element::Inversion => 2,
            Element::Rotation { n, .. } | Element::ImproperRotation { n, .. } => n,
        }
    }

    pub fn exponent(&self) -> u32 {
        match self.element {
            Element::Rotation { exponent, .. } | Element::ImproperRotation { exponent, .. } => exponent,
            _ => 1,
        }
    }

    pub fn axis(&self) -> Option<&Vector3<f64>> {
        match &self.element {
            Element::Rotation { axis, .. }
            | Element::ImproperRotation { axis, .. }
            | Element::Reflection { axis } => Some(axis),
            Element::Identity | Element::Inversion => None,
        }
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Canonical label such as `C_3^2` or `sigma_v(xz)`; empty until named.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the inverse in the owning group's operation list.
    pub fn inverse_index(&self) -> Option<usize> {
        self.inverse
    }

    /// Whether this is a horizontal reflection (plane perpendicular to the principal axis).
    pub fn is_principal_reflection(&self) -> bool {
        self.principal_reflection
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_inverse(&mut self, inverse: Option<usize>) {
        self.inverse = inverse;
    }

    pub(crate) fn set_principal_reflection(&mut self, principal: bool) {
        self.principal_reflection = principal;
    }

    /// Key of the canonical total order: kind priority, n descending, exponent
    /// ascending, then the axis (|z|, |y|, |x| descending, then signed z, y, x
    /// descending). Components are quantised at the symmetry tolerance so the
    /// order stays total.
    pub fn sort_key(&self) -> OperationSortKey {
        let axis_key = match self.axis() {
            Some(a) => [
                -quantise(a.z.abs()),
                -quantise(a.y.abs()),
                -quantise(a.x.abs()),
                -quantise(a.z),
                -quantise(a.y),
                -quantise(a.x),
            ],
            None => [0; 6],
        };
        (
            self.kind().priority(),
            -i64::from(self.order()),
            self.exponent(),
            axis_key,
        )
    }

    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Symbol describing the operation independent of any group context.
    pub fn symbol(&self) -> String {
        let fmt_axis = |a: &Vector3<f64>| format!("[{:.3}, {:.3}, {:.3}]", a.x, a.y, a.z);
        match &self.element {
            Element::Identity => "E".to_string(),
            Element::Inversion => "i".to_string(),
            Element::Rotation { n, exponent, axis } => {
                format!("C_{}^{}{}", n, exponent, fmt_axis(axis))
            }
            Element::ImproperRotation { n, exponent, axis } => {
                format!("S_{}^{}{}", n, exponent, fmt_axis(axis))
            }
            Element::Reflection { axis } => format!("sigma{}", fmt_axis(axis)),
        }
    }
}

impl PartialEq for SymmetryOperation {
    fn eq(&self, other: &Self) -> bool {
        is_same_matrix(&self.matrix, &other.matrix)
    }
}

impl PartialOrd for SymmetryOperation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.canonical_cmp(other))
    }
}

impl fmt::Display for SymmetryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.symbol())
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Matrices equal element-wise within the symmetry tolerance.
pub fn is_same_matrix(a: &Matrix3<f64>, b: &Matrix3<f64>) -> bool {
    (a - b).amax() < SYMMETRY_TOLERANCE
}

/// Two directions span the same line, within the ring-angle tolerance.
pub fn is_same_axis(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    let norms = a.norm() * b.norm();
    if norms < SYMMETRY_TOLERANCE {
        return false;
    }
    (a.dot(b) / norms).abs() > RING_ANGLE_TOLERANCE.cos()
}

/// Two directions are perpendicular, within the ring-angle tolerance.
pub fn is_perpendicular(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    let norms = a.norm() * b.norm();
    if norms < SYMMETRY_TOLERANCE {
        return false;
    }
    (a.dot(b) / norms).abs() < RING_ANGLE_TOLERANCE.sin()
}

/// Mirror image of `v` in the plane with normal `normal`.
pub fn reflect(v: &Vector3<f64>, normal: &Vector3<f64>) -> Vector3<f64> {
    let n = normal.normalize();
    v - 2.0 * v.dot(&n) * n
}

fn rotation_matrix(n: u32, exponent: u32, axis: &Vector3<f64>) -> Result<Matrix3<f64>> {
    if n == 0 || axis.norm() < SYMMETRY_TOLERANCE {
        return Err(PointGroupError::InvalidOperation {
            reason: format!("cannot build C_{}^{} about a zero axis or with n = 0", n, exponent),
            matrix: Matrix3::zeros(),
        });
    }
    let angle = 2.0 * PI * f64::from(exponent) / f64::from(n);
    Ok(Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle).into_inner())
}

fn reflection_matrix(normal: &Vector3<f64>) -> Matrix3<f64> {
    let n = normal.normalize();
    Matrix3::identity() - 2.0 * n * n.transpose()
}

/// Normalised column of largest norm of a rank-one projector `a a^T`.
fn dominant_column(projector: &Matrix3<f64>) -> Vector3<f64> {
    let column = (0..3)
        .map(|i| projector.column(i).into_owned())
        .fold(Vector3::zeros(), |best: Vector3<f64>, c| {
            if c.norm() > best.norm() {
                c
            } else {
                best
            }
        });
    column.normalize()
}

/// Flip `axis` into the positive hemisphere, re-expressing the rotation angle
/// about the flipped axis in (0, 2pi).
fn canonical_axis(axis: Vector3<f64>, theta: f64) -> (Vector3<f64>, f64) {
    let positive = if axis.z.abs() > SYMMETRY_TOLERANCE {
        axis.z > 0.0
    } else if axis.y.abs() > SYMMETRY_TOLERANCE {
        axis.y > 0.0
    } else {
        axis.x > 0.0
    };
    if positive {
        (axis, theta)
    } else {
        (-axis, (2.0 * PI - theta).rem_euclid(2.0 * PI))
    }
}

/// Smallest `(n, k)` with `theta = 2 pi k / n`, `0 < k < n`.
fn rotation_fraction(theta: f64) -> Option<(u32, u32)> {
    let turns = theta.rem_euclid(2.0 * PI) / (2.0 * PI);
    (2..=MAX_ROTATION_ORDER).find_map(|n| {
        let k = (turns * f64::from(n)).round();
        let error = (turns * f64::from(n) - k).abs() * 2.0 * PI / f64::from(n);
        if error < SYMMETRY_TOLERANCE && k >= 1.0 && k < f64::from(n) {
            Some((n, k as u32))
        } else {
            None
        }
    })
}

/// Integer grid position at the symmetry tolerance.
pub(crate) fn quantise(value: f64) -> i64 {
    (value / SYMMETRY_TOLERANCE).round() as i64
}
