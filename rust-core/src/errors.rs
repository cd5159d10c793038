use nalgebra::Matrix3;
use thiserror::Error;

/// Everything that can go wrong while building a point group.
///
/// None of these are recoverable for the construction in progress: they mean the
/// supplied operations do not form a valid finite point group at the configured
/// tolerances.
#[derive(Debug, Clone, Error)]
pub enum PointGroupError {
    #[error("group missing identity element")]
    MissingIdentity,

    #[error(
        "group not closed: in group with elements [{elements}], could not find element with matrix:{matrix}"
    )]
    GroupNotClosed {
        elements: String,
        matrix: Matrix3<f64>,
    },

    #[error("inverse of group element {operation} is not unique")]
    NonUniqueInverse { operation: String },

    #[error("conjugacy classes not disjoint: {operation} was placed in two classes")]
    ClassesNotDisjoint { operation: String },

    #[error("don't know the name of group with classes: {classes} (perhaps adjust tolerances?)")]
    UnclassifiableGroup { classes: String },

    #[error("operation {operation} not found in group")]
    OperationNotFound { operation: String },

    #[error("matrix is not a point symmetry operation ({reason}):{matrix}")]
    InvalidOperation {
        reason: String,
        matrix: Matrix3<f64>,
    },

    #[error("no standard generator set for point group {name}")]
    UnknownPointGroup { name: String },

    #[error("closure exceeded {limit} operations; generators do not span a finite point group")]
    GroupTooLarge { limit: usize },
}
