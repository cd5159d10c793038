// Constants

// Tolerances
pub const SYMMETRY_TOLERANCE: f64 = 1e-4; // For matrix comparisons and operation identification
pub const RING_ANGLE_TOLERANCE: f64 = 2.0 * std::f64::consts::PI / 180.0; // 2 degrees, for axis comparisons

// Identification limits
pub const MAX_ROTATION_ORDER: u32 = 60; // Largest n tried when reading C_n / S_n off a matrix
pub const MAX_GROUP_ORDER: usize = 480; // Self-extension gives up beyond this many operations
