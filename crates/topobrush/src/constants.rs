/// Epsilon for the ray-triangle determinant; smaller values are treated as
/// parallel or degenerate.
pub const RAY_EPSILON: f32 = 1e-6;

/// Number of vertex-index slots per triangle.
pub const SLOTS_PER_TRIANGLE: usize = 3;

/// Relative zoom change per scroll step.
pub const ZOOM_STEP: f32 = 0.05;

/// Zooming in is only allowed below this field of view (degrees).
pub const ZOOM_IN_MAX_FOV: f32 = 90.0;

/// Zooming out is only allowed above this field of view (degrees).
pub const ZOOM_OUT_MIN_FOV: f32 = 30.0;
