use glam::Vec3;

use crate::constants::SLOTS_PER_TRIANGLE;

/// Triangle identifier: the offset of the triangle's first slot in the flat
/// triangle array (always a multiple of 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TriangleId(pub u32);

impl TriangleId {
    /// Identifier of the `ordinal`-th triangle.
    pub fn from_ordinal(ordinal: usize) -> Self {
        Self((ordinal * SLOTS_PER_TRIANGLE) as u32)
    }

    /// Zero-based position of the triangle in the triangle list.
    pub fn ordinal(self) -> usize {
        self.0 as usize / SLOTS_PER_TRIANGLE
    }

    /// First slot in the flat triangle array.
    pub fn slot(self) -> usize {
        self.0 as usize
    }
}

/// What the brush writes into the color buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BrushMode {
    #[default]
    Paint = 0,
    Erase = 1,
}

impl BrushMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Paint => Self::Erase,
            Self::Erase => Self::Paint,
        }
    }

    /// Status-display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paint => "Addition",
            Self::Erase => "Subtraction",
        }
    }
}

/// Per-vertex RGB color.
///
/// Laid out for direct GPU upload with bytemuck.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct VertexColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl VertexColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<[f32; 3]> for VertexColor {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Nearest triangle struck by a picking ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Struck triangle
    pub triangle: TriangleId,
    /// World-space intersection point
    pub point: Vec3,
    /// Euclidean distance from the camera position to `point`
    pub distance: f32,
}
