//! Planar geometry on a toroidal grid.
//!
//! Positions are continuous `f32` coordinates in `[0, width) × [0, height)`.
//! The trail field is sampled per integer cell; a position belongs to the
//! cell `(floor(x), floor(y))`.  Every coordinate that leaves the grid
//! re-enters on the opposite edge; there is no boundary special-casing.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A continuous 2D coordinate or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `angle` (radians, 0 = +x, π/2 = +y).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Dimensions of the toroidal grid and the wrapping index arithmetic on it.
///
/// Cells are stored row-major: `index = y * width + x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub width:  u32,
    pub height: u32,
}

impl GridDims {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[inline]
    pub fn cells(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of the cell `(x mod width, y mod height)`.
    ///
    /// Accepts any signed coordinate; the result is always in range.
    #[inline]
    pub fn wrap_index(self, x: i64, y: i64) -> usize {
        let (cx, cy) = self.wrap_cell(x, y);
        cy as usize * self.width as usize + cx as usize
    }

    /// Wrap a signed cell coordinate into the grid.
    #[inline]
    pub fn wrap_cell(self, x: i64, y: i64) -> (u32, u32) {
        (
            x.rem_euclid(self.width as i64) as u32,
            y.rem_euclid(self.height as i64) as u32,
        )
    }

    /// Wrap a continuous position into `[0, width) × [0, height)`.
    #[inline]
    pub fn wrap_position(self, p: Vec2) -> Vec2 {
        Vec2::new(
            wrap_coord(p.x, self.width as f32),
            wrap_coord(p.y, self.height as f32),
        )
    }

    /// The (wrapped) cell containing the continuous position `p`.
    #[inline]
    pub fn cell_of(self, p: Vec2) -> (u32, u32) {
        self.wrap_cell(p.x.floor() as i64, p.y.floor() as i64)
    }

    /// Row-major index of the cell containing `p`.
    #[inline]
    pub fn index_of(self, p: Vec2) -> usize {
        let (x, y) = self.cell_of(p);
        y as usize * self.width as usize + x as usize
    }
}

/// `v mod extent` into `[0, extent)`.
///
/// `rem_euclid` can round a tiny negative value up to exactly `extent`; that
/// case folds back to 0 so the half-open bound always holds.
#[inline]
pub fn wrap_coord(v: f32, extent: f32) -> f32 {
    let w = v.rem_euclid(extent);
    if w >= extent { 0.0 } else { w }
}

// ── Rgba ──────────────────────────────────────────────────────────────────────

/// Linear RGBA color with every channel in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    #[inline]
    pub fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
