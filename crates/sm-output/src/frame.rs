//! Compositing the field and agents into an RGBA8 image.
//!
//! Two passes, in this order:
//!
//! 1. **Clear**: every pixel becomes `background` blended toward
//!    `trail_color` by `min(density / trail_scale, 1)`.
//! 2. **Agents**: each agent is one pixel at its floored cell, its color
//!    alpha-blended over what the clear pass wrote.  Agents are drawn in
//!    `AgentId` order, so a later agent on the same cell ends on top.

use std::io::{self, Write};

use sm_core::{GridDims, ResourceError, Rgba, try_alloc};
use sm_sim::RenderSnapshot;

/// Colors and scaling for [`Frame::composite`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameStyle {
    /// Density mapped to full `trail_color`.  Must be positive.
    pub trail_scale: f32,
    pub trail_color: Rgba,
    pub background:  Rgba,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            trail_scale: 1.0,
            trail_color: Rgba::WHITE,
            background:  Rgba::opaque(0.0, 0.0, 0.0),
        }
    }
}

/// A `width × height` RGBA8 image, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    dims:   GridDims,
    pixels: Vec<u8>,
}

impl Frame {
    /// A transparent-black frame.
    pub fn new(dims: GridDims) -> Result<Self, ResourceError> {
        let pixels = try_alloc("frame pixels", dims.cells() * 4, 0u8)?;
        Ok(Self { dims, pixels })
    }

    /// Allocate a frame sized to the snapshot and composite into it.
    pub fn composite(snapshot: &RenderSnapshot<'_>, style: &FrameStyle) -> Result<Self, ResourceError> {
        let mut frame = Self::new(snapshot.field.dims())?;
        frame.composite_into(snapshot, style);
        Ok(frame)
    }

    /// Re-render `snapshot` into this frame's existing buffer.
    ///
    /// # Panics
    /// Panics if the snapshot's grid differs from the frame's.
    pub fn composite_into(&mut self, snapshot: &RenderSnapshot<'_>, style: &FrameStyle) {
        assert_eq!(self.dims, snapshot.field.dims(), "frame and field dimensions differ");

        let scale = if style.trail_scale > 0.0 { style.trail_scale } else { 1.0 };
        for (px, &density) in self.pixels.chunks_exact_mut(4).zip(snapshot.field.values()) {
            let t = (density / scale).clamp(0.0, 1.0);
            px.copy_from_slice(&to_rgba8(lerp(style.background, style.trail_color, t)));
        }

        for (_, agent) in snapshot.agents.iter() {
            let i = self.dims.index_of(agent.position) * 4;
            let px = &mut self.pixels[i..i + 4];
            let dst = from_rgba8([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&to_rgba8(over(agent.color, dst)));
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA8 value at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` is outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.dims.width && y < self.dims.height, "pixel ({x}, {y}) out of range");
        let i = (y as usize * self.dims.width as usize + x as usize) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    /// Encode as binary PPM (P6).  Alpha is dropped.
    pub fn write_ppm<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "P6\n{} {}\n255\n", self.dims.width, self.dims.height)?;
        let rgb: Vec<u8> = self
            .pixels
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        w.write_all(&rgb)?;
        w.flush()
    }
}

// ── Color helpers ─────────────────────────────────────────────────────────────

fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
    Rgba::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

/// Source-over with straight alpha.
fn over(src: Rgba, dst: Rgba) -> Rgba {
    let a = src.a.clamp(0.0, 1.0);
    Rgba::new(
        src.r * a + dst.r * (1.0 - a),
        src.g * a + dst.g * (1.0 - a),
        src.b * a + dst.b * (1.0 - a),
        a + dst.a * (1.0 - a),
    )
}

fn to_rgba8(c: Rgba) -> [u8; 4] {
    c.to_array().map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn from_rgba8(px: [u8; 4]) -> Rgba {
    let [r, g, b, a] = px.map(|v| v as f32 / 255.0);
    Rgba::new(r, g, b, a)
}
