mod color;

// Re-export public API
pub use color::{map_to_rgba, rgba_to_argb, ColorMap};

use crate::state::idx;

/// Which field the window shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VizMode {
    /// Smoke density, smooth-shaded between cell centres.
    Density,
    /// One line segment per cell showing the velocity vector.
    Velocity,
}

impl VizMode {
    pub fn toggle(self) -> Self {
        match self {
            VizMode::Density => VizMode::Velocity,
            VizMode::Velocity => VizMode::Density,
        }
    }
}

/// Bilinear sample of a field at fractional grid coordinates.
/// Coordinates are clamped to the ghost band `[0, n+1]`.
fn sample(field: &[f64], gx: f64, gy: f64, n: usize) -> f64 {
    let max = (n + 1) as f64;
    let gx = gx.clamp(0.0, max);
    let gy = gy.clamp(0.0, max);
    let i0 = (gx.floor() as usize).min(n);
    let j0 = (gy.floor() as usize).min(n);
    let s1 = gx - i0 as f64;
    let t1 = gy - j0 as f64;
    let (s0, t0) = (1.0 - s1, 1.0 - t1);
    s0 * (t0 * field[idx(i0, j0, n)] + t1 * field[idx(i0, j0 + 1, n)])
        + s1 * (t0 * field[idx(i0 + 1, j0, n)] + t1 * field[idx(i0 + 1, j0 + 1, n)])
}

/// Render density into a `width x height` 0RGB framebuffer.
/// Cell centre `(i, j)` sits at `((i - 0.5) / n, (j - 0.5) / n)` of the window,
/// measured from the bottom-left corner.
pub fn render_density(buf: &mut [u32], width: usize, height: usize, dens: &[f64], n: usize, colormap: ColorMap) {
    let nf = n as f64;
    for py in 0..height {
        // Flip Y: row 0 of the framebuffer is the top of the domain
        let fy = (height - py) as f64 - 0.5;
        let gy = fy / height as f64 * nf + 0.5;
        let row = py * width;
        for px in 0..width {
            let gx = (px as f64 + 0.5) / width as f64 * nf + 0.5;
            let d = sample(dens, gx, gy, n);
            buf[row + px] = rgba_to_argb(map_to_rgba(d, colormap));
        }
    }
}

/// Bresenham line drawing, clipped to the framebuffer.
fn draw_line(buf: &mut [u32], width: usize, height: usize, x0: isize, y0: isize, x1: isize, y1: isize, color: u32) {
    let mut cx = x0;
    let mut cy = y0;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx: isize = if x0 < x1 { 1 } else { -1 };
    let sy: isize = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if cx >= 0 && (cx as usize) < width && cy >= 0 && (cy as usize) < height {
            buf[cy as usize * width + cx as usize] = color;
        }
        if cx == x1 && cy == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; cx += sx; }
        if e2 <= dx { err += dx; cy += sy; }
    }
}

/// Render the velocity field as white segments on black.
/// A velocity of 1.0 spans the whole window.
pub fn render_velocity(buf: &mut [u32], width: usize, height: usize, u: &[f64], v: &[f64], n: usize) {
    buf.fill(0);
    let w = width as f64;
    let h = height as f64;
    let cell = 1.0 / n as f64;
    for j in 1..=n {
        let y = (j as f64 - 0.5) * cell;
        for i in 1..=n {
            let x = (i as f64 - 0.5) * cell;
            let ii = idx(i, j, n);
            let (x1, y1) = (x + u[ii], y + v[ii]);
            // Skip vectors that blew up; they would draw across the screen
            if !(x1.is_finite() && y1.is_finite()) {
                continue;
            }
            draw_line(
                buf,
                width,
                height,
                (x * w) as isize,
                ((1.0 - y) * h) as isize,
                (x1 * w).clamp(-w, 2.0 * w) as isize,
                ((1.0 - y1) * h).clamp(-h, 2.0 * h) as isize,
                0x00ff_ffff,
            );
        }
    }
}
