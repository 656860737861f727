use crate::error::SolverError;
use crate::solver::{density_step, velocity_step, SolverParams};

/// Convert 2D cell coordinates to a 1D index.
/// `0 <= i, j <= n + 1`; ghost cells sit at `0` and `n + 1` on each axis.
#[inline(always)]
pub const fn idx(i: usize, j: usize, n: usize) -> usize {
    i + (n + 2) * j
}

/// Square simulation domain: `n` interior cells per axis plus one ghost layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    n: usize,
}

impl Grid {
    pub fn new(n: usize) -> Result<Self, SolverError> {
        if n == 0 {
            return Err(SolverError::InvalidGridSize(n));
        }
        Ok(Self { n })
    }

    /// Interior cells per axis.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cells per field buffer, ghosts included.
    pub fn size(&self) -> usize {
        (self.n + 2) * (self.n + 2)
    }

    #[inline(always)]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.n + 1 && j <= self.n + 1);
        idx(i, j, self.n)
    }

    /// Zeroed buffer of the right length.
    pub fn alloc(&self) -> Vec<f64> {
        vec![0.0; self.size()]
    }

    /// Whether `(i, j)` is an interior cell.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        (1..=self.n).contains(&i) && (1..=self.n).contains(&j)
    }

    pub(crate) fn check_len(&self, name: &'static str, buf: &[f64]) -> Result<(), SolverError> {
        if buf.len() != self.size() {
            return Err(SolverError::BufferLength {
                name,
                expected: self.size(),
                actual: buf.len(),
            });
        }
        Ok(())
    }
}

/// Caller-owned field buffers that persist across frames.
///
/// `u_prev`, `v_prev` and `dens_prev` carry the per-tick sources in and are
/// clobbered as scratch by the step functions.
pub struct FluidState {
    pub grid: Grid,
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub u_prev: Vec<f64>,
    pub v_prev: Vec<f64>,
    pub dens: Vec<f64>,
    pub dens_prev: Vec<f64>,
}

impl FluidState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            u: grid.alloc(),
            v: grid.alloc(),
            u_prev: grid.alloc(),
            v_prev: grid.alloc(),
            dens: grid.alloc(),
            dens_prev: grid.alloc(),
        }
    }

    /// Zero every field.
    pub fn clear(&mut self) {
        for buf in [
            &mut self.u,
            &mut self.v,
            &mut self.u_prev,
            &mut self.v_prev,
            &mut self.dens,
            &mut self.dens_prev,
        ] {
            buf.fill(0.0);
        }
    }

    /// Zero the source buffers before injecting this frame's forcing.
    pub fn clear_sources(&mut self) {
        self.u_prev.fill(0.0);
        self.v_prev.fill(0.0);
        self.dens_prev.fill(0.0);
    }

    /// Set a velocity source at an interior cell. Out-of-range cells are ignored.
    pub fn add_velocity(&mut self, i: usize, j: usize, fu: f64, fv: f64) {
        if self.grid.contains(i, j) {
            let ii = self.grid.idx(i, j);
            self.u_prev[ii] = fu;
            self.v_prev[ii] = fv;
        }
    }

    /// Set a density source at an interior cell. Out-of-range cells are ignored.
    pub fn add_density(&mut self, i: usize, j: usize, amount: f64) {
        if self.grid.contains(i, j) {
            let ii = self.grid.idx(i, j);
            self.dens_prev[ii] = amount;
        }
    }

    /// One simulation tick: velocity first, then density carried by the new velocity.
    pub fn step(&mut self, params: &SolverParams) -> Result<(), SolverError> {
        log::trace!("step n={} dt={}", self.grid.n(), params.dt);
        velocity_step(
            self.grid,
            &mut self.u,
            &mut self.v,
            &mut self.u_prev,
            &mut self.v_prev,
            params,
        )?;
        density_step(self.grid, &mut self.dens, &mut self.dens_prev, &self.u, &self.v, params)
    }

    /// Exponential smoke fade applied between frames.
    pub fn fade_density(&mut self, factor: f64) {
        for d in self.dens.iter_mut() {
            *d *= factor;
        }
    }
}
