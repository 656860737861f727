mod boundary;
mod core;
pub mod diagnostics;
mod params;

// Re-export public API
pub use boundary::{set_bnd, FieldType};
pub use self::core::{add_source, advect, diffuse, lin_solve, project};
pub use params::SolverParams;

use crate::error::SolverError;
use crate::state::Grid;

/// Advance the velocity field by one tick.
///
/// `u0`/`v0` hold this tick's velocity impulses on entry and are used as
/// scratch afterwards. Preconditions are checked before anything is written.
pub fn velocity_step(
    grid: Grid,
    u: &mut [f64],
    v: &mut [f64],
    u0: &mut [f64],
    v0: &mut [f64],
    params: &SolverParams,
) -> Result<(), SolverError> {
    params.validate()?;
    grid.check_len("u", u)?;
    grid.check_len("v", v)?;
    grid.check_len("u0", u0)?;
    grid.check_len("v0", v0)?;

    let n = grid.n();
    let dt = params.dt;

    add_source(u, u0, dt);
    add_source(v, v0, dt);

    // Viscous diffusion into the scratch pair
    diffuse(FieldType::Vx, u0, u, params.visc, dt, params.diffuse_iter, n);
    diffuse(FieldType::Vy, v0, v, params.visc, dt, params.diffuse_iter, n);

    // Project before self-advection so the transport field is divergence-free
    project(u0, v0, u, v, params.project_iter, n);

    advect(FieldType::Vx, u, u0, u0, v0, dt, n);
    advect(FieldType::Vy, v, v0, u0, v0, dt, n);

    // Advection reintroduces divergence
    project(u, v, u0, v0, params.project_iter, n);
    Ok(())
}

/// Advance a passive scalar (density) by one tick through the velocity `(u, v)`.
///
/// `x0` holds this tick's density sources on entry and is used as scratch.
/// Density is never projected.
pub fn density_step(
    grid: Grid,
    x: &mut [f64],
    x0: &mut [f64],
    u: &[f64],
    v: &[f64],
    params: &SolverParams,
) -> Result<(), SolverError> {
    params.validate()?;
    grid.check_len("x", x)?;
    grid.check_len("x0", x0)?;
    grid.check_len("u", u)?;
    grid.check_len("v", v)?;

    let n = grid.n();
    let dt = params.dt;

    add_source(x, x0, dt);
    diffuse(FieldType::Scalar, x0, x, params.diff, dt, params.diffuse_iter, n);
    advect(FieldType::Scalar, x, x0, u, v, dt, n);
    Ok(())
}
