use crate::error::SolverError;

/// Solver parameters for one simulation tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverParams {
    pub dt: f64,
    pub visc: f64,
    pub diff: f64,
    /// Gauss-Seidel sweeps per diffusion solve.
    pub diffuse_iter: usize,
    /// Gauss-Seidel sweeps per pressure solve.
    pub project_iter: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            dt: 0.09,
            visc: 0.0,
            diff: 0.0001,
            diffuse_iter: 20,
            project_iter: 20,
        }
    }
}

impl SolverParams {
    /// Check the numeric preconditions shared by both step functions.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SolverError::InvalidTimeStep(self.dt));
        }
        for (name, value) in [("visc", self.visc), ("diff", self.diff)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SolverError::InvalidRate { name, value });
            }
        }
        if self.diffuse_iter == 0 {
            return Err(SolverError::InvalidIterations { name: "diffuse_iter" });
        }
        if self.project_iter == 0 {
            return Err(SolverError::InvalidIterations { name: "project_iter" });
        }
        Ok(())
    }
}
