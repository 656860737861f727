/// Caller contract violations detected before a step touches any buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Grid side must be at least one interior cell.
    InvalidGridSize(usize),
    /// A field buffer does not hold `(n+2)^2` cells.
    BufferLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Time step must be finite and strictly positive.
    InvalidTimeStep(f64),
    /// Viscosity / diffusion rate must be finite and non-negative.
    InvalidRate { name: &'static str, value: f64 },
    /// Relaxation sweep counts must be at least one.
    InvalidIterations { name: &'static str },
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::InvalidGridSize(n) => write!(f, "grid size must be >= 1, got {}", n),
            SolverError::BufferLength { name, expected, actual } => write!(
                f,
                "buffer `{}` has {} cells, expected {}",
                name, actual, expected
            ),
            SolverError::InvalidTimeStep(dt) => write!(f, "time step must be > 0, got {}", dt),
            SolverError::InvalidRate { name, value } => {
                write!(f, "{} must be >= 0, got {}", name, value)
            }
            SolverError::InvalidIterations { name } => write!(f, "{} must be >= 1", name),
        }
    }
}

impl std::error::Error for SolverError {}
