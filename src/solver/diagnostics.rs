use crate::state::idx;

/// Central-difference divergence per interior cell; ghosts are left at zero.
pub fn divergence(vx: &[f64], vy: &[f64], n: usize) -> Vec<f64> {
    let mut div = vec![0.0; (n + 2) * (n + 2)];
    let half_n = 0.5 * n as f64;
    for j in 1..=n {
        for i in 1..=n {
            div[idx(i, j, n)] = half_n
                * (vx[idx(i + 1, j, n)] - vx[idx(i - 1, j, n)]
                    + vy[idx(i, j + 1, n)] - vy[idx(i, j - 1, n)]);
        }
    }
    div
}

/// Largest absolute divergence over the interior.
pub fn max_divergence(vx: &[f64], vy: &[f64], n: usize) -> f64 {
    divergence(vx, vy, n).iter().map(|d| d.abs()).fold(0.0_f64, f64::max)
}

/// Sum of density over interior cells.
pub fn total_density(dens: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            sum += dens[idx(i, j, n)];
        }
    }
    sum
}

/// Volume-averaged kinetic energy: KE = 0.5 * <vx² + vy²>.
pub fn kinetic_energy(vx: &[f64], vy: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for j in 1..=n {
        for i in 1..=n {
            let ii = idx(i, j, n);
            sum += vx[ii] * vx[ii] + vy[ii] * vy[ii];
        }
    }
    0.5 * sum / (n * n) as f64
}
