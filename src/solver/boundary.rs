use crate::state::idx;

/// Field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Density, pressure, divergence: zero-gradient on every wall.
    Scalar,
    /// Horizontal velocity: negated across the left/right walls.
    Vx,
    /// Vertical velocity: negated across the bottom/top walls.
    Vy,
}

/// Boundary condition handler for a closed box.
///   - `FieldType::Scalar`: Neumann (copy neighbor) on all four walls
///   - `FieldType::Vx`: negate at left/right walls, copy at bottom/top
///   - `FieldType::Vy`: negate at bottom/top walls, copy at left/right
///
/// Corners take the mean of their two edge-ghost neighbors, so they are
/// written after the edges.
pub fn set_bnd(field_type: FieldType, x: &mut [f64], n: usize) {
    let flip_x = if field_type == FieldType::Vx { -1.0 } else { 1.0 };
    let flip_y = if field_type == FieldType::Vy { -1.0 } else { 1.0 };

    for k in 1..=n {
        // Left/Right walls
        x[idx(0, k, n)] = flip_x * x[idx(1, k, n)];
        x[idx(n + 1, k, n)] = flip_x * x[idx(n, k, n)];
        // Bottom/Top walls
        x[idx(k, 0, n)] = flip_y * x[idx(k, 1, n)];
        x[idx(k, n + 1, n)] = flip_y * x[idx(k, n, n)];
    }

    x[idx(0, 0, n)] = 0.5 * (x[idx(1, 0, n)] + x[idx(0, 1, n)]);
    x[idx(0, n + 1, n)] = 0.5 * (x[idx(1, n + 1, n)] + x[idx(0, n, n)]);
    x[idx(n + 1, 0, n)] = 0.5 * (x[idx(n, 0, n)] + x[idx(n + 1, 1, n)]);
    x[idx(n + 1, n + 1, n)] = 0.5 * (x[idx(n, n + 1, n)] + x[idx(n + 1, n, n)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const N: usize = 6;

    /// Interior value depends on position so every wall sees distinct numbers.
    fn ramp() -> Vec<f64> {
        let mut field = vec![0.0; (N + 2) * (N + 2)];
        for j in 1..=N {
            for i in 1..=N {
                field[idx(i, j, N)] = (i * 10 + j) as f64;
            }
        }
        field
    }

    #[test]
    fn test_set_bnd_scalar_copies_neighbor() {
        let mut field = ramp();
        set_bnd(FieldType::Scalar, &mut field, N);
        for k in 1..=N {
            assert_eq!(field[idx(0, k, N)], field[idx(1, k, N)], "left ghost at j={}", k);
            assert_eq!(field[idx(N + 1, k, N)], field[idx(N, k, N)], "right ghost at j={}", k);
            assert_eq!(field[idx(k, 0, N)], field[idx(k, 1, N)], "bottom ghost at i={}", k);
            assert_eq!(field[idx(k, N + 1, N)], field[idx(k, N, N)], "top ghost at i={}", k);
        }
    }

    #[test]
    fn test_set_bnd_vx_reflects_side_walls() {
        let mut field = ramp();
        set_bnd(FieldType::Vx, &mut field, N);
        for k in 1..=N {
            assert_eq!(field[idx(0, k, N)], -field[idx(1, k, N)]);
            assert_eq!(field[idx(N + 1, k, N)], -field[idx(N, k, N)]);
            assert_eq!(field[idx(k, 0, N)], field[idx(k, 1, N)]);
            assert_eq!(field[idx(k, N + 1, N)], field[idx(k, N, N)]);
        }
    }

    #[test]
    fn test_set_bnd_vy_reflects_floor_and_ceiling() {
        let mut field = ramp();
        set_bnd(FieldType::Vy, &mut field, N);
        for k in 1..=N {
            assert_eq!(field[idx(0, k, N)], field[idx(1, k, N)]);
            assert_eq!(field[idx(N + 1, k, N)], field[idx(N, k, N)]);
            assert_eq!(field[idx(k, 0, N)], -field[idx(k, 1, N)]);
            assert_eq!(field[idx(k, N + 1, N)], -field[idx(k, N, N)]);
        }
    }

    #[test]
    fn test_corners_average_edge_ghosts() {
        let mut field = ramp();
        set_bnd(FieldType::Vx, &mut field, N);
        // Left ghost (0,1) = -11, bottom ghost (1,0) = 11
        assert_eq!(field[idx(0, 0, N)], 0.0);
        let expected = 0.5 * (field[idx(N, N + 1, N)] + field[idx(N + 1, N, N)]);
        assert_eq!(field[idx(N + 1, N + 1, N)], expected);
        let expected = 0.5 * (field[idx(1, N + 1, N)] + field[idx(0, N, N)]);
        assert_eq!(field[idx(0, N + 1, N)], expected);
        let expected = 0.5 * (field[idx(N, 0, N)] + field[idx(N + 1, 1, N)]);
        assert_eq!(field[idx(N + 1, 0, N)], expected);
    }

    #[test]
    fn test_interior_untouched() {
        let before = ramp();
        let mut field = before.clone();
        set_bnd(FieldType::Vy, &mut field, N);
        for j in 1..=N {
            for i in 1..=N {
                assert_eq!(field[idx(i, j, N)], before[idx(i, j, N)]);
            }
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let mut field = vec![7.0; 9];
        field[idx(1, 1, 1)] = 2.0;
        set_bnd(FieldType::Scalar, &mut field, 1);
        assert!(field.iter().all(|&x| x == 2.0));
    }

    proptest! {
        #[test]
        fn prop_set_bnd_idempotent(values in prop::collection::vec(-10.0f64..10.0, (N + 2) * (N + 2))) {
            for field_type in [FieldType::Scalar, FieldType::Vx, FieldType::Vy] {
                let mut once = values.clone();
                set_bnd(field_type, &mut once, N);
                let mut twice = once.clone();
                set_bnd(field_type, &mut twice, N);
                prop_assert_eq!(&once, &twice);
            }
        }

        #[test]
        fn prop_scalar_ghosts_match_interior(values in prop::collection::vec(-10.0f64..10.0, (N + 2) * (N + 2))) {
            let mut field = values;
            set_bnd(FieldType::Scalar, &mut field, N);
            for k in 1..=N {
                prop_assert_eq!(field[idx(0, k, N)], field[idx(1, k, N)]);
                prop_assert_eq!(field[idx(k, N + 1, N)], field[idx(k, N, N)]);
            }
        }
    }
}
