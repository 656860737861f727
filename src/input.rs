use crate::state::FluidState;

/// Map a window pixel (origin top-left) to an interior grid cell.
/// Grid `j` increases upward. Returns `None` outside the grid.
pub fn cell_at(mx: f64, my: f64, win_w: usize, win_h: usize, n: usize) -> Option<(usize, usize)> {
    if win_w == 0 || win_h == 0 {
        return None;
    }
    let fi = (mx / win_w as f64) * n as f64 + 1.0;
    let fj = ((win_h as f64 - my) / win_h as f64) * n as f64 + 1.0;
    if !(fi >= 1.0 && fj >= 1.0) {
        return None;
    }
    let (i, j) = (fi as usize, fj as usize);
    if i > n || j > n {
        return None;
    }
    Some((i, j))
}

/// Mouse buttons held this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Buttons {
    /// Drag to push the fluid.
    pub left: bool,
    /// Hold to emit smoke.
    pub right: bool,
}

/// Turns mouse drags into per-tick velocity and density sources.
#[derive(Debug, Default)]
pub struct MouseForcing {
    last: Option<(f64, f64)>,
}

impl MouseForcing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous position so the next press does not register a jump.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Clear the source buffers and write this frame's forcing into them.
    pub fn apply(
        &mut self,
        state: &mut FluidState,
        pos: Option<(f64, f64)>,
        buttons: Buttons,
        win_w: usize,
        win_h: usize,
        force: f64,
        source: f64,
    ) {
        state.clear_sources();

        let Some((mx, my)) = pos else {
            self.last = None;
            return;
        };
        if !buttons.left && !buttons.right {
            self.last = Some((mx, my));
            return;
        }
        let (omx, omy) = self.last.unwrap_or((mx, my));
        self.last = Some((mx, my));

        let Some((i, j)) = cell_at(mx, my, win_w, win_h, state.grid.n()) else {
            return;
        };
        if buttons.left {
            // Screen y grows downward, grid y upward
            state.add_velocity(i, j, force * (mx - omx), force * (omy - my));
        }
        if buttons.right {
            state.add_density(i, j, source);
        }
    }
}
