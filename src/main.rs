use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use rcfd::config::{self, Config};
use rcfd::input::{Buttons, MouseForcing};
use rcfd::renderer::{self, ColorMap, VizMode};
use rcfd::solver::diagnostics::{kinetic_energy, max_divergence, total_density};
use rcfd::FluidState;

/// Frames between diagnostic log lines.
const DIAG_INTERVAL: u64 = 60;

const KEY_HELP: &str = "Keys:
    'v'           Toggle density/velocity fields
    'm'           Cycle density color map
    'c'           Clear fields
    'right-mouse' Add densities
    'left-mouse'  Add velocities
    'q' / Esc     Quit";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut cfg = config::load();
    let args: Vec<String> = std::env::args().skip(1).collect();
    cfg.apply_args(&args)?;
    let grid = cfg.grid()?;
    let params = cfg.solver_params()?;
    log_parameters(&cfg);
    println!("{KEY_HELP}");

    let width = cfg.display.width;
    let height = cfg.display.height;
    let mut window = Window::new("rcfd", width, height, WindowOptions::default())?;
    window.set_target_fps(cfg.display.target_fps);

    // Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || r.store(false, Ordering::SeqCst))?;

    let mut state = FluidState::new(grid);
    let mut mouse = MouseForcing::new();
    let mut viz_mode = VizMode::Density;
    let mut colormap = ColorMap::Grayscale;
    let mut framebuf = vec![0u32; width * height];
    let mut frame: u64 = 0;

    while window.is_open() && running.load(Ordering::SeqCst) {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No) || window.is_key_pressed(Key::Q, KeyRepeat::No) {
            break;
        }
        if window.is_key_pressed(Key::V, KeyRepeat::No) {
            viz_mode = viz_mode.toggle();
        }
        if window.is_key_pressed(Key::M, KeyRepeat::No) {
            colormap = colormap.next();
        }
        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            state.clear();
            mouse.reset();
        }

        let pos = window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x as f64, y as f64));
        let buttons = Buttons {
            left: window.get_mouse_down(MouseButton::Left),
            right: window.get_mouse_down(MouseButton::Right),
        };
        mouse.apply(&mut state, pos, buttons, width, height, cfg.input.force, cfg.input.source);

        state.step(&params)?;

        match viz_mode {
            VizMode::Density => {
                renderer::render_density(&mut framebuf, width, height, &state.dens, grid.n(), colormap)
            }
            VizMode::Velocity => {
                renderer::render_velocity(&mut framebuf, width, height, &state.u, &state.v, grid.n())
            }
        }
        state.fade_density(cfg.display.density_fade);

        window.update_with_buffer(&framebuf, width, height)?;

        frame += 1;
        if frame % DIAG_INTERVAL == 0 {
            log::debug!(
                "frame {}: max_div={:.3e} density={:.3} ke={:.3e}",
                frame,
                max_divergence(&state.u, &state.v, grid.n()),
                total_density(&state.dens, grid.n()),
                kinetic_energy(&state.u, &state.v, grid.n()),
            );
        }
    }

    log::info!("exiting after {} frames", frame);
    Ok(())
}

fn log_parameters(cfg: &Config) {
    log::info!(
        "Parameters: N={} dt={} diff={} visc={} force={} source={}",
        cfg.physics.n,
        cfg.physics.dt,
        cfg.physics.diff,
        cfg.physics.visc,
        cfg.input.force,
        cfg.input.source,
    );
    log::info!(
        "Solver: diffuse_iter={} project_iter={}; window {}x{} @ {} fps",
        cfg.physics.diffuse_iter,
        cfg.physics.project_iter,
        cfg.display.width,
        cfg.display.height,
        cfg.display.target_fps,
    );
}
