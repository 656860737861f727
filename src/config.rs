use serde::Deserialize;

use crate::error::SolverError;
use crate::solver::SolverParams;
use crate::state::Grid;

pub const CONFIG_FILE: &str = "rcfd.yaml";
pub const USAGE: &str = "usage: rcfd [N dt diff visc force source]";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub physics: PhysicsConfig,
    pub input: InputConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub n: usize,
    pub dt: f64,
    pub diff: f64,
    pub visc: f64,
    pub diffuse_iter: usize,
    pub project_iter: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Velocity injected per pixel of mouse drag.
    pub force: f64,
    /// Density injected per frame while the right button is held.
    pub source: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
    /// Density multiplier applied after every displayed frame.
    pub density_fade: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            input: InputConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            n: 64,
            dt: 0.09,
            diff: 0.0001,
            visc: 0.0,
            diffuse_iter: 20,
            project_iter: 20,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            force: 5.0,
            source: 50.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            target_fps: 60,
            density_fade: 0.98,
        }
    }
}

/// Startup configuration failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Positional arguments must be absent or exactly six.
    ArgCount(usize),
    ParseArg { name: &'static str, value: String },
    Solver(SolverError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ArgCount(count) => {
                write!(f, "expected 0 or 6 arguments, got {}\n{}", count, USAGE)
            }
            ConfigError::ParseArg { name, value } => {
                write!(f, "invalid value for {}: {:?}\n{}", name, value, USAGE)
            }
            ConfigError::Solver(e) => write!(f, "invalid solver settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Solver(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SolverError> for ConfigError {
    fn from(e: SolverError) -> Self {
        ConfigError::Solver(e)
    }
}

fn parse_arg<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::ParseArg {
        name,
        value: value.to_string(),
    })
}

impl Config {
    /// Override physics and input settings from `N dt diff visc force source`.
    /// `args` excludes the program name.
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), ConfigError> {
        match args {
            [] => Ok(()),
            [n, dt, diff, visc, force, source] => {
                self.physics.n = parse_arg("N", n)?;
                self.physics.dt = parse_arg("dt", dt)?;
                self.physics.diff = parse_arg("diff", diff)?;
                self.physics.visc = parse_arg("visc", visc)?;
                self.input.force = parse_arg("force", force)?;
                self.input.source = parse_arg("source", source)?;
                Ok(())
            }
            _ => Err(ConfigError::ArgCount(args.len())),
        }
    }

    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.physics.n)?)
    }

    pub fn solver_params(&self) -> Result<SolverParams, ConfigError> {
        let params = SolverParams {
            dt: self.physics.dt,
            visc: self.physics.visc,
            diff: self.physics.diff,
            diffuse_iter: self.physics.diffuse_iter,
            project_iter: self.physics.project_iter,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Load `rcfd.yaml` from the working directory, falling back to defaults.
pub fn load() -> Config {
    load_from(std::path::Path::new(CONFIG_FILE))
}

pub fn load_from(path: &std::path::Path) -> Config {
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("failed to parse {}: {e}; using defaults", path.display());
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}; using defaults", path.display());
                Config::default()
            }
        }
    } else {
        Config::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.physics.n, 64);
        assert_eq!(cfg.physics.dt, 0.09);
        assert_eq!(cfg.physics.diff, 0.0001);
        assert_eq!(cfg.physics.visc, 0.0);
        assert_eq!(cfg.physics.diffuse_iter, 20);
        assert_eq!(cfg.physics.project_iter, 20);
        assert_eq!(cfg.input.force, 5.0);
        assert_eq!(cfg.input.source, 50.0);
        assert_eq!(cfg.display.width, 800);
        assert_eq!(cfg.display.height, 600);
        assert_eq!(cfg.display.target_fps, 60);
        assert_eq!(cfg.display.density_fade, 0.98);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "physics:\n  visc: 0.01\ninput:\n  source: 80.0\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.physics.visc, 0.01);
        assert_eq!(cfg.physics.n, 64); // default
        assert_eq!(cfg.input.source, 80.0);
        assert_eq!(cfg.input.force, 5.0); // default
        assert_eq!(cfg.display.width, 800); // default
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
physics:
  n: 128
  dt: 0.05
  diff: 0.001
  visc: 0.0002
  diffuse_iter: 10
  project_iter: 40
input:
  force: 2.5
  source: 100.0
display:
  width: 512
  height: 512
  target_fps: 30
  density_fade: 0.95
"#;
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.physics.n, 128);
        assert_eq!(cfg.physics.dt, 0.05);
        assert_eq!(cfg.physics.diff, 0.001);
        assert_eq!(cfg.physics.visc, 0.0002);
        assert_eq!(cfg.physics.diffuse_iter, 10);
        assert_eq!(cfg.physics.project_iter, 40);
        assert_eq!(cfg.input.force, 2.5);
        assert_eq!(cfg.input.source, 100.0);
        assert_eq!(cfg.display.width, 512);
        assert_eq!(cfg.display.height, 512);
        assert_eq!(cfg.display.target_fps, 30);
        assert_eq!(cfg.display.density_fade, 0.95);
    }

    #[test]
    fn test_load_missing_file() {
        let cfg = load_from(std::path::Path::new("does-not-exist/rcfd.yaml"));
        assert_eq!(cfg.physics.n, 64);
        assert_eq!(cfg.input.source, 50.0);
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("rcfd-bad-{}.yaml", std::process::id()));
        std::fs::write(&path, "physics: [not, a, map]\n").unwrap();
        let cfg = load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.physics.n, 64);
    }

    #[test]
    fn test_no_args_keeps_config() {
        let mut cfg = Config::default();
        cfg.apply_args(&[]).unwrap();
        assert_eq!(cfg.physics.n, 64);
    }

    #[test]
    fn test_six_args_override() {
        let mut cfg = Config::default();
        cfg.apply_args(&args(&["32", "0.1", "0", "0.001", "2", "75"])).unwrap();
        assert_eq!(cfg.physics.n, 32);
        assert_eq!(cfg.physics.dt, 0.1);
        assert_eq!(cfg.physics.diff, 0.0);
        assert_eq!(cfg.physics.visc, 0.001);
        assert_eq!(cfg.input.force, 2.0);
        assert_eq!(cfg.input.source, 75.0);
    }

    #[test]
    fn test_wrong_arg_count() {
        let mut cfg = Config::default();
        assert_eq!(cfg.apply_args(&args(&["32", "0.1"])), Err(ConfigError::ArgCount(2)));
    }

    #[test]
    fn test_unparseable_arg() {
        let mut cfg = Config::default();
        let err = cfg.apply_args(&args(&["big", "0.1", "0", "0", "5", "50"]));
        assert_eq!(err, Err(ConfigError::ParseArg { name: "N", value: "big".to_string() }));
    }

    #[test]
    fn test_solver_params_validated() {
        let mut cfg = Config::default();
        cfg.physics.dt = 0.0;
        assert_eq!(cfg.solver_params(), Err(ConfigError::Solver(SolverError::InvalidTimeStep(0.0))));
        cfg.physics.n = 0;
        assert_eq!(cfg.grid(), Err(ConfigError::Solver(SolverError::InvalidGridSize(0))));
    }

    #[test]
    fn test_solver_params_from_defaults() {
        let params = Config::default().solver_params().unwrap();
        assert_eq!(params, SolverParams::default());
    }
}
