//! Viewer configuration.
//!
//! Defaults, then environment overrides:
//!
//! | Variable | Meaning | Example |
//! |---|---|---|
//! | `FRACTALS_FIGURE` | figure shown at launch | `koch`, `dragon`, `3` |
//! | `FRACTALS_LEVEL` | its starting level | `4` |
//! | `FRACTALS_ANIMATE` | spin dynamic figures from the start | `1`, `true`, `off` |
//! | `FRACTALS_SPIN_SPEED` | spin speed in rad/s | `0.5` |

use anyhow::{Context, Result, bail};
use fractal_engine::logging::LoggingConfig;
use fractal_engine::paint::Color;
use fractal_geometry::{FigureKind, Level};

pub const ENV_FIGURE: &str = "FRACTALS_FIGURE";
pub const ENV_LEVEL: &str = "FRACTALS_LEVEL";
pub const ENV_ANIMATE: &str = "FRACTALS_ANIMATE";
pub const ENV_SPIN_SPEED: &str = "FRACTALS_SPIN_SPEED";

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub size: (f64, f64),
    pub clear: Color,
    /// Figure to show at launch; `None` starts idle and waits for `S`.
    pub start: Option<FigureKind>,
    pub start_level: Level,
    pub animate: bool,
    /// Radians per second.
    pub spin_speed: f32,
    pub logging: LoggingConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Fractals".to_string(),
            size: (512.0, 512.0),
            clear: Color::WHITE,
            start: None,
            start_level: Level::MIN,
            animate: false,
            spin_speed: 1.0,
            logging: LoggingConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = (width, height);
        self
    }

    pub fn clear(mut self, color: Color) -> Self {
        self.clear = color;
        self
    }

    pub fn start(mut self, kind: FigureKind, level: Level) -> Self {
        self.start = Some(kind);
        self.start_level = level;
        self
    }

    pub fn animate(mut self, on: bool) -> Self {
        self.animate = on;
        self
    }

    pub fn spin_speed(mut self, rad_per_sec: f32) -> Self {
        self.spin_speed = rad_per_sec;
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`. Unset or blank variables are skipped.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(raw) = var(ENV_FIGURE) {
            let kind = parse_figure(&raw).with_context(|| format!("invalid {ENV_FIGURE}"))?;
            self.start = Some(kind);
        }

        if let Some(raw) = var(ENV_LEVEL) {
            let level: u32 = raw
                .parse()
                .with_context(|| format!("invalid {ENV_LEVEL}: {raw:?} is not a level"))?;
            self.start_level = Level::new(level);
        }

        if let Some(raw) = var(ENV_ANIMATE) {
            self.animate = parse_flag(&raw).with_context(|| format!("invalid {ENV_ANIMATE}"))?;
        }

        if let Some(raw) = var(ENV_SPIN_SPEED) {
            let speed: f32 = raw
                .parse()
                .with_context(|| format!("invalid {ENV_SPIN_SPEED}: {raw:?} is not a number"))?;
            if !speed.is_finite() {
                bail!("invalid {ENV_SPIN_SPEED}: {raw:?} is not finite");
            }
            self.spin_speed = speed;
        }

        Ok(self)
    }
}

/// Accepts a figure name or alias, or its 1-based position.
fn parse_figure(raw: &str) -> Result<FigureKind> {
    if let Ok(n) = raw.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(FigureKind::from_index)
            .with_context(|| format!("figure number {n} is out of range 1..={}", FigureKind::COUNT));
    }
    Ok(raw.parse::<FigureKind>()?)
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{raw:?} is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.size, (512.0, 512.0));
        assert_eq!(config.clear, Color::WHITE);
        assert_eq!(config.start, None);
        assert_eq!(config.start_level, Level::MIN);
        assert!(!config.animate);
        assert_eq!(config.spin_speed, 1.0);
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let config = ViewerConfig::default().apply_env(env(&[])).unwrap();
        assert_eq!(config.start, None);
        assert_eq!(config.spin_speed, 1.0);
    }

    #[test]
    fn reads_every_variable() {
        let config = ViewerConfig::default()
            .apply_env(env(&[
                (ENV_FIGURE, "Dragon"),
                (ENV_LEVEL, " 7 "),
                (ENV_ANIMATE, "on"),
                (ENV_SPIN_SPEED, "2.5"),
            ]))
            .unwrap();

        assert_eq!(config.start, Some(FigureKind::Dragon));
        assert_eq!(config.start_level, Level::new(7));
        assert!(config.animate);
        assert_eq!(config.spin_speed, 2.5);
    }

    #[test]
    fn figure_by_position() {
        let config = ViewerConfig::default()
            .apply_env(env(&[(ENV_FIGURE, "2")]))
            .unwrap();
        assert_eq!(config.start, Some(FigureKind::Spiral));

        assert!(ViewerConfig::default().apply_env(env(&[(ENV_FIGURE, "0")])).is_err());
        assert!(ViewerConfig::default().apply_env(env(&[(ENV_FIGURE, "9")])).is_err());
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ViewerConfig::default()
            .apply_env(env(&[(ENV_LEVEL, "  ")]))
            .unwrap();
        assert_eq!(config.start_level, Level::MIN);
    }

    #[test]
    fn errors_name_the_variable() {
        let cases = [
            (ENV_FIGURE, "mandelbrot"),
            (ENV_LEVEL, "deep"),
            (ENV_ANIMATE, "maybe"),
            (ENV_SPIN_SPEED, "fast"),
            (ENV_SPIN_SPEED, "inf"),
        ];
        for (key, value) in cases {
            let err = ViewerConfig::default()
                .apply_env(env(&[(key, value)]))
                .unwrap_err();
            assert!(format!("{err:#}").contains(key), "{key}={value}: {err:#}");
        }
    }

    #[test]
    fn builder_sets_fields() {
        let config = ViewerConfig::new()
            .title("Koch")
            .size(800.0, 600.0)
            .start(FigureKind::Koch, Level::new(3))
            .animate(true)
            .spin_speed(0.25);
        assert_eq!(config.title, "Koch");
        assert_eq!(config.size, (800.0, 600.0));
        assert_eq!(config.start, Some(FigureKind::Koch));
        assert!(config.animate);
    }
}
