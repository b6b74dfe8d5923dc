//! Figure selection state machine.
//!
//! Exactly one figure is active at a time (or none, before the first `Start`).
//! Every figure keeps its own level; switching figures resets them all to 1.

use std::f32::consts::TAU;

use fractal_geometry::{FigureKind, Level, Mesh};

/// A user intent, already decoupled from the key that produced it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ViewerCommand {
    Start,
    Next,
    Prev,
    Select(FigureKind),
    LevelUp,
    LevelDown,
    ToggleAnimation,
    Quit,
}

/// Result of applying a command.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// Nothing visible changed.
    Unchanged,
    /// Active figure or level changed; the mesh must be rebuilt.
    Changed,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Viewer {
    active: Option<FigureKind>,
    levels: [Level; FigureKind::COUNT],
    animate: bool,
    phase: f32,
    dirty: bool,
}

impl Viewer {
    /// Idle viewer: nothing selected, nothing drawn.
    pub fn new() -> Self {
        Self {
            active: None,
            levels: [Level::MIN; FigureKind::COUNT],
            animate: false,
            phase: 0.0,
            dirty: true,
        }
    }

    /// Viewer that starts on `kind` at `level` (clamped to the figure's range).
    pub fn showing(kind: FigureKind, level: Level) -> Self {
        let mut viewer = Self::new();
        viewer.active = Some(kind);
        viewer.levels[kind.index()] = level.clamped(kind.figure().max_level());
        viewer
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[inline]
    pub fn active(&self) -> Option<FigureKind> {
        self.active
    }

    #[inline]
    pub fn level(&self, kind: FigureKind) -> Level {
        self.levels[kind.index()]
    }

    pub fn active_level(&self) -> Option<Level> {
        self.active.map(|kind| self.level(kind))
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether frames must keep coming without input.
    pub fn is_animating(&self) -> bool {
        self.animate && self.active.is_some_and(|kind| kind.figure().is_dynamic())
    }

    pub fn apply(&mut self, cmd: ViewerCommand) -> Outcome {
        let outcome = match cmd {
            ViewerCommand::Start => self.switch_to(FigureKind::ALL[0]),
            ViewerCommand::Next => match self.active {
                Some(kind) => self.switch_to(kind.next()),
                None => Outcome::Unchanged,
            },
            ViewerCommand::Prev => match self.active {
                Some(kind) => self.switch_to(kind.prev()),
                None => Outcome::Unchanged,
            },
            ViewerCommand::Select(kind) => self.switch_to(kind),
            ViewerCommand::LevelUp => self.step_level(|level, max| level.up(max)),
            ViewerCommand::LevelDown => self.step_level(|level, _| level.down()),
            ViewerCommand::ToggleAnimation => {
                self.animate = !self.animate;
                log::info!("animation {}", if self.animate { "on" } else { "off" });
                Outcome::Unchanged
            }
            ViewerCommand::Quit => Outcome::Quit,
        };

        if outcome == Outcome::Changed {
            self.dirty = true;
        }
        outcome
    }

    /// Advances the animation phase by `dt * speed` radians.
    ///
    /// Returns `true` when the phase moved (and the mesh is now dirty).
    pub fn advance(&mut self, dt: f32, speed: f32) -> bool {
        if !self.is_animating() || !(dt * speed).is_finite() || dt * speed == 0.0 {
            return false;
        }
        self.phase = (self.phase + dt * speed).rem_euclid(TAU);
        self.dirty = true;
        true
    }

    /// Replaces the content of `mesh` with the active figure and clears the dirty flag.
    pub fn rebuild(&mut self, mesh: &mut Mesh) {
        mesh.clear();
        if let Some(kind) = self.active {
            kind.figure().build(self.level(kind), self.phase, mesh);
        }
        self.dirty = false;
    }

    /// Window title for the current state, e.g. `Fractals - Koch snowflake (level 2)`.
    pub fn title(&self, base: &str) -> String {
        match self.active {
            Some(kind) => format!("{base} - {} (level {})", kind.name(), self.level(kind)),
            None => base.to_string(),
        }
    }

    fn switch_to(&mut self, kind: FigureKind) -> Outcome {
        self.levels = [Level::MIN; FigureKind::COUNT];
        self.active = Some(kind);
        log::info!("showing {} (level 1)", kind.name());
        Outcome::Changed
    }

    fn step_level(&mut self, step: impl FnOnce(Level, u32) -> Level) -> Outcome {
        let Some(kind) = self.active else {
            return Outcome::Unchanged;
        };

        let slot = &mut self.levels[kind.index()];
        let next = step(*slot, kind.figure().max_level());
        if next == *slot {
            return Outcome::Unchanged;
        }

        *slot = next;
        log::info!("{} level {next}", kind.name());
        Outcome::Changed
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_draws_nothing() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.active(), None);
        assert!(viewer.is_dirty());

        let mut mesh = Mesh::new();
        viewer.rebuild(&mut mesh);
        assert!(mesh.is_empty());
        assert!(!viewer.is_dirty());
    }

    #[test]
    fn navigation_is_ignored_while_idle() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.apply(ViewerCommand::Next), Outcome::Unchanged);
        assert_eq!(viewer.apply(ViewerCommand::Prev), Outcome::Unchanged);
        assert_eq!(viewer.apply(ViewerCommand::LevelUp), Outcome::Unchanged);
        assert_eq!(viewer.active(), None);
    }

    #[test]
    fn start_selects_first_figure() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.apply(ViewerCommand::Start), Outcome::Changed);
        assert_eq!(viewer.active(), Some(FigureKind::SquaresAndDiamonds));
        assert_eq!(viewer.active_level(), Some(Level::MIN));
    }

    #[test]
    fn start_while_running_keeps_one_active_figure() {
        let mut viewer = Viewer::showing(FigureKind::Koch, Level::new(3));
        viewer.apply(ViewerCommand::Start);
        assert_eq!(viewer.active(), Some(FigureKind::SquaresAndDiamonds));
        assert_eq!(viewer.level(FigureKind::Koch), Level::MIN);
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut viewer = Viewer::showing(FigureKind::Dragon, Level::MIN);
        viewer.apply(ViewerCommand::Next);
        assert_eq!(viewer.active(), Some(FigureKind::SquaresAndDiamonds));
        viewer.apply(ViewerCommand::Prev);
        assert_eq!(viewer.active(), Some(FigureKind::Dragon));
    }

    #[test]
    fn switching_resets_every_level() {
        let mut viewer = Viewer::new();
        viewer.apply(ViewerCommand::Start);
        viewer.apply(ViewerCommand::LevelUp);
        viewer.apply(ViewerCommand::LevelUp);
        assert_eq!(viewer.active_level(), Some(Level::new(3)));

        viewer.apply(ViewerCommand::Next);
        viewer.apply(ViewerCommand::Prev);
        assert_eq!(viewer.active_level(), Some(Level::MIN));
    }

    #[test]
    fn levels_are_clamped() {
        let mut viewer = Viewer::showing(FigureKind::Menger, Level::MIN);
        assert_eq!(viewer.apply(ViewerCommand::LevelDown), Outcome::Unchanged);
        assert_eq!(viewer.active_level(), Some(Level::MIN));

        let max = FigureKind::Menger.figure().max_level();
        for _ in 0..max + 5 {
            viewer.apply(ViewerCommand::LevelUp);
        }
        assert_eq!(viewer.active_level(), Some(Level::new(max)));
        assert_eq!(viewer.apply(ViewerCommand::LevelUp), Outcome::Unchanged);
    }

    #[test]
    fn showing_clamps_start_level() {
        let viewer = Viewer::showing(FigureKind::Koch, Level::new(1000));
        let max = FigureKind::Koch.figure().max_level();
        assert_eq!(viewer.active_level(), Some(Level::new(max)));
    }

    #[test]
    fn level_change_marks_dirty() {
        let mut viewer = Viewer::showing(FigureKind::Sierpinski, Level::MIN);
        let mut mesh = Mesh::new();
        viewer.rebuild(&mut mesh);
        let before = mesh.len();

        viewer.apply(ViewerCommand::LevelUp);
        assert!(viewer.is_dirty());
        viewer.rebuild(&mut mesh);
        assert!(mesh.len() > before);
    }

    #[test]
    fn only_dynamic_figures_animate() {
        let mut viewer = Viewer::showing(FigureKind::Koch, Level::MIN).with_animation(true);
        viewer.rebuild(&mut Mesh::new());
        assert!(!viewer.is_animating());
        assert!(!viewer.advance(0.1, 1.0));
        assert!(!viewer.is_dirty());

        viewer.apply(ViewerCommand::Select(FigureKind::Spiral));
        assert!(viewer.is_animating());
        assert!(viewer.advance(0.1, 1.0));
        assert!((viewer.phase() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn phase_wraps_to_full_turn() {
        let mut viewer = Viewer::showing(FigureKind::Spiral, Level::MIN).with_animation(true);
        viewer.advance(TAU - 0.05, 1.0);
        viewer.advance(0.1, 1.0);
        assert!(viewer.phase() >= 0.0 && viewer.phase() < TAU);
        assert!((viewer.phase() - 0.05).abs() < 1e-4);
    }

    #[test]
    fn toggle_animation_does_not_dirty() {
        let mut viewer = Viewer::showing(FigureKind::Spiral, Level::MIN);
        viewer.rebuild(&mut Mesh::new());
        assert_eq!(viewer.apply(ViewerCommand::ToggleAnimation), Outcome::Unchanged);
        assert!(viewer.is_animating());
        assert!(!viewer.is_dirty());
    }

    #[test]
    fn quit_is_reported() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.apply(ViewerCommand::Quit), Outcome::Quit);
    }

    #[test]
    fn title_names_figure_and_level() {
        let mut viewer = Viewer::new();
        assert_eq!(viewer.title("Fractals"), "Fractals");

        viewer.apply(ViewerCommand::Select(FigureKind::Sierpinski));
        viewer.apply(ViewerCommand::LevelUp);
        viewer.apply(ViewerCommand::LevelUp);
        assert_eq!(
            viewer.title("Fractals"),
            format!("Fractals - {} (level 3)", FigureKind::Sierpinski.name())
        );
    }
}
