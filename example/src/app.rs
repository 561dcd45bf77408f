use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use glide_components::{
    slider::{MeasureTarget, NudgeDirection, Slider, SliderArgs, SliderArgsError},
    theme::SliderColors,
};
use glide_ui::{Color, PanRecognizer, PointerSample, PxSize, ThemeProvider};
use parking_lot::Mutex;
use tracing::{info, warn};

const FRAME: Duration = Duration::from_millis(16);
const CONTAINER_HEIGHT: f32 = 40.0;
const TRACK_HEIGHT: f32 = 5.0;
const THUMB_EDGE: f32 = 16.0;

/// Callback activity observed during a session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionLog {
    pub starts: Vec<f32>,
    pub changes: Vec<f32>,
    pub completes: Vec<f32>,
}

/// Parameters of the scripted session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub maximum_value: f32,
    pub step: f32,
    pub max_available_value: f32,
    pub label_count: usize,
    pub width: f32,
    /// Replaces the theme's thumb color.
    pub thumb_color: Option<Color>,
}

/// Drives one slider through layout, drags, tick presses and external
/// updates, the way a host frame loop would.
pub struct Session<'a, T: ThemeProvider> {
    slider: Slider,
    pan: PanRecognizer,
    theme: &'a T,
    origin: Instant,
    now: Duration,
    log: Arc<Mutex<SessionLog>>,
}

impl<'a, T: ThemeProvider> Session<'a, T> {
    pub fn new(config: &SessionConfig, theme: &'a T) -> Result<Self, SliderArgsError> {
        let log = Arc::new(Mutex::new(SessionLog::default()));
        let (starts, changes, completes) = (Arc::clone(&log), Arc::clone(&log), Arc::clone(&log));
        let mut args = SliderArgs::default();
        if let Some(thumb) = config.thumb_color {
            args = args.colors(SliderColors {
                thumb,
                ..SliderColors::from_theme(theme)
            });
        }
        let slider = Slider::new(
            args
                .maximum_value(config.maximum_value)
                .step(config.step)
                .max_available_value(config.max_available_value)
                .label_count(config.label_count)
                .thumb_touch_size(PxSize::from([40.0, 40.0]))
                .show_percent_symbol(true)
                .animate_transitions(true)
                .on_sliding_start(move |v| starts.lock().starts.push(v))
                .on_value_change(move |v| changes.lock().changes.push(v))
                .on_sliding_complete(move |v| {
                    info!(value = v, "sliding complete");
                    completes.lock().completes.push(v);
                }),
        )?;
        Ok(Self {
            slider,
            pan: PanRecognizer::new(),
            theme,
            origin: Instant::now(),
            now: Duration::ZERO,
            log,
        })
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn log(&self) -> SessionLog {
        self.log.lock().clone()
    }

    /// Runs the whole script.
    pub fn run(&mut self, width: f32) -> SessionLog {
        // The host may deliver a touch before the first layout pass.
        if !self.pointer_down(20.0) {
            warn!("touch before layout was not claimed");
        }
        self.pointer_up(20.0);

        self.layout(width);
        self.render("laid out");

        let start = self.thumb_center();
        self.drag(start, start + width / 2.0, 8);
        let start = self.thumb_center();
        self.drag(start, width, 8);

        for index in [1, self.slider.ticks().len().saturating_sub(1)] {
            let applied = self.slider.press_tick(index);
            info!(index, applied, value = self.slider.value(), "tick pressed");
            self.render("tick");
        }

        if self.slider.nudge(NudgeDirection::Increment) {
            self.render("nudged");
        }

        self.slider.set_value(0.0);
        for _ in 0..4 {
            self.render("external value");
            self.advance();
        }
        self.log()
    }

    fn layout(&mut self, width: f32) {
        self.slider
            .on_layout(MeasureTarget::Container, PxSize::from([width, CONTAINER_HEIGHT]));
        self.slider
            .on_layout(MeasureTarget::Track, PxSize::from([width, TRACK_HEIGHT]));
        self.slider
            .on_layout(MeasureTarget::Thumb, PxSize::from([THUMB_EDGE, THUMB_EDGE]));
    }

    fn thumb_center(&mut self) -> f32 {
        let frame = self.slider.frame(self.origin + self.now);
        frame.thumb_left.0 + THUMB_EDGE / 2.0
    }

    fn drag(&mut self, from: f32, to: f32, frames: u32) {
        if !self.pointer_down(from) {
            return;
        }
        for i in 1..=frames {
            self.advance();
            let x = from + (to - from) * i as f32 / frames as f32;
            let sample = self.sample(x);
            self.pan.pointer_move(&mut self.slider, sample);
            self.render("drag");
        }
        self.pointer_up(to);
        self.render("released");
    }

    fn pointer_down(&mut self, x: f32) -> bool {
        let sample = self.sample(x);
        self.pan.pointer_down(&mut self.slider, sample)
    }

    fn pointer_up(&mut self, x: f32) {
        self.advance();
        let sample = self.sample(x);
        self.pan.pointer_up(&mut self.slider, sample);
    }

    fn sample(&self, x: f32) -> PointerSample {
        PointerSample::at(x, CONTAINER_HEIGHT / 2.0, self.now.as_millis() as u64)
    }

    fn advance(&mut self) {
        self.now += FRAME;
    }

    fn render(&mut self, stage: &str) {
        let frame = self.slider.frame(self.origin + self.now);
        let colors = self.slider.colors(self.theme);
        info!(
            stage,
            value = self.slider.value(),
            thumb_left = frame.thumb_left.0,
            track = frame.minimum_track_width.0,
            bubble = %frame.bubble.text,
            bubble_opacity = frame.bubble.opacity,
            scale = frame.thumb_scale,
            thumb_color = ?colors.thumb,
            "frame"
        );
    }
}

#[cfg(test)]
mod tests {
    use glide_ui::{StaticTheme, ThemeMode};

    use super::*;

    fn config() -> SessionConfig {
        SessionConfig {
            maximum_value: 100.0,
            step: 1.0,
            max_available_value: 80.0,
            label_count: 5,
            width: 300.0,
            thumb_color: None,
        }
    }

    #[test]
    fn scripted_session_honors_the_ceiling() {
        let theme = StaticTheme(ThemeMode::Dark);
        let config = config();
        let mut session = Session::new(&config, &theme).expect("valid args");
        let log = session.run(config.width);

        assert_eq!(log.starts.len(), 2);
        assert!(log.changes.iter().all(|&v| v <= 80.0));
        assert!(log.completes.iter().all(|&v| v <= 80.0));
        assert_eq!(session.slider().value(), 0.0);
        assert!(!session.slider().is_dragging());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let theme = StaticTheme::default();
        let config = SessionConfig {
            maximum_value: 0.0,
            ..config()
        };
        assert!(Session::new(&config, &theme).is_err());
    }

    #[test]
    fn thumb_color_overrides_the_theme_palette() {
        let theme = StaticTheme(ThemeMode::Dark);
        let red = Color::from_hex("#ff0000").expect("valid hex");
        let config = SessionConfig {
            thumb_color: Some(red),
            ..config()
        };
        let session = Session::new(&config, &theme).expect("valid args");
        let colors = session.slider().colors(&theme);
        assert_eq!(colors.thumb, red);
        assert_eq!(colors.minimum_track, SliderColors::DARK.minimum_track);
    }
}
