use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, Terminal};

use crate::animation::{AnimationLoop, DEFAULT_FPS};
use crate::clock::{wall_clock_hour, ClockMode, ClockTicker, Playback, SCRUB_STEP};
use crate::config::{AppSettings, SettingsWatcher, TunerConfig, TunerKnob};
use crate::event::{create_control_channel, ControlEvent, ControlReceiver};
use crate::input::{InputEvent, InputHandler};
use crate::render::{DisplayMode, LayerRenderer, LayerVisibility, RenderLayer, RenderState};
use crate::scene::Scene;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hour_override: Option<f32>,
    pub settings_path: Option<PathBuf>,
    pub target_fps: u32,
    pub force_compact: bool,
    pub show_grain: bool,
    pub show_glitch: bool,
    pub show_guides: bool,
    pub ambient: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hour_override: None,
            settings_path: None,
            target_fps: DEFAULT_FPS,
            force_compact: false,
            show_grain: true,
            show_glitch: true,
            show_guides: true,
            ambient: false,
        }
    }
}

/// Main application state
pub struct App {
    config: AppConfig,
    settings: AppSettings,
    scene: Scene,
    clock_mode: ClockMode,
    ticker: Option<ClockTicker>,
    playback: Playback,
    animation_loop: AnimationLoop,
    input_handler: InputHandler,

    layer_visibility: LayerVisibility,
    display_mode: DisplayMode,

    // Tuner panel state
    tuner_open: bool,
    tuner_selected: TunerKnob,

    // Help overlay toggle
    show_help: bool,

    // Running state
    running: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let clock_mode = match config.hour_override {
            Some(hour) => ClockMode::Override(hour.rem_euclid(24.0)),
            None => ClockMode::Live,
        };
        let hour = match clock_mode {
            ClockMode::Live => wall_clock_hour(),
            ClockMode::Override(hour) => hour,
        };

        let mut layer_visibility = LayerVisibility::new();
        layer_visibility.set_visible(RenderLayer::Grain, config.show_grain);
        layer_visibility.set_visible(RenderLayer::Glitch, config.show_glitch);
        layer_visibility.set_visible(RenderLayer::Guides, config.show_guides);

        let display_mode = if config.ambient {
            DisplayMode::Ambient
        } else {
            DisplayMode::default()
        };

        // Scene starts at a nominal size; the first resize in run() fixes it
        let scene = Scene::new(hour, 80, 24, config.force_compact);

        Self {
            animation_loop: AnimationLoop::new(config.target_fps),
            settings: AppSettings::default(),
            scene,
            clock_mode,
            ticker: None,
            playback: Playback::new(),
            input_handler: InputHandler::new(),
            layer_visibility,
            display_mode,
            tuner_open: false,
            tuner_selected: TunerKnob::Intensity,
            show_help: false,
            running: true,
            config,
        }
    }

    /// Switch the hour source, tearing down the previous poll timer
    /// before establishing the new one.
    fn set_clock_mode(&mut self, mode: ClockMode) {
        self.clock_mode = mode;
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.apply_mode(mode);
        }

        match mode {
            ClockMode::Live => self.scene.set_hour(wall_clock_hour()),
            ClockMode::Override(hour) => self.scene.set_hour(hour),
        }
    }

    /// The hour currently driving the scene.
    fn current_hour(&self) -> f32 {
        match self.clock_mode {
            ClockMode::Live => self.scene.hour(),
            ClockMode::Override(hour) => hour,
        }
    }

    fn scrub(&mut self, direction: f32) {
        let hour = (self.current_hour() + direction * SCRUB_STEP).rem_euclid(24.0);
        self.playback.playing = false;
        self.set_clock_mode(ClockMode::Override(hour));
    }

    /// Run the application
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create control channel
        let (control_tx, mut control_rx) = create_control_channel();

        // Start the live clock poll timer
        let mut ticker = ClockTicker::new(control_tx.clone());
        ticker.apply_mode(self.clock_mode);
        self.ticker = Some(ticker);

        // Load settings and start the hot-reload watcher
        let _watcher = if let Some(path) = self.config.settings_path.clone() {
            self.settings = AppSettings::load(&path);
            let watcher = SettingsWatcher::new(&path, control_tx.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            Some(watcher)
        } else {
            None
        };

        // Fit the scene to the real terminal size
        let size = terminal.size()?;
        self.scene.resize(size.width, size.height);

        // Main loop
        while self.running {
            // Handle input
            self.handle_input();

            // Process control events
            self.process_control_events(&mut control_rx);

            // Update and render
            if self.animation_loop.should_render() {
                let dt = self.animation_loop.delta_time();

                // Advance preview playback
                if self.playback.playing {
                    if let ClockMode::Override(hour) = self.clock_mode {
                        let next = self.playback.advance(hour, dt);
                        self.clock_mode = ClockMode::Override(next);
                        self.scene.set_hour(next);
                    }
                }

                self.scene.tick(dt);

                terminal.draw(|frame| {
                    self.render(frame.area(), frame.buffer_mut());
                })?;

                self.animation_loop.frame_rendered();
            }

            // Small sleep to prevent busy loop
            tokio::time::sleep(self.animation_loop.time_until_next_frame()).await;
        }

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Process incoming events from the control channel
    fn process_control_events(&mut self, rx: &mut ControlReceiver) {
        while let Ok(event) = rx.try_recv() {
            match event {
                ControlEvent::ClockTick => {
                    if self.clock_mode.is_live() {
                        self.scene.set_hour(wall_clock_hour());
                    }
                }
                ControlEvent::SettingsReloaded(settings) => {
                    self.settings = settings;
                }
            }
        }
    }

    /// Handle user input
    fn handle_input(&mut self) {
        let timeout = std::time::Duration::from_millis(1);

        if let Some(event) = self.input_handler.poll(timeout) {
            match event {
                InputEvent::Quit => self.running = false,

                InputEvent::TogglePlayback => {
                    // Playing from live pins the override to the current
                    // wall hour first.
                    if self.clock_mode.is_live() && !self.playback.playing {
                        self.set_clock_mode(ClockMode::Override(wall_clock_hour()));
                    }
                    self.playback.toggle();
                }

                InputEvent::SpeedUp => self.playback.speed_up(),
                InputEvent::SpeedDown => self.playback.speed_down(),

                InputEvent::ScrubBackward => self.scrub(-1.0),
                InputEvent::ScrubForward => self.scrub(1.0),

                InputEvent::GoLive => {
                    self.playback.playing = false;
                    self.set_clock_mode(ClockMode::Live);
                }

                InputEvent::CycleDisplayMode => {
                    self.display_mode = self.display_mode.cycle();
                }
                InputEvent::SetModeAmbient => self.display_mode = DisplayMode::Ambient,
                InputEvent::SetModeStudio => self.display_mode = DisplayMode::Studio,
                InputEvent::SetModeDebug => self.display_mode = DisplayMode::Debug,

                InputEvent::ToggleGuides => {
                    self.layer_visibility.toggle(RenderLayer::Guides);
                }
                InputEvent::ToggleGrain => {
                    self.layer_visibility.toggle(RenderLayer::Grain);
                }
                InputEvent::ToggleZones => {
                    self.layer_visibility.toggle(RenderLayer::Zones);
                }

                InputEvent::ToggleTuner => {
                    self.tuner_open = !self.tuner_open;
                    self.input_handler.set_tuner_open(self.tuner_open);
                }

                InputEvent::TunerPrevious => {
                    if self.tuner_open {
                        self.tuner_selected = self.tuner_selected.previous();
                    }
                }
                InputEvent::TunerNext => {
                    if self.tuner_open {
                        self.tuner_selected = self.tuner_selected.next();
                    }
                }
                InputEvent::TunerDecrease => {
                    if self.tuner_open {
                        self.settings.tuner.adjust(self.tuner_selected, -1);
                    }
                }
                InputEvent::TunerIncrease => {
                    if self.tuner_open {
                        self.settings.tuner.adjust(self.tuner_selected, 1);
                    }
                }
                InputEvent::TunerReset => {
                    self.settings.tuner = TunerConfig::default();
                }

                InputEvent::WriteSettings => {
                    // Failure here must not interrupt rendering.
                    if let Some(path) = &self.config.settings_path {
                        let _ = self.settings.save(path);
                    }
                }

                InputEvent::ToggleHelp => {
                    self.show_help = !self.show_help;
                    self.input_handler.set_help_visible(self.show_help);
                }

                InputEvent::CloseHelp => {
                    self.show_help = false;
                    self.input_handler.set_help_visible(false);
                }

                InputEvent::MouseHover { x, y } => {
                    self.scene.hover(x, y);
                }

                InputEvent::Resize { width, height } => {
                    self.scene.resize(width, height);
                }

                InputEvent::None => {}
            }
        }
    }

    /// Render the scene using layer-based rendering.
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let render_state = RenderState {
            scene: &self.scene,
            profile: &self.settings.profile,
            tuner: &self.settings.tuner,
            live: self.clock_mode.is_live(),
            playback: &self.playback,
            display_mode: self.display_mode,
            tuner_open: self.tuner_open,
            tuner_selected: self.tuner_selected,
            show_help: self.show_help,
            fps: self.animation_loop.fps(),
        };

        let layer_renderer = LayerRenderer::new(area, &self.layer_visibility);
        layer_renderer.render_all(buf, &render_state);
    }
}
