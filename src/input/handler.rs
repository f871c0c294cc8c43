use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Processed input events for the application
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Quit the application
    Quit,
    /// Play/pause the preview playback
    TogglePlayback,
    /// Speed up preview playback
    SpeedUp,
    /// Slow down preview playback
    SpeedDown,
    /// Scrub the hour backward
    ScrubBackward,
    /// Scrub the hour forward
    ScrubForward,
    /// Return to the live wall clock
    GoLive,
    /// Cycle through display modes (Ambient -> Studio -> Debug)
    CycleDisplayMode,
    /// Set display mode to Ambient
    SetModeAmbient,
    /// Set display mode to Studio
    SetModeStudio,
    /// Set display mode to Debug
    SetModeDebug,
    /// Toggle guide lines
    ToggleGuides,
    /// Toggle the grain overlay
    ToggleGrain,
    /// Toggle hover zone highlights
    ToggleZones,
    /// Open/close the tuner panel
    ToggleTuner,
    /// Select the previous tuner knob
    TunerPrevious,
    /// Select the next tuner knob
    TunerNext,
    /// Nudge the selected knob down
    TunerDecrease,
    /// Nudge the selected knob up
    TunerIncrease,
    /// Reset tuner knobs to defaults
    TunerReset,
    /// Write current settings to the settings file
    WriteSettings,
    /// Toggle help overlay
    ToggleHelp,
    /// Close help (any key when help is shown)
    CloseHelp,
    /// Mouse moved to position
    MouseHover { x: u16, y: u16 },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// No event
    None,
}

/// Input handler for processing terminal events
pub struct InputHandler {
    help_visible: bool,
    tuner_open: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            help_visible: false,
            tuner_open: false,
        }
    }

    /// Set help visibility state
    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    /// Set whether the tuner panel is open
    pub fn set_tuner_open(&mut self, open: bool) {
        self.tuner_open = open;
    }

    /// Poll for input events with timeout
    pub fn poll(&mut self, timeout: Duration) -> Option<InputEvent> {
        if event::poll(timeout).ok()? {
            match event::read().ok()? {
                Event::Key(key_event) => Some(self.handle_key(key_event)),
                Event::Mouse(mouse_event) => Some(self.handle_mouse(mouse_event)),
                Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
                _ => None,
            }
        } else {
            None
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&self, event: KeyEvent) -> InputEvent {
        // If help is visible, any key closes it
        if self.help_visible {
            return InputEvent::CloseHelp;
        }

        match event.code {
            // Quit
            KeyCode::Char('q') => InputEvent::Quit,

            // Esc closes the tuner first, otherwise quits
            KeyCode::Esc => {
                if self.tuner_open {
                    InputEvent::ToggleTuner
                } else {
                    InputEvent::Quit
                }
            }

            // Ctrl+C to quit
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                InputEvent::Quit
            }

            // Preview playback
            KeyCode::Char(' ') => InputEvent::TogglePlayback,
            KeyCode::Char(']') | KeyCode::Char('+') | KeyCode::Char('=') => InputEvent::SpeedUp,
            KeyCode::Char('[') | KeyCode::Char('-') | KeyCode::Char('_') => InputEvent::SpeedDown,

            // Scrubbing
            KeyCode::Left => InputEvent::ScrubBackward,
            KeyCode::Right => InputEvent::ScrubForward,
            KeyCode::Char('l') => InputEvent::GoLive,

            // Display mode controls
            KeyCode::Char('m') => InputEvent::CycleDisplayMode,
            KeyCode::Char('1') => InputEvent::SetModeAmbient,
            KeyCode::Char('2') => InputEvent::SetModeStudio,
            KeyCode::Char('3') => InputEvent::SetModeDebug,

            // Layer toggles
            KeyCode::Char('g') => InputEvent::ToggleGuides,
            KeyCode::Char('n') => InputEvent::ToggleGrain,
            KeyCode::Char('z') => InputEvent::ToggleZones,

            // Tuner panel
            KeyCode::Char('c') => InputEvent::ToggleTuner,
            KeyCode::Up => InputEvent::TunerPrevious,
            KeyCode::Down => InputEvent::TunerNext,
            KeyCode::Char(',') => InputEvent::TunerDecrease,
            KeyCode::Char('.') => InputEvent::TunerIncrease,
            KeyCode::Char('r') => InputEvent::TunerReset,
            KeyCode::Char('w') => InputEvent::WriteSettings,

            // Help
            KeyCode::Char('?') => InputEvent::ToggleHelp,

            _ => InputEvent::None,
        }
    }

    /// Handle mouse input
    fn handle_mouse(&self, event: MouseEvent) -> InputEvent {
        match event.kind {
            MouseEventKind::Moved => InputEvent::MouseHover {
                x: event.column,
                y: event.row,
            },
            _ => InputEvent::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
