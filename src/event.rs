//! Control events feeding the main loop from background tasks.

use tokio::sync::mpsc;

use crate::config::AppSettings;

/// Control channel buffer size
const CHANNEL_SIZE: usize = 64;

/// Events produced by the clock ticker and the settings watcher.
#[derive(Debug, Clone)]
pub enum ControlEvent {
    /// The live-mode poll interval elapsed; re-sample the wall clock.
    ClockTick,
    /// The settings file changed on disk and re-parsed cleanly.
    SettingsReloaded(AppSettings),
}

/// Creates a new control channel pair
pub fn create_control_channel() -> (ControlSender, ControlReceiver) {
    let (tx, rx) = mpsc::channel(CHANNEL_SIZE);
    (ControlSender(tx), ControlReceiver(rx))
}

/// Sender side of the control channel
#[derive(Clone)]
pub struct ControlSender(mpsc::Sender<ControlEvent>);

impl ControlSender {
    pub async fn send(
        &self,
        event: ControlEvent,
    ) -> Result<(), mpsc::error::SendError<ControlEvent>> {
        self.0.send(event).await
    }
}

/// Receiver side of the control channel
pub struct ControlReceiver(mpsc::Receiver<ControlEvent>);

impl ControlReceiver {
    pub fn try_recv(&mut self) -> Result<ControlEvent, mpsc::error::TryRecvError> {
        self.0.try_recv()
    }
}
