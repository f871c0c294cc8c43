//! Hot reload of the settings file.

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;

use crate::event::{ControlEvent, ControlSender};

use super::AppSettings;

/// Watches the settings file and pushes re-parsed settings to the app.
pub struct SettingsWatcher {
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    /// Create a watcher that monitors the given settings path.
    pub fn new(
        path: impl AsRef<Path>,
        control_tx: ControlSender,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let file_path = path.as_ref().to_path_buf();

        // Seed a default file so there is something to watch and edit
        if !file_path.exists() {
            AppSettings::default().save(&file_path)?;
        }

        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                if let Ok(event) = res {
                    let _ = tx.send(event);
                }
            },
            Config::default(),
        )?;

        watcher.watch(&file_path, RecursiveMode::NonRecursive)?;

        // Task re-reads the file on change notifications, with a polling
        // fallback for editors that replace rather than modify the file.
        let watch_path = file_path.clone();
        let mut last_sent = AppSettings::load(&watch_path);

        tokio::spawn(async move {
            loop {
                let changed = match rx.recv_timeout(std::time::Duration::from_millis(500)) {
                    Ok(_event) => true,
                    Err(mpsc::RecvTimeoutError::Timeout) => true,
                    Err(mpsc::RecvTimeoutError::Disconnected) => return,
                };

                if changed {
                    let settings = AppSettings::load(&watch_path);
                    if settings != last_sent {
                        last_sent = settings.clone();
                        if control_tx
                            .send(ControlEvent::SettingsReloaded(settings))
                            .await
                            .is_err()
                        {
                            return; // Channel closed
                        }
                    }
                }
            }
        });

        Ok(Self { _watcher: watcher })
    }
}
