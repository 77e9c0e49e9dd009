use anyhow::{Context, Result};
use clap::ValueEnum;
use dialoguer::Confirm;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shows a confirmation message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<()>;
}

/// Blocks on a terminal prompt until the user acknowledges it.
///
/// Fails when no interactive terminal is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        Confirm::new()
            .with_prompt(message)
            .default(true)
            .show_default(false)
            .wait_for_newline(true)
            .interact()
            .context("Failed to show confirmation prompt")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) -> Result<()> {
        eprintln!("{message}");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NotifyMode {
    #[default]
    Dialog,
    Stderr,
    None,
}

impl NotifyMode {
    pub fn notifier(self) -> Arc<dyn Notifier> {
        match self {
            NotifyMode::Dialog => Arc::new(DialogNotifier),
            NotifyMode::Stderr => Arc::new(StderrNotifier),
            NotifyMode::None => Arc::new(SilentNotifier),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_mode_deserialization() {
        #[derive(Deserialize)]
        struct Wrapper {
            notify: NotifyMode,
        }

        let parsed: Wrapper = toml::from_str(r#"notify = "stderr""#).unwrap();
        assert_eq!(parsed.notify, NotifyMode::Stderr);

        let parsed: Wrapper = toml::from_str(r#"notify = "none""#).unwrap();
        assert_eq!(parsed.notify, NotifyMode::None);
    }

    #[test]
    fn test_default_mode_is_dialog() {
        assert_eq!(NotifyMode::default(), NotifyMode::Dialog);
    }

    #[test]
    fn test_silent_notifier_never_fails() {
        assert!(NotifyMode::None.notifier().notify("Copied!").is_ok());
    }
}
