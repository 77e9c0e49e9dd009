use anyhow::{Context, Result};
use arboard::Clipboard;
use std::time::Duration;

/// How long a write keeps serving the clipboard so a clipboard manager can
/// take ownership before the process exits.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(250);

/// Something that can put text on a clipboard.
///
/// Writes are blocking; callers that must not block run them on a
/// blocking thread.
pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// The OS clipboard.
///
/// On Linux the selection is only served while this process owns it, so each
/// write blocks for `hold` to let a clipboard manager pick the text up.
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    hold: Duration,
}

impl SystemClipboard {
    pub fn with_hold(hold: Duration) -> Self {
        Self { hold }
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self { hold: DEFAULT_HOLD }
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access system clipboard")?;

        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            use std::time::Instant;

            clipboard
                .set()
                .wait_until(Instant::now() + self.hold)
                .text(text.to_owned())
                .context("Failed to copy text to clipboard")?;
        }

        #[cfg(not(target_os = "linux"))]
        {
            clipboard
                .set_text(text)
                .context("Failed to copy text to clipboard")?;
        }

        Ok(())
    }
}
