use anyhow::Result;
use clipcopy::clipboard::ClipboardWriter;
use clipcopy::document::MarkdownDocument;
use clipcopy::notify::Notifier;
use clipcopy::{ClipboardCopier, CopyOutcome};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl Recorder {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ClipboardWriter for Recorder {
    fn write_text(&self, text: &str) -> Result<()> {
        self.events.lock().unwrap().push(format!("write:{text}"));
        Ok(())
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) -> Result<()> {
        self.events.lock().unwrap().push(format!("notify:{message}"));
        Ok(())
    }
}

const TRANSCRIPT: &str = "# Session\n\n## Transcript {#note}\n\n  Hello World  \n\n## Scratch {#empty}\n\n   \n";

fn copier(recorder: &Arc<Recorder>) -> ClipboardCopier {
    ClipboardCopier::new(
        Arc::new(MarkdownDocument::parse(TRANSCRIPT)),
        recorder.clone(),
        recorder.clone(),
    )
}

#[tokio::test]
async fn test_copies_section_then_confirms() {
    let recorder = Arc::new(Recorder::default());
    let copier = copier(&recorder);

    copier.on_ready();
    copier.copy_text_by_id("note").wait().await;

    assert_eq!(recorder.events(), vec!["write:Hello World", "notify:Copied!"]);
}

#[tokio::test]
async fn test_unknown_and_blank_sections_do_nothing() {
    let recorder = Arc::new(Recorder::default());
    let copier = copier(&recorder);

    assert!(matches!(copier.copy_text_by_id("missing"), CopyOutcome::Missing));
    assert!(matches!(copier.copy_text_by_id("empty"), CopyOutcome::Empty));

    assert!(recorder.events().is_empty());
}
