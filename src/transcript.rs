/// Receives transcript text for display. `None` clears it.
pub trait TranscriptSink {
    fn set_transcript(&mut self, text: Option<String>);
}

impl<F> TranscriptSink for F
where
    F: FnMut(Option<String>),
{
    fn set_transcript(&mut self, text: Option<String>) {
        (*self)(text)
    }
}

/// In-memory transcript display: holds whatever was set last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptView {
    text: Option<String>,
}

impl TranscriptView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl TranscriptSink for TranscriptView {
    fn set_transcript(&mut self, text: Option<String>) {
        self.text = text;
    }
}
