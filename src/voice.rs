use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use log::debug;

use crate::error::VoiceError;

/// One-shot speech-to-text capture.
///
/// Implementations wrap a platform speech engine: a single capture resolves
/// with one transcript or an error. On platforms without an engine,
/// [`VoiceError::Unsupported`] is returned before any capture starts.
#[async_trait]
pub trait Transcriber {
    async fn capture(&self) -> Result<String, VoiceError>;
}

/// Fire-and-forget speech output.
///
/// Starting a new utterance cancels any utterance still in progress, so
/// callers never queue narration behind an old step.
pub trait Speak {
    fn say(&self, text: &str);
}

/// Stand-in transcriber for terminals without a speech engine: reads one
/// line from stdin as the transcript.
pub struct StdinTranscriber;

#[async_trait]
impl Transcriber for StdinTranscriber {
    async fn capture(&self) -> Result<String, VoiceError> {
        print!("Listening (type your ingredients): ");
        io::stdout()
            .flush()
            .map_err(|e| VoiceError::Recognition(e.to_string()))?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| VoiceError::Recognition(e.to_string()))?;

        let transcript = line.trim().to_string();
        if transcript.is_empty() {
            return Err(VoiceError::Recognition("no speech detected".to_string()));
        }
        debug!("captured transcript: {transcript}");
        Ok(transcript)
    }
}

/// Speaker that narrates to the terminal.
pub struct ConsoleSpeaker;

impl Speak for ConsoleSpeaker {
    fn say(&self, text: &str) {
        println!("[voice] {text}");
    }
}

/// Speaker that swallows all output, for callers that want a silent run.
pub struct MuteSpeaker;

impl Speak for MuteSpeaker {
    fn say(&self, _text: &str) {}
}
