use crate::error::Result;

/// Local speech synthesizer.
///
/// `speak` enqueues the utterance with the platform engine and returns;
/// the program observes nothing beyond queueing errors.
pub trait SpeechInterface: Send {
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Silence whatever is currently being spoken.
    fn stop(&mut self) -> Result<()>;
}
