//! Results and requests of text-to-speech synthesis.

mod reason;
mod request;
mod result;

pub use self::reason::ResultReason;
pub use self::request::{SpeechSynthesisRequest, TextInputStream};
pub use self::result::SpeechSynthesisResult;
