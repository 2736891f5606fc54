use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Why the native library produced a result.
///
/// The enumeration is shared with the recognition side of the native library, so only a few of
/// these values can appear on a synthesis result.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum ResultReason {
    NoMatch = 0,
    Canceled = 1,
    RecognizingSpeech = 2,
    RecognizedSpeech = 3,
    RecognizingIntent = 4,
    RecognizedIntent = 5,
    TranslatingSpeech = 6,
    TranslatedSpeech = 7,
    SynthesizingAudio = 8,
    SynthesizingAudioCompleted = 9,
    RecognizingKeyword = 10,
    RecognizedKeyword = 11,
    SynthesizingAudioStarted = 12,
    TranslatingParticipantSpeech = 13,
    TranslatedParticipantSpeech = 14,
    TranslatedInstantMessage = 15,
    TranslatedParticipantInstantMessage = 16,
    EnrollingVoiceProfile = 17,
    EnrolledVoiceProfile = 18,
    RecognizedSpeakers = 19,
    RecognizedSpeaker = 20,
    ResetVoiceProfile = 21,
    DeletedVoiceProfile = 22,
    VoicesListRetrieved = 23,
}

impl ResultReason {
    /// Returns `true` if the synthesis finished and the result carries the complete audio.
    pub fn is_success(&self) -> bool {
        *self == Self::SynthesizingAudioCompleted
    }

    /// Returns the numeric code the native library uses for this reason.
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Maps a native reason code to a reason, or `None` if the code isn't one listed here.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::iter().find(|reason| reason.code() == code)
    }
}
