//! The boundary between this crate and the native speech library.
//!
//! Every native operation the wrappers need is expressed as a method of [`SpeechApi`]. With the
//! `native` feature enabled, [`NativeApi`] implements it by calling into the Speech SDK core
//! library. Any other implementation (for example, an in-memory double in tests) can be plugged
//! in the same way.

use std::ffi::{c_void, CStr};

use crate::{Error, Result};

#[cfg(feature = "native")]
mod native;

#[cfg(feature = "native")]
#[cfg_attr(docsrs, doc(cfg(feature = "native")))]
pub use self::native::NativeApi;

/// An opaque handle to state held by the native library.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(pub *mut c_void);

// Handles are plain tokens; the native library is responsible for any synchronization of the
// state they refer to.
unsafe impl Send for RawHandle {}
unsafe impl Sync for RawHandle {}

impl RawHandle {
    /// The sentinel the native library uses for "no handle".
    pub const INVALID: RawHandle = RawHandle(std::ptr::null_mut());

    /// Returns `true` unless this is the invalid sentinel.
    pub fn is_valid(&self) -> bool {
        !self.0.is_null()
    }
}

impl Default for RawHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

/// The native operations used by the wrappers in this crate.
///
/// Release functions are called at most once per handle, and never with
/// [`RawHandle::INVALID`].
///
/// Implementations must be safe to call from multiple threads for distinct handles. Whether
/// concurrent calls against the same property bag are safe is up to the native library.
pub trait SpeechApi: Send + Sync {
    /// Returns the unique identifier of a synthesis result.
    fn synth_result_get_result_id(&self, result: RawHandle) -> Result<String>;

    /// Returns the raw reason code of a synthesis result.
    fn synth_result_get_reason(&self, result: RawHandle) -> Result<u32>;

    /// Returns the audio length in bytes and the audio duration in milliseconds.
    fn synth_result_get_audio_length_duration(&self, result: RawHandle) -> Result<(u32, u64)>;

    /// Copies the synthesized audio into `buffer` and returns how many bytes were filled.
    fn synth_result_get_audio_data(&self, result: RawHandle, buffer: &mut [u8]) -> Result<u32>;

    /// Returns the property bag associated with a synthesis result. The caller owns the
    /// returned handle.
    fn synth_result_get_property_bag(&self, result: RawHandle) -> Result<RawHandle>;

    /// Releases a synthesis result handle.
    fn synth_result_release(&self, result: RawHandle);

    /// Looks up a string property by name, returning `default` if it isn't set.
    fn property_bag_get_string(&self, bag: RawHandle, name: &str, default: &str)
        -> Result<String>;

    /// Releases a property bag handle.
    fn property_bag_release(&self, bag: RawHandle);

    /// Creates a new synthesis request.
    fn speech_synthesis_request_create(&self, text_streaming: bool) -> Result<RawHandle>;

    /// Returns the property bag associated with a synthesis request. The caller owns the
    /// returned handle.
    fn speech_synthesis_request_get_property_bag(&self, request: RawHandle) -> Result<RawHandle>;

    /// Sends one piece of text to a streaming request.
    fn speech_synthesis_request_send_text_piece(&self, request: RawHandle, text: &CStr)
        -> Result<()>;

    /// Signals that no more text will be sent to a streaming request.
    fn speech_synthesis_request_finish(&self, request: RawHandle) -> Result<()>;

    /// Releases a synthesis request handle.
    fn speech_synthesis_request_release(&self, request: RawHandle);
}

/// Converts the byte length of a piece of text to the 32-bit length the native library takes.
pub(crate) fn text_length(text: &CStr) -> Result<u32> {
    native_length(text.to_bytes().len())
}

fn native_length(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::TextTooLong(len))
}
