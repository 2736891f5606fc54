use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use log::{debug, warn};

use crate::ffi::{RawHandle, SpeechApi};
use crate::handle::SmartHandle;
use crate::properties::PropertyCollection;
use crate::Result;

use super::ResultReason;

/// The outcome of a single text-to-speech operation.
///
/// Everything except the properties is copied out of the native result when the value is
/// created, and never changes afterwards. The native result stays alive until this value is
/// dropped, so that the properties can be looked up on demand.
pub struct SpeechSynthesisResult {
    result_id: String,
    reason_code: u32,
    audio_duration: Duration,
    audio_data: Bytes,
    // Declared before `handle` so the property bag is released before the result.
    properties: PropertyCollection,
    handle: SmartHandle,
}

impl SpeechSynthesisResult {
    /// Takes ownership of a native synthesis result handle and extracts its contents.
    ///
    /// The handle is released when the returned value is dropped, or before this function
    /// returns if any of the native queries fail.
    ///
    /// # Safety
    ///
    /// `handle` must be a synthesis result handle produced by `api`, and the caller must not use
    /// or release it after this call.
    pub unsafe fn from_handle(api: Arc<dyn SpeechApi>, handle: RawHandle) -> Result<Self> {
        Self::from_owned(Self::own_handle(api, handle))
    }

    pub(crate) fn own_handle(api: Arc<dyn SpeechApi>, handle: RawHandle) -> SmartHandle {
        SmartHandle::new("SpeechSynthesisResult", handle, api, |api, handle| {
            api.synth_result_release(handle)
        })
    }

    pub(crate) fn from_owned(handle: SmartHandle) -> Result<Self> {
        let api = handle.api().clone();
        let raw = handle.inner();

        let result_id = api.synth_result_get_result_id(raw)?;
        let reason_code = api.synth_result_get_reason(raw)?;
        if ResultReason::from_code(reason_code).is_none() {
            warn!("synthesis result {} has unrecognized reason code {}", result_id, reason_code);
        }
        let (audio_length, duration_ms) = api.synth_result_get_audio_length_duration(raw)?;

        let mut audio = vec![0u8; audio_length as usize];
        if audio_length > 0 {
            let filled = api.synth_result_get_audio_data(raw, &mut audio)?;
            if filled < audio_length {
                warn!(
                    "synthesis result {} filled {} of {} audio bytes",
                    result_id, filled, audio_length
                );
            }
        }

        let properties =
            PropertyCollection::from_handle(api.clone(), api.synth_result_get_property_bag(raw)?);

        debug!(
            "extracted synthesis result {} (reason {}, {} bytes, {} ms)",
            result_id, reason_code, audio_length, duration_ms
        );

        Ok(Self {
            result_id,
            reason_code,
            audio_duration: Duration::from_millis(duration_ms),
            audio_data: Bytes::from(audio),
            properties,
            handle,
        })
    }

    /// Returns the unique identifier of this synthesis operation.
    pub fn result_id(&self) -> &str {
        &self.result_id
    }

    /// Returns why the result was produced, or `None` if the native library reported a reason
    /// code this crate doesn't know. The raw code is still available from
    /// [`reason_code`](Self::reason_code).
    pub fn reason(&self) -> Option<ResultReason> {
        ResultReason::from_code(self.reason_code)
    }

    /// Returns the reason code exactly as the native library reported it.
    pub fn reason_code(&self) -> u32 {
        self.reason_code
    }

    /// Returns how long the synthesized audio plays. Only meaningful when the synthesis
    /// completed, see [`ResultReason::is_success`].
    pub fn audio_duration(&self) -> Duration {
        self.audio_duration
    }

    /// Returns the size of the synthesized audio in bytes.
    pub fn audio_length(&self) -> u32 {
        self.audio_data.len() as u32
    }

    /// Returns a shared reference to the synthesized audio. Cloning the buffer doesn't copy it.
    pub fn audio_data(&self) -> Bytes {
        self.audio_data.clone()
    }

    /// Borrows the synthesized audio.
    pub fn audio_bytes(&self) -> &[u8] {
        &self.audio_data
    }

    /// Returns the additional properties of this result.
    pub fn properties(&self) -> &PropertyCollection {
        &self.properties
    }

    /// Returns the underlying native handle. It remains owned by this result.
    pub fn as_raw_handle(&self) -> RawHandle {
        self.handle.inner()
    }
}

impl fmt::Debug for SpeechSynthesisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesisResult")
            .field("result_id", &self.result_id)
            .field("reason", &self.reason())
            .field("reason_code", &self.reason_code)
            .field("audio_duration", &self.audio_duration)
            .field("audio_length", &self.audio_data.len())
            .field("handle", &self.handle)
            .finish()
    }
}
