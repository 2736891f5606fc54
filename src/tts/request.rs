use std::ffi::CString;
use std::fmt;
use std::sync::Arc;

use log::info;

use crate::ffi::{text_length, RawHandle, SpeechApi};
use crate::handle::SmartHandle;
use crate::properties::PropertyCollection;
use crate::Result;

/// A synthesis request whose text arrives in pieces while the audio is being rendered.
pub struct SpeechSynthesisRequest {
    properties: PropertyCollection,
    handle: SmartHandle,
}

impl SpeechSynthesisRequest {
    /// Creates a request that accepts its text through a [`TextInputStream`].
    pub fn new_text_streaming_request(api: Arc<dyn SpeechApi>) -> Result<Self> {
        let raw = api.speech_synthesis_request_create(true)?;
        let handle = SmartHandle::new("SpeechSynthesisRequest", raw, api.clone(), |api, handle| {
            api.speech_synthesis_request_release(handle)
        });
        let bag = api.speech_synthesis_request_get_property_bag(handle.inner())?;
        Ok(Self {
            properties: PropertyCollection::from_handle(api, bag),
            handle,
        })
    }

    /// Returns the stream through which text is fed to this request.
    pub fn get_text_input_stream(&self) -> TextInputStream<'_> {
        TextInputStream {
            parent: self,
        }
    }

    /// Returns the properties of this request.
    pub fn properties(&self) -> &PropertyCollection {
        &self.properties
    }

    /// Returns the underlying native handle, for passing the request to a synthesizer. It
    /// remains owned by this request.
    pub fn as_raw_handle(&self) -> RawHandle {
        self.handle.inner()
    }

    fn send_text_piece(&self, text: &str) -> Result<()> {
        let c_text = CString::new(text)?;
        text_length(&c_text)?;
        self.handle.api().speech_synthesis_request_send_text_piece(self.handle.inner(), &c_text)
    }

    fn finish_input(&self) -> Result<()> {
        self.handle.api().speech_synthesis_request_finish(self.handle.inner())
    }
}

impl fmt::Debug for SpeechSynthesisRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesisRequest")
            .field("handle", &self.handle)
            .field("properties", &self.properties)
            .finish()
    }
}

/// Feeds text to a streaming [`SpeechSynthesisRequest`].
#[derive(Debug)]
pub struct TextInputStream<'a> {
    parent: &'a SpeechSynthesisRequest,
}

impl<'a> TextInputStream<'a> {
    /// Sends the next piece of text.
    pub fn write<S: AsRef<str>>(&self, text: S) -> Result<()> {
        self.parent.send_text_piece(text.as_ref())
    }

    /// Tells the synthesizer no more text is coming.
    pub fn close(&self) -> Result<()> {
        info!("closing text input stream");
        self.parent.finish_input()
    }
}
