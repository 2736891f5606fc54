use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::ffi::{RawHandle, SpeechApi};

/// Releases a handle through the API that produced it.
pub(crate) type ReleaseFn = fn(&dyn SpeechApi, RawHandle);

/// Owns a native handle and releases it exactly once when dropped.
pub(crate) struct SmartHandle {
    name: &'static str,
    handle: RawHandle,
    api: Arc<dyn SpeechApi>,
    release: ReleaseFn,
}

impl SmartHandle {
    pub fn new(
        name: &'static str,
        handle: RawHandle,
        api: Arc<dyn SpeechApi>,
        release: ReleaseFn,
    ) -> Self {
        Self {
            name,
            handle,
            api,
            release,
        }
    }

    pub fn inner(&self) -> RawHandle {
        self.handle
    }

    pub fn api(&self) -> &Arc<dyn SpeechApi> {
        &self.api
    }
}

impl Drop for SmartHandle {
    fn drop(&mut self) {
        if self.handle.is_valid() {
            trace!("releasing {} handle {:?}", self.name, self.handle.0);
            (self.release)(&*self.api, self.handle);
            self.handle = RawHandle::INVALID;
        }
    }
}

impl fmt::Debug for SmartHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartHandle")
            .field("name", &self.name)
            .field("handle", &self.handle.0)
            .finish()
    }
}
