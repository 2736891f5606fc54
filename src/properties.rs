//! Read-only access to the string properties native objects carry.

use std::fmt;
use std::sync::Arc;

use crate::ffi::{RawHandle, SpeechApi};
use crate::handle::SmartHandle;
use crate::Result;

/// A read-only view of a native property bag.
///
/// Every lookup goes to the native library; nothing is cached. Concurrent lookups from several
/// threads are only as safe as the native property bag is for concurrent reads.
pub struct PropertyCollection {
    handle: SmartHandle,
}

impl PropertyCollection {
    pub(crate) fn from_handle(api: Arc<dyn SpeechApi>, handle: RawHandle) -> Self {
        Self {
            handle: SmartHandle::new("PropertyCollection", handle, api, |api, handle| {
                api.property_bag_release(handle)
            }),
        }
    }

    /// Returns the value of the named property, or an empty string if it isn't set.
    pub fn get_property<S: AsRef<str>>(&self, name: S) -> Result<String> {
        self.get_property_or(name, "")
    }

    /// Returns the value of the named property, or `default` if it isn't set.
    pub fn get_property_or<S: AsRef<str>, D: AsRef<str>>(
        &self,
        name: S,
        default: D,
    ) -> Result<String> {
        self.handle.api().property_bag_get_string(
            self.handle.inner(),
            name.as_ref(),
            default.as_ref(),
        )
    }
}

impl fmt::Debug for PropertyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyCollection").field("handle", &self.handle).finish()
    }
}
