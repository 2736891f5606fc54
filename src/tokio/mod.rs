#![cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
//! Support for extracting results from async code running on Tokio.

use std::sync::Arc;

use crate::ffi::{RawHandle, SpeechApi};
use crate::tts::SpeechSynthesisResult;
use crate::{Error, Result};

/// Takes ownership of a native synthesis result handle and extracts its contents on Tokio's
/// blocking thread pool.
///
/// The handle is released even if the blocking task is cancelled before it gets to run.
///
/// # Safety
///
/// Same as [`SpeechSynthesisResult::from_handle`].
pub async unsafe fn from_handle(
    api: Arc<dyn SpeechApi>,
    handle: RawHandle,
) -> Result<SpeechSynthesisResult> {
    let owned = SpeechSynthesisResult::own_handle(api, handle);
    match ::tokio::task::spawn_blocking(move || SpeechSynthesisResult::from_owned(owned)).await {
        Ok(result) => result,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(_) => Err(Error::Cancelled),
    }
}
