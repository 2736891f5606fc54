#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A safe owned wrapper around the results of a native text-to-speech library.
//!
//! # Features
//!
//! The native library hands out synthesis results as opaque handles that the caller has to query
//! and then release exactly once. This crate turns such a handle into a
//! [`SpeechSynthesisResult`](tts::SpeechSynthesisResult): an immutable snapshot of the result id,
//! the reason the result was produced, the synthesized audio and its duration, together with a
//! read-only view of the result's properties. The handle is released when the snapshot is
//! dropped, or as soon as extracting the snapshot fails.
//!
//! The [tts] module also provides [`SpeechSynthesisRequest`](tts::SpeechSynthesisRequest), which
//! feeds text to the synthesizer piece by piece.
//!
//! ## Native library
//!
//! All calls into the native library go through the [`SpeechApi`](ffi::SpeechApi) trait. Enable
//! the `native` feature to get [`NativeApi`](ffi::NativeApi), which links against the Speech SDK
//! core library. If the library isn't on the default linker search path, point the
//! `SPEECH_SDK_LIB_DIR` environment variable at it when building.
//!
//! ## Tokio
//!
//! With the `tokio` feature enabled, the [tokio] module extracts results on Tokio's blocking
//! thread pool.
//!
//! # Thread Safety
//!
//! A [`SpeechSynthesisResult`](tts::SpeechSynthesisResult) can be shared between threads. Its
//! fields never change after it is created, and its audio buffer is reference counted. Property
//! lookups, however, go to the native library every time, and are only safe to run concurrently
//! if the native property bag supports concurrent reads.

pub mod error;
pub mod ffi;
mod handle;
pub mod properties;
pub mod tts;

#[cfg(feature = "tokio")]
pub mod tokio;

pub use error::{Error, Result};
