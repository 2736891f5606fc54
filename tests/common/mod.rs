#![allow(dead_code)]

use std::collections::HashMap;
use std::ffi::CStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use speech_synth_result::ffi::{RawHandle, SpeechApi};
use speech_synth_result::tts::SpeechSynthesisResult;
use speech_synth_result::{Error, Result};

pub const RESULT_HANDLE: RawHandle = RawHandle(0x100 as _);
pub const RESULT_BAG_HANDLE: RawHandle = RawHandle(0x200 as _);
pub const REQUEST_HANDLE: RawHandle = RawHandle(0x300 as _);
pub const REQUEST_BAG_HANDLE: RawHandle = RawHandle(0x400 as _);

pub const FAILURE_CODE: usize = 0x1f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    ResultId,
    Reason,
    AudioLengthDuration,
    AudioData,
    PropertyBag,
    RequestCreate,
    RequestPropertyBag,
    SendTextPiece,
    Finish,
}

#[derive(Debug, Clone)]
pub struct MockResult {
    pub id: String,
    pub reason: u32,
    pub audio: Vec<u8>,
    pub duration_ms: u64,
    pub properties: HashMap<String, String>,
    pub fill_limit: Option<u32>,
}

impl Default for MockResult {
    fn default() -> Self {
        Self {
            id: "abc123".to_string(),
            reason: 9,
            audio: vec![0x01, 0x02, 0x03, 0x04],
            duration_ms: 250,
            properties: HashMap::new(),
            fill_limit: None,
        }
    }
}

/// Records every call made through the native API and counts releases per handle kind.
#[derive(Default)]
pub struct MockApi {
    pub result: MockResult,
    pub fail_at: Option<Query>,
    pub calls: Mutex<Vec<&'static str>>,
    pub result_releases: AtomicUsize,
    pub bag_releases: AtomicUsize,
    pub request_releases: AtomicUsize,
    pub text_pieces: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn new(result: MockResult) -> Arc<Self> {
        init_logging();
        Arc::new(Self {
            result,
            ..Default::default()
        })
    }

    pub fn failing_at(result: MockResult, query: Query) -> Arc<Self> {
        init_logging();
        Arc::new(Self {
            result,
            fail_at: Some(query),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn result_releases(&self) -> usize {
        self.result_releases.load(Ordering::SeqCst)
    }

    pub fn bag_releases(&self) -> usize {
        self.bag_releases.load(Ordering::SeqCst)
    }

    pub fn request_releases(&self) -> usize {
        self.request_releases.load(Ordering::SeqCst)
    }

    fn record(&self, name: &'static str, query: Option<Query>) -> Result<()> {
        self.calls.lock().unwrap().push(name);
        if query.is_some() && query == self.fail_at {
            Err(Error::Native {
                code: FAILURE_CODE,
                context: name,
            })
        } else {
            Ok(())
        }
    }
}

impl SpeechApi for MockApi {
    fn synth_result_get_result_id(&self, result: RawHandle) -> Result<String> {
        assert_eq!(RESULT_HANDLE, result);
        self.record("get_result_id", Some(Query::ResultId))?;
        Ok(self.result.id.clone())
    }

    fn synth_result_get_reason(&self, result: RawHandle) -> Result<u32> {
        assert_eq!(RESULT_HANDLE, result);
        self.record("get_reason", Some(Query::Reason))?;
        Ok(self.result.reason)
    }

    fn synth_result_get_audio_length_duration(&self, result: RawHandle) -> Result<(u32, u64)> {
        assert_eq!(RESULT_HANDLE, result);
        self.record("get_audio_length_duration", Some(Query::AudioLengthDuration))?;
        Ok((self.result.audio.len() as u32, self.result.duration_ms))
    }

    fn synth_result_get_audio_data(&self, result: RawHandle, buffer: &mut [u8]) -> Result<u32> {
        assert_eq!(RESULT_HANDLE, result);
        self.record("get_audio_data", Some(Query::AudioData))?;
        let limit = self.result.fill_limit.map(|n| n as usize).unwrap_or(usize::MAX);
        let filled = buffer.len().min(self.result.audio.len()).min(limit);
        buffer[..filled].copy_from_slice(&self.result.audio[..filled]);
        Ok(filled as u32)
    }

    fn synth_result_get_property_bag(&self, result: RawHandle) -> Result<RawHandle> {
        assert_eq!(RESULT_HANDLE, result);
        self.record("get_property_bag", Some(Query::PropertyBag))?;
        Ok(RESULT_BAG_HANDLE)
    }

    fn synth_result_release(&self, result: RawHandle) {
        assert_eq!(RESULT_HANDLE, result);
        self.calls.lock().unwrap().push("release_result");
        self.result_releases.fetch_add(1, Ordering::SeqCst);
    }

    fn property_bag_get_string(&self, bag: RawHandle, name: &str, default: &str) -> Result<String> {
        assert!(bag == RESULT_BAG_HANDLE || bag == REQUEST_BAG_HANDLE);
        self.calls.lock().unwrap().push("get_string");
        Ok(self.result.properties.get(name).cloned().unwrap_or_else(|| default.to_string()))
    }

    fn property_bag_release(&self, bag: RawHandle) {
        assert!(bag == RESULT_BAG_HANDLE || bag == REQUEST_BAG_HANDLE);
        self.calls.lock().unwrap().push("release_bag");
        self.bag_releases.fetch_add(1, Ordering::SeqCst);
    }

    fn speech_synthesis_request_create(&self, text_streaming: bool) -> Result<RawHandle> {
        assert!(text_streaming);
        self.record("request_create", Some(Query::RequestCreate))?;
        Ok(REQUEST_HANDLE)
    }

    fn speech_synthesis_request_get_property_bag(&self, request: RawHandle) -> Result<RawHandle> {
        assert_eq!(REQUEST_HANDLE, request);
        self.record("request_get_property_bag", Some(Query::RequestPropertyBag))?;
        Ok(REQUEST_BAG_HANDLE)
    }

    fn speech_synthesis_request_send_text_piece(
        &self,
        request: RawHandle,
        text: &CStr,
    ) -> Result<()> {
        assert_eq!(REQUEST_HANDLE, request);
        self.record("send_text_piece", Some(Query::SendTextPiece))?;
        self.text_pieces.lock().unwrap().push(text.to_str().unwrap().to_string());
        Ok(())
    }

    fn speech_synthesis_request_finish(&self, request: RawHandle) -> Result<()> {
        assert_eq!(REQUEST_HANDLE, request);
        self.record("finish", Some(Query::Finish))
    }

    fn speech_synthesis_request_release(&self, request: RawHandle) {
        assert_eq!(REQUEST_HANDLE, request);
        self.calls.lock().unwrap().push("release_request");
        self.request_releases.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn extract(api: &Arc<MockApi>) -> Result<SpeechSynthesisResult> {
    unsafe { SpeechSynthesisResult::from_handle(api.clone(), RESULT_HANDLE) }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
