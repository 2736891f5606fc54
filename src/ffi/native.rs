use std::ffi::{CStr, CString};
use std::mem::MaybeUninit;
use std::os::raw::{c_char, c_int};
use std::ptr::null;

use log::warn;

use crate::error::convert_err;
use crate::Result;

use super::{text_length, RawHandle, SpeechApi};

#[allow(non_camel_case_types)]
type SPXHR = usize;

const MAX_RESULT_ID_CHARS: usize = 1024;

// Looks a property up by name rather than by numeric id.
const PROPERTY_ID_BY_NAME: c_int = -1;

#[link(name = "Microsoft.CognitiveServices.Speech.core")]
extern "C" {
    fn synth_result_get_result_id(
        hresult: RawHandle,
        result_id: *mut c_char,
        result_id_length: u32,
    ) -> SPXHR;
    fn synth_result_get_reason(hresult: RawHandle, reason: *mut u32) -> SPXHR;
    fn synth_result_get_audio_length_duration(
        hresult: RawHandle,
        length: *mut u32,
        audio_duration: *mut u64,
    ) -> SPXHR;
    fn synth_result_get_audio_data(
        hresult: RawHandle,
        buffer: *mut u8,
        buffer_size: u32,
        filled_size: *mut u32,
    ) -> SPXHR;
    fn synth_result_get_property_bag(hresult: RawHandle, hpropbag: *mut RawHandle) -> SPXHR;
    fn synthesizer_result_handle_release(hresult: RawHandle) -> SPXHR;

    fn property_bag_get_string(
        hpropbag: RawHandle,
        id: c_int,
        name: *const c_char,
        default_value: *const c_char,
    ) -> *const c_char;
    fn property_bag_free_string(value: *const c_char) -> SPXHR;
    fn property_bag_release(hpropbag: RawHandle) -> SPXHR;

    fn speech_synthesis_request_create(
        text_streaming_enabled: bool,
        is_ssml: bool,
        input_text: *const c_char,
        text_length: u32,
        hrequest: *mut RawHandle,
    ) -> SPXHR;
    fn speech_synthesis_request_get_property_bag(
        hrequest: RawHandle,
        hpropbag: *mut RawHandle,
    ) -> SPXHR;
    fn speech_synthesis_request_send_text_piece(
        hrequest: RawHandle,
        text: *const c_char,
        text_length: u32,
    ) -> SPXHR;
    fn speech_synthesis_request_finish(hrequest: RawHandle) -> SPXHR;
    fn speech_synthesis_request_release(hrequest: RawHandle) -> SPXHR;
}

unsafe fn out_to_ret<T, F: FnOnce(*mut T) -> SPXHR>(f: F, context: &'static str) -> Result<T> {
    let mut result = MaybeUninit::uninit();
    convert_err(f(result.as_mut_ptr()), context)?;
    Ok(result.assume_init())
}

fn log_release(code: SPXHR, context: &'static str) {
    if let Err(err) = convert_err(code, context) {
        warn!("{}", err);
    }
}

/// The [`SpeechApi`] backed by the Speech SDK core library.
///
/// The library is linked as `Microsoft.CognitiveServices.Speech.core`. If it isn't installed in
/// a standard location, set `SPEECH_SDK_LIB_DIR` to its directory at build time.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeApi;

impl SpeechApi for NativeApi {
    fn synth_result_get_result_id(&self, result: RawHandle) -> Result<String> {
        let mut buffer = [0 as c_char; MAX_RESULT_ID_CHARS + 1];
        let ret = unsafe {
            synth_result_get_result_id(result, buffer.as_mut_ptr(), MAX_RESULT_ID_CHARS as u32)
        };
        convert_err(ret, "synth_result_get_result_id")?;
        Ok(unsafe { CStr::from_ptr(buffer.as_ptr()) }.to_string_lossy().into_owned())
    }

    fn synth_result_get_reason(&self, result: RawHandle) -> Result<u32> {
        unsafe {
            out_to_ret(|out| synth_result_get_reason(result, out), "synth_result_get_reason")
        }
    }

    fn synth_result_get_audio_length_duration(&self, result: RawHandle) -> Result<(u32, u64)> {
        let mut length = 0;
        let mut duration = 0;
        let ret =
            unsafe { synth_result_get_audio_length_duration(result, &mut length, &mut duration) };
        convert_err(ret, "synth_result_get_audio_length_duration")?;
        Ok((length, duration))
    }

    fn synth_result_get_audio_data(&self, result: RawHandle, buffer: &mut [u8]) -> Result<u32> {
        let size = u32::try_from(buffer.len()).unwrap_or(u32::MAX);
        unsafe {
            out_to_ret(
                |out| synth_result_get_audio_data(result, buffer.as_mut_ptr(), size, out),
                "synth_result_get_audio_data",
            )
        }
    }

    fn synth_result_get_property_bag(&self, result: RawHandle) -> Result<RawHandle> {
        unsafe {
            out_to_ret(
                |out| synth_result_get_property_bag(result, out),
                "synth_result_get_property_bag",
            )
        }
    }

    fn synth_result_release(&self, result: RawHandle) {
        log_release(
            unsafe { synthesizer_result_handle_release(result) },
            "synthesizer_result_handle_release",
        );
    }

    fn property_bag_get_string(
        &self,
        bag: RawHandle,
        name: &str,
        default: &str,
    ) -> Result<String> {
        let c_name = CString::new(name)?;
        let c_default = CString::new(default)?;
        unsafe {
            let value = property_bag_get_string(
                bag,
                PROPERTY_ID_BY_NAME,
                c_name.as_ptr(),
                c_default.as_ptr(),
            );
            if value.is_null() {
                return Ok(default.to_owned());
            }
            let owned = CStr::from_ptr(value).to_string_lossy().into_owned();
            log_release(property_bag_free_string(value), "property_bag_free_string");
            Ok(owned)
        }
    }

    fn property_bag_release(&self, bag: RawHandle) {
        log_release(unsafe { property_bag_release(bag) }, "property_bag_release");
    }

    fn speech_synthesis_request_create(&self, text_streaming: bool) -> Result<RawHandle> {
        unsafe {
            out_to_ret(
                |out| speech_synthesis_request_create(text_streaming, false, null(), 0, out),
                "speech_synthesis_request_create",
            )
        }
    }

    fn speech_synthesis_request_get_property_bag(&self, request: RawHandle) -> Result<RawHandle> {
        unsafe {
            out_to_ret(
                |out| speech_synthesis_request_get_property_bag(request, out),
                "speech_synthesis_request_get_property_bag",
            )
        }
    }

    fn speech_synthesis_request_send_text_piece(
        &self,
        request: RawHandle,
        text: &CStr,
    ) -> Result<()> {
        let len = text_length(text)?;
        let ret = unsafe { speech_synthesis_request_send_text_piece(request, text.as_ptr(), len) };
        convert_err(ret, "speech_synthesis_request_send_text_piece")
    }

    fn speech_synthesis_request_finish(&self, request: RawHandle) -> Result<()> {
        let ret = unsafe { speech_synthesis_request_finish(request) };
        convert_err(ret, "speech_synthesis_request_finish")
    }

    fn speech_synthesis_request_release(&self, request: RawHandle) {
        log_release(
            unsafe { speech_synthesis_request_release(request) },
            "speech_synthesis_request_release",
        );
    }
}
