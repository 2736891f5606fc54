//! Speaks a sentence, then streams text into a request, printing what each synthesis result holds.
//!
//! Expects `SPEECH_KEY` and `SPEECH_REGION` in the environment.

use std::env;
use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::Arc;

use speech_synth_result::ffi::{NativeApi, RawHandle, SpeechApi};
use speech_synth_result::tts::{SpeechSynthesisRequest, SpeechSynthesisResult};

// The synthesizer itself is outside this crate, so the example binds the few calls it needs.
#[link(name = "Microsoft.CognitiveServices.Speech.core")]
extern "C" {
    fn speech_config_from_endpoint(
        hconfig: *mut RawHandle,
        endpoint: *const c_char,
        subscription: *const c_char,
    ) -> usize;
    fn speech_config_release(hconfig: RawHandle) -> usize;
    fn synthesizer_create_speech_synthesizer_from_config(
        hsynth: *mut RawHandle,
        hconfig: RawHandle,
        haudio: RawHandle,
    ) -> usize;
    fn synthesizer_handle_release(hsynth: RawHandle) -> usize;
    fn synthesizer_speak_text(
        hsynth: RawHandle,
        text: *const c_char,
        length: u32,
        hresult: *mut RawHandle,
    ) -> usize;
    fn synthesizer_start_speaking_request(
        hsynth: RawHandle,
        hrequest: RawHandle,
        hresult: *mut RawHandle,
    ) -> usize;
}

fn check(code: usize, what: &str) {
    assert_eq!(0, code, "{} failed with native error code {:#x}", what, code);
}

fn print_result(result: &SpeechSynthesisResult) {
    println!("{:?}", result);
    let latency = result
        .properties()
        .get_property("SpeechServiceResponse_SynthesisFirstByteLatencyMs")
        .unwrap();
    println!("  first byte latency: {} ms", latency);
}

fn main() {
    env_logger::init();

    let region = env::var("SPEECH_REGION").unwrap();
    let key = env::var("SPEECH_KEY").unwrap();
    let endpoint =
        format!("wss://{region}.tts.speech.microsoft.com/cognitiveservices/websocket/v2");
    let endpoint = CString::new(endpoint).unwrap();
    let key = CString::new(key).unwrap();

    let api: Arc<dyn SpeechApi> = Arc::new(NativeApi);

    unsafe {
        // Create a synthesizer that plays through the default speaker.
        let mut config = RawHandle::INVALID;
        check(
            speech_config_from_endpoint(&mut config, endpoint.as_ptr(), key.as_ptr()),
            "config",
        );
        let mut synth = RawHandle::INVALID;
        check(
            synthesizer_create_speech_synthesizer_from_config(
                &mut synth,
                config,
                RawHandle::INVALID,
            ),
            "synthesizer",
        );

        // Speak a whole sentence and look at the finished result.
        let text = "Hello, world!";
        let mut handle = RawHandle::INVALID;
        check(
            synthesizer_speak_text(synth, text.as_ptr() as _, text.len() as u32, &mut handle),
            "speak",
        );
        let result = SpeechSynthesisResult::from_handle(api.clone(), handle).unwrap();
        print_result(&result);
        println!("  {} bytes of audio", result.audio_length());

        // Start a streaming request, then feed it text piece by piece.
        let request = SpeechSynthesisRequest::new_text_streaming_request(api.clone()).unwrap();
        let mut handle = RawHandle::INVALID;
        check(
            synthesizer_start_speaking_request(synth, request.as_raw_handle(), &mut handle),
            "start",
        );
        let started = SpeechSynthesisResult::from_handle(api.clone(), handle).unwrap();
        print_result(&started);

        let input = request.get_text_input_stream();
        input.write("Text streaming lets the synthesizer ").unwrap();
        input.write("start talking before the whole sentence is known.").unwrap();
        input.close().unwrap();

        // Release our handles before the synthesizer goes away.
        drop(started);
        drop(request);
        drop(result);
        check(synthesizer_handle_release(synth), "synthesizer release");
        check(speech_config_release(config), "config release");
    }
}
