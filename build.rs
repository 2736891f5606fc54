use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=SPEECH_SDK_LIB_DIR");

    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    // The core library ships outside any system path, so let the caller point at it.
    if let Some(dir) = env::var_os("SPEECH_SDK_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }
}
