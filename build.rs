fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The contact endpoint is read with option_env!, so a change must rebuild
    println!("cargo:rerun-if-env-changed=CONTACT_FORM_ENDPOINT");
    println!("cargo:rerun-if-changed=build.rs");
}
