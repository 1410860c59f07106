fn main() {
    // footer copyright year is read from this at compile time
    let stamp = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={stamp}");
    println!("cargo:rerun-if-changed=build.rs");
}
