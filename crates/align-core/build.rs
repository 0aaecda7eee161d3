// File: crates/align-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs; no-op elsewhere.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's DirectWrite font fallback reads the registry (RegOpenKeyExW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
