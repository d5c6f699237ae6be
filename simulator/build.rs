//! Build script for today-simulator.
//!
//! Adds an SDL2 library directory to the link search path: `SDL2_LIB_DIR`
//! if set, otherwise `vendor/sdl2` at the workspace root on Windows. On
//! Windows the DLL is copied next to the binary so `cargo run` works.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-env-changed=SDL2_LIB_DIR");

    let is_windows = env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "windows");
    let sdl2_dir = match env::var_os("SDL2_LIB_DIR") {
        Some(dir) => PathBuf::from(dir),
        None if is_windows => match env::var_os("CARGO_MANIFEST_DIR") {
            Some(manifest) => Path::new(&manifest).join("..").join("vendor").join("sdl2"),
            None => return,
        },
        None => return,
    };

    println!("cargo:rerun-if-changed={}", sdl2_dir.display());
    if !sdl2_dir.is_dir() {
        println!("cargo:warning=SDL2 library directory not found: {}", sdl2_dir.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());

    if is_windows {
        copy_dll(&sdl2_dir);
    }
}

/// OUT_DIR is `target/<profile>/build/<pkg>/out`; the binary lives in `target/<profile>`.
fn copy_dll(sdl2_dir: &Path) {
    let Some(out_dir) = env::var_os("OUT_DIR") else {
        return;
    };
    let Some(profile_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    let src = sdl2_dir.join("SDL2.dll");
    let dst = profile_dir.join("SDL2.dll");
    if src.exists() && !dst.exists() {
        if let Err(err) = fs::copy(&src, &dst) {
            println!("cargo:warning=Failed to copy SDL2.dll: {err}");
        }
    }
}
