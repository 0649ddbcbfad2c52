//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mindly_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("mindly_core ping={}", mindly_core::ping());
    println!("mindly_core version={}", mindly_core::core_version());
    println!(
        "mindly_core emotions={}",
        mindly_core::EmotionCatalog::builtin().len()
    );
}
