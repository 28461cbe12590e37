fn main() {
    // The Tauri shell is only built for macOS.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") {
        tauri_build::build()
    }
}
