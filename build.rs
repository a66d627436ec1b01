fn main() {
    println!("cargo:rustc-link-arg-bins=-Tlinkall.x");

    for key in ["WIFI_SSID", "WIFI_PASSWORD", "PANEL_DEBUG", "PANEL_PROJECTOR_RELAY"] {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let version = std::env::var("BUILD_VERSION")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y.%m.%d-%H%M").to_string());
    println!("cargo:rustc-env=BUILD_VERSION={version}");
    println!("cargo:rerun-if-env-changed=BUILD_VERSION");
}
