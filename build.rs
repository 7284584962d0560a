use std::env;

const RECEIVER_MAC_VAR: &str = "WEATHER_COMM_RECEIVER_MAC";

fn main() {
    if env::var_os("CARGO_FEATURE_ESP32").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
        println!("cargo:rustc-link-arg-bins=-Trom_functions.x");
    }
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-env-changed={RECEIVER_MAC_VAR}");
    println!("cargo::rerun-if-env-changed=WEATHER_COMM_TEAM");

    // Malformed receiver addresses fail the build
    if let Ok(mac) = env::var(RECEIVER_MAC_VAR) {
        let octets: Vec<&str> = mac.split(|c| c == ':' || c == '-').collect();
        let valid = octets.len() == 6
            && octets
                .iter()
                .all(|octet| octet.len() == 2 && u8::from_str_radix(octet, 16).is_ok());
        if !valid {
            panic!("{RECEIVER_MAC_VAR} must look like AA:BB:CC:DD:EE:FF, got {mac:?}");
        }
    }
}
