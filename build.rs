use std::{env, fs, path::PathBuf};

fn main() {
    // 1) Place memory.x for the RP2040 (thumbv6m) firmware build
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumbv6m") {
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));
        let memory_x = fs::read_to_string("memory.x").expect("Failed to read memory.x");
        fs::write(out_dir.join("memory.x"), memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
        println!("cargo:rerun-if-changed=memory.x");
    }

    // 2) Load optional env files
    let _ = dotenvy::from_filename(".env");

    // 3) Display timing, with fallbacks so a plain build needs no configuration.
    //    2048 us per digit refreshes the whole display at about 122 Hz;
    //    1536 us lit per tick is 75% brightness (0 = never blank, full brightness).
    let scan_tick_us = env_or_default("RATE_LED4_SCAN_TICK_US", "2048");
    let on_time_us = env_or_default("RATE_LED4_ON_TIME_US", "1536");

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=RATE_LED4_SCAN_TICK_US={scan_tick_us}");
    println!("cargo:rustc-env=RATE_LED4_ON_TIME_US={on_time_us}");

    println!("cargo:rerun-if-env-changed=RATE_LED4_SCAN_TICK_US");
    println!("cargo:rerun-if-env-changed=RATE_LED4_ON_TIME_US");
    println!("cargo:rerun-if-changed=.env");
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key)
        .map(|value| value.trim().to_owned())
        .unwrap_or_else(|_| default.to_owned())
}
