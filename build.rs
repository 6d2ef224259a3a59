use std::env;
use std::fs;
use std::path::Path;

// Injects API_BASE_URL (and anything else in .env) as compile-time env vars,
// so the wasm bundle carries the backend address without a runtime config fetch.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    // An already-exported variable takes priority over .env
                    if env::var(key.trim()).is_err() {
                        println!("cargo:rustc-env={}={}", key.trim(), value.trim());
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, defaulting API_BASE_URL to http://localhost:8080/api/v1");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
