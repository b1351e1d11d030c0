use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Variables de .env (ENVIRONMENT, FILTER_LATENCY_MS, ...) -> option_env! en config.rs
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
                    let key = key.trim();
                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value.trim());
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default timings (copy .env.example to .env to override).");
    }

    for key in ["ENVIRONMENT", "ENABLE_LOGGING", "FILTER_LATENCY_MS", "REFRESH_LATENCY_MS", "TICK_INTERVAL_MS", "AUTH_TOKEN_KEY"] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
