//! Host-side helper: `cargo run` compiles the WASM bundle, serves the site
//! from `static/` on a local port, and opens an ngrok tunnel when available.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8000";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    if !build_wasm_bundle() {
        std::process::exit(1);
    }
    serve_site();
    open_tunnel();

    // Keep process alive so the child servers stay up.
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

/// Compile the crate, then run wasm-pack into `static/pkg` so the page's
/// module import resolves.
fn build_wasm_bundle() -> bool {
    println!("Running cargo build …");
    let cargo_status = Command::new("cargo")
        .args(["build", "--release"])
        .status()
        .expect("failed to run cargo build");
    if !cargo_status.success() {
        eprintln!("cargo build failed");
        return false;
    }

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => true,
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            false
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
            true
        }
    }
}

fn serve_site() {
    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let _server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start http server");
}

fn open_tunnel() {
    let ngrok = Command::new("ngrok")
        .args(["http", PORT])
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn();

    match ngrok {
        Ok(_) => println!("ngrok tunnel starting …"),
        Err(_) => eprintln!("ngrok not found. Install it to share the galaxy over the internet."),
    }
}
