use std::fs;
use std::process::Command;

fn main() {
    println!("cargo::rerun-if-changed=src/web/frontend/wasm/src");
    let compilation_path = "target-wasm";
    let pkg_path = "public/static/pkg";
    delete_entity(compilation_path);
    delete_entity(pkg_path);
    let profile = std::env::var("PROFILE").unwrap();
    let profile = profile.as_str();
    let wasm_file_path =
        &format!("{compilation_path}/wasm32-unknown-unknown/{profile}/wasm_club_bank.wasm");
    if compile_wasm(compilation_path, profile) {
        generate_bindings(wasm_file_path, pkg_path);
    }
}

/// Compile the frontend lib for the wasm target.
/// Skipped (with a warning) when the wasm toolchain isn't installed,
/// so that server-only builds and tests still work.
fn compile_wasm(compilation_path: &str, profile: &str) -> bool {
    let target_dir = format!("--target-dir={compilation_path}");
    let mut build_args = vec![
        "build",
        "--target=wasm32-unknown-unknown",
        target_dir.as_str(),
        "--manifest-path=./src/web/frontend/wasm/Cargo.toml",
    ];
    if profile == "release" {
        build_args.push("--release");
    }
    let output = match Command::new("cargo").args(build_args).output() {
        Ok(output) => output,
        Err(_) => {
            println!("cargo::warning=Couldn't run cargo for the wasm target, skipping frontend.");
            return false;
        }
    };

    if !output.status.success() {
        println!(
            "cargo::warning=Couldn't compile the frontend for the wasm target, skipping it."
        );
        return false;
    }
    assert!(
        !String::from_utf8(output.stderr)
            .unwrap()
            .contains("error: could not compile `wasm-club-bank` (lib) due to 1 previous error"),
        "Are you sure your WASM lib is correct?"
    );
    true
}

/// Generate JS & TS bindings
fn generate_bindings(wasm_file_path: &str, pkg_path: &str) {
    let out_dir_param = format!("--out-dir={pkg_path}");
    let wasm_bindgen_args = ["--target=web", out_dir_param.as_str(), wasm_file_path];
    if Command::new("wasm-bindgen")
        .args(wasm_bindgen_args)
        .output()
        .is_err()
    {
        println!("cargo::warning=Couldn't run wasm-bindgen, skipping frontend bindings.");
    }
}

fn delete_entity(compilation_path: &str) {
    match fs::metadata(compilation_path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(compilation_path)
            .unwrap_or_else(|_| panic!("Couldn't delete {compilation_path}")),
        Ok(_) => fs::remove_file(compilation_path)
            .unwrap_or_else(|_| panic!("Couldn't delete {compilation_path}")),
        Err(_) => {}
    }
}
