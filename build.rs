use std::path::Path;
use std::{env, fs};

use board_loader::{Loader, advisories, codegen, watched_env_vars};

const ENV_PREFIX: &str = "BOARDCFG_";

fn main() {
    let board = target_board();

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("cargo sets CARGO_MANIFEST_DIR");
    let relative = format!("boards/{board}.toml");
    let path = Path::new(&manifest_dir).join(&relative);

    println!("cargo:rerun-if-changed={relative}");
    // Cargo has no wildcard for these: an unknown `BOARDCFG_*` key first set
    // after a successful build is only seen once something else reruns us.
    for name in watched_env_vars(ENV_PREFIX, env::vars().map(|(name, _)| name)) {
        println!("cargo:rerun-if-env-changed={name}");
    }

    let descriptor = match Loader::new(&path).with_env_overrides(ENV_PREFIX).load() {
        Ok(descriptor) => descriptor,
        Err(e) => panic!("invalid board configuration: {e}"),
    };
    for advisory in advisories(&descriptor) {
        println!("cargo:warning={relative}: {advisory}");
    }

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR");
    let dst = Path::new(&out_dir).join("board_config.rs");
    fs::write(&dst, codegen::rust_consts(&descriptor, &relative))
        .unwrap_or_else(|e| panic!("cannot write {}: {e}", dst.display()));
}

/// Name of the single `target-board-*` feature, e.g. `esp32c3-module`.
fn target_board() -> String {
    let prefix = "CARGO_FEATURE_TARGET_BOARD_";
    let mut target_board: Option<String> = None;

    for (name, _) in env::vars() {
        if let Some(suffix) = name.strip_prefix(prefix) {
            let suffix = show_board(suffix);
            if let Some(previous) = &target_board {
                panic!(
                    "multiple target board features defined \
                     (at least target-board-{} and target-board-{})",
                    previous, suffix
                );
            }
            target_board = Some(suffix);
        }
    }

    target_board.unwrap_or_else(|| panic!("missing target-board-* feature"))
}

fn show_board(envvar: &str) -> String {
    envvar.to_ascii_lowercase().replace('_', "-")
}
