use std::path::PathBuf;

use uatx::engine::install::EngineInstall;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_uatx");

pub fn fixture(relative: &str) -> PathBuf {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join("tests/fixtures").join(relative)
}

pub fn install(name: &str, path: &str) -> EngineInstall {
    EngineInstall {
        name: name.to_string(),
        path: PathBuf::from(path),
    }
}
