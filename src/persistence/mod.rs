use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::KelimeError;

const APP_DIR: &str = "kelime";

/// Local app-data directory, created on first use. Falls back to the
/// working directory when the platform dir cannot be resolved.
fn app_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(base) => {
            let dir = base.join(APP_DIR);
            let _ = fs::create_dir_all(&dir);
            dir
        }
        None => PathBuf::from("."),
    }
}

pub fn data_file_path(filename: &str) -> PathBuf {
    app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), KelimeError> {
    let path = data_file_path(filename);
    fs::write(&path, serde_json::to_string_pretty(data)?)?;
    println!("[Persistence] Saved {}", path.display());
    Ok(())
}

pub fn load_json<T: DeserializeOwned + Default>(filename: &str) -> Result<T, KelimeError> {
    let path = data_file_path(filename);
    if !path.exists() {
        return Ok(T::default());
    }

    Ok(serde_json::from_str(&fs::read_to_string(&path)?)?)
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    load_json(filename).unwrap_or_else(|e| {
        eprintln!("[Persistence] Failed to load {}: {}. Using defaults.", filename, e);
        T::default()
    })
}
