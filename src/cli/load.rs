use std::path::PathBuf;

use crate::error::{Result, WarehouseError};
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(path: &str) -> Result<()> {
    let resolved = PathBuf::from(shellexpand_path(path));

    if !resolved.is_file() {
        return Err(WarehouseError::Settings(format!(
            "No inventory found at {}\nRun `warehouse init --data-file {}` to create one.",
            resolved.display(),
            resolved.display()
        )));
    }

    let mut settings = load_settings();
    settings.data_file = resolved.to_string_lossy().to_string();
    save_settings(&settings)?;

    println!("Switched to {}", resolved.display());
    Ok(())
}
