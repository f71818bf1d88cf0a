use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};
use crate::store::init_store;

/// `--data-file` is remembered in settings; a global `--file` only creates
/// the inventory for this run and leaves the configured file untouched.
pub fn run(data_file: Option<String>, file_override: Option<&Path>) -> Result<()> {
    let path = match (data_file, file_override) {
        (Some(file), _) => remember(&file)?,
        (None, Some(file)) => PathBuf::from(shellexpand_path(&file.to_string_lossy())),
        (None, None) => {
            let settings = load_settings();
            save_settings(&settings)?;
            PathBuf::from(&settings.data_file)
        }
    };

    if init_store(&path)? {
        println!("Created empty inventory at {}", path.display());
    } else {
        println!("Using existing inventory at {}", path.display());
    }
    Ok(())
}

fn remember(file: &str) -> Result<PathBuf> {
    let mut settings = load_settings();
    settings.data_file = shellexpand_path(file);
    save_settings(&settings)?;
    Ok(PathBuf::from(&settings.data_file))
}
