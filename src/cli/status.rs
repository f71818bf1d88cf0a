use colored::Colorize;

use crate::error::Result;
use crate::fmt::format_bytes;
use crate::log::MemoryLog;
use crate::models::ALL_KINDS;
use crate::parser::parse_file;
use crate::settings::Paths;

pub fn run(paths: &Paths) -> Result<()> {
    println!("Inventory:  {}", paths.data_file.display());
    println!("Log file:   {}", paths.log_file.display());

    if !paths.data_file.exists() {
        println!();
        println!("Inventory not found. Run `warehouse init` to set up.");
        return Ok(());
    }

    let size = std::fs::metadata(&paths.data_file)?.len();
    println!("File size:  {}", format_bytes(size));

    // Collected in memory so that `status` never appends to the log file.
    let mut log = MemoryLog::default();
    let products = parse_file(&paths.data_file, &mut log);

    println!();
    println!("Products:     {}", products.len());
    for kind in ALL_KINDS {
        let n = products.iter().filter(|p| p.kind() == *kind).count();
        println!("  {:<11} {n}", format!("{}:", kind.label()));
    }
    let written_off = products.iter().filter(|p| p.is_written_off()).count();
    println!("Written off:  {written_off}");
    println!("Skipped:      {}", log.messages.len());

    for message in &log.messages {
        println!("  {}", message.yellow());
    }
    Ok(())
}
