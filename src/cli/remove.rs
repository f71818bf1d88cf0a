use super::{index_for, load_for_update};
use crate::error::Result;
use crate::settings::Paths;
use crate::store::save_products;

pub fn run(paths: &Paths, position: usize) -> Result<()> {
    let mut products = load_for_update(paths)?;
    let idx = index_for(&products, position)?;
    let removed = products.remove(idx);
    save_products(&paths.data_file, &products)?;
    println!("Removed {} ({})", removed.name(), removed.kind().label());
    Ok(())
}
