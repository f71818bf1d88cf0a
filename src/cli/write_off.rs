use super::{index_for, load_for_update};
use crate::error::Result;
use crate::settings::Paths;
use crate::store::save_products;

pub fn run(paths: &Paths, position: usize, date: &str) -> Result<()> {
    let mut products = load_for_update(paths)?;
    let idx = index_for(&products, position)?;
    let product = &mut products[idx];
    product.set_write_off_date(date)?;
    println!(
        "Wrote off {} as of {}",
        product.name(),
        product.formatted_date_of_write_off()
    );
    save_products(&paths.data_file, &products)?;
    Ok(())
}
