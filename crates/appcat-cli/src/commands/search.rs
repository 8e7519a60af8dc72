use anyhow::Result;
use appcat_store::CatalogStore;

use super::format;

pub fn run(store: &CatalogStore, query: &str) -> Result<()> {
    let items = store.search(query).map_err(|e| anyhow::anyhow!("{e}"))?;

    if items.is_empty() {
        println!("No packages match '{query}'.");
        return Ok(());
    }

    format::print_item_table(&items);

    Ok(())
}
