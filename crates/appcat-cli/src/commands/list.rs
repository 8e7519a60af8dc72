use anyhow::Result;
use appcat_store::CatalogStore;

use super::format;

pub fn run(store: &CatalogStore, category_filter: Option<&str>) -> Result<()> {
    let items = store.items().map_err(|e| anyhow::anyhow!("{e}"))?;

    let filtered: Vec<_> = items
        .into_iter()
        .filter(|item| match category_filter {
            Some(filter) => item.category.as_deref() == Some(filter),
            None => true,
        })
        .collect();

    format::print_item_table(&filtered);

    Ok(())
}
