/// A single installable package row from the catalog database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
        }
    }
}
