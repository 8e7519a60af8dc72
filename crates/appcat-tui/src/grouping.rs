use appcat::CatalogItem;

/// Label used for packages with no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A group of packages sharing the same category.
#[derive(Debug, Clone)]
pub struct Group {
    pub label: String,
    pub count: usize,
    /// Indices into the view items vec.
    pub item_indices: Vec<usize>,
}

/// A row in the flattened list: either a section header or a selectable item.
#[derive(Debug, Clone)]
pub enum ListRow {
    Header { label: String, count: usize },
    Item { item_index: usize },
}

/// Display label for a package's category.
pub fn category_label(item: &CatalogItem) -> &str {
    item.category.as_deref().unwrap_or(UNCATEGORIZED)
}

fn label_sort_key(label: &str) -> (bool, String) {
    // Named categories alphabetically, Uncategorized last.
    (label == UNCATEGORIZED, label.to_owned())
}

/// Build sorted category groups from items, returning both the groups and a
/// flattened list of rows for cursor navigation.
pub fn build_groups(items: &[CatalogItem]) -> (Vec<Group>, Vec<ListRow>) {
    let mut raw_groups: Vec<(String, Vec<usize>)> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let label = category_label(item);
        if let Some(group) = raw_groups.iter_mut().find(|(l, _)| l == label) {
            group.1.push(idx);
        } else {
            raw_groups.push((label.to_owned(), vec![idx]));
        }
    }

    raw_groups.sort_by_key(|(label, _)| label_sort_key(label));

    let mut groups = Vec::new();
    let mut flat_items = Vec::new();

    for (label, indices) in raw_groups {
        let count = indices.len();

        flat_items.push(ListRow::Header {
            label: label.clone(),
            count,
        });

        for &idx in &indices {
            flat_items.push(ListRow::Item { item_index: idx });
        }

        groups.push(Group {
            label,
            count,
            item_indices: indices,
        });
    }

    (groups, flat_items)
}

/// Build a flat, headerless row list (used when grouping is disabled).
pub fn build_flat(items: &[CatalogItem]) -> Vec<ListRow> {
    (0..items.len())
        .map(|idx| ListRow::Item { item_index: idx })
        .collect()
}

/// Find the first selectable (Item) row index, or None if empty.
pub fn first_item_index(flat_items: &[ListRow]) -> Option<usize> {
    flat_items
        .iter()
        .position(|row| matches!(row, ListRow::Item { .. }))
}

/// Find the next selectable row after `current`, or stay put.
pub fn next_item_index(flat_items: &[ListRow], current: usize) -> usize {
    flat_items
        .iter()
        .enumerate()
        .skip(current + 1)
        .find(|(_, row)| matches!(row, ListRow::Item { .. }))
        .map(|(i, _)| i)
        .unwrap_or(current)
}

/// Find the previous selectable row before `current`, or stay put.
pub fn prev_item_index(flat_items: &[ListRow], current: usize) -> usize {
    flat_items
        .iter()
        .enumerate()
        .take(current)
        .rev()
        .find(|(_, row)| matches!(row, ListRow::Item { .. }))
        .map(|(i, _)| i)
        .unwrap_or(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: Option<&str>) -> CatalogItem {
        CatalogItem::new(name.to_lowercase(), name, category.map(str::to_owned))
    }

    #[test]
    fn empty_items_produce_no_groups() {
        let (groups, flat) = build_groups(&[]);
        assert!(groups.is_empty());
        assert!(flat.is_empty());
    }

    #[test]
    fn groups_sorted_alphabetically_with_uncategorized_last() {
        let items = vec![
            item("VLC", Some("Utilities")),
            item("Oddball", None),
            item("Firefox", Some("Browsers")),
        ];

        let (groups, _) = build_groups(&items);
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Browsers", "Utilities", UNCATEGORIZED]);
    }

    #[test]
    fn flat_items_interleave_headers_and_items() {
        let items = vec![
            item("Firefox", Some("Browsers")),
            item("Chromium", Some("Browsers")),
            item("VLC", Some("Utilities")),
        ];

        let (_, flat) = build_groups(&items);

        // Header(Browsers), Item, Item, Header(Utilities), Item
        assert_eq!(flat.len(), 5);
        assert!(matches!(flat[0], ListRow::Header { .. }));
        assert!(matches!(flat[1], ListRow::Item { .. }));
        assert!(matches!(flat[2], ListRow::Item { .. }));
        assert!(matches!(flat[3], ListRow::Header { .. }));
        assert!(matches!(flat[4], ListRow::Item { .. }));
    }

    #[test]
    fn build_flat_has_no_headers() {
        let items = vec![
            item("Firefox", Some("Browsers")),
            item("VLC", Some("Utilities")),
        ];

        let flat = build_flat(&items);
        assert_eq!(flat.len(), 2);
        assert!(flat.iter().all(|row| matches!(row, ListRow::Item { .. })));
    }

    #[test]
    fn first_item_index_skips_header() {
        let items = vec![item("Firefox", Some("Browsers"))];
        let (_, flat) = build_groups(&items);

        assert_eq!(first_item_index(&flat), Some(1));
    }

    #[test]
    fn first_item_index_none_for_empty() {
        assert_eq!(first_item_index(&[]), None);
    }

    #[test]
    fn next_item_skips_headers() {
        let items = vec![
            item("Firefox", Some("Browsers")),
            item("VLC", Some("Utilities")),
        ];
        let (_, flat) = build_groups(&items);

        // flat: Header(0), Item(1), Header(2), Item(3)
        assert_eq!(next_item_index(&flat, 1), 3);
    }

    #[test]
    fn next_item_stays_at_end() {
        let items = vec![item("Firefox", Some("Browsers"))];
        let (_, flat) = build_groups(&items);

        assert_eq!(next_item_index(&flat, 1), 1);
    }

    #[test]
    fn prev_item_skips_headers() {
        let items = vec![
            item("Firefox", Some("Browsers")),
            item("VLC", Some("Utilities")),
        ];
        let (_, flat) = build_groups(&items);

        assert_eq!(prev_item_index(&flat, 3), 1);
    }

    #[test]
    fn prev_item_stays_at_beginning() {
        let items = vec![item("Firefox", Some("Browsers"))];
        let (_, flat) = build_groups(&items);

        assert_eq!(prev_item_index(&flat, 1), 1);
    }

    #[test]
    fn group_counts_match_entries() {
        let items = vec![
            item("Firefox", Some("Browsers")),
            item("Chromium", Some("Browsers")),
            item("Edge", Some("Browsers")),
            item("VLC", Some("Utilities")),
        ];

        let (groups, _) = build_groups(&items);
        assert_eq!(groups[0].count, 3); // Browsers
        assert_eq!(groups[1].count, 1); // Utilities
    }

    #[test]
    fn category_label_defaults_for_none() {
        assert_eq!(category_label(&item("Oddball", None)), UNCATEGORIZED);
        assert_eq!(category_label(&item("VLC", Some("Utilities"))), "Utilities");
    }
}
