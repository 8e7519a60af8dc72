use appcat::CatalogItem;

const UNCATEGORIZED: &str = "Uncategorized";
const MAX_NAME_WIDTH: usize = 35;
const LINE_BUDGET: usize = 90;

pub fn print_item_table(items: &[CatalogItem]) {
    if items.is_empty() {
        return;
    }

    let groups = group_by_category(items);
    let mut total = 0usize;
    let mut first = true;

    for (label, entries) in &groups {
        if !first {
            println!();
        }
        first = false;

        let name_width = entries
            .iter()
            .map(|i| i.name.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_NAME_WIDTH);

        let id_budget = LINE_BUDGET.saturating_sub(2 + name_width + 2);

        println!("{label} ({})", entries.len());

        for entry in entries {
            let name = truncate(&entry.name, name_width);
            let id = truncate(&entry.id, id_budget);

            println!("  {:<width$}  {}", name, id, width = name_width);
        }

        total += entries.len();
    }

    println!("\n{total} packages");
}

fn group_by_category(items: &[CatalogItem]) -> Vec<(String, Vec<&CatalogItem>)> {
    let mut groups: Vec<(String, Vec<&CatalogItem>)> = Vec::new();

    for item in items {
        let label = item.category.as_deref().unwrap_or(UNCATEGORIZED);
        if let Some(group) = groups.iter_mut().find(|(l, _)| l == label) {
            group.1.push(item);
        } else {
            groups.push((label.to_owned(), vec![item]));
        }
    }

    groups.sort_by_key(|(label, _)| (label == UNCATEGORIZED, label.clone()));
    groups
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}
