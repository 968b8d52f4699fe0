//! List Utilities
//!
//! Pure helpers for the item list and its filtered view.

use crate::models::{Filter, Item};

/// Append a new item with a freshly assigned id, unless `text` is empty.
/// Whitespace-only text still counts as text; only the exact empty string
/// is rejected. Returns the id assigned to the new item.
pub fn add_item(items: &mut Vec<Item>, next_id: &mut u64, text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    *next_id += 1;
    let id = format!("todo-{next_id}");
    items.push(Item {
        id: id.clone(),
        text: text.to_string(),
        completed: false,
    });
    Some(id)
}

/// Flip the completion flag of the item with the given id.
/// Unknown ids are a no-op; order and all other items are untouched.
pub fn toggle_item(items: &mut [Item], id: &str) {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.completed = !item.completed;
    }
}

/// Reset every item to incomplete. Items are kept, only flags change.
pub fn clear_completed(items: &mut [Item]) {
    for item in items.iter_mut() {
        item.completed = false;
    }
}

/// The subsequence of `items` visible under `filter`, in list order
pub fn filter_items(items: &[Item], filter: Filter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter.accepts(item))
        .cloned()
        .collect()
}

/// Count of items not yet completed
pub fn remaining_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Filter, Item};

    fn make_item(id: u64, completed: bool) -> Item {
        Item {
            id: format!("todo-{id}"),
            text: format!("Item {id}"),
            completed,
        }
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_add_appends_incomplete_item() {
        let mut items = Vec::new();
        let mut next_id = 0;

        let id = add_item(&mut items, &mut next_id, "New Todo");

        assert_eq!(id.as_deref(), Some("todo-1"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "New Todo");
        assert!(!items[0].completed);
    }

    #[test]
    fn test_add_assigns_unique_ids_in_order() {
        let mut items = Vec::new();
        let mut next_id = 0;

        add_item(&mut items, &mut next_id, "first");
        add_item(&mut items, &mut next_id, "second");
        add_item(&mut items, &mut next_id, "third");

        assert_eq!(ids(&items), vec!["todo-1", "todo-2", "todo-3"]);
    }

    #[test]
    fn test_add_empty_text_is_noop() {
        let mut items = vec![make_item(1, false)];
        let mut next_id = 1;

        let id = add_item(&mut items, &mut next_id, "");

        assert_eq!(id, None);
        assert_eq!(items.len(), 1);
        assert_eq!(next_id, 1);
    }

    #[test]
    fn test_add_whitespace_text_is_not_empty() {
        let mut items = Vec::new();
        let mut next_id = 0;

        let id = add_item(&mut items, &mut next_id, "   ");

        assert!(id.is_some());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "   ");
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut items = vec![make_item(1, false), make_item(2, false), make_item(3, true)];

        toggle_item(&mut items, "todo-2");

        assert!(!items[0].completed);
        assert!(items[1].completed);
        assert!(items[2].completed);
        assert_eq!(ids(&items), vec!["todo-1", "todo-2", "todo-3"]);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut items = vec![make_item(1, false)];

        toggle_item(&mut items, "todo-1");
        toggle_item(&mut items, "todo-1");

        assert!(!items[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut items = vec![make_item(1, false)];

        toggle_item(&mut items, "todo-99");

        assert_eq!(items, vec![make_item(1, false)]);
    }

    #[test]
    fn test_clear_resets_flags_without_removing() {
        let mut items = vec![make_item(1, true), make_item(2, false), make_item(3, true)];

        clear_completed(&mut items);

        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| !item.completed));
        assert_eq!(ids(&items), vec!["todo-1", "todo-2", "todo-3"]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let items = vec![make_item(1, true), make_item(2, false), make_item(3, true)];

        assert_eq!(filter_items(&items, Filter::All), items);
    }

    #[test]
    fn test_filters_partition_the_list() {
        let items = vec![
            make_item(1, false),
            make_item(2, true),
            make_item(3, false),
            make_item(4, true),
        ];

        let active = filter_items(&items, Filter::Active);
        let completed = filter_items(&items, Filter::Completed);

        assert!(active.iter().all(|item| !item.completed));
        assert!(completed.iter().all(|item| item.completed));
        assert_eq!(ids(&active), vec!["todo-1", "todo-3"]);
        assert_eq!(ids(&completed), vec!["todo-2", "todo-4"]);
        // Disjoint and exhaustive over the list
        assert_eq!(active.len() + completed.len(), items.len());
        assert!(active.iter().all(|item| !completed.contains(item)));
    }

    #[test]
    fn test_remaining_counts_incomplete_only() {
        let items = vec![make_item(1, true), make_item(2, false), make_item(3, false)];

        assert_eq!(remaining_count(&items), 2);

        let empty: Vec<Item> = Vec::new();
        assert_eq!(remaining_count(&empty), 0);
    }

    #[test]
    fn test_add_toggle_filter_scenario() {
        let mut items = Vec::new();
        let mut next_id = 0;

        let first = add_item(&mut items, &mut next_id, "Completed Todo").unwrap();
        add_item(&mut items, &mut next_id, "Active Todo");
        toggle_item(&mut items, &first);

        let active = filter_items(&items, Filter::Active);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "Active Todo");

        let completed = filter_items(&items, Filter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "Completed Todo");
    }
}
