//! Entity Store Tests
//!
//! CRUD, cascade delete and the per-parent projection.

#[cfg(test)]
mod tests {
    use crate::config::BoardConfig;
    use crate::domain::{BoardError, Id};
    use crate::store::EntityStore;

    fn setup_store() -> (EntityStore, BoardConfig) {
        (EntityStore::new(), BoardConfig::default())
    }

    fn labels(store: &EntityStore, column: Id) -> Vec<String> {
        store.items_in(column).iter().map(|item| item.label.clone()).collect()
    }

    #[test]
    fn test_create_column_titles_are_positional() {
        let (mut store, config) = setup_store();
        let a = store.create_column(&config).unwrap();
        let b = store.create_column(&config).unwrap();
        assert_eq!(a.title, "Column 1");
        assert_eq!(b.title, "Column 2");
        assert_ne!(a.id, b.id);
        assert_eq!(store.columns().len(), 2);
    }

    #[test]
    fn test_update_column_in_place() {
        let (mut store, config) = setup_store();
        let a = store.create_column(&config).unwrap();
        let b = store.create_column(&config).unwrap();
        assert!(store.update_column(a.id, "Todo"));
        assert_eq!(store.columns()[0].title, "Todo");
        assert_eq!(store.columns()[1].id, b.id);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let (mut store, config) = setup_store();
        let col = store.create_column(&config).unwrap();
        let missing = Id::new(404);
        assert!(!store.update_column(missing, "x"));
        assert!(!store.delete_column(missing));
        assert!(!store.update_item(missing, "x"));
        assert!(!store.delete_item(missing));
        assert_eq!(store.columns(), &[col]);
    }

    #[test]
    fn test_create_item_appends_last() {
        let (mut store, config) = setup_store();
        let col = store.create_column(&config).unwrap();
        store.create_item(col.id, &config).unwrap();
        let second = store.create_item(col.id, &config).unwrap();
        let view = store.items_in(col.id);
        assert_eq!(view.last().map(|item| item.id), Some(second.id));
        assert_eq!(second.label, "Task 2");
        assert_eq!(second.parent_id, col.id);
    }

    #[test]
    fn test_create_item_under_missing_column() {
        let (mut store, config) = setup_store();
        let err = store.create_item(Id::new(12), &config).unwrap_err();
        assert!(matches!(err, BoardError::InvalidParent(id) if id == Id::new(12)));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_delete_column_cascades() {
        let (mut store, config) = setup_store();
        let a = store.create_column(&config).unwrap();
        let b = store.create_column(&config).unwrap();
        store.create_item(a.id, &config).unwrap();
        let keep = store.create_item(b.id, &config).unwrap();
        store.create_item(a.id, &config).unwrap();

        assert!(store.delete_column(a.id));
        assert!(store.items_in(a.id).is_empty());
        assert!(store.items().iter().all(|item| item.parent_id != a.id));
        assert_eq!(store.items(), &[keep]);
    }

    #[test]
    fn test_update_item_keeps_position_and_parent() {
        let (mut store, config) = setup_store();
        let col = store.create_column(&config).unwrap();
        let first = store.create_item(col.id, &config).unwrap();
        store.create_item(col.id, &config).unwrap();
        assert!(store.update_item(first.id, "Write docs"));
        assert_eq!(labels(&store, col.id), vec!["Write docs", "Task 2"]);
        assert_eq!(store.item(first.id).unwrap().parent_id, col.id);
    }

    #[test]
    fn test_delete_item() {
        let (mut store, config) = setup_store();
        let col = store.create_column(&config).unwrap();
        let item = store.create_item(col.id, &config).unwrap();
        assert!(store.delete_item(item.id));
        assert!(store.item(item.id).is_none());
        assert!(!store.delete_item(item.id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let (mut store, config) = setup_store();
        let col = store.create_column(&config).unwrap();
        let item = store.create_item(col.id, &config).unwrap();
        store.delete_item(item.id);
        let next = store.create_item(col.id, &config).unwrap();
        assert_ne!(next.id, item.id);
    }

    #[test]
    fn test_reposition_through_projection_keeps_other_parents() {
        let (mut store, config) = setup_store();
        let a = store.create_column(&config).unwrap();
        let b = store.create_column(&config).unwrap();
        // Interleave: a1 b1 a2 b2 a3
        let a1 = store.create_item(a.id, &config).unwrap();
        let b1 = store.create_item(b.id, &config).unwrap();
        let a2 = store.create_item(a.id, &config).unwrap();
        let b2 = store.create_item(b.id, &config).unwrap();
        let a3 = store.create_item(a.id, &config).unwrap();

        store.reposition_in_parent(a3.id, 0).unwrap();

        assert_eq!(store.parent_view(a.id), vec![a3.id, a1.id, a2.id]);
        assert_eq!(store.parent_view(b.id), vec![b1.id, b2.id]);
        // Column b's items still occupy the same global slots.
        assert_eq!(store.items()[1].id, b1.id);
        assert_eq!(store.items()[3].id, b2.id);
        assert_eq!(store.index_in_parent(a1.id), Some(1));
    }

    #[test]
    fn test_reposition_out_of_range() {
        let (mut store, config) = setup_store();
        let col = store.create_column(&config).unwrap();
        let item = store.create_item(col.id, &config).unwrap();
        let err = store.reposition_in_parent(item.id, 1).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 1, len: 1 }));
    }
}
