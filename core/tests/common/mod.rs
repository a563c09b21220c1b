//! Store properties shared by every backend's test suite.
//!
//! Backends may share state with other tests (a real database), so each check
//! tags its todos with a unique prefix and only counts those.

use std::collections::HashSet;

use todo_core::{NewTodo, TodoId, TodoStore};
use uuid::Uuid;

fn unique_prefix(label: &str) -> String {
    format!("{label}-{}", Uuid::new_v4())
}

pub async fn ids_are_pairwise_distinct(store: &dyn TodoStore) {
    let prefix = unique_prefix("distinct");
    let mut ids = HashSet::new();
    for i in 0..25 {
        let todo = store
            .create_todo(NewTodo::new(format!("{prefix} #{i}"), i % 2 == 0))
            .await
            .unwrap();
        assert!(ids.insert(todo.id), "duplicate id {}", todo.id);
    }
    assert_eq!(ids.len(), 25);
}

pub async fn create_then_get_returns_same_description(store: &dyn TodoStore) {
    let description = unique_prefix("buy milk");
    let created = store
        .create_todo(NewTodo::new(description.clone(), false))
        .await
        .unwrap();
    assert_eq!(created.description, description);

    let fetched = store
        .get_single_todo(&created.id.to_string())
        .await
        .unwrap()
        .expect("created todo should be found");
    assert_eq!(fetched, created);
}

pub async fn unknown_ids_are_absent(store: &dyn TodoStore) {
    for id in [
        "00000000-0000-0000-0000-000000000000",
        "2147483647",
        "not-an-id",
        "",
    ] {
        let found = store.get_single_todo(id).await.unwrap();
        assert!(found.is_none(), "id {id:?} should be absent");
    }
}

pub async fn list_contains_every_created_todo(store: &dyn TodoStore) {
    let prefix = unique_prefix("list");
    let mut created = Vec::new();
    for i in 0..5 {
        created.push(
            store
                .create_todo(NewTodo::new(format!("{prefix} #{i}"), false))
                .await
                .unwrap(),
        );
    }

    let listed: Vec<_> = store
        .get_all_todos()
        .await
        .unwrap()
        .into_iter()
        .filter(|todo| todo.description.starts_with(&prefix))
        .collect();
    assert_eq!(listed.len(), created.len());
    for todo in &created {
        assert!(listed.contains(todo), "missing {}", todo.id);
    }
}

pub async fn other_spellings_of_issued_ids_are_absent(store: &dyn TodoStore) {
    let todo = store
        .create_todo(NewTodo::new(unique_prefix("alias"), false))
        .await
        .unwrap();
    let issued = todo.id.to_string();
    assert!(store.get_single_todo(&issued).await.unwrap().is_some());

    let aliases = match todo.id {
        TodoId::Uuid(uuid) => vec![
            issued.to_uppercase(),
            uuid.simple().to_string(),
            uuid.urn().to_string(),
            uuid.braced().to_string(),
        ],
        TodoId::Serial(id) => vec![format!("+{id}"), format!("0{id}"), format!(" {id}")],
    };
    for alias in aliases.into_iter().filter(|alias| *alias != issued) {
        let found = store.get_single_todo(&alias).await.unwrap();
        assert!(found.is_none(), "{alias:?} was never issued");
    }
}
