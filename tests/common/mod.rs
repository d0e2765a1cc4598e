// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use recipebox::db;
use recipebox::{Component, ComponentId, RecipeSectionModel};
use tempfile::TempDir;

/// Create an initialized, empty test database.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_test_db() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    (temp_dir, db_path)
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn component(title: &str, ingredients: &[&str], instructions: &str) -> Component {
    Component::with_content(
        ComponentId::new(format!("test-{}", title)),
        title,
        lines(ingredients),
        instructions,
    )
}

/// Layer cake with a separate frosting
pub fn layer_cake() -> RecipeSectionModel {
    RecipeSectionModel::sectioned(vec![
        component(
            "Cake",
            &["2 cups flour", "1 cup sugar", "3 eggs"],
            "Preheat oven\nMix dry ingredients\nBake 30 minutes",
        ),
        component("Frosting", &["1 cup butter", "2 cups icing sugar"], "Beat butter\nAdd sugar"),
    ])
}

/// Component content with ids and view state ignored
pub fn shape(model: &RecipeSectionModel) -> Vec<(String, Vec<String>, String)> {
    match model {
        RecipeSectionModel::Simple {
            ingredients,
            instructions,
        } => vec![(String::new(), ingredients.clone(), instructions.clone())],
        RecipeSectionModel::Sectioned { components } => components
            .iter()
            .map(|c| (c.title.clone(), c.ingredients.clone(), c.instructions.clone()))
            .collect(),
    }
}
