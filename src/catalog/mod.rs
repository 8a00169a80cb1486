/// Catalog sources
///
/// This module supplies the ordered item list the gallery pages through:
/// - A generated fox sequence with templated image URLs (fox.rs)
/// - A JSON catalog of kangaroo records read from disk (kangaroo.rs)
///
/// Loading never fails from the caller's point of view: any error is
/// logged and turned into an empty catalog.

pub mod fox;
pub mod kangaroo;

pub use fox::{fox_catalog, FOX_COUNT};

use std::path::PathBuf;

use crate::state::config::Variant;
use crate::state::data::Item;

/// Load the catalog for `variant`.
///
/// `catalog_path` is only read by the kangaroo variant.
pub async fn load(variant: Variant, catalog_path: PathBuf) -> Vec<Item> {
    match variant {
        Variant::Fox => fox_catalog(FOX_COUNT),
        Variant::Kangaroo => match kangaroo::load_file(&catalog_path).await {
            Ok(items) => {
                tracing::info!("🦘 Loaded {} kangaroos from {}", items.len(), catalog_path.display());
                items
            }
            Err(e) => {
                tracing::warn!("⚠️  Catalog unavailable ({}): {e}", catalog_path.display());
                Vec::new()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fox_catalog_has_51_items() {
        let items = load(Variant::Fox, PathBuf::from("unused.json")).await;
        assert_eq!(items.len(), 51);
        assert_eq!(items[50].id, 51);
    }

    #[tokio::test]
    async fn test_missing_kangaroo_file_gives_empty_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let items = load(Variant::Kangaroo, dir.path().join("kangaroos.json")).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_kangaroo_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kangaroos.json");
        std::fs::write(
            &path,
            r#"[{"id": 2, "name": "Skippy", "image": "b.jpg"}, {"id": 1, "name": "Joey", "image": "a.jpg"}]"#,
        )
        .unwrap();

        let items = load(Variant::Kangaroo, path).await;
        let names: Vec<_> = items.iter().map(|item| item.display_name.as_str()).collect();
        assert_eq!(names, ["Joey", "Skippy"]);
    }
}
