use gacha_core::{Cookbook, CookbookBuilder};
use tempfile::TempDir;

/// Helper function to create a test cookbook
pub async fn create_test_cookbook(samples: bool) -> (TempDir, Cookbook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");
    let cookbook = CookbookBuilder::new()
        .with_database_path(Some(&db_path))
        .with_sample_recipes(samples)
        .build()
        .await
        .expect("Failed to create cookbook");
    (temp_dir, cookbook)
}
