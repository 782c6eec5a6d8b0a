use pad_storage::{blobs, create_pool, run_migrations};

#[tokio::test]
async fn test_put_and_get_blob() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    blobs::put(&pool, "local-abc", b"fake audio bytes")
        .await
        .unwrap();

    let stored = blobs::get(&pool, "local-abc").await.unwrap();
    assert_eq!(stored.as_deref(), Some(b"fake audio bytes".as_slice()));
}

#[tokio::test]
async fn test_get_missing_blob_returns_none() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    let stored = blobs::get(&pool, "never-written").await.unwrap();
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_put_overwrites_existing_blob() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    blobs::put(&pool, "local-abc", b"first").await.unwrap();
    blobs::put(&pool, "local-abc", b"second").await.unwrap();

    let stored = blobs::get(&pool, "local-abc").await.unwrap();
    assert_eq!(stored.as_deref(), Some(b"second".as_slice()));
    assert_eq!(blobs::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_clear_removes_everything() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    blobs::put(&pool, "local-a", b"a").await.unwrap();
    blobs::put(&pool, "local-b", b"b").await.unwrap();
    assert_eq!(blobs::count(&pool).await.unwrap(), 2);

    blobs::clear(&pool).await.unwrap();

    assert_eq!(blobs::count(&pool).await.unwrap(), 0);
    assert!(blobs::get(&pool, "local-a").await.unwrap().is_none());
}

#[tokio::test]
async fn test_binary_data_round_trips_unchanged() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();

    // Bytes that are not valid UTF-8 and include NULs
    let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    blobs::put(&pool, "local-bin", &data).await.unwrap();

    let stored = blobs::get(&pool, "local-bin").await.unwrap();
    assert_eq!(stored, Some(data));
}
