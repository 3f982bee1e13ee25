//! End-to-end reconciliation properties against the local JSON-file store:
//! what the view-model shows after commit/drink must match what a fresh
//! load from the store sees.

use std::sync::Arc;

use tempfile::TempDir;

use wc_app::{AppBuilder, CellarViewModel, CommitOutcome, DrinkOutcome};
use wc_core::ports::InventoryStorePort;
use wc_infra::catalog::HttpCatalogClient;
use wc_infra::localstore::JsonFileInventoryStore;
use wc_infra::photos::FsPhotoStore;
use wc_infra::SystemClock;

fn init_tracing() {
    // Multiple tests race to install; only the first wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn build_vm(dir: &TempDir) -> (CellarViewModel, Arc<JsonFileInventoryStore>) {
    init_tracing();
    let store = Arc::new(
        JsonFileInventoryStore::load(dir.path().join("wines.json"))
            .await
            .unwrap(),
    );
    let vm = AppBuilder::new()
        .with_inventory_store(store.clone())
        .with_catalog_lookup(Arc::new(HttpCatalogClient::new(
            "http://127.0.0.1:0/unused",
        )))
        .with_photo_store(Arc::new(FsPhotoStore::new(
            dir.path().join("photos"),
            "file://photos",
            SystemClock,
        )))
        .build()
        .unwrap();
    (vm, store)
}

#[tokio::test]
async fn commit_then_load_roundtrips_every_field() {
    let dir = TempDir::new().unwrap();
    let (mut vm, _store) = build_vm(&dir).await;
    vm.load().await;

    let draft = vm.draft_mut();
    draft.name = "Ch. Margaux".to_string();
    draft.grape = Some("Cabernet Sauvignon".to_string());
    draft.country = Some("France".to_string());
    draft.vintage = Some(2010);
    draft.location = Some("rack A1".to_string());
    draft.quantity = 2;
    draft.price = Some(480.0);

    let outcome = vm.commit_draft().await.unwrap();
    assert!(matches!(outcome, CommitOutcome::Committed(_)));

    // A second view-model loading from the same blob sees the same record.
    let (mut fresh, _store) = build_vm(&dir).await;
    fresh.load().await;
    assert_eq!(fresh.collection().len(), 1);
    let record = &fresh.collection()[0];
    assert_eq!(record.name, "Ch. Margaux");
    assert_eq!(record.grape.as_deref(), Some("Cabernet Sauvignon"));
    assert_eq!(record.country.as_deref(), Some("France"));
    assert_eq!(record.vintage, Some(2010));
    assert_eq!(record.location.as_deref(), Some("rack A1"));
    assert_eq!(record.quantity, 2);
    assert_eq!(record.price, Some(480.0));
}

#[tokio::test]
async fn drink_is_reflected_in_mirror_and_store() {
    let dir = TempDir::new().unwrap();
    let (mut vm, store) = build_vm(&dir).await;
    vm.load().await;

    vm.draft_mut().name = "Rioja".to_string();
    vm.draft_mut().quantity = 3;
    vm.commit_draft().await.unwrap();
    let id = vm.collection()[0].id.clone();

    let outcome = vm.drink_one(&id).await.unwrap();
    assert_eq!(outcome, DrinkOutcome::Confirmed { remaining: 2 });
    assert_eq!(vm.collection()[0].quantity, 2);

    let refetched = store.fetch_all().await.unwrap();
    assert_eq!(refetched[0].quantity, 2);
}

#[tokio::test]
async fn depleted_record_survives_reload_and_blocks_further_drinks() {
    let dir = TempDir::new().unwrap();
    let (mut vm, _store) = build_vm(&dir).await;
    vm.load().await;

    vm.draft_mut().name = "Last one".to_string();
    vm.draft_mut().quantity = 1;
    vm.commit_draft().await.unwrap();
    let id = vm.collection()[0].id.clone();

    assert_eq!(
        vm.drink_one(&id).await.unwrap(),
        DrinkOutcome::Confirmed { remaining: 0 }
    );

    let (mut fresh, _store) = build_vm(&dir).await;
    fresh.load().await;
    assert_eq!(fresh.collection().len(), 1);
    assert!(fresh.collection()[0].is_depleted());
    assert_eq!(fresh.drink_one(&id).await.unwrap(), DrinkOutcome::Depleted);
}
