//! Integration tests for the `products` table and `PgCatalogStore`.
//!
//! Each test gets a fresh database from `#[sqlx::test]` (requires
//! `DATABASE_URL`) and provisions the table itself, exactly as startup does.

use assert_matches::assert_matches;
use catalog_core::catalog::CatalogStore;
use catalog_core::error::CoreError;
use catalog_core::product::NewProduct;
use catalog_db::repositories::ProductRepo;
use catalog_db::PgCatalogStore;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn provisioned(pool: PgPool) -> PgCatalogStore {
    catalog_db::ensure_schema(&pool).await.unwrap();
    PgCatalogStore::new(pool)
}

/// Two visible products per game for games 1 and 2, plus one inactive and
/// one hidden product that must never be served.
async fn seed(store: &PgCatalogStore) {
    let rows = [
        NewProduct::visible("Gold Pack", 9.99, 1),
        NewProduct::visible("Silver Pack", 4.99, 1),
        NewProduct::visible("Retired Pack", 2.5, 1).with_flags(0, 0),
        NewProduct::visible("Gem Bundle", 19.0, 2),
        NewProduct::visible("Hidden Skin", 7.25, 2).with_flags(1, 1),
        NewProduct::visible("Season Pass", 14.0, 2),
    ];
    for row in &rows {
        store.insert(row).await.unwrap();
    }
}

// ---------------------------------------------------------------------------
// Provisioning
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn ensure_schema_is_idempotent(pool: PgPool) {
    catalog_db::ensure_schema(&pool).await.unwrap();
    catalog_db::ensure_schema(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}

#[tokio::test]
async fn create_pool_fails_when_server_is_unreachable() {
    let options = PgConnectOptions::new().host("127.0.0.1").port(1);
    assert!(catalog_db::create_pool(options, 1).await.is_err());
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn list_all_returns_visible_rows_in_id_order(pool: PgPool) {
    let store = provisioned(pool).await;
    seed(&store).await;

    let products = store.list_all().await.unwrap();
    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Gold Pack", "Silver Pack", "Gem Bundle", "Season Pass"]
    );
    assert!(products.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = false)]
async fn list_all_on_empty_table_is_empty(pool: PgPool) {
    let store = provisioned(pool).await;
    assert!(store.list_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn list_by_game_filters_by_game(pool: PgPool) {
    let store = provisioned(pool).await;
    seed(&store).await;

    let game_one = store.list_by_game(1).await.unwrap();
    assert_eq!(game_one.len(), 2);
    assert!(game_one.iter().all(|p| p.game_id == 1));

    assert!(store.list_by_game(42).await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
async fn list_all_is_union_of_games(pool: PgPool) {
    let store = provisioned(pool).await;
    seed(&store).await;

    let all = store.list_all().await.unwrap();
    let mut union = store.list_by_game(1).await.unwrap();
    union.extend(store.list_by_game(2).await.unwrap());
    union.sort_by_key(|p| p.id);

    assert_eq!(all, union);
}

#[sqlx::test(migrations = false)]
async fn get_by_id_round_trips_inserted_product(pool: PgPool) {
    let store = provisioned(pool).await;
    let inserted = store
        .insert(&NewProduct::visible("Founder Crate", 12.345, 7))
        .await
        .unwrap();

    let fetched = store.get_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(fetched, inserted);
    assert_eq!(fetched.price, 12.345);
}

#[sqlx::test(migrations = false)]
async fn get_by_id_never_returns_filtered_rows(pool: PgPool) {
    let store = provisioned(pool.clone()).await;
    let inactive = ProductRepo::insert(
        &pool,
        &NewProduct::visible("Retired Pack", 2.5, 1).with_flags(0, 0),
    )
    .await
    .unwrap();
    let hidden = ProductRepo::insert(
        &pool,
        &NewProduct::visible("Hidden Skin", 7.25, 2).with_flags(3, 1),
    )
    .await
    .unwrap();

    assert_matches!(store.get_by_id(inactive.id).await, Ok(None));
    assert_matches!(store.get_by_id(hidden.id).await, Ok(None));
    assert_matches!(store.get_by_id(999_999).await, Ok(None));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn insert_rejects_invalid_product(pool: PgPool) {
    let store = provisioned(pool).await;
    let result = store.insert(&NewProduct::visible("", 1.0, 1)).await;
    assert_matches!(result, Err(CoreError::Validation(_)));
}

#[sqlx::test(migrations = false)]
async fn insert_rejects_non_finite_price(pool: PgPool) {
    let store = provisioned(pool).await;
    let result = store.insert(&NewProduct::visible("Gold Pack", f64::NAN, 1)).await;
    assert_matches!(result, Err(CoreError::Validation(_)));
}

#[sqlx::test(migrations = false)]
async fn table_check_rejects_nan_written_directly(pool: PgPool) {
    catalog_db::ensure_schema(&pool).await.unwrap();
    let err = sqlx::query(
        "INSERT INTO products (prd_name, prd_general_fix_price, prd_game_id) \
         VALUES ('Gold Pack', 'NaN', 1)",
    )
    .execute(&pool)
    .await
    .unwrap_err();
    assert_matches!(
        catalog_db::store::classify_sqlx_error(err),
        CoreError::Validation(_)
    );
}

#[sqlx::test(migrations = false)]
async fn missing_table_is_a_query_error(pool: PgPool) {
    let store = PgCatalogStore::new(pool);
    assert_matches!(store.list_all().await, Err(CoreError::Query(_)));
}

#[sqlx::test(migrations = false)]
async fn closed_pool_is_unavailable(pool: PgPool) {
    let store = provisioned(pool.clone()).await;
    pool.close().await;
    assert_matches!(store.get_by_id(1).await, Err(CoreError::Unavailable(_)));
}
