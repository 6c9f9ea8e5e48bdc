//! In-memory [`CatalogStore`] used by resolver tests and local runs without a
//! database.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use validator::Validate;

use crate::catalog::CatalogStore;
use crate::error::{CoreError, CoreResult};
use crate::product::{is_visible, NewProduct, Product};
use crate::types::{DbId, Flag};

/// A row as the store keeps it, internal flags included.
#[derive(Debug, Clone)]
struct StoredProduct {
    product: Product,
    status: Flag,
    hide_stock: Flag,
}

impl StoredProduct {
    fn is_visible(&self) -> bool {
        is_visible(self.status, self.hide_stock)
    }
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<StoredProduct>,
    next_id: DbId,
}

/// A read operation of [`CatalogStore`], used to fail one path at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    ListAll,
    ListByGame,
    GetById,
}

impl StoreOperation {
    fn index(self) -> usize {
        match self {
            StoreOperation::ListAll => 0,
            StoreOperation::ListByGame => 1,
            StoreOperation::GetById => 2,
        }
    }
}

/// Vector-backed store with auto-incrementing ids.
///
/// Rows are appended in id order, so iteration order is primary-key order.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    inner: RwLock<Inner>,
    unavailable: AtomicBool,
    failing: [AtomicBool; 3],
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product and return its public shape with the assigned id.
    pub async fn insert(&self, new: NewProduct) -> CoreResult<Product> {
        new.validate()?;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let product = Product {
            id: inner.next_id,
            name: new.name,
            price: new.price,
            game_id: new.game_id,
        };
        inner.rows.push(StoredProduct {
            product: product.clone(),
            status: new.status,
            hide_stock: new.hide_stock,
        });
        Ok(product)
    }

    /// Make every read fail with [`CoreError::Unavailable`] until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make only `operation` fail with [`CoreError::Unavailable`]; the
    /// other reads keep working.
    pub fn fail_operation(&self, operation: StoreOperation) {
        self.failing[operation.index()].store(true, Ordering::SeqCst);
    }

    fn check_available(&self, operation: StoreOperation) -> CoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst)
            || self.failing[operation.index()].load(Ordering::SeqCst)
        {
            return Err(CoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }

    async fn visible_where<F>(&self, predicate: F) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|row| row.is_visible() && predicate(&row.product))
            .map(|row| row.product.clone())
            .collect()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn list_all(&self) -> CoreResult<Vec<Product>> {
        self.check_available(StoreOperation::ListAll)?;
        Ok(self.visible_where(|_| true).await)
    }

    async fn list_by_game(&self, game_id: DbId) -> CoreResult<Vec<Product>> {
        self.check_available(StoreOperation::ListByGame)?;
        Ok(self.visible_where(|p| p.game_id == game_id).await)
    }

    async fn get_by_id(&self, id: DbId) -> CoreResult<Option<Product>> {
        self.check_available(StoreOperation::GetById)?;
        Ok(self.visible_where(|p| p.id == id).await.into_iter().next())
    }
}
