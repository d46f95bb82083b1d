//! Order repository.
//!
//! An order is stored as one `orders` row plus one `order_items` row per item.
//! Every write touching both tables runs in a single transaction.

use std::collections::HashMap;

use async_trait::async_trait;
use common::OrderId;
use domain::repository::Result;
use domain::{
    DomainError, Entity, Money, Order, OrderItem, OrderRepository, Repository, RepositoryError,
};
use sqlx::{QueryBuilder, Sqlite, SqlitePool, Transaction};

/// Row of the `orders` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct OrderRecord {
    pub id: String,
    pub customer_id: String,
    /// Order total in cents as of the last write.
    pub total: i64,
}

/// Row of the `order_items` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct OrderItemRecord {
    pub id: String,
    pub name: String,
    /// Unit price in cents.
    pub price: i64,
    pub quantity: i64,
    pub order_id: String,
    pub product_id: String,
}

impl OrderRecord {
    pub fn from_entity(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            total: order.total().cents(),
        }
    }

    /// Rebuilds the aggregate. The stored total is ignored; it is derived from
    /// the items.
    pub fn into_entity(self, items: Vec<OrderItemRecord>) -> std::result::Result<Order, DomainError> {
        let items = items
            .into_iter()
            .map(OrderItemRecord::into_entity)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Order::new(self.id, self.customer_id, items)?)
    }
}

impl OrderItemRecord {
    pub fn from_entity(order: &Order, item: &OrderItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            price: item.price().cents(),
            quantity: i64::from(item.quantity()),
            order_id: order.id().to_string(),
            product_id: item.product_id().to_string(),
        }
    }

    pub fn into_entity(self) -> std::result::Result<OrderItem, DomainError> {
        // Out-of-range quantities become 0 and are rejected by OrderItem::new.
        let quantity = u32::try_from(self.quantity).unwrap_or(0);
        Ok(OrderItem::new(
            self.id,
            self.name,
            Money::from_cents(self.price),
            self.product_id,
            quantity,
        )?)
    }
}

const SELECT_ITEMS: &str =
    "SELECT id, name, price, quantity, order_id, product_id FROM order_items";

/// SQLite-backed order repository.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert(&self, order: &OrderRecord, items: &[OrderItemRecord]) -> sqlx::Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(&order.id)
            .bind(&order.customer_id)
            .bind(order.total)
            .execute(&mut *tx)
            .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, name, price, quantity, order_id, product_id)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&item.id)
            .bind(&item.name)
            .bind(item.price)
            .bind(item.quantity)
            .bind(&item.order_id)
            .bind(&item.product_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }

    /// Overwrites the order row, upserts every item and drops item rows that
    /// are no longer part of the order.
    ///
    /// Nothing is written unless the outcome is [`Overwrite::Done`].
    async fn overwrite(
        &self,
        order: &OrderRecord,
        items: &[OrderItemRecord],
    ) -> sqlx::Result<Overwrite> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(&order.customer_id)
            .bind(order.total)
            .bind(&order.id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(Overwrite::OrderMissing);
        }

        for item in items {
            if !Self::upsert_item(&mut tx, item).await? {
                return Ok(Overwrite::ItemTaken(item.id.clone()));
            }
        }

        let mut delete = QueryBuilder::<Sqlite>::new("DELETE FROM order_items WHERE order_id = ");
        delete.push_bind(&order.id);
        if !items.is_empty() {
            delete.push(" AND id NOT IN (");
            let mut ids = delete.separated(", ");
            for item in items {
                ids.push_bind(&item.id);
            }
            ids.push_unseparated(")");
        }
        delete.build().execute(&mut *tx).await?;

        tx.commit().await?;
        Ok(Overwrite::Done)
    }

    /// Inserts or updates an item row of the item's own order. Returns false,
    /// writing nothing, if the id is taken by an item of another order.
    async fn upsert_item(
        tx: &mut Transaction<'_, Sqlite>,
        item: &OrderItemRecord,
    ) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO order_items (id, name, price, quantity, order_id, product_id)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                price = excluded.price,
                quantity = excluded.quantity,
                product_id = excluded.product_id
            WHERE order_items.order_id = excluded.order_id
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.price)
        .bind(item.quantity)
        .bind(&item.order_id)
        .bind(&item.product_id)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_one(
        &self,
        id: &OrderId,
    ) -> sqlx::Result<Option<(OrderRecord, Vec<OrderItemRecord>)>> {
        // Both reads see the same snapshot.
        let mut tx = self.pool.begin().await?;

        let Some(order) = sqlx::query_as::<_, OrderRecord>(
            "SELECT id, customer_id, total FROM orders WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItemRecord>(&format!(
            "{SELECT_ITEMS} WHERE order_id = ? ORDER BY rowid"
        ))
        .bind(id.as_str())
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((order, items)))
    }

    async fn fetch_all(&self) -> sqlx::Result<Vec<(OrderRecord, Vec<OrderItemRecord>)>> {
        let mut tx = self.pool.begin().await?;

        let orders = sqlx::query_as::<_, OrderRecord>(
            "SELECT id, customer_id, total FROM orders ORDER BY rowid",
        )
        .fetch_all(&mut *tx)
        .await?;

        let items = sqlx::query_as::<_, OrderItemRecord>(&format!("{SELECT_ITEMS} ORDER BY rowid"))
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let mut items_by_order: HashMap<String, Vec<OrderItemRecord>> = HashMap::new();
        for item in items {
            items_by_order
                .entry(item.order_id.clone())
                .or_default()
                .push(item);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                (order, items)
            })
            .collect())
    }
}

/// Result of [`SqliteOrderRepository::overwrite`].
#[derive(Debug, PartialEq, Eq)]
enum Overwrite {
    Done,
    OrderMissing,
    /// The item id is already used by another order.
    ItemTaken(String),
}

fn item_records(order: &Order) -> Vec<OrderItemRecord> {
    order
        .items()
        .iter()
        .map(|item| OrderItemRecord::from_entity(order, item))
        .collect()
}

#[async_trait]
impl Repository<Order> for SqliteOrderRepository {
    #[tracing::instrument(skip_all, fields(order_id = %entity.id()))]
    async fn create(&self, entity: &Order) -> Result<()> {
        let record = OrderRecord::from_entity(entity);
        let items = item_records(entity);

        self.insert(&record, &items)
            .await
            .map_err(RepositoryError::storage)?;

        tracing::debug!(items = items.len(), total = record.total, "order created");
        metrics::counter!("repository_writes", "entity" => "order", "operation" => "create")
            .increment(1);
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(order_id = %entity.id()))]
    async fn update(&self, entity: &Order) -> Result<()> {
        let record = OrderRecord::from_entity(entity);
        let items = item_records(entity);

        match self
            .overwrite(&record, &items)
            .await
            .map_err(RepositoryError::storage)?
        {
            Overwrite::Done => {}
            Overwrite::OrderMissing => {
                return Err(RepositoryError::NotFound(Order::entity_name()));
            }
            Overwrite::ItemTaken(item_id) => {
                tracing::warn!(%item_id, "item belongs to another order");
                return Err(RepositoryError::Conflict(format!(
                    "Item {item_id} belongs to another order"
                )));
            }
        }

        tracing::debug!(items = items.len(), total = record.total, "order updated");
        metrics::counter!("repository_writes", "entity" => "order", "operation" => "update")
            .increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &OrderId) -> Result<Order> {
        let (order, items) = self
            .fetch_one(id)
            .await
            .map_err(RepositoryError::storage)?
            .ok_or(RepositoryError::NotFound(Order::entity_name()))?;

        Ok(order.into_entity(items)?)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = self.fetch_all().await.map_err(RepositoryError::storage)?;

        rows.into_iter()
            .map(|(order, items)| order.into_entity(items).map_err(RepositoryError::from))
            .collect()
    }
}

impl OrderRepository for SqliteOrderRepository {}
