use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use fabriq_core::orders::{Order, OrderRepositoryTrait};
use fabriq_core::proposals::ProposalStatus;
use fabriq_core::Result;

use super::model::{item_rows, order_from_rows, OrderDB, OrderItemDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{order_items, orders, proposals};

pub struct OrderRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl OrderRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        OrderRepository { pool, writer }
    }

    fn load_order(conn: &mut SqliteConnection, order_id: &str) -> Result<Option<Order>> {
        let order_db = orders::table
            .find(order_id)
            .first::<OrderDB>(conn)
            .optional()
            .map_err(StorageError::from)?;

        match order_db {
            None => Ok(None),
            Some(order_db) => {
                let items = OrderItemDB::belonging_to(&order_db)
                    .order(order_items::position.asc())
                    .load::<OrderItemDB>(conn)
                    .map_err(StorageError::from)?;
                order_from_rows(order_db, items).map(Some)
            }
        }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    fn find_by_id(&self, order_id: &str) -> Result<Option<Order>> {
        let mut conn = get_connection(&self.pool)?;
        Self::load_order(&mut conn, order_id)
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Order>> {
        let mut conn = get_connection(&self.pool)?;
        let orders_db = orders::table
            .filter(orders::owner_id.eq(owner_id))
            .filter(orders::is_deleted.eq(false))
            .order(orders::created_at.desc())
            .load::<OrderDB>(&mut conn)
            .map_err(StorageError::from)?;

        let items = OrderItemDB::belonging_to(&orders_db)
            .load::<OrderItemDB>(&mut conn)
            .map_err(StorageError::from)?;

        items
            .grouped_by(&orders_db)
            .into_iter()
            .zip(orders_db)
            .map(|(items, order_db)| order_from_rows(order_db, items))
            .collect()
    }

    async fn insert(&self, order: Order) -> Result<Order> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Order> {
                diesel::insert_into(orders::table)
                    .values(OrderDB::from(&order))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::insert_into(order_items::table)
                    .values(item_rows(&order))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(order)
            })
            .await
    }

    async fn update(&self, order: Order) -> Result<Order> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Order> {
                let order_db = OrderDB::from(&order);
                diesel::update(orders::table.find(&order.id))
                    .set(&order_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                // Item rows are replaced wholesale; the write actor's
                // transaction keeps the swap atomic with the total update.
                diesel::delete(order_items::table.filter(order_items::order_id.eq(&order.id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::insert_into(order_items::table)
                    .values(item_rows(&order))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(order)
            })
            .await
    }

    async fn delete(&self, order_id: &str) -> Result<()> {
        let order_id = order_id.to_string();
        let now = Utc::now().naive_utc();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(orders::table.find(&order_id))
                    .set((orders::is_deleted.eq(true), orders::updated_at.eq(now)))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                // Pending proposals fall with the order; terminal ones are
                // kept as audit history.
                diesel::delete(
                    proposals::table
                        .filter(proposals::target_id.eq(&order_id))
                        .filter(proposals::status.eq(ProposalStatus::Pending.as_str())),
                )
                .execute(conn)
                .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
