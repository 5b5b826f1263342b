use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use sqlx::postgres::PgRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::domains::integrations::models::NormalizedOrder;
use crate::domains::orders::models::{
    Order, OrderFilter, OrderUpdate, StatusHistory, StatusHistoryCreate,
};
use crate::shared::database::repositories::parse_column;
use crate::shared::database::stores::OrderStore;
use crate::shared::utils::PageRequest;

const ORDER_COLUMNS: &str = r#"
    id, order_number, platform_order_id, company_id, platform,
    customer_name, customer_email, customer_phone,
    product_name, sku, quantity, unit_price, total_amount,
    recipient_name, shipping_address, shipping_method, tracking_number, carrier_code,
    status, payment_status, order_date, shipped_at, delivered_at,
    created_at, updated_at, metadata, version
"#;

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &PgRow) -> Result<Order> {
        Ok(Order {
            id: row.get("id"),
            order_number: row.get("order_number"),
            platform_order_id: row.get("platform_order_id"),
            company_id: row.get("company_id"),
            platform: parse_column("platform", row.get::<&str, _>("platform"))?,
            customer_name: row.get("customer_name"),
            customer_email: row.get("customer_email"),
            customer_phone: row.get("customer_phone"),
            product_name: row.get("product_name"),
            sku: row.get("sku"),
            quantity: row.get("quantity"),
            unit_price: row.get("unit_price"),
            total_amount: row.get("total_amount"),
            recipient_name: row.get("recipient_name"),
            shipping_address: row.get("shipping_address"),
            shipping_method: row.get("shipping_method"),
            tracking_number: row.get("tracking_number"),
            carrier_code: row.get("carrier_code"),
            status: parse_column("status", row.get::<&str, _>("status"))?,
            payment_status: parse_column("payment_status", row.get::<&str, _>("payment_status"))?,
            order_date: row.get("order_date"),
            shipped_at: row.get("shipped_at"),
            delivered_at: row.get("delivered_at"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            metadata: row.get("metadata"),
            version: row.get("version"),
        })
    }

    fn row_to_history(row: &PgRow) -> Result<StatusHistory> {
        Ok(StatusHistory {
            id: row.get("id"),
            order_id: row.get("order_id"),
            from_status: parse_column("from_status", row.get::<&str, _>("from_status"))?,
            to_status: parse_column("to_status", row.get::<&str, _>("to_status"))?,
            changed_by: row.get("changed_by"),
            note: row.get("note"),
            created_at: row.get("created_at"),
        })
    }

    /// 목록/건수 쿼리 공통 WHERE 절
    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, company_id: i64, filter: &OrderFilter) {
        builder.push(" WHERE company_id = ").push_bind(company_id);

        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status.as_str());
        }
        if let Some(platform) = filter.platform {
            builder.push(" AND platform = ").push_bind(platform.as_str());
        }
        if let Some(from) = filter.date_from {
            builder.push(" AND order_date >= ").push_bind(from);
        }
        if let Some(to) = filter.date_to {
            builder.push(" AND order_date <= ").push_bind(to);
        }
        if let Some(term) = filter.search.as_deref() {
            let pattern = format!("%{}%", escape_like(term));
            builder
                .push(" AND (order_number ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR customer_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR product_name ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}

/// LIKE 패턴 특수문자 이스케이프
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let row = sqlx::query(&format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch order by id")?;

        row.map(|r| Self::row_to_order(&r)).transpose()
    }

    async fn list(&self, company_id: i64, filter: &OrderFilter, page: PageRequest) -> Result<(Vec<Order>, i64)> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM orders");
        Self::push_filters(&mut count_query, company_id, filter);
        let total: i64 = count_query
            .build()
            .fetch_one(&self.pool)
            .await
            .context("Failed to count orders")?
            .get(0);

        let mut list_query = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM orders", ORDER_COLUMNS));
        Self::push_filters(&mut list_query, company_id, filter);
        list_query
            .push(" ORDER BY order_date DESC, id DESC LIMIT ")
            .push_bind(page.limit as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let rows = list_query
            .build()
            .fetch_all(&self.pool)
            .await
            .context("Failed to list orders")?;

        let orders = rows.iter().map(Self::row_to_order).collect::<Result<Vec<_>>>()?;
        Ok((orders, total))
    }

    async fn find_since(&self, company_id: i64, since: DateTime<Utc>) -> Result<Vec<Order>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM orders WHERE company_id = $1 AND order_date >= $2 ORDER BY order_date ASC, id ASC",
            ORDER_COLUMNS
        ))
        .bind(company_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch orders for stats")?;

        rows.iter().map(Self::row_to_order).collect()
    }

    async fn save_update(&self, update: &OrderUpdate, history: Option<&StatusHistoryCreate>) -> Result<bool> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        // 1. 버전이 같을 때만 갱신
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET status = $1,
                tracking_number = $2,
                carrier_code = $3,
                shipped_at = $4,
                delivered_at = $5,
                metadata = $6,
                updated_at = $7,
                version = version + 1
            WHERE id = $8 AND version = $9
            "#,
        )
        .bind(update.status.as_str())
        .bind(&update.tracking_number)
        .bind(&update.carrier_code)
        .bind(update.shipped_at)
        .bind(update.delivered_at)
        .bind(&update.metadata)
        .bind(update.updated_at)
        .bind(update.order_id)
        .bind(update.expected_version)
        .execute(&mut tx)
        .await
        .context("Failed to update order")?;

        if result.rows_affected() == 0 {
            tx.rollback().await.context("Failed to roll back order update")?;
            return Ok(false);
        }

        // 2. 상태가 바뀐 경우에만 이력 추가
        if let Some(history) = history {
            sqlx::query(
                r#"
                INSERT INTO order_status_history (order_id, from_status, to_status, changed_by, note, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(history.order_id)
            .bind(history.from_status.as_str())
            .bind(history.to_status.as_str())
            .bind(&history.changed_by)
            .bind(&history.note)
            .bind(update.updated_at)
            .execute(&mut tx)
            .await
            .context("Failed to append order status history")?;
        }

        tx.commit().await.context("Failed to commit order update")?;
        Ok(true)
    }

    async fn history(&self, order_id: i64) -> Result<Vec<StatusHistory>> {
        let rows = sqlx::query(
            r#"
            SELECT id, order_id, from_status, to_status, changed_by, note, created_at
            FROM order_status_history
            WHERE order_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch order status history")?;

        rows.iter().map(Self::row_to_history).collect()
    }

    async fn insert_synced(&self, company_id: i64, order: &NormalizedOrder) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO orders (
                order_number, platform_order_id, company_id, platform,
                customer_name, customer_email, customer_phone,
                product_name, sku, quantity, unit_price, total_amount,
                recipient_name, shipping_address,
                status, payment_status, order_date, metadata,
                version, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, 1, NOW(), NOW())
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(order.order_number())
        .bind(&order.platform_order_id)
        .bind(company_id)
        .bind(order.platform.as_str())
        .bind(&order.customer_name)
        .bind(&order.customer_email)
        .bind(&order.customer_phone)
        .bind(&order.product_name)
        .bind(&order.sku)
        .bind(order.quantity)
        .bind(order.unit_price)
        .bind(order.total_amount)
        .bind(&order.recipient_name)
        .bind(&order.shipping_address)
        .bind(order.status.as_str())
        .bind(order.payment_status.as_str())
        .bind(order.order_date)
        .bind(&order.metadata)
        .execute(&self.pool)
        .await
        .context("Failed to insert synced order")?;

        Ok(result.rows_affected() > 0)
    }
}
