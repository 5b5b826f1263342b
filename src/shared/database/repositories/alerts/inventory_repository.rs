use sqlx::{PgPool, Row};
use anyhow::{Context, Result};
use async_trait::async_trait;
use crate::domains::alerts::models::InventoryItem;
use crate::shared::database::stores::InventoryStore;

pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for InventoryRepository {
    async fn list(&self, company_id: i64) -> Result<Vec<InventoryItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_id, sku, product_name, current_stock, min_stock, max_stock,
                   unit_price, category, updated_at
            FROM inventory_items
            WHERE company_id = $1
            ORDER BY sku ASC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch inventory items")?;

        Ok(rows
            .iter()
            .map(|row| InventoryItem {
                id: row.get("id"),
                company_id: row.get("company_id"),
                sku: row.get("sku"),
                product_name: row.get("product_name"),
                current_stock: row.get("current_stock"),
                min_stock: row.get("min_stock"),
                max_stock: row.get("max_stock"),
                unit_price: row.get("unit_price"),
                category: row.get("category"),
                updated_at: row.get("updated_at"),
            })
            .collect())
    }
}
