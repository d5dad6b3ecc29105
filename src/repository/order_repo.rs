// ==========================================
// Pressia 洗衣店管理系统 - 订单数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 订单不提供删除操作
// ==========================================

use crate::domain::order::{NewOrder, Order};
use crate::domain::types::OrderStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::row_codec::{
    date_column, encode_items, format_date, items_column, now_timestamp, parse_timestamp,
    status_column, timestamp_column,
};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const ORDER_COLUMNS: &str = "id, customer_name, customer_phone, items, total_amount, \
                             pickup_date, status, created_at, updated_at";

// ==========================================
// OrderRepository - 订单仓储
// ==========================================
/// 订单仓储
/// 职责: 管理 orders 表的写入、查询、状态更新
pub struct OrderRepository {
    conn: Arc<Mutex<Connection>>,
}

impl OrderRepository {
    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 写入新订单
    ///
    /// ID、状态(pending)、created_at/updated_at 由仓储分配
    pub fn insert(&self, order: &NewOrder) -> RepositoryResult<Order> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();
        let items_json = encode_items(&order.items)?;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO orders (
                id, customer_name, customer_phone, items, total_amount,
                pickup_date, status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
            "#,
            params![
                id,
                order.customer_name,
                order.customer_phone,
                items_json,
                order.total_amount,
                format_date(&order.pickup_date),
                OrderStatus::Pending.to_db_str(),
                now,
            ],
        )?;

        let created_at = parse_timestamp(&now).ok_or_else(|| {
            RepositoryError::InternalError(format!("无法解析生成的时间戳: {}", now))
        })?;

        Ok(Order {
            id,
            customer_name: order.customer_name.clone(),
            customer_phone: order.customer_phone.clone(),
            items: order.items.clone(),
            total_amount: order.total_amount,
            pickup_date: order.pickup_date,
            status: OrderStatus::Pending,
            created_at,
            updated_at: created_at,
        })
    }

    /// 查询全部订单（按创建时间倒序）
    pub fn find_all(&self) -> RepositoryResult<Vec<Order>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM orders ORDER BY created_at DESC",
            ORDER_COLUMNS
        ))?;
        let orders = stmt
            .query_map([], map_order_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(orders)
    }

    /// 查询最近的订单
    pub fn find_recent(&self, limit: u32) -> RepositoryResult<Vec<Order>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM orders ORDER BY created_at DESC LIMIT ?1",
            ORDER_COLUMNS
        ))?;
        let orders = stmt
            .query_map(params![limit], map_order_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(orders)
    }

    /// 按主键查询
    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Order>> {
        let conn = self.get_conn()?;
        let order = conn
            .query_row(
                &format!("SELECT {} FROM orders WHERE id = ?1", ORDER_COLUMNS),
                params![id],
                map_order_row,
            )
            .optional()?;
        Ok(order)
    }

    /// 更新订单状态，同时刷新 updated_at
    ///
    /// # 返回
    /// - 受影响行数（0 表示订单不存在）
    pub fn update_status(&self, id: &str, status: OrderStatus) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE orders SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status.to_db_str(), now_timestamp(), id],
        )?;
        Ok(affected)
    }
}

fn map_order_row(row: &Row<'_>) -> SqliteResult<Order> {
    let created_at = timestamp_column(row, 7)?;
    // 历史数据 updated_at 可能为空，回退为 created_at
    let updated_at = match row.get::<_, Option<String>>(8)? {
        Some(_) => timestamp_column(row, 8)?,
        None => created_at,
    };

    Ok(Order {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        customer_phone: row.get(2)?,
        items: items_column(row, 3)?,
        total_amount: row.get(4)?,
        pickup_date: date_column(row, 5)?,
        status: status_column(row, 6)?,
        created_at,
        updated_at,
    })
}
