// ==========================================
// Pressia 洗衣店管理系统 - 价目表数据仓储
// ==========================================

use crate::domain::item_type::{ItemType, ItemTypeInput};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::row_codec::now_timestamp;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// 价目表仓储
/// 职责: 管理 item_types 表的 CRUD 操作
pub struct ItemTypeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ItemTypeRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn insert(&self, input: &ItemTypeInput) -> RepositoryResult<ItemType> {
        let id = uuid::Uuid::new_v4().to_string();
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO item_types (id, name, price, category, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, input.name, input.price, input.category, now_timestamp()],
        )?;

        Ok(ItemType {
            id,
            name: input.name.clone(),
            price: input.price,
            category: input.category.clone(),
        })
    }

    /// 查询全部条目（按分类、名称排序）
    pub fn find_all(&self) -> RepositoryResult<Vec<ItemType>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, price, category FROM item_types ORDER BY category, name",
        )?;
        let items = stmt
            .query_map([], map_item_type_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(items)
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<ItemType>> {
        let conn = self.get_conn()?;
        let item = conn
            .query_row(
                "SELECT id, name, price, category FROM item_types WHERE id = ?1",
                params![id],
                map_item_type_row,
            )
            .optional()?;
        Ok(item)
    }

    pub fn update(&self, id: &str, input: &ItemTypeInput) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE item_types SET name = ?1, price = ?2, category = ?3 WHERE id = ?4",
            params![input.name, input.price, input.category, id],
        )?;
        Ok(affected)
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM item_types WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}

fn map_item_type_row(row: &Row<'_>) -> SqliteResult<ItemType> {
    Ok(ItemType {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        category: row.get(3)?,
    })
}
