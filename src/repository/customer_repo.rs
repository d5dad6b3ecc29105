// ==========================================
// Pressia 洗衣店管理系统 - 客户数据仓储
// ==========================================

use crate::domain::customer::{Customer, CustomerInput};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::row_codec::now_timestamp;
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// 客户仓储
/// 职责: 管理 customers 表的 CRUD 与查找
pub struct CustomerRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CustomerRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn insert(&self, input: &CustomerInput) -> RepositoryResult<Customer> {
        let id = uuid::Uuid::new_v4().to_string();
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO customers (id, first_name, last_name, phone, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, input.first_name, input.last_name, input.phone, now_timestamp()],
        )?;

        Ok(Customer {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            phone: input.phone.clone(),
        })
    }

    /// 查询全部客户（按名、姓排序）
    pub fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, first_name, last_name, phone FROM customers ORDER BY first_name, last_name",
        )?;
        let customers = stmt
            .query_map([], map_customer_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(customers)
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Customer>> {
        let conn = self.get_conn()?;
        let customer = conn
            .query_row(
                "SELECT id, first_name, last_name, phone FROM customers WHERE id = ?1",
                params![id],
                map_customer_row,
            )
            .optional()?;
        Ok(customer)
    }

    /// 按关键字搜索（名 / 姓 / 电话，不区分大小写）
    ///
    /// SQLite 的 LOWER() 只处理 ASCII，带重音的名字在内存里过滤
    pub fn search(&self, term: &str) -> RepositoryResult<Vec<Customer>> {
        let customers = self.find_all()?;
        Ok(customers.into_iter().filter(|c| c.matches(term)).collect())
    }

    /// 查找与下单联系人对应的已有客户
    ///
    /// 电话相同（非空）或全名相同（空白归一、不区分大小写）即视为同一客户
    pub fn find_match(&self, full_name: &str, phone: &str) -> RepositoryResult<Option<Customer>> {
        let phone = phone.trim();
        let wanted = normalize_name(full_name);
        let customers = self.find_all()?;

        let found = customers.into_iter().find(|c| {
            let same_phone = !phone.is_empty() && c.phone.trim() == phone;
            let same_name = !wanted.is_empty() && normalize_name(&c.full_name()) == wanted;
            same_phone || same_name
        });
        Ok(found)
    }

    pub fn update(&self, id: &str, input: &CustomerInput) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE customers SET first_name = ?1, last_name = ?2, phone = ?3 WHERE id = ?4",
            params![input.first_name, input.last_name, input.phone, id],
        )?;
        Ok(affected)
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM customers WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}

fn map_customer_row(row: &Row<'_>) -> SqliteResult<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone: row.get(3)?,
    })
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
