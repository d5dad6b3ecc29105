// ==========================================
// Pressia 洗衣店管理系统 - 支出数据仓储
// ==========================================

use crate::domain::expense::{Expense, ExpenseInput};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::row_codec::{
    date_column, format_date, now_timestamp, parse_timestamp, timestamp_column,
};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

const EXPENSE_COLUMNS: &str = "id, description, amount, category, date, created_at";

/// 支出仓储
/// 职责: 管理 expenses 表的 CRUD 操作
pub struct ExpenseRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ExpenseRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn insert(&self, input: &ExpenseInput) -> RepositoryResult<Expense> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO expenses (id, description, amount, category, date, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                input.description,
                input.amount,
                input.category,
                format_date(&input.date),
                now,
            ],
        )?;

        let created_at = parse_timestamp(&now).ok_or_else(|| {
            RepositoryError::InternalError(format!("无法解析生成的时间戳: {}", now))
        })?;

        Ok(Expense {
            id,
            description: input.description.clone(),
            amount: input.amount,
            category: input.category.clone(),
            date: input.date,
            created_at,
        })
    }

    /// 查询全部支出（按日期倒序）
    pub fn find_all(&self) -> RepositoryResult<Vec<Expense>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM expenses ORDER BY date DESC, created_at DESC",
            EXPENSE_COLUMNS
        ))?;
        let expenses = stmt
            .query_map([], map_expense_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(expenses)
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Expense>> {
        let conn = self.get_conn()?;
        let expense = conn
            .query_row(
                &format!("SELECT {} FROM expenses WHERE id = ?1", EXPENSE_COLUMNS),
                params![id],
                map_expense_row,
            )
            .optional()?;
        Ok(expense)
    }

    /// 更新支出，返回受影响行数（未知 ID 返回 0，不视为错误）
    pub fn update(&self, id: &str, input: &ExpenseInput) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE expenses SET description = ?1, amount = ?2, category = ?3, date = ?4 WHERE id = ?5",
            params![
                input.description,
                input.amount,
                input.category,
                format_date(&input.date),
                id,
            ],
        )?;
        Ok(affected)
    }

    pub fn delete(&self, id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}

fn map_expense_row(row: &Row<'_>) -> SqliteResult<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: date_column(row, 4)?,
        created_at: timestamp_column(row, 5)?,
    })
}
