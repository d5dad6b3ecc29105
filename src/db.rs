// ==========================================
// Pressia 洗衣店管理系统 - SQLite 连接与存储句柄
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 建表 + 默认价目表初始化（幂等）
// - Storage: 显式持有的唯一连接，导入数据库后整体 reopen
// ==========================================

use rusqlite::{params, Connection};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::domain::item_type::DEFAULT_ITEM_TYPES;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::row_codec::now_timestamp;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// SQLite 文件头魔数
const SQLITE_MAGIC: &[u8; 16] = b"SQLite format 3\0";

/// 建表语句（与历史数据库文件兼容，列名/类型保持不变）
const SCHEMA_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY,
        customer_name TEXT NOT NULL,
        customer_phone TEXT,
        items TEXT NOT NULL,
        total_amount REAL NOT NULL,
        pickup_date TEXT NOT NULL,
        status TEXT DEFAULT 'pending',
        created_at TEXT DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS expenses (
        id TEXT PRIMARY KEY,
        description TEXT NOT NULL,
        amount REAL NOT NULL,
        category TEXT NOT NULL,
        date TEXT NOT NULL,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS item_types (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        category TEXT NOT NULL,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        phone TEXT NOT NULL,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX IF NOT EXISTS idx_orders_created_at ON orders(created_at);
    CREATE INDEX IF NOT EXISTS idx_orders_status ON orders(status);
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: impl AsRef<Path>) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 建表（幂等）并在价目表为空时写入默认条目
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    let item_count: i64 = conn.query_row("SELECT COUNT(*) FROM item_types", [], |row| row.get(0))?;
    if item_count == 0 {
        let created_at = now_timestamp();
        let mut stmt = conn.prepare(
            "INSERT INTO item_types (id, name, price, category, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for (name, price, category) in DEFAULT_ITEM_TYPES {
            stmt.execute(params![
                uuid::Uuid::new_v4().to_string(),
                name,
                price,
                category,
                created_at,
            ])?;
        }
        tracing::info!("价目表为空，已写入默认条目: count={}", DEFAULT_ITEM_TYPES.len());
    }

    Ok(())
}

/// 各表必须具备的列
const REQUIRED_COLUMNS: [(&str, &str); 5] = [
    (
        "orders",
        "id, customer_name, customer_phone, items, total_amount, pickup_date, status, created_at, updated_at",
    ),
    ("expenses", "id, description, amount, category, date, created_at"),
    ("item_types", "id, name, price, category, created_at"),
    ("customers", "id, first_name, last_name, phone, created_at"),
    ("settings", "key, value, updated_at"),
];

/// 校验表结构：缺表或缺列时返回错误
pub fn verify_schema(conn: &Connection) -> rusqlite::Result<()> {
    for (table, columns) in REQUIRED_COLUMNS {
        conn.prepare(&format!("SELECT {} FROM {} LIMIT 0", columns, table))?;
    }
    Ok(())
}

/// 打开连接 + 建表 + 结构校验，返回可直接使用的连接
pub fn open_and_bootstrap(db_path: impl AsRef<Path>) -> rusqlite::Result<Connection> {
    let conn = open_sqlite_connection(db_path)?;
    initialize_schema(&conn)?;
    verify_schema(&conn)?;
    Ok(conn)
}

/// 检查文件是否为 SQLite 数据库（读取文件头）
pub fn is_sqlite_file(path: impl AsRef<Path>) -> std::io::Result<bool> {
    let mut header = [0u8; 16];
    let mut file = fs::File::open(path)?;
    match file.read_exact(&mut header) {
        Ok(()) => Ok(&header == SQLITE_MAGIC),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

// ==========================================
// Storage - 存储句柄
// ==========================================
/// 整个进程唯一的数据库句柄
///
/// 所有仓储共享同一个 `Arc<Mutex<Connection>>`，`reopen` / `replace_from`
/// 在锁内原地替换连接，仓储无需重建。
pub struct Storage {
    db_path: PathBuf,
    conn: Arc<Mutex<Connection>>,
}

impl Storage {
    /// 打开（必要时创建）数据库文件并初始化表结构
    pub fn open(db_path: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = open_and_bootstrap(&db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        tracing::info!("数据库已打开: {}", db_path.display());

        Ok(Self {
            db_path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 数据库文件路径
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// 共享连接（供仓储构造使用）
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 关闭当前连接并重新打开同一文件
    pub fn reopen(&self) -> RepositoryResult<()> {
        let mut guard = self.lock()?;
        Self::close_in_place(&mut guard)?;
        *guard = open_and_bootstrap(&self.db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        tracing::info!("数据库连接已重新打开: {}", self.db_path.display());
        Ok(())
    }

    /// 整库复制到目标路径，返回写入字节数
    pub fn export_to(&self, dest: &Path) -> RepositoryResult<u64> {
        if same_file(&self.db_path, dest) {
            return Err(RepositoryError::InternalError(
                "导出目标不能是当前数据库文件".to_string(),
            ));
        }
        // 持锁期间无写入，文件内容一致
        let _guard = self.lock()?;
        let bytes = fs::copy(&self.db_path, dest)?;
        tracing::info!("数据库已导出: {} ({} bytes)", dest.display(), bytes);
        Ok(bytes)
    }

    /// 用外部文件整体替换当前数据库，然后重新打开
    ///
    /// 1. 复制到同目录临时文件，在副本上建表并校验结构；失败时原库不动
    /// 2. 保留原库副本 (.bak)，再 rename 替换
    /// 3. 重新打开失败时还原 .bak 并恢复文件连接
    pub fn replace_from(&self, src: &Path) -> RepositoryResult<()> {
        if same_file(&self.db_path, src) {
            return self.reopen();
        }

        let staging = self.db_path.with_extension("importing");
        fs::copy(src, &staging)?;
        if let Err(e) = Self::check_importable(&staging) {
            remove_quietly(&staging);
            tracing::warn!("拒绝导入 {}: {}", src.display(), e);
            return Err(e);
        }

        let mut guard = match self.lock() {
            Ok(guard) => guard,
            Err(e) => {
                remove_quietly(&staging);
                return Err(e);
            }
        };
        let rollback = self.db_path.with_extension("bak");
        if let Err(e) = fs::copy(&self.db_path, &rollback) {
            remove_quietly(&staging);
            return Err(e.into());
        }
        Self::close_in_place(&mut guard)?;

        let swapped = fs::rename(&staging, &self.db_path)
            .map_err(RepositoryError::from)
            .and_then(|()| {
                open_and_bootstrap(&self.db_path)
                    .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))
            });

        match swapped {
            Ok(conn) => {
                *guard = conn;
                remove_quietly(&rollback);
                tracing::info!("数据库已从 {} 导入并重新打开", src.display());
                Ok(())
            }
            Err(e) => {
                remove_quietly(&staging);
                let restored = fs::rename(&rollback, &self.db_path)
                    .map_err(RepositoryError::from)
                    .and_then(|()| {
                        open_and_bootstrap(&self.db_path)
                            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))
                    });
                match restored {
                    Ok(conn) => {
                        *guard = conn;
                        tracing::warn!("导入失败，已恢复原数据库: {}", e);
                    }
                    Err(restore_err) => tracing::error!(
                        "导入失败且无法恢复原数据库（副本保留在 {}）: {}",
                        rollback.display(),
                        restore_err
                    ),
                }
                Err(e)
            }
        }
    }

    /// 在临时副本上建表并校验结构，确认可作为当前数据库使用
    fn check_importable(staging: &Path) -> RepositoryResult<()> {
        let conn = open_and_bootstrap(staging).map_err(|e| {
            RepositoryError::InternalError(format!("sauvegarde incompatible: {}", e))
        })?;
        if let Err((_conn, e)) = conn.close() {
            tracing::warn!("关闭导入副本失败: {}", e);
        }
        Ok(())
    }

    /// 用内存占位连接换出文件连接并关闭，释放文件句柄
    fn close_in_place(guard: &mut MutexGuard<'_, Connection>) -> RepositoryResult<()> {
        let placeholder = Connection::open_in_memory()
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let old = std::mem::replace(&mut **guard, placeholder);
        if let Err((_conn, e)) = old.close() {
            tracing::warn!("关闭旧数据库连接失败: {}", e);
        }
        Ok(())
    }
}

fn remove_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("删除临时文件失败 {}: {}", path.display(), e);
        }
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
