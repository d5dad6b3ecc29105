// ==========================================
// Pressia 洗衣店管理系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 数据库错误 =====
    #[error("Enregistrement introuvable: {entity} id={id}")]
    NotFound { entity: String, id: String },

    #[error("Connexion à la base impossible: {0}")]
    DatabaseConnectionError(String),

    #[error("Verrou de la base indisponible: {0}")]
    LockError(String),

    #[error("Échec de la requête: {0}")]
    DatabaseQueryError(String),

    #[error("Contrainte d'unicité violée: {0}")]
    UniqueConstraintViolation(String),

    // ===== 数据格式错误 =====
    #[error("Données mal formées: {0}")]
    SerializationError(String),

    // ===== 文件错误（导入/导出） =====
    #[error("Erreur de fichier: {0}")]
    Io(#[from] std::io::Error),

    // ===== 通用错误 =====
    #[error("Erreur interne: {0}")]
    InternalError(String),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            rusqlite::Error::FromSqlConversionFailure(_, _, inner) => {
                RepositoryError::SerializationError(inner.to_string())
            }
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::SerializationError(err.to_string())
    }
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
