// ==========================================
// Pressia 洗衣店管理系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository错误为用户可读的错误消息
// 消息使用界面语言（法语）
// ==========================================

use crate::engine::lifecycle::TransitionRejected;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    /// 表单校验失败（在任何存储调用之前拒绝）
    #[error("Données invalides: {0}")]
    InvalidInput(String),

    #[error("Introuvable: {0}")]
    NotFound(String),

    /// 仅严格流转模式下出现
    #[error("Changement de statut interdit: {from} → {to}")]
    InvalidStateTransition { from: String, to: String },

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("Erreur de base de données: {0}")]
    DatabaseError(String),

    #[error("Base de données indisponible: {0}")]
    DatabaseConnectionError(String),

    // ==========================================
    // 备份错误（导出/导入）
    // ==========================================
    #[error("Échec de la sauvegarde: {0}")]
    BackupError(String),

    /// 用户关闭了文件对话框
    #[error("cancelled")]
    Cancelled,

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("Erreur interne: {0}")]
    InternalError(String),
}

impl ApiError {
    /// 前端使用的错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidStateTransition { .. } => "INVALID_STATE_TRANSITION",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::BackupError(_) => "BACKUP_ERROR",
            ApiError::Cancelled => "CANCELLED",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 存储/备份层失败（记 error 级日志）
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            ApiError::DatabaseError(_)
                | ApiError::DatabaseConnectionError(_)
                | ApiError::BackupError(_)
        )
    }
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={})", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => ApiError::DatabaseError(msg),
            RepositoryError::SerializationError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::Io(e) => ApiError::BackupError(e.to_string()),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<TransitionRejected> for ApiError {
    fn from(err: TransitionRejected) -> Self {
        ApiError::InvalidStateTransition {
            from: err.from.to_string(),
            to: err.to.to_string(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
