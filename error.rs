/// 库内统一的错误类型
#[derive(Debug, thiserror::Error)]
pub enum KdTreeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Tree invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, KdTreeError>;
