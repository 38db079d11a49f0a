//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("图为空，没有可用顶点")]
    EmptyGraph,

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}
