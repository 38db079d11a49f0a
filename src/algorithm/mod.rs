//! 图算法模块
//!
//! 基于邻接查询和度数的派生结构查询

mod analysis;
