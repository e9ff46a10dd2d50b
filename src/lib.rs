//! PeerReview - 同学互评聚合服务
//!
//! 基于 Actix Web 构建的互评结论判定、成绩计算与活动统计后端。
//!
//! # 架构
//! - `config`: 配置管理（含互评阈值）
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（纯计算核心位于 `grading` 与 `statistics`）
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
