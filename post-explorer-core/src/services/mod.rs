//! 业务逻辑服务层

mod explorer_service;

pub use explorer_service::ExplorerService;
