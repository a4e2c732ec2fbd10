//! 加载请求执行器
//!
//! 持有 tokio 运行时，把 Update 层排入的 [`Effect`] 放到后台执行，
//! 结果通过 channel 送回主循环。

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use post_explorer_core::{DataSource, ExplorerService};
use post_explorer_provider::JsonPlaceholderClient;

use super::AppConfig;
use crate::message::FetchMessage;
use crate::model::Effect;

/// 后台加载服务
pub struct ExplorerBackend {
    runtime: Runtime,
    service: ExplorerService,
    tx: UnboundedSender<FetchMessage>,
    rx: UnboundedReceiver<FetchMessage>,
}

impl ExplorerBackend {
    /// 按配置创建 HTTP 客户端
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = JsonPlaceholderClient::new(config.client_options())
            .context("Failed to create API client")?;
        Self::with_source(Arc::new(client))
    }

    /// 使用任意数据源
    pub fn with_source(source: Arc<dyn DataSource>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("post-explorer-io")
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            service: ExplorerService::new(source),
            tx,
            rx,
        })
    }

    pub fn base_url(&self) -> &str {
        self.service.base_url()
    }

    /// 在后台执行一个请求
    pub fn execute(&self, effect: Effect) {
        let service = self.service.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let msg = match effect {
                Effect::LoadUsers(ticket) => FetchMessage::Users {
                    ticket,
                    result: service.load_users().await,
                },
                Effect::LoadPosts(ticket) => FetchMessage::Posts {
                    ticket,
                    result: service.load_posts().await,
                },
                Effect::LoadPost { ticket, id } => FetchMessage::Post {
                    ticket,
                    result: service.load_post(&id).await,
                },
            };
            // 接收端只在退出时关闭
            if tx.send(msg).is_err() {
                log::debug!("Result channel closed, dropping response");
            }
        });
    }

    pub fn execute_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.execute(effect);
        }
    }

    /// 取出一个已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<FetchMessage> {
        match self.rx.try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// 等待下一个结果（测试用）
    #[cfg(test)]
    async fn recv(&mut self) -> Option<FetchMessage> {
        self.rx.recv().await
    }
}
