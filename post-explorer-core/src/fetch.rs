//! Fetch Coordinator
//!
//! 每个页面挂载时持有一个 [`FetchCoordinator`]，负责一次远程读取的生命周期：
//!
//! ```text
//!   Idle ──begin()──▶ Loading ──resolve(Ok)──▶ Success(T)
//!                        │
//!                        └────resolve(Err)──▶ Failure(message)
//!
//!   任何状态都可以再次 begin() 回到 Loading，没有终止状态。
//! ```
//!
//! `begin()` 同步地切换到 `Loading` 并返回 [`FetchTicket`]；请求完成后带着同一张
//! 票据调用 `resolve()`。票据中的 `mount` 用于丢弃已卸载页面的结果，
//! `seq` 用于（可选的）过期响应保护。

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::FetchResult;

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

/// 页面挂载标识，每次挂载唯一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    /// 分配一个新的挂载标识
    pub fn next() -> Self {
        Self(NEXT_MOUNT.fetch_add(1, Ordering::Relaxed))
    }
}

/// 一次加载的生命周期状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// 状态标签（日志用）
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success(_) => "success",
            Self::Failure(_) => "failure",
        }
    }
}

/// 重叠请求的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RacePolicy {
    /// 最后到达的响应生效（不论它是否是最后发出的请求）
    #[default]
    LastResponseWins,
    /// 只接受最后发出的请求的响应，更早的响应被丢弃
    LatestRequestWins,
}

impl RacePolicy {
    pub fn from_discard_stale(discard_stale_responses: bool) -> Self {
        if discard_stale_responses {
            Self::LatestRequestWins
        } else {
            Self::LastResponseWins
        }
    }
}

/// 一次 `begin()` 的凭据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub mount: MountId,
    pub seq: u64,
}

/// `resolve()` 的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// 结果已写入状态
    Applied,
    /// 有更新的请求已发出，按策略丢弃
    Stale,
    /// 票据属于已卸载的页面，静默丢弃
    Unmounted,
}

/// 单个页面的加载协调器
#[derive(Debug)]
pub struct FetchCoordinator<T> {
    mount: MountId,
    policy: RacePolicy,
    state: FetchState<T>,
    issued: u64,
    in_flight: usize,
}

impl<T> FetchCoordinator<T> {
    /// 以新的挂载标识创建，初始状态为 `Idle`
    pub fn new(policy: RacePolicy) -> Self {
        Self {
            mount: MountId::next(),
            policy,
            state: FetchState::Idle,
            issued: 0,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn mount(&self) -> MountId {
        self.mount
    }

    /// 尚未返回的请求数
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// 开始一次加载：立即进入 `Loading`
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.in_flight += 1;
        self.state = FetchState::Loading;
        FetchTicket {
            mount: self.mount,
            seq: self.issued,
        }
    }

    /// 写入请求结果
    pub fn resolve(&mut self, ticket: FetchTicket, result: FetchResult<T>) -> ResolveOutcome {
        if ticket.mount != self.mount {
            log::debug!("Dropping result for unmounted screen (seq {})", ticket.seq);
            return ResolveOutcome::Unmounted;
        }

        self.in_flight = self.in_flight.saturating_sub(1);

        if self.policy == RacePolicy::LatestRequestWins && ticket.seq < self.issued {
            log::debug!(
                "Discarding stale response (seq {} < latest {})",
                ticket.seq,
                self.issued
            );
            return ResolveOutcome::Stale;
        }

        self.state = match result {
            Ok(data) => FetchState::Success(data),
            Err(err) => FetchState::Failure(err.message().to_string()),
        };
        ResolveOutcome::Applied
    }
}
