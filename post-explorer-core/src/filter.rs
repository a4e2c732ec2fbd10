//! Filter/Search Engine
//!
//! 纯函数、同步、无防抖：每次按键都对已加载的内存集合重新计算。

use post_explorer_provider::{Post, User};

/// 可被搜索框过滤的条目
pub trait Searchable {
    /// 条目 ID（选中后用于导航）
    fn id(&self) -> u64;

    /// 参与匹配的字段
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for User {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

impl Searchable for Post {
    fn id(&self) -> u64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

/// 返回任一字段（忽略大小写）包含 `query` 的条目，保持原有顺序
///
/// 空查询匹配全部条目。
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
