//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `landing.*`, `users.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 首页文本
    pub landing: LandingTexts,
    /// 用户列表文本
    pub users: UsersTexts,
    /// 文章列表文本
    pub posts: PostsTexts,
    /// 文章详情文本
    pub post_detail: PostDetailTexts,
    /// 404 页面文本
    pub not_found: NotFoundTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub try_again: &'static str,
    pub back: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str,
    pub arrows_ud: &'static str,
    pub brackets: &'static str,
    pub retry: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub open: &'static str,
    pub select: &'static str,
    pub toggle_search: &'static str,
    pub submit: &'static str,
    pub prev_next: &'static str,
    pub retry: &'static str,
    pub refresh: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub users: &'static str,
    pub posts: &'static str,
}

// ============================================================================
// 页面
// ============================================================================

/// 首页功能卡片
pub struct FeatureCardTexts {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub button: &'static str,
}

pub struct LandingTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub users_card: FeatureCardTexts,
    pub posts_card: FeatureCardTexts,
    pub key_features_title: &'static str,
    /// (标题, 说明)
    pub key_features: &'static [(&'static str, &'static str)],
    pub cta_title: &'static str,
    pub cta_text: &'static str,
}

pub struct UsersTexts {
    pub search_label: &'static str,
    pub search_placeholder: &'static str,
    pub keyboard_hint: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub error_title: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
}

pub struct PostsTexts {
    pub search_label: &'static str,
    pub search_placeholder: &'static str,
    pub keyboard_hint: &'static str,
    pub author: &'static str,
    pub error_title: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
}

pub struct PostDetailTexts {
    pub title: &'static str,
    pub search_label: &'static str,
    pub search_placeholder: &'static str,
    pub search_hint: &'static str,
    pub author: &'static str,
    pub error_title: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
}

pub struct NotFoundTexts {
    pub title: &'static str,
    pub hint: &'static str,
    pub link: &'static str,
}

// ============================================================================
// 状态栏 / 帮助
// ============================================================================

pub struct StatusTexts {
    pub refreshing: &'static str,
    pub nothing_to_refresh: &'static str,
    pub no_back_history: &'static str,
    pub no_forward_history: &'static str,
    pub first_post: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub entries: &'static [(&'static str, &'static str)],
    pub close_hint: &'static str,
}
