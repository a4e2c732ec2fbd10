//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, FeatureCardTexts, HelpTexts, HintTexts, KeyNames, LandingTexts,
    NavTexts, NotFoundTexts, PostDetailTexts, PostsTexts, StatusTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "用户与文章浏览器",
        loading: "加载中...",
        try_again: "重试",
        back: "返回",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
            brackets: "[ ]",
            retry: "r",
            refresh: "Alt+r",
            help: "?",
            quit: "q",
        },
        actions: ActionTexts {
            switch_panel: "切换面板",
            navigate: "导航",
            open: "打开",
            select: "选择",
            toggle_search: "搜索/列表",
            submit: "搜索",
            prev_next: "上一篇/下一篇",
            retry: "重试",
            refresh: "刷新",
            back: "返回",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "浏览",
        home: "主页",
        users: "用户",
        posts: "文章",
    },

    // ========================================================================
    // 首页
    // ========================================================================
    landing: LandingTexts {
        title: "用户与文章浏览器",
        subtitle: "实时搜索、键盘导航，浏览用户及其文章",
        users_card: FeatureCardTexts {
            icon: "@",
            title: "用户管理",
            description: "浏览用户的姓名、邮箱、电话与网站。",
            features: &["按姓名或邮箱实时搜索", "方向键导航", "加载状态与错误处理"],
            button: "浏览用户 →",
        },
        posts_card: FeatureCardTexts {
            icon: "#",
            title: "文章浏览",
            description: "阅读完整文章，按 ID 搜索并在文章间切换。",
            features: &["按 ID 搜索文章", "上一篇 / 下一篇", "快捷键支持"],
            button: "开始浏览 →",
        },
        key_features_title: "主要功能",
        key_features: &[
            ("用户搜索", "输入即可按姓名或邮箱过滤用户"),
            ("键盘导航", "方向键移动，Enter 选择"),
            ("文章浏览", "按 ID 搜索文章并前后切换"),
        ],
        cta_title: "准备好了吗？",
        cta_text: "选择一张卡片并按 Enter 开始",
    },

    // ========================================================================
    // 列表页
    // ========================================================================
    users: UsersTexts {
        search_label: "搜索用户",
        search_placeholder: "按姓名或邮箱搜索...",
        keyboard_hint: "↑ ↓ 移动，Enter 选择",
        email: "邮箱:",
        phone: "电话:",
        website: "网站:",
        error_title: "用户加载失败",
        empty_title: "未找到用户",
        empty_hint: "请尝试调整搜索词。",
    },

    posts: PostsTexts {
        search_label: "搜索文章",
        search_placeholder: "按标题搜索...",
        keyboard_hint: "↑ ↓ 移动，Enter 选择",
        author: "用户",
        error_title: "文章加载失败",
        empty_title: "未找到文章",
        empty_hint: "请尝试调整搜索词。",
    },

    // ========================================================================
    // 文章详情
    // ========================================================================
    post_detail: PostDetailTexts {
        title: "文章",
        search_label: "按文章 ID 搜索",
        search_placeholder: "输入文章 ID",
        search_hint: "按 Enter 搜索",
        author: "作者: 用户",
        error_title: "文章加载失败",
        previous: "← 上一篇",
        next: "下一篇 →",
    },

    not_found: NotFoundTexts {
        title: "页面不存在",
        hint: "该路径下没有内容。",
        link: "按 Enter 返回主页",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        refreshing: "刷新中...",
        nothing_to_refresh: "当前页面无需刷新",
        no_back_history: "没有更早的页面",
        no_forward_history: "没有更后的页面",
        first_post: "已经是第一篇",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "快捷键",
        entries: &[
            ("←/→", "在侧边栏与内容之间切换"),
            ("↑/↓", "移动选中项"),
            ("Enter/Space", "打开选中项"),
            ("Tab", "在搜索框与列表之间切换"),
            ("[ / ]", "上一篇 / 下一篇"),
            ("r", "出错后重试"),
            ("Alt+r", "重新加载当前页面"),
            ("Esc, Alt+←", "后退"),
            ("Alt+→", "前进"),
            ("?", "显示帮助"),
            ("q, Alt+q, Ctrl+c", "退出"),
        ],
        close_hint: "按 Esc 或 Enter 关闭",
    },
};
