//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, FeatureCardTexts, HelpTexts, HintTexts, KeyNames, LandingTexts,
    NavTexts, NotFoundTexts, PostDetailTexts, PostsTexts, StatusTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "User & Post Explorer",
        loading: "Loading...",
        try_again: "Try Again",
        back: "Back",
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
            switch_panel: "Switch Panels",
            navigate: "Navigate",
            open: "Open",
            select: "Select",
            toggle_search: "Search/List",
            submit: "Search",
            prev_next: "Prev/Next",
            retry: "Retry",
            refresh: "Refresh",
            back: "Back",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Explorer",
        home: "Home",
        users: "Users",
        posts: "Posts",
    },

    // ========================================================================
    // 首页
    // ========================================================================
    landing: LandingTexts {
        title: "User & Post Explorer",
        subtitle: "Browse users and their posts with real-time search and keyboard navigation",
        users_card: FeatureCardTexts {
            icon: "@",
            title: "User Management",
            description: "Browse users with names, emails, phone numbers and websites.",
            features: &[
                "Real-time search by name or email",
                "Keyboard navigation with arrow keys",
                "Loading states and error handling",
            ],
            button: "Explore Users →",
        },
        posts_card: FeatureCardTexts {
            icon: "#",
            title: "Post Explorer",
            description: "Read posts in full, search by post ID and step between posts.",
            features: &[
                "Search posts by ID",
                "Previous/Next post navigation",
                "Keyboard shortcuts support",
            ],
            button: "Start Exploring →",
        },
        key_features_title: "Key Features",
        key_features: &[
            ("User Search", "Type to filter users by name or email in real-time"),
            ("Keyboard Navigation", "Use arrow keys to navigate and Enter to select"),
            ("Post Browsing", "Search posts by ID and navigate between them"),
        ],
        cta_title: "Ready to Explore?",
        cta_text: "Select a card and press Enter to get started",
    },

    // ========================================================================
    // 列表页
    // ========================================================================
    users: UsersTexts {
        search_label: "Search Users",
        search_placeholder: "Search by name or email...",
        keyboard_hint: "Use ↑ ↓ to navigate, Enter to select",
        email: "Email:",
        phone: "Phone:",
        website: "Website:",
        error_title: "Error Loading Users",
        empty_title: "No Users Found",
        empty_hint: "Try adjusting your search terms.",
    },

    posts: PostsTexts {
        search_label: "Search Posts",
        search_placeholder: "Search by title...",
        keyboard_hint: "Use ↑ ↓ to navigate, Enter to select",
        author: "User",
        error_title: "Error Loading Posts",
        empty_title: "No Posts Found",
        empty_hint: "Try adjusting your search terms.",
    },

    // ========================================================================
    // 文章详情
    // ========================================================================
    post_detail: PostDetailTexts {
        title: "Post",
        search_label: "Search by Post ID",
        search_placeholder: "Enter post ID",
        search_hint: "Press Enter to search",
        author: "Author: user",
        error_title: "Error Loading Post",
        previous: "← Previous Post",
        next: "Next Post →",
    },

    not_found: NotFoundTexts {
        title: "Page Not Found",
        hint: "Nothing lives at this path.",
        link: "Press Enter to go back to the home page",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        refreshing: "Refreshing...",
        nothing_to_refresh: "Nothing to refresh on this page",
        no_back_history: "No earlier page",
        no_forward_history: "No later page",
        first_post: "Already at the first post",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Keyboard Shortcuts",
        entries: &[
            ("←/→", "Switch between sidebar and content"),
            ("↑/↓", "Move selection"),
            ("Enter/Space", "Open the selected item"),
            ("Tab", "Switch between search box and list"),
            ("[ / ]", "Previous / next post"),
            ("r", "Retry after an error"),
            ("Alt+r", "Reload the current page"),
            ("Esc, Alt+←", "Back"),
            ("Alt+→", "Forward"),
            ("?", "Show this help"),
            ("q, Alt+q, Ctrl+c", "Quit"),
        ],
        close_hint: "Press Esc or Enter to close",
    },
};
