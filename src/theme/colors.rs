//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 浅色主题（默认）
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        title: Color::Rgb(52, 73, 94),           // 深蓝灰
        highlight: Color::Rgb(41, 128, 185),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(39, 174, 96),
        pending: Color::Rgb(200, 120, 0),
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(41, 128, 185),
        error: Color::Rgb(200, 50, 50), // 红色
    }
}

/// 深色主题
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        title: Color::Rgb(236, 240, 241),
        highlight: Color::Rgb(100, 181, 246), // 蓝色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        done: Color::Rgb(0, 255, 136),    // 绿色
        pending: Color::Rgb(255, 213, 79),
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(100, 181, 246),
        error: Color::Rgb(255, 85, 85), // 红色
    }
}
