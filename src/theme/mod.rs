mod colors;

use ratatui::style::Color;

pub use colors::*;

use crate::model::ThemePreference;

/// 主题颜色方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// 标题颜色
    pub title: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务
    pub done: Color,
    /// 待办任务的复选框
    pub pending: Color,
    /// Tab 选中前景色
    pub tab_active_fg: Color,
    /// Tab 选中背景色
    pub tab_active_bg: Color,
    /// 错误色 (红色) - 用于删除按钮和写入失败提示
    pub error: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: ThemePreference) -> ThemeColors {
    match theme {
        ThemePreference::Light => light_colors(),
        ThemePreference::Dark => dark_colors(),
    }
}

/// 主题切换按钮图标
pub fn toggle_icon(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Light => "🌙",
        ThemePreference::Dark => "☀️",
    }
}
