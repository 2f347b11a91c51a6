//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 默认为 0 (Dark)，相应地，1 为 Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    let index = match theme {
        Theme::Dark => 0,
        Theme::Light => 1,
    };
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 底部消息
    pub footer: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 255),
            highlight: Color::Rgb(0, 122, 255),
            selected_bg: Color::Rgb(0, 122, 255),
            selected_fg: Color::White,
            footer: Color::Rgb(17, 255, 0),
            error: Color::Rgb(255, 0, 0),
            muted: Color::Rgb(160, 160, 160),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            footer: Color::Rgb(34, 134, 58),
            error: Color::Rgb(215, 58, 73),
            muted: Color::Rgb(110, 110, 110),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default()
            .fg(colors().fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题栏样式
    pub fn title_bar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 底部消息样式
    pub fn footer() -> Style {
        Style::default().fg(colors().footer)
    }

    /// 帮助栏样式
    pub fn help() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 次要说明样式
    pub fn subtext() -> Style {
        Style::default()
            .fg(colors().muted)
            .add_modifier(Modifier::DIM)
    }

    /// 删除确认提示样式
    pub fn danger() -> Style {
        Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD)
    }
}
