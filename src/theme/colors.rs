//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题（默认）
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(22, 24, 28),           // 深灰背景
        bg_secondary: Color::Rgb(44, 48, 56), // 选中行背景
        title: Color::Rgb(130, 200, 255),     // 天蓝色
        highlight: Color::Rgb(130, 200, 255), // 天蓝色
        text: Color::Rgb(225, 228, 232),
        muted: Color::Rgb(120, 126, 136),     // 灰色
        border: Color::Rgb(58, 62, 70),       // 深灰边框
        done: Color::Rgb(110, 200, 130),      // 绿色
        warning: Color::Rgb(255, 200, 90),    // 黄色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 248),           // 浅灰背景
        bg_secondary: Color::Rgb(228, 232, 238), // 选中行背景
        title: Color::Rgb(20, 90, 180),          // 深蓝色
        highlight: Color::Rgb(20, 90, 180),
        text: Color::Rgb(34, 38, 44), // 深灰文字
        muted: Color::Rgb(130, 136, 146),
        border: Color::Rgb(202, 206, 212),
        done: Color::Rgb(40, 140, 70),     // 绿色
        warning: Color::Rgb(190, 130, 20), // 橙黄色
    }
}
