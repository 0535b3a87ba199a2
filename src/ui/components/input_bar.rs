//! 新任务输入栏

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染新任务输入栏
///
/// 获得焦点时高亮边框并显示光标，否则显示占位提示。
pub fn render(frame: &mut Frame, area: Rect, input: &str, active: bool, colors: &ThemeColors) {
    let border_color = if active {
        colors.highlight
    } else {
        colors.border
    };

    let block = Block::default()
        .title(" New Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let line = if active {
        Line::from(vec![
            Span::styled(input, Style::default().fg(colors.text)),
            Span::styled("█", Style::default().fg(colors.highlight)), // 光标
        ])
    } else {
        Line::from(Span::styled(
            "Press a to add a task",
            Style::default().fg(colors.muted),
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
