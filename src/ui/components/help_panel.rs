//! 快捷键帮助面板

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 34;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let area = frame.area();
    let lines = build_help_lines(colors);

    let panel_height = (lines.len() as u16 + 2).min(area.height);
    let panel_width = PANEL_WIDTH.min(area.width);
    let x = area.width.saturating_sub(panel_width) / 2;
    let y = area.height.saturating_sub(panel_height) / 2;
    let panel_area = Rect::new(x, y, panel_width, panel_height);

    // 清除背景
    frame.render_widget(Clear, panel_area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    frame.render_widget(Paragraph::new(lines).block(block), panel_area);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        Line::from(""),
        section_header("Tasks", colors),
        key_line("a", "Add task", colors),
        key_line("e", "Edit task", colors),
        key_line("Space / Enter", "Toggle done", colors),
        key_line("x", "Delete task", colors),
        Line::from(""),
        section_header("Editing", colors),
        key_line("Enter", "Save draft", colors),
        key_line("Esc", "Cancel", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Theme", colors),
        key_line("?", "Toggle help", colors),
        key_line("q", "Quit", colors),
    ]
}

fn section_header(title: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(colors.title)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, desc: &'static str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("   {:<14}", key),
            Style::default().fg(colors.highlight),
        ),
        Span::styled(desc, Style::default().fg(colors.muted)),
    ])
}
