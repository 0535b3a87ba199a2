//! 空列表占位

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// ASCII Art Logo
const LOGO: &[&str] = &[
    "████████╗ █████╗ ██╗     ██╗  ██╗   ██╗",
    "╚══██╔══╝██╔══██╗██║     ██║  ╚██╗ ██╔╝",
    "   ██║   ███████║██║     ██║   ╚████╔╝ ",
    "   ██║   ██╔══██║██║     ██║    ╚██╔╝  ",
    "   ██║   ██║  ██║███████╗███████╗██║   ",
    "   ╚═╝   ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝   ",
];

/// 渲染空状态（Logo + 提示文字）
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let logo_height = LOGO.len() as u16;
    let hint_height = 1u16;
    let total_height = logo_height + 2 + hint_height;

    // 空间不足时只显示提示
    if inner_area.height < total_height {
        let y_offset = inner_area.height.saturating_sub(1) / 2;
        let hint_area = Rect::new(inner_area.x, inner_area.y + y_offset, inner_area.width, 1);
        frame.render_widget(hint_line(colors).alignment(Alignment::Center), hint_area);
        return;
    }

    let vertical_padding = (inner_area.height - total_height) / 2;
    let [_, logo_area, _, hint_area, _] = Layout::vertical([
        Constraint::Length(vertical_padding),
        Constraint::Length(logo_height),
        Constraint::Length(2),
        Constraint::Length(hint_height),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    let logo_lines: Vec<Line> = LOGO
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.title))))
        .collect();
    frame.render_widget(
        Paragraph::new(logo_lines).alignment(Alignment::Center),
        logo_area,
    );

    frame.render_widget(hint_line(colors).alignment(Alignment::Center), hint_area);
}

fn hint_line(colors: &ThemeColors) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("No tasks yet. Press ", Style::default().fg(colors.muted)),
        Span::styled(
            " a ",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" to add your first one.", Style::default().fg(colors.muted)),
    ]))
}
