//! 顶部标题栏

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::store::Task;
use crate::theme::{Theme, ThemeColors};

/// 渲染标题栏：左侧标题，右侧任务统计与当前主题
pub fn render(frame: &mut Frame, area: Rect, tasks: &[Task], theme: Theme, colors: &ThemeColors) {
    let title = Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "TALLY",
            Style::default()
                .fg(colors.title)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(title, area);

    let open = tasks.iter().filter(|t| !t.completed).count();
    let done = tasks.len() - open;

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} open · {} done", open, done),
            Style::default().fg(colors.muted),
        ),
        Span::styled(
            format!("  [{}]", theme.label()),
            Style::default().fg(colors.muted),
        ),
        Span::raw("  "),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(status, area);
}
