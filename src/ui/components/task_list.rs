//! 任务列表组件

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::EditMode;
use crate::store::Task;
use crate::theme::ThemeColors;

/// 渲染任务列表
///
/// 处于编辑状态的行渲染草稿文本和光标，其余行渲染
/// 完成标记 + 文本 + 创建时间。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    list_state: &mut ListState,
    edit: &EditMode,
    colors: &ThemeColors,
) {
    let editing = match edit {
        EditMode::Editing { id, draft } => Some((*id, draft.as_str())),
        EditMode::Idle => None,
    };

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| ListItem::new(task_line(task, editing, colors)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors.bg_secondary));

    frame.render_stateful_widget(list, area, list_state);
}

/// 单行任务渲染
fn task_line<'a>(
    task: &'a Task,
    editing: Option<(u64, &'a str)>,
    colors: &ThemeColors,
) -> Line<'a> {
    // 编辑中的行：草稿 + 光标
    if let Some((id, draft)) = editing {
        if id == task.id {
            return Line::from(vec![
                Span::styled("❯ ", Style::default().fg(colors.highlight)),
                Span::styled(draft, Style::default().fg(colors.text)),
                Span::styled("█", Style::default().fg(colors.highlight)), // 光标
            ]);
        }
    }

    let (check, check_style, text_style) = if task.completed {
        (
            "✓ ",
            Style::default().fg(colors.done),
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (
            "○ ",
            Style::default().fg(colors.muted),
            Style::default().fg(colors.text),
        )
    };

    let timestamp = task
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");

    Line::from(vec![
        Span::styled(check, check_style),
        Span::styled(task.text.as_str(), text_style),
        Span::styled(
            format!("  {}", timestamp),
            Style::default().fg(colors.muted),
        ),
    ])
}
