//! 主界面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    empty_state, footer, header, help_panel, input_bar, task_list, theme_selector, toast,
};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    // 布局：标题 + 输入栏 + 任务列表 + Footer
    let [header_area, input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    header::render(frame, header_area, app.store.tasks(), app.theme, &colors);
    input_bar::render(frame, input_area, &app.input, app.input_active, &colors);

    // 任务列表或空状态
    if app.store.tasks().is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            app.store.tasks(),
            &mut app.list_state,
            &app.edit,
            &colors,
        );
    }

    footer::render(
        frame,
        footer_area,
        !app.store.tasks().is_empty(),
        app.input_active,
        app.is_editing(),
        &colors,
    );

    // 渲染 Toast
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染主题选择器
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, &colors);
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, &colors);
    }
}
