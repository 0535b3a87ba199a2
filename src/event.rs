//! 键盘事件分发

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理覆盖层

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // 新任务输入栏
    if app.input_active {
        handle_input_key(app, key);
        return;
    }

    // 行内编辑
    if app.is_editing() {
        handle_edit_key(app, key);
        return;
    }

    handle_normal_key(app, key);
}

/// 列表模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 添加任务（聚焦输入栏）
        KeyCode::Char('a') => {
            app.enter_input();
        }

        // 编辑选中任务
        KeyCode::Char('e') => {
            app.start_edit();
        }

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // 删除选中任务
        KeyCode::Char('x') => {
            app.delete_selected();
        }

        // 主题选择器
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.open_theme_selector();
        }

        // 帮助
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// 输入栏获得焦点时的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交（空白输入为 no-op，焦点保留）
        KeyCode::Enter => {
            app.submit_input();
        }

        // 取消
        KeyCode::Esc => {
            app.cancel_input();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.input_backspace();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.input_char(c);
        }

        _ => {}
    }
}

/// 行内编辑时的键盘事件
fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 保存草稿
        KeyCode::Enter => {
            app.save_edit();
        }

        // 放弃草稿
        KeyCode::Esc => {
            app.cancel_edit();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.edit_backspace();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.edit_char(c);
        }

        _ => {}
    }
}

/// 主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_theme_selector();
        }

        _ => {}
    }
}

/// 帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
        }
        _ => {}
    }
}
