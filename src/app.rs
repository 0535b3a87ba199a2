//! 应用状态

use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::storage::{config, JsonFileStorage};
use crate::store::TaskStore;
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Auto 模式下系统主题的重检间隔
const THEME_CHECK_INTERVAL: Duration = Duration::from_secs(5);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 编辑状态机：同一时刻最多一个任务处于编辑中
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    /// 无任务在编辑
    Idle,
    /// 正在编辑 id 对应的任务，draft 为未提交的草稿文本
    Editing { id: u64, draft: String },
}

/// 应用状态
pub struct App {
    /// 任务存储
    pub store: TaskStore,
    /// 新任务输入缓冲
    pub input: String,
    /// 输入栏是否获得焦点
    pub input_active: bool,
    /// 编辑状态
    pub edit: EditMode,
    /// 任务列表选择状态
    pub list_state: ListState,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 主题选择器是否打开
    pub show_theme_selector: bool,
    /// 主题选择器选中索引
    pub theme_selector_index: usize,
    /// 帮助面板是否打开
    pub show_help: bool,
    /// Toast 消息
    pub toast: Option<Toast>,
    /// 退出标记
    pub should_quit: bool,
    /// 数据目录（todo.json 与 config.toml 所在）
    data_dir: PathBuf,
    /// Auto 模式下最近一次解析出的系统深色标记
    system_is_dark: bool,
    /// 上次系统主题检测时间
    last_theme_check: Instant,
}

impl App {
    /// 创建应用：从数据目录加载任务与配置
    pub fn new(data_dir: PathBuf) -> Self {
        let store = TaskStore::load(Box::new(JsonFileStorage::new(&data_dir)));
        Self::with_store(store, data_dir)
    }

    /// 以现成的 TaskStore 创建应用（测试注入用）
    pub fn with_store(mut store: TaskStore, data_dir: PathBuf) -> Self {
        let config = config::load_config(&data_dir);
        let theme = Theme::from_name(&config.theme.name);
        let colors = get_theme_colors(theme);

        let mut list_state = ListState::default();
        if !store.tasks().is_empty() {
            list_state.select(Some(0));
        }

        // 加载诊断（槽位损坏等）作为一次性 Toast 上浮
        let toast = store
            .take_load_error()
            .map(|msg| Toast::new(msg, TOAST_DURATION));

        Self {
            store,
            input: String::new(),
            input_active: false,
            edit: EditMode::Idle,
            list_state,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            show_help: false,
            toast,
            should_quit: false,
            data_dir,
            system_is_dark: detect_system_theme(),
            last_theme_check: Instant::now(),
        }
    }

    // ─── 列表导航 ───

    /// 选中下一项（循环）
    pub fn select_next(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// 当前选中任务的 ID
    pub fn selected_task_id(&self) -> Option<u64> {
        self.list_state
            .selected()
            .and_then(|i| self.store.tasks().get(i))
            .map(|t| t.id)
    }

    /// 确保选中项落在合法区间
    fn ensure_selection(&mut self) {
        let len = self.store.tasks().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// 变更后的统一收尾：持久化失败提示 + 选中项修正
    fn after_mutation(&mut self) {
        if let Some(msg) = self.store.take_sync_error() {
            self.show_toast(msg);
        }
        self.ensure_selection();
    }

    // ─── 新任务输入栏 ───

    /// 聚焦输入栏
    pub fn enter_input(&mut self) {
        self.input_active = true;
    }

    /// 取消输入并清空缓冲
    pub fn cancel_input(&mut self) {
        self.input_active = false;
        self.input.clear();
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// 提交新任务
    ///
    /// 空白输入是 no-op（保持输入焦点）；提交后清空缓冲、回到列表
    /// 并选中新任务。
    pub fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.store.add(&self.input);
        self.input.clear();
        self.input_active = false;
        self.list_state.select(Some(self.store.tasks().len() - 1));
        self.after_mutation();
    }

    // ─── 编辑状态机 ───

    /// 是否处于编辑状态
    pub fn is_editing(&self) -> bool {
        matches!(self.edit, EditMode::Editing { .. })
    }

    /// 对选中任务进入编辑状态，草稿初始化为当前文本
    ///
    /// 已有编辑进行中时直接切换目标，旧草稿丢弃（不自动保存）。
    pub fn start_edit(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        let Some(task) = self.store.tasks().iter().find(|t| t.id == id) else {
            return;
        };
        self.edit = EditMode::Editing {
            id,
            draft: task.text.clone(),
        };
    }

    pub fn edit_char(&mut self, c: char) {
        if let EditMode::Editing { draft, .. } = &mut self.edit {
            draft.push(c);
        }
    }

    pub fn edit_backspace(&mut self) {
        if let EditMode::Editing { draft, .. } = &mut self.edit {
            draft.pop();
        }
    }

    /// 保存草稿并退出编辑
    ///
    /// 空白草稿由存储层按 no-op 处理（文本不变），编辑状态一律退出。
    pub fn save_edit(&mut self) {
        if let EditMode::Editing { id, draft } = std::mem::replace(&mut self.edit, EditMode::Idle)
        {
            self.store.edit(id, &draft);
            self.after_mutation();
        }
    }

    /// 放弃草稿并退出编辑
    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::Idle;
    }

    // ─── 任务操作 ───

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.store.toggle(id);
            self.after_mutation();
        }
    }

    /// 删除选中任务
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        // 删除目标若正被编辑，草稿一并丢弃
        if matches!(self.edit, EditMode::Editing { id: eid, .. } if eid == id) {
            self.edit = EditMode::Idle;
        }
        self.store.delete(id);
        self.after_mutation();
    }

    // ─── 主题 ───

    /// 打开主题选择器（定位到当前主题）
    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + len - 1) % len;
    }

    pub fn theme_selector_next(&mut self) {
        self.theme_selector_index = (self.theme_selector_index + 1) % Theme::all().len();
    }

    /// 应用选中主题并关闭选择器
    pub fn theme_selector_confirm(&mut self) {
        let theme = Theme::all()[self.theme_selector_index];
        self.apply_theme(theme);
        self.show_theme_selector = false;
    }

    /// 切换主题并写入配置
    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);

        let mut config = config::load_config(&self.data_dir);
        config.theme.name = theme.label().to_string();
        let _ = config::save_config(&self.data_dir, &config);
    }

    /// Auto 模式下定期跟随系统主题变化
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }
        if self.last_theme_check.elapsed() < THEME_CHECK_INTERVAL {
            return;
        }
        self.last_theme_check = Instant::now();

        let is_dark = detect_system_theme();
        if is_dark != self.system_is_dark {
            self.system_is_dark = is_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ─── 杂项 ───

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 清理过期 Toast
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
