//! 任务存储：内存任务列表 + 持久化同步

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TallyError;
use crate::storage::Storage;

/// 任务数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID（从 1 开始单调递增，删除后不复用）
    pub id: u64,
    /// 任务内容（用户输入原文）
    pub text: String,
    /// 创建时间（创建后不可变；槽位中的字段名为 "date"）
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    /// 是否已完成
    pub completed: bool,
}

/// 任务存储
///
/// 持有任务列表的唯一所有权，所有变更经由 add/edit/toggle/delete 进行，
/// 每次变更后全量序列化写入注入的 Storage 槽位。
///
/// 约定：无效输入（空白文本、未知 ID）一律静默忽略，不返回错误。
pub struct TaskStore {
    /// 任务列表（插入顺序，无重排操作）
    tasks: Vec<Task>,
    /// 下一个待分配的任务 ID（加载时按 max(id)+1 重算）
    next_id: u64,
    storage: Box<dyn Storage>,
    /// 启动时的加载诊断（槽位损坏回退空列表时记录一次）
    load_error: Option<String>,
    /// 最近一次持久化失败的诊断
    sync_error: Option<String>,
}

impl TaskStore {
    /// 从存储槽位加载任务列表
    ///
    /// 槽位不存在 → 空列表；内容损坏或不可读 → 回退空列表并记录诊断，
    /// 不中止启动。
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let (tasks, load_error) = match storage.load() {
            Ok(None) => (Vec::new(), None),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => (tasks, None),
                Err(e) => (
                    Vec::new(),
                    Some(format!("Saved tasks were corrupt, starting empty ({})", e)),
                ),
            },
            Err(e) => (
                Vec::new(),
                Some(format!("Could not read saved tasks, starting empty ({})", e)),
            ),
        };

        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Self {
            tasks,
            next_id,
            storage,
            load_error,
            sync_error: None,
        }
    }

    /// 添加任务（空白文本为 no-op）
    pub fn add(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        self.tasks.push(Task {
            id: self.next_id,
            text: text.to_string(),
            created_at: Utc::now(),
            completed: false,
        });
        self.next_id += 1;
        self.sync();
    }

    /// 修改任务文本（空白文本或未知 ID 为 no-op）
    ///
    /// 只替换 text，completed 与创建时间保持不变。
    pub fn edit(&mut self, id: u64, new_text: &str) {
        if new_text.trim().is_empty() {
            return;
        }
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.text = new_text.to_string();
            self.sync();
        }
    }

    /// 切换任务完成状态（未知 ID 为 no-op）
    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
            self.sync();
        }
    }

    /// 删除任务（未知 ID 为 no-op）
    pub fn delete(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.sync();
        }
    }

    /// 按插入顺序返回任务列表（只读视图）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 取出启动时的加载诊断（只返回一次）
    pub fn take_load_error(&mut self) -> Option<String> {
        self.load_error.take()
    }

    /// 取出最近一次持久化失败的诊断（只返回一次）
    pub fn take_sync_error(&mut self) -> Option<String> {
        self.sync_error.take()
    }

    /// 全量序列化任务列表并覆盖写入槽位
    ///
    /// 写入失败不中断 UI，只记录诊断供上层提示。
    fn sync(&mut self) {
        let result = serde_json::to_string(&self.tasks)
            .map_err(TallyError::from)
            .and_then(|data| self.storage.save(&data));
        if let Err(e) = result {
            self.sync_error = Some(format!("Failed to save tasks: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::storage::MemoryStorage;

    /// 写入必失败的槽位实现
    struct FailingStorage;

    impl Storage for FailingStorage {
        fn load(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&self, _data: &str) -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn empty_store() -> TaskStore {
        TaskStore::load(Box::new(MemoryStorage::default()))
    }

    #[test]
    fn test_add_assigns_unique_increasing_ids() {
        let mut store = empty_store();
        store.add("one");
        store.add("two");
        store.add("three");

        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.tasks().len(), 3);
    }

    #[test]
    fn test_add_blank_text_is_noop() {
        let mut store = empty_store();
        store.add("");
        store.add("   ");
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn test_new_task_defaults_to_not_completed() {
        let mut store = empty_store();
        store.add("task");
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_edit_replaces_text_only() {
        let mut store = empty_store();
        store.add("before");
        store.toggle(1);
        let created_at = store.tasks()[0].created_at;

        store.edit(1, "after");

        let task = &store.tasks()[0];
        assert_eq!(task.text, "after");
        assert!(task.completed);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn test_edit_blank_text_is_noop() {
        let mut store = empty_store();
        store.add("keep me");
        store.edit(1, "");
        store.edit(1, "  \t ");
        assert_eq!(store.tasks()[0].text, "keep me");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut store = empty_store();
        store.add("task");
        store.edit(42, "other");
        assert_eq!(store.tasks()[0].text, "task");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = empty_store();
        store.add("task");

        store.toggle(1);
        assert!(store.tasks()[0].completed);

        store.toggle(1);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = empty_store();
        store.add("task");
        store.toggle(42);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_delete_removes_and_id_is_never_reused() {
        let mut store = empty_store();
        store.add("one");
        store.add("two");

        store.delete(1);
        assert_eq!(store.tasks().len(), 1);

        // 删除后的 ID 不会被重新分配
        store.add("three");
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);

        // 引用已删除 ID 的操作全部为 no-op
        store.edit(1, "ghost");
        store.toggle(1);
        store.delete(1);
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn test_sequential_ids_despite_intervening_delete() {
        let mut store = empty_store();
        store.add("one");
        store.delete(1);
        store.add("two");
        store.add("three");

        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_every_mutation_syncs_to_slot() {
        let slot = MemoryStorage::default();
        let mut store = TaskStore::load(Box::new(slot.clone()));

        store.add("task");
        let after_add = slot.contents().unwrap();
        assert!(after_add.contains("task"));

        store.toggle(1);
        let after_toggle = slot.contents().unwrap();
        assert!(after_toggle.contains("true"));

        store.delete(1);
        assert_eq!(slot.contents().unwrap(), "[]");
    }

    #[test]
    fn test_slot_round_trip_reproduces_list() {
        let slot = MemoryStorage::default();
        let mut store = TaskStore::load(Box::new(slot.clone()));
        store.add("milk");
        store.add("eggs");
        store.toggle(2);

        let reloaded = TaskStore::load(Box::new(slot));
        assert_eq!(reloaded.tasks(), store.tasks());
    }

    #[test]
    fn test_load_recomputes_next_id_from_saved_tasks() {
        let slot = MemoryStorage::with_contents(
            r#"[{"id":7,"text":"saved","date":"2026-08-20T10:00:00Z","completed":false}]"#,
        );
        let mut store = TaskStore::load(Box::new(slot));

        store.add("fresh");
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn test_load_corrupt_slot_falls_back_to_empty() {
        let slot = MemoryStorage::with_contents("not json at all");
        let mut store = TaskStore::load(Box::new(slot));

        assert!(store.tasks().is_empty());
        assert!(store.take_load_error().is_some());
        // 诊断只取出一次
        assert!(store.take_load_error().is_none());
    }

    #[test]
    fn test_slot_layout_uses_date_field() {
        let slot = MemoryStorage::default();
        let mut store = TaskStore::load(Box::new(slot.clone()));
        store.add("task");

        let raw = slot.contents().unwrap();
        assert!(raw.contains("\"date\""));
        assert!(raw.contains("\"id\":1"));
        assert!(raw.contains("\"completed\":false"));
    }

    #[test]
    fn test_sync_failure_records_diagnostic_without_panic() {
        let mut store = TaskStore::load(Box::new(FailingStorage));
        store.add("task");

        // 内存状态照常更新，失败只作为诊断暴露
        assert_eq!(store.tasks().len(), 1);
        assert!(store.take_sync_error().is_some());
        assert!(store.take_sync_error().is_none());
    }

    #[test]
    fn test_full_lifecycle_scenario() {
        let mut store = empty_store();

        store.add("Buy milk");
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, 1);
        assert_eq!(store.tasks()[0].text, "Buy milk");
        assert!(!store.tasks()[0].completed);

        store.toggle(1);
        assert!(store.tasks()[0].completed);

        store.edit(1, "Buy oat milk");
        assert_eq!(store.tasks()[0].text, "Buy oat milk");
        assert!(store.tasks()[0].completed);

        store.delete(1);
        assert!(store.tasks().is_empty());
    }
}
