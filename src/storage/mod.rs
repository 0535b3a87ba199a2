//! 持久化层：数据目录与任务槽位读写

pub mod config;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// 任务槽位文件名
const SLOT_FILE: &str = "todo.json";

/// 获取 ~/.tally/ 目录路径
pub fn tally_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".tally")
}

/// 持久化槽位抽象：读写一段序列化后的字符串
///
/// TaskStore 只通过该接口接触外部存储，测试时注入内存实现即可。
pub trait Storage {
    /// 读取槽位内容；槽位不存在时返回 `Ok(None)`
    fn load(&self) -> Result<Option<String>>;

    /// 覆盖写入槽位内容
    fn save(&self, data: &str) -> Result<()>;
}

/// 基于 JSON 文件的槽位实现：{data_dir}/todo.json
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SLOT_FILE),
        }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn save(&self, data: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// 内存槽位实现（测试用）
///
/// Clone 共享同一槽位，便于测试侧注入后继续观察写入内容。
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryStorage {
    slot: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    /// 预填充槽位内容
    pub fn with_contents(data: &str) -> Self {
        let storage = Self::default();
        *storage.slot.borrow_mut() = Some(data.to_string());
        storage
    }

    /// 槽位当前内容
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, data: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(data.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_slot_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_data_dir_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let storage = JsonFileStorage::new(&nested);

        storage.save("[]").unwrap();

        assert!(nested.join("todo.json").exists());
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.save("first").unwrap();
        storage.save("second").unwrap();

        assert_eq!(storage.load().unwrap().as_deref(), Some("second"));
    }
}
