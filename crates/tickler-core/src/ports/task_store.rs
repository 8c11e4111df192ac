//! TaskStore port - タスク mapping（id -> task）の正本
//!
//! # 設計原則
//! - 読み書きは常にストア全体（load -> メモリ上で変更 -> save）
//! - インクリメンタル更新やトランザクションはない
//! - ロックしない: 同時実行は last writer wins（単一ユーザー前提で許容）
//!
//! # 実装
//! - `JsonFileStore`: 本番のストアファイル
//! - `InMemoryTaskStore`: テスト用

use crate::domain::{Result, TaskMap};

/// TaskStore loads and saves the complete task mapping.
pub trait TaskStore {
    /// Read the whole mapping. A store that was never written is empty.
    fn load(&self) -> Result<TaskMap>;

    /// Replace the persisted mapping with `tasks`.
    fn save(&self, tasks: &TaskMap) -> Result<()>;
}

impl<S: TaskStore + ?Sized> TaskStore for &S {
    fn load(&self) -> Result<TaskMap> {
        (**self).load()
    }

    fn save(&self, tasks: &TaskMap) -> Result<()> {
        (**self).save(tasks)
    }
}
