//! 对话框状态
//!
//! 每个面板只有一个对话框槽位：
//!
//! ```text
//! Idle → Adding → Idle
//! Idle → Editing(record) → Idle
//! ```
//!
//! 再次打开会替换当前对话框；提交失败时保持打开。

use serde::{Deserialize, Serialize};

/// Dialog slot of one panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "record", rename_all = "snake_case")]
pub enum DialogState<T> {
    Idle,
    Adding,
    Editing(T),
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> DialogState<T> {
    pub fn open_add(&mut self) {
        *self = Self::Adding;
    }

    pub fn open_edit(&mut self, record: T) {
        *self = Self::Editing(record);
    }

    pub fn close(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, Self::Adding)
    }

    /// Record being edited, if the edit dialog is open
    pub fn editing(&self) -> Option<&T> {
        match self {
            Self::Editing(record) => Some(record),
            _ => None,
        }
    }

    pub fn editing_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Editing(record) => Some(record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let dialog: DialogState<u32> = DialogState::default();
        assert!(!dialog.is_open());
        assert_eq!(dialog.editing(), None);
    }

    #[test]
    fn test_add_then_close() {
        let mut dialog: DialogState<u32> = DialogState::default();
        dialog.open_add();
        assert!(dialog.is_open());
        assert!(dialog.is_adding());
        dialog.close();
        assert_eq!(dialog, DialogState::Idle);
    }

    #[test]
    fn test_open_replaces_current_dialog() {
        let mut dialog = DialogState::default();
        dialog.open_add();
        dialog.open_edit(7);
        assert_eq!(dialog.editing(), Some(&7));
        dialog.open_edit(8);
        assert_eq!(dialog.editing(), Some(&8));
        dialog.open_add();
        assert_eq!(dialog.editing(), None);
        assert!(dialog.is_adding());
    }

    #[test]
    fn test_editing_mut_changes_record() {
        let mut dialog = DialogState::default();
        dialog.open_edit(String::from("draft"));
        if let Some(record) = dialog.editing_mut() {
            record.push_str(" v2");
        }
        assert_eq!(dialog.editing().map(String::as_str), Some("draft v2"));
    }

    #[test]
    fn test_serde_shape() {
        let dialog = DialogState::Editing(3);
        let json = serde_json::to_value(&dialog).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "editing", "record": 3 }));

        let idle: DialogState<u32> = DialogState::Idle;
        let json = serde_json::to_value(&idle).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "idle" }));
    }
}
