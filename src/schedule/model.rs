use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dirty::{ItemId, Snapshot};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Song,
    Bible,
    Media,
    Note,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Song => "song",
            Self::Bible => "bible",
            Self::Media => "media",
            Self::Note => "note",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default)]
    pub slides: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<ScheduleItem>,
}

impl Schedule {
    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to read schedule: {}", path.display()),
            )
        })?;
        serde_json::from_str(&raw).map_err(|source| {
            AppError::schedule(format!(
                "failed to parse schedule {}: {source}",
                path.display()
            ))
        })
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(self)
            .map_err(|source| AppError::schedule(format!("failed to encode schedule: {source}")))?;
        fs::write(path, raw).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to write schedule: {}", path.display()),
            )
        })
    }

    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

impl Snapshot for Schedule {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn item_ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::dirty::ItemId;

    use super::{ItemKind, Schedule};

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("cued_schedule_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_accepts_minimal_items() {
        let path = unique_temp_path("minimal.json");
        fs::write(
            &path,
            r#"{
                "title": "Sunday",
                "items": [
                    { "id": 1, "title": "Amazing Grace", "slides": ["v1", "v2"] },
                    { "id": "john-3", "title": "John 3:16", "kind": "bible" }
                ]
            }"#,
        )
        .expect("schedule file should be written");

        let schedule = Schedule::load_from_path(&path).expect("schedule should parse");
        assert_eq!(schedule.title, "Sunday");
        assert_eq!(schedule.description, None);
        assert_eq!(schedule.items.len(), 2);
        assert_eq!(schedule.items[0].kind, ItemKind::Song);
        assert_eq!(schedule.items[1].kind, ItemKind::Bible);
        assert!(schedule.items[1].slides.is_empty());
        assert_eq!(schedule.position_of(&ItemId::from("john-3")), Some(1));

        fs::remove_file(&path).expect("schedule file should be removed");
    }

    #[test]
    fn load_reports_malformed_json() {
        let path = unique_temp_path("broken.json");
        fs::write(&path, "{ not json").expect("schedule file should be written");

        let err = Schedule::load_from_path(&path).expect_err("broken schedule should fail");
        assert!(err.to_string().contains("failed to parse schedule"));

        fs::remove_file(&path).expect("schedule file should be removed");
    }

    #[test]
    fn load_reports_missing_file() {
        let missing = unique_temp_path("missing.json");
        assert!(Schedule::load_from_path(&missing).is_err());
    }
}
