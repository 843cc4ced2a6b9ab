//! Local cache for fetched puzzle inputs

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

/// File-based input cache, keyed by user so multiple accounts can share a
/// machine.
///
/// Layout: `{base_dir}/{user_id}/{year}/day{day:02}.txt`
pub struct InputCache {
    user_dir: PathBuf,
}

impl InputCache {
    pub fn new(mut base_dir: PathBuf, user_id: u64) -> Self {
        base_dir.push(user_id.to_string());
        Self { user_dir: base_dir }
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.user_dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.input_path(year, day);
        if path.exists() {
            Ok(Some(fs::read_to_string(&path)?))
        } else {
            Ok(None)
        }
    }

    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        let path = self.input_path(year, day);
        let dir = path.parent().unwrap_or(&self.user_dir);
        fs::create_dir_all(dir)
            .map_err(|e| CacheError::DirCreation(format!("failed to create {}: {}", dir.display(), e)))?;
        fs::write(&path, input)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_layout() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf(), 12345);

        let path = cache.input_path(2025, 1);
        let text = path.to_string_lossy().to_string();
        assert!(text.contains("12345"));
        assert!(text.ends_with("2025/day01.txt") || text.ends_with("2025\\day01.txt"));
    }

    #[test]
    fn roundtrip() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf(), 12345);

        assert!(!cache.contains(2025, 4));
        assert!(cache.get(2025, 4).unwrap().is_none());

        cache.put(2025, 4, "@@.\n@@@\n").unwrap();

        assert!(cache.contains(2025, 4));
        assert_eq!(cache.get(2025, 4).unwrap(), Some("@@.\n@@@\n".to_string()));
    }

    #[test]
    fn users_do_not_share_inputs() {
        let temp = TempDir::new().unwrap();
        let mine = InputCache::new(temp.path().to_path_buf(), 1);
        let theirs = InputCache::new(temp.path().to_path_buf(), 2);

        mine.put(2025, 9, "7,1\n11,1\n").unwrap();
        assert!(!theirs.contains(2025, 9));
    }
}
