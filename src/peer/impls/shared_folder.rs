use std::path::{Path, PathBuf};
use crate::peer::structs::shared_folder::SharedFolder;

impl SharedFolder {
    pub fn new(path: &Path) -> SharedFolder {
        SharedFolder { path: PathBuf::from(path) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bare names of the regular files in the folder, in directory order.
    pub async fn list_files(&self) -> std::io::Result<Vec<String>>
    {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.path).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        Ok(names)
    }

    /// Maps a wire file name onto a path inside the folder.
    ///
    /// Names carrying separators or parent references never resolve.
    pub fn resolve(&self, name: &str) -> Option<PathBuf>
    {
        if name.is_empty() || name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return None;
        }
        Some(self.path.join(name))
    }

    pub async fn file_size(&self, name: &str) -> Option<u64>
    {
        let path = self.resolve(name)?;
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Some(metadata.len()),
            _ => None,
        }
    }
}
