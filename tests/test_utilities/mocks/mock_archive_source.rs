use ova_scan::prelude::*;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ArchiveSource serving in-memory files and recording every open
#[derive(Default, Clone)]
pub struct MockArchiveSource {
    files: HashMap<PathBuf, Vec<u8>>,
    pub opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockArchiveSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: Vec<u8>) -> Self {
        self.files.insert(PathBuf::from(path), content);
        self
    }

    pub fn opened_paths(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl ArchiveSource for MockArchiveSource {
    fn open(&self, path: &Path) -> Result<Box<dyn Read>> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        match self.files.get(path) {
            Some(content) => Ok(Box::new(Cursor::new(content.clone()))),
            None => anyhow::bail!("File not found: {}", path.display()),
        }
    }
}
