use std::io::ErrorKind;

pub trait ConfigSource {
    // Ok(None) means the source has no content yet.
    fn read(&self) -> Result<Option<String>, String>;
    fn write(&self, content: &str) -> Result<(), String>;
}

pub struct FileConfigSource {
    file_path: String,
}

impl FileConfigSource {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigSource for FileConfigSource {
    fn read(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    fn write(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content)
            .map_err(|err| format!("Failed to write config file: {}", err))
    }
}
