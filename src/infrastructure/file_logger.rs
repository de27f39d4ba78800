use crate::domain::logger::EventLogger;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

pub struct FileLogger {
    file: Mutex<std::fs::File>,
}

impl FileLogger {
    pub fn new(path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl EventLogger for FileLogger {
    fn log(&self, event: &str, detail: &str) {
        if let Ok(mut file) = self.file.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S %z");
            // Sanitize commas so the line stays machine-splittable
            let sanitized = detail.replace(',', " ");
            if let Err(e) = writeln!(file, "{},{},{}", timestamp, event, sanitized) {
                eprintln!("Failed to write to log: {}", e);
            }
        }
    }
}
