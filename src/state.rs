use crate::domain::logger::EventLogger;
use crate::domain::repositories::RecordStore;
use crate::domain::SystemMetrics;
use crate::repositories::record_store::{
    FileRecordStore, AGENTS_CONFIG_FILE, AGENT_ACTION_LOG_FILE,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use sysinfo::System;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub action_log: Arc<dyn RecordStore>,
    pub agents_config: Arc<dyn RecordStore>,
    pub logger: Arc<dyn EventLogger>,
    pub system: Arc<Mutex<System>>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(data_dir: &Path, logger: Arc<dyn EventLogger>) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            data_dir: data_dir.to_path_buf(),
            action_log: Arc::new(FileRecordStore::new(data_dir, AGENT_ACTION_LOG_FILE)),
            agents_config: Arc::new(FileRecordStore::new(data_dir, AGENTS_CONFIG_FILE)),
            logger,
            system: Arc::new(Mutex::new(sys)),
            start_time: Instant::now(),
        }
    }

    pub fn get_system_metrics(&self) -> SystemMetrics {
        let mut sys = self.system.lock().unwrap();
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let uptime_sec = self.start_time.elapsed().as_secs();
        let hrs = uptime_sec / 3600;
        let mins = (uptime_sec % 3600) / 60;
        let secs = uptime_sec % 60;
        let uptime = format!("{}h {}m {}s", hrs, mins, secs);

        let cpu = format!("{:.1}", sys.global_cpu_usage());
        let ram = format!(
            "{}MB / {}MB",
            sys.used_memory() / 1024 / 1024,
            sys.total_memory() / 1024 / 1024
        );

        SystemMetrics { uptime, cpu, ram }
    }
}
