pub trait EventLogger: Send + Sync {
    fn log(&self, event: &str, detail: &str);
}
