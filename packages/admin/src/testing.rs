use crate::gateway::Notifier;

/// Notifier that keeps every message for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Vec<String>,
    pub errors: Vec<(String, String)>,
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn error(&mut self, title: &str, description: &str) {
        self.errors.push((title.to_string(), description.to_string()));
    }
}
