pub mod config;
pub mod preview;

/// What a command hands back to the dispatcher: a JSON payload for
/// stdout and the process exit code.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    /// Structured error payload. `error_class` is a stable machine
    /// readable tag; `message` is the human readable detail.
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = serde_json::json!({
            "command": command,
            "status": "error",
            "error_class": error_class,
            "message": message.into(),
        });
        Self { exit_code, output: payload.to_string() }
    }
}
