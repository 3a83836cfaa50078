//! User-facing error notification

use shared::ApiErrorBody;

/// Sink for user-facing error notifications
///
/// The gateway fires one notification per validation failure (error
/// bodies carrying an `errors` map). The presentation layer installs
/// its own implementation (toast, dialog); [`TracingNotifier`] is the
/// default.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Notifier that routes messages to the tracing diagnostic channel
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!(target: "resv_client::notify", "{message}");
    }
}

/// Build the notification text for a validation error body
///
/// Top-level message first, then every field message flattened in map
/// iteration order, newline-separated. Field order is not guaranteed.
pub fn format_validation_message(body: &ApiErrorBody) -> String {
    let mut text = body.message.clone();
    if let Some(errors) = &body.errors {
        for messages in errors.values() {
            for message in messages {
                text.push('\n');
                text.push_str(message);
            }
        }
    }
    text
}
