use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::error::NotificationError;
use crate::mailer::Mailer;

/// One rendered email ready for delivery
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Outcome of one settled fan-out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
}

/// Best-effort, at-most-once email fan-out
///
/// Each recipient is attempted independently; one failure never aborts
/// the others, and nothing is retried or persisted.
#[derive(Clone)]
pub struct Dispatcher {
    mailer: Arc<dyn Mailer>,
    attempt_timeout: Duration,
}

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

impl Dispatcher {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self {
            mailer,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Cap the duration of a single delivery attempt.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Attempt delivery to every recipient concurrently and wait for all
    /// attempts to settle.
    pub async fn fan_out(&self, messages: Vec<EmailMessage>) -> DispatchReport {
        let mut attempts = JoinSet::new();

        for message in messages {
            let mailer = Arc::clone(&self.mailer);
            let attempt_timeout = self.attempt_timeout;

            attempts.spawn(async move {
                let result =
                    match tokio::time::timeout(attempt_timeout, mailer.send(&message)).await {
                        Ok(result) => result,
                        Err(_) => Err(NotificationError::Timeout),
                    };

                if let Err(ref error) = result {
                    tracing::warn!(recipient = %message.to, %error, "Email delivery failed");
                }

                result.is_ok()
            });
        }

        let mut report = DispatchReport::default();
        while let Some(attempt) = attempts.join_next().await {
            match attempt {
                Ok(true) => report.sent += 1,
                _ => report.failed += 1,
            }
        }

        report
    }

    /// Detach a fan-out onto a background task.
    ///
    /// The caller returns before any delivery settles; the report's only
    /// output channel is the log.
    pub fn spawn(&self, messages: Vec<EmailMessage>) {
        if messages.is_empty() {
            return;
        }

        let dispatcher = self.clone();
        let recipients = messages.len();

        tokio::spawn(async move {
            tracing::info!(recipients, "Starting background email delivery");
            let report = dispatcher.fan_out(messages).await;
            tracing::info!(
                sent = report.sent,
                failed = report.failed,
                "Background email delivery settled"
            );
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct FlakyMailer {
        failing: &'static str,
        delivered: Mutex<Vec<String>>,
    }

    impl FlakyMailer {
        fn new(failing: &'static str) -> Self {
            Self {
                failing,
                delivered: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Mailer for FlakyMailer {
        async fn send(&self, message: &EmailMessage) -> Result<(), NotificationError> {
            if message.to == self.failing {
                return Err(NotificationError::SendFailed("mailbox unavailable".into()));
            }
            self.delivered.lock().unwrap().push(message.to.clone());
            Ok(())
        }
    }

    fn message(to: &str) -> EmailMessage {
        EmailMessage {
            to: to.to_string(),
            subject: "subject".to_string(),
            html_body: "<p>body</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn one_failing_recipient_does_not_abort_the_rest() {
        let mailer = Arc::new(FlakyMailer::new("b@example.com"));
        let dispatcher = Dispatcher::new(mailer.clone());

        let report = dispatcher
            .fan_out(vec![
                message("a@example.com"),
                message("b@example.com"),
                message("c@example.com"),
            ])
            .await;

        assert_eq!(report, DispatchReport { sent: 2, failed: 1 });

        let mut delivered = mailer.delivered.lock().unwrap().clone();
        delivered.sort();
        assert_eq!(delivered, vec!["a@example.com", "c@example.com"]);
    }

    #[tokio::test]
    async fn empty_fan_out_settles_immediately() {
        let dispatcher = Dispatcher::new(Arc::new(FlakyMailer::new("none")));
        let report = dispatcher.fan_out(Vec::new()).await;
        assert_eq!(report, DispatchReport::default());
    }

    struct StuckMailer;

    #[async_trait]
    impl Mailer for StuckMailer {
        async fn send(&self, _message: &EmailMessage) -> Result<(), NotificationError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn slow_attempt_is_capped_by_timeout() {
        let dispatcher =
            Dispatcher::new(Arc::new(StuckMailer)).with_attempt_timeout(Duration::from_millis(20));

        let report = dispatcher.fan_out(vec![message("slow@example.com")]).await;
        assert_eq!(report, DispatchReport { sent: 0, failed: 1 });
    }
}
