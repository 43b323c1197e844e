use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// One multicast push: the same notification fanned out to every recipient
/// token.
#[derive(Debug, Clone)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
    pub data: HashMap<String, String>,
    pub tokens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PushRecipientOutcome {
    pub token: String,
    pub success: bool,
    pub error: Option<String>,
    /// Whether the failure means the token will never be deliverable again
    /// and should be removed from the registry. Transient failures leave
    /// this false.
    pub permanent_failure: bool,
}

#[derive(Debug, Clone)]
pub struct PushOutcome {
    pub success_count: usize,
    pub failure_count: usize,
    pub recipients: Vec<PushRecipientOutcome>,
}

impl PushOutcome {
    pub fn permanently_failed_tokens(&self) -> Vec<String> {
        self.recipients
            .iter()
            .filter(|recipient| recipient.permanent_failure)
            .map(|recipient| recipient.token.clone())
            .collect()
    }
}

#[async_trait::async_trait]
pub trait IPushService: Send + Sync {
    /// Delivers `message` to all of its recipient tokens. An `Err` means
    /// the whole dispatch failed at the transport level; individual
    /// recipient failures are reported in the returned outcome instead.
    async fn send_multicast(&self, message: &PushMessage) -> anyhow::Result<PushOutcome>;
}

const FCM_SEND_URL: &str = "https://fcm.googleapis.com/fcm/send";

// Error codes for which FCM will never deliver to the token again
const PERMANENT_FCM_ERRORS: [&str; 3] = ["NotRegistered", "InvalidRegistration", "MismatchSenderId"];

#[derive(Debug, Serialize)]
struct FcmMulticastRequest<'a> {
    registration_ids: &'a [String],
    notification: FcmNotification<'a>,
    data: &'a HashMap<String, String>,
}

#[derive(Debug, Serialize)]
struct FcmNotification<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct FcmMulticastResponse {
    success: usize,
    failure: usize,
    results: Vec<FcmResult>,
}

#[derive(Debug, Deserialize)]
struct FcmResult {
    #[serde(default)]
    error: Option<String>,
}

/// Push service backed by the FCM HTTP API.
pub struct FcmPushService {
    client: Client,
    server_key: String,
}

impl FcmPushService {
    pub fn new(server_key: String) -> Self {
        Self {
            client: Client::new(),
            server_key,
        }
    }
}

#[async_trait::async_trait]
impl IPushService for FcmPushService {
    async fn send_multicast(&self, message: &PushMessage) -> anyhow::Result<PushOutcome> {
        let request = FcmMulticastRequest {
            registration_ids: &message.tokens,
            notification: FcmNotification {
                title: &message.title,
                body: &message.body,
            },
            data: &message.data,
        };

        let response = self
            .client
            .post(FCM_SEND_URL)
            .header("Authorization", format!("key={}", self.server_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<FcmMulticastResponse>()
            .await?;

        let recipients = message
            .tokens
            .iter()
            .zip(response.results)
            .map(|(token, result)| {
                let permanent_failure = result
                    .error
                    .as_deref()
                    .map(|error| PERMANENT_FCM_ERRORS.contains(&error))
                    .unwrap_or(false);
                PushRecipientOutcome {
                    token: token.clone(),
                    success: result.error.is_none(),
                    error: result.error,
                    permanent_failure,
                }
            })
            .collect();

        Ok(PushOutcome {
            success_count: response.success,
            failure_count: response.failure,
            recipients,
        })
    }
}

/// Push service double used by the inmemory context and in tests. Records
/// every dispatched message; individual tokens can be set up to fail and
/// the whole transport can be taken down.
pub struct InMemoryPushService {
    sent: Mutex<Vec<PushMessage>>,
    failing_tokens: Mutex<HashMap<String, bool>>,
    transport_down: Mutex<bool>,
}

impl InMemoryPushService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_tokens: Mutex::new(HashMap::new()),
            transport_down: Mutex::new(false),
        }
    }

    /// Make every dispatch to `token` report a failure; `permanent`
    /// controls whether the failure marks the token as dead.
    pub fn fail_token(&self, token: &str, permanent: bool) {
        self.failing_tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), permanent);
    }

    pub fn set_transport_down(&self, down: bool) {
        *self.transport_down.lock().unwrap() = down;
    }

    pub fn sent_messages(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryPushService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IPushService for InMemoryPushService {
    async fn send_multicast(&self, message: &PushMessage) -> anyhow::Result<PushOutcome> {
        if *self.transport_down.lock().unwrap() {
            return Err(anyhow::anyhow!("Push transport unreachable"));
        }

        let failing = self.failing_tokens.lock().unwrap().clone();
        let recipients: Vec<PushRecipientOutcome> = message
            .tokens
            .iter()
            .map(|token| match failing.get(token) {
                Some(&permanent) => PushRecipientOutcome {
                    token: token.clone(),
                    success: false,
                    error: Some(if permanent {
                        "NotRegistered".to_string()
                    } else {
                        "Unavailable".to_string()
                    }),
                    permanent_failure: permanent,
                },
                None => PushRecipientOutcome {
                    token: token.clone(),
                    success: true,
                    error: None,
                    permanent_failure: false,
                },
            })
            .collect();

        let success_count = recipients.iter().filter(|r| r.success).count();
        let failure_count = recipients.len() - success_count;
        self.sent.lock().unwrap().push(message.clone());

        Ok(PushOutcome {
            success_count,
            failure_count,
            recipients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_to(tokens: Vec<&str>) -> PushMessage {
        PushMessage {
            title: "Exam Reminder".into(),
            body: "Midterm is in 3 days".into(),
            data: HashMap::new(),
            tokens: tokens.into_iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn reports_per_recipient_outcomes() {
        let service = InMemoryPushService::new();
        service.fail_token("dead", true);
        service.fail_token("flaky", false);

        let outcome = service
            .send_multicast(&message_to(vec!["alive", "dead", "flaky"]))
            .await
            .unwrap();

        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.failure_count, 2);
        assert_eq!(outcome.permanently_failed_tokens(), vec!["dead".to_string()]);
        assert_eq!(service.sent_messages().len(), 1);
    }

    #[tokio::test]
    async fn transport_down_fails_the_whole_dispatch() {
        let service = InMemoryPushService::new();
        service.set_transport_down(true);

        assert!(service.send_multicast(&message_to(vec!["a"])).await.is_err());
        assert!(service.sent_messages().is_empty());
    }
}
