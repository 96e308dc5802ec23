use async_trait::async_trait;
use http::{header::ACCEPT, StatusCode};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::CONTACT_FORM_ENDPOINT;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    Busy,
    #[error("form relay responded with {0}")]
    Rejected(StatusCode),
    #[error("couldn't reach form relay: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(field, _)| Err(ContactError::MissingField(field)))
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            reply_to: self.email.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// JSON body accepted by the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("Thanks for reaching out! I'll get back to you soon."),
            Self::Error => Some("Something went wrong. Please try again."),
            Self::Idle | Self::Loading => None,
        }
    }
}

/// Form fields plus the status of the latest submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub form: ContactForm,
    status: SubmitStatus,
    failure: Option<ContactError>,
}

impl ContactSubmission {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Text shown under the form for the latest attempt, if any.
    pub fn feedback(&self) -> Option<String> {
        match (&self.status, &self.failure) {
            (SubmitStatus::Error, Some(ContactError::MissingField(field))) => {
                Some(format!("Please fill in your {field}."))
            }
            (status, _) => status.message().map(str::to_string),
        }
    }

    /// Enters `Loading` and hands back the body to send. Refuses while a
    /// previous attempt is still outstanding, leaving the status untouched.
    /// A blank field ends the attempt in `Error` without sending anything.
    pub fn begin(&mut self) -> Result<ContactPayload, ContactError> {
        if self.status.is_loading() {
            return Err(ContactError::Busy);
        }
        if let Err(e) = self.form.validate() {
            self.status = SubmitStatus::Error;
            self.failure = Some(e.clone());
            return Err(e);
        }
        self.status = SubmitStatus::Loading;
        self.failure = None;
        Ok(self.form.payload())
    }

    pub fn complete(&mut self, outcome: Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.form.clear();
            }
            Err(e) => {
                log::warn!("contact form submission failed: {e}");
                self.status = SubmitStatus::Error;
                self.failure = Some(e);
            }
        }
    }
}

/// One best-effort delivery of the contact form. No retries.
#[async_trait(?Send)]
pub trait FormRelay {
    async fn relay(&self, payload: &ContactPayload) -> Result<(), ContactError>;
}

#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: Client,
    endpoint: String,
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(CONTACT_FORM_ENDPOINT)
    }
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl FormRelay for HttpRelay {
    async fn relay(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        let res = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;
        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ScriptedRelay {
        outcome: Result<(), ContactError>,
        sent: RefCell<Vec<ContactPayload>>,
    }

    impl ScriptedRelay {
        fn new(outcome: Result<(), ContactError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for ScriptedRelay {
        async fn relay(&self, payload: &ContactPayload) -> Result<(), ContactError> {
            self.sent.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn filled() -> ContactSubmission {
        ContactSubmission {
            form: ContactForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Let's talk dashboards.".to_string(),
            },
            ..Default::default()
        }
    }

    async fn submit(
        relay: &impl FormRelay,
        submission: &mut ContactSubmission,
    ) -> Vec<SubmitStatus> {
        let mut seen = vec![submission.status()];
        let payload = match submission.begin() {
            Ok(p) => p,
            Err(_) => return seen,
        };
        seen.push(submission.status());
        let outcome = relay.relay(&payload).await;
        submission.complete(outcome);
        seen.push(submission.status());
        seen
    }

    #[test]
    fn test_payload_shape() {
        let payload = filled().form.payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Let's talk dashboards.",
                "_replyto": "ada@example.com",
            })
        );
    }

    #[test]
    fn test_validate_names_first_blank_field() {
        let mut form = filled().form;
        assert_eq!(form.validate(), Ok(()));
        form.email = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("email")));
        form.name.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));
    }

    #[test]
    fn test_begin_rejects_invalid_form_with_feedback() {
        let mut submission = ContactSubmission::default();
        assert_eq!(submission.begin(), Err(ContactError::MissingField("name")));
        assert_eq!(submission.status(), SubmitStatus::Error);
        assert_eq!(
            submission.feedback().as_deref(),
            Some("Please fill in your name.")
        );
    }

    #[test]
    fn test_whitespace_only_field_is_not_dropped_silently() {
        let mut submission = filled();
        submission.form.name = " ".to_string();
        assert_eq!(submission.feedback(), None);

        assert_eq!(submission.begin(), Err(ContactError::MissingField("name")));
        assert_eq!(submission.status(), SubmitStatus::Error);
        assert!(submission.feedback().is_some());
        // typed text is kept for correction
        assert_eq!(submission.form.email, "ada@example.com");

        submission.form.name = "Ada".to_string();
        assert!(submission.begin().is_ok());
        assert!(submission.status().is_loading());
        assert_eq!(submission.feedback(), None);
    }

    #[test]
    fn test_begin_blocks_duplicate_submit() {
        let mut submission = filled();
        assert!(submission.begin().is_ok());
        assert!(submission.status().is_loading());
        assert_eq!(submission.begin(), Err(ContactError::Busy));
        assert!(submission.status().is_loading());
    }

    #[tokio::test]
    async fn test_ok_response_succeeds_and_clears() {
        let relay = ScriptedRelay::new(Ok(()));
        let mut submission = filled();
        let seen = submit(&relay, &mut submission).await;

        assert_eq!(
            seen,
            vec![SubmitStatus::Idle, SubmitStatus::Loading, SubmitStatus::Success]
        );
        assert_eq!(submission.form, ContactForm::default());
        assert_eq!(relay.sent.borrow().len(), 1);
        assert_eq!(relay.sent.borrow()[0].reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn test_rejected_response_errors_and_keeps_fields() {
        let relay = ScriptedRelay::new(Err(ContactError::Rejected(
            StatusCode::UNPROCESSABLE_ENTITY,
        )));
        let mut submission = filled();
        let seen = submit(&relay, &mut submission).await;

        assert_eq!(
            seen,
            vec![SubmitStatus::Idle, SubmitStatus::Loading, SubmitStatus::Error]
        );
        assert_eq!(submission.form, filled().form);
        assert_eq!(
            submission.feedback().as_deref(),
            SubmitStatus::Error.message()
        );
    }

    #[tokio::test]
    async fn test_network_failure_errors_and_keeps_fields() {
        let relay = ScriptedRelay::new(Err(ContactError::Network("offline".to_string())));
        let mut submission = filled();
        let seen = submit(&relay, &mut submission).await;

        assert_eq!(seen.last(), Some(&SubmitStatus::Error));
        assert_eq!(submission.form, filled().form);
    }

    #[tokio::test]
    async fn test_resubmit_after_error_reenters_loading() {
        let mut submission = filled();
        let offline = ScriptedRelay::new(Err(ContactError::Network("dns".to_string())));
        submit(&offline, &mut submission).await;
        assert_eq!(submission.status(), SubmitStatus::Error);

        let seen = submit(&ScriptedRelay::new(Ok(())), &mut submission).await;
        assert_eq!(
            seen,
            vec![SubmitStatus::Error, SubmitStatus::Loading, SubmitStatus::Success]
        );
    }

    /// Serves a single request with `status_line` and hands back the raw
    /// request text once the response is written.
    async fn one_shot_server(
        status_line: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw);
                if let Some(end) = text.find("\r\n\r\n") {
                    let len = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (k, v) = l.split_once(':')?;
                            k.eq_ignore_ascii_case("content-length")
                                .then(|| v.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if raw.len() >= end + 4 + len {
                        break;
                    }
                }
            }
            let response =
                format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            stream.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8(raw).unwrap()
        });
        (format!("http://{addr}/f/test"), handle)
    }

    #[tokio::test]
    async fn test_http_relay_rejected_status_and_wire_format() {
        let (endpoint, server) = one_shot_server("HTTP/1.1 422 Unprocessable Entity").await;
        let res = HttpRelay::new(endpoint).relay(&filled().form.payload()).await;
        assert_eq!(
            res,
            Err(ContactError::Rejected(StatusCode::UNPROCESSABLE_ENTITY))
        );

        let request = server.await.unwrap();
        let (head, body) = request.split_once("\r\n\r\n").unwrap();
        assert!(head.starts_with("POST /f/test HTTP/1.1"));
        let head = head.to_ascii_lowercase();
        assert!(head.contains("content-type: application/json"));
        assert!(head.contains("accept: application/json"));
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Let's talk dashboards.",
                "_replyto": "ada@example.com",
            })
        );
    }

    #[tokio::test]
    async fn test_http_relay_success_status_is_ok() {
        let (endpoint, server) = one_shot_server("HTTP/1.1 200 OK").await;
        let mut submission = filled();
        let seen = submit(&HttpRelay::new(endpoint), &mut submission).await;
        server.await.unwrap();

        assert_eq!(
            seen,
            vec![SubmitStatus::Idle, SubmitStatus::Loading, SubmitStatus::Success]
        );
        assert_eq!(submission.form, ContactForm::default());
    }

    #[tokio::test]
    async fn test_http_relay_unreachable_is_network_error() {
        let relay = HttpRelay::new("http://127.0.0.1:9/f/test");
        let res = relay.relay(&filled().form.payload()).await;
        assert!(matches!(res, Err(ContactError::Network(_))));
    }
}
