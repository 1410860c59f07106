use std::future::Future;

use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent. I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Something went wrong while sending your message. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Error => Some(ERROR_MESSAGE),
            Self::Idle | Self::Sending => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("mail delivery is not configured: {0}")]
    Config(String),
    #[error("couldn't reach mail service: {0}")]
    Transport(String),
    #[error("mail service rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("server error: {0}")]
    Server(String),
}

/// Delivers a contact message to wherever the site owner reads them.
pub trait Mailer {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ContactError>> + Send;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    status: FormStatus,
}

impl ContactForm {
    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == FormStatus::Sending
    }

    pub fn set_name(&mut self, name: String) {
        self.fields.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.fields.email = email;
    }

    pub fn set_message(&mut self, message: String) {
        self.fields.message = message;
    }

    /// Moves to `Sending` and returns the message to hand to the mailer.
    ///
    /// A submit while a send is still in flight is not rejected.
    pub fn begin_submit(&mut self) -> ContactMessage {
        if self.is_sending() {
            log::warn!("contact form submitted again while a send is in flight");
        }
        self.status = FormStatus::Sending;
        self.fields.clone()
    }

    pub fn complete(&mut self, outcome: Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.status = FormStatus::Success;
            }
            Err(e) => {
                log::error!("contact form send failed: {e}");
                self.status = FormStatus::Error;
            }
        }
    }

    pub async fn submit(&mut self, mailer: &impl Mailer) -> FormStatus {
        let message = self.begin_submit();
        let outcome = mailer.send(&message).await;
        self.complete(outcome);
        self.status
    }
}

#[cfg(test)]
mod tests {
    use std::pin::pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::{Context, Poll, Waker};

    use super::*;

    struct FakeMailer {
        fail: bool,
        sent: AtomicUsize,
    }

    impl FakeMailer {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: AtomicUsize::new(0),
            }
        }
    }

    impl Mailer for FakeMailer {
        fn send(
            &self,
            _message: &ContactMessage,
        ) -> impl Future<Output = Result<(), ContactError>> + Send {
            self.sent.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail;
            async move {
                if fail {
                    Err(ContactError::Rejected {
                        status: 400,
                        body: "The user ID is invalid".to_string(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    // the fake mailer never suspends, so a single poll finishes the future
    fn poll_once<F: Future>(fut: F) -> F::Output {
        let mut fut = pin!(fut);
        let mut cx = Context::from_waker(Waker::noop());
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(v) => v,
            Poll::Pending => panic!("fake mailer should complete immediately"),
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_name("Max Mustermann (GmbH)".to_string());
        form.set_email("max.mustermann@email.com".to_string());
        form.set_message("Hello there".to_string());
        form
    }

    #[test]
    fn test_initial_state() {
        let form = ContactForm::default();
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.status().notice(), None);
        assert!(form.fields.name.is_empty());
    }

    #[test]
    fn test_begin_submit_snapshots_fields() {
        let mut form = filled();
        let msg = form.begin_submit();
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(msg.name, "Max Mustermann (GmbH)");
        assert_eq!(msg.email, "max.mustermann@email.com");
        assert_eq!(msg.message, "Hello there");
        // fields stay visible while sending
        assert_eq!(form.fields, msg);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut form = filled();
        form.begin_submit();
        form.complete(Ok(()));
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.fields, ContactMessage::default());
        assert_eq!(form.status().notice(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        let sent = form.begin_submit();
        form.complete(Err(ContactError::Transport("timed out".to_string())));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.fields, sent);
        assert_eq!(form.status().notice(), Some(ERROR_MESSAGE));
    }

    #[test]
    fn test_resubmit_after_error() {
        let mut form = filled();
        form.begin_submit();
        form.complete(Err(ContactError::Server("boom".to_string())));
        let again = form.begin_submit();
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(again.name, "Max Mustermann (GmbH)");
        form.complete(Ok(()));
        assert_eq!(form.status(), FormStatus::Success);
    }

    #[test]
    fn test_double_submit_not_guarded() {
        let mut form = filled();
        let first = form.begin_submit();
        let second = form.begin_submit();
        assert_eq!(first, second);
        assert!(form.is_sending());
    }

    #[test]
    fn test_submit_with_mailer() {
        let mailer = FakeMailer::new(false);
        let mut form = filled();
        assert_eq!(poll_once(form.submit(&mailer)), FormStatus::Success);
        assert_eq!(mailer.sent.load(Ordering::SeqCst), 1);
        assert!(form.fields.email.is_empty());

        let mailer = FakeMailer::new(true);
        let mut form = filled();
        assert_eq!(poll_once(form.submit(&mailer)), FormStatus::Error);
        assert_eq!(form.fields.email, "max.mustermann@email.com");
    }

    #[test]
    fn test_error_display() {
        let err = ContactError::Rejected {
            status: 412,
            body: "API calls are disabled for non-browser applications".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "mail service rejected message (412): API calls are disabled for non-browser applications"
        );
        assert_eq!(
            ContactError::Config("EMAILJS_SERVICE_ID".to_string()).to_string(),
            "mail delivery is not configured: EMAILJS_SERVICE_ID"
        );
    }
}
