//! Payment service - the submission state machine
//!
//! A submission moves `Editing -> Submitting -> Succeeded`, with failure
//! folding back to `Editing` so the user can retry with the draft intact.
//! The `begin`/`complete` split mirrors the suspension point around the
//! network call: while a request is in flight the machine sits in
//! `Submitting` and further submit triggers are ignored.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::result::{Error, Result};
use crate::domain::validate::FieldErrors;
use crate::domain::{PaymentDraft, PaymentRecord, PaymentRequest};
use crate::ports::BankApi;
use crate::routes::Route;
use crate::session::SessionStore;

/// Fixed delay before the post-success navigation to the dashboard
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// A scheduled one-time navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub delay: Duration,
}

/// State of a payment submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// Draft mutable; `errors` reflect the last validation pass and
    /// `message` the last server rejection, if any.
    Editing,
    /// Exactly one request is in flight; submit triggers are ignored.
    Submitting,
    /// Confirmation shown; navigation scheduled; no further input accepted.
    Succeeded {
        record: PaymentRecord,
        redirect: Navigation,
    },
}

/// A payment form with its submission lifecycle
#[derive(Debug)]
pub struct PaymentSubmission {
    draft: PaymentDraft,
    state: SubmissionState,
    errors: FieldErrors,
    message: Option<String>,
}

impl PaymentSubmission {
    pub fn new(draft: PaymentDraft) -> Self {
        Self {
            draft,
            state: SubmissionState::Editing,
            errors: FieldErrors::default(),
            message: None,
        }
    }

    pub fn draft(&self) -> &PaymentDraft {
        &self.draft
    }

    /// Mutable access to the draft, only while editing.
    pub fn draft_mut(&mut self) -> Option<&mut PaymentDraft> {
        match self.state {
            SubmissionState::Editing => Some(&mut self.draft),
            _ => None,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Field errors from the last validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Server or transport message from the last failed attempt.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handle a submit trigger.
    ///
    /// Runs the full validation pass. Returns the request to issue when the
    /// draft is valid and no request is already in flight; `None` otherwise.
    /// On `Some`, the machine has moved to `Submitting` and expects exactly
    /// one matching `complete` call.
    pub fn begin(&mut self) -> Option<PaymentRequest> {
        if self.state != SubmissionState::Editing {
            return None;
        }

        self.message = None;
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            return None;
        }

        // Validation guarantees the amount parses.
        let amount = self.draft.amount.trim().parse().ok()?;
        self.state = SubmissionState::Submitting;
        Some(PaymentRequest {
            amount,
            currency: self.draft.currency,
            provider: self.draft.provider,
            recipient_account: self.draft.payee_account.clone(),
            swift_code: self.draft.swift_code.to_uppercase(),
        })
    }

    /// Feed the network outcome back into the machine.
    ///
    /// Success moves to `Succeeded` with a navigation to the dashboard
    /// scheduled after a fixed delay. Failure folds back to `Editing` with
    /// the message set and the draft untouched.
    pub fn complete(&mut self, result: Result<PaymentRecord>) -> &SubmissionState {
        if self.state != SubmissionState::Submitting {
            return &self.state;
        }

        match result {
            Ok(record) => {
                self.state = SubmissionState::Succeeded {
                    record,
                    redirect: Navigation {
                        route: Route::Dashboard,
                        delay: REDIRECT_DELAY,
                    },
                };
            }
            Err(e) => {
                self.message = Some(e.user_message());
                self.state = SubmissionState::Editing;
            }
        }
        &self.state
    }

    /// Run one full submission attempt against the API.
    pub fn submit(&mut self, api: &dyn BankApi, token: &str) -> &SubmissionState {
        match self.begin() {
            Some(request) => {
                let result = api.submit_payment(&request, token);
                self.complete(result)
            }
            None => &self.state,
        }
    }
}

/// Payment flow orchestration
pub struct PaymentService {
    api: Arc<dyn BankApi>,
}

impl PaymentService {
    pub fn new(api: Arc<dyn BankApi>) -> Self {
        Self { api }
    }

    pub fn start(&self, draft: PaymentDraft) -> PaymentSubmission {
        PaymentSubmission::new(draft)
    }

    /// Drive one submission attempt. Fails fast with `Error::Auth` when no
    /// session is present; all other outcomes land in the machine's state.
    pub fn submit(&self, submission: &mut PaymentSubmission, session: &SessionStore) -> Result<()> {
        let token = session
            .token()
            .ok_or_else(|| Error::auth("Please log in again."))?;
        submission.submit(self.api.as_ref(), token);
        Ok(())
    }
}
