use crate::{
    transport::{Panel, PanelKind, SubmissionTransport},
    validate::{validate, FieldError, FormFields},
};

/// State of the submission controller.
///
/// `Pending` exists to guard against double submission: a submit while a
/// request is in flight sends nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Pending,
    Submitted,
}

/// Drives one contact form: clears stale error annotations, validates,
/// and hands the validated field set to the transport.
#[derive(Debug)]
pub struct FormController<T> {
    transport: T,
    state: FormState,
    errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was made. One error per failing
    /// field, to be rendered inline.
    Rejected(Vec<FieldError>),
    /// Validation passed in the non-networked variant; the caller shows
    /// its local success indicator.
    Accepted,
    /// The transport ran and produced the panel to render.
    Panel(Panel),
    /// A submission is already in flight; no request was made.
    AlreadyPending,
}

impl<T: SubmissionTransport> FormController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: FormState::Idle,
            errors: Vec::new(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// The error annotations currently rendered on the form.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Removes all error annotations. Safe to call when none are present.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    fn run_validation(&mut self, fields: &FormFields) -> Result<(), SubmitOutcome> {
        self.clear_errors();
        let errors = validate(fields);
        if errors.is_empty() {
            Ok(())
        } else {
            self.errors = errors.clone();
            Err(SubmitOutcome::Rejected(errors))
        }
    }

    /// The non-networked variant: validates and flips straight to
    /// `Submitted` so the caller can reveal its pre-rendered success
    /// indicator. Nothing is sent anywhere.
    pub fn submit_local(&mut self, fields: &FormFields) -> SubmitOutcome {
        if self.state == FormState::Pending {
            return SubmitOutcome::AlreadyPending;
        }
        self.state = FormState::Idle;

        if let Err(outcome) = self.run_validation(fields) {
            return outcome;
        }

        self.state = FormState::Submitted;
        SubmitOutcome::Accepted
    }

    /// Runs one submission attempt. On success the fields are reset to
    /// empty, mirroring the form reset in the page.
    pub async fn submit(&mut self, fields: &mut FormFields) -> SubmitOutcome {
        if self.state == FormState::Pending {
            return SubmitOutcome::AlreadyPending;
        }
        self.state = FormState::Idle;

        if let Err(outcome) = self.run_validation(fields) {
            return outcome;
        }

        self.state = FormState::Pending;
        let panel = self.transport.submit(fields).await;

        self.state = match panel.kind {
            PanelKind::Success => {
                *fields = FormFields::default();
                FormState::Submitted
            }
            PanelKind::Failure => FormState::Idle,
        };

        SubmitOutcome::Panel(panel)
    }
}
