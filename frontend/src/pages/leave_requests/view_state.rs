//! Everything the leave request view shows, as one immutable value.
//!
//! User actions and finished remote calls are transitions that consume the
//! current state and return the next one. Transitions that need the list store
//! hand back an [`Effect`]; whoever runs the effect feeds the result in again
//! as a [`Completion`].

use crate::api::{ApiError, LeaveRequest, NewLeaveRequest};

use super::{
    types::ViewMode,
    utils::{FormEdit, LeaveForm, MessageState},
};

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Leave request submitted successfully";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Error submitting request";
pub const FETCH_FAILURE_MESSAGE: &str = "Error fetching leave requests";

/// Identifies one fetch. Only the most recently issued ticket may update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FetchTicket(u64);

impl FetchTicket {
    fn next(self) -> Self {
        FetchTicket(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch {
        ticket: FetchTicket,
        employee_email: String,
    },
    Create(NewLeaveRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Fetched {
        ticket: FetchTicket,
        result: Result<Vec<LeaveRequest>, ApiError>,
    },
    Created(Result<(), ApiError>),
}

/// Follow-up work produced by a transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub effect: Option<Effect>,
    /// Blocking message for the user.
    pub alert: Option<String>,
}

impl Outcome {
    fn effect(effect: Effect) -> Self {
        Self {
            effect: Some(effect),
            alert: None,
        }
    }

    fn alert(msg: impl Into<String>) -> Self {
        Self {
            effect: None,
            alert: Some(msg.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveRequestsState {
    user_email: String,
    form: LeaveForm,
    requests: Vec<LeaveRequest>,
    mode: ViewMode,
    selected: Option<LeaveRequest>,
    latest_ticket: FetchTicket,
    loading: bool,
    submitting: bool,
    form_message: MessageState,
    list_message: MessageState,
}

impl LeaveRequestsState {
    pub fn new(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            ..Self::default()
        }
    }

    pub fn form(&self) -> &LeaveForm {
        &self.form
    }

    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// A selected record is shown as read-only detail.
    pub fn is_read_only(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form_message(&self) -> &MessageState {
        &self.form_message
    }

    pub fn list_message(&self) -> &MessageState {
        &self.list_message
    }

    pub fn mount(self) -> (Self, Outcome) {
        let (state, effect) = self.begin_fetch();
        (state, Outcome::effect(effect))
    }

    pub fn select_record(mut self, record: LeaveRequest) -> Self {
        self.form = LeaveForm::from_record(&record);
        self.selected = Some(record);
        self.mode = ViewMode::Form;
        self.form_message.clear();
        self
    }

    pub fn start_new(mut self) -> Self {
        self.selected = None;
        self.form = LeaveForm::default();
        self.mode = ViewMode::Form;
        self.form_message.clear();
        self
    }

    /// Unsaved edits are dropped without asking.
    pub fn show_list(mut self) -> Self {
        self.selected = None;
        self.form = LeaveForm::default();
        self.mode = ViewMode::List;
        self.form_message.clear();
        self
    }

    pub fn edit(mut self, edit: FormEdit) -> Self {
        if self.mode != ViewMode::Form || self.is_read_only() {
            return self;
        }
        self.form = self.form.apply(edit);
        self
    }

    pub fn submit(mut self) -> (Self, Outcome) {
        if self.mode != ViewMode::Form || self.is_read_only() || self.submitting {
            return (self, Outcome::default());
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.submitting = true;
                self.form_message.clear();
                (self, Outcome::effect(Effect::Create(payload)))
            }
            Err(err) => {
                self.form_message.set_error(err.into());
                (self, Outcome::alert(err.to_string()))
            }
        }
    }

    pub fn complete(self, completion: Completion) -> (Self, Outcome) {
        match completion {
            Completion::Fetched { ticket, result } => {
                (self.fetch_completed(ticket, result), Outcome::default())
            }
            Completion::Created(result) => self.create_completed(result),
        }
    }

    fn begin_fetch(mut self) -> (Self, Effect) {
        self.latest_ticket = self.latest_ticket.next();
        self.loading = true;
        let effect = Effect::Fetch {
            ticket: self.latest_ticket,
            employee_email: self.user_email.clone(),
        };
        (self, effect)
    }

    fn fetch_completed(
        mut self,
        ticket: FetchTicket,
        result: Result<Vec<LeaveRequest>, ApiError>,
    ) -> Self {
        if ticket != self.latest_ticket {
            return self;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                let user_email = self.user_email.clone();
                self.requests = records
                    .into_iter()
                    .filter(|record| record.belongs_to(&user_email))
                    .collect();
                self.list_message.error = None;
            }
            Err(err) => {
                self.list_message
                    .set_error(err.with_message(FETCH_FAILURE_MESSAGE));
            }
        }
        self
    }

    fn create_completed(mut self, result: Result<(), ApiError>) -> (Self, Outcome) {
        self.submitting = false;
        match result {
            Ok(()) => {
                let mut state = self.show_list();
                state.list_message.set_success(SUBMIT_SUCCESS_MESSAGE);
                let (state, effect) = state.begin_fetch();
                (
                    state,
                    Outcome {
                        effect: Some(effect),
                        alert: Some(SUBMIT_SUCCESS_MESSAGE.to_string()),
                    },
                )
            }
            Err(err) => {
                self.form_message
                    .set_error(err.with_message(SUBMIT_FAILURE_MESSAGE));
                (self, Outcome::alert(SUBMIT_FAILURE_MESSAGE))
            }
        }
    }
}
