use crate::api::{ApiClient, LeaveRequest};
use crate::pages::leave_requests::{
    repository::{LeaveRequestStore, LeaveRequestsRepository},
    types::ViewMode,
    utils::{FormEdit, LeaveForm, MessageState},
    view_state::{Completion, Effect, LeaveRequestsState, Outcome},
};
use crate::state::host::HostContext;
use crate::utils::dialog;
use leptos::*;
use std::rc::Rc;

/// Runs one effect against the store and reports how it ended.
pub async fn perform<S>(store: &S, effect: Effect) -> Completion
where
    S: LeaveRequestStore + ?Sized,
{
    match effect {
        Effect::Fetch {
            ticket,
            employee_email,
        } => {
            log::debug!("fetching leave requests for {}", employee_email);
            let result = store.fetch_for_employee(&employee_email).await;
            if let Err(err) = &result {
                log::error!("Error fetching leave requests: {} ({})", err, err.code);
            }
            Completion::Fetched { ticket, result }
        }
        Effect::Create(payload) => {
            let result = store.create(&payload).await;
            match &result {
                Ok(()) => log::info!("leave request created for {}", payload.employee_email),
                Err(err) => log::error!("Error submitting request: {} ({})", err, err.code),
            }
            Completion::Created(result)
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeaveRequestsViewModel {
    pub state: RwSignal<LeaveRequestsState>,
    store: StoredValue<Rc<dyn LeaveRequestStore>>,
}

impl LeaveRequestsViewModel {
    pub fn new(host: &HostContext) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let store: Rc<dyn LeaveRequestStore> =
            Rc::new(LeaveRequestsRepository::new(api, host.list_title.clone()));
        Self::with_store(host.user_email.clone(), store)
    }

    pub fn with_store(user_email: String, store: Rc<dyn LeaveRequestStore>) -> Self {
        Self {
            state: create_rw_signal(LeaveRequestsState::new(user_email)),
            store: store_value(store),
        }
    }

    pub fn mount(&self) {
        let outcome = self.transition(|state| state.mount());
        self.follow(outcome);
    }

    pub fn select_record(&self, record: LeaveRequest) {
        self.apply(|state| state.select_record(record));
    }

    pub fn start_new(&self) {
        self.apply(|state| state.start_new());
    }

    pub fn show_list(&self) {
        self.apply(|state| state.show_list());
    }

    pub fn edit(&self, edit: FormEdit) {
        self.apply(|state| state.edit(edit));
    }

    pub fn submit(&self) {
        let outcome = self.transition(|state| state.submit());
        self.follow(outcome);
    }

    pub fn mode(&self) -> Signal<ViewMode> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.mode()))
    }

    pub fn requests(&self) -> Signal<Vec<LeaveRequest>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.requests().to_vec()))
    }

    pub fn form(&self) -> Signal<LeaveForm> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.form().clone()))
    }

    pub fn read_only(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_read_only()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submitting()))
    }

    pub fn form_message(&self) -> Signal<MessageState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.form_message().clone()))
    }

    pub fn list_message(&self) -> Signal<MessageState> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.list_message().clone()))
    }

    fn apply(&self, f: impl FnOnce(LeaveRequestsState) -> LeaveRequestsState) {
        self.state
            .update(|state| *state = f(std::mem::take(state)));
    }

    fn transition(
        &self,
        f: impl FnOnce(LeaveRequestsState) -> (LeaveRequestsState, Outcome),
    ) -> Outcome {
        self.state
            .try_update(|state| {
                let (next, outcome) = f(std::mem::take(state));
                *state = next;
                outcome
            })
            .unwrap_or_default()
    }

    fn follow(&self, outcome: Outcome) {
        if let Some(message) = &outcome.alert {
            dialog::alert(message);
        }
        let Some(effect) = outcome.effect else {
            return;
        };
        let vm = *self;
        let store = self.store.get_value();
        spawn_local(async move {
            let completion = perform(store.as_ref(), effect).await;
            let next = vm.transition(|state| state.complete(completion));
            vm.follow(next);
        });
    }
}
