#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiError, LeaveRequest, LeaveType, NewLeaveRequest};
    use crate::pages::leave_requests::{
        repository::LeaveRequestStore,
        view_model::perform,
        view_state::{LeaveRequestsState, Outcome},
    };
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};

    pub fn leave_record(employee_email: &str, leave_type: LeaveType) -> LeaveRequest {
        LeaveRequest {
            employee_name: "Test Employee".into(),
            employee_email: employee_email.into(),
            leave_type: Some(leave_type),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            status: "Pending".into(),
            approver_email: "m@x.com".into(),
        }
    }

    /// In-memory list store. Like a store that ignores the filter, it hands
    /// back every row it holds.
    #[derive(Default)]
    pub struct FakeLeaveRequestStore {
        records: RefCell<Vec<LeaveRequest>>,
        created: RefCell<Vec<NewLeaveRequest>>,
        fetch_calls: Cell<usize>,
        fail_fetches: Cell<bool>,
        fail_creates: Cell<bool>,
    }

    impl FakeLeaveRequestStore {
        pub fn with_records(records: Vec<LeaveRequest>) -> Self {
            Self {
                records: RefCell::new(records),
                ..Self::default()
            }
        }

        pub fn fetch_calls(&self) -> usize {
            self.fetch_calls.get()
        }

        pub fn created(&self) -> Vec<NewLeaveRequest> {
            self.created.borrow().clone()
        }

        pub fn fail_fetches(&self, fail: bool) {
            self.fail_fetches.set(fail);
        }

        pub fn fail_creates(&self, fail: bool) {
            self.fail_creates.set(fail);
        }
    }

    #[async_trait(?Send)]
    impl LeaveRequestStore for FakeLeaveRequestStore {
        async fn fetch_for_employee(
            &self,
            _employee_email: &str,
        ) -> Result<Vec<LeaveRequest>, ApiError> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            if self.fail_fetches.get() {
                return Err(ApiError::request_failed("list store unavailable"));
            }
            Ok(self.records.borrow().clone())
        }

        async fn create(&self, request: &NewLeaveRequest) -> Result<(), ApiError> {
            if self.fail_creates.get() {
                return Err(ApiError::http(500, "list store rejected the item"));
            }
            self.created.borrow_mut().push(request.clone());
            self.records.borrow_mut().push(LeaveRequest {
                employee_name: request.employee_name.clone(),
                employee_email: request.employee_email.clone(),
                leave_type: Some(request.leave_type.clone()),
                start_date: Some(request.start_date),
                end_date: Some(request.end_date),
                status: request.status.clone(),
                approver_email: request.approver_email.clone(),
            });
            Ok(())
        }
    }

    /// Runs effects one after another until none is left. Returns the final
    /// state and every alert raised on the way.
    pub async fn drive<S>(
        store: &S,
        state: LeaveRequestsState,
        outcome: Outcome,
    ) -> (LeaveRequestsState, Vec<String>)
    where
        S: LeaveRequestStore + ?Sized,
    {
        let mut state = state;
        let mut outcome = outcome;
        let mut alerts = Vec::new();
        loop {
            if let Some(alert) = outcome.alert.take() {
                alerts.push(alert);
            }
            let Some(effect) = outcome.effect.take() else {
                break;
            };
            let completion = perform(store, effect).await;
            let (next, next_outcome) = state.complete(completion);
            state = next;
            outcome = next_outcome;
        }
        (state, alerts)
    }
}
