use crate::api::{ApiClient, ApiError, LeaveRequest, ListQuery, NewLeaveRequest};
use async_trait::async_trait;
use std::rc::Rc;

use super::types::{EMPLOYEE_EMAIL_FIELD, LEAVE_REQUEST_FIELDS};

/// The two list store calls the view needs.
#[async_trait(?Send)]
pub trait LeaveRequestStore {
    async fn fetch_for_employee(&self, employee_email: &str)
        -> Result<Vec<LeaveRequest>, ApiError>;

    async fn create(&self, request: &NewLeaveRequest) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct LeaveRequestsRepository {
    client: Rc<ApiClient>,
    list_title: String,
}

impl LeaveRequestsRepository {
    pub fn new(api: ApiClient, list_title: impl Into<String>) -> Self {
        Self {
            client: Rc::new(api),
            list_title: list_title.into(),
        }
    }
}

#[async_trait(?Send)]
impl LeaveRequestStore for LeaveRequestsRepository {
    async fn fetch_for_employee(
        &self,
        employee_email: &str,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        let query = ListQuery::new()
            .filter_eq(EMPLOYEE_EMAIL_FIELD, employee_email)
            .select(&LEAVE_REQUEST_FIELDS);
        self.client.get_list_items(&self.list_title, &query).await
    }

    async fn create(&self, request: &NewLeaveRequest) -> Result<(), ApiError> {
        self.client.add_list_item(&self.list_title, request).await
    }
}
