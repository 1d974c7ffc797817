use crate::api::{ApiError, LeaveRequest, LeaveType, NewLeaveRequest, PENDING_STATUS};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all required fields")]
    MissingRequiredFields,
    #[error("Start Date cannot be later than End Date")]
    StartAfterEnd,
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::validation(error.to_string())
    }
}

/// Current contents of the request form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveForm {
    pub employee_name: String,
    pub employee_email: String,
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub approver_email: String,
}

/// One user edit to a single form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    EmployeeName(String),
    EmployeeEmail(String),
    LeaveType(Option<LeaveType>),
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    ApproverEmail(String),
}

impl LeaveForm {
    pub fn from_record(record: &LeaveRequest) -> Self {
        Self {
            employee_name: record.employee_name.clone(),
            employee_email: record.employee_email.clone(),
            leave_type: record.leave_type.clone(),
            start_date: record.start_date,
            end_date: record.end_date,
            approver_email: record.approver_email.clone(),
        }
    }

    pub fn apply(mut self, edit: FormEdit) -> Self {
        match edit {
            FormEdit::EmployeeName(value) => self.employee_name = value,
            FormEdit::EmployeeEmail(value) => self.employee_email = value,
            FormEdit::LeaveType(value) => self.leave_type = value,
            FormEdit::StartDate(value) => self.start_date = value,
            FormEdit::EndDate(value) => self.end_date = value,
            FormEdit::ApproverEmail(value) => self.approver_email = value,
        }
        self
    }

    pub fn to_payload(&self) -> Result<NewLeaveRequest, ValidationError> {
        let employee_email = self.employee_email.trim();
        let approver_email = self.approver_email.trim();
        let leave_type = self
            .leave_type
            .as_ref()
            .filter(|t| !t.is_blank())
            .ok_or(ValidationError::MissingRequiredFields)?;
        let (start_date, end_date) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(ValidationError::MissingRequiredFields),
        };
        if employee_email.is_empty() || approver_email.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if start_date > end_date {
            return Err(ValidationError::StartAfterEnd);
        }
        Ok(NewLeaveRequest {
            employee_name: self.employee_name.trim().to_string(),
            employee_email: employee_email.to_string(),
            leave_type: leave_type.clone(),
            start_date,
            end_date,
            status: PENDING_STATUS.to_string(),
            approver_email: approver_email.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}
