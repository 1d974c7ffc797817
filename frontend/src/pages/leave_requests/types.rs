pub use crate::api::LeaveRequest;
use crate::utils::time::format_display_date;

/// Store fields fetched for every row.
pub const LEAVE_REQUEST_FIELDS: [&str; 7] = [
    "Title",
    "EmployeeEmail",
    "LeaveType",
    "StartDate",
    "EndDate",
    "Status",
    "ApproverEmail",
];

pub const EMPLOYEE_EMAIL_FIELD: &str = "EmployeeEmail";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListColumn {
    LeaveType,
    StartDate,
    EndDate,
    Status,
    ApproverEmail,
}

pub const LIST_COLUMNS: [ListColumn; 5] = [
    ListColumn::LeaveType,
    ListColumn::StartDate,
    ListColumn::EndDate,
    ListColumn::Status,
    ListColumn::ApproverEmail,
];

impl ListColumn {
    pub fn key(self) -> &'static str {
        match self {
            ListColumn::LeaveType => "LeaveType",
            ListColumn::StartDate => "StartDate",
            ListColumn::EndDate => "EndDate",
            ListColumn::Status => "Status",
            ListColumn::ApproverEmail => "ApproverEmail",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListColumn::LeaveType => "Leave Type",
            ListColumn::StartDate => "Start Date",
            ListColumn::EndDate => "End Date",
            ListColumn::Status => "Status",
            ListColumn::ApproverEmail => "Approver Email",
        }
    }

    pub fn cell(self, record: &LeaveRequest) -> String {
        match self {
            ListColumn::LeaveType => record
                .leave_type
                .as_ref()
                .map(|t| t.as_str().to_string())
                .unwrap_or_else(|| "-".into()),
            ListColumn::StartDate => format_display_date(record.start_date),
            ListColumn::EndDate => format_display_date(record.end_date),
            ListColumn::Status => record.status.clone(),
            ListColumn::ApproverEmail => record.approver_email.clone(),
        }
    }
}
