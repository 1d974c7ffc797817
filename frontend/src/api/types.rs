use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::utils::time;

/// Status every new request is created with. The component never changes it afterwards.
pub const PENDING_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LeaveType {
    SickLeave,
    Vacation,
    CasualLeave,
    /// A value written to the list by something other than this form.
    Other(String),
}

impl LeaveType {
    pub const OPTIONS: [LeaveType; 3] = [
        LeaveType::SickLeave,
        LeaveType::Vacation,
        LeaveType::CasualLeave,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            LeaveType::SickLeave => "Sick Leave",
            LeaveType::Vacation => "Vacation",
            LeaveType::CasualLeave => "Casual Leave",
            LeaveType::Other(raw) => raw,
        }
    }

    /// Maps a dropdown key back to one of the selectable options.
    pub fn from_option_key(key: &str) -> Option<LeaveType> {
        Self::OPTIONS
            .iter()
            .find(|option| option.as_str() == key)
            .cloned()
    }

    pub fn from_store(raw: &str) -> LeaveType {
        Self::from_option_key(raw).unwrap_or_else(|| LeaveType::Other(raw.to_string()))
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LeaveType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LeaveType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LeaveType::from_store(&raw))
    }
}

/// A row of the leave request list as returned by the list store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(rename = "Title", default, deserialize_with = "null_as_empty")]
    pub employee_name: String,
    #[serde(rename = "EmployeeEmail", default, deserialize_with = "null_as_empty")]
    pub employee_email: String,
    #[serde(rename = "LeaveType", default)]
    pub leave_type: Option<LeaveType>,
    #[serde(rename = "StartDate", default, with = "store_date::option")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "EndDate", default, with = "store_date::option")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "Status", default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(rename = "ApproverEmail", default, deserialize_with = "null_as_empty")]
    pub approver_email: String,
}

impl LeaveRequest {
    /// The store compares text case-insensitively, so the client does too.
    pub fn belongs_to(&self, employee_email: &str) -> bool {
        let wanted = employee_email.trim();
        !wanted.is_empty() && self.employee_email.trim().eq_ignore_ascii_case(wanted)
    }
}

/// Payload of the create call. Built only from a validated form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLeaveRequest {
    #[serde(rename = "Title")]
    pub employee_name: String,
    #[serde(rename = "EmployeeEmail")]
    pub employee_email: String,
    #[serde(rename = "LeaveType")]
    pub leave_type: LeaveType,
    #[serde(rename = "StartDate", serialize_with = "store_date::serialize")]
    pub start_date: NaiveDate,
    #[serde(rename = "EndDate", serialize_with = "store_date::serialize")]
    pub end_date: NaiveDate,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ApproverEmail")]
    pub approver_email: String,
}

/// Collection envelope used by the list store with `odata=nometadata`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
            details: None,
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    /// Same code and details, different user-facing text.
    pub fn with_message(self, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            ..self
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoreErrorText {
    Plain(String),
    Localized { value: String },
}

#[derive(Deserialize)]
struct StoreErrorDetail {
    message: StoreErrorText,
}

#[derive(Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    error: Option<StoreErrorDetail>,
    #[serde(rename = "odata.error", default)]
    odata_error: Option<StoreErrorDetail>,
}

/// Pulls the human readable message out of a list store error body, in either
/// the verbose or the light JSON flavour.
pub fn extract_store_error(body: &str) -> Option<String> {
    let parsed: StoreErrorBody = serde_json::from_str(body).ok()?;
    let detail = parsed.error.or(parsed.odata_error)?;
    let text = match detail.message {
        StoreErrorText::Plain(text) => text,
        StoreErrorText::Localized { value } => value,
    };
    let text = text.trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

mod store_date {
    use super::time;
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time::format_store_date(*date))
    }

    pub mod option {
        use super::time;
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(raw) if raw.trim().is_empty() => Ok(None),
                Some(raw) => {
                    let parsed = time::parse_store_date(&raw);
                    if parsed.is_none() {
                        log::warn!("ignoring unparsable store date {:?}", raw);
                    }
                    Ok(parsed)
                }
            }
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;

    #[test]
    fn api_error_can_be_converted_to_view() {
        let _: View = ApiError::request_failed("request failed").into_view();
    }
}
