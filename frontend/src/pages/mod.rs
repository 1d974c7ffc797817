pub mod leave_requests;

pub use leave_requests::LeaveRequestPage;
