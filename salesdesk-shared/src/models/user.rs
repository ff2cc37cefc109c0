use serde::{Deserialize, Serialize};

/// Profile record for the signed-in employee, as returned by the user-info
/// service. All fields are plain strings; the service owns their formats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Internal employee identifier.
    pub employee_id: String,

    /// The employee's given name.
    pub first_name: String,

    /// The employee's family name.
    pub last_name: String,

    /// The employee's work email address.
    pub work_email: String,

    /// URL of the employee's thumbnail image.
    pub employee_thumbnail: String,

    /// The employee's job role title.
    pub job_role: String,
}

impl UserInfo {
    /// Full display name, given name first.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
