use serde::Serialize;
use utoipa::ToSchema;

pub const SENT_VIA_EMAIL: &str = "Sent via email";

/// A validated message from the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactMessage {
    /// Subject line used when the visitor left it blank.
    pub fn subject_line(&self) -> String {
        match &self.subject {
            Some(subject) => subject.clone(),
            None => format!("Portfolio contact from {}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactReceipt {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = "Sent via email")]
    pub message: String,
}

impl ContactReceipt {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SENT_VIA_EMAIL.to_string(),
        }
    }
}
