//! MCP error types.
//!
//! Wraps the client and scheduler errors and maps every variant onto the MCP
//! error codes returned to the caller.

use brewfather_batch::BatchError;
use brewfather_client::ClientError;
use rmcp::ErrorData;
use thiserror::Error;

pub type McpResult<T> = Result<T, McpError>;

#[derive(Debug, Error)]
pub enum McpError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error("Summary and detail lists are misaligned: {summaries} summaries, {details} details")]
    Alignment { summaries: usize, details: usize },

    #[error("Detail at position {index} is for '{detail_id}', expected '{summary_id}'")]
    Misaligned {
        index: usize,
        summary_id: String,
        detail_id: String,
    },

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<McpError> for ErrorData {
    fn from(err: McpError) -> Self {
        let message = err.to_string();
        match err {
            McpError::ResourceNotFound(_) | McpError::PromptNotFound(_) => {
                ErrorData::resource_not_found(message, None)
            }
            McpError::Client(ref client) if client.is_not_found() => {
                ErrorData::resource_not_found(message, None)
            }
            McpError::InvalidArguments(_)
            | McpError::Batch(_)
            | McpError::Client(ClientError::Query(_)) => ErrorData::invalid_params(message, None),
            _ => ErrorData::internal_error(message, None),
        }
    }
}
