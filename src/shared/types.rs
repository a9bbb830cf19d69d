use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by write endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub mensagem: String,
}

impl MessageResponse {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}

/// Body returned for every 4xx/5xx produced by the application
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub mensagem: String,
    pub erros: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(mensagem: String, erros: Option<Vec<String>>) -> Self {
        Self { mensagem, erros }
    }
}
