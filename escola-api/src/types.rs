//! Response bodies that are not records themselves.

use serde::{Deserialize, Serialize};

/// Confirmation body returned by update, delete and reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
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

// Confirmation texts, verbatim from the client contract.
pub const TEACHER_UPDATED: &str = "Professor atualizado com sucesso!";
pub const TEACHER_DELETED: &str = "Professor removido com sucesso!";
pub const CLASS_UPDATED: &str = "Turma atualizada com sucesso!";
pub const CLASS_DELETED: &str = "Turma removida com sucesso!";
pub const STORE_RESET: &str = "Banco resetado com sucesso!";
