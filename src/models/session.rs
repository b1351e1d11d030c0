use serde::{Deserialize, Serialize};

/// Sesión derivada del token guardado en el almacén de credenciales
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn from_token(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Token presente y no vacío. No se valida el contenido.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
