// ============================================================================
// ERRORES - Tipos de error del cliente
// ============================================================================
// Ningún error cruza el event loop: los controladores los capturan,
// los registran y los exponen como estado (banner descartable).
// ============================================================================

use thiserror::Error;

/// Fallos del almacén de credenciales (localStorage o memoria)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,
    #[error("no se pudo escribir la clave '{0}'")]
    Write(String),
    #[error("no se pudo eliminar la clave '{0}'")]
    Remove(String),
}

/// Errores de sesión (login/logout)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("el token de sesión no puede estar vacío")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errores de una recarga del dashboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("fuente de datos no disponible: {0}")]
    SourceUnavailable(String),
    #[error("filtro inválido '{key}': {value}")]
    InvalidFilter { key: String, value: String },
}

/// Errores al leer la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuración JSON inválida: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("valor inválido para '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Validación de los formularios de login y registro
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Passwords do not match")]
    PasswordMismatch,
}
