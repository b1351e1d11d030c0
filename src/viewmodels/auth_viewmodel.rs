// ============================================================================
// AUTH VIEWMODEL - Validación de formularios y token de demo
// ============================================================================
// No hay backend: un formulario válido produce un token local.
// ============================================================================

use chrono::{DateTime, Utc};

use crate::error::FormError;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.full_name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Token opaco de demo, nunca vacío
pub fn demo_token(email: &str, now: DateTime<Utc>) -> String {
    format!("demo-{}-{}", email.trim().to_lowercase(), now.timestamp_millis())
}
