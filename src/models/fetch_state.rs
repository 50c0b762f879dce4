//! Estado de una consulta al backend
//!
//! Cada operación (carga de zona, búsqueda) tiene su propio estado; las
//! vistas se renderizan a partir de él.

use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FetchState<T> {
    Idle,
    Pending,
    Success(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    /// Marcar la consulta como en curso
    pub fn start(&mut self) {
        *self = FetchState::Pending;
    }

    /// Aplicar el resultado de la consulta
    pub fn resolve<E: Display>(&mut self, result: Result<T, E>) {
        *self = Self::from_result(result);
    }

    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
