//! Error taxonomy of the backend.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
  /// Bad K, unreadable input or config. Reported before any graph work.
  #[error("configuration error: {0}")]
  Config(String),

  /// The front end handed us something inconsistent. Only this function is lost.
  #[error("malformed IR in function `{function}`: {reason}")]
  MalformedIr { function: String, reason: String },

  /// An allocator invariant broke. Fatal for the whole compilation; `state`
  /// carries a JSON dump of the graph when one was available.
  #[error("internal allocator inconsistency in function `{function}`: {reason}")]
  Internal {
    function: String,
    reason: String,
    state: Option<String>,
  },
}

impl BackendError {
  pub fn config(reason: impl Into<String>) -> Self {
    BackendError::Config(reason.into())
  }

  pub fn malformed(function: &str, reason: impl Into<String>) -> Self {
    BackendError::MalformedIr {
      function: function.to_string(),
      reason: reason.into(),
    }
  }

  pub fn internal(function: &str, reason: impl Into<String>, state: Option<String>) -> Self {
    BackendError::Internal {
      function: function.to_string(),
      reason: reason.into(),
      state,
    }
  }

  /// Whether the error should stop the compilation of every remaining function.
  pub fn is_fatal(&self) -> bool {
    matches!(self, BackendError::Internal { .. })
  }

  pub fn postmortem(&self) -> Option<&str> {
    match self {
      BackendError::Internal { state, .. } => state.as_deref(),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_internal_errors_are_fatal() {
    assert!(!BackendError::config("K must be at least 1").is_fatal());
    assert!(!BackendError::malformed("main", "unknown label `l9`").is_fatal());
    let err = BackendError::internal("main", "stuck", Some("{}".to_string()));
    assert!(err.is_fatal());
    assert_eq!(err.postmortem(), Some("{}"));
  }

  #[test]
  fn messages_name_the_function() {
    let err = BackendError::malformed("fib", "duplicate label `loop`");
    assert_eq!(
      err.to_string(),
      "malformed IR in function `fib`: duplicate label `loop`"
    );
  }
}
