use thiserror::Error;

/// Transport send failure. Logged at the call site; never retried.
#[derive(Error, Debug)]
#[error("send failed: {0}")]
pub struct SendError(pub String);
