//! Three-way classification of an RPC call: value, absence, or failure.
//!
//! The node reports some "not found" conditions as JSON-RPC errors. Callers
//! register the [`Absence`] they expect for a given method and receive
//! [`RpcOutcome::NotFound`] instead of a failure when that code comes back.
//! The same code from a method it was not registered for stays a failure.

use crate::error::TransportError;

/// Node error codes that signal a legitimate absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Absence {
    /// `info_get_deploy`: the node has no deploy with that hash.
    DeployNotFound,
    /// Global-state queries: the account or key is not yet recorded on chain.
    AccountNotFound,
}

impl Absence {
    /// The node's JSON-RPC error code for this condition.
    pub const fn code(self) -> i64 {
        match self {
            Self::DeployNotFound => -32000,
            Self::AccountNotFound => -32003,
        }
    }

    /// Returns `true` if `err` is the node's error for this condition.
    pub fn matches(self, err: &TransportError) -> bool {
        matches!(err, TransportError::Rpc(rpc) if rpc.code == self.code())
    }
}

impl std::fmt::Display for Absence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeployNotFound => write!(f, "deploy not found"),
            Self::AccountNotFound => write!(f, "account not found"),
        }
    }
}

/// Result of one RPC call once sentinel codes have been interpreted.
#[derive(Debug)]
pub enum RpcOutcome<T> {
    Ok(T),
    NotFound(Absence),
    Failure(TransportError),
}

impl<T> RpcOutcome<T> {
    /// Classify a raw call result against the absence expected for the method.
    pub fn classify(result: Result<T, TransportError>, expected: Option<Absence>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => match expected {
                Some(absence) if absence.matches(&err) => {
                    tracing::debug!(%absence, "node reported absence");
                    Self::NotFound(absence)
                }
                _ => Self::Failure(err),
            },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RpcOutcome<U> {
        match self {
            Self::Ok(value) => RpcOutcome::Ok(f(value)),
            Self::NotFound(absence) => RpcOutcome::NotFound(absence),
            Self::Failure(err) => RpcOutcome::Failure(err),
        }
    }

    /// Collapse into `Option`: absence becomes `None`, failure stays an error.
    pub fn into_option(self) -> Result<Option<T>, TransportError> {
        match self {
            Self::Ok(value) => Ok(Some(value)),
            Self::NotFound(_) => Ok(None),
            Self::Failure(err) => Err(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::JsonRpcError;

    fn rpc_err(code: i64) -> TransportError {
        TransportError::Rpc(JsonRpcError {
            code,
            message: "node error".into(),
            data: None,
        })
    }

    #[test]
    fn registered_sentinel_is_absence() {
        let outcome: RpcOutcome<()> =
            RpcOutcome::classify(Err(rpc_err(-32000)), Some(Absence::DeployNotFound));
        assert!(outcome.is_not_found());
        assert!(outcome.into_option().unwrap().is_none());
    }

    #[test]
    fn unregistered_sentinel_is_failure() {
        let outcome: RpcOutcome<()> = RpcOutcome::classify(Err(rpc_err(-32000)), None);
        assert!(matches!(outcome, RpcOutcome::Failure(_)));

        let outcome: RpcOutcome<()> =
            RpcOutcome::classify(Err(rpc_err(-32000)), Some(Absence::AccountNotFound));
        assert!(matches!(outcome, RpcOutcome::Failure(_)));
    }

    #[test]
    fn http_status_matching_code_is_never_absence() {
        // A status code can never collide with a negative RPC code, but the
        // check must be on the error kind, not only the number.
        let err = TransportError::HttpStatus {
            status: 500,
            body: String::new(),
        };
        assert!(!Absence::DeployNotFound.matches(&err));
    }

    #[test]
    fn ok_maps_through() {
        let outcome = RpcOutcome::classify(Ok(2u32), Some(Absence::AccountNotFound)).map(|v| v * 2);
        assert_eq!(outcome.into_option().unwrap(), Some(4));
    }
}
