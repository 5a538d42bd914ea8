//! Panic containment for user-supplied constructors.

use std::panic::{self, AssertUnwindSafe};

use crate::definition::AnyArc;
use crate::error::BoxError;

/// Runs a factory or constructor, turning a panic into an error.
pub(crate) fn catch_construction<F>(f: F) -> Result<AnyArc, BoxError>
where
    F: FnOnce() -> Result<AnyArc, BoxError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "non-string panic payload".to_string()
            };
            Err(format!("panicked: {message}").into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn panic_becomes_error() {
        let err = catch_construction(|| panic!("boom")).unwrap_err();
        assert_eq!(err.to_string(), "panicked: boom");
    }

    #[test]
    fn success_passes_through() {
        let value = catch_construction(|| Ok(Arc::new(5u8) as AnyArc)).unwrap();
        assert_eq!(*value.downcast::<u8>().unwrap(), 5);
    }
}
