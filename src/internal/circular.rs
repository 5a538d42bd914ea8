//! Re-entrant resolution detection.
//!
//! A factory that reaches back into its own container for the identifier it
//! is producing would block forever on that identifier's cell. Each thread
//! keeps the stack of identifiers it is currently resolving so that case is
//! reported as [`DiError::Circular`] instead.

use std::cell::RefCell;

use crate::error::{DiError, DiResult};

thread_local! {
    static RESOLUTION_STACK: RefCell<Vec<(usize, String)>> = const { RefCell::new(Vec::new()) };
}

/// Marks `id` as being resolved on this thread until dropped.
pub(crate) struct ResolutionGuard {
    owner: usize,
}

impl ResolutionGuard {
    /// Pushes `id` for the container identified by `owner`.
    ///
    /// Fails if the same container is already resolving `id` on this thread.
    pub(crate) fn enter(owner: usize, id: &str) -> DiResult<Self> {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.iter().any(|(o, n)| *o == owner && n == id) {
                let mut path: Vec<String> = stack
                    .iter()
                    .filter(|(o, _)| *o == owner)
                    .map(|(_, n)| n.clone())
                    .collect();
                path.push(id.to_string());
                return Err(DiError::Circular(path));
            }
            stack.push((owner, id.to_string()));
            Ok(Self { owner })
        })
    }
}

impl Drop for ResolutionGuard {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|(o, _)| *o == self.owner) {
                stack.remove(pos);
            }
        });
    }
}
