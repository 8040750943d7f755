//! Violation logging collaborator.

use crate::metadata::RequestView;

/// Receives every request the policy would block, in enforce and report-only
/// mode alike. Called synchronously on the request path.
pub trait ViolationLogger: Send + Sync {
    fn log(&self, request: &dyn RequestView);
}

impl<F> ViolationLogger for F
where
    F: Fn(&dyn RequestView) + Send + Sync,
{
    fn log(&self, request: &dyn RequestView) {
        self(request)
    }
}
