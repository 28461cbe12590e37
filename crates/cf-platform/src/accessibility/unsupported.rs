use cf_core::ports::AccessibilityPort;

/// Platforms without a per-app input permission always report trusted.
#[derive(Debug, Default)]
pub struct NoPermissionModel;

impl NoPermissionModel {
    pub fn new() -> Self {
        Self
    }
}

impl AccessibilityPort for NoPermissionModel {
    fn is_trusted(&self) -> bool {
        true
    }

    fn request_access(&self) -> bool {
        true
    }
}
