/// The OS accessibility (input monitoring) capability.
pub trait AccessibilityPort: Send + Sync {
    fn is_trusted(&self) -> bool;

    /// Ask the OS to show its permission prompt. Returns the trust state at
    /// the time of the request.
    fn request_access(&self) -> bool;
}
