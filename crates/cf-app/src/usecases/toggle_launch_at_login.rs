use std::sync::Arc;

use anyhow::Result;
use cf_core::ports::AutostartPort;
use tracing::{info, info_span};

/// Flip the "Launch at Login" registration.
pub struct ToggleLaunchAtLogin {
    autostart: Arc<dyn AutostartPort>,
}

impl ToggleLaunchAtLogin {
    pub fn new(autostart: Arc<dyn AutostartPort>) -> Self {
        Self { autostart }
    }

    pub fn is_enabled(&self) -> Result<bool> {
        self.autostart.is_enabled()
    }

    /// Returns the registration state read back after the change, which is
    /// what the menu check mark should show.
    pub fn execute(&self) -> Result<bool> {
        let span = info_span!("usecase.toggle_launch_at_login.execute");
        let _enter = span.enter();

        if self.autostart.is_enabled()? {
            self.autostart.disable()?;
        } else {
            self.autostart.enable()?;
        }

        let enabled = self.autostart.is_enabled()?;
        info!(enabled, "Launch at login updated");
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockAutostart;
    use mockall::Sequence;

    #[test]
    fn test_enables_when_disabled() {
        let mut autostart = MockAutostart::new();
        let mut seq = Sequence::new();
        autostart
            .expect_is_enabled()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(false));
        autostart
            .expect_enable()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        autostart
            .expect_is_enabled()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(true));
        autostart.expect_disable().never();

        let use_case = ToggleLaunchAtLogin::new(Arc::new(autostart));
        assert!(use_case.execute().unwrap());
    }

    #[test]
    fn test_disables_when_enabled() {
        let mut autostart = MockAutostart::new();
        let mut seq = Sequence::new();
        autostart
            .expect_is_enabled()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(true));
        autostart
            .expect_disable()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        autostart
            .expect_is_enabled()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(false));
        autostart.expect_enable().never();

        let use_case = ToggleLaunchAtLogin::new(Arc::new(autostart));
        assert!(!use_case.execute().unwrap());
    }

    #[test]
    fn test_registration_error_is_returned() {
        let mut autostart = MockAutostart::new();
        autostart.expect_is_enabled().returning(|| Ok(false));
        autostart
            .expect_enable()
            .returning(|| Err(anyhow::anyhow!("launch agent not writable")));

        let use_case = ToggleLaunchAtLogin::new(Arc::new(autostart));
        let err = use_case.execute().unwrap_err();
        assert!(err.to_string().contains("launch agent"));
    }
}
