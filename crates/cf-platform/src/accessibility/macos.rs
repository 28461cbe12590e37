use cf_core::ports::AccessibilityPort;
use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::string::{CFString, CFStringRef};
use tracing::debug;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrusted() -> bool;
    fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> bool;
    static kAXTrustedCheckOptionPrompt: CFStringRef;
}

/// `AXIsProcessTrusted` and the system permission prompt.
#[derive(Debug, Default)]
pub struct MacAccessibility;

impl MacAccessibility {
    pub fn new() -> Self {
        Self
    }
}

impl AccessibilityPort for MacAccessibility {
    fn is_trusted(&self) -> bool {
        unsafe { AXIsProcessTrusted() }
    }

    fn request_access(&self) -> bool {
        let prompt_key = unsafe { CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt) };
        let options = CFDictionary::from_CFType_pairs(&[(prompt_key, CFBoolean::true_value())]);
        let trusted = unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) };
        debug!(trusted, "Requested accessibility permission");
        trusted
    }
}
