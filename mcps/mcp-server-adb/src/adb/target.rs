//! Device targeting
//!
//! adb addresses at most one device per invocation: an explicit serial
//! (`-s`), the single USB device (`-d`) or the single emulator (`-e`).

/// Which device a command addresses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeviceTarget {
    /// No selector, adb picks the only connected device
    #[default]
    Any,
    /// Explicit device serial (`-s <serial>`)
    Serial(String),
    /// The USB-attached device (`-d`)
    Usb,
    /// The running emulator (`-e`)
    Emulator,
}

impl DeviceTarget {
    /// Resolve the caller's options into one target
    ///
    /// A non-empty serial wins over both flags, USB wins over emulator.
    pub fn from_options(device_id: Option<&str>, use_usb: bool, use_emulator: bool) -> Self {
        match device_id {
            Some(id) if !id.is_empty() => Self::Serial(id.to_string()),
            _ if use_usb => Self::Usb,
            _ if use_emulator => Self::Emulator,
            _ => Self::Any,
        }
    }

    /// Global adb option selecting this target, if any
    pub fn selector(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::Serial(id) => Some(format!("-s {id}")),
            Self::Usb => Some("-d".to_string()),
            Self::Emulator => Some("-e".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_takes_precedence_over_flags() {
        for (usb, emu) in [(false, false), (true, false), (false, true), (true, true)] {
            let target = DeviceTarget::from_options(Some("emulator-5554"), usb, emu);
            assert_eq!(target.selector().as_deref(), Some("-s emulator-5554"));
        }
    }

    #[test]
    fn test_usb_takes_precedence_over_emulator() {
        for emu in [false, true] {
            let target = DeviceTarget::from_options(None, true, emu);
            assert_eq!(target, DeviceTarget::Usb);
            assert_eq!(target.selector().as_deref(), Some("-d"));
        }
    }

    #[test]
    fn test_emulator_selector() {
        let target = DeviceTarget::from_options(None, false, true);
        assert_eq!(target.selector().as_deref(), Some("-e"));
    }

    #[test]
    fn test_no_selector() {
        let target = DeviceTarget::from_options(None, false, false);
        assert_eq!(target, DeviceTarget::Any);
        assert!(target.selector().is_none());
    }

    #[test]
    fn test_empty_serial_is_unset() {
        assert_eq!(DeviceTarget::from_options(Some(""), false, false), DeviceTarget::Any);
        assert_eq!(DeviceTarget::from_options(Some(""), true, false), DeviceTarget::Usb);
    }
}
