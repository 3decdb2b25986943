//! Device-type codes used by the settings backend's input descriptors.

use core::fmt;

use crate::descriptor::InputDescriptor;
use crate::raw::RawValue;

/// Closed set of device-type discriminants a descriptor may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum DeviceTypeCode {
    Key = 768,
    Axis = 1536,
    Dpad = 1538,
    Button = 1539,
}

impl DeviceTypeCode {
    pub const ALL: [DeviceTypeCode; 4] = [Self::Key, Self::Axis, Self::Dpad, Self::Button];

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            768 => Some(Self::Key),
            1536 => Some(Self::Axis),
            1538 => Some(Self::Dpad),
            1539 => Some(Self::Button),
            _ => None,
        }
    }

    /// Normalize a raw discriminant at the boundary. Text codes such as
    /// `"1538"` are coerced to numbers before lookup.
    pub fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.coerce_integer().and_then(Self::from_code)
    }
}

/// Classification result for the descriptor scheme, including the fallback
/// for absent records and unmapped codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerDeviceType {
    Key,
    Axis,
    Dpad,
    Button,
    #[default]
    Unknown,
}

impl ControllerDeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Key => "Key",
            Self::Axis => "Axis",
            Self::Dpad => "Dpad",
            Self::Button => "Button",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<Option<DeviceTypeCode>> for ControllerDeviceType {
    fn from(code: Option<DeviceTypeCode>) -> Self {
        match code {
            Some(DeviceTypeCode::Key) => Self::Key,
            Some(DeviceTypeCode::Axis) => Self::Axis,
            Some(DeviceTypeCode::Dpad) => Self::Dpad,
            Some(DeviceTypeCode::Button) => Self::Button,
            None => Self::Unknown,
        }
    }
}

impl fmt::Display for ControllerDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a descriptor by its `type` code. Absent descriptors and unmapped
/// codes are `Unknown`.
pub fn controller_device_type(descriptor: Option<&InputDescriptor>) -> ControllerDeviceType {
    descriptor
        .and_then(InputDescriptor::device_type)
        .into()
}

/// Name of the descriptor's device type, as shown next to a binding.
pub fn controller_device_type_name(descriptor: Option<&InputDescriptor>) -> &'static str {
    controller_device_type(descriptor).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_lookup() {
        for code in DeviceTypeCode::ALL {
            assert_eq!(DeviceTypeCode::from_code(i64::from(code.code())), Some(code));
        }
    }

    #[test]
    fn documented_codes_have_fixed_values() {
        assert_eq!(DeviceTypeCode::Key.code(), 768);
        assert_eq!(DeviceTypeCode::Axis.code(), 1536);
        assert_eq!(DeviceTypeCode::Dpad.code(), 1538);
        assert_eq!(DeviceTypeCode::Button.code(), 1539);
    }

    #[test]
    fn raw_codes_are_normalized_once() {
        assert_eq!(
            DeviceTypeCode::from_raw(&RawValue::from("1538")),
            Some(DeviceTypeCode::Dpad)
        );
        assert_eq!(
            DeviceTypeCode::from_raw(&RawValue::from(1539)),
            Some(DeviceTypeCode::Button)
        );
        assert_eq!(DeviceTypeCode::from_raw(&RawValue::from("Key")), None);
        assert_eq!(DeviceTypeCode::from_raw(&RawValue::from(1537)), None);
    }

    #[test]
    fn classifier_names_every_documented_code() {
        let cases = [
            (768, "Key"),
            (1536, "Axis"),
            (1538, "Dpad"),
            (1539, "Button"),
        ];
        for (code, name) in cases {
            let descriptor = InputDescriptor::with_type(code);
            assert_eq!(controller_device_type_name(Some(&descriptor)), name);
        }
    }

    #[test]
    fn classifier_falls_back_to_unknown() {
        assert_eq!(controller_device_type_name(None), "Unknown");
        assert_eq!(
            controller_device_type(Some(&InputDescriptor::default())),
            ControllerDeviceType::Unknown
        );
        assert_eq!(
            controller_device_type(Some(&InputDescriptor::with_type(9999))),
            ControllerDeviceType::Unknown
        );
    }
}
