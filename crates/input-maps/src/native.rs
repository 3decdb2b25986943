//! Controller records in the simulator's own `Controller.json` encoding.
//!
//! These records carry no device-type code. The first element of `value`
//! tells keyboard keys (`0`) from attached controllers (positive device
//! index), and the second element is the key or control code. The numbers
//! overlap with nothing in [`crate::DeviceTypeCode`] on purpose: the two
//! encodings must never be classified with each other's rules.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::raw::RawValue;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeControllerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RawValue>,
}

impl NativeControllerRecord {
    pub fn with_value(value: impl Into<RawValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Element `index` of the record's `value` sequence.
    pub fn element(&self, index: usize) -> Option<&RawValue> {
        self.value.as_ref()?.element(index)
    }
}

/// Device classes distinguishable in the native encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NativeDeviceType {
    /// Any attached controller; the sub-kind is not encoded.
    Controller,
    Key,
    #[default]
    Unknown,
}

impl NativeDeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "Con",
            Self::Key => "Key",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NativeDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a native record by the sign of `value[0]`.
pub fn rfactor_controller_device_type(record: &NativeControllerRecord) -> NativeDeviceType {
    let Some(first) = record.element(0) else {
        return NativeDeviceType::Unknown;
    };
    if first.as_number().is_some_and(|code| code > 0.0) {
        NativeDeviceType::Controller
    } else if first.as_integer() == Some(0) {
        NativeDeviceType::Key
    } else {
        NativeDeviceType::Unknown
    }
}

/// Name of the native record's device type.
pub fn rfactor_controller_device_type_name(record: &NativeControllerRecord) -> &'static str {
    rfactor_controller_device_type(record).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn sign_of_first_element_selects_type() {
        let cases = [
            (NativeControllerRecord::with_value(vec![5, 12]), "Con"),
            (NativeControllerRecord::with_value(vec![0, 35]), "Key"),
            (NativeControllerRecord::with_value(vec![-1, 35]), "Unknown"),
            (NativeControllerRecord::with_value(Vec::<i32>::new()), "Unknown"),
        ];
        for (record, expected) in cases {
            assert_eq!(rfactor_controller_device_type_name(&record), expected);
        }
    }

    #[test]
    fn missing_or_scalar_value_is_unknown() {
        assert_eq!(
            rfactor_controller_device_type(&NativeControllerRecord::default()),
            NativeDeviceType::Unknown
        );
        assert_eq!(
            rfactor_controller_device_type(&NativeControllerRecord::with_value(true)),
            NativeDeviceType::Unknown
        );
    }

    #[test]
    fn zero_must_be_numeric_for_keys() {
        let text_zero = NativeControllerRecord::with_value(vec!["0"]);
        assert_eq!(rfactor_controller_device_type(&text_zero), NativeDeviceType::Unknown);

        let float_zero = NativeControllerRecord::with_value(vec![0.0, 35.0]);
        assert_eq!(rfactor_controller_device_type(&float_zero), NativeDeviceType::Key);
    }

    #[test]
    fn decodes_controller_json_entry() -> TestResult {
        let json = r#"{
            "name": "Toggle Headlights",
            "value": [0, 35],
            "desc": "rFactor 2 Headlight control key/button"
        }"#;
        let record: NativeControllerRecord = serde_json::from_str(json)?;
        assert_eq!(record.name.as_deref(), Some("Toggle Headlights"));
        assert_eq!(rfactor_controller_device_type(&record), NativeDeviceType::Key);
        Ok(())
    }
}
