//! Raw control-binding records as delivered in a settings snapshot.

use serde::{Deserialize, Serialize};

use crate::device_type::DeviceTypeCode;
use crate::raw::RawValue;

/// One bound control: a keyboard key, axis, button or D-pad.
///
/// Every field is optional. Which fields matter depends on `type`; the
/// others are carried along but never read by the normalizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hat: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

impl InputDescriptor {
    pub fn with_type(code: impl Into<RawValue>) -> Self {
        Self {
            kind: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<RawValue>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_button(mut self, button: impl Into<RawValue>) -> Self {
        self.button = Some(button.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<RawValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_axis(mut self, axis: impl Into<RawValue>) -> Self {
        self.axis = Some(axis.into());
        self
    }

    pub fn with_hat(mut self, hat: impl Into<RawValue>) -> Self {
        self.hat = Some(hat.into());
        self
    }

    /// The normalized device-type code, if `type` names one of the four
    /// known device types.
    pub fn device_type(&self) -> Option<DeviceTypeCode> {
        self.kind.as_ref().and_then(DeviceTypeCode::from_raw)
    }
}
