//! Controller input descriptor normalization for rFactor 2 settings.
//!
//! Control bindings reach the settings UI in two unrelated encodings:
//!
//! - backend [`InputDescriptor`]s, discriminated by a device-type code
//!   (768 key, 1536 axis, 1538 D-pad, 1539 button), and
//! - simulator-native [`NativeControllerRecord`]s from `Controller.json`,
//!   where the sign of the first value element separates keys from
//!   controllers.
//!
//! Each encoding has its own classifier. Both are total: absent or malformed
//! data yields `"Unknown"` or `"Not Set"` rather than an error.
//!
//! ```
//! use rf2_input_maps::{InputDescriptor, controller_device_type_name, controller_value_name};
//!
//! let hat = InputDescriptor::with_type(1538).with_hat("H1").with_value(vec![-1, 1]);
//! assert_eq!(controller_device_type_name(Some(&hat)), "Dpad");
//! assert_eq!(controller_value_name(&hat), "H1 LeftUp");
//! ```

#![deny(static_mut_refs)]

pub mod descriptor;
pub mod device_type;
pub mod dik;
pub mod error;
pub mod label;
pub mod native;
pub mod raw;
pub mod snapshot;

pub use descriptor::InputDescriptor;
pub use device_type::{
    ControllerDeviceType, DeviceTypeCode, controller_device_type, controller_device_type_name,
};
pub use dik::{DIK_TABLE, DikEntry, dik_scan_code, keycode_to_dik, native_key_name, rf_keycode_to_dik};
pub use error::SnapshotError;
pub use label::{NOT_SET, controller_value_name};
pub use native::{
    NativeControllerRecord, NativeDeviceType, rfactor_controller_device_type,
    rfactor_controller_device_type_name,
};
pub use raw::RawValue;
pub use snapshot::{BindingLabel, NativeSnapshot, SettingsSnapshot, SnapshotSource, label_snapshot};
