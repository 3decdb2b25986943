//! Settings snapshots: binding id -> raw record maps delivered as JSON.

use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::descriptor::InputDescriptor;
use crate::device_type::{ControllerDeviceType, controller_device_type};
use crate::dik::native_key_name;
use crate::error::SnapshotError;
use crate::label::{NOT_SET, controller_value_name};
use crate::native::{NativeControllerRecord, NativeDeviceType, rfactor_controller_device_type};

/// Which raw encoding a snapshot was read from. Selects the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSource {
    /// Backend input descriptors keyed by device-type code.
    #[default]
    Descriptors,
    /// Records from the simulator's `Controller.json`.
    Native,
}

impl SnapshotSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descriptors => "descriptors",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapshotSource {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("descriptors") {
            Ok(Self::Descriptors)
        } else if s.eq_ignore_ascii_case("native") {
            Ok(Self::Native)
        } else {
            Err(SnapshotError::UnknownSource(s.to_string()))
        }
    }
}

/// Classification and display label of one binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingLabel {
    pub id: String,
    pub device_type: &'static str,
    pub label: String,
}

impl BindingLabel {
    pub fn is_set(&self) -> bool {
        self.label != NOT_SET
    }
}

fn log_summary(source: SnapshotSource, labels: &[BindingLabel]) {
    let unset = labels.iter().filter(|label| !label.is_set()).count();
    debug!(
        source = source.as_str(),
        bindings = labels.len(),
        unset,
        "labeled settings snapshot"
    );
}

/// Backend descriptors keyed by binding id, ordered by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsSnapshot {
    bindings: BTreeMap<String, InputDescriptor>,
}

impl SettingsSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, id: impl Into<String>, descriptor: InputDescriptor) {
        self.bindings.insert(id.into(), descriptor);
    }

    pub fn get(&self, id: &str) -> Option<&InputDescriptor> {
        self.bindings.get(id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputDescriptor)> {
        self.bindings.iter().map(|(id, d)| (id.as_str(), d))
    }

    /// Device type of a binding; ids missing from the snapshot are `Unknown`.
    pub fn device_type(&self, id: &str) -> ControllerDeviceType {
        controller_device_type(self.get(id))
    }

    pub fn labels(&self) -> Vec<BindingLabel> {
        let labels: Vec<BindingLabel> = self
            .iter()
            .map(|(id, descriptor)| {
                let device_type = controller_device_type(Some(descriptor));
                let label = controller_value_name(descriptor);
                trace!(id, %device_type, %label, "labeled binding");
                BindingLabel {
                    id: id.to_string(),
                    device_type: device_type.as_str(),
                    label,
                }
            })
            .collect();
        log_summary(SnapshotSource::Descriptors, &labels);
        labels
    }
}

/// Simulator-native controller records keyed by control name, ordered by name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeSnapshot {
    records: BTreeMap<String, NativeControllerRecord>,
}

impl NativeSnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, id: impl Into<String>, record: NativeControllerRecord) {
        self.records.insert(id.into(), record);
    }

    pub fn get(&self, id: &str) -> Option<&NativeControllerRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &NativeControllerRecord)> {
        self.records.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// Device type of a record; ids missing from the snapshot are `Unknown`.
    pub fn device_type(&self, id: &str) -> NativeDeviceType {
        self.get(id)
            .map_or(NativeDeviceType::Unknown, rfactor_controller_device_type)
    }

    /// Keyboard records are labeled with their DirectInput key name; the
    /// native encoding has no display name for controller inputs.
    pub fn labels(&self) -> Vec<BindingLabel> {
        let labels: Vec<BindingLabel> = self
            .iter()
            .map(|(id, record)| {
                let device_type = rfactor_controller_device_type(record);
                let label = native_key_name(record).unwrap_or_else(|| NOT_SET.to_string());
                trace!(id, %device_type, %label, "labeled native record");
                BindingLabel {
                    id: id.to_string(),
                    device_type: device_type.as_str(),
                    label,
                }
            })
            .collect();
        log_summary(SnapshotSource::Native, &labels);
        labels
    }
}

/// Decode `json` as a snapshot of the given source and label every entry.
pub fn label_snapshot(
    source: SnapshotSource,
    json: &str,
) -> Result<Vec<BindingLabel>, SnapshotError> {
    match source {
        SnapshotSource::Descriptors => Ok(SettingsSnapshot::from_json(json)?.labels()),
        SnapshotSource::Native => Ok(NativeSnapshot::from_json(json)?.labels()),
    }
}
