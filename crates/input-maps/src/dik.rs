//! DirectInput key codes as stored by the simulator for keyboard bindings.
//!
//! Each entry pairs a `DIK_*` name with its DirectInput scan code and the
//! Windows virtual-key code of the same key. Keys without a virtual-key
//! equivalent carry `0` there.

use crate::native::{NativeControllerRecord, NativeDeviceType, rfactor_controller_device_type};

/// One row of the DirectInput key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DikEntry {
    pub name: &'static str,
    pub scan_code: u8,
    pub virtual_key: u8,
}

impl DikEntry {
    const fn new(name: &'static str, scan_code: u8, virtual_key: u8) -> Self {
        Self {
            name,
            scan_code,
            virtual_key,
        }
    }
}

pub const DIK_TABLE: &[DikEntry] = &[
    DikEntry::new("DIK_ESCAPE", 0x01, 0x1B),
    DikEntry::new("DIK_1", 0x02, 0x31),
    DikEntry::new("DIK_2", 0x03, 0x32),
    DikEntry::new("DIK_3", 0x04, 0x33),
    DikEntry::new("DIK_4", 0x05, 0x34),
    DikEntry::new("DIK_5", 0x06, 0x35),
    DikEntry::new("DIK_6", 0x07, 0x36),
    DikEntry::new("DIK_7", 0x08, 0x37),
    DikEntry::new("DIK_8", 0x09, 0x38),
    DikEntry::new("DIK_9", 0x0A, 0x39),
    DikEntry::new("DIK_0", 0x0B, 0x30),
    DikEntry::new("DIK_MINUS", 0x0C, 0xBD),
    DikEntry::new("DIK_EQUALS", 0x0D, 0xB8),
    DikEntry::new("DIK_BACK", 0x0E, 0x08),
    DikEntry::new("DIK_TAB", 0x0F, 0x09),
    DikEntry::new("DIK_Q", 0x10, 0x51),
    DikEntry::new("DIK_W", 0x11, 0x57),
    DikEntry::new("DIK_E", 0x12, 0x45),
    DikEntry::new("DIK_R", 0x13, 0x52),
    DikEntry::new("DIK_T", 0x14, 0x54),
    DikEntry::new("DIK_Y", 0x15, 0x59),
    DikEntry::new("DIK_U", 0x16, 0x55),
    DikEntry::new("DIK_I", 0x17, 0x49),
    DikEntry::new("DIK_O", 0x18, 0x4F),
    DikEntry::new("DIK_P", 0x19, 0x50),
    DikEntry::new("DIK_LBRACKET", 0x1A, 0xDB),
    DikEntry::new("DIK_RBRACKET", 0x1B, 0xDD),
    DikEntry::new("DIK_RETURN", 0x1C, 0x0D),
    DikEntry::new("DIK_LCONTROL", 0x1D, 0x11),
    DikEntry::new("DIK_A", 0x1E, 0x41),
    DikEntry::new("DIK_S", 0x1F, 0x53),
    DikEntry::new("DIK_D", 0x20, 0x44),
    DikEntry::new("DIK_F", 0x21, 0x46),
    DikEntry::new("DIK_G", 0x22, 0x47),
    DikEntry::new("DIK_H", 0x23, 0x48),
    DikEntry::new("DIK_J", 0x24, 0x4A),
    DikEntry::new("DIK_K", 0x25, 0x4B),
    DikEntry::new("DIK_L", 0x26, 0x4C),
    DikEntry::new("DIK_SEMICOLON", 0x27, 0xBA),
    DikEntry::new("DIK_APOSTROPHE", 0x28, 0xC0),
    DikEntry::new("DIK_GRAVE", 0x29, 0xDF),
    DikEntry::new("DIK_LSHIFT", 0x2A, 0xA0),
    DikEntry::new("DIK_BACKSLASH", 0x2B, 0xDC),
    DikEntry::new("DIK_Z", 0x2C, 0x5A),
    DikEntry::new("DIK_X", 0x2D, 0x58),
    DikEntry::new("DIK_C", 0x2E, 0x43),
    DikEntry::new("DIK_V", 0x2F, 0x56),
    DikEntry::new("DIK_B", 0x30, 0x42),
    DikEntry::new("DIK_N", 0x31, 0x4E),
    DikEntry::new("DIK_M", 0x32, 0x4D),
    DikEntry::new("DIK_COMMA", 0x33, 0xBC),
    DikEntry::new("DIK_PERIOD", 0x34, 0xBE),
    DikEntry::new("DIK_SLASH", 0x35, 0xBF),
    DikEntry::new("DIK_RSHIFT", 0x36, 0xA1),
    DikEntry::new("DIK_MULTIPLY", 0x37, 0x6A),
    DikEntry::new("DIK_LMENU", 0x38, 0x12),
    DikEntry::new("DIK_SPACE", 0x39, 0x20),
    DikEntry::new("DIK_CAPITAL", 0x3A, 0x14),
    DikEntry::new("DIK_F1", 0x3B, 0x70),
    DikEntry::new("DIK_F2", 0x3C, 0x71),
    DikEntry::new("DIK_F3", 0x3D, 0x72),
    DikEntry::new("DIK_F4", 0x3E, 0x73),
    DikEntry::new("DIK_F5", 0x3F, 0x74),
    DikEntry::new("DIK_F6", 0x40, 0x75),
    DikEntry::new("DIK_F7", 0x41, 0x76),
    DikEntry::new("DIK_F8", 0x42, 0x77),
    DikEntry::new("DIK_F9", 0x43, 0x78),
    DikEntry::new("DIK_F10", 0x44, 0x79),
    DikEntry::new("DIK_NUMLOCK", 0x45, 0x90),
    DikEntry::new("DIK_SCROLL", 0x46, 0x91),
    DikEntry::new("DIK_NUMPAD7", 0x47, 0x67),
    DikEntry::new("DIK_NUMPAD8", 0x48, 0x68),
    DikEntry::new("DIK_NUMPAD9", 0x49, 0x69),
    DikEntry::new("DIK_SUBTRACT", 0x4A, 0x6D),
    DikEntry::new("DIK_NUMPAD4", 0x4B, 0x64),
    DikEntry::new("DIK_NUMPAD5", 0x4C, 0x65),
    DikEntry::new("DIK_NUMPAD6", 0x4D, 0x66),
    DikEntry::new("DIK_ADD", 0x4E, 0x6B),
    DikEntry::new("DIK_NUMPAD1", 0x4F, 0x61),
    DikEntry::new("DIK_NUMPAD2", 0x50, 0x62),
    DikEntry::new("DIK_NUMPAD3", 0x51, 0x63),
    DikEntry::new("DIK_NUMPAD0", 0x52, 0x60),
    DikEntry::new("DIK_DECIMAL", 0x53, 0x6E),
    DikEntry::new("DIK_F11", 0x57, 0x7A),
    DikEntry::new("DIK_F12", 0x58, 0x7B),
    DikEntry::new("DIK_F13", 0x64, 0x7C),
    DikEntry::new("DIK_F14", 0x65, 0x7D),
    DikEntry::new("DIK_F15", 0x66, 0x7E),
    DikEntry::new("DIK_KANA", 0x70, 0x00),
    DikEntry::new("DIK_CONVERT", 0x79, 0x00),
    DikEntry::new("DIK_NOCONVERT", 0x7B, 0x00),
    DikEntry::new("DIK_YEN", 0x7D, 0x00),
    DikEntry::new("DIK_NUMPADEQUALS", 0x8D, 0x00),
    DikEntry::new("DIK_CIRCUMFLEX", 0x90, 0x00),
    DikEntry::new("DIK_AT", 0x91, 0x00),
    DikEntry::new("DIK_COLON", 0x92, 0x00),
    DikEntry::new("DIK_UNDERLINE", 0x93, 0x00),
    DikEntry::new("DIK_KANJI", 0x94, 0x00),
    DikEntry::new("DIK_STOP", 0x95, 0x00),
    DikEntry::new("DIK_AX", 0x96, 0x00),
    DikEntry::new("DIK_UNLABELED", 0x97, 0x00),
    DikEntry::new("DIK_NUMPADENTER", 0x9C, 0x0D),
    DikEntry::new("DIK_RCONTROL", 0x9D, 0x00),
    DikEntry::new("DIK_NUMPADCOMMA", 0xB3, 0x00),
    DikEntry::new("DIK_DIVIDE", 0xB5, 0x6F),
    DikEntry::new("DIK_SYSRQ", 0xB7, 0x91),
    DikEntry::new("DIK_RMENU", 0xB8, 0x00),
    DikEntry::new("DIK_PAUSE", 0xC5, 0x13),
    DikEntry::new("DIK_HOME", 0xC7, 0x24),
    DikEntry::new("DIK_UP", 0xC8, 0x26),
    DikEntry::new("DIK_PRIOR", 0xC9, 0x21),
    DikEntry::new("DIK_LEFT", 0xCB, 0x25),
    DikEntry::new("DIK_RIGHT", 0xCD, 0x27),
    DikEntry::new("DIK_END", 0xCF, 0x23),
    DikEntry::new("DIK_DOWN", 0xD0, 0x28),
    DikEntry::new("DIK_NEXT", 0xD1, 0x22),
    DikEntry::new("DIK_INSERT", 0xD2, 0x2D),
    DikEntry::new("DIK_DELETE", 0xD3, 0x2E),
    DikEntry::new("DIK_LWIN", 0xDB, 0x5B),
    DikEntry::new("DIK_RWIN", 0xDC, 0x5D),
    DikEntry::new("DIK_APPS", 0xDD, 0x00),
    DikEntry::new("DIK_POWER", 0xDE, 0x00),
    DikEntry::new("DIK_SLEEP", 0xDF, 0x00),
];

fn hex(code: u32) -> String {
    format!("0x{code:02x}")
}

/// Resolve a simulator scan code to its `DIK_*` name. Codes outside the table
/// render as lower-case hex, e.g. `0x7f`.
pub fn rf_keycode_to_dik(code: u32) -> String {
    DIK_TABLE
        .iter()
        .find(|entry| u32::from(entry.scan_code) == code)
        .map_or_else(|| hex(code), |entry| entry.name.to_string())
}

/// Resolve a Windows virtual-key code to the first `DIK_*` name producing it.
/// Code 0 matches the first row without a virtual key (`DIK_KANA`).
pub fn keycode_to_dik(code: u32) -> String {
    DIK_TABLE
        .iter()
        .find(|entry| u32::from(entry.virtual_key) == code)
        .map_or_else(|| hex(code), |entry| entry.name.to_string())
}

/// Scan code for a `DIK_*` name.
pub fn dik_scan_code(name: &str) -> Option<u8> {
    DIK_TABLE
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.scan_code)
}

/// `DIK_*` name of a simulator-native keyboard binding. Records that do not
/// classify as keys, or carry no usable scan code, have no key name.
pub fn native_key_name(record: &NativeControllerRecord) -> Option<String> {
    if rfactor_controller_device_type(record) != NativeDeviceType::Key {
        return None;
    }
    let code = record.element(1)?.as_integer()?;
    u32::try_from(code).ok().map(rf_keycode_to_dik)
}
