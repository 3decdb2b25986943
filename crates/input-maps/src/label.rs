//! Display labels for a descriptor's bound value.

use crate::descriptor::InputDescriptor;
use crate::device_type::DeviceTypeCode;
use crate::raw::RawValue;

/// Label for a binding that has nothing usable to show.
pub const NOT_SET: &str = "Not Set";

/// Hat prefix used when a D-pad descriptor carries no hat identifier.
const UNKNOWN_HAT: &str = "Unknown";

/// Render the canonical label for a descriptor's current value.
///
/// Dispatch follows the normalized device type:
///
/// - Key: the key name upper-cased. A key descriptor without a key name falls
///   through to the button rendering below, since both share code 768.
/// - Axis: `"<axis> +"` for positive values, `"<axis> -"` otherwise (zero is
///   negative polarity).
/// - Button: the raw `value`, else the raw `button`, without case changes.
/// - Dpad: `"<hat> "` followed by `Left`/`Right` then `Down`/`Up`, e.g.
///   `"H1 LeftUp"`; a centered hat renders as `"H1 "`.
///
/// Everything else, including unmapped codes and branches with missing
/// fields, renders as [`NOT_SET`]. Never panics.
pub fn controller_value_name(descriptor: &InputDescriptor) -> String {
    let label = match descriptor.device_type() {
        Some(DeviceTypeCode::Key) => key_label(descriptor).or_else(|| button_label(descriptor)),
        Some(DeviceTypeCode::Axis) => axis_label(descriptor),
        Some(DeviceTypeCode::Button) => button_label(descriptor),
        Some(DeviceTypeCode::Dpad) => Some(dpad_label(descriptor)),
        None => None,
    };
    label.unwrap_or_else(|| NOT_SET.to_string())
}

fn present(field: Option<&RawValue>) -> Option<&RawValue> {
    field.filter(|value| !value.is_blank())
}

fn key_label(descriptor: &InputDescriptor) -> Option<String> {
    present(descriptor.key.as_ref()).map(|key| key.to_string().to_uppercase())
}

fn axis_label(descriptor: &InputDescriptor) -> Option<String> {
    let axis = descriptor.axis.as_ref()?;
    let positive = descriptor
        .value
        .as_ref()
        .and_then(RawValue::as_number)
        .is_some_and(|value| value > 0.0);
    let sign = if positive { '+' } else { '-' };
    Some(format!("{axis} {sign}"))
}

fn button_label(descriptor: &InputDescriptor) -> Option<String> {
    present(descriptor.value.as_ref())
        .or(descriptor.button.as_ref())
        .map(RawValue::to_string)
}

fn dpad_label(descriptor: &InputDescriptor) -> String {
    let mut label = match &descriptor.hat {
        Some(hat) => hat.to_string(),
        None => UNKNOWN_HAT.to_string(),
    };
    label.push(' ');

    let direction = |index: usize| {
        descriptor
            .value
            .as_ref()
            .and_then(|value| value.element(index))
            .and_then(RawValue::as_integer)
    };
    match direction(0) {
        Some(-1) => label.push_str("Left"),
        Some(1) => label.push_str("Right"),
        _ => {}
    }
    match direction(1) {
        Some(-1) => label.push_str("Down"),
        Some(1) => label.push_str("Up"),
        _ => {}
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_upper_cased() {
        let descriptor = InputDescriptor::with_type(768).with_key("a");
        assert_eq!(controller_value_name(&descriptor), "A");
    }

    #[test]
    fn key_without_name_uses_button_fallback() {
        let descriptor = InputDescriptor::with_type(768)
            .with_key("")
            .with_value("Num Enter");
        assert_eq!(controller_value_name(&descriptor), "Num Enter");

        let descriptor = InputDescriptor::with_type(768).with_button(42);
        assert_eq!(controller_value_name(&descriptor), "42");

        assert_eq!(
            controller_value_name(&InputDescriptor::with_type(768)),
            NOT_SET
        );
    }

    #[test]
    fn key_fallback_keeps_case() {
        let descriptor = InputDescriptor::with_type(768).with_value("lshift");
        assert_eq!(controller_value_name(&descriptor), "lshift");
    }

    #[test]
    fn axis_polarity() {
        let negative = InputDescriptor::with_type(1536).with_axis("X").with_value(-0.5);
        assert_eq!(controller_value_name(&negative), "X -");

        let zero = InputDescriptor::with_type(1536).with_axis("X").with_value(0);
        assert_eq!(controller_value_name(&zero), "X -");

        let positive = InputDescriptor::with_type(1536).with_axis("Z").with_value(1);
        assert_eq!(controller_value_name(&positive), "Z +");

        let unset = InputDescriptor::with_type(1536).with_axis(2);
        assert_eq!(controller_value_name(&unset), "2 -");
    }

    #[test]
    fn axis_without_name_is_not_set() {
        let descriptor = InputDescriptor::with_type(1536).with_value(1);
        assert_eq!(controller_value_name(&descriptor), NOT_SET);
    }

    #[test]
    fn null_fields_count_as_missing() -> Result<(), serde_json::Error> {
        let axis: InputDescriptor =
            serde_json::from_str(r#"{"type": 1536, "axis": null, "value": -1}"#)?;
        assert_eq!(controller_value_name(&axis), NOT_SET);

        let button: InputDescriptor =
            serde_json::from_str(r#"{"type": 1539, "button": null, "value": null}"#)?;
        assert_eq!(controller_value_name(&button), NOT_SET);
        Ok(())
    }

    #[test]
    fn non_finite_axis_text_is_negative() {
        let descriptor = InputDescriptor::with_type(1536).with_axis("X").with_value("inf");
        assert_eq!(controller_value_name(&descriptor), "X -");
    }

    #[test]
    fn button_prefers_value_over_button() {
        let descriptor = InputDescriptor::with_type(1539)
            .with_value("Button 3")
            .with_button(7);
        assert_eq!(controller_value_name(&descriptor), "Button 3");

        let descriptor = InputDescriptor::with_type(1539).with_button(2);
        assert_eq!(controller_value_name(&descriptor), "2");

        let descriptor = InputDescriptor::with_type(1539).with_value("").with_button("B");
        assert_eq!(controller_value_name(&descriptor), "B");
    }

    #[test]
    fn button_ignores_key_and_axis() {
        let descriptor = InputDescriptor::with_type(1539).with_key("a").with_axis("X");
        assert_eq!(controller_value_name(&descriptor), NOT_SET);
    }

    #[test]
    fn dpad_directions() {
        let diagonal = InputDescriptor::with_type(1538)
            .with_hat("H1")
            .with_value(vec![-1, 1]);
        assert_eq!(controller_value_name(&diagonal), "H1 LeftUp");

        let centered = InputDescriptor::with_type(1538)
            .with_hat("H1")
            .with_value(vec![0, 0]);
        assert_eq!(controller_value_name(&centered), "H1 ");

        let down = InputDescriptor::with_type(1538).with_hat(1).with_value(vec![0, -1]);
        assert_eq!(controller_value_name(&down), "1 Down");

        let right = InputDescriptor::with_type("1538")
            .with_hat(0)
            .with_value(vec![1, 0]);
        assert_eq!(controller_value_name(&right), "0 Right");
    }

    #[test]
    fn dpad_tolerates_missing_fields() {
        let descriptor = InputDescriptor::with_type(1538);
        assert_eq!(controller_value_name(&descriptor), "Unknown ");

        let descriptor = InputDescriptor::with_type(1538).with_hat("H2").with_value(5);
        assert_eq!(controller_value_name(&descriptor), "H2 ");
    }

    #[test]
    fn unmapped_code_is_not_set() {
        assert_eq!(
            controller_value_name(&InputDescriptor::with_type(9999).with_value("x")),
            NOT_SET
        );
        assert_eq!(controller_value_name(&InputDescriptor::default()), NOT_SET);
    }
}
