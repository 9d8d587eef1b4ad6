use crate::interface::Detection;
use crate::prelude::DetectionError;

/// Checks that a detection can be encoded without producing non-finite output.
pub fn validate_detection(detection: &Detection) -> Result<(), DetectionError> {
    let finite_fields = [
        ("center.x", detection.center.x),
        ("center.y", detection.center.y),
        ("center.z", detection.center.z),
        ("size.length", detection.size.length),
        ("size.width", detection.size.width),
        ("size.height", detection.size.height),
        ("yaw", detection.yaw),
        ("score", f64::from(detection.score)),
    ];
    for (field, value) in finite_fields {
        if !value.is_finite() {
            return Err(DetectionError::NonFinite { field });
        }
    }

    let sizes = [
        ("size.length", detection.size.length),
        ("size.width", detection.size.width),
        ("size.height", detection.size.height),
    ];
    for (field, value) in sizes {
        if value < 0.0 {
            return Err(DetectionError::NegativeSize { field });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> Detection {
        Detection::new([10.0, 2.0, 0.0], [4.0, 2.0, 1.5], 0.0, 0.9, 2)
    }

    #[test]
    fn healthy_detection_passes() {
        assert_eq!(validate_detection(&healthy()), Ok(()));
    }

    #[test]
    fn non_finite_fields_are_named() {
        let mut detection = healthy();
        detection.center.y = f64::NAN;
        assert_eq!(
            validate_detection(&detection),
            Err(DetectionError::NonFinite { field: "center.y" })
        );

        let mut detection = healthy();
        detection.yaw = f64::INFINITY;
        assert_eq!(
            validate_detection(&detection),
            Err(DetectionError::NonFinite { field: "yaw" })
        );

        let mut detection = healthy();
        detection.score = f32::NAN;
        assert_eq!(
            validate_detection(&detection),
            Err(DetectionError::NonFinite { field: "score" })
        );
    }

    #[test]
    fn negative_size_is_rejected() {
        let mut detection = healthy();
        detection.size.width = -0.1;
        assert_eq!(
            validate_detection(&detection),
            Err(DetectionError::NegativeSize {
                field: "size.width"
            })
        );
    }
}
