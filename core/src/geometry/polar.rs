use num_complex::Complex64;

/// Cartesian ground-plane offset to `(rho, phi)`.
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    Complex64::new(x, y).to_polar()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_polar_matches_hypot_and_atan2() {
        let (rho, phi) = to_polar(10.0, 2.0);
        assert!((rho - 10.198_039_027).abs() < 1e-6);
        assert!((phi - 2.0_f64.atan2(10.0)).abs() < 1e-12);
    }

    #[test]
    fn behind_the_sensor_has_obtuse_bearing() {
        let (rho, phi) = to_polar(-3.0, 0.0);
        assert_eq!(rho, 3.0);
        assert!((phi - std::f64::consts::PI).abs() < 1e-12);
    }
}
