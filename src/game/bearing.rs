use crate::model::LatLng;

/// Initial great-circle bearing from `origin` to `dest`, measured clockwise
/// in degrees from due north.
///
/// The result is truncated to a whole degree before being normalized into
/// `[0, 360)`, so bearings are always integral. When `origin` and `dest`
/// coincide the bearing falls out of `atan2(0, 0)` and is 0 by convention,
/// not an error.
pub fn initial_bearing(origin: LatLng, dest: LatLng) -> f32 {
    let origin_lat = origin.latitude.to_radians();
    let origin_long = origin.longitude.to_radians();
    let dest_lat = dest.latitude.to_radians();
    let dest_long = dest.longitude.to_radians();

    let delta_long = dest_long - origin_long;
    let y = delta_long.sin() * dest_lat.cos();
    let x = origin_lat.cos() * dest_lat.sin()
        - origin_lat.sin() * dest_lat.cos() * delta_long.cos();
    let bearing = y.atan2(x);

    ((bearing.to_degrees() as i32 + 360) % 360) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions_from_equator() {
        let origin = LatLng::new(0.0, 0.0);

        assert_eq!(initial_bearing(origin, LatLng::new(1.0, 0.0)), 0.0);
        assert_eq!(initial_bearing(origin, LatLng::new(0.0, 1.0)), 90.0);
        assert_eq!(initial_bearing(origin, LatLng::new(-1.0, 0.0)), 180.0);
        assert_eq!(initial_bearing(origin, LatLng::new(0.0, -1.0)), 270.0);
    }

    #[test]
    fn test_fractional_degrees_are_truncated_not_rounded() {
        // The exact bearing here is 44.9956 degrees; truncation toward zero
        // drops the fraction rather than rounding it up.
        let bearing = initial_bearing(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0));
        assert_eq!(bearing, 44.0);
    }

    #[test]
    fn test_westward_bearings_normalize_into_range() {
        // atan2 yields -44.9956 degrees here; truncation toward zero gives
        // -44, and adding 360 before the modulo lands on 316 rather than 315.
        let bearing = initial_bearing(LatLng::new(0.0, 0.0), LatLng::new(1.0, -1.0));
        assert_eq!(bearing, 316.0);
    }

    #[test]
    fn test_coincident_points_yield_zero() {
        let point = LatLng::new(49.2606, -123.246);
        assert_eq!(initial_bearing(point, point), 0.0);
    }

    #[test]
    fn test_bearing_is_always_integral_and_in_range() {
        let origin = LatLng::new(49.2606, -123.246);
        let destinations = [
            LatLng::new(49.2827, -123.1207),
            LatLng::new(48.4284, -123.3656),
            LatLng::new(49.1666, -123.9401),
            LatLng::new(50.1163, -122.9574),
        ];

        for dest in destinations {
            let bearing = initial_bearing(origin, dest);
            assert!((0.0..360.0).contains(&bearing), "bearing {} out of range", bearing);
            assert_eq!(bearing.fract(), 0.0);
        }
    }
}
