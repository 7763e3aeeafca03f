use super::{Ecef, Ellipsoid, Geodetic, geodetic_to_ecef};

/// Local South-East-Zenith coordinates (kilometers).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sez {
    pub south: f64,
    pub east: f64,
    pub zenith: f64,
}

impl Sez {
    pub fn new(south: f64, east: f64, zenith: f64) -> Self {
        Self {
            south,
            east,
            zenith,
        }
    }

    pub fn norm(self) -> f64 {
        (self.south * self.south + self.east * self.east + self.zenith * self.zenith).sqrt()
    }
}

/// Rotate a topocentric SEZ displacement into the ECEF basis.
///
/// The matrix is the transpose of the ECEF to SEZ rotation at `(lat_rad, lon_rad)`, so the
/// displacement's length is preserved.
pub fn sez_to_ecef_offset(lat_rad: f64, lon_rad: f64, sez: Sez) -> Ecef {
    let sin_lat = lat_rad.sin();
    let cos_lat = lat_rad.cos();
    let sin_lon = lon_rad.sin();
    let cos_lon = lon_rad.cos();

    let dx = cos_lon * sin_lat * sez.south + cos_lon * cos_lat * sez.zenith - sin_lon * sez.east;
    let dy = sin_lon * sin_lat * sez.south + sin_lon * cos_lat * sez.zenith + cos_lon * sez.east;
    let dz = -cos_lat * sez.south + sin_lat * sez.zenith;

    Ecef::new(dx, dy, dz)
}

/// Place an ECEF displacement at an observer's ECEF position.
pub fn compose(observer: Ecef, offset: Ecef) -> Ecef {
    observer + offset
}

/// Absolute ECEF position of a point given in the SEZ frame of `origin`.
pub fn sez_to_ecef(sez: Sez, origin: Geodetic, ellipsoid: &Ellipsoid) -> Ecef {
    let origin_ecef = geodetic_to_ecef(origin, ellipsoid);
    let offset = sez_to_ecef_offset(origin.lat_rad, origin.lon_rad, sez);
    compose(origin_ecef, offset)
}


#[cfg(test)]
mod proptests {
    use super::{Sez, sez_to_ecef, sez_to_ecef_offset};
    use crate::math::{Ecef, Ellipsoid, Geodetic, geodetic_to_ecef};
    use proptest::prelude::*;

    proptest! {
        /// The rotation never changes the displacement's length.
        #[test]
        fn prop_rotation_preserves_magnitude(
            lat in -10.0f64..10.0,
            lon in -20.0f64..20.0,
            south in -1e4f64..1e4,
            east in -1e4f64..1e4,
            zenith in -1e4f64..1e4,
        ) {
            let sez = Sez::new(south, east, zenith);
            let rotated = sez_to_ecef_offset(lat, lon, sez);
            let expected = sez.norm();
            prop_assert!((rotated.norm() - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        /// A zero displacement lands exactly on the observer.
        #[test]
        fn prop_zero_offset_identity(
            lat_deg in -90.0f64..90.0,
            lon_deg in -180.0f64..360.0,
            height_km in -10.0f64..1000.0,
        ) {
            let origin = Geodetic::from_degrees(lat_deg, lon_deg, height_km);
            let zero = Sez::new(0.0, 0.0, 0.0);
            let offset = sez_to_ecef_offset(origin.lat_rad, origin.lon_rad, zero);
            prop_assert_eq!(offset.norm(), 0.0);
            let ecef = sez_to_ecef(zero, origin, &Ellipsoid::REFERENCE);
            prop_assert_eq!(ecef, geodetic_to_ecef(origin, &Ellipsoid::REFERENCE));
        }

        /// Longitude is only meaningful modulo a full turn.
        #[test]
        fn prop_longitude_is_periodic(
            lat_deg in -90.0f64..90.0,
            lon_deg in -180.0f64..180.0,
            zenith in -50.0f64..50.0,
        ) {
            let a = sez_to_ecef(
                Sez::new(1.0, -2.0, zenith),
                Geodetic::from_degrees(lat_deg, lon_deg, 0.0),
                &Ellipsoid::REFERENCE,
            );
            let b = sez_to_ecef(
                Sez::new(1.0, -2.0, zenith),
                Geodetic::from_degrees(lat_deg, lon_deg + 360.0, 0.0),
                &Ellipsoid::REFERENCE,
            );
            let diff: Ecef = a - b;
            prop_assert!(diff.norm() <= 1e-8);
        }
    }
}
