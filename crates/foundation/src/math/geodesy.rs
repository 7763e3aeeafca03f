use std::fmt;

use super::Ecef;

/// Reference equatorial radius (kilometers).
pub const R_E_KM: f64 = 6378.1363;
/// Reference first eccentricity.
pub const E_E: f64 = 0.081819221456;

/// Reference ellipsoid described by its equatorial radius and first eccentricity.
///
/// Eccentricity is kept in `[0, 1)` so `1 - e² sin²φ` stays in `(0, 1]` for every latitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ellipsoid {
    equatorial_radius_km: f64,
    eccentricity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EllipsoidError {
    InvalidRadius { radius_km: f64 },
    InvalidEccentricity { eccentricity: f64 },
}

impl fmt::Display for EllipsoidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EllipsoidError::InvalidRadius { radius_km } => {
                write!(f, "equatorial radius must be positive and finite, got {radius_km} km")
            }
            EllipsoidError::InvalidEccentricity { eccentricity } => {
                write!(f, "eccentricity must lie in [0, 1), got {eccentricity}")
            }
        }
    }
}

impl std::error::Error for EllipsoidError {}

impl Ellipsoid {
    /// The fixed WGS-84-like ellipsoid every conversion in this workspace uses.
    pub const REFERENCE: Self = Self {
        equatorial_radius_km: R_E_KM,
        eccentricity: E_E,
    };

    pub fn new(equatorial_radius_km: f64, eccentricity: f64) -> Result<Self, EllipsoidError> {
        if !equatorial_radius_km.is_finite() || equatorial_radius_km <= 0.0 {
            return Err(EllipsoidError::InvalidRadius {
                radius_km: equatorial_radius_km,
            });
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(EllipsoidError::InvalidEccentricity { eccentricity });
        }
        Ok(Self {
            equatorial_radius_km,
            eccentricity,
        })
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    /// `sqrt(1 - e² sin²φ)`, always in `(0, 1]`.
    pub fn denom(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Prime-vertical radius of curvature `C` at the given latitude.
    pub fn prime_vertical_radius_km(&self, lat_rad: f64) -> f64 {
        self.equatorial_radius_km / self.denom(lat_rad)
    }

    /// `C (1 - e²)`, the radius scaling the z component.
    pub fn meridian_scaled_radius_km(&self, lat_rad: f64) -> f64 {
        self.equatorial_radius_km * (1.0 - self.eccentricity_squared()) / self.denom(lat_rad)
    }

    /// Distance from the center to either pole.
    pub fn polar_radius_km(&self) -> f64 {
        self.equatorial_radius_km * (1.0 - self.eccentricity_squared()).sqrt()
    }
}

/// Geodetic coordinates in radians and kilometers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodetic {
    pub lat_rad: f64,
    pub lon_rad: f64,
    pub height_km: f64,
}

impl Geodetic {
    pub fn new(lat_rad: f64, lon_rad: f64, height_km: f64) -> Self {
        Self {
            lat_rad,
            lon_rad,
            height_km,
        }
    }

    pub fn from_degrees(lat_deg: f64, lon_deg: f64, height_km: f64) -> Self {
        Self::new(lat_deg.to_radians(), lon_deg.to_radians(), height_km)
    }
}

/// Closed-form geodetic to ECEF conversion.
///
/// Latitude and longitude are not range-checked; any finite input yields a finite result.
pub fn geodetic_to_ecef(geo: Geodetic, ellipsoid: &Ellipsoid) -> Ecef {
    let sin_lat = geo.lat_rad.sin();
    let cos_lat = geo.lat_rad.cos();
    let sin_lon = geo.lon_rad.sin();
    let cos_lon = geo.lon_rad.cos();

    let c = ellipsoid.prime_vertical_radius_km(geo.lat_rad);
    let s = ellipsoid.meridian_scaled_radius_km(geo.lat_rad);

    let x = (c + geo.height_km) * cos_lat * cos_lon;
    let y = (c + geo.height_km) * cos_lat * sin_lon;
    let z = (s + geo.height_km) * sin_lat;

    Ecef::new(x, y, z)
}
