//! Command-line driver: parses observer and SEZ arguments and prints the ECEF position.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fmt;
use std::io::{self, Write};
use std::num::ParseFloatError;

use foundation::math::{Ecef, Ellipsoid, Geodetic, Sez, sez_to_ecef};
use tracing::debug;

/// Program name used in the usage text when `argv[0]` is missing.
pub const DEFAULT_PROGRAM: &str = "sez_to_ecef";

/// Positional arguments, in order.
pub const ARG_NAMES: [&str; 6] = ["o_lat_deg", "o_lon_deg", "o_hae_km", "s_km", "e_km", "z_km"];

#[derive(Debug)]
pub enum CliError {
    /// `source` is `None` when the argument is not valid Unicode.
    Parse {
        name: &'static str,
        value: String,
        source: Option<ParseFloatError>,
    },
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Parse {
                name,
                value,
                source: Some(source),
            } => write!(f, "invalid {name} {value:?}: {source}"),
            CliError::Parse {
                name,
                value,
                source: None,
            } => write!(f, "invalid {name} {value:?}: not valid unicode"),
            CliError::Io(err) => write!(f, "write output: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse {
                source: Some(source),
                ..
            } => Some(source),
            CliError::Parse { source: None, .. } => None,
            CliError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} {}", ARG_NAMES.join(" "))
}

/// Observer ECEF position plus the rotated SEZ displacement, on the reference ellipsoid.
pub fn convert(observer: Geodetic, offset: Sez) -> Ecef {
    let ecef = sez_to_ecef(offset, observer, &Ellipsoid::REFERENCE);
    debug!("ecef position: {ecef:?}");
    ecef
}

/// Run the converter over `args` (including the program name) and write results to `out`.
///
/// Any argument count other than six prints the usage line and succeeds.
pub fn run<S: AsRef<OsStr>, W: Write>(args: &[S], out: &mut W) -> Result<(), CliError> {
    let program = args
        .first()
        .map_or(Cow::Borrowed(DEFAULT_PROGRAM), |p| p.as_ref().to_string_lossy());
    let rest = args.get(1..).unwrap_or(&[]);

    let Ok(raw) = <&[S; 6]>::try_from(rest) else {
        debug!("expected 6 positional arguments, got {}", rest.len());
        writeln!(out, "{}", usage(&program))?;
        return Ok(());
    };

    let mut values = [0.0; 6];
    for ((slot, name), value) in values.iter_mut().zip(ARG_NAMES).zip(raw) {
        *slot = parse_arg(name, value.as_ref())?;
    }
    let [lat_deg, lon_deg, height_km, south, east, zenith] = values;
    debug!("observer lat={lat_deg}deg lon={lon_deg}deg hae={height_km}km");
    debug!("sez offset s={south}km e={east}km z={zenith}km");

    let observer = Geodetic::from_degrees(lat_deg, lon_deg, height_km);
    let ecef = convert(observer, Sez::new(south, east, zenith));

    writeln!(out, "{}", ecef.x)?;
    writeln!(out, "{}", ecef.y)?;
    writeln!(out, "{}", ecef.z)?;
    Ok(())
}

fn parse_arg(name: &'static str, value: &OsStr) -> Result<f64, CliError> {
    let Some(text) = value.to_str() else {
        return Err(CliError::Parse {
            name,
            value: value.to_string_lossy().into_owned(),
            source: None,
        });
    };
    text.trim().parse::<f64>().map_err(|source| CliError::Parse {
        name,
        value: text.to_string(),
        source: Some(source),
    })
}
