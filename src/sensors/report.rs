//! Fixed-width console table
//!
//! One header line, then one row per tick. Columns of a sensor without a
//! new sample are left blank so the table stays aligned.

use nalgebra::Vector3;

use super::reading::{magnitude, SensorsReading};

/// Column header matching [`format_row`]
pub const HEADER: &str = "   °C    kPa    m | °/s  (x)  (y)  (z) |  m/s²    (x)    (y)    (z) |   µT   (x)   (y)   (z)";

/// µT per gauss
const MICROTESLA_PER_GAUSS: f64 = 100.0;

/// Table header line
pub fn header() -> &'static str {
    HEADER
}

/// Format one tick as a table row, without trailing newline
///
/// Angular rate is shown in °/s and the magnetic field in µT.
pub fn format_row(reading: &SensorsReading, sea_level_pa: f64) -> String {
    let mut row = String::new();

    match reading.barometer {
        Some(baro) => row.push_str(&format!(
            "{} {:6.2} {} | ",
            signed(baro.temperature(), 5, 1),
            baro.pressure() / 1000.0,
            signed(baro.altitude(sea_level_pa), 4, 0)
        )),
        None => row.push_str(&format!("{:5} {:6} {:4} | ", "", "", "")),
    }

    match reading.gyro {
        Some(rate) => {
            let dps = rate.map(f64::to_degrees);
            row.push_str(&format!("{:3.0} {} | ", magnitude(&dps), axes(&dps, 4, 0)));
        }
        None => row.push_str(&format!("{:3} {:4} {:4} {:4} | ", "", "", "", "")),
    }

    match reading.accel {
        Some(acc) => row.push_str(&format!("{:5.2} {} | ", magnitude(&acc), axes(&acc, 6, 2))),
        None => row.push_str(&format!("{:5} {:6} {:6} {:6} | ", "", "", "", "")),
    }

    match reading.mag {
        Some(field) => {
            let ut = field * MICROTESLA_PER_GAUSS;
            row.push_str(&format!("{:4.1} {}", magnitude(&ut), axes(&ut, 5, 1)));
        }
        None => row.push_str(&format!("{:4} {:5} {:5} {:5}", "", "", "", "")),
    }

    row
}

fn axes(v: &Vector3<f64>, width: usize, precision: usize) -> String {
    format!(
        "{} {} {}",
        signed(v.x, width, precision),
        signed(v.y, width, precision),
        signed(v.z, width, precision)
    )
}

/// Right-aligned number with a blank in place of a plus sign
fn signed(value: f64, width: usize, precision: usize) -> String {
    let digits = format!("{value:.precision$}");
    let digits = if digits.starts_with('-') {
        digits
    } else {
        format!(" {digits}")
    };
    format!("{digits:>width$}")
}
