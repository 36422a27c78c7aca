use crate::{
    constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY},
    error::Error,
    prelude::Epoch,
};

/// Oldest supported [Epoch], as MJD (1900-01-01T00:00:00 UTC)
pub const MJD_MIN: f64 = 15020.0;

/// Latest supported [Epoch], as MJD (2100-12-31T00:00:00 UTC)
pub const MJD_MAX: f64 = 88069.0;

/// Builds a new [Epoch] from a Modified Julian Date expressed in UTC days.
/// The date must be finite and lie within [MJD_MIN, MJD_MAX].
pub fn epoch_from_mjd(mjd: f64) -> Result<Epoch, Error> {
    check_mjd(mjd, 0.0)?;
    Ok(Epoch::from_mjd_utc(mjd))
}

/// Verifies this [Epoch] lies within the supported time frame
/// and returns its MJD (UTC days).
pub fn check_epoch(epoch: Epoch) -> Result<f64, Error> {
    let mjd = epoch.to_mjd_utc_days();
    check_mjd(mjd, MJD_ROUNDING_DAYS)?;
    Ok(mjd)
}

/// [Epoch] to MJD conversion does not exactly round trip
const MJD_ROUNDING_DAYS: f64 = 1.0E-9;

fn check_mjd(mjd: f64, slack_days: f64) -> Result<(), Error> {
    if !mjd.is_finite() {
        return Err(Error::NonFinite("epoch"));
    }
    if !(MJD_MIN - slack_days..=MJD_MAX + slack_days).contains(&mjd) {
        return Err(Error::EpochOutOfRange {
            mjd,
            min: MJD_MIN,
            max: MJD_MAX,
        });
    }
    Ok(())
}

/// Julian centuries of TT elapsed since J2000.0
pub(crate) fn julian_centuries_tt(epoch: Epoch) -> f64 {
    (epoch.to_jde_tt_days() - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// UT1 Julian date, from UTC and |UT1-UTC| offset in seconds
pub(crate) fn julian_date_ut1(epoch: Epoch, dut1_s: f64) -> f64 {
    epoch.to_jde_utc_days() + dut1_s / SECONDS_PER_DAY
}
