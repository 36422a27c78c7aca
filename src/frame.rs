use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Supported reference [Frame]s.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Frame {
    /// International Terrestrial Reference System: Earth fixed, rotating.
    #[cfg_attr(feature = "serde", serde(alias = "itrs", alias = "ECEF", alias = "ecef"))]
    ITRS,
    /// Mean Equator Mean Equinox of Date: precessed (no nutation).
    #[cfg_attr(feature = "serde", serde(alias = "memed"))]
    MEMED,
    /// True Equator True Equinox of Date: precessed and nutated.
    #[cfg_attr(feature = "serde", serde(alias = "teted"))]
    TETED,
    /// Geocentric Celestial Reference System, assimilated to
    /// the J2000.0 mean equator and equinox (frame bias is neglected).
    #[cfg_attr(feature = "serde", serde(alias = "gcrs", alias = "J2000", alias = "j2000"))]
    GCRS,
    /// True Equator Mean Equinox, used by SGP4.
    #[cfg_attr(feature = "serde", serde(alias = "teme"))]
    TEME,
}

impl Frame {
    /// All supported [Frame]s.
    pub const ALL: [Self; 5] = [Self::ITRS, Self::MEMED, Self::TETED, Self::GCRS, Self::TEME];

    /// Returns true if this [Frame] does not rotate with the Earth.
    pub fn is_inertial(&self) -> bool {
        !matches!(self, Self::ITRS)
    }
}

impl std::str::FromStr for Frame {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_uppercase();
        let trimmed = s.trim();
        match trimmed {
            "ITRS" | "ITRF" | "ECEF" => Ok(Self::ITRS),
            "MEMED" | "MOD" => Ok(Self::MEMED),
            "TETED" | "TOD" => Ok(Self::TETED),
            "GCRS" | "GCRF" | "J2000" => Ok(Self::GCRS),
            "TEME" => Ok(Self::TEME),
            _ => Err(Error::UnknownFrame(trimmed.to_string())),
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ITRS => write!(f, "ITRS"),
            Self::MEMED => write!(f, "MEMED"),
            Self::TETED => write!(f, "TETED"),
            Self::GCRS => write!(f, "GCRS"),
            Self::TEME => write!(f, "TEME"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Frame;
    use crate::error::{Error, ErrorKind};
    use std::str::FromStr;

    #[test]
    fn frame_parsing() {
        for frame in Frame::ALL {
            let parsed = Frame::from_str(&frame.to_string()).unwrap();
            assert_eq!(parsed, frame);
        }
        assert_eq!(Frame::from_str(" itrs ").unwrap(), Frame::ITRS);
        assert_eq!(Frame::from_str("tod").unwrap(), Frame::TETED);
        assert_eq!(Frame::from_str("J2000").unwrap(), Frame::GCRS);

        let e = Frame::from_str("ECI").unwrap_err();
        assert_eq!(e, Error::UnknownFrame("ECI".to_string()));
        assert_eq!(e.kind(), ErrorKind::InvalidFrame);
    }

    #[test]
    fn inertial_frames() {
        assert!(!Frame::ITRS.is_inertial());
        assert!(Frame::MEMED.is_inertial());
        assert!(Frame::TETED.is_inertial());
        assert!(Frame::GCRS.is_inertial());
        assert!(Frame::TEME.is_inertial());
    }
}
