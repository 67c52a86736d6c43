// crates/calibcorr-core/src/detid/coord.rs

use std::fmt;

use crate::detid::codec;
use crate::detid::layout::{CANONICAL, SUBDET_MASK};
use crate::error::{CalibError, Result};

/// Decoded HCAL channel position.
///
/// Values built through [`HcalCoord::new`] fit the canonical field widths.
/// Values produced by [`codec::decode`] carry whatever the id held, which for
/// a legacy id can include a depth wider than the canonical field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HcalCoord {
    pub subdet: u8,
    pub ieta: i32,
    pub iphi: u16,
    pub depth: u8,
}

impl HcalCoord {
    pub const MAX_SUBDET: u8 = SUBDET_MASK as u8;
    pub const MAX_ABS_IETA: u32 = CANONICAL.eta_mask;
    pub const MAX_IPHI: u16 = CANONICAL.phi_mask as u16;
    pub const MAX_DEPTH: u8 = CANONICAL.depth_mask as u8;

    pub fn new(subdet: u8, ieta: i32, iphi: u16, depth: u8) -> Result<Self> {
        if subdet > Self::MAX_SUBDET {
            return Err(CalibError::Coord(format!(
                "subdet out of range: {} (max {})",
                subdet,
                Self::MAX_SUBDET
            )));
        }
        if ieta.unsigned_abs() > Self::MAX_ABS_IETA {
            return Err(CalibError::Coord(format!(
                "ieta out of range: {} (|ieta| max {})",
                ieta,
                Self::MAX_ABS_IETA
            )));
        }
        if iphi > Self::MAX_IPHI {
            return Err(CalibError::Coord(format!(
                "iphi out of range: {} (max {})",
                iphi,
                Self::MAX_IPHI
            )));
        }
        if depth > Self::MAX_DEPTH {
            return Err(CalibError::Coord(format!(
                "depth out of range: {} (max {})",
                depth,
                Self::MAX_DEPTH
            )));
        }
        Ok(Self { subdet, ieta, iphi, depth })
    }

    /// +1 for positive eta, -1 otherwise (including eta 0).
    #[inline]
    pub fn zside(&self) -> i32 {
        if self.ieta > 0 {
            1
        } else {
            -1
        }
    }

    /// Canonical packed id.
    #[inline]
    pub fn encode(&self) -> u32 {
        codec::encode(self.subdet as i32, self.ieta, self.iphi as i32, self.depth as i32)
    }
}

impl fmt::Display for HcalCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sub {} eta {} phi {} depth {}",
            self.subdet, self.ieta, self.iphi, self.depth
        )
    }
}
