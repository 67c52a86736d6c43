// crates/calibcorr-core/src/detid/layout.rs

//! Bit layouts of the packed HCAL channel id.
//!
//! Common to both encodings:
//! - bits 28..31: detector family (always 4 for HCAL)
//! - bits 25..27: subdetector
//! - bit 24: canonical flag (0 = legacy, 1 = canonical)
//!
//! The remaining low bits hold depth, eta sign, |eta| and phi, at offsets and
//! widths that differ between the two encodings.

use crate::detid::coord::HcalCoord;

pub const FAMILY_HCAL: u32 = 4;
pub const FAMILY_SHIFT: u32 = 28;

pub const SUBDET_SHIFT: u32 = 25;
pub const SUBDET_MASK: u32 = 0x7;

pub const CANONICAL_FLAG: u32 = 0x0100_0000;

pub const SUBDET_UNSET: u8 = 0;
pub const SUBDET_HB: u8 = 1;
pub const SUBDET_HE: u8 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub depth_shift: u32,
    pub depth_mask: u32,
    pub sign_bit: u32,
    pub eta_shift: u32,
    pub eta_mask: u32,
    pub phi_mask: u32,
}

/// Current wide-field layout.
pub const CANONICAL: Layout = Layout {
    depth_shift: 20,
    depth_mask: 0xF,
    sign_bit: 0x8_0000,
    eta_shift: 10,
    eta_mask: 0x1FF,
    phi_mask: 0x3FF,
};

/// Older narrow-field layout, still found in historical ntuples.
pub const LEGACY: Layout = Layout {
    depth_shift: 14,
    depth_mask: 0x1F,
    sign_bit: 0x2000,
    eta_shift: 7,
    eta_mask: 0x3F,
    phi_mask: 0x3F,
};

impl Layout {
    /// Pick the layout an id was written with, based on its canonical flag.
    #[inline]
    pub fn of(id: u32) -> &'static Layout {
        if is_canonical(id) {
            &CANONICAL
        } else {
            &LEGACY
        }
    }

    /// Read subdetector, signed eta, phi and depth. No fallback is applied to
    /// the subdetector here.
    pub fn unpack(&self, id: u32) -> HcalCoord {
        let magnitude = ((id >> self.eta_shift) & self.eta_mask) as i32;
        let ieta = if id & self.sign_bit != 0 { magnitude } else { -magnitude };
        HcalCoord {
            subdet: subdet_bits(id),
            ieta,
            iphi: (id & self.phi_mask) as u16,
            depth: ((id >> self.depth_shift) & self.depth_mask) as u8,
        }
    }
}

#[inline]
pub fn is_canonical(id: u32) -> bool {
    id & CANONICAL_FLAG != 0
}

#[inline]
pub fn subdet_bits(id: u32) -> u8 {
    ((id >> SUBDET_SHIFT) & SUBDET_MASK) as u8
}
