// crates/calibcorr-core/src/detid/codec.rs

use tracing::debug;

use crate::detid::coord::HcalCoord;
use crate::detid::layout::{
    Layout, CANONICAL, CANONICAL_FLAG, FAMILY_HCAL, FAMILY_SHIFT, SUBDET_HB, SUBDET_HE,
    SUBDET_MASK, SUBDET_SHIFT, SUBDET_UNSET,
};

/// Pack a channel into the canonical layout.
///
/// Fields are masked to their widths, never rejected: an out-of-range `iphi`
/// or `depth` silently wraps. The eta sign bit is set only for `ieta > 0`, so
/// `ieta == 0` encodes like a non-negative value without sign.
///
/// Use [`HcalCoord::new`] when the inputs should be range-checked first.
pub fn encode(subdet: i32, ieta: i32, iphi: i32, depth: i32) -> u32 {
    let mut id = (FAMILY_HCAL << FAMILY_SHIFT) | (((subdet as u32) & SUBDET_MASK) << SUBDET_SHIFT);
    id |= CANONICAL_FLAG;
    id |= ((depth as u32) & CANONICAL.depth_mask) << CANONICAL.depth_shift;
    let magnitude = ieta.unsigned_abs() & CANONICAL.eta_mask;
    id |= magnitude << CANONICAL.eta_shift;
    if ieta > 0 {
        id |= CANONICAL.sign_bit;
    }
    id |= (iphi as u32) & CANONICAL.phi_mask;
    id
}

/// Encode with the subdetector fixed to HE. The table loader keys every row
/// this way.
#[inline]
pub fn encode_he(ieta: i32, iphi: i32, depth: i32) -> u32 {
    encode(SUBDET_HE as i32, ieta, iphi, depth)
}

/// Decode either encoding into its raw fields.
pub fn decode(id: u32) -> HcalCoord {
    Layout::of(id).unpack(id)
}

/// Rewrite any id (legacy or canonical) into the canonical encoding.
///
/// A missing subdetector is inferred from the eta/depth position: HE when
/// `|ieta| > 16`, or `|ieta| == 16` with `depth > 2`; HB otherwise.
pub fn normalize(id: u32) -> u32 {
    normalize_traced(id, false).0
}

/// [`normalize`], also returning the coordinates the canonical id was built
/// from. With `trace` set, a rewritten id is logged at debug level.
pub fn normalize_traced(id: u32, trace: bool) -> (u32, HcalCoord) {
    let mut coord = decode(id);
    if coord.subdet == SUBDET_UNSET {
        coord.subdet = infer_subdet(coord.ieta, coord.depth);
    }
    let out = coord.encode();
    if trace && out != id {
        debug!("Correct Id {:x} to {:x} ({})", id, out, coord);
    }
    (out, coord)
}

#[inline]
fn infer_subdet(ieta: i32, depth: u8) -> u8 {
    let aeta = ieta.unsigned_abs();
    if aeta > 16 || (aeta == 16 && depth > 2) {
        SUBDET_HE
    } else {
        SUBDET_HB
    }
}
