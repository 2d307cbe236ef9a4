extern crate serde;

use self::serde::{Serialize, Deserialize};

use crate::CaCodeError;
use crate::constants::{CODE_LENGTH, NUM_SATELLITES};
use crate::lfsr::{self, NUM_STAGES};

/// One GPS satellite, identified by the PRN signal number it broadcasts (1-32)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SatelliteId(pub usize);

impl SatelliteId {

	pub fn new(id:usize) -> Result<Self, CaCodeError> {
		if id >= 1 && id <= NUM_SATELLITES {
			Ok(Self(id))
		} else {
			Err(CaCodeError::InvalidConfiguration("SV id must be in 1-32"))
		}
	}

	pub fn all() -> impl Iterator<Item = SatelliteId> {
		(1..=NUM_SATELLITES).map(SatelliteId)
	}

}

/// The pair of G2 output taps that selects one satellite's code out of the Gold code
/// family; positions are 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapConfiguration {
	pub positions: [usize; 2],
}

impl TapConfiguration {

	// The standardized table never contains a duplicate or out-of-range pair, so this
	// only matters for configurations constructed outside of it
	pub fn new(a:usize, b:usize) -> Result<Self, CaCodeError> {
		if a < 1 || a > NUM_STAGES || b < 1 || b > NUM_STAGES {
			Err(CaCodeError::InvalidConfiguration("G2 tap positions must be in 1-10"))
		} else if a == b {
			Err(CaCodeError::InvalidConfiguration("G2 tap positions must be distinct"))
		} else {
			Ok(Self{ positions: [a, b] })
		}
	}

}

pub type ChipSequence = [bool; CODE_LENGTH];

// G1 = X^10 + X^3 + 1, common to every satellite
pub const G1_FEEDBACK_TAPS:[usize; 2] = [3, 10];
pub const G1_OUTPUT_TAPS:[usize; 1] = [10];

// G2 = X^10 + X^9 + X^8 + X^6 + X^3 + X^2 + 1; its output taps vary per satellite
pub const G2_FEEDBACK_TAPS:[usize; 6] = [2, 3, 6, 8, 9, 10];

// Given in IS-GPS-200L, Table 3-Ia (code phase assignments).  "The G2i sequence is a G2
// sequence selectively delayed by pre-assigned number of chips, thereby generating a set
// of different C/A-codes."  Picking off two stages of the G2 register and adding them
// modulo 2 is what implements that selectable delay.  There's no pattern to recover
// here; the assignments are standardized and this table has to match them exactly, which
// is what the verify module checks.
const CODE_PHASE_ASSIGNMENTS:[TapConfiguration; NUM_SATELLITES] = [
	TapConfiguration{ positions: [2,  6] },		// PRN 01
	TapConfiguration{ positions: [3,  7] },		// PRN 02
	TapConfiguration{ positions: [4,  8] },		// PRN 03
	TapConfiguration{ positions: [5,  9] },		// PRN 04
	TapConfiguration{ positions: [1,  9] },		// PRN 05
	TapConfiguration{ positions: [2, 10] },		// PRN 06
	TapConfiguration{ positions: [1,  8] },		// PRN 07
	TapConfiguration{ positions: [2,  9] },		// PRN 08
	TapConfiguration{ positions: [3, 10] },		// PRN 09
	TapConfiguration{ positions: [2,  3] },		// PRN 10
	TapConfiguration{ positions: [3,  4] },		// PRN 11
	TapConfiguration{ positions: [5,  6] },		// PRN 12
	TapConfiguration{ positions: [6,  7] },		// PRN 13
	TapConfiguration{ positions: [7,  8] },		// PRN 14
	TapConfiguration{ positions: [8,  9] },		// PRN 15
	TapConfiguration{ positions: [9, 10] },		// PRN 16
	TapConfiguration{ positions: [1,  4] },		// PRN 17
	TapConfiguration{ positions: [2,  5] },		// PRN 18
	TapConfiguration{ positions: [3,  6] },		// PRN 19
	TapConfiguration{ positions: [4,  7] },		// PRN 20
	TapConfiguration{ positions: [5,  8] },		// PRN 21
	TapConfiguration{ positions: [6,  9] },		// PRN 22
	TapConfiguration{ positions: [1,  3] },		// PRN 23
	TapConfiguration{ positions: [4,  6] },		// PRN 24
	TapConfiguration{ positions: [5,  7] },		// PRN 25
	TapConfiguration{ positions: [6,  8] },		// PRN 26
	TapConfiguration{ positions: [7,  9] },		// PRN 27
	TapConfiguration{ positions: [8, 10] },		// PRN 28
	TapConfiguration{ positions: [1,  6] },		// PRN 29
	TapConfiguration{ positions: [2,  7] },		// PRN 30
	TapConfiguration{ positions: [3,  8] },		// PRN 31
	TapConfiguration{ positions: [4,  9] },		// PRN 32
];

pub fn tap_configuration(sv:SatelliteId) -> Result<TapConfiguration, CaCodeError> {
	if sv.0 >= 1 && sv.0 <= NUM_SATELLITES {
		Ok(CODE_PHASE_ASSIGNMENTS[sv.0 - 1])
	} else {
		Err(CaCodeError::InvalidConfiguration("SV id must be in 1-32"))
	}
}

/// Generates the 1023-chip Gold code selected by the given G2 output taps, per
/// IS-GPS-200L 3.3.2.3 (C/A-code generation).  Both registers start from the all-ones
/// state, so the first chip of every assigned code is 1.  The result depends on nothing
/// but the taps; generating twice gives bit-identical output.
pub fn generate_chip_sequence(taps:&TapConfiguration) -> ChipSequence {

	let mut g1_register:[bool; NUM_STAGES] = [true; NUM_STAGES];
	let mut g2_register:[bool; NUM_STAGES] = [true; NUM_STAGES];

	let mut ca:ChipSequence = [false; CODE_LENGTH];
	for chip in ca.iter_mut() {
		let g1:bool = lfsr::advance(&mut g1_register, &G1_FEEDBACK_TAPS, &G1_OUTPUT_TAPS);
		let g2:bool = lfsr::advance(&mut g2_register, &G2_FEEDBACK_TAPS, &taps.positions);
		*chip = g1 ^ g2;
	}
	ca
}
