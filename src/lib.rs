use crate::ca_code::SatelliteId;

pub mod ca_code;
pub mod constants;
pub mod lfsr;
pub mod replica;
pub mod verify;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CaCodeError {
	// A reference marker in the built-in table doesn't begin with the octal digit 1; the
	// table itself was transcribed incorrectly
	MalformedReferenceMarker(SatelliteId),
	// A generated chip sequence doesn't begin with 1; bad taps or shift direction
	MalformedGeneratedSequence(SatelliteId),
	// A generated chip sequence disagrees with IS-GPS-200L at a specific octal digit
	SequenceMismatch{ sv:SatelliteId, digit_idx:usize, expected:u8, actual:u8 },
	InvalidConfiguration(&'static str),
}
