use std::collections::HashMap;

use crate::CaCodeError;
use crate::ca_code::{ChipSequence, SatelliteId};
use crate::constants::NUM_SATELLITES;

// Expected start of each satellite's C/A code, written the way IS-GPS-200L Table 3-Ia
// publishes it: a decimal-looking number whose digits are read as octal, covering the
// first 10 chips of the code.  Every entry begins with the digit 1 because every
// assigned code begins with a 1 chip.  A single wrong tap anywhere in the code phase
// assignment table still produces a perfectly plausible-looking Gold code, and a code
// that doesn't match one of these markers will simply never correlate with the real
// satellite, so this is the only place a transcription error can be caught.
const REFERENCE_MARKERS:[u16; NUM_SATELLITES] = [
	1440,	// PRN 01
	1620,	// PRN 02
	1710,	// PRN 03
	1744,	// PRN 04
	1133,	// PRN 05
	1455,	// PRN 06
	1131,	// PRN 07
	1454,	// PRN 08
	1626,	// PRN 09
	1504,	// PRN 10
	1642,	// PRN 11
	1750,	// PRN 12
	1764,	// PRN 13
	1772,	// PRN 14
	1775,	// PRN 15
	1776,	// PRN 16
	1156,	// PRN 17
	1467,	// PRN 18
	1633,	// PRN 19
	1715,	// PRN 20
	1746,	// PRN 21
	1763,	// PRN 22
	1063,	// PRN 23
	1706,	// PRN 24
	1743,	// PRN 25
	1761,	// PRN 26
	1770,	// PRN 27
	1774,	// PRN 28
	1127,	// PRN 29
	1453,	// PRN 30
	1625,	// PRN 31
	1712,	// PRN 32
];

pub fn reference_markers() -> HashMap<SatelliteId, u16> {
	SatelliteId::all().map(|sv| (sv, REFERENCE_MARKERS[sv.0 - 1])).collect()
}

/// Checks one generated sequence against its published octal marker.  The leading digit
/// of the marker and the leading chip of the sequence must both be 1; after dropping
/// those, each remaining marker digit is compared against the next three chips read as a
/// big-endian octal digit.
pub fn verify_one(sv:SatelliteId, seq:&ChipSequence, marker:u16) -> Result<(), CaCodeError> {

	let digits:Vec<u8> = marker.to_string().bytes().map(|b| b - b'0').collect();
	if digits[0] != 1 {
		return Err(CaCodeError::MalformedReferenceMarker(sv));
	}
	if !seq[0] {
		return Err(CaCodeError::MalformedGeneratedSequence(sv));
	}

	// Skip the leading 1 on both sides
	for (digit_idx, expected) in digits[1..].iter().enumerate() {
		let chips = &seq[(1 + digit_idx*3)..(1 + digit_idx*3 + 3)];
		let actual:u8 = chips.iter().fold(0u8, |acc, bit| (acc << 1) | (*bit as u8));
		if actual != *expected {
			return Err(CaCodeError::SequenceMismatch{ sv, digit_idx, expected: *expected, actual });
		}
	}

	Ok(())
}

/// Checks every generated sequence against the published markers.  This runs exactly
/// once, before any replica signal is handed out; a failure here means a standardized
/// table in this crate is wrong and there's nothing to retry.
pub fn verify_all(sequences:&HashMap<SatelliteId, ChipSequence>, markers:&HashMap<SatelliteId, u16>) -> Result<(), CaCodeError> {
	for sv in SatelliteId::all() {
		let seq = sequences.get(&sv).ok_or(CaCodeError::InvalidConfiguration("missing chip sequence for SV"))?;
		let marker = markers.get(&sv).ok_or(CaCodeError::InvalidConfiguration("missing reference marker for SV"))?;
		verify_one(sv, seq, *marker)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {

	use super::*;
	use crate::ca_code::{self, TapConfiguration};
	use crate::constants::CODE_LENGTH;

	fn generate_all() -> HashMap<SatelliteId, ChipSequence> {
		SatelliteId::all().map(|sv| {
			(sv, ca_code::generate_chip_sequence(&ca_code::tap_configuration(sv).unwrap()))
		}).collect()
	}

	#[test]
	fn all_32_satellites_verify_against_the_published_markers() {
		assert_eq!(verify_all(&generate_all(), &reference_markers()), Ok(()));
	}

	#[test]
	fn prn_23_verifies_against_marker_1063() {
		let seq = ca_code::generate_chip_sequence(&TapConfiguration::new(1, 3).unwrap());
		assert_eq!(verify_one(SatelliteId(23), &seq, 1063), Ok(()));
	}

	#[test]
	fn marker_not_starting_with_one_is_malformed() {
		let seq = ca_code::generate_chip_sequence(&ca_code::tap_configuration(SatelliteId(1)).unwrap());
		assert_eq!(verify_one(SatelliteId(1), &seq, 440), Err(CaCodeError::MalformedReferenceMarker(SatelliteId(1))));
	}

	#[test]
	fn sequence_not_starting_with_one_is_malformed() {
		let seq:ChipSequence = [false; CODE_LENGTH];
		assert_eq!(verify_one(SatelliteId(1), &seq, 1440), Err(CaCodeError::MalformedGeneratedSequence(SatelliteId(1))));
	}

	#[test]
	fn mismatch_reports_the_digit_and_both_values() {
		let mut seq = ca_code::generate_chip_sequence(&ca_code::tap_configuration(SatelliteId(1)).unwrap());
		// Flip one chip inside the third octal digit (chips 7-9)
		seq[7] = !seq[7];
		match verify_one(SatelliteId(1), &seq, 1440) {
			Err(CaCodeError::SequenceMismatch{ sv, digit_idx, expected, actual }) => {
				assert_eq!(sv, SatelliteId(1));
				assert_eq!(digit_idx, 2);
				assert_eq!(expected, 0);
				assert_eq!(actual, 4);
			},
			other => panic!("expected a sequence mismatch, got {:?}", other),
		}
	}

	#[test]
	fn any_single_tap_transcription_error_is_caught() {
		// Swap in every wrong-but-plausible tap pair for every satellite, one at a time,
		// and make sure the pass always pins the failure on the corrupted satellite.
		// Every distinct tap pair selects a distinct G2 delay, and distinct delays give
		// distinct 10-chip prefixes, so the marker check has to fire (or the corrupted
		// code starts with 0 and fails even earlier).
		let markers = reference_markers();
		let baseline = generate_all();

		for sv in SatelliteId::all() {
			let good_taps = ca_code::tap_configuration(sv).unwrap();
			for slot in 0..2 {
				for wrong_position in 1..=10 {
					let mut taps = good_taps;
					taps.positions[slot] = wrong_position;
					if taps == good_taps || taps.positions[0] == taps.positions[1] {
						continue;
					}

					let mut sequences = baseline.clone();
					sequences.insert(sv, ca_code::generate_chip_sequence(&taps));

					match verify_all(&sequences, &markers) {
						Err(CaCodeError::SequenceMismatch{ sv: reported, .. }) => assert_eq!(reported, sv),
						Err(CaCodeError::MalformedGeneratedSequence(reported)) => assert_eq!(reported, sv),
						other => panic!("corrupting SV {:?} taps to {:?} went undetected: {:?}", sv, taps, other),
					}
				}
			}
		}
	}

}
