extern crate num_complex;
extern crate serde;

use std::collections::HashMap;
use std::sync::OnceLock;

use self::num_complex::Complex;
use self::serde::{Serialize, Deserialize};

use crate::CaCodeError;
use crate::ca_code::{self, ChipSequence, SatelliteId};
use crate::constants::{CODE_LENGTH, PRN_REPETITIONS_PER_SEC, SEC_PER_CHIP};
use crate::verify;

/// One satellite's replica PRN signal: the C/A code with its range shifted from {0,1}
/// to {+1,-1} for BPSK, addressable by chip index 0-1022
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicaSignal {
	pub inner: Vec<i8>,
}

/// Maps a chip sequence into the +/-1 range used by the correlators: chip 0 becomes +1
/// and chip 1 becomes -1 (i.e. 1 - 2*chip).  Antenna samples after carrier wipeoff vary
/// over [-1, 1], so this is the convention under which a matching code phase correlates
/// positively.
pub fn to_replica_signal(seq:&ChipSequence) -> ReplicaSignal {
	ReplicaSignal{ inner: seq.iter().map(|chip| 1 - 2*(*chip as i8)).collect() }
}

/// Inverse of `to_replica_signal`; fails on any value other than +/-1 or on a length
/// other than 1023
pub fn to_chip_sequence(signal:&ReplicaSignal) -> Result<ChipSequence, CaCodeError> {
	if signal.inner.len() != CODE_LENGTH {
		return Err(CaCodeError::InvalidConfiguration("replica signal must hold exactly 1023 chips"));
	}
	let mut seq:ChipSequence = [false; CODE_LENGTH];
	for (chip, value) in seq.iter_mut().zip(signal.inner.iter()) {
		*chip = match value {
			 1 => false,
			-1 => true,
			 _ => return Err(CaCodeError::InvalidConfiguration("replica signal values must be +/-1")),
		};
	}
	Ok(seq)
}

/// The full set of verified replica signals, one per satellite.  Construction generates
/// all 32 codes and runs the marker verification before anything is exposed; either
/// every satellite passes or the whole table is refused.  Once built it's never mutated,
/// so sharing it across acquisition workers needs no synchronization.
#[derive(Debug, Clone)]
pub struct ReplicaTable {
	signals: HashMap<SatelliteId, ReplicaSignal>,
}

impl ReplicaTable {

	pub fn generate() -> Result<Self, CaCodeError> {

		let mut sequences:HashMap<SatelliteId, ChipSequence> = HashMap::new();
		for sv in SatelliteId::all() {
			sequences.insert(sv, ca_code::generate_chip_sequence(&ca_code::tap_configuration(sv)?));
		}

		verify::verify_all(&sequences, &verify::reference_markers())?;

		let signals:HashMap<SatelliteId, ReplicaSignal> = sequences.iter()
			.map(|(sv, seq)| (*sv, to_replica_signal(seq)))
			.collect();

		Ok(Self{ signals })
	}

	pub fn get(&self, sv:SatelliteId) -> Option<&ReplicaSignal> {
		self.signals.get(&sv)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&SatelliteId, &ReplicaSignal)> {
		self.signals.iter()
	}

	pub fn len(&self) -> usize { self.signals.len() }

}

/// Process-wide replica table, generated and verified on first access and reused for
/// every call after that.  A verification failure here means a standardized table
/// compiled into this crate is wrong; an unverified replica table would silently break
/// acquisition with no other symptom, so dying immediately is the only sane response.
pub fn get_replica_signals() -> &'static ReplicaTable {
	static TABLE:OnceLock<ReplicaTable> = OnceLock::new();
	TABLE.get_or_init(|| match ReplicaTable::generate() {
		Ok(table) => table,
		Err(e)    => panic!("C/A replica self-verification failed: {:?}", e),
	})
}

/// Resamples a replica signal to a front-end sample rate, holding each chip for the
/// right number of samples; one code period comes out as fs/1000 samples
pub fn sampled_i8(signal:&ReplicaSignal, fs:f64) -> Vec<i8> {
	let samples_per_code:usize = (fs / PRN_REPETITIONS_PER_SEC) as usize;
	let ts:f64 = 1.0 / fs;

	(0..samples_per_code).map(|i| {
		let code_value_idx:usize = ((ts * ((i+1) as f64)) / SEC_PER_CHIP) as usize;
		if code_value_idx >= CODE_LENGTH { signal.inner[CODE_LENGTH-1] } else { signal.inner[code_value_idx] }
	}).collect()
}

/// Same as `sampled_i8` but producing the complex form consumed by FFT-based correlators
pub fn sampled_complex(signal:&ReplicaSignal, fs:f64) -> Vec<Complex<f64>> {
	sampled_i8(signal, fs).iter().map(|x| Complex{ re: *x as f64, im: 0.0 }).collect()
}

#[cfg(test)]
mod tests {

	use super::*;

	#[test]
	fn replica_values_are_exactly_plus_or_minus_one() {
		let table = ReplicaTable::generate().unwrap();
		assert_eq!(table.len(), 32);
		for (_, signal) in table.iter() {
			assert_eq!(signal.inner.len(), CODE_LENGTH);
			assert!(signal.inner.iter().all(|x| *x == 1 || *x == -1));
			// Every code starts with chip 1, i.e. -1 after the range shift
			assert_eq!(signal.inner[0], -1);
		}
	}

	#[test]
	fn domain_adapter_round_trips() {
		let seq = ca_code::generate_chip_sequence(&ca_code::tap_configuration(SatelliteId(9)).unwrap());
		let signal = to_replica_signal(&seq);
		let recovered = to_chip_sequence(&signal).unwrap();
		assert!(seq.iter().eq(recovered.iter()));
	}

	#[test]
	fn inverse_adapter_rejects_bad_input() {
		assert!(to_chip_sequence(&ReplicaSignal{ inner: vec![1; 10] }).is_err());
		assert!(to_chip_sequence(&ReplicaSignal{ inner: vec![2; CODE_LENGTH] }).is_err());
	}

	#[test]
	fn global_table_is_generated_once() {
		let first = get_replica_signals();
		let second = get_replica_signals();
		assert!(std::ptr::eq(first, second));
		assert!(first.get(SatelliteId(32)).is_some());
		assert!(first.get(SatelliteId(33)).is_none());
	}

	#[test]
	fn sampled_replica_covers_one_code_period() {
		let table = ReplicaTable::generate().unwrap();
		let signal = table.get(SatelliteId(1)).unwrap();

		// Two samples per chip
		let sampled = sampled_i8(signal, 2.046e6);
		assert_eq!(sampled.len(), 2046);
		assert!(sampled.iter().all(|x| *x == 1 || *x == -1));
		assert!(sampled.iter().any(|x| *x == 1));
		assert!(sampled.iter().any(|x| *x == -1));

		let complex = sampled_complex(signal, 2.046e6);
		assert_eq!(complex.len(), 2046);
		assert_eq!(complex[0].re, sampled[0] as f64);
		assert_eq!(complex[0].im, 0.0);
	}

}
