use crate::constants::CODE_LENGTH;

pub const NUM_STAGES:usize = 10;

/// Advances a 10-stage Fibonacci-form shift register by one step and returns the output
/// bit.  Tap positions are 1-indexed the way IS-GPS-200L draws the registers; note that
/// the GPS document specifies the polynomials in Galois generator form, so taps taken
/// from it have to be translated to this shift direction before they're passed in here.
///
/// The output is the register value at the single output tap, or the modulo-2 sum over
/// all listed output taps.  The feedback is the modulo-2 sum over the feedback taps.
/// After the output and feedback are computed, every stage shifts one position to the
/// right and the feedback lands in position 1.
pub fn advance(register:&mut [bool; NUM_STAGES], feedback_taps:&[usize], output_taps:&[usize]) -> bool {

	let out:bool = if output_taps.len() == 1 {
		register[output_taps[0] - 1]
	} else {
		output_taps.iter().fold(false, |acc, t| acc ^ register[t-1])
	};

	let fb:bool = feedback_taps.iter().fold(false, |acc, t| acc ^ register[t-1]);

	for i in (1..NUM_STAGES).rev() {
		register[i] = register[i-1];
	}
	register[0] = fb;

	out
}

/// Generates one full period of the maximal-length sequence produced by a 10-stage
/// register with the given feedback taps, starting from the all-ones state and reading
/// the output at position 10
pub fn max_len_seq(feedback_taps:&[usize]) -> [bool; CODE_LENGTH] {
	let mut register:[bool; NUM_STAGES] = [true; NUM_STAGES];
	let mut seq:[bool; CODE_LENGTH] = [false; CODE_LENGTH];
	for chip in seq.iter_mut() {
		*chip = advance(&mut register, feedback_taps, &[NUM_STAGES]);
	}
	seq
}
