// Length of each C/A PRN code, in chips
pub const CODE_LENGTH:usize = 1023;

// The satellites repeat the full PRN code 1000 times per second, i.e. the chipping
// rate is 1.023 Mchips/sec
pub const PRN_REPETITIONS_PER_SEC:f64 = 1000.0;
pub const CHIP_RATE_SPS:f64 = 1.023e6;
pub const SEC_PER_CHIP:f64 = 1.0 / CHIP_RATE_SPS;

// Center frequency of the L1 carrier; an SDR front end must be tuned here for the
// C/A replicas to be useful for correlation
pub const L1_FREQ_HZ:f64 = 1575.42e6;

pub const NUM_SATELLITES:usize = 32;
