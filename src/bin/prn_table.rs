
extern crate clap;
extern crate colored;
extern crate gps_ca_prn;
extern crate serde;
extern crate serde_json;

use std::fs::File;

use clap::{Arg, App};
use colored::*;
use serde::{Serialize, Deserialize};

use gps_ca_prn::ca_code::SatelliteId;
use gps_ca_prn::replica::ReplicaTable;
use gps_ca_prn::verify;

#[derive(Debug, Serialize, Deserialize)]
struct PrnRecord {
	pub prn:usize,
	pub marker_octal:u16,
	pub chips:Vec<i8>,
}

fn main() {

	let matches = App::new("GPS L1 CA PRN Table")
		.version("0.1.0")
		.author("John Stanford (johnwstanford@gmail.com)")
		.about("Generates and self-verifies the 32 L1 CA replica PRN signals, printing each code's leading octal digits next to the IS-GPS-200L markers")
		.arg(Arg::with_name("prn")
			.short("p").long("prn")
			.help("Only show this SV (1-32)")
			.takes_value(true))
		.arg(Arg::with_name("json")
			.short("j").long("json")
			.help("Write the full +/-1 replica table to this file as JSON")
			.takes_value(true))
		.get_matches();

	let opt_prn:Option<usize> = matches.value_of("prn").map(|s| s.parse().expect("Unable to parse the PRN number"));

	let table:ReplicaTable = match ReplicaTable::generate() {
		Ok(table) => table,
		Err(e) => {
			eprintln!("{} {:?}", "Replica self-verification failed:".red().bold(), e);
			std::process::exit(1);
		},
	};

	let markers = verify::reference_markers();

	let mut records:Vec<PrnRecord> = vec![];
	for sv in SatelliteId::all() {
		if let Some(prn) = opt_prn {
			if sv.0 != prn { continue; }
		}

		let signal = table.get(sv).expect("Verified table is missing an SV");
		let marker = markers[&sv];

		println!("SV {:02}: starts with {} (expected {}) {}",
			sv.0, leading_octal_digits(&signal.inner), marker,
			"OK".green().bold());

		records.push(PrnRecord{ prn: sv.0, marker_octal: marker, chips: signal.inner.clone() });
	}

	if let Some(fname) = matches.value_of("json") {
		let file = File::create(fname).expect("Unable to create the output file");
		serde_json::to_writer_pretty(file, &records).expect("Unable to serialize the replica table");
		eprintln!("Wrote {} records to {}", records.len(), fname);
	}

}

// First 10 chips rendered the way the ICD publishes them: a leading 1 followed by three
// octal digits; a chip of -1 in the replica domain is a 1 chip in the code domain
fn leading_octal_digits(chips:&[i8]) -> String {
	let bit = |idx:usize| if chips[idx] == -1 { 1u8 } else { 0u8 };

	let mut ans = format!("{}", bit(0));
	for digit_idx in 0..3 {
		let start = 1 + digit_idx*3;
		ans.push_str(&format!("{}", (bit(start) << 2) | (bit(start+1) << 1) | bit(start+2)));
	}
	ans
}
