mod probe;

pub(crate) use probe::{ProbeReport, output_probe_json, print_probe_table};
