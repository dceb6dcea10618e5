#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Small extract of the NYC Service opportunities file. Rows 4 and 5 are
/// broken on purpose (missing start date, unparseable start date) and there
/// is a blank line in between.
pub const SAMPLE_CSV: &str = "\
opportunity_id,title,start_date_date,end_date_date,locality,category_desc,Latitude,Longitude,summary,org_title,recurrence_type,extra
4996,Park Cleanup,2011-08-20,2011-08-20,Brooklyn,Environment,40.6782,-73.9442,Clean the park,Green NYC,onetime,x
,Beach Day,2011-05-01,2011-05-01,,,,,,,,
5001,Tutoring,08/01/2011 12:00:00 AM,12/31/2011 12:00:00 AM,Bronx,Education,40.8448,-73.8648,Help students,Read Ahead,ongoing,

5002,No Start,,2011-09-01,Queens,Education,40.7,-73.8,,,,
5003,Bad Date,someday,2011-09-01,Queens,Education,40.7,-73.8,,,,
";

pub fn rvo() -> Command {
    cargo_bin_cmd!("rvolunteer")
}

/// Temp file path unique to a test; any previous file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvolunteer.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write SAMPLE_CSV to a temp file and return its path.
pub fn sample_csv_file(name: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, SAMPLE_CSV).expect("write sample csv");
    path
}
