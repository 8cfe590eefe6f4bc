// End-to-end runs over on-disk chamber tables:
//   load -> aggregate -> combined table written through a sink.

use std::{fs, path::Path};

use chamberstats::{
    Chamber, ChamberError, Config, DemographicGroup, DiskTables, OUTPUT_FILE, TableSource,
    load, run_batch, write_summaries,
};

const HEADER: &str = "ID,Dem,Rep,Asian,Pacific,Black,Hispanic,White,Native";

fn write_table(root: &Path, chamber: Chamber, file: &str, rows: &[&str]) {
    let dir = root.join(format!("state{chamber}"));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), format!("{HEADER}\n{}\n", rows.join("\n"))).unwrap();
}

fn two_district_rows() -> [&'static str; 4] {
    [
        "Statewide,900,1100,0.2,0.2,0.2,0.2,0.2,0.2",
        "District 1,600,400,0.2,0.2,0.2,0.2,0.2,0.2",
        "District 2,300,700,0.2,0.2,0.2,0.2,0.2,0.2",
        "Average,0.45,0.55,0.2,0.2,0.2,0.2,0.2,0.2",
    ]
}

#[test]
fn two_district_chamber_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), Chamber::Upper, "upper_CO_2022.csv", &two_district_rows());

    let source = DiskTables::new(dir.path());
    let report = run_batch(&source, &Config::default());
    assert_eq!(report.summaries.len(), 1);

    let summary = &report.summaries[0];
    assert_eq!(summary.zid, "CO_upper");
    assert_eq!(summary.total_members, 2);
    assert_eq!(summary.safe_dem_seats, 1);
    assert_eq!(summary.safe_rep_seats, 1);
    assert_eq!(summary.toss_up_seats, 0);
    for group in DemographicGroup::ALL {
        assert_eq!(summary.group(group).seats, 0, "{group}");
    }
    assert_eq!(summary.coalition_seats, 2);
    assert_eq!(summary.dem_vap, 0.45);
    assert_eq!(summary.group(DemographicGroup::Aapi).vote_share, 0.4);
}

#[test]
fn missing_chambers_are_absent_from_output() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), Chamber::Upper, "upper_CO_2022.csv", &two_district_rows());
    write_table(dir.path(), Chamber::Lower, "lower_WA_2022.csv", &two_district_rows());

    let source = DiskTables::new(dir.path());
    let err = load(&source, "CA", Chamber::Upper).unwrap_err();
    assert!(matches!(err, ChamberError::NotFound { .. }));

    let report = run_batch(&source, &Config::default());
    let out_dir = dir.path().join("out");
    let mut sink = DiskTables::new(&out_dir);
    write_summaries(&mut sink, OUTPUT_FILE, &report.summaries).unwrap();

    let written = fs::read_to_string(out_dir.join(OUTPUT_FILE)).unwrap();
    let lines = written.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ZID,"));
    assert!(lines[1].starts_with("CO_upper,"));
    assert!(lines[2].starts_with("WA_lower,"));
    assert!(!written.contains("CA_upper"));

    // WA lower districts elect two members each.
    let wa = report.summaries.iter().find(|s| s.zid == "WA_lower").unwrap();
    assert_eq!(wa.total_members, 4);
    assert_eq!(wa.safe_dem_seats + wa.safe_rep_seats + wa.toss_up_seats, wa.total_members);
}

#[test]
fn config_file_overrides_seat_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), Chamber::Lower, "lower_AZ_2022.csv", &two_district_rows());
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "seat_defaults": { "lower": { "AZ": 2 } }, "safe_threshold": 0.65 }"#).unwrap();

    let config = Config::from_json_file(&config_path).unwrap();
    let source = DiskTables::new(dir.path());
    let report = run_batch(&source, &config);

    let az = &report.summaries[0];
    assert_eq!(az.zid, "AZ_lower");
    assert_eq!(az.total_members, 4);
    assert_eq!(az.safe_dem_seats, 0);  // 60% no longer clears 65%
    assert_eq!(az.safe_rep_seats, 2);
    assert_eq!(az.toss_up_seats, 2);
}

#[test]
fn source_lists_only_table_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), Chamber::Upper, "upper_CO_2022.csv", &two_district_rows());
    let source = DiskTables::new(dir.path());
    assert_eq!(source.list("stateupper").unwrap(), vec!["upper_CO_2022.csv"]);
}
