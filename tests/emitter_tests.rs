use schedule_data::{
    EmitOptions, GeneratorConfig, ScheduleCollection, ScheduleRecord, generate_schedule_data,
    render_schedule_js, save_schedule_to_js,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const SAMPLE_CSV: &str = "\
Grade,Section,Class #,Date,Weekday,Day,Description,Material,Summary
2,B,5,3/5/2024,Tue,10,Fractions,Book p.4,Review
1,A,1,3/1/2024,Fri,1,Números,,Intro \"quoted\"
";

fn record(grade: i64, section: &str, class_number: &str, date: &str, day: i64) -> ScheduleRecord {
    ScheduleRecord {
        grade,
        section: section.into(),
        class_number: class_number.into(),
        date: date.into(),
        weekday: String::new(),
        day,
        description: String::new(),
        material: String::new(),
        summary: String::new(),
    }
}

fn sample_collection() -> ScheduleCollection {
    let mut first = record(1, "A", "1", "2024/03/01", 1);
    first.weekday = "Fri".into();
    first.description = "Café ☕".into();
    let second = record(2, "B", "5", "2024-03-05", 10);
    ScheduleCollection::from_records(vec![second, first])
}

fn write_sample_project(root: &Path) {
    let input = root.join("teacher/authoring/schedule.csv");
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(input, SAMPLE_CSV).unwrap();
}

#[test]
fn rendered_file_matches_expected_layout() {
    let text = render_schedule_js(&sample_collection(), &EmitOptions::default()).unwrap();
    let expected = r#"// AUTO-GENERATED FILE
// Generated from teacher/authoring/schedule.csv
// Do not edit manually.
window.SCHEDULE_DATA = [
  {
    "Grade": 1,
    "Section": "A",
    "Class #": "1",
    "Date": "2024/03/01",
    "Weekday": "Fri",
    "Day": 1,
    "Description": "Café ☕",
    "Material": "",
    "Summary": ""
  },
  {
    "Grade": 2,
    "Section": "B",
    "Class #": "5",
    "Date": "2024-03-05",
    "Weekday": "",
    "Day": 10,
    "Description": "",
    "Material": "",
    "Summary": ""
  }
];
"#;
    assert_eq!(text, expected);
}

#[test]
fn custom_global_name_and_source_are_used() {
    let options = EmitOptions {
        global_name: "globalThis.CLASSES".into(),
        source_description: "fall.csv".into(),
    };
    let text = render_schedule_js(&ScheduleCollection::default(), &options).unwrap();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines[1], "// Generated from fall.csv");
    assert_eq!(lines[3], "globalThis.CLASSES = [];");
    assert_eq!(lines[4], "");
    assert_eq!(lines.len(), 5);
}

#[test]
fn save_creates_parent_directories_and_overwrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("assets/js/schedule-data.js");

    save_schedule_to_js(&sample_collection(), &path, &EmitOptions::default()).unwrap();
    assert!(path.exists());

    save_schedule_to_js(&ScheduleCollection::default(), &path, &EmitOptions::default()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.ends_with("window.SCHEDULE_DATA = [];\n"));
}

#[test]
fn generating_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    write_sample_project(dir.path());
    let config = GeneratorConfig::with_root(dir.path());

    generate_schedule_data(&config).unwrap();
    let first = fs::read(config.output_path()).unwrap();
    generate_schedule_data(&config).unwrap();
    let second = fs::read(config.output_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn generated_values_keep_text_and_parse_integers() {
    let dir = tempdir().unwrap();
    write_sample_project(dir.path());
    let config = GeneratorConfig::with_root(dir.path());

    let collection = generate_schedule_data(&config).unwrap();
    assert_eq!(collection.len(), 2);

    let content = fs::read_to_string(config.output_path()).unwrap();
    let json = content
        .split_once(" = ")
        .and_then(|(_, rest)| rest.strip_suffix(";\n"))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    let rows = value.as_array().unwrap();

    assert_eq!(rows[0]["Grade"], 1);
    assert_eq!(rows[0]["Description"], "Números");
    assert_eq!(rows[0]["Material"], "");
    assert_eq!(rows[0]["Summary"], "Intro \"quoted\"");
    assert_eq!(rows[1]["Day"], 10);
    assert_eq!(rows[1]["Date"], "3/5/2024");
    assert!(content.contains("Números"), "non-ascii text should not be escaped");
}

#[test]
fn failed_validation_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("teacher/authoring/schedule.csv");
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(
        &input,
        "Grade,Section,Class #,Date,Weekday,Day,Description,Material,Summary\n\
         1,A,1,3/1/2024,Fri,one,D,M,S\n",
    )
    .unwrap();
    let config = GeneratorConfig::with_root(dir.path());

    let err = generate_schedule_data(&config).unwrap_err();
    assert!(err.is_validation());
    assert!(!config.output_path().exists());
    assert!(!dir.path().join("teacher/assets").exists());
}
