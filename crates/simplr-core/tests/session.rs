use simplr_core::catalog;
use simplr_core::models::entry::{RepositoryEntry, sort_listing};
use simplr_core::models::metadata::ReportMetadata;
use simplr_core::models::selection::Toggle;
use simplr_core::models::session::{BrowseSession, Opened};
use simplr_core::paths;

#[test]
fn back_at_root_is_a_no_op() {
    let mut session = BrowseSession::new("KTUS7_Compiler_design_lab");
    assert!(!session.back());
    assert_eq!(session.current_path, "");
    assert!(!session.back());
    assert_eq!(session.current_path, "");
}

#[test]
fn back_drops_the_last_segment() {
    let mut session = BrowseSession::new("oslab");
    session.open(&RepositoryEntry::dir("sched", "cpu/sched"));
    assert_eq!(session.current_path, "cpu/sched");

    assert!(session.back());
    assert_eq!(session.current_path, "cpu");
    assert!(session.back());
    assert_eq!(session.current_path, "");
}

#[test]
fn entering_a_directory_names_the_experiment() {
    let mut session = BrowseSession::new("oslab");
    let opened = session.open(&RepositoryEntry::dir("fcfs", "fcfs"));

    assert_eq!(
        opened,
        Opened::Entered {
            path: "fcfs".to_string()
        }
    );
    assert_eq!(session.metadata.experiment_label, "fcfs");
}

#[test]
fn selection_survives_navigation() {
    let mut session = BrowseSession::new("oslab");
    session.open(&RepositoryEntry::dir("fcfs", "fcfs"));
    let opened = session.open(&RepositoryEntry::file("fcfs.c", "fcfs/fcfs.c"));
    assert_eq!(
        opened,
        Opened::Toggled {
            toggle: Toggle::Added
        }
    );

    session.back();
    session.open(&RepositoryEntry::dir("sjf", "sjf"));
    session.open(&RepositoryEntry::file("sjf.c", "sjf/sjf.c"));

    let request = session.snapshot();
    let paths: Vec<_> = request.files.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["fcfs/fcfs.c", "sjf/sjf.c"]);
    assert_eq!(request.metadata.experiment_label, "sjf");
}

#[test]
fn finish_report_clears_only_the_selection() {
    let mut session = BrowseSession::new("oslab");
    session.metadata.student_name = "A".to_string();
    session.open(&RepositoryEntry::file("a.c", "a.c"));

    session.finish_report();

    assert!(session.selection.is_empty());
    assert_eq!(session.metadata.student_name, "A");
}

#[test]
fn report_file_name_uses_experiment_label() {
    let metadata = ReportMetadata {
        experiment_label: "exp1".to_string(),
        ..ReportMetadata::default()
    };
    assert_eq!(metadata.report_file_name("pdf"), "exp1_report.pdf");
}

#[test]
fn metadata_uses_camel_case_on_the_wire() {
    let metadata: ReportMetadata = serde_json::from_str(
        r#"{"studentName":"A","className":"S7","rollNumber":"1","experimentLabel":"exp1"}"#,
    )
    .unwrap();
    assert_eq!(metadata.class_name, "S7");
    assert_eq!(metadata.roll_number, "1");
}

#[test]
fn path_helpers() {
    assert!(paths::is_root(""));
    assert!(paths::is_root("/"));
    assert_eq!(paths::parent("a/b/c"), "a/b");
    assert_eq!(paths::parent("a"), "");
    assert_eq!(paths::parent(""), "");
    assert_eq!(paths::last_segment("a/b/c.c"), "c.c");
    assert_eq!(paths::last_segment(""), "");
    assert_eq!(paths::join("", "a"), "a");
    assert_eq!(paths::join("a/", "b"), "a/b");
}

#[test]
fn listing_puts_directories_first() {
    let mut entries = vec![
        RepositoryEntry::file("z.c", "z.c"),
        RepositoryEntry::dir("exp2", "exp2"),
        RepositoryEntry::file("a.c", "a.c"),
        RepositoryEntry::dir("exp1", "exp1"),
    ];
    sort_listing(&mut entries);

    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["exp1", "exp2", "a.c", "z.c"]);
}

#[test]
fn catalog_lookups() {
    let lab = catalog::lab("Semester 7", "Lab 1: Compiler Lab").unwrap();
    assert_eq!(lab.repo, "KTUS7_Compiler_design_lab");

    assert_eq!(catalog::by_repo("oslab").unwrap().title, "Lab 2: Operating Systems Lab");
    assert!(catalog::by_repo("not-a-lab").is_err());
    assert!(catalog::lab("Semester 2", "Lab 1: Compiler Lab").is_err());
}
