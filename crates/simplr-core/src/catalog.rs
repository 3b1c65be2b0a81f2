//! The fixed set of lab repositories, grouped by semester.

use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lab {
    pub title: &'static str,
    pub repo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Semester {
    pub name: &'static str,
    pub labs: &'static [Lab],
}

pub const SEMESTERS: &[Semester] = &[
    Semester {
        name: "Semester 1",
        labs: &[Lab {
            title: "Lab 1: Programming in Python",
            repo: "KTUS1_Python_programming",
        }],
    },
    Semester {
        name: "Semester 3",
        labs: &[
            Lab {
                title: "Lab 1: Data Structures Lab",
                repo: "dataStructures",
            },
            Lab {
                title: "Lab 2: Object-Oriented Programming Using JAVA",
                repo: "javaPrograms",
            },
        ],
    },
    Semester {
        name: "Semester 4",
        labs: &[
            Lab {
                title: "Lab 1: Digital Lab",
                repo: "KTUS4_Digital_Lab",
            },
            Lab {
                title: "Lab 2: Operating Systems Lab",
                repo: "oslab",
            },
        ],
    },
    Semester {
        name: "Semester 5",
        labs: &[
            Lab {
                title: "Lab 1: MicroProcesor Lab",
                repo: "ssmp-lab",
            },
            Lab {
                title: "Lab 2: Database Management Systems Lab",
                repo: "KTUS5_DBMS_Lab",
            },
        ],
    },
    Semester {
        name: "Semester 6",
        labs: &[Lab {
            title: "Lab 1: Computer Networks Lab",
            repo: "networkLabS6",
        }],
    },
    Semester {
        name: "Semester 7",
        labs: &[Lab {
            title: "Lab 1: Compiler Lab",
            repo: "KTUS7_Compiler_design_lab",
        }],
    },
];

/// Look up a lab by semester and lab title.
pub fn lab(semester: &str, title: &str) -> Result<&'static Lab, CoreError> {
    SEMESTERS
        .iter()
        .find(|s| s.name == semester)
        .and_then(|s| s.labs.iter().find(|l| l.title == title))
        .ok_or_else(|| CoreError::UnknownLab {
            semester: semester.to_string(),
            lab: title.to_string(),
        })
}

/// Look up a lab by its repository name. Only catalogued repositories may be
/// browsed.
pub fn by_repo(repo: &str) -> Result<&'static Lab, CoreError> {
    SEMESTERS
        .iter()
        .flat_map(|s| s.labs.iter())
        .find(|l| l.repo == repo)
        .ok_or_else(|| CoreError::UnknownRepository(repo.to_string()))
}
