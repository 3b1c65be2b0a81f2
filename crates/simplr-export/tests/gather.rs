use std::collections::HashMap;
use std::sync::Mutex;

use simplr_core::models::entry::RepositoryEntry;
use simplr_core::source::{FetchOutcome, FileSource};
use simplr_export::assemble::{SourceFile, gather};

#[derive(Default)]
struct FakeRepo {
    files: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl FakeRepo {
    fn with(mut self, path: &str, text: &str) -> Self {
        self.files.insert(path.to_string(), text.to_string());
        self
    }
}

impl FileSource for FakeRepo {
    async fn fetch_text(&self, path: &str) -> FetchOutcome {
        self.requested.lock().unwrap().push(path.to_string());
        match self.files.get(path) {
            Some(text) => FetchOutcome::from_text(text.clone()),
            None => FetchOutcome::Missing {
                reason: "Failed to fetch file content".to_string(),
            },
        }
    }
}

#[tokio::test]
async fn resolves_in_selection_order_and_marks_skips() {
    let repo = FakeRepo::default()
        .with("exp1/b.c", "int b;")
        .with("exp1/a.c", "int a;")
        .with("exp1/empty.c", "");

    let entries = [
        RepositoryEntry::file("b.c", "exp1/b.c"),
        RepositoryEntry::file("missing.c", "exp1/missing.c"),
        RepositoryEntry::file("a.c", "exp1/a.c"),
        RepositoryEntry::file("empty.c", "exp1/empty.c"),
    ];

    let files = gather(&repo, &entries).await;

    assert_eq!(
        *repo.requested.lock().unwrap(),
        ["exp1/b.c", "exp1/missing.c", "exp1/a.c", "exp1/empty.c"]
    );
    assert_eq!(files.len(), 4);
    assert_eq!(files[0], SourceFile::loaded("b.c", "int b;"));
    assert!(matches!(&files[1], SourceFile::Skipped { name, .. } if name == "missing.c"));
    assert_eq!(files[2], SourceFile::loaded("a.c", "int a;"));
    assert!(matches!(
        &files[3],
        SourceFile::Skipped { reason, .. } if reason == "empty file"
    ));

    let names: Vec<_> = files.iter().map(SourceFile::name).collect();
    assert_eq!(names, ["b.c", "missing.c", "a.c", "empty.c"]);
}
