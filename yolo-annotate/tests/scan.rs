use std::{fs, path::Path};
use yolo_annotate::dataset::{scan, DatasetScanner, DatasetSummary, ImageLabelStatus};

fn touch(path: impl AsRef<Path>, content: &str) {
    fs::write(path, content).unwrap();
}

fn status_of<'a>(statuses: &'a [ImageLabelStatus], name: &str) -> &'a ImageLabelStatus {
    statuses
        .iter()
        .find(|status| status.path.file_name().unwrap() == name)
        .unwrap_or_else(|| panic!("'{}' is not reported", name))
}

#[test]
fn scan_missing_folder() {
    assert!(scan("/does/not/exist", ["jpg"]).is_empty());
}

#[test]
fn scan_file_instead_of_folder() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("img.jpg");
    touch(&file, "not an image");
    assert!(scan(&file, ["jpg"]).is_empty());
}

#[test]
fn scan_labelled_status() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    touch(root.join("img1.jpg"), "");
    touch(root.join("img1.txt"), "0 0.5 0.5 0.1 0.1\n");
    touch(root.join("img2.jpg"), "");
    touch(root.join("img2.txt"), "");
    touch(root.join("img3.jpg"), "");
    touch(root.join("notes.md"), "unrelated");
    fs::create_dir(root.join("nested.jpg")).unwrap();

    let statuses = scan(root, ["jpg"]);

    assert_eq!(statuses.len(), 3);
    assert!(status_of(&statuses, "img1.jpg").is_labelled);
    assert!(!status_of(&statuses, "img2.jpg").is_labelled);
    assert!(!status_of(&statuses, "img3.jpg").is_labelled);
    assert!(statuses.iter().all(|status| status.path.parent() == Some(root)));
}

#[test]
fn scan_matches_extensions_case_insensitively() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    touch(root.join("photo.JPG"), "");
    touch(root.join("photo.txt"), "1 0.2 0.2 0.1 0.1\n");
    touch(root.join("scan.Png"), "");
    touch(root.join("other.gif"), "");

    let statuses = DatasetScanner::new(["jpg", "png"]).scan_sorted(root);
    let names: Vec<_> = statuses
        .iter()
        .map(|status| status.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, ["photo.JPG", "scan.Png"]);
    assert!(statuses[0].is_labelled);
    assert!(!statuses[1].is_labelled);

    let summary = DatasetSummary::new(&statuses);
    assert_eq!((summary.total, summary.labelled), (2, 1));
}

#[test]
fn scan_does_not_recurse() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    touch(sub.join("deep.jpg"), "");

    assert!(scan(dir.path(), ["jpg"]).is_empty());
}
