use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use classroom::{Error, resources};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    fs::create_dir_all(&p).expect("create temp dir");
    p
}

#[test]
fn download_copies_bytes_and_overwrites() {
    let dir = temp_dir("resource-copy");
    let source = dir.join("notes.pdf");
    let destination = dir.join("saved.pdf");
    fs::write(&source, b"%PDF-1.4 lecture notes").unwrap();
    fs::write(&destination, b"stale contents that are longer than the source file").unwrap();

    let bytes = resources::download(&source, &destination).unwrap();
    assert_eq!(bytes, 22);
    assert_eq!(fs::read(&destination).unwrap(), fs::read(&source).unwrap());
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_source_is_an_io_error() {
    let dir = temp_dir("resource-missing");
    let result = resources::download(dir.join("gone.pdf"), dir.join("out.pdf"));
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!dir.join("out.pdf").exists());
    let _ = fs::remove_dir_all(dir);
}
