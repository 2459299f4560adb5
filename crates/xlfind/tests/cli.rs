use std::io::{Read, Write};
use std::path::Path;
use std::process::Command;

use zip::write::SimpleFileOptions;

fn xlfind(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xlfind"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

#[test]
fn writes_bundle_for_folder_and_upload() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("share");
    std::fs::create_dir_all(root.join("2024")).unwrap();
    std::fs::write(root.join("2024/sales.xlsx"), b"sales").unwrap();
    std::fs::write(root.join("readme.txt"), b"sales notes").unwrap();
    let upload = dir.path().join("Q1.zip");
    std::fs::write(&upload, zip_bytes(&[("data/po123.xls", b"po")])).unwrap();

    let status = xlfind(dir.path())
        .args(["--root", root.to_str().unwrap(), "-k", "sales", "-k", "PO123"])
        .args(["--upload", upload.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let bundle = std::fs::read(dir.path().join("excel_results.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bundle)).unwrap();
    assert_eq!(archive.len(), 2);
    assert_eq!(archive.by_index(0).unwrap().name(), "sales.xlsx");

    let mut content = Vec::new();
    let mut second = archive.by_index(1).unwrap();
    assert_eq!(second.name(), "Q1_po123.xls");
    second.read_to_end(&mut content).unwrap();
    assert_eq!(content, b"po");
}

#[test]
fn list_only_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sales.xlsx"), b"s").unwrap();

    let output = xlfind(dir.path())
        .args(["--root", ".", "-k", "sales", "--list-only"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("sales.xlsx"));
    assert!(!dir.path().join("excel_results.zip").exists());
}

#[test]
fn missing_folder_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = xlfind(dir.path())
        .args(["--root", "does-not-exist", "-k", "sales"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn keywords_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("budget.xlsm"), b"b").unwrap();
    std::fs::write(
        dir.path().join("xlfind.toml"),
        "root = \".\"\nkeywords = [\"budget\"]\noutput = \"out/bundle.zip\"\n",
    )
    .unwrap();

    let status = xlfind(dir.path()).status().unwrap();
    assert!(status.success());
    assert!(dir.path().join("out/bundle.zip").is_file());
}
