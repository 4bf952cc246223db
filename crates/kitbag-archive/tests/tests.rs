use std::fs;
use std::path::Path;

use kitbag_archive::{
    Error, compress_gz, compress_tar_gz, extract_gz, extract_gz_to_string, extract_tar_gz,
};

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn gz_round_trip_names_output_without_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("notes.txt");
    write_file(&src, "line one\nline two\n");

    let archive = compress_gz(&src, None, false).unwrap();
    assert_eq!(archive, dir.path().join("notes.txt.gz"));
    assert!(src.exists());

    let out_dir = dir.path().join("out");
    let extracted = extract_gz(&archive, &out_dir).unwrap();
    assert_eq!(extracted, out_dir.join("notes.txt"));
    assert_eq!(fs::read_to_string(extracted).unwrap(), "line one\nline two\n");
}

#[test]
fn compress_gz_can_delete_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("data.bin");
    write_file(&src, "payload");

    let dest = dir.path().join("custom.gz");
    let archive = compress_gz(&src, Some(dest.clone()), true).unwrap();
    assert_eq!(archive, dest);
    assert!(!src.exists());
}

#[test]
fn extract_gz_to_string_reads_content() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("msg.txt");
    write_file(&src, "hello from gzip");

    let archive = compress_gz(&src, None, false).unwrap();
    assert_eq!(extract_gz_to_string(&archive).unwrap(), "hello from gzip");
}

#[test]
fn tar_gz_extracts_whole_directory() {
    let dir = tempfile::tempdir().unwrap();
    let tree = dir.path().join("project");
    write_file(&tree.join("a.txt"), "alpha");
    write_file(&tree.join("sub/b.txt"), "beta");

    let archive = compress_tar_gz(&tree, Some(dir.path().join("project.tar.gz")), false).unwrap();

    let out = dir.path().join("unpacked");
    let returned = extract_tar_gz(&archive, &out, None).unwrap();
    assert_eq!(returned, out);
    assert_eq!(fs::read_to_string(out.join("project/a.txt")).unwrap(), "alpha");
    assert_eq!(fs::read_to_string(out.join("project/sub/b.txt")).unwrap(), "beta");
}

#[test]
fn tar_gz_extracts_single_member() {
    let dir = tempfile::tempdir().unwrap();
    let tree = dir.path().join("bundle");
    write_file(&tree.join("keep.txt"), "keep");
    write_file(&tree.join("skip.txt"), "skip");

    let archive = compress_tar_gz(&tree, Some(dir.path().join("bundle.tar.gz")), false).unwrap();

    let out = dir.path().join("partial");
    extract_tar_gz(&archive, &out, Some("bundle/keep.txt")).unwrap();
    assert!(out.join("bundle/keep.txt").exists());
    assert!(!out.join("bundle/skip.txt").exists());
}

#[test]
fn missing_member_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("single.txt");
    write_file(&src, "only one");

    let archive = compress_tar_gz(&src, Some(dir.path().join("single.tar.gz")), false).unwrap();

    let result = extract_tar_gz(&archive, dir.path().join("out"), Some("no-such-entry"));
    assert!(matches!(result, Err(Error::MemberNotFound(name)) if name == "no-such-entry"));
}

#[test]
fn compress_tar_gz_defaults_to_temp_file_and_deletes_source() {
    let dir = tempfile::tempdir().unwrap();
    let tree = dir.path().join("victim");
    write_file(&tree.join("f.txt"), "gone soon");

    let archive = compress_tar_gz(&tree, None, true).unwrap();
    assert!(archive.exists());
    assert!(!tree.exists());
    fs::remove_file(archive).unwrap();
}
