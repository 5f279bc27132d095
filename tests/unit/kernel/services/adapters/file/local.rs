use super::*;
use crate::models::NodeKind;
use tempfile::tempdir;

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(fut)
}

#[test]
fn list_tree_sorts_directories_first_and_skips_ignored() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/util")).unwrap();
    fs::create_dir_all(dir.path().join("node_modules/x")).unwrap();
    fs::write(dir.path().join("b.ts"), "").unwrap();
    fs::write(dir.path().join("A.ts"), "").unwrap();
    fs::write(dir.path().join(".DS_Store"), "").unwrap();
    fs::write(dir.path().join("src/index.ts"), "").unwrap();
    fs::write(dir.path().join("src/util/str.ts"), "").unwrap();

    let api = LocalRemoteFileApi::new(dir.path());
    let tree = block_on(api.list_tree()).unwrap();

    let top: Vec<&str> = tree.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(top, vec!["src", "A.ts", "b.ts"]);
    assert_eq!(tree[0].kind, NodeKind::Directory);

    let src: Vec<&str> = tree[0].children.iter().map(|n| n.path.as_str()).collect();
    assert_eq!(src, vec!["src/util", "src/index.ts"]);
    assert_eq!(tree[0].children[0].children[0].path, "src/util/str.ts");
    assert_eq!(tree[0].children[0].children[0].name, "str.ts");
}

#[test]
fn read_and_write_existing_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "old").unwrap();

    let api = LocalRemoteFileApi::new(dir.path());
    assert_eq!(block_on(api.read_file("a.ts")).unwrap(), "old");

    block_on(api.write_file("a.ts", "new")).unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("a.ts")).unwrap(), "new");
}

#[test]
fn write_requires_existing_file() {
    let dir = tempdir().unwrap();
    let api = LocalRemoteFileApi::new(dir.path());

    let err = block_on(api.write_file("missing.ts", "x")).unwrap_err();
    assert_eq!(err, RemoteError::NotFound("missing.ts".to_string()));
    assert!(!dir.path().join("missing.ts").exists());
}

#[test]
fn read_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let api = LocalRemoteFileApi::new(dir.path());

    let err = block_on(api.read_file("nope.ts")).unwrap_err();
    assert!(matches!(err, RemoteError::NotFound(_)));
}

#[test]
fn create_makes_parents_and_rejects_existing() {
    let dir = tempdir().unwrap();
    let api = LocalRemoteFileApi::new(dir.path());

    block_on(api.create_file("lib/new.ts", "body")).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("lib/new.ts")).unwrap(),
        "body"
    );

    let err = block_on(api.create_file("lib/new.ts", "other")).unwrap_err();
    assert_eq!(err, RemoteError::Conflict("lib/new.ts".to_string()));
    assert_eq!(
        fs::read_to_string(dir.path().join("lib/new.ts")).unwrap(),
        "body"
    );
}

#[test]
fn delete_file_and_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("lib/deep")).unwrap();
    fs::write(dir.path().join("lib/deep/x.ts"), "").unwrap();
    fs::write(dir.path().join("a.ts"), "").unwrap();

    let api = LocalRemoteFileApi::new(dir.path());

    assert!(matches!(
        block_on(api.delete_path("lib", false)),
        Err(RemoteError::InvalidPath(_))
    ));

    block_on(api.delete_path("a.ts", false)).unwrap();
    block_on(api.delete_path("lib", true)).unwrap();
    assert!(!dir.path().join("a.ts").exists());
    assert!(!dir.path().join("lib").exists());
}

#[test]
fn paths_cannot_escape_root() {
    let dir = tempdir().unwrap();
    let api = LocalRemoteFileApi::new(dir.path());

    for bad in ["", "/etc/passwd", "../x", "a/../../x", "a//b", "./a"] {
        let err = block_on(api.read_file(bad)).unwrap_err();
        assert!(
            matches!(err, RemoteError::InvalidPath(_)),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn pack_succeeds() {
    let dir = tempdir().unwrap();
    let api = LocalRemoteFileApi::new(dir.path());
    block_on(api.pack()).unwrap();
}
