use super::*;
use crate::models::NodeKind;

#[test]
fn endpoint_joins_without_double_slash() {
    assert_eq!(endpoint("http://h/api/pkg", "file"), "http://h/api/pkg/file");
    assert_eq!(endpoint("http://h/api/pkg/", "/pack"), "http://h/api/pkg/pack");
}

#[test]
fn base_url_trailing_slashes_are_trimmed() {
    let api = HttpRemoteFileApi::new("http://h/api/pkg//");
    assert_eq!(api.base_url(), "http://h/api/pkg");
    assert_eq!(api.url("file"), "http://h/api/pkg/file");
}

#[test]
fn parse_tree_listing_accepts_bare_array() {
    let body = r#"[
        {"path": "src", "name": "src", "type": "directory", "children": [
            {"path": "src/a.ts", "name": "a.ts", "type": "file"}
        ]},
        {"path": "README.md", "name": "README.md", "type": "file"}
    ]"#;
    let nodes = parse_tree_listing(body).unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].kind, NodeKind::Directory);
    assert_eq!(nodes[0].children[0].path, "src/a.ts");
    assert!(nodes[1].children.is_empty());
}

#[test]
fn parse_tree_listing_accepts_wrapped_object() {
    let body = r#"{"tree": [{"path": "a.ts", "name": "a.ts", "type": "file"}]}"#;
    let nodes = parse_tree_listing(body).unwrap();
    assert_eq!(nodes, vec![FileTreeNode::file("a.ts")]);
}

#[test]
fn parse_tree_listing_rejects_garbage() {
    assert!(matches!(
        parse_tree_listing("{\"files\": 3}"),
        Err(RemoteError::Decode(_))
    ));
    assert!(matches!(
        parse_tree_listing("not json"),
        Err(RemoteError::Decode(_))
    ));
}

#[test]
fn status_codes_map_to_remote_errors() {
    assert_eq!(
        status_error(404, "a.ts", String::new()),
        RemoteError::NotFound("a.ts".into())
    );
    assert_eq!(
        status_error(409, "a.ts", String::new()),
        RemoteError::Conflict("a.ts".into())
    );
    assert_eq!(
        status_error(403, "a.ts", String::new()),
        RemoteError::Forbidden("a.ts".into())
    );
    assert_eq!(
        status_error(401, "a.ts", String::new()),
        RemoteError::Forbidden("a.ts".into())
    );
    assert_eq!(
        status_error(500, "a.ts", "boom".into()),
        RemoteError::Status {
            status: 500,
            message: "boom".into()
        }
    );
}
