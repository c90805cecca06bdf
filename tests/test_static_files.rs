use staticserve::static_files::{Resolution, read_lines_crlf, resolve};
use std::fs;
use tempfile::tempdir;

#[tokio::test]
async fn test_resolve_existing_file() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("index.html"), "hello").unwrap();

    match resolve(root.path(), "/index.html").await {
        Resolution::Servable(path) => assert_eq!(path, root.path().join("index.html")),
        other => panic!("expected servable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_resolve_target_without_leading_separator() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("index.html"), "hello").unwrap();

    let resolution = resolve(root.path(), "index.html").await;

    assert!(matches!(resolution, Resolution::Servable(_)));
}

#[tokio::test]
async fn test_resolve_nested_target() {
    let root = tempdir().unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();
    fs::write(root.path().join("sub").join("page.html"), "nested").unwrap();

    let resolution = resolve(root.path(), "/sub/page.html").await;

    assert!(matches!(resolution, Resolution::Servable(_)));
}

#[tokio::test]
async fn test_resolve_missing_file() {
    let root = tempdir().unwrap();

    let resolution = resolve(root.path(), "/missing.txt").await;

    assert_eq!(resolution, Resolution::Missing);
}

#[cfg(unix)]
#[tokio::test]
async fn test_resolve_unreadable_file() {
    use std::os::unix::fs::PermissionsExt;

    let root = tempdir().unwrap();
    let path = root.path().join("secret.html");
    fs::write(&path, "hidden").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::File::open(&path).is_ok() {
        // Privileged user; permission bits are not enforced here.
        return;
    }

    let resolution = resolve(root.path(), "/secret.html").await;

    assert_eq!(resolution, Resolution::Unreadable);
}

#[tokio::test]
async fn test_read_appends_crlf_to_unterminated_line() {
    let root = tempdir().unwrap();
    let path = root.path().join("index.html");
    fs::write(&path, "hello").unwrap();

    let body = read_lines_crlf(&path).await.unwrap();

    assert_eq!(body, "hello\r\n");
    assert_eq!(body.len(), 7);
}

#[tokio::test]
async fn test_read_normalizes_newlines_to_crlf() {
    let root = tempdir().unwrap();
    let path = root.path().join("multi.html");
    fs::write(&path, "one\ntwo\n").unwrap();

    let body = read_lines_crlf(&path).await.unwrap();

    assert_eq!(body, "one\r\ntwo\r\n");
}

#[tokio::test]
async fn test_read_preserves_crlf_input() {
    let root = tempdir().unwrap();
    let path = root.path().join("dos.html");
    fs::write(&path, "a\r\nb").unwrap();

    let body = read_lines_crlf(&path).await.unwrap();

    assert_eq!(body, "a\r\nb\r\n");
}

#[tokio::test]
async fn test_read_empty_file_is_empty_body() {
    let root = tempdir().unwrap();
    let path = root.path().join("empty.html");
    fs::write(&path, "").unwrap();

    let body = read_lines_crlf(&path).await.unwrap();

    assert_eq!(body, "");
}
