use staticserve::http::response::{CONTENT_TYPE, Response, SERVER_NAME, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    assert_eq!(StatusCode::HttpVersionNotSupported.as_u16(), 505);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    assert_eq!(
        StatusCode::HttpVersionNotSupported.reason_phrase(),
        "HTTP Version Not Supported"
    );
}

#[test]
fn test_header_block_for_ok_body() {
    let response = Response::ok("hello\r\n");

    assert_eq!(
        response.header_block(),
        "HTTP/1.1 200 OK\r\nServer: staticserve\r\nContent-Type: text/html\r\nContent-Length: 7\r\n"
    );
}

#[test]
fn test_header_block_for_empty_rejection() {
    let response = Response::empty(StatusCode::NotFound);
    let header = response.header_block();

    assert!(header.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(header.contains("Content-Length: 0\r\n"));
}

#[test]
fn test_content_length_counts_bytes_not_chars() {
    // "é" is two bytes in UTF-8
    let response = Response::ok("héllo");

    assert_eq!(response.content_length(), 6);
    assert!(response.header_block().contains("Content-Length: 6\r\n"));
}

#[test]
fn test_content_type_is_fixed() {
    assert_eq!(CONTENT_TYPE, "text/html");

    let response = Response::ok("plain text, still html by declaration");

    assert!(
        response
            .header_block()
            .contains("Content-Type: text/html\r\n")
    );
}

#[test]
fn test_server_identification_line() {
    let response = Response::empty(StatusCode::BadRequest);

    assert!(
        response
            .header_block()
            .contains(&format!("Server: {}\r\n", SERVER_NAME))
    );
}

#[test]
fn test_every_header_line_is_crlf_terminated() {
    let response = Response::empty(StatusCode::Forbidden);
    let header = response.header_block();

    assert_eq!(header.matches("\r\n").count(), 4);
    assert!(header.ends_with("\r\n"));
}

#[test]
fn test_empty_helper_for_all_rejection_codes() {
    let statuses = vec![
        StatusCode::BadRequest,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::InternalServerError,
        StatusCode::NotImplemented,
        StatusCode::HttpVersionNotSupported,
    ];

    for status in statuses {
        let response = Response::empty(status);

        assert_eq!(response.status, status);
        assert_eq!(response.content_length(), 0);
    }
}
