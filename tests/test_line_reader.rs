use hearth::http::line_reader::LineReader;

#[tokio::test]
async fn test_crlf_terminates_line() {
    let mut reader = LineReader::new(&b"abc\r\ndef"[..]);

    let first = reader.read_line().await.unwrap().unwrap();
    assert_eq!(&first[..], b"abc");

    let second = reader.read_line().await.unwrap().unwrap();
    assert_eq!(&second[..], b"def");

    assert!(reader.read_line().await.unwrap().is_none());
}

#[tokio::test]
async fn test_bare_lf_terminates_line() {
    let mut reader = LineReader::new(&b"abc\ndef\n"[..]);

    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"abc");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"def");
    assert!(reader.read_line().await.unwrap().is_none());
}

#[tokio::test]
async fn test_bare_cr_terminates_and_preserves_next_byte() {
    let mut reader = LineReader::new(&b"abc\rxyz"[..]);

    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"abc");
    // the x after the \r belongs to the next line
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"xyz");
}

#[tokio::test]
async fn test_cr_at_end_of_stream_terminates_line() {
    let mut reader = LineReader::new(&b"abc\r"[..]);

    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"abc");
    assert!(reader.read_line().await.unwrap().is_none());
}

#[tokio::test]
async fn test_blank_line_is_empty_not_closed() {
    let mut reader = LineReader::new(&b"\r\nafter"[..]);

    let blank = reader.read_line().await.unwrap().unwrap();
    assert!(blank.is_empty());

    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"after");
}

#[tokio::test]
async fn test_closed_stream_returns_none() {
    let mut reader = LineReader::new(&b""[..]);

    assert!(reader.read_line().await.unwrap().is_none());
}

#[tokio::test]
async fn test_unterminated_line_returned_once_at_close() {
    let mut reader = LineReader::new(&b"partial"[..]);

    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"partial");
    assert!(reader.read_line().await.unwrap().is_none());
}

#[tokio::test]
async fn test_long_line_split_at_limit() {
    let mut reader = LineReader::with_limit(&b"abcdefghij\nrest\n"[..], 8);

    // 7 bytes fit under the limit, the tail comes back as its own line
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"abcdefg");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"hij");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"rest");
    assert!(reader.read_line().await.unwrap().is_none());
}

#[tokio::test]
async fn test_header_block_sequence() {
    let input = b"GET / HTTP/1.0\r\nHost: example.com\r\nAccept: */*\r\n\r\n";
    let mut reader = LineReader::new(&input[..]);

    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"GET / HTTP/1.0");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"Host: example.com");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"Accept: */*");
    assert!(reader.read_line().await.unwrap().unwrap().is_empty());
    assert!(reader.read_line().await.unwrap().is_none());
}

#[tokio::test]
async fn test_mixed_terminators() {
    let mut reader = LineReader::new(&b"one\ntwo\r\nthree\rfour"[..]);

    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"one");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"two");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"three");
    assert_eq!(&reader.read_line().await.unwrap().unwrap()[..], b"four");
    assert!(reader.read_line().await.unwrap().is_none());
}
