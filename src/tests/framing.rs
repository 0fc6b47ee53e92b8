use super::common::{GGA, GLL, Messages, RMC, VTG, run, with_reader};
use crate::{NmeaReader, ReaderBuilder, StreamError};

#[test]
fn test_delivers_body_without_talker_id() {
    let (messages, errors) = run(RMC);

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(
        messages,
        [b"RMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A".to_vec()]
    );
}

#[test]
fn test_demo_stream_in_order() {
    let input = [RMC, GGA, GLL, VTG].concat();
    let (messages, errors) = run(&input);

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let types: Vec<_> = messages.iter().map(|message| &message[..3]).collect();
    assert_eq!(types, [b"RMC", b"GGA", b"GLL", b"VTG"]);
}

#[test]
fn test_lowercase_checksum_accepted() {
    let (messages, errors) =
        run(b"$GNRMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A*7b\r\n");

    assert!(errors.is_empty());
    assert_eq!(messages.len(), 1);
}

#[test]
fn test_checksum_mismatch() {
    let (messages, errors) =
        run(b"$GNRMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A*7C\r\n");

    assert!(messages.is_empty());
    assert_eq!(
        errors,
        [(
            StreamError::Checksum {
                expected: 0x7B,
                found: Some(0x7C)
            },
            b"RMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A".to_vec()
        )]
    );
}

#[test]
fn test_invalid_checksum_digit() {
    let (messages, errors) = run(b"$GPGGA,data*6G\r\n$GPGGA,data*\r\n\r\n");

    assert!(messages.is_empty());
    assert_eq!(errors.len(), 2);
    for (error, data) in errors {
        assert_eq!(
            error,
            StreamError::Checksum {
                expected: 0x6A,
                found: None
            }
        );
        assert_eq!(data, b"GGA,data");
    }
}

#[test]
fn test_reading_continues_after_bad_frame() {
    let input = [b"$GPGGA,data*00\r\n".as_slice(), GLL].concat();
    let (messages, errors) = run(&input);

    assert_eq!(errors.len(), 1);
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with(b"GLL,"));
}

#[test]
fn test_noise_before_start_marker_is_dropped() {
    let (messages, errors) = run(b"\r\n*12,garbage*$GPGGA,123456,data*41\r\n");

    assert!(errors.is_empty());
    assert_eq!(messages, [b"GGA,123456,data".to_vec()]);
}

#[test]
fn test_short_bodies() {
    let (messages, errors) = run(b"$A*41$*00$GP*17");

    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(messages, [Vec::new(), Vec::new(), Vec::new()]);
}

#[test]
fn test_no_callbacks_without_complete_frame() {
    for input in [
        b"".as_slice(),
        b"GPGGA,123456,data*41",
        b"$GPGGA,123456,data",
        b"$GPGGA,123456,data*",
        b"$GPGGA,123456,data*4",
    ] {
        let (messages, errors) = run(input);
        assert!(messages.is_empty(), "message from {input:?}");
        assert!(errors.is_empty(), "error from {input:?}");
    }
}

#[test]
fn test_partial_frame_stays_buffered() {
    let (messages, errors) = with_reader(|reader| {
        reader.feed(b"$GPGGA,123456,data*4");
        assert_eq!(reader.len(), 20);

        reader.feed(b"1");
        assert!(reader.is_empty());
    });

    assert!(errors.is_empty());
    assert_eq!(messages, [b"GGA,123456,data".to_vec()]);
}

#[test]
fn test_process_delivers_one_frame_per_call() {
    let (messages, errors) = with_reader(|reader| {
        for &byte in [GLL, VTG].concat().iter() {
            reader.add_char(byte);
        }

        reader.process();
        assert_eq!(reader.message_handler().0.len(), 1);

        reader.process();
        assert_eq!(reader.message_handler().0.len(), 2);

        // Only the trailing line ending is left.
        reader.process();
        assert_eq!(reader.message_handler().0.len(), 2);
        assert_eq!(reader.len(), 2);
    });

    assert!(errors.is_empty());
    assert!(messages[0].starts_with(b"GLL,"));
    assert!(messages[1].starts_with(b"VTG,"));
}

#[test]
fn test_process_without_new_bytes_is_a_no_op() {
    let (messages, _) = with_reader(|reader| {
        reader.process();
        reader.add_char(b'$');
        reader.process();
        reader.process();
        assert_eq!(reader.len(), 1);
    });

    assert!(messages.is_empty());
}

#[test]
fn test_clear_drops_partial_frame() {
    let (messages, errors) = with_reader(|reader| {
        reader.feed(b"$GPGGA,123456,da");
        reader.clear();
        assert!(reader.is_empty());

        reader.feed(b"ta*41\r\n");
        reader.feed(b"$GPGGA,data*6A\r\n");
    });

    assert!(errors.is_empty());
    assert_eq!(messages, [b"GGA,data".to_vec()]);
}

#[test]
fn test_message_too_long() {
    let mut errors = Vec::new();
    let mut reader: NmeaReader<'_, _, 64, 8> = ReaderBuilder::new()
        .error_handler(|error: StreamError, data: &[u8]| errors.push((error, data.to_vec())))
        .build_with_capacity(Messages::default());

    reader.feed(b"$GPGGA,123456,data*41\r\n$GPGGA*56\r\n");

    let messages = reader.into_message_handler().0;
    assert_eq!(messages, [b"GGA".to_vec()]);
    assert_eq!(
        errors,
        [(StreamError::MessageTooLong { length: 17 }, b"GGA,12".to_vec())]
    );
}

#[test]
fn test_error_handler_can_be_replaced() {
    let mut first = 0;
    let mut second = 0;

    let mut reader = NmeaReader::new(Messages::default());
    reader.feed(b"$GPGGA,data*00\r\n");

    reader.set_error_handler(|_: StreamError, _: &[u8]| first += 1);
    reader.feed(b"$GPGGA,data*00\r\n");

    reader.set_error_handler(|_: StreamError, _: &[u8]| second += 1);
    reader.feed(b"$GPGGA,data*00\r\n");

    reader.clear_error_handler();
    reader.feed(b"$GPGGA,data*00\r\n$GPGGA,data*6A\r\n");

    assert_eq!(reader.message_handler().0, [b"GGA,data".to_vec()]);
    drop(reader);
    assert_eq!((first, second), (1, 1));
}

#[test]
fn test_io_write() {
    use std::io::Write;

    let (messages, _) = with_reader(|reader| {
        reader.write_all(RMC).unwrap();
        write!(reader, "$GPGGA,data*6A\r\n").unwrap();
        reader.flush().unwrap();
    });

    assert_eq!(messages.len(), 2);
}
