use crate::{MessageHandler, NmeaReader, ReaderBuilder, StreamError};

pub const RMC: &[u8] = b"$GNRMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A*7B\r\n";
pub const GGA: &[u8] =
    b"$GNGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M*47\r\n";
pub const GLL: &[u8] = b"$GNGLL,4404.14012,N,12118.85993,W,001037.00,A,A*67\r\n";
pub const VTG: &[u8] = b"$GPVTG,220.86,T,,M,2.550,N,4.724,K,A*34\r\n";

/// Collects every delivered message.
#[derive(Debug, Default)]
pub struct Messages(pub Vec<Vec<u8>>);

impl MessageHandler for Messages {
    fn on_message(&mut self, message: &[u8]) {
        self.0.push(message.to_vec());
    }
}

pub type Errors = Vec<(StreamError, Vec<u8>)>;

/// Runs `f` on a default reader that records messages and errors.
pub fn with_reader(f: impl FnOnce(&mut NmeaReader<'_, Messages>)) -> (Vec<Vec<u8>>, Errors) {
    let mut errors = Vec::new();
    let mut reader = ReaderBuilder::new()
        .error_handler(|error: StreamError, data: &[u8]| errors.push((error, data.to_vec())))
        .build(Messages::default());

    f(&mut reader);

    let messages = reader.into_message_handler().0;
    (messages, errors)
}

/// Feeds `input` one byte at a time through [`NmeaReader::process_char`].
pub fn run(input: &[u8]) -> (Vec<Vec<u8>>, Errors) {
    with_reader(|reader| {
        for &byte in input {
            reader.process_char(byte);
        }
    })
}
