//! Streams NMEA 0183 data into a position fix and prints the result.
//!
//! ```text
//! cargo run --example track --features fix -- --demo
//! RUST_LOG=debug cargo run --example track --features fix -- /dev/ttyUSB0
//! ```

use std::{fs::File, io, path::PathBuf};

use clap::Parser;
use nmea0183_stream::{ReaderBuilder, StreamError, fix::Fix};
use tracing::{debug, info, warn};

const DEMO_STREAM: &[u8] = b"$GNRMC,001031.00,A,4404.13993,N,12118.86023,W,0.146,,100117,,,A*7B\r\n\
$GNGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M*47\r\n\
$GNGLL,4404.14012,N,12118.85993,W,001037.00,A,A*67\r\n\
$GPVTG,220.86,T,,M,2.550,N,4.724,K,A*34\r\n";

#[derive(Parser, Debug)]
#[command(name = "track", version, about = "Print the position fix of an NMEA 0183 stream")]
struct Cli {
    /// File or device to read; standard input when omitted.
    input: Option<PathBuf>,

    /// Read a built-in sample of four sentences instead of any input.
    #[arg(long, conflicts_with = "input")]
    demo: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut fix = Fix::default();
    let mut reader = ReaderBuilder::new()
        .error_handler(|error: StreamError, _: &[u8]| match error {
            StreamError::BufferOverflow => debug!(%error, "dropped input"),
            _ => warn!(%error, "dropped sentence"),
        })
        .build(|message: &[u8]| {
            info!(message = %String::from_utf8_lossy(message), "raw message");

            match fix.update(message) {
                Ok(sentence) => debug!(?sentence, "sentence applied"),
                Err(error) => info!(%error, "sentence skipped"),
            }
        });

    let copied = match &cli.input {
        _ if cli.demo => io::copy(&mut &DEMO_STREAM[..], &mut reader)?,
        Some(path) => io::copy(&mut File::open(path)?, &mut reader)?,
        None => io::copy(&mut io::stdin().lock(), &mut reader)?,
    };
    drop(reader);
    debug!(bytes = copied, "input exhausted");

    print_fix(&fix);
    Ok(())
}

fn print_fix(fix: &Fix) {
    let hemisphere = |c: Option<char>| c.unwrap_or('?');

    match fix.latitude {
        Some(latitude) => println!(
            "Last Lat: {} {:.6} {}",
            latitude.degrees,
            latitude.decimal_minutes,
            hemisphere(fix.north_south)
        ),
        None => println!("Last Lat: unknown"),
    }

    match fix.longitude {
        Some(longitude) => println!(
            "Last Lon: {} {:.6} {}",
            longitude.degrees,
            longitude.decimal_minutes,
            hemisphere(fix.east_west)
        ),
        None => println!("Last Lon: unknown"),
    }

    if let (Some(latitude), Some(longitude)) = (fix.latitude_degrees(), fix.longitude_degrees()) {
        println!("Position: {latitude:.6}, {longitude:.6}");
    }

    match fix.date {
        Some(date) => println!("Date: {}-{}-{}", date.year, date.month, date.day),
        None => println!("Date: unknown"),
    }

    match fix.time {
        Some(time) => println!("Time: {}:{}:{:.2}", time.hours, time.minutes, time.seconds),
        None => println!("Time: unknown"),
    }

    if let Some(speed) = fix.speed_over_ground_kph {
        println!("Speed: {speed} km/h");
    }
}
