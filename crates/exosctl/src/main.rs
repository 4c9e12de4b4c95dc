//! Serial-protocol exploration console for the Exos II GoTo mount.
//!
//! Encodes every catalog command to its wire frame (printed as hex for
//! feeding a serial tool or a scripted transport), decodes captured
//! controller output, and carries a couple of helpers from the original
//! reverse-engineering workflow: arbitrary-frame fuzzing and float byte
//! inspection.

use clap::{Parser, Subcommand, ValueEnum};
use exos_mount::{ChannelTransport, MountEvent, MountSession};
use exos_protocol::{Direction, SexagesimalAngle};

#[derive(Parser)]
#[command(name = "exosctl", version, about)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

/// Direction argument for the move command.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum MoveDirection {
    East,
    West,
    North,
    South,
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::East => Direction::East,
            MoveDirection::West => Direction::West,
            MoveDirection::North => Direction::North,
            MoveDirection::South => Direction::South,
        }
    }
}

#[derive(Subcommand)]
enum CliCommand {
    /// Encode a GOTO (slew to coordinates) frame.
    Goto {
        /// Target right ascension as H:M:S, e.g. 5:35:17.
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        ra: SexagesimalAngle,
        /// Target declination as D:M:S, e.g. -5:23:28.
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        dec: SexagesimalAngle,
    },
    /// Encode a sync (set current position) frame.
    Sync {
        /// Current right ascension as H:M:S.
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        ra: SexagesimalAngle,
        /// Current declination as D:M:S.
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        dec: SexagesimalAngle,
    },
    /// Encode a park frame.
    Park,
    /// Encode a stop-motion frame.
    Stop,
    /// Encode a disconnect frame.
    Disconnect,
    /// Encode a site-location request frame.
    GetLocation,
    /// Encode a set-site-location frame.
    SetLocation {
        /// Site latitude as D:M:S.
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        latitude: SexagesimalAngle,
        /// Site longitude as D:M:S.
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        longitude: SexagesimalAngle,
    },
    /// Encode a set-date-time frame.
    SetDateTime {
        /// Hour of day.
        hours: u8,
        /// Minute.
        minutes: u8,
        /// Second.
        seconds: u8,
        /// Day of month.
        day: u8,
        /// Month (1-12).
        month: u8,
        /// Full year, e.g. 2024.
        year: u16,
    },
    /// Encode a movement nudge frame.
    Move {
        /// Direction to nudge.
        #[arg(value_enum)]
        direction: MoveDirection,
    },
    /// Encode an arbitrary frame, for probing unknown command ids.
    Fuzz {
        /// Command id byte, decimal or 0x-prefixed hex.
        #[arg(value_parser = parse_byte)]
        command_id: u8,
        /// All 8 payload bytes as hex, e.g. c8000000c8000000.
        #[arg(default_value = "0000000000000000", value_parser = parse_payload)]
        payload: Payload,
    },
    /// Decode a hex capture of controller output.
    Decode {
        /// Captured bytes as hex; whitespace is ignored.
        capture: Vec<String>,
    },
    /// Show the little-endian byte images of a float value.
    Float {
        /// Value to inspect.
        #[arg(allow_hyphen_values = true)]
        value: f32,
    },
}

/// Wrapper so clap can carry a fixed-size payload through value parsing.
#[derive(Debug, Clone)]
struct Payload([u8; 8]);

fn parse_angle(text: &str) -> Result<SexagesimalAngle, String> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("expected MAJOR:MIN:SEC, got '{text}'"));
    }

    let mut components = [0i32; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid component '{part}' in '{text}'"))?;
    }

    // The wire carries the sign of the whole value; spread a leading minus
    // over the sub-components so -5:23:28 means -(5h 23' 28'').
    let [major, mut minutes, mut seconds] = components;
    if text.trim_start().starts_with('-') {
        minutes = -minutes.abs();
        seconds = -seconds.abs();
    }

    Ok(SexagesimalAngle::new(major, minutes, seconds))
}

fn parse_byte(text: &str) -> Result<u8, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex_digits) => u8::from_str_radix(hex_digits, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| format!("invalid byte value '{text}'"))
}

fn parse_payload(text: &str) -> Result<Payload, String> {
    let bytes = hex::decode(text).map_err(|err| format!("invalid payload hex: {err}"))?;
    if bytes.len() != 8 {
        return Err(format!("payload must be 8 bytes, got {}", bytes.len()));
    }
    let mut payload = [0u8; 8];
    payload.copy_from_slice(&bytes);
    Ok(Payload(payload))
}

fn print_frame(frame: &[u8]) {
    println!("{}", hex::encode_upper(frame));
}

fn print_event(event: &MountEvent) {
    match event {
        MountEvent::Pointing(coords) => {
            println!("pointing  RA {}  DEC {}", coords.ra, coords.dec);
        }
        MountEvent::SiteLocation(site) => {
            println!("location  LAT {}  LON {}", site.latitude, site.longitude);
        }
        MountEvent::Unhandled(frame) => {
            println!("{frame}");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // No device attached: the session computes and returns every frame
    // without transmitting, which is exactly what a console that prints hex
    // wants.
    let mut session = MountSession::new(ChannelTransport::disconnected());

    let result = match cli.command {
        CliCommand::Goto { ra, dec } => session.goto(ra, dec),
        CliCommand::Sync { ra, dec } => session.sync(ra, dec),
        CliCommand::Park => session.park(),
        CliCommand::Stop => session.stop_motion(),
        CliCommand::Disconnect => session.disconnect(),
        CliCommand::GetLocation => session.get_site_location(),
        CliCommand::SetLocation {
            latitude,
            longitude,
        } => session.set_site_location(latitude, longitude),
        CliCommand::SetDateTime {
            hours,
            minutes,
            seconds,
            day,
            month,
            year,
        } => session.set_date_time(hours, minutes, seconds, day, month, year),
        CliCommand::Move { direction } => session.move_direction(direction.into()),
        CliCommand::Fuzz {
            command_id,
            payload,
        } => session.fuzz(command_id, payload.0),

        CliCommand::Decode { capture } => {
            let joined: String = capture
                .join("")
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let bytes = match hex::decode(&joined) {
                Ok(bytes) => bytes,
                Err(err) => {
                    eprintln!("error: invalid hex capture: {err}");
                    std::process::exit(1);
                }
            };

            let mut events = session.feed(&bytes);
            events.extend(session.finish());
            if events.is_empty() {
                eprintln!("no complete frames in capture ({} bytes)", bytes.len());
            }
            for event in &events {
                print_event(event);
            }
            return;
        }

        CliCommand::Float { value } => {
            println!("f32 {}", hex::encode_upper(value.to_le_bytes()));
            println!("f64 {}", hex::encode_upper((value as f64).to_le_bytes()));
            return;
        }
    };

    match result {
        Ok(frame) => print_frame(&frame),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
