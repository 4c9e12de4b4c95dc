//! End-to-end session tests: command transmission gating and report
//! dispatch over an in-memory transport.

use exos_mount::{ChannelTransport, MountEvent, MountSession};
use exos_protocol::{
    coordinate_frame, Command, Direction, SexagesimalAngle, CMD_GOTO, FRAME_SIGNATURE,
    MESSAGE_FRAME_LENGTH, MOVE_COMMAND_PAYLOAD, RESP_POINTING_REPORT,
    RESP_SITE_LOCATION_REPORT,
};

#[test]
fn test_connected_send_writes_encoded_frame() {
    let (transport, rx) = ChannelTransport::pair();
    let mut session = MountSession::new(transport);

    let ra = SexagesimalAngle::new(5, 35, 17);
    let dec = SexagesimalAngle::new(-5, -23, -28);
    let frame = session.goto(ra, dec).expect("send should succeed");

    let sent = rx.try_recv().expect("frame should be transmitted");
    assert_eq!(sent, frame.to_vec());
    assert_eq!(sent.len(), MESSAGE_FRAME_LENGTH);
    assert_eq!(&sent[..4], &FRAME_SIGNATURE);
    assert_eq!(sent[4], CMD_GOTO);
}

#[test]
fn test_disconnected_send_computes_but_does_not_transmit() {
    let (mut transport, rx) = ChannelTransport::pair();
    transport.set_connected(false);
    let mut session = MountSession::new(transport);

    let frame = session.stop_motion().expect("encode should succeed");
    assert_eq!(frame, Command::StopMotion.encode());
    assert!(rx.try_recv().is_err(), "nothing should be transmitted");

    // Reopening the link resumes transmission.
    session.transport_mut().set_connected(true);
    session.park().expect("send should succeed");
    assert_eq!(rx.try_recv().unwrap(), Command::Park.encode().to_vec());
}

#[test]
fn test_move_command_payload_on_the_wire() {
    let (transport, rx) = ChannelTransport::pair();
    let mut session = MountSession::new(transport);

    session.move_direction(Direction::East).unwrap();
    let sent = rx.try_recv().unwrap();
    assert_eq!(sent[4], 0x01);
    assert_eq!(&sent[5..], &MOVE_COMMAND_PAYLOAD);
}

#[test]
fn test_feed_dispatches_pointing_report_after_noise() {
    let mut session = MountSession::new(ChannelTransport::disconnected());

    // Values chosen to survive the truncating float conversion exactly.
    let ra = SexagesimalAngle::new(5, 30, 0);
    let dec = SexagesimalAngle::new(-5, -15, 0);

    let mut stream = vec![0x13, 0x37];
    stream.extend_from_slice(&coordinate_frame(RESP_POINTING_REPORT, ra, dec));

    let events = session.feed(&stream);
    assert_eq!(events.len(), 1);
    match &events[0] {
        MountEvent::Pointing(coords) => {
            assert_eq!(coords.ra, ra);
            assert_eq!(coords.dec, dec);
        }
        other => panic!("expected pointing event, got {other:?}"),
    }
}

#[test]
fn test_feed_dispatches_site_location_report() {
    let mut session = MountSession::new(ChannelTransport::disconnected());

    let latitude = SexagesimalAngle::new(49, 30, 0);
    let longitude = SexagesimalAngle::new(8, 45, 0);

    // Two reports queued in one delivery; both must come out, in order.
    let mut stream = Vec::new();
    stream.extend_from_slice(&coordinate_frame(RESP_SITE_LOCATION_REPORT, latitude, longitude));
    stream.extend_from_slice(&coordinate_frame(
        RESP_POINTING_REPORT,
        SexagesimalAngle::new(0, 0, 0),
        SexagesimalAngle::new(0, 0, 0),
    ));

    let events = session.feed(&stream);
    assert_eq!(events.len(), 2);
    match &events[0] {
        MountEvent::SiteLocation(site) => {
            assert_eq!(site.latitude, latitude);
            assert_eq!(site.longitude, longitude);
        }
        other => panic!("expected site-location event, got {other:?}"),
    }
    assert!(matches!(events[1], MountEvent::Pointing(_)));
}

#[test]
fn test_feed_holds_partial_frame_until_complete() {
    let mut session = MountSession::new(ChannelTransport::disconnected());

    let frame = coordinate_frame(
        RESP_POINTING_REPORT,
        SexagesimalAngle::new(12, 0, 0),
        SexagesimalAngle::new(45, 0, 0),
    );

    // Signature plus a few payload bytes only.
    assert!(session.feed(&frame[..7]).is_empty());
    // Rest of the frame, plus the start of the next report.
    let mut rest = frame[7..].to_vec();
    rest.extend_from_slice(&FRAME_SIGNATURE);
    let events = session.feed(&rest);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_unknown_id_is_recorded_not_processed() {
    let mut session = MountSession::new(ChannelTransport::disconnected());

    let mut stream = Vec::new();
    stream.extend_from_slice(&coordinate_frame(
        0x42,
        SexagesimalAngle::new(1, 0, 0),
        SexagesimalAngle::new(2, 0, 0),
    ));
    stream.push(0x00);

    let events = session.feed(&stream);
    assert_eq!(events.len(), 1);
    match &events[0] {
        MountEvent::Unhandled(frame) => assert_eq!(frame.command_id, 0x42),
        other => panic!("expected unhandled event, got {other:?}"),
    }
}

#[test]
fn test_finish_releases_trailing_frame() {
    let mut session = MountSession::new(ChannelTransport::disconnected());

    let frame = coordinate_frame(
        RESP_POINTING_REPORT,
        SexagesimalAngle::new(6, 45, 8),
        SexagesimalAngle::new(-16, -42, -58),
    );

    // A capture ending exactly on a frame boundary stays buffered...
    assert!(session.feed(&frame).is_empty());
    // ...until the caller declares the stream over.
    let events = session.finish();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], MountEvent::Pointing(_)));
}
