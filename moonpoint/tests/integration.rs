use chrono::{DateTime, FixedOffset};
use moonpoint::bearing::{compass_bearing, compute_rotation};
use moonpoint::clock::FixedClock;
use moonpoint::commands::{dispatch, run_script, CommandOutput};
use moonpoint::controller::{Controller, Event, Missing, Transition};
use moonpoint::heading::HeadingSample;
use moonpoint::location::{LocationFailure, LocationUpdate};
use moonpoint::narrator::{describe, VisibilityNarrative};
use moonpoint::session::Session;
use moonpoint_ephemeris::VisibilityWindow;
use std::io::Write;
use tempfile::NamedTempFile;

const REFERENCE_INSTANT: &str = "2024-03-20T14:00:00-04:00";

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn controller() -> Controller<FixedClock> {
    Controller::new(FixedClock::new(at(REFERENCE_INSTANT)))
}

fn washington() -> LocationUpdate {
    LocationUpdate::fix(38.9, -77.0).unwrap()
}

fn heading(deg: f64) -> HeadingSample {
    HeadingSample::new(deg).unwrap()
}

fn azimuth_for_bearing(bearing: f64) -> f64 {
    (bearing - 180.0).to_radians()
}

// --- Bearing reconciler ---

#[test]
fn south_and_north_map_to_compass() {
    assert!((compass_bearing(0.0).unwrap() - 180.0).abs() < 1e-12);
    let north = compass_bearing(std::f64::consts::PI).unwrap();
    assert!(north.abs() < 1e-9, "bearing {}", north);
}

#[test]
fn rotation_always_in_half_open_range() {
    for b in (0..360).step_by(5) {
        for h in (0..360).step_by(7) {
            let r = compute_rotation(azimuth_for_bearing(b as f64), h as f64)
                .unwrap()
                .degrees();
            assert!(r > -180.0 && r <= 180.0, "rotation {} for b={} h={}", r, b, h);
        }
    }
}

#[test]
fn wraparound_350_to_10() {
    let r = compute_rotation(azimuth_for_bearing(350.0), 10.0).unwrap();
    assert!((r.degrees() + 20.0).abs() < 1e-9, "rotation {}", r.degrees());
}

#[test]
fn rotation_is_antisymmetric() {
    for b in (0..360).step_by(15) {
        for h in (0..360).step_by(20) {
            let (b, h) = (b as f64, h as f64);
            let forward = compute_rotation(azimuth_for_bearing(b), h).unwrap().degrees();
            let backward = compute_rotation(azimuth_for_bearing(h), b).unwrap().degrees();
            if (forward.abs() - 180.0).abs() < 1e-9 {
                // Half turn: either way round is shortest
                assert!((backward.abs() - 180.0).abs() < 1e-9, "b={} h={}", b, h);
            } else {
                assert!(
                    (forward + backward).abs() < 1e-9,
                    "b={} h={}: {} vs {}",
                    b,
                    h,
                    forward,
                    backward
                );
            }
        }
    }
}

// --- Narrator ---

#[test]
fn describe_is_total() {
    let t = at(REFERENCE_INSTANT);
    let mut seen = Vec::new();
    for rise in [Some(t), None] {
        for set in [Some(t), None] {
            for always_up in [false, true] {
                let narrative = describe(&VisibilityWindow {
                    rise,
                    set,
                    always_up,
                });
                assert!(!narrative.to_string().is_empty());
                seen.push(std::mem::discriminant(&narrative));
            }
        }
    }
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

// --- Controller ---

#[test]
fn coordinate_then_heading_equals_heading_then_coordinate() {
    let mut a = controller();
    a.on_location(washington()).unwrap();
    a.on_heading(heading(90.0)).unwrap();

    let mut b = controller();
    b.on_heading(heading(90.0)).unwrap();
    b.on_location(washington()).unwrap();

    assert!(a.rotation().is_some());
    assert_eq!(a.rotation(), b.rotation());
    assert_eq!(a.state(), b.state());
}

#[test]
fn latest_inputs_win_regardless_of_interleaving() {
    let mut a = controller();
    for event in [
        Event::Heading(heading(10.0)),
        Event::Location(LocationUpdate::fix(51.5, -0.1).unwrap()),
        Event::Heading(heading(200.0)),
        Event::Location(washington()),
        Event::Heading(heading(90.0)),
    ] {
        a.apply(event).unwrap();
    }

    let mut b = controller();
    b.apply(Event::Location(washington())).unwrap();
    b.apply(Event::Heading(heading(90.0))).unwrap();

    assert_eq!(a.rotation(), b.rotation());
}

#[test]
fn no_rotation_with_only_one_input() {
    let mut only_heading = controller();
    for deg in [0.0, 45.0, 359.0] {
        only_heading.on_heading(heading(deg)).unwrap();
    }
    assert!(only_heading.rotation().is_none());

    let mut only_location = controller();
    only_location.on_location(washington()).unwrap();
    only_location.refresh_visibility().unwrap();
    assert!(only_location.rotation().is_none());
}

#[test]
fn end_to_end_washington_reference() {
    let mut c = controller();
    c.on_location(washington()).unwrap();
    let transition = c.on_heading(heading(90.0)).unwrap();

    let position = c.state().position.unwrap();
    assert!(
        (position.azimuth.radians() - 4.05).abs() < 0.01,
        "azimuth {}",
        position.azimuth.radians()
    );

    let bearing = compass_bearing(position.azimuth.radians()).unwrap();
    assert!((bearing - 51.81).abs() < 0.5, "bearing {}", bearing);

    match transition {
        Transition::Rotated(r) => {
            assert!((r.degrees() - (-38.19)).abs() < 0.5, "rotation {}", r.degrees());
            assert!(!r.is_clockwise());
        }
        other => panic!("expected Rotated, got {:?}", other),
    }

    let narrative = describe(&c.state().visibility.unwrap());
    match narrative {
        VisibilityNarrative::FullWindow { rise, set } => {
            assert_eq!(rise.format("%H").to_string(), "15");
            assert_eq!(set.format("%H").to_string(), "05");
        }
        other => panic!("expected FullWindow, got {:?}", other),
    }
}

#[test]
fn losing_location_returns_to_idle() {
    let mut c = controller();
    c.on_location(washington()).unwrap();
    c.on_heading(heading(90.0)).unwrap();
    c.on_location(LocationUpdate::Unavailable(LocationFailure::PermissionDenied))
        .unwrap();
    assert!(c.rotation().is_none());
    assert_eq!(
        c.refresh_visibility().unwrap(),
        Transition::Idle(Missing::Location)
    );

    // A new fix brings the rotation back with the kept heading
    c.on_location(washington()).unwrap();
    assert!(c.rotation().is_some());
}

// --- Session and commands ---

fn session() -> Session {
    Session::with_clock(FixedClock::new(at(REFERENCE_INSTANT)))
}

#[test]
fn manual_override_is_treated_like_a_sensor_sample() {
    let mut with_sensor = session();
    dispatch(&mut with_sensor, "LOCATE 38.9 -77.0").unwrap();
    dispatch(&mut with_sensor, "HEADING 90").unwrap();

    let mut with_override = session();
    dispatch(&mut with_override, "LOCATE 38.9 -77.0").unwrap();
    dispatch(&mut with_override, "HEADING 300").unwrap();
    dispatch(&mut with_override, "SIMULATE 90").unwrap();

    assert_eq!(
        with_sensor.controller.rotation(),
        with_override.controller.rotation()
    );

    // Sensor readings are shadowed while the override is on
    dispatch(&mut with_override, "HEADING 10").unwrap();
    assert_eq!(
        with_sensor.controller.rotation(),
        with_override.controller.rotation()
    );

    // Releasing falls back to the latest sensor reading
    dispatch(&mut with_override, "SIMULATE OFF").unwrap();
    assert_eq!(
        with_override.controller.state().heading,
        Some(heading(10.0))
    );
}

#[test]
fn simulate_rejects_out_of_range() {
    let mut s = session();
    assert!(dispatch(&mut s, "SIMULATE 360").is_err());
    assert!(dispatch(&mut s, "SIMULATE -5").is_err());
    assert!(s.heading.manual().is_none());
}

#[test]
fn show_lists_state() {
    let mut s = session();
    dispatch(&mut s, "LOCATE 38.9 -77.0").unwrap();
    dispatch(&mut s, "HEADING 90").unwrap();
    match dispatch(&mut s, "SHOW").unwrap() {
        CommandOutput::Table { headers, rows } => {
            assert_eq!(headers.len(), 2);
            let rotation = rows.iter().find(|r| r[0] == "Rotation").unwrap();
            assert!(rotation[1].starts_with("-38."), "{}", rotation[1]);
            let visibility = rows.iter().find(|r| r[0] == "Visibility").unwrap();
            assert!(visibility[1].starts_with("The Moon is visible from"));
        }
        _ => panic!("expected Table output"),
    }
}

#[test]
fn script_replays_commands() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "# reference session\nLOCATE 38.9 -77.0\n\nHEADING 90\nREFRESH\n"
    )
    .unwrap();

    let mut s = session();
    let outputs = run_script(&mut s, file.path()).unwrap();

    assert_eq!(outputs.len(), 3);
    let r = s.controller.rotation().unwrap();
    assert!((r.degrees() - (-38.19)).abs() < 0.5, "rotation {}", r.degrees());
}

#[test]
fn script_stops_at_first_bad_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "LOCATE 38.9 -77.0").unwrap();
    writeln!(file, "POINT AT MOON").unwrap();
    writeln!(file, "HEADING 90").unwrap();

    let mut s = session();
    assert!(run_script(&mut s, file.path()).is_err());
    assert!(s.controller.state().coordinate.is_some());
    assert!(s.controller.state().heading.is_none());
}
