use glam::Vec2;

use tau_core::Settings;
use tau_core::sim::{
    BeatEvent, GameEvent, HitObject, JudgementResult, Outcome, Session, SessionConfig, TickInput,
    pointer_for_angle, tick,
};

const KIAI: BeatEvent = BeatEvent {
    beat_length: 400.0,
    is_kiai: true,
};
const PLAIN: BeatEvent = BeatEvent {
    beat_length: 400.0,
    is_kiai: false,
};

fn results(events: &[GameEvent]) -> Vec<JudgementResult> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Judgement(r) => Some(r.clone()),
            _ => None,
        })
        .collect()
}

fn flashes(events: &[GameEvent]) -> Vec<f32> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Flash(f) => Some(f.intensity),
            _ => None,
        })
        .collect()
}

#[test]
fn test_full_session_follows_the_pointer() {
    let mut kiai_object = HitObject::new(270.0, 2000.0, 60.0);
    kiai_object.is_kiai = true;
    let objects = vec![
        HitObject::new(0.0, 1000.0, 60.0),
        HitObject::new(90.0, 1500.0, 60.0),
        kiai_object,
        HitObject::new(180.0, 2500.0, 60.0),
    ];
    let mut session =
        Session::new(SessionConfig::default(), Settings::default(), objects.clone()).unwrap();

    let mut all = Vec::new();
    let mut time = 0.0;
    while time <= 3000.0 {
        // Aim at the first three objects, ignore the last one
        let target = objects
            .iter()
            .take(3)
            .find(|o| o.hit_window_end >= time)
            .map(|o| pointer_for_angle(&session, o.target_angle, 200.0));
        let input = TickInput {
            time,
            pointer: target,
            beats: Vec::new(),
        };
        all.extend(results(&tick(&mut session, &input).unwrap()));
        time += 10.0;
    }

    assert_eq!(all.len(), 4);
    let outcomes: Vec<(usize, Outcome)> = all.iter().map(|r| (r.index, r.outcome)).collect();
    assert_eq!(
        outcomes,
        vec![
            (0, Outcome::Hit),
            (1, Outcome::Hit),
            (2, Outcome::Hit),
            (3, Outcome::Miss)
        ]
    );
    assert!(all[2].spawns_kiai_explosion());
    assert!(!all[3].spawns_kiai_explosion());
}

#[test]
fn test_hit_fires_once_while_overlap_persists() {
    let objects = vec![HitObject::new(0.0, 1000.0, 100.0)];
    let mut session = Session::new(SessionConfig::default(), Settings::default(), objects).unwrap();
    let pointer = Some(pointer_for_angle(&session, 0.0, 200.0));

    let mut count = 0;
    for step in 0..30 {
        let input = TickInput {
            time: 900.0 + step as f64 * 10.0,
            pointer,
            beats: Vec::new(),
        };
        count += results(&tick(&mut session, &input).unwrap()).len();
    }
    assert_eq!(count, 1);
}

#[test]
fn test_untouched_cursor_misses_off_axis_objects() {
    let objects = vec![HitObject::new(135.0, 500.0, 50.0)];
    let mut session = Session::new(SessionConfig::default(), Settings::default(), objects).unwrap();

    let mut all = Vec::new();
    for time in [450.0, 500.0, 550.0, 600.0] {
        let input = TickInput {
            time,
            ..Default::default()
        };
        all.extend(results(&tick(&mut session, &input).unwrap()));
    }
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].outcome, Outcome::Miss);
}

#[test]
fn test_kiai_flash_cadence_through_ticks() {
    let mut session =
        Session::new(SessionConfig::default(), Settings::default(), Vec::new()).unwrap();

    let input = TickInput {
        time: 0.0,
        pointer: None,
        beats: vec![KIAI; 6],
    };
    let intensities = flashes(&tick(&mut session, &input).unwrap());
    assert_eq!(intensities, vec![1.0, 0.15, 0.15]);

    // End of kiai then restart: strong flash again
    let input = TickInput {
        time: 400.0,
        pointer: None,
        beats: vec![PLAIN, KIAI],
    };
    let intensities = flashes(&tick(&mut session, &input).unwrap());
    assert_eq!(intensities, vec![1.0]);
}

#[test]
fn test_circle_size_changes_receptor_reach() {
    // An object slightly off the receptor's axis
    let objects = vec![HitObject::new(20.0, 1000.0, 20.0)];
    let aim = |session: &Session| Some(pointer_for_angle(session, 0.0, 200.0));

    let easy = SessionConfig {
        circle_size: 1.0,
        ..Default::default()
    };
    let mut session = Session::new(easy, Settings::default(), objects.clone()).unwrap();
    let input = TickInput {
        time: 1000.0,
        pointer: aim(&session),
        beats: Vec::new(),
    };
    let wide = results(&tick(&mut session, &input).unwrap());
    assert_eq!(wide[0].outcome, Outcome::Hit);

    let hard = SessionConfig {
        circle_size: 10.0,
        ..Default::default()
    };
    let mut session = Session::new(hard, Settings::default(), objects).unwrap();
    let mut all = Vec::new();
    for time in [1000.0, 1030.0] {
        let input = TickInput {
            time,
            pointer: aim(&session),
            beats: Vec::new(),
        };
        all.extend(results(&tick(&mut session, &input).unwrap()));
    }
    assert_eq!(all[0].outcome, Outcome::Miss);
}

#[test]
fn test_feedback_placement_in_session() {
    let mut object = HitObject::new(0.0, 1000.0, 50.0);
    object.rotation = 15.0;
    let mut session =
        Session::new(SessionConfig::default(), Settings::default(), vec![object]).unwrap();
    let input = TickInput {
        time: 1000.0,
        pointer: Some(pointer_for_angle(&session, 0.0, 150.0)),
        beats: Vec::new(),
    };
    let r = results(&tick(&mut session, &input).unwrap());
    assert_eq!(r[0].outcome, Outcome::Hit);
    let feedback = r[0].feedback.unwrap();
    assert!(feedback.position.distance(Vec2::new(-285.0, 0.0)) < 1e-2);
    assert_eq!(feedback.rotation, 105.0);
}

#[test]
fn test_pointer_straight_up_is_offset_from_top() {
    // The cursor trails the pointer by 25 degrees, so aiming straight up
    // leaves a narrow receptor short of an object at the top
    let objects = vec![HitObject::new(0.0, 1000.0, 20.0)];
    let config = SessionConfig {
        circle_size: 10.0,
        ..Default::default()
    };
    let mut session = Session::new(config, Settings::default(), objects).unwrap();

    let mut all = Vec::new();
    for time in [1000.0, 1030.0] {
        let input = TickInput {
            time,
            pointer: Some(Vec2::new(384.0, 100.0)),
            beats: Vec::new(),
        };
        all.extend(results(&tick(&mut session, &input).unwrap()));
    }
    assert!((session.cursor.rotation() - 335.0).abs() < 1e-3);
    assert_eq!(all[0].outcome, Outcome::Miss);
}
