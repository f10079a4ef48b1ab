use super::*;

fn p(v: f64) -> Progress {
    Progress::clamped(v)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn interpolates_between_bracketing_stops() {
    let ch = Channel::new("c", ChannelKind::Opacity, [(0.0, 0.0), (0.5, 1.0), (1.0, 1.0)]);
    ch.validate().unwrap();
    assert_eq!(ch.sample(p(0.25)).unwrap(), 0.5);
    assert_eq!(ch.sample(p(0.5)).unwrap(), 1.0);
    assert_eq!(ch.sample(p(0.75)).unwrap(), 1.0);
}

#[test]
fn clamps_flat_outside_defined_range() {
    let ch = Channel::new("c", ChannelKind::OffsetX, [(0.3, -40.0), (0.5, 0.0)]);
    assert_eq!(ch.sample(p(0.0)).unwrap(), -40.0);
    assert_eq!(ch.sample(p(0.3)).unwrap(), -40.0);
    assert!(approx(ch.sample(p(0.4)).unwrap(), -20.0));
    assert_eq!(ch.sample(p(0.9)).unwrap(), 0.0);
}

#[test]
fn ease_shapes_each_segment() {
    let ch = Channel::new("c", ChannelKind::Scale, [(0.0, 0.0), (1.0, 10.0)])
        .with_ease(Ease::InQuad);
    assert_eq!(ch.sample(p(0.5)).unwrap(), 2.5);
}

#[test]
fn fewer_than_two_stops_is_config_error() {
    let ch = Channel::new("solo", ChannelKind::Opacity, [(0.5, 1.0)]);
    let err = ch.validate().unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("solo"));
}

#[test]
fn non_increasing_breakpoints_are_config_error() {
    let ch = Channel::new("c", ChannelKind::Opacity, [(0.5, 1.0), (0.2, 0.0)]);
    assert!(ch.validate().unwrap_err().is_config());

    let dup = Channel::new("c", ChannelKind::Opacity, [(0.2, 1.0), (0.2, 0.0)]);
    assert!(dup.validate().unwrap_err().is_config());
}

#[test]
fn out_of_range_and_nan_breakpoints_are_rejected() {
    let ch = Channel::new("c", ChannelKind::Opacity, [(0.0, 1.0), (1.2, 0.0)]);
    assert!(ch.validate().is_err());
    let ch = Channel::new("c", ChannelKind::Opacity, [(0.0, f64::NAN), (1.0, 0.0)]);
    assert!(ch.validate().is_err());
}

#[test]
fn opacity_channels_cannot_rest() {
    let ch = Channel::new("c", ChannelKind::Opacity, [(0.0, 0.0), (1.0, 1.0)]).with_rest(1.0);
    assert!(ch.validate().unwrap_err().is_config());
}

#[test]
fn resting_value_prefers_explicit_rest() {
    let rot = Channel::new("r", ChannelKind::Rotation, [(0.0, 0.0), (1.0, 360.0)]);
    assert_eq!(rot.resting_value(), Some(0.0));
    let scale = Channel::new("s", ChannelKind::Scale, [(0.55, 1.0), (0.65, 0.96)]);
    assert_eq!(scale.resting_value(), Some(1.0));
    let pinned = scale.clone().with_rest(0.96);
    assert_eq!(pinned.resting_value(), Some(0.96));
    let fade = Channel::new("f", ChannelKind::Opacity, [(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(fade.resting_value(), None);
}

#[test]
fn reduced_motion_holds_motion_channels_only() {
    let rot = Channel::new("r", ChannelKind::Rotation, [(0.0, 0.0), (1.0, 360.0)]);
    let fade = Channel::new("f", ChannelKind::Opacity, [(0.0, 0.0), (1.0, 1.0)]);
    for v in [0.0, 0.3, 0.6, 1.0] {
        assert_eq!(rot.sample_with(p(v), MotionPreference::Reduced).unwrap(), 0.0);
        assert_eq!(fade.sample_with(p(v), MotionPreference::Reduced).unwrap(), v);
    }
    assert_eq!(rot.sample_with(p(0.5), MotionPreference::Full).unwrap(), 180.0);
}

#[test]
fn stops_serialize_as_pairs() {
    let ch = Channel::new("heroOpacity", ChannelKind::Opacity, [(0.0, 1.0), (0.18, 0.0)]);
    let v = serde_json::to_value(&ch).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "name": "heroOpacity",
            "kind": "opacity",
            "stops": [[0.0, 1.0], [0.18, 0.0]]
        })
    );
}

#[test]
fn sampling_without_stops_is_an_error() {
    let ch = Channel::new("empty", ChannelKind::Opacity, Vec::new());
    assert!(ch.sample(p(0.5)).unwrap_err().is_config());
    assert!(ch.sample_with(p(0.5), MotionPreference::Reduced).is_err());
}

#[test]
fn single_stop_samples_as_constant() {
    let ch = Channel::new("one", ChannelKind::OffsetY, [(0.4, 12.0)]);
    assert_eq!(ch.sample(p(0.0)).unwrap(), 12.0);
    assert_eq!(ch.sample(p(1.0)).unwrap(), 12.0);
}
