use super::*;

fn fade(name: &str) -> Channel {
    Channel::new(name, ChannelKind::Opacity, [(0.0, 0.0), (1.0, 1.0)])
}

#[test]
fn duplicate_channel_names_fail_fast() {
    let err = ChannelTable::new(vec![fade("a"), fade("a")]).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("duplicate channel name 'a'"));
}

#[test]
fn invalid_channel_fails_table_construction() {
    let bad = Channel::new("b", ChannelKind::Opacity, [(0.5, 1.0), (0.2, 0.0)]);
    assert!(ChannelTable::new(vec![fade("a"), bad]).unwrap_err().is_config());
}

#[test]
fn sections_must_reference_opacity_channels() {
    let err = ChannelTable::builder()
        .channel(fade("heroOpacity"))
        .section("hero", "missing")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("unknown channel 'missing'"));

    let err = ChannelTable::builder()
        .channel(Channel::new("x", ChannelKind::OffsetX, [(0.0, 0.0), (1.0, 1.0)]))
        .section("hero", "x")
        .build()
        .unwrap_err();
    assert!(err.is_config());

    let err = ChannelTable::builder()
        .channel(fade("o"))
        .section("s", "o")
        .section("s", "o")
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("duplicate section"));
}

#[test]
fn threshold_is_range_checked() {
    assert!(ChannelTable::builder().active_threshold(1.5).build().is_err());
    assert!(ChannelTable::builder().active_threshold(f64::NAN).build().is_err());
    let t = ChannelTable::builder().build().unwrap();
    assert!(t.is_empty());
    assert_eq!(t.active_threshold(), DEFAULT_ACTIVE_THRESHOLD);
}

#[test]
fn lookups_report_unknown_names() {
    let t = ChannelTable::new(vec![fade("a")]).unwrap();
    assert_eq!(t.channel("a").unwrap().name, "a");
    assert!(matches!(t.channel("zz"), Err(PhaseError::UnknownChannel(n)) if n == "zz"));
    assert!(matches!(t.section("zz"), Err(PhaseError::UnknownSection(_))));
}

#[test]
fn json_defaults_and_roundtrip() {
    let s = r#"{
        "version": "1",
        "channels": [
            { "name": "heroOpacity", "kind": "opacity", "stops": [[0.0, 1.0], [0.18, 0.0]] },
            { "name": "midScale", "kind": "scale", "stops": [[0.55, 1.0], [0.65, 0.96]], "ease": "out_quad" }
        ],
        "sections": [ { "name": "hero", "opacity": "heroOpacity" } ]
    }"#;
    let t = ChannelTable::from_json_str(s).unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.active_threshold(), 0.5);
    assert_eq!(t.channel("midScale").unwrap().ease, crate::animation::ease::Ease::OutQuad);

    let again = ChannelTable::from_json_str(&t.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again, t);
}

#[test]
fn json_descending_breakpoints_is_config_error() {
    let s = r#"{"version":"1","channels":[{"name":"a","kind":"opacity","stops":[[0.5,1.0],[0.2,0.0]]}]}"#;
    assert!(ChannelTable::from_json_str(s).unwrap_err().is_config());
}

#[test]
fn json_version_and_shape_errors() {
    let s = r#"{"version":"2","channels":[]}"#;
    assert!(ChannelTable::from_json_str(s).unwrap_err().is_config());

    let s = r#"{"version":"1","channels":[],"extra":true}"#;
    assert!(matches!(ChannelTable::from_json_str(s), Err(PhaseError::Serde(_))));

    let s = r#"{"version":"1","channels":[{"name":"a","kind":"wobble","stops":[[0,0],[1,1]]}]}"#;
    assert!(matches!(ChannelTable::from_json_str(s), Err(PhaseError::Serde(_))));
}

#[test]
fn direct_serde_deserialize_also_validates() {
    let s = r#"{"version":"1","channels":[{"name":"a","kind":"opacity","stops":[[0.5,1.0]]}]}"#;
    assert!(serde_json::from_str::<ChannelTable>(s).is_err());
}
