use greeting_core::*;

#[test]
fn messages_only_document_uses_default_tuning() {
    let input = GreetingInput::from_json(r#"{"messages": [{"text": "Hi"}, {"text": "Big", "size": 64}]}"#)
        .expect("valid document");
    assert_eq!(input.messages.len(), 2);
    assert_eq!(input.messages[0], Message::new("Hi"));
    assert_eq!(input.messages[1].size, Some(64.0));
    assert!(input.images.is_empty());
    assert_eq!(input.config.heart_count, 100);
    assert_eq!(input.config.respawn.threshold_y, -45.0);
    assert_eq!(input.config.spawn.x, Span::new(-35.0, 35.0));
    assert_eq!(input.config.overlay.trail_len, 50);
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let json = r#"{
        "images": ["a.jpg", "b.png"],
        "config": {
            "heart_count": 40,
            "respawn": {"band_y": [60, 70]},
            "overlay": {"caption": "Hello"}
        }
    }"#;
    let input = GreetingInput::from_json(json).expect("valid document");
    assert_eq!(input.images, vec!["a.jpg", "b.png"]);
    assert_eq!(input.config.heart_count, 40);
    assert_eq!(input.config.respawn.band_y, Span::new(60.0, 70.0));
    assert_eq!(input.config.respawn.threshold_y, -45.0);
    assert_eq!(input.config.overlay.caption, "Hello");
    assert_eq!(input.config.overlay.layers.len(), 3);
    assert_eq!(input.config.camera.easing, 0.05);
}

#[test]
fn malformed_document_is_a_config_error() {
    let err = GreetingInput::from_json("{\"messages\": [{\"size\": 3}]").unwrap_err();
    assert!(matches!(err, SceneError::Config(_)));
    assert!(err.to_string().starts_with("invalid greeting data"));
}

#[test]
fn missing_message_text_is_rejected() {
    let err = GreetingInput::from_json(r#"{"messages": [{"size": 3}]}"#).unwrap_err();
    assert!(matches!(err, SceneError::Config(_)));
}

#[test]
fn unsampleable_range_is_rejected_at_parse_time() {
    let json = r#"{"messages":[{"text":"Hi"}],"config":{"spawn":{"x":[-3e38,3e38]}}}"#;
    let err = GreetingInput::from_json(json).unwrap_err();
    match err {
        SceneError::InvalidRange { field, .. } => assert_eq!(field, "spawn.x"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn inverted_profile_range_names_its_field() {
    let json = r#"{"config":{"heart":{
        "fall_speed":[-0.05,-0.10],"drift":[0,0],"spin":[[0,0],[0,0],[0,0]],
        "swing_speed":[0.4,1.0],"size":[1,1],"scale":[1,1],"opacity":1
    }}}"#;
    let err = GreetingInput::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        SceneError::InvalidRange { ref field, .. } if field == "heart.fall_speed"
    ));
}

#[test]
fn default_config_validates() {
    assert!(SceneConfig::default().validate().is_ok());
}

#[test]
fn defaults_match_the_constants() {
    let config = SceneConfig::default();
    assert_eq!(config.message.fall_speed, Span::new(-0.14, -0.08));
    assert_eq!(config.image.fall_speed, Span::new(-0.10, -0.06));
    assert_eq!(config.heart.fall_speed, Span::new(-0.10, -0.05));
    assert_eq!(config.bounds.x, 40.0);
    assert_eq!(config.bounds.z, 30.0);
    assert_eq!(config.motion.clock_step, 0.016);
    assert_eq!(config.background, 0x0a0a0f);
    assert_eq!(config.starfield.count, 1500);
}

#[test]
fn cover_crop_fills_the_square_and_keeps_aspect() {
    for (w, h) in [(1600.0, 900.0), (900.0, 1600.0), (512.0, 512.0), (3.0, 1.0)] {
        let rect = cover_crop(w, h, 1.0, 1024.0);
        assert!(rect.width >= 1024.0 - 1e-3 && rect.height >= 1024.0 - 1e-3);
        assert!((rect.width / rect.height - w / h).abs() < 1e-4);
        assert!((rect.x + rect.width / 2.0 - 512.0).abs() < 1e-3);
        assert!((rect.y + rect.height / 2.0 - 512.0).abs() < 1e-3);
    }
}

#[test]
fn cover_crop_of_empty_image_fills_target() {
    let rect = cover_crop(0.0, 0.0, 1.0, 100.0);
    assert_eq!(rect, DrawRect { x: 0.0, y: 0.0, width: 100.0, height: 100.0 });
}

#[test]
fn rounded_square_closes_at_its_start() {
    let path = rounded_square(glam::Vec2::new(40.0, 40.0), 1024.0, 24.0);
    assert_eq!(path.len(), 10);
    assert_eq!(path[0], PathCommand::MoveTo(glam::Vec2::new(64.0, 40.0)));
    assert_eq!(
        path[8],
        PathCommand::QuadTo {
            control: glam::Vec2::new(40.0, 40.0),
            to: glam::Vec2::new(64.0, 40.0)
        }
    );
    assert_eq!(path[9], PathCommand::Close);
}

#[test]
fn heart_outline_is_symmetric() {
    let path = heart_outline(glam::Vec2::new(64.0, 44.0), 40.0, 40.0);
    assert_eq!(path.len(), 5);
    let PathCommand::CubicTo { to: left, .. } = path[1] else {
        panic!("expected a curve");
    };
    let PathCommand::CubicTo { to: right, .. } = path[3] else {
        panic!("expected a curve");
    };
    assert_eq!(left.x + right.x, 128.0);
    assert_eq!(left.y, right.y);
}
