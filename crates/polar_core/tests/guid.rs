use polar_core::{AssetGuid, CoreErrorCode};

#[test]
fn generated_guids_are_lowercase_hex() {
    let guid = AssetGuid::generate();
    assert_eq!(guid.as_str().len(), 32);
    assert!(
        guid.as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    );
    assert_ne!(guid, AssetGuid::generate());
}

#[test]
fn parse_accepts_unity_guids_only() {
    let guid = AssetGuid::parse("e9e885dc7d0dbbf47854304fe725e2a9").expect("valid guid");
    assert_eq!(guid.to_string(), "e9e885dc7d0dbbf47854304fe725e2a9");

    for bad in ["", "E9E885DC7D0DBBF47854304FE725E2A9", "e9e885dc-7d0d-bbf4-7854-304fe725e2a9"] {
        let err = AssetGuid::parse(bad).expect_err("invalid guid should fail");
        assert_eq!(err.code, CoreErrorCode::MalformedInput);
    }
}
