use polar_core::{AssetDocument, AssetGuid, schema};
use polar_render::{
    PREAMBLE_LINE_COUNT, render_asset, render_meta, render_registry_json, render_type_detail,
    render_type_list,
};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("test input should be an object")
}

fn render(type_key: &str, data: Value, name: &str) -> polar_render::RenderedAsset {
    let doc = AssetDocument::build(type_key, &object(data), name).expect("type should build");
    render_asset(&doc)
}

#[test]
fn every_type_renders_one_line_per_field_after_preamble() {
    for schema in schema::all() {
        let rendered = render(schema.key, json!({}), "Sample");
        assert_eq!(
            rendered.lines().len(),
            PREAMBLE_LINE_COUNT + schema.fields.len(),
            "{}",
            schema.key
        );
        for (line, field) in rendered.field_lines().iter().zip(schema.fields) {
            assert!(
                line.starts_with(&format!("  {field}: ")),
                "{}: {line}",
                schema.key
            );
        }
    }
}

#[test]
fn preamble_carries_script_name_and_class() {
    let rendered = render("laser", json!({}), "LaserMk1");
    let preamble = rendered.preamble();
    assert_eq!(preamble[0], "%YAML 1.1");
    assert_eq!(preamble[2], "--- !u!114 &11400000");
    assert_eq!(
        preamble[11],
        "  m_Script: {fileID: 11500000, guid: e9e885dc7d0dbbf47854304fe725e2a9, type: 3}"
    );
    assert_eq!(preamble[12], "  m_Name: LaserMk1");
    assert_eq!(
        preamble[13],
        "  m_EditorClassIdentifier: Assembly-CSharp::Polar.Weapons.PolarLaserWeaponData"
    );
}

#[test]
fn unresolved_script_guid_renders_empty() {
    let rendered = render("bullet", json!({}), "Bullet");
    assert_eq!(
        rendered.preamble()[11],
        "  m_Script: {fileID: 11500000, guid: , type: 3}"
    );
}

#[test]
fn input_overrides_defaults_in_output() {
    let rendered = render("laser", json!({"damage": 250}), "Laser");
    assert!(rendered.lines().iter().any(|line| line == "  damage: 250"));
    assert!(!rendered.lines().iter().any(|line| line == "  damage: 100"));
}

#[test]
fn renders_laser_defaults() {
    let text = render("laser", json!({"id": "LZ1"}), "LZ1").to_text();
    let expected_fields = [
        "  id: LZ1",
        "  weaponName: ",
        "  icon: {fileID: 0}",
        "  weaponBundleId: ",
        "  projectileBundleId: Beam",
        "  damage: 100",
        "  knockbackPower: 0.2",
        "  areaType: 0",
        "  damageRadius: 0",
        "  useGaussianFalloff: 1",
        "  woundIntensity: 0.2",
        "  tickRate: 10",
        "  optionProfile: {fileID: 0}",
        "  extendSpeed: 50",
        "  retractSpeed: 70",
        "  maxLength: 50",
        "  beamWidth: 0.1",
        "  beamColor: {r: 0, g: 1, b: 1, a: 1}",
        "  duration: 2",
    ]
    .join("\n");
    assert!(text.ends_with(&format!("{expected_fields}\n")), "{text}");
}

#[test]
fn reference_fields_render_as_asset_links() {
    let rendered = render(
        "missile",
        json!({
            "icon": {"fileID": 5, "guid": "abc"},
            "explosionVFXPrefab": {"guid": "fff"},
            "missileColor": [0, 0, 1, 1]
        }),
        "M",
    );
    let lines = rendered.lines();
    assert!(lines.contains(&"  icon: {fileID: 5, guid: abc, type: 2}".to_string()));
    assert!(lines.contains(&"  explosionVFXPrefab: {fileID: 11400000, guid: fff, type: 2}".to_string()));
    assert!(lines.contains(&"  missileColor: {r: 0, g: 0, b: 1, a: 1}".to_string()));
    assert!(lines.contains(&"  coreMultiplier: 1.0".to_string()));
}

#[test]
fn asset_text_ends_with_newline() {
    let text = render("machinegun", json!({}), "MG").to_text();
    assert!(text.ends_with("projectileOptions: {fileID: 0}\n"));
}

#[test]
fn meta_embeds_guid_and_main_object() {
    let guid = AssetGuid::parse("0123456789abcdef0123456789abcdef").expect("valid guid");
    let meta = render_meta(&guid);
    assert_eq!(
        meta,
        "fileFormatVersion: 2\n\
         guid: 0123456789abcdef0123456789abcdef\n\
         NativeFormatImporter:\n  \
         externalObjects: {}\n  \
         mainObjectFileID: 11400000\n  \
         userData:\n  \
         assetBundleName:\n  \
         assetBundleVariant:\n"
    );
}

#[test]
fn type_list_names_every_registered_type() {
    let listing = render_type_list();
    for key in schema::type_keys() {
        assert!(listing.contains(&format!("  - {key}\n")), "{key}");
    }
    assert!(listing.starts_with("Weapon types:\n"));
}

#[test]
fn type_detail_shows_defaults_and_missing_values() {
    let detail = render_type_detail(schema::require("bullet").expect("bullet"));
    assert!(detail.starts_with("=== BULLET ===\n"));
    assert!(detail.contains("Script GUID: (unresolved)\n"));
    assert!(detail.contains("  - bulletColor: {r: 1, g: 0.8, b: 0.2, a: 1}\n"));
    assert!(detail.contains("  - muzzleFlashPrefab: N/A\n"));
}

#[test]
fn registry_json_reflects_schema_table() {
    let json = render_registry_json();
    let entries = json.as_array().expect("registry json should be an array");
    assert_eq!(entries.len(), schema::all().len());

    let laser = &entries[0];
    assert_eq!(laser["type"], "laser");
    assert_eq!(laser["category"], "weapon");
    assert_eq!(laser["defaults"]["damage"], "100");
    assert_eq!(laser["defaults"]["icon"], Value::Null);

    let profile = entries
        .iter()
        .find(|entry| entry["type"] == "weapon_option")
        .expect("weapon_option should be listed");
    assert_eq!(profile["category"], "option_profile");
    assert_eq!(profile["script_guid"], Value::Null);
}
