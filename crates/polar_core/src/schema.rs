//! Built-in table of the Polar ScriptableObject types the converter can emit.
//!
//! Script GUIDs come from the `.cs.meta` files of the weapon data classes.
//! An empty GUID marks a class whose meta file has not been looked up yet; such
//! schemas still render, Unity just reports a missing script on import.

use serde::Serialize;

use crate::error::CoreError;
use crate::value::{Color, FieldValue, Number};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaCategory {
    Weapon,
    OptionProfile,
}

impl SchemaCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon types",
            Self::OptionProfile => "Option profile types",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Value,
    AssetLink,
}

#[derive(Debug)]
pub struct TypeSchema {
    pub key: &'static str,
    pub category: SchemaCategory,
    pub script_guid: &'static str,
    pub class_identifier: &'static str,
    pub fields: &'static [&'static str],
    pub defaults: &'static [(&'static str, FieldValue)],
}

impl TypeSchema {
    pub fn default_for(&self, field: &str) -> Option<&'static FieldValue> {
        self.defaults
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_resolved(&self) -> bool {
        !self.script_guid.is_empty()
    }
}

// Fields holding object references to other assets.
const ASSET_LINK_FIELDS: &[&str] = &[
    "icon",
    "optionProfile",
    "projectileOptions",
    "missileOptions",
    "explosionVFXPrefab",
    "muzzleFlashPrefab",
    "impactEffectPrefab",
];

pub fn field_kind(field: &str) -> FieldKind {
    if ASSET_LINK_FIELDS.contains(&field) {
        FieldKind::AssetLink
    } else {
        FieldKind::Value
    }
}

const fn int(v: i64) -> FieldValue {
    FieldValue::Integer(v)
}

const fn float(v: f64) -> FieldValue {
    FieldValue::Float(v)
}

const fn rgba(r: Number, g: Number, b: Number, a: Number) -> FieldValue {
    FieldValue::Color(Color::rgba(r, g, b, a))
}

const I0: Number = Number::Integer(0);
const I1: Number = Number::Integer(1);

#[rustfmt::skip]
static SCHEMAS: &[TypeSchema] = &[
    TypeSchema {
        key: "laser",
        category: SchemaCategory::Weapon,
        script_guid: "e9e885dc7d0dbbf47854304fe725e2a9",
        class_identifier: "Assembly-CSharp::Polar.Weapons.PolarLaserWeaponData",
        fields: &[
            "id", "weaponName", "icon", "weaponBundleId", "projectileBundleId",
            "damage", "knockbackPower", "areaType", "damageRadius",
            "useGaussianFalloff", "woundIntensity", "tickRate", "optionProfile",
            "extendSpeed", "retractSpeed", "maxLength", "beamWidth", "beamColor", "duration",
        ],
        defaults: &[
            ("id",                 FieldValue::text("")),
            ("weaponName",         FieldValue::text("")),
            ("weaponBundleId",     FieldValue::text("")),
            ("projectileBundleId", FieldValue::text("Beam")),
            ("damage",             int(100)),
            ("knockbackPower",     float(0.2)),
            ("areaType",           int(0)),
            ("damageRadius",       int(0)),
            ("useGaussianFalloff", int(1)),
            ("woundIntensity",     float(0.2)),
            ("tickRate",           int(10)),
            ("extendSpeed",        int(50)),
            ("retractSpeed",       int(70)),
            ("maxLength",          int(50)),
            ("beamWidth",          float(0.1)),
            ("beamColor",          rgba(I0, I1, I1, I1)),
            ("duration",           int(2)),
        ],
    },
    TypeSchema {
        key: "machinegun",
        category: SchemaCategory::Weapon,
        script_guid: "418388b5bfcd68d40ac6149f18238753",
        class_identifier: "Assembly-CSharp::Polar.Weapons.PolarMachinegunWeaponData",
        fields: &[
            "id", "weaponName", "icon", "weaponBundleId", "projectileBundleId",
            "damage", "knockbackPower", "areaType", "damageRadius",
            "useGaussianFalloff", "woundIntensity", "tickRate", "optionProfile",
            "fireRate", "projectileSpeed", "spreadAngle",
            "projectileLifetime", "projectileScale", "projectileColor", "projectileOptions",
        ],
        defaults: &[
            ("id",                 FieldValue::text("")),
            ("weaponName",         FieldValue::text("")),
            ("weaponBundleId",     FieldValue::text("")),
            ("projectileBundleId", FieldValue::text("Bullet")),
            ("damage",             int(50)),
            ("knockbackPower",     float(0.2)),
            ("areaType",           int(2)),
            ("damageRadius",       int(1)),
            ("useGaussianFalloff", int(1)),
            ("woundIntensity",     float(0.2)),
            ("tickRate",           int(10)),
            ("fireRate",           int(10)),
            ("projectileSpeed",    int(15)),
            ("spreadAngle",        int(2)),
            ("projectileLifetime", int(3)),
            ("projectileScale",    float(0.3)),
            ("projectileColor",    rgba(I1, I1, I0, I1)),
        ],
    },
    TypeSchema {
        key: "missile",
        category: SchemaCategory::Weapon,
        script_guid: "f81c35f6ab105394d8dbd7cc1c4ffc5d",
        class_identifier: "Assembly-CSharp::Polar.Weapons.Data.PolarMissileWeaponData",
        fields: &[
            "id", "weaponName", "icon", "weaponBundleId", "projectileBundleId",
            "damage", "knockbackPower", "areaType", "damageRadius",
            "useGaussianFalloff", "woundIntensity", "tickRate", "optionProfile",
            "fireRate", "missileSpeed", "missileLifetime",
            "coreRadius", "effectiveRadius", "maxRadius",
            "coreMultiplier", "effectiveMinMultiplier", "maxMinMultiplier",
            "falloffType", "explosionVFXPrefab", "missileScale", "missileColor", "missileOptions",
        ],
        defaults: &[
            ("id",                     FieldValue::text("")),
            ("weaponName",             FieldValue::text("")),
            ("weaponBundleId",         FieldValue::text("")),
            ("projectileBundleId",     FieldValue::text("Missile")),
            ("damage",                 int(500)),
            ("knockbackPower",         float(0.2)),
            ("areaType",               int(3)),
            ("damageRadius",           int(5)),
            ("useGaussianFalloff",     int(1)),
            ("woundIntensity",         float(0.2)),
            ("tickRate",               int(10)),
            ("fireRate",               float(0.5)),
            ("missileSpeed",           int(12)),
            ("missileLifetime",        int(5)),
            ("coreRadius",             int(1)),
            ("effectiveRadius",        int(5)),
            ("maxRadius",              int(8)),
            ("coreMultiplier",         float(1.0)),
            ("effectiveMinMultiplier", float(0.8)),
            ("maxMinMultiplier",       float(0.1)),
            ("falloffType",            int(1)),
            ("missileScale",           float(0.5)),
            ("missileColor",           rgba(I1, I0, I0, I1)),
        ],
    },
    TypeSchema {
        key: "bullet",
        category: SchemaCategory::Weapon,
        // TODO: fill in once PolarBulletWeaponData.cs.meta is committed.
        script_guid: "",
        class_identifier: "Assembly-CSharp::Polar.Weapons.PolarBulletWeaponData",
        fields: &[
            "id", "weaponName", "icon", "weaponBundleId", "projectileBundleId",
            "damage", "knockbackPower", "areaType", "damageRadius",
            "useGaussianFalloff", "woundIntensity", "tickRate", "optionProfile",
            "bulletColor", "bulletScale", "bulletSpeed",
            "muzzleFlashPrefab", "impactEffectPrefab", "fireSoundId", "impactSoundId",
        ],
        defaults: &[
            ("id",                 FieldValue::text("")),
            ("weaponName",         FieldValue::text("")),
            ("weaponBundleId",     FieldValue::text("")),
            ("projectileBundleId", FieldValue::text("Bullet")),
            ("damage",             int(100)),
            ("knockbackPower",     float(0.2)),
            ("areaType",           int(1)),
            ("damageRadius",       int(0)),
            ("useGaussianFalloff", int(0)),
            ("woundIntensity",     float(0.2)),
            ("tickRate",           int(10)),
            ("bulletColor",        rgba(I1, Number::Float(0.8), Number::Float(0.2), I1)),
            ("bulletScale",        float(0.15)),
            ("bulletSpeed",        int(10)),
            ("fireSoundId",        FieldValue::text("weapon_bullet_fire")),
            ("impactSoundId",      FieldValue::text("weapon_bullet_impact")),
        ],
    },
    TypeSchema {
        key: "weapon_option",
        category: SchemaCategory::OptionProfile,
        script_guid: "",
        class_identifier: "Assembly-CSharp::Polar.Weapons.PolarWeaponOptionProfile",
        fields: &[
            "id", "damage", "knockbackPower", "areaType", "damageRadius",
            "useGaussianFalloff", "woundIntensity", "tickRate",
        ],
        defaults: &[],
    },
    TypeSchema {
        key: "projectile_option",
        category: SchemaCategory::OptionProfile,
        script_guid: "",
        class_identifier: "Assembly-CSharp::Polar.Weapons.PolarProjectileOptionProfile",
        fields: &["id", "speed", "lifetime", "scale", "color"],
        defaults: &[],
    },
];

pub fn all() -> &'static [TypeSchema] {
    SCHEMAS
}

pub fn of_category(category: SchemaCategory) -> impl Iterator<Item = &'static TypeSchema> {
    SCHEMAS.iter().filter(move |schema| schema.category == category)
}

pub fn lookup(type_key: &str) -> Option<&'static TypeSchema> {
    SCHEMAS.iter().find(|schema| schema.key == type_key)
}

pub fn require(type_key: &str) -> Result<&'static TypeSchema, CoreError> {
    lookup(type_key).ok_or_else(|| {
        let known: Vec<&str> = type_keys().collect();
        CoreError::unknown_type(type_key, &known)
    })
}

pub fn type_keys() -> impl Iterator<Item = &'static str> {
    SCHEMAS.iter().map(|schema| schema.key)
}
