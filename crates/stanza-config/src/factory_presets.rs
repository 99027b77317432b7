//! Factory presets bundled with the library.
//!
//! A handful of representative rooms embedded at compile time, always
//! available without external files. They double as worked examples of
//! the preset format.

use crate::RoomPreset;

/// Array of factory preset names for external access.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "listening_room",
    "control_room",
    "home_studio",
    "rehearsal_hall",
];

/// TOML content for factory presets, embedded at compile time.
static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("listening_room", LISTENING_ROOM_PRESET),
    ("control_room", CONTROL_ROOM_PRESET),
    ("home_studio", HOME_STUDIO_PRESET),
    ("rehearsal_hall", REHEARSAL_HALL_PRESET),
];

/// Domestic listening room with near-golden-ratio proportions.
const LISTENING_ROOM_PRESET: &str = r#"
name = "Listening Room"
description = "Domestic listening room, 1 : 1.6 : 2.33 proportions"
length = 5.6
width = 3.8
height = 2.4
sound_speed = 343.0
max_modes = 4
"#;

/// Small control room.
const CONTROL_ROOM_PRESET: &str = r#"
name = "Control Room"
description = "Small mixing/control room"
length = 4.0
width = 3.0
height = 2.5
sound_speed = 343.0
max_modes = 4
"#;

/// Spare-bedroom-sized home studio.
const HOME_STUDIO_PRESET: &str = r#"
name = "Home Studio"
description = "Spare bedroom converted to a recording space"
length = 3.6
width = 2.8
height = 2.4
sound_speed = 343.0
max_modes = 5
"#;

/// Band rehearsal hall.
const REHEARSAL_HALL_PRESET: &str = r#"
name = "Rehearsal Hall"
description = "Mid-size rehearsal hall, unheated (0 C sound speed)"
length = 12.0
width = 8.0
height = 4.5
sound_speed = 331.0
max_modes = 3
"#;

/// All factory presets in declaration order.
pub fn factory_presets() -> Vec<RoomPreset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| RoomPreset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by name.
///
/// Matches the internal identifier or the preset's display name,
/// case-insensitively.
pub fn get_factory_preset(name: &str) -> Option<RoomPreset> {
    let name_lower = name.to_lowercase();

    for (preset_name, toml) in FACTORY_PRESETS_TOML {
        if *preset_name == name_lower {
            return RoomPreset::from_toml(toml).ok();
        }
    }

    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| RoomPreset::from_toml(toml).ok())
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// The internal identifiers of all factory presets.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESET_NAMES.to_vec()
}
