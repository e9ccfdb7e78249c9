//! Named surf spots along the Tel Aviv shoreline.

pub struct Spot {
    pub slug: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Used when neither a spot nor explicit coordinates are given.
pub const DEFAULT_SLUG: &str = "dolphinarium";

pub const SPOTS: &[Spot] = &[
    Spot { slug: "dolphinarium", name: "Dolphinarium Beach", latitude: 32.069_881_6, longitude: 34.763_087 },
    Spot { slug: "maravi", name: "Maravi Beach", latitude: 32.060_426_7, longitude: 34.758_790_7 },
    Spot { slug: "gordon", name: "Gordon Beach", latitude: 32.082_675_1, longitude: 34.767_311_1 },
    Spot { slug: "frishman", name: "Frishman Beach", latitude: 32.080_164_6, longitude: 34.766_716_5 },
    Spot { slug: "bograshov", name: "Bograshov Beach", latitude: 32.077_743_3, longitude: 34.766_029_7 },
    Spot { slug: "antenot", name: "Antenot Beach", latitude: 32.128_862_1, longitude: 34.785_422 },
    Spot { slug: "hilton", name: "Hilton Beach", latitude: 32.092, longitude: 34.758 },
    Spot { slug: "herzliya", name: "Herzliya Beach", latitude: 32.18, longitude: 34.8 },
    Spot { slug: "bat-yam", name: "Bat Yam Beach", latitude: 32.02, longitude: 34.75 },
    Spot { slug: "holon", name: "Holon Beach", latitude: 32.01, longitude: 34.78 },
];

#[must_use]
pub fn find(slug: &str) -> Option<&'static Spot> {
    SPOTS.iter().find(|spot| spot.slug.eq_ignore_ascii_case(slug))
}
