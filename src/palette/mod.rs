//! Color palette lookup
//!
//! Palettes are keyed by hub name and palette zone ("Residential",
//! "Industrial", ...). A missing combination is not an error: buildings
//! simply ship without colors. Hub names arrive in display form
//! ("Pillar of Kongo") and are normalized to the palette key form
//! ("PillarOfKongo") before lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::seed::GenRng;

/// Hex color strings for one palette zone
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZonePalette {
    pub walls: Vec<String>,
    pub trims: Vec<String>,
    pub roofs: Vec<String>,
}

/// Colors sampled for a single building
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingColors {
    pub wall: String,
    pub trim: String,
    pub roof: String,
}

impl ZonePalette {
    /// Draw one color per role. `None` when any list is empty.
    pub fn sample(&self, rng: &mut GenRng) -> Option<BuildingColors> {
        let wall = rng.pick(&self.walls)?.clone();
        let trim = rng.pick(&self.trims)?.clone();
        let roof = rng.pick(&self.roofs)?.clone();
        Some(BuildingColors { wall, trim, roof })
    }
}

/// Color source abstraction; the generator only sees this trait.
pub trait ColorLookup {
    fn colors(&self, hub: &str, palette_zone: &str) -> Option<&ZonePalette>;
}

/// Convert a display hub name to its palette key: "Pillar of Kongo"
/// becomes "PillarOfKongo". Accented letters fold to their ASCII base
/// ("Laccadé" to "Laccade") so keys stay plain ASCII.
pub fn normalize_hub_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut out = String::new();
            let mut chars = word.chars().filter_map(ascii_fold);
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
            }
            out.extend(chars);
            out
        })
        .collect()
}

/// Latin-1 accent folding; characters without an ASCII base are dropped.
fn ascii_fold(c: char) -> Option<char> {
    if c.is_ascii() {
        return Some(c);
    }
    let folded = match c {
        'à'..='å' => 'a',
        'À'..='Å' => 'A',
        'è'..='ë' => 'e',
        'È'..='Ë' => 'E',
        'ì'..='ï' => 'i',
        'Ì'..='Ï' => 'I',
        'ò'..='ö' => 'o',
        'Ò'..='Ö' => 'O',
        'ù'..='ü' => 'u',
        'Ù'..='Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(folded)
}

/// JSON-backed palette store: hub key -> palette zone -> palette
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaletteLibrary {
    hubs: HashMap<String, HashMap<String, ZonePalette>>,
}

/// Hub key holding the fallback palettes
const DEFAULT_HUB: &str = "Default";

impl PaletteLibrary {
    /// Load a palette library from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        let library: Self = serde_json::from_str(&text)?;
        if library.hubs.is_empty() {
            return Err(Error::Palette(format!(
                "{}: no hub palettes defined",
                path.display()
            )));
        }
        Ok(library)
    }

    /// In-memory library with one neutral palette per zone under the
    /// default hub key
    pub fn with_default_palettes() -> Self {
        let mut zones = HashMap::new();
        for (zone, wall) in [
            ("Residential", "#c8b8a0"),
            ("Commercial", "#9fb4c7"),
            ("Industrial", "#8a8d91"),
            ("Agricultural", "#b5a079"),
            ("Parks", "#a8b89a"),
        ] {
            zones.insert(
                zone.to_string(),
                ZonePalette {
                    walls: vec![wall.to_string()],
                    trims: vec!["#4a4a4a".to_string()],
                    roofs: vec!["#5d5248".to_string()],
                },
            );
        }
        let mut hubs = HashMap::new();
        hubs.insert(DEFAULT_HUB.to_string(), zones);
        Self { hubs }
    }

    pub fn insert(&mut self, hub: &str, zone: &str, palette: ZonePalette) {
        self.hubs
            .entry(hub.to_string())
            .or_default()
            .insert(zone.to_string(), palette);
    }
}

impl ColorLookup for PaletteLibrary {
    fn colors(&self, hub: &str, palette_zone: &str) -> Option<&ZonePalette> {
        let key = normalize_hub_name(hub);
        let by_hub = self
            .hubs
            .get(&key)
            .or_else(|| self.hubs.get(DEFAULT_HUB));
        let Some(zones) = by_hub else {
            log::debug!("no palettes for hub {hub}");
            return None;
        };
        let palette = zones.get(palette_zone);
        if palette.is_none() {
            log::debug!("no {palette_zone} palette for hub {hub}");
        }
        palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_normalize_hub_name() {
        assert_eq!(normalize_hub_name("Pillar of Kongo"), "PillarOfKongo");
        assert_eq!(normalize_hub_name("new meridian"), "NewMeridian");
        assert_eq!(normalize_hub_name("Solo"), "Solo");
        assert_eq!(normalize_hub_name(""), "");
    }

    #[test]
    fn test_normalize_folds_accents() {
        assert_eq!(normalize_hub_name("Pillar of Laccadé"), "PillarOfLaccade");
        assert_eq!(normalize_hub_name("São Paulo"), "SaoPaulo");
        assert_eq!(normalize_hub_name("Ölgii"), "Olgii");
    }

    #[test]
    fn test_lookup_with_hub_fallback() {
        let library = PaletteLibrary::with_default_palettes();
        assert!(library.colors("Pillar of Kongo", "Industrial").is_some());
        assert!(library.colors("Pillar of Kongo", "Spaceport").is_none());
    }

    #[test]
    fn test_specific_hub_wins_over_default() {
        let mut library = PaletteLibrary::with_default_palettes();
        let custom = ZonePalette {
            walls: vec!["#112233".to_string()],
            trims: vec!["#445566".to_string()],
            roofs: vec!["#778899".to_string()],
        };
        library.insert("PillarOfKongo", "Residential", custom.clone());
        assert_eq!(
            library.colors("Pillar of Kongo", "Residential"),
            Some(&custom)
        );
    }

    #[test]
    fn test_sample_deterministic() {
        let library = PaletteLibrary::with_default_palettes();
        let palette = library.colors("Anywhere", "Residential").unwrap();
        let a = palette.sample(&mut GenRng::from_seed(9)).unwrap();
        let b = palette.sample(&mut GenRng::from_seed(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_empty_palette() {
        let palette = ZonePalette { walls: vec![], trims: vec![], roofs: vec![] };
        assert!(palette.sample(&mut GenRng::from_seed(1)).is_none());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut library = PaletteLibrary::default();
        library.insert(
            "PillarOfKongo",
            "Commercial",
            ZonePalette {
                walls: vec!["#aabbcc".to_string()],
                trims: vec!["#001122".to_string()],
                roofs: vec!["#334455".to_string()],
            },
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&library).unwrap()).unwrap();

        let loaded = PaletteLibrary::from_file(file.path()).unwrap();
        assert!(loaded.colors("Pillar of Kongo", "Commercial").is_some());
    }

    #[test]
    fn test_from_file_errors() {
        assert!(PaletteLibrary::from_file(Path::new("/nonexistent/palettes.json")).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(PaletteLibrary::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_rejects_empty_library() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"hubs\":{{}}}}").unwrap();
        let err = PaletteLibrary::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Palette(_)));
    }
}
