//! Built-in skill lists for the four playable hero classes.

use super::catalog::SkillCatalog;
use super::skill::{Skill, SkillKind};
use crate::core::CatalogError;

type Entry = (&'static str, &'static str, SkillKind, &'static str, &'static str);

const GOLDYX: &[Entry] = &[
    ("freezing_power", "Frostkraft", SkillKind::Active, "❄️", "Siege 1 oder Eisangriff 1."),
    ("potion_making", "Tränkekunde", SkillKind::Active, "🧪", "Einmal pro Runde: Heilung 2 außerhalb des Kampfes."),
    ("white_crystal_craft", "Weißes Kristallhandwerk", SkillKind::Active, "⚪", "Erhalte einen blauen Kristall und ein weißes Mana."),
    ("green_crystal_craft", "Grünes Kristallhandwerk", SkillKind::Active, "🟢", "Erhalte einen blauen Kristall und ein grünes Mana."),
    ("red_crystal_craft", "Rotes Kristallhandwerk", SkillKind::Active, "🔴", "Erhalte einen blauen Kristall und ein rotes Mana."),
    ("glittering_fortune", "Glitzerndes Glück", SkillKind::Passive, "✨", "Einfluss 1 je Kristallfarbe im Inventar."),
    ("flight", "Flug", SkillKind::Active, "🕊️", "Einmal pro Runde: Bewege dich kostenlos auf ein angrenzendes Feld."),
    ("universal_power", "Universelle Kraft", SkillKind::Active, "🌈", "Zahle ein Mana: +3 auf eine Karte passender Farbe."),
];

const TOVAK: &[Entry] = &[
    ("double_time", "Doppelschritt", SkillKind::Active, "⏩", "Bewegung 2 am Tag, Bewegung 1 in der Nacht."),
    ("night_sharpshooting", "Nachtschütze", SkillKind::Active, "🏹", "Fernkampf 1 am Tag, Fernkampf 2 in der Nacht."),
    ("cold_swordsmanship", "Kalte Klinge", SkillKind::Active, "🗡️", "Angriff 2 oder Eisangriff 2."),
    ("shield_mastery", "Schildmeister", SkillKind::Active, "🛡️", "Block 3, Feuerblock 2 oder Eisblock 2."),
    ("resistance_break", "Resistenzbruch", SkillKind::Active, "💥", "Rüstung eines Gegners -1 je Resistenz."),
    ("i_feel_no_pain", "Ich spüre keinen Schmerz", SkillKind::Passive, "💪", "Wirf eine Verletzung ab und ziehe eine Karte."),
    ("i_dont_give_a_damn", "Ist mir egal", SkillKind::Active, "😤", "Eine Karte zählt als +2 beliebiger Art."),
    ("who_needs_magic", "Wer braucht Magie?", SkillKind::Passive, "🚫", "Karten ohne Mana erhalten +2."),
];

const NOROWAS: &[Entry] = &[
    ("forward_march", "Vorwärtsmarsch", SkillKind::Active, "🥁", "Bewegung 1 je bereiter Einheit."),
    ("day_sharpshooting", "Tagschütze", SkillKind::Active, "🎯", "Fernkampf 2 am Tag, Fernkampf 1 in der Nacht."),
    ("inspiration", "Inspiration", SkillKind::Active, "🌟", "Mache eine Einheit bereit oder heile sie."),
    ("bright_negotiation", "Helle Verhandlung", SkillKind::Active, "☀️", "Einfluss 3 am Tag, Einfluss 2 in der Nacht."),
    ("leaves_in_the_wind", "Blätter im Wind", SkillKind::Active, "🍃", "Erhalte einen grünen Kristall und ein weißes Mana."),
    ("whispers_in_the_treetops", "Flüstern der Wipfel", SkillKind::Active, "🌳", "Erhalte einen weißen Kristall und ein grünes Mana."),
    ("leadership", "Führung", SkillKind::Passive, "👑", "Eine Einheit erhält Block +3 oder Angriff +2."),
    ("bonds_of_loyalty", "Bande der Treue", SkillKind::Passive, "🤝", "Ein zusätzlicher Einheitenplatz."),
];

const ARYTHEA: &[Entry] = &[
    ("dark_paths", "Dunkle Pfade", SkillKind::Active, "🌑", "Bewegung 1 am Tag, Bewegung 2 in der Nacht."),
    ("burning_power", "Brennende Kraft", SkillKind::Active, "🔥", "Siege 1 oder Feuerangriff 1."),
    ("hot_swordsmanship", "Heiße Klinge", SkillKind::Active, "⚔️", "Angriff 2 oder Feuerangriff 2."),
    ("dark_negotiation", "Dunkle Verhandlung", SkillKind::Active, "🌒", "Einfluss 2 am Tag, Einfluss 3 in der Nacht."),
    ("dark_fire_magic", "Dunkle Feuermagie", SkillKind::Active, "🕯️", "Erhalte einen roten Kristall und ein schwarzes Mana."),
    ("power_of_pain", "Macht des Schmerzes", SkillKind::Passive, "🩸", "Spiele eine Verletzung als Karte mit Wert 2."),
    ("invocation", "Anrufung", SkillKind::Active, "📿", "Wirf eine Karte ab für ein Mana."),
    ("polarization", "Polarisierung", SkillKind::Active, "☯️", "Nutze Mana als Gegenfarbe."),
];

fn build(entries: &[Entry]) -> impl Iterator<Item = Skill> + '_ {
    entries.iter().map(|&(id, name, kind, icon, description)| {
        Skill::new(id, name, kind)
            .with_icon(icon)
            .with_description(description)
    })
}

impl SkillCatalog {
    /// Catalog with the built-in classes GOLDYX, TOVAK, NOROWAS and ARYTHEA.
    ///
    /// Falls back to an empty catalog, with an error event, if the
    /// built-in tables fail to register. Use [`SkillCatalog::try_standard`]
    /// to see the failure.
    #[must_use]
    pub fn standard() -> Self {
        match Self::try_standard() {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!(error = %err, "skills.catalog.standard_failed");
                Self::new()
            }
        }
    }

    /// Build the built-in catalog, reporting duplicate ids.
    pub fn try_standard() -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.register_all("GOLDYX", build(GOLDYX))?;
        catalog.register_all("TOVAK", build(TOVAK))?;
        catalog.register_all("NOROWAS", build(NOROWAS))?;
        catalog.register_all("ARYTHEA", build(ARYTHEA))?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::SkillId;

    #[test]
    fn test_standard_catalog_builds() {
        let catalog = SkillCatalog::try_standard().unwrap();
        assert_eq!(catalog.classes().count(), 4);
    }

    #[test]
    fn test_tables_have_unique_ids() {
        for table in [GOLDYX, TOVAK, NOROWAS, ARYTHEA] {
            let mut catalog = SkillCatalog::new();
            assert!(catalog.register_all("class", build(table)).is_ok());
        }
    }

    #[test]
    fn test_standard_classes() {
        let catalog = SkillCatalog::standard();
        let mut classes: Vec<_> = catalog.classes().collect();
        classes.sort_unstable();
        assert_eq!(classes, vec!["arythea", "goldyx", "norowas", "tovak"]);

        for class in classes {
            assert_eq!(catalog.skills_for(class).len(), 8);
        }
    }

    #[test]
    fn test_goldyx_has_flight() {
        let catalog = SkillCatalog::standard();
        let flight = catalog.get("GOLDYX", &SkillId::new("flight")).unwrap();
        assert_eq!(flight.name, "Flug");
        assert_eq!(flight.kind, SkillKind::Active);
    }

    #[test]
    fn test_entries_have_display_data() {
        let catalog = SkillCatalog::standard();
        for class in ["goldyx", "tovak", "norowas", "arythea"] {
            for skill in catalog.skills_for(class) {
                assert!(!skill.name.is_empty());
                assert!(!skill.icon.is_empty());
                assert!(!skill.description.is_empty());
            }
        }
    }
}
