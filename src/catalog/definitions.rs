//! Static fallback talent definitions
//!
//! Used when neither the system configuration nor the compendium yields any
//! skills. Names match the base game system so ids derived from them line up
//! with modifiers persisted while a live source was available.

/// Broad talent grouping, mirrored from the base game's skill categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentGroup {
    Body,
    Social,
    Nature,
    Knowledge,
    Craft,
}

/// A fallback talent definition
#[derive(Debug, Clone)]
pub struct FallbackTalent {
    pub name: &'static str,
    pub group: TalentGroup,
}

const fn talent(name: &'static str, group: TalentGroup) -> FallbackTalent {
    FallbackTalent { name, group }
}

/// Built-in talent list - the catalog of last resort
pub static FALLBACK_TALENTS: &[FallbackTalent] = &[
    // Body
    talent("Fliegen", TalentGroup::Body),
    talent("Gaukeleien", TalentGroup::Body),
    talent("Klettern", TalentGroup::Body),
    talent("Körperbeherrschung", TalentGroup::Body),
    talent("Kraftakt", TalentGroup::Body),
    talent("Reiten", TalentGroup::Body),
    talent("Schwimmen", TalentGroup::Body),
    talent("Selbstbeherrschung", TalentGroup::Body),
    talent("Singen", TalentGroup::Body),
    talent("Sinnesschärfe", TalentGroup::Body),
    talent("Tanzen", TalentGroup::Body),
    talent("Taschendiebstahl", TalentGroup::Body),
    talent("Verbergen", TalentGroup::Body),
    talent("Zechen", TalentGroup::Body),
    // Social
    talent("Bekehren & Überzeugen", TalentGroup::Social),
    talent("Betören", TalentGroup::Social),
    talent("Einschüchtern", TalentGroup::Social),
    talent("Etikette", TalentGroup::Social),
    talent("Gassenwissen", TalentGroup::Social),
    talent("Menschenkenntnis", TalentGroup::Social),
    talent("Überreden", TalentGroup::Social),
    talent("Verkleiden", TalentGroup::Social),
    talent("Willenskraft", TalentGroup::Social),
    // Nature
    talent("Fährtensuchen", TalentGroup::Nature),
    talent("Fesseln", TalentGroup::Nature),
    talent("Fischen & Angeln", TalentGroup::Nature),
    talent("Orientierung", TalentGroup::Nature),
    talent("Pflanzenkunde", TalentGroup::Nature),
    talent("Tierkunde", TalentGroup::Nature),
    talent("Wildnisleben", TalentGroup::Nature),
    // Knowledge
    talent("Brett- & Glücksspiel", TalentGroup::Knowledge),
    talent("Geographie", TalentGroup::Knowledge),
    talent("Geschichtswissen", TalentGroup::Knowledge),
    talent("Götter & Kulte", TalentGroup::Knowledge),
    talent("Kriegskunst", TalentGroup::Knowledge),
    talent("Magiekunde", TalentGroup::Knowledge),
    talent("Mechanik", TalentGroup::Knowledge),
    talent("Rechnen", TalentGroup::Knowledge),
    talent("Rechtskunde", TalentGroup::Knowledge),
    talent("Sagen & Legenden", TalentGroup::Knowledge),
    talent("Sphärenkunde", TalentGroup::Knowledge),
    talent("Sternkunde", TalentGroup::Knowledge),
    // Craft
    talent("Alchimie", TalentGroup::Craft),
    talent("Boote & Schiffe", TalentGroup::Craft),
    talent("Fahrzeuge", TalentGroup::Craft),
    talent("Handel", TalentGroup::Craft),
    talent("Heilkunde Gift", TalentGroup::Craft),
    talent("Heilkunde Krankheiten", TalentGroup::Craft),
    talent("Heilkunde Seele", TalentGroup::Craft),
    talent("Heilkunde Wunden", TalentGroup::Craft),
    talent("Holzbearbeitung", TalentGroup::Craft),
    talent("Lebensmittelbearbeitung", TalentGroup::Craft),
    talent("Lederbearbeitung", TalentGroup::Craft),
    talent("Malen & Zeichnen", TalentGroup::Craft),
    talent("Metallbearbeitung", TalentGroup::Craft),
    talent("Musizieren", TalentGroup::Craft),
    talent("Schlösserknacken", TalentGroup::Craft),
    talent("Steinbearbeitung", TalentGroup::Craft),
    talent("Stoffbearbeitung", TalentGroup::Craft),
];
