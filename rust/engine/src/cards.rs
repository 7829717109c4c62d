use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::GameError;

/// Number of cards in a hanafuda deck.
pub const DECK_SIZE: usize = 48;

/// One of the twelve hanafuda months, 1 (Pine) through 12 (Paulownia).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub fn new(value: u8) -> Option<Month> {
        (1..=12).contains(&value).then_some(Month(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        MONTH_LABELS[(self.0 - 1) as usize]
    }

    pub fn kanji(self) -> &'static str {
        MONTH_KANJI[(self.0 - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::new(value).ok_or_else(|| format!("month out of range: {}", value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

const MONTH_LABELS: [&str; 12] = [
    "Pine",
    "Plum",
    "Cherry Blossom",
    "Wisteria",
    "Iris",
    "Peony",
    "Bush Clover",
    "Pampas Grass",
    "Chrysanthemum",
    "Maple",
    "Willow",
    "Paulownia",
];

const MONTH_KANJI: [&str; 12] = [
    "松", "梅", "桜", "藤", "菖蒲", "牡丹", "萩", "芒", "菊", "紅葉", "柳", "桐",
];

/// Scoring category of a card, from most to least valuable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Bright cards (hikari)
    Light,
    /// Animal cards (tane)
    Animal,
    /// Ribbon cards (tanzaku)
    Ribbon,
    /// Chaff cards (kasu)
    Chaff,
}

impl Category {
    pub fn points(self) -> u8 {
        match self {
            Category::Light => 20,
            Category::Animal => 10,
            Category::Ribbon => 5,
            Category::Chaff => 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RibbonColor {
    Red,
    Blue,
    Plain,
    None,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Bright,
    Common,
}

/// Semantic markers used by the scoring rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Crane,
    Poetry,
    Warbler,
    Sakura,
    Curtain,
    Cuckoo,
    Bridge,
    Butterfly,
    Boar,
    Moon,
    Geese,
    Sake,
    Deer,
    Rain,
    Swallow,
    Lightning,
    Phoenix,
}

/// Stable catalog index of a card (0..48).
///
/// Renders as a slug such as `01-light-crane` and parses back from it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CardId(u8);

impl CardId {
    pub fn from_index(index: usize) -> Result<CardId, GameError> {
        if index < DECK_SIZE {
            Ok(CardId(index as u8))
        } else {
            Err(GameError::UnknownCard(index.to_string()))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn slug(self) -> &'static str {
        CATALOG[self.index()].slug
    }

    pub fn card(self) -> Card {
        CATALOG[self.index()]
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CardId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        CATALOG
            .iter()
            .find(|c| c.slug == needle)
            .map(|c| c.id)
            .ok_or_else(|| GameError::UnknownCard(needle.to_string()))
    }
}

impl Serialize for CardId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.slug())
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An immutable hanafuda card from the fixed catalog.
///
/// `variant` distinguishes the interchangeable chaff cards of one month
/// (1..=3); unique cards carry 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Card {
    pub id: CardId,
    #[serde(skip)]
    pub slug: &'static str,
    pub month: Month,
    pub name: &'static str,
    pub category: Category,
    pub ribbon_color: RibbonColor,
    pub rarity: Rarity,
    pub is_special: bool,
    pub points: u8,
    pub variant: u8,
    pub tags: &'static [Tag],
}

impl Card {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.slug)
    }
}

const fn def(
    index: u8,
    month: u8,
    slug: &'static str,
    name: &'static str,
    category: Category,
    ribbon_color: RibbonColor,
    variant: u8,
    tags: &'static [Tag],
) -> Card {
    let points = match category {
        Category::Light => 20,
        Category::Animal => 10,
        Category::Ribbon => 5,
        Category::Chaff => 1,
    };
    let rarity = match category {
        Category::Light => Rarity::Bright,
        _ => Rarity::Common,
    };
    Card {
        id: CardId(index),
        slug,
        month: Month(month),
        name,
        category,
        ribbon_color,
        rarity,
        is_special: false,
        points,
        variant,
        tags,
    }
}

const fn special(card: Card) -> Card {
    Card {
        is_special: true,
        ..card
    }
}

use Category::{Animal, Chaff, Light, Ribbon};
use RibbonColor::{Blue, Plain, Red};

const NONE: RibbonColor = RibbonColor::None;

#[rustfmt::skip]
static CATALOG: [Card; DECK_SIZE] = [
    def(0, 1, "01-light-crane", "Pine with Crane", Light, NONE, 0, &[Tag::Crane]),
    def(1, 1, "01-ribbon-poetry", "Pine Poetry Ribbon", Ribbon, Red, 0, &[Tag::Poetry]),
    def(2, 1, "01-chaff-a", "Pine Chaff", Chaff, NONE, 1, &[]),
    def(3, 1, "01-chaff-b", "Pine Chaff", Chaff, NONE, 2, &[]),
    def(4, 2, "02-animal-warbler", "Plum with Warbler", Animal, NONE, 0, &[Tag::Warbler]),
    def(5, 2, "02-ribbon-poetry", "Plum Poetry Ribbon", Ribbon, Red, 0, &[Tag::Poetry]),
    def(6, 2, "02-chaff-a", "Plum Chaff", Chaff, NONE, 1, &[]),
    def(7, 2, "02-chaff-b", "Plum Chaff", Chaff, NONE, 2, &[]),
    def(8, 3, "03-light-curtain", "Cherry with Curtain", Light, NONE, 0, &[Tag::Sakura, Tag::Curtain]),
    def(9, 3, "03-ribbon-poetry", "Cherry Poetry Ribbon", Ribbon, Red, 0, &[Tag::Poetry, Tag::Sakura]),
    def(10, 3, "03-chaff-a", "Cherry Chaff", Chaff, NONE, 1, &[Tag::Sakura]),
    def(11, 3, "03-chaff-b", "Cherry Chaff", Chaff, NONE, 2, &[Tag::Sakura]),
    def(12, 4, "04-animal-cuckoo", "Wisteria with Cuckoo", Animal, NONE, 0, &[Tag::Cuckoo]),
    def(13, 4, "04-ribbon", "Wisteria Ribbon", Ribbon, Plain, 0, &[]),
    def(14, 4, "04-chaff-a", "Wisteria Chaff", Chaff, NONE, 1, &[]),
    def(15, 4, "04-chaff-b", "Wisteria Chaff", Chaff, NONE, 2, &[]),
    def(16, 5, "05-animal-bridge", "Iris with Bridge", Animal, NONE, 0, &[Tag::Bridge]),
    def(17, 5, "05-ribbon", "Iris Ribbon", Ribbon, Plain, 0, &[]),
    def(18, 5, "05-chaff-a", "Iris Chaff", Chaff, NONE, 1, &[]),
    def(19, 5, "05-chaff-b", "Iris Chaff", Chaff, NONE, 2, &[]),
    def(20, 6, "06-animal-butterfly", "Peony with Butterflies", Animal, NONE, 0, &[Tag::Butterfly]),
    def(21, 6, "06-ribbon-blue", "Peony Blue Ribbon", Ribbon, Blue, 0, &[]),
    def(22, 6, "06-chaff-a", "Peony Chaff", Chaff, NONE, 1, &[]),
    def(23, 6, "06-chaff-b", "Peony Chaff", Chaff, NONE, 2, &[]),
    def(24, 7, "07-animal-boar", "Bush Clover with Boar", Animal, NONE, 0, &[Tag::Boar]),
    def(25, 7, "07-ribbon", "Bush Clover Ribbon", Ribbon, Plain, 0, &[]),
    def(26, 7, "07-chaff-a", "Bush Clover Chaff", Chaff, NONE, 1, &[]),
    def(27, 7, "07-chaff-b", "Bush Clover Chaff", Chaff, NONE, 2, &[]),
    def(28, 8, "08-light-moon", "Pampas with Moon", Light, NONE, 0, &[Tag::Moon]),
    def(29, 8, "08-animal-geese", "Pampas with Geese", Animal, NONE, 0, &[Tag::Geese]),
    def(30, 8, "08-chaff-a", "Pampas Chaff", Chaff, NONE, 1, &[]),
    def(31, 8, "08-chaff-b", "Pampas Chaff", Chaff, NONE, 2, &[]),
    def(32, 9, "09-animal-sake-cup", "Chrysanthemum with Sake Cup", Animal, NONE, 0, &[Tag::Sake]),
    def(33, 9, "09-ribbon-blue", "Chrysanthemum Blue Ribbon", Ribbon, Blue, 0, &[]),
    def(34, 9, "09-chaff-a", "Chrysanthemum Chaff", Chaff, NONE, 1, &[]),
    def(35, 9, "09-chaff-b", "Chrysanthemum Chaff", Chaff, NONE, 2, &[]),
    def(36, 10, "10-animal-deer", "Maple with Deer", Animal, NONE, 0, &[Tag::Deer]),
    def(37, 10, "10-ribbon-blue", "Maple Blue Ribbon", Ribbon, Blue, 0, &[]),
    def(38, 10, "10-chaff-a", "Maple Chaff", Chaff, NONE, 1, &[]),
    def(39, 10, "10-chaff-b", "Maple Chaff", Chaff, NONE, 2, &[]),
    special(def(40, 11, "11-light-rainman", "Willow with Rain Man", Light, NONE, 0, &[Tag::Rain])),
    def(41, 11, "11-animal-swallow", "Willow with Swallow", Animal, NONE, 0, &[Tag::Swallow]),
    def(42, 11, "11-ribbon", "Willow Ribbon", Ribbon, Plain, 0, &[]),
    special(def(43, 11, "11-chaff-lightning", "Willow Lightning", Chaff, NONE, 0, &[Tag::Lightning])),
    def(44, 12, "12-light-phoenix", "Paulownia with Phoenix", Light, NONE, 0, &[Tag::Phoenix]),
    def(45, 12, "12-chaff-a", "Paulownia Chaff", Chaff, NONE, 1, &[]),
    def(46, 12, "12-chaff-b", "Paulownia Chaff", Chaff, NONE, 2, &[]),
    def(47, 12, "12-chaff-c", "Paulownia Chaff", Chaff, NONE, 3, &[]),
];

/// All 48 cards in catalog order.
pub fn full_deck() -> Vec<Card> {
    CATALOG.to_vec()
}

pub fn cards_of_month(month: Month) -> Vec<Card> {
    CATALOG.iter().filter(|c| c.month == month).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn catalog_has_four_cards_per_month() {
        let mut counts: HashMap<Month, usize> = HashMap::new();
        for c in full_deck() {
            *counts.entry(c.month).or_default() += 1;
        }
        assert_eq!(counts.len(), 12);
        assert!(counts.values().all(|&n| n == 4));
    }

    #[test]
    fn catalog_category_distribution() {
        let deck = full_deck();
        let count = |cat| deck.iter().filter(|c| c.category == cat).count();
        assert_eq!(count(Category::Light), 5);
        assert_eq!(count(Category::Animal), 9);
        assert_eq!(count(Category::Ribbon), 10);
        assert_eq!(count(Category::Chaff), 24);
    }

    #[test]
    fn ids_match_catalog_positions() {
        for (i, c) in full_deck().iter().enumerate() {
            assert_eq!(c.id.index(), i);
            assert_eq!(c.points, c.category.points());
        }
    }

    #[test]
    fn slug_round_trips_through_parse() {
        let id: CardId = "12-chaff-c".parse().unwrap();
        assert_eq!(id.card().variant, 3);
        assert_eq!(id.to_string(), "12-chaff-c");
        assert!("13-light-sun".parse::<CardId>().is_err());
    }

    #[test]
    fn chaff_variants_are_explicit() {
        let paulownia = cards_of_month(Month::new(12).unwrap());
        let variants: Vec<u8> = paulownia
            .iter()
            .filter(|c| c.category == Category::Chaff)
            .map(|c| c.variant)
            .collect();
        assert_eq!(variants, vec![1, 2, 3]);
    }

    #[test]
    fn month_rejects_out_of_range() {
        assert!(Month::new(0).is_none());
        assert!(Month::new(13).is_none());
        assert_eq!(Month::new(8).unwrap().label(), "Pampas Grass");
    }

    #[test]
    fn month_deserializes_only_in_range() {
        let march: Month = serde_json::from_str("3").unwrap();
        assert_eq!(march.kanji(), "桜");
        assert_eq!(serde_json::to_string(&march).unwrap(), "3");
        assert!(serde_json::from_str::<Month>("0").is_err());
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn every_cherry_card_carries_sakura() {
        let cherry = cards_of_month(Month::new(3).unwrap());
        assert_eq!(cherry.len(), 4);
        assert!(cherry.iter().all(|c| c.has_tag(Tag::Sakura)));
    }
}
