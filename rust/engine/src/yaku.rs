use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Category, Month, RibbonColor, Tag};

/// Stable identity of a scoring pattern, used to spot newly formed yaku
/// from one turn to the next.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YakuKey {
    FiveLights,
    RainFourLights,
    FourLights,
    ThreeLights,
    HanamiSake,
    TsukimiSake,
    Inoshikacho,
    RedRibbons,
    BlueRibbons,
    AnimalSet,
    RibbonSet,
    ChaffSet,
    MonthQuad,
}

impl YakuKey {
    pub fn name(self) -> &'static str {
        match self {
            YakuKey::FiveLights => "Five Lights (Goko)",
            YakuKey::RainFourLights => "Rainy Four Lights (Ame-Shiko)",
            YakuKey::FourLights => "Four Lights (Shiko)",
            YakuKey::ThreeLights => "Three Lights (Sanko)",
            YakuKey::HanamiSake => "Flower Viewing Sake (Hanami-zake)",
            YakuKey::TsukimiSake => "Moon Viewing Sake (Tsukimi-zake)",
            YakuKey::Inoshikacho => "Boar, Deer, Butterfly (Inoshikacho)",
            YakuKey::RedRibbons => "Red Poetry Ribbons (Akatan)",
            YakuKey::BlueRibbons => "Blue Ribbons (Aotan)",
            YakuKey::AnimalSet => "Animals (Tane)",
            YakuKey::RibbonSet => "Ribbons (Tan)",
            YakuKey::ChaffSet => "Chaff (Kasu)",
            YakuKey::MonthQuad => "Same Month Quad (Kuttsuki)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YakuKey::FiveLights => "five-lights",
            YakuKey::RainFourLights => "rain-four-lights",
            YakuKey::FourLights => "four-lights",
            YakuKey::ThreeLights => "three-lights",
            YakuKey::HanamiSake => "hanami-sake",
            YakuKey::TsukimiSake => "tsukimi-sake",
            YakuKey::Inoshikacho => "inoshikacho",
            YakuKey::RedRibbons => "red-ribbons",
            YakuKey::BlueRibbons => "blue-ribbons",
            YakuKey::AnimalSet => "animal-set",
            YakuKey::RibbonSet => "ribbon-set",
            YakuKey::ChaffSet => "chaff-set",
            YakuKey::MonthQuad => "month-quad",
        }
    }
}

impl fmt::Display for YakuKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A formed scoring pattern and the points it is worth right now.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Yaku {
    pub key: YakuKey,
    pub points: u32,
}

impl Yaku {
    fn new(key: YakuKey, points: u32) -> Self {
        Self { key, points }
    }

    pub fn name(&self) -> &'static str {
        self.key.name()
    }
}

#[derive(Default)]
struct Tally {
    lights: usize,
    animals: usize,
    ribbons: usize,
    chaff: usize,
    red: usize,
    blue: usize,
    rain_light: bool,
    months: HashMap<Month, usize>,
    tags: Vec<Tag>,
}

impl Tally {
    fn of(cards: &[Card]) -> Self {
        let mut t = Tally::default();
        for c in cards {
            match c.category {
                Category::Light => {
                    t.lights += 1;
                    t.rain_light |= c.has_tag(Tag::Rain);
                }
                Category::Animal => t.animals += 1,
                Category::Ribbon => {
                    t.ribbons += 1;
                    match c.ribbon_color {
                        RibbonColor::Red => t.red += 1,
                        RibbonColor::Blue => t.blue += 1,
                        RibbonColor::Plain | RibbonColor::None => {}
                    }
                }
                Category::Chaff => t.chaff += 1,
            }
            *t.months.entry(c.month).or_default() += 1;
            t.tags.extend_from_slice(c.tags);
        }
        t
    }

    fn has(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Points for a counted set: `base` at `threshold` cards, +1 per extra card.
fn set_points(base: u32, count: usize, threshold: usize) -> u32 {
    base + (count - threshold) as u32
}

/// Evaluates every scoring pattern formed by a captured pile.
///
/// The light patterns are mutually exclusive; every other rule is
/// independent and may stack. The result depends only on the multiset of
/// cards, never on capture order, and lists yaku in rule order.
///
/// # Examples
///
/// ```
/// use koikoi_engine::cards::CardId;
/// use koikoi_engine::yaku::{evaluate, YakuKey};
///
/// let cards: Vec<_> = ["07-animal-boar", "10-animal-deer", "06-animal-butterfly"]
///     .iter()
///     .map(|s| s.parse::<CardId>().unwrap().card())
///     .collect();
/// let yaku = evaluate(&cards);
/// assert_eq!(yaku[0].key, YakuKey::Inoshikacho);
/// assert_eq!(yaku[0].points, 5);
/// ```
pub fn evaluate(cards: &[Card]) -> Vec<Yaku> {
    if cards.is_empty() {
        return Vec::new();
    }
    let t = Tally::of(cards);
    let mut out = Vec::new();

    match t.lights {
        5 => out.push(Yaku::new(YakuKey::FiveLights, 10)),
        4 if t.rain_light => out.push(Yaku::new(YakuKey::RainFourLights, 7)),
        4 => out.push(Yaku::new(YakuKey::FourLights, 8)),
        3 if !t.rain_light => out.push(Yaku::new(YakuKey::ThreeLights, 5)),
        _ => {}
    }

    if t.has(Tag::Sakura) && t.has(Tag::Sake) {
        out.push(Yaku::new(YakuKey::HanamiSake, 5));
    }
    if t.has(Tag::Moon) && t.has(Tag::Sake) {
        out.push(Yaku::new(YakuKey::TsukimiSake, 5));
    }
    if t.has(Tag::Boar) && t.has(Tag::Deer) && t.has(Tag::Butterfly) {
        out.push(Yaku::new(YakuKey::Inoshikacho, 5));
    }

    if t.red >= 3 {
        out.push(Yaku::new(YakuKey::RedRibbons, set_points(5, t.red, 3)));
    }
    if t.blue >= 3 {
        out.push(Yaku::new(YakuKey::BlueRibbons, set_points(5, t.blue, 3)));
    }
    if t.animals >= 5 {
        out.push(Yaku::new(YakuKey::AnimalSet, set_points(1, t.animals, 5)));
    }
    if t.ribbons >= 5 {
        out.push(Yaku::new(YakuKey::RibbonSet, set_points(1, t.ribbons, 5)));
    }
    if t.chaff >= 10 {
        out.push(Yaku::new(YakuKey::ChaffSet, set_points(1, t.chaff, 10)));
    }

    if t.months.values().any(|&n| n >= 4) {
        out.push(Yaku::new(YakuKey::MonthQuad, 4));
    }

    out
}

pub fn sum_points(yaku: &[Yaku]) -> u32 {
    yaku.iter().map(|y| y.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{full_deck, CardId};

    fn cards(slugs: &[&str]) -> Vec<Card> {
        slugs
            .iter()
            .map(|s| s.parse::<CardId>().unwrap().card())
            .collect()
    }

    fn keys(yaku: &[Yaku]) -> Vec<YakuKey> {
        yaku.iter().map(|y| y.key).collect()
    }

    #[test]
    fn empty_pile_forms_nothing() {
        assert!(evaluate(&[]).is_empty());
    }

    #[test]
    fn three_lights_without_rain() {
        let y = evaluate(&cards(&["01-light-crane", "03-light-curtain", "08-light-moon"]));
        assert_eq!(keys(&y), vec![YakuKey::ThreeLights]);
        assert_eq!(sum_points(&y), 5);
    }

    #[test]
    fn three_lights_with_rain_scores_nothing() {
        let y = evaluate(&cards(&["01-light-crane", "11-light-rainman", "08-light-moon"]));
        assert!(y.is_empty());
    }

    #[test]
    fn four_lights_branches_on_rain() {
        let dry = evaluate(&cards(&[
            "01-light-crane",
            "03-light-curtain",
            "08-light-moon",
            "12-light-phoenix",
        ]));
        assert_eq!(dry[0], Yaku::new(YakuKey::FourLights, 8));

        let wet = evaluate(&cards(&[
            "01-light-crane",
            "03-light-curtain",
            "08-light-moon",
            "11-light-rainman",
        ]));
        assert_eq!(wet[0], Yaku::new(YakuKey::RainFourLights, 7));
    }

    #[test]
    fn five_lights_is_exclusive_of_other_light_yaku() {
        let y = evaluate(&cards(&[
            "01-light-crane",
            "03-light-curtain",
            "08-light-moon",
            "11-light-rainman",
            "12-light-phoenix",
        ]));
        assert_eq!(keys(&y), vec![YakuKey::FiveLights]);
        assert_eq!(y[0].points, 10);
    }

    #[test]
    fn sake_viewing_yaku_stack() {
        let y = evaluate(&cards(&["03-light-curtain", "08-light-moon", "09-animal-sake-cup"]));
        assert_eq!(keys(&y), vec![YakuKey::HanamiSake, YakuKey::TsukimiSake]);
        assert_eq!(sum_points(&y), 10);
    }

    #[test]
    fn any_cherry_card_counts_as_blossom() {
        let y = evaluate(&cards(&["03-ribbon-poetry", "09-animal-sake-cup"]));
        assert_eq!(keys(&y), vec![YakuKey::HanamiSake]);
        assert_eq!(y[0].points, 5);

        let y = evaluate(&cards(&["03-chaff-b", "09-animal-sake-cup"]));
        assert_eq!(keys(&y), vec![YakuKey::HanamiSake]);
    }

    #[test]
    fn ribbon_sets_grow_with_extra_cards() {
        let y = evaluate(&cards(&[
            "01-ribbon-poetry",
            "02-ribbon-poetry",
            "03-ribbon-poetry",
            "06-ribbon-blue",
            "09-ribbon-blue",
            "10-ribbon-blue",
            "04-ribbon",
        ]));
        assert_eq!(
            y,
            vec![
                Yaku::new(YakuKey::RedRibbons, 5),
                Yaku::new(YakuKey::BlueRibbons, 5),
                Yaku::new(YakuKey::RibbonSet, 3),
            ]
        );
    }

    #[test]
    fn chaff_bonus_for_extra_cards() {
        let chaff: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| c.category == Category::Chaff)
            .take(11)
            .collect();
        let y = evaluate(&chaff);
        let kasu = y.iter().find(|y| y.key == YakuKey::ChaffSet).unwrap();
        assert_eq!(kasu.points, 2);
    }

    #[test]
    fn animal_set_and_inoshikacho_coexist() {
        let y = evaluate(&cards(&[
            "07-animal-boar",
            "10-animal-deer",
            "06-animal-butterfly",
            "02-animal-warbler",
            "04-animal-cuckoo",
        ]));
        assert_eq!(keys(&y), vec![YakuKey::Inoshikacho, YakuKey::AnimalSet]);
        assert_eq!(sum_points(&y), 6);
    }

    #[test]
    fn month_quad_detected() {
        let y = evaluate(&cards(&["05-animal-bridge", "05-ribbon", "05-chaff-a", "05-chaff-b"]));
        assert_eq!(keys(&y), vec![YakuKey::MonthQuad]);
    }

    #[test]
    fn order_independent() {
        let mut pile = cards(&[
            "01-light-crane",
            "03-light-curtain",
            "09-animal-sake-cup",
            "08-light-moon",
            "06-ribbon-blue",
        ]);
        let forward = evaluate(&pile);
        pile.reverse();
        assert_eq!(forward, evaluate(&pile));
    }

    #[test]
    fn key_strings_match_serde_names() {
        for key in [YakuKey::RainFourLights, YakuKey::MonthQuad, YakuKey::Inoshikacho] {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
