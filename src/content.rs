use crate::weather::WeatherSummary;
use rand::seq::IndexedRandom;

const WINTER_TOPICS: [&str; 4] = [
    "Planning spring beds while frost holds",
    "Seed catalogs and winter dreams",
    "Pruning dormant trees",
    "Checking perennials for heaving",
];

const SPRING_TOPICS: [&str; 4] = [
    "Last frost dates and early planting",
    "Starting seeds indoors",
    "Soil preparation for spring",
    "Dividing perennials",
];

const SUMMER_TOPICS: [&str; 4] = [
    "Deep watering in the heat",
    "Succession planting for fall harvest",
    "Managing pests organically",
    "Mulching to conserve moisture",
];

const FALL_TOPICS: [&str; 4] = [
    "Fall cleanup and bed prep",
    "Planting garlic for next year",
    "Protecting tender plants from frost",
    "Composting fallen leaves",
];

const QUOTES: [(&str, &str); 8] = [
    ("To plant a garden is to believe in tomorrow.", "Audrey Hepburn"),
    ("A garden requires patient labor and attention.", "Liberty Hyde Bailey"),
    (
        "The glory of gardening: hands in the dirt, head in the sun, heart with nature.",
        "Alfred Austin",
    ),
    (
        "Gardens are not made by singing 'Oh, how beautiful,' and sitting in the shade.",
        "Rudyard Kipling",
    ),
    ("He who plants a garden plants happiness.", "Chinese Proverb"),
    (
        "In every gardener there is a child who believes in The Seed Fairy.",
        "Robert Brault",
    ),
    (
        "The garden suggests there might be a place where we can meet nature halfway.",
        "Michael Pollan",
    ),
    ("A weed is but an unloved flower.", "Ella Wheeler Wilcox"),
];

/// Topic pool for a calendar month, bucketed into meteorological seasons.
pub fn topics_for_month(month: u32) -> &'static [&'static str; 4] {
    match month {
        12 | 1 | 2 => &WINTER_TOPICS,
        3..=5 => &SPRING_TOPICS,
        6..=8 => &SUMMER_TOPICS,
        _ => &FALL_TOPICS,
    }
}

/// Pick a garden topic for the day. Weather and location are accepted but do
/// not influence selection.
pub fn generate_topic(
    month: u32,
    _weather: &WeatherSummary,
    _city: &str,
    _state: &str,
) -> String {
    let mut rng = rand::rng();
    topics_for_month(month).choose(&mut rng).unwrap().to_string()
}

/// A random garden quote with attribution.
pub fn generate_quote() -> String {
    let mut rng = rand::rng();
    let (quote, author) = QUOTES.choose(&mut rng).unwrap();
    format!("{} -- {}", quote, author)
}
