use rand::seq::{IndexedRandom, SliceRandom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Character {
    pub id: &'static str,
    pub name: &'static str,
}

/// Full cast of characters.
pub const CAST: [Character; 12] = [
    Character { id: "buckthorn", name: "Buck Thorn" },
    Character { id: "harry-kvetch", name: "Harry Kvetch" },
    Character { id: "miss-canthus", name: "Ms. Canthus" },
    Character { id: "poppy-seed", name: "Poppy Seed" },
    Character { id: "ivy-league", name: "Ivy League" },
    Character { id: "chelsea-flower", name: "Chelsea Flower" },
    Character { id: "buster-native", name: "Buster Native" },
    Character { id: "fern", name: "Fern Young" },
    Character { id: "esther-potts", name: "Esther Potts" },
    Character { id: "herb-berryman", name: "Herb Berryman" },
    Character { id: "muso-maple", name: "Muso Maple" },
    Character { id: "edie-bell", name: "Edie Bell" },
];

/// One-line tone hint per character. Metadata only; generation never reads it.
pub fn voice_descriptor(name: &str) -> &'static str {
    match name {
        "Buck Thorn" => "practical, no-nonsense, references decades of experience",
        "Harry Kvetch" => "perpetual worrier, sees problems everywhere, endearing pessimism",
        "Ms. Canthus" => "elegant, formal, quotes poetry, slightly imperious",
        "Poppy Seed" => "dreamy, optimistic, tends to wander off-topic",
        "Ivy League" => "academic, loves Latin names, can be pedantic",
        "Chelsea Flower" => "competition gardener, perfectionist, name-drops varieties",
        "Buster Native" => "native plant advocate, environmental consciousness",
        "Fern Young" => "new gardener, asks good questions, eager learner",
        "Esther Potts" => "container gardening specialist, apartment gardener",
        "Herb Berryman" => "culinary focus, grows for the kitchen",
        "Muso Maple" => "tree specialist, long-term thinker",
        "Edie Bell" => "elderly, wise, remembers how things used to be done",
        _ => "thoughtful gardener",
    }
}

/// Pick `num_chars` distinct characters (clamped to the roster size), then
/// reshuffle so speaking order is independent of selection order.
pub fn select_cast(num_chars: usize) -> Vec<&'static Character> {
    let mut rng = rand::rng();
    let count = num_chars.min(CAST.len());
    let mut chosen: Vec<&'static Character> = CAST.choose_multiple(&mut rng, count).collect();
    chosen.shuffle(&mut rng);
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_select_cast_returns_requested_count() {
        for n in 1..=12 {
            let cast = select_cast(n);
            assert_eq!(cast.len(), n);
        }
    }

    #[test]
    fn test_select_cast_clamps_to_roster_size() {
        assert_eq!(select_cast(30).len(), CAST.len());
    }

    #[test]
    fn test_select_cast_has_no_duplicates() {
        for _ in 0..50 {
            let cast = select_cast(12);
            let names: HashSet<&str> = cast.iter().map(|c| c.name).collect();
            assert_eq!(names.len(), cast.len());
        }
    }

    #[test]
    fn test_select_cast_draws_from_roster() {
        let roster: HashSet<&str> = CAST.iter().map(|c| c.name).collect();
        for character in select_cast(6) {
            assert!(roster.contains(character.name));
        }
    }

    #[test]
    fn test_voice_descriptor_known_and_unknown() {
        assert_eq!(
            voice_descriptor("Fern Young"),
            "new gardener, asks good questions, eager learner"
        );
        assert_eq!(voice_descriptor("Nobody"), "thoughtful gardener");
    }
}
