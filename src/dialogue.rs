use crate::cast::{voice_descriptor, Character};
use log::debug;
use rand::seq::IndexedRandom;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DialogueTurn {
    pub character: String,
    pub line: String,
}

fn opening_lines(topic: &str) -> [String; 3] {
    let topic = topic.to_lowercase();
    [
        format!("Been thinking about {} lately.", topic),
        format!("Weather like this, can't help but think about {}.", topic),
        format!("Anyone else wrestling with {} this week?", topic),
    ]
}

const CLOSING_LINES: [&str; 3] = [
    "That's the thing about gardening. Patience.",
    "Well, I better get back to it. The garden waits for no one.",
    "Speaking of which, I've got beds to tend.",
];

fn middle_lines(topic: &str) -> [String; 4] {
    let topic = topic.to_lowercase();
    [
        format!("I've always found {} requires a certain approach.", topic),
        "My grandmother used to say something about that.".to_string(),
        "The key is paying attention to what the plants tell you.".to_string(),
        "Takes years to really understand, doesn't it?".to_string(),
    ]
}

/// One line per character, in speaking order. The opening branch is checked
/// before the closing branch, so a single-character dialogue draws from the
/// opening pool.
pub fn generate_dialogue(cast: &[&Character], topic: &str) -> Vec<DialogueTurn> {
    let mut rng = rand::rng();
    let mut dialogue = Vec::with_capacity(cast.len());

    for (i, character) in cast.iter().enumerate() {
        debug!("{} speaks as: {}", character.name, voice_descriptor(character.name));

        let line = if i == 0 {
            opening_lines(topic).choose(&mut rng).unwrap().clone()
        } else if i == cast.len() - 1 {
            CLOSING_LINES.choose(&mut rng).unwrap().to_string()
        } else {
            middle_lines(topic).choose(&mut rng).unwrap().clone()
        };

        dialogue.push(DialogueTurn {
            character: character.name.to_string(),
            line,
        });
    }

    dialogue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::CAST;

    const TOPIC: &str = "Dividing Perennials";

    #[test]
    fn test_one_turn_per_character_in_order() {
        let cast: Vec<&Character> = CAST.iter().take(4).collect();
        let dialogue = generate_dialogue(&cast, TOPIC);
        assert_eq!(dialogue.len(), 4);
        for (turn, character) in dialogue.iter().zip(&cast) {
            assert_eq!(turn.character, character.name);
        }
    }

    #[test]
    fn test_opening_line_interpolates_topic() {
        let cast: Vec<&Character> = CAST.iter().take(3).collect();
        for _ in 0..20 {
            let dialogue = generate_dialogue(&cast, TOPIC);
            let openings = opening_lines(TOPIC);
            assert!(openings.contains(&dialogue[0].line));
            assert!(dialogue[0].line.contains("dividing perennials"));
        }
    }

    #[test]
    fn test_closing_line_from_closing_pool() {
        let cast: Vec<&Character> = CAST.iter().take(3).collect();
        for _ in 0..20 {
            let dialogue = generate_dialogue(&cast, TOPIC);
            let last = &dialogue.last().unwrap().line;
            assert!(CLOSING_LINES.contains(&last.as_str()));
        }
    }

    #[test]
    fn test_middle_lines_from_middle_pool() {
        let cast: Vec<&Character> = CAST.iter().take(4).collect();
        for _ in 0..20 {
            let dialogue = generate_dialogue(&cast, TOPIC);
            let middles = middle_lines(TOPIC);
            for turn in &dialogue[1..3] {
                assert!(middles.contains(&turn.line));
            }
        }
    }

    #[test]
    fn test_single_character_uses_opening_pool() {
        let cast: Vec<&Character> = CAST.iter().take(1).collect();
        for _ in 0..20 {
            let dialogue = generate_dialogue(&cast, TOPIC);
            assert_eq!(dialogue.len(), 1);
            assert!(opening_lines(TOPIC).contains(&dialogue[0].line));
        }
    }

    #[test]
    fn test_empty_cast_yields_empty_dialogue() {
        assert!(generate_dialogue(&[], TOPIC).is_empty());
    }
}
