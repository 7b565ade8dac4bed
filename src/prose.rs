use crate::authors::AuthorStyle;
use crate::dialogue::DialogueTurn;
use rand::seq::IndexedRandom;

/// Convert the dialogue to prose narrative. The author style is resolved by
/// the caller but does not alter the wording; only the result's author
/// fields reflect the selection.
pub fn refine_to_prose(dialogue: &[DialogueTurn], _style: &AuthorStyle) -> String {
    let mut rng = rand::rng();
    let mut prose_lines = Vec::with_capacity(dialogue.len());

    for (i, turn) in dialogue.iter().enumerate() {
        let rendered = if i == 0 {
            format!(
                "\"{}\" {} said, surveying the morning garden.",
                turn.line, turn.character
            )
        } else if i == dialogue.len() - 1 {
            format!("{} nodded slowly. \"{}\"", turn.character, turn.line)
        } else {
            let beats = [
                format!("\"{}\" {} replied.", turn.line, turn.character),
                format!("{} considered this. \"{}\"", turn.character, turn.line),
                format!("\"{}\"", turn.line),
            ];
            beats.choose(&mut rng).unwrap().clone()
        };
        prose_lines.push(rendered);
    }

    prose_lines.join("\n\n")
}

pub fn prose_to_html(prose: &str) -> String {
    format!(
        "<p>{}</p>",
        prose.replace("\n\n", "</p><p>").replace('\n', "<br>")
    )
}
