use crate::authors::AuthorStyles;
use crate::cast::select_cast;
use crate::content::{generate_quote, generate_topic};
use crate::dialogue::generate_dialogue;
use crate::prose::{prose_to_html, refine_to_prose};
use crate::weather::WeatherSummary;
use chrono::{DateTime, Datelike, Local};
use log::info;
use serde::Serialize;

/// Final output record for one newsletter run.
#[derive(Debug, Serialize)]
pub struct Issue {
    pub date: String,
    pub topic: String,
    pub quote: String,
    pub author: String,
    pub author_name: String,
    pub characters: Vec<String>,
    pub weather_summary: String,
    pub prose_text: String,
    pub prose_html: String,
    pub generated_at: String,
}

pub struct IssueParams<'a> {
    pub author: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    /// Accepted for parity with the dispatcher's interface; not consumed by
    /// any generation step.
    pub garden_context: &'a str,
    pub num_chars: usize,
}

pub fn build_issue(
    params: &IssueParams<'_>,
    weather: &WeatherSummary,
    styles: &AuthorStyles,
    now: DateTime<Local>,
) -> Issue {
    let date = now.format("%B %d, %Y").to_string();
    let topic = generate_topic(now.month(), weather, params.city, params.state);
    let quote = generate_quote();

    let cast = select_cast(params.num_chars);
    let characters: Vec<String> = cast.iter().map(|c| c.name.to_string()).collect();
    info!("Characters: {}", characters.join(", "));

    let dialogue = generate_dialogue(&cast, &topic);
    let style = styles.resolve(params.author);
    let prose_text = refine_to_prose(&dialogue, style);
    let prose_html = prose_to_html(&prose_text);

    Issue {
        date,
        topic,
        quote,
        author: params.author.to_string(),
        author_name: styles.display_name(params.author),
        characters,
        weather_summary: weather.current.clone(),
        prose_text,
        prose_html,
        generated_at: now.to_rfc3339(),
    }
}

impl Issue {
    pub fn render_text(&self) -> String {
        format!(
            "GARDEN CONVERSATION - {}\nTopic: {}\nCharacters: {}\n\n{}\n\n{}",
            self.date,
            self.topic,
            self.characters.join(", "),
            self.prose_text,
            self.quote
        )
    }
}
