use crate::errors::*;
use crate::models::{Dataset, Entity, TrainingExample};
use crate::utils::IntentName;

pub const SAMPLE_INTENTS: [&str; 5] = [
    "book_flight",
    "cancel_booking",
    "weather_query",
    "book_table",
    "help_request",
];

pub const SAMPLE_ENTITIES: [&str; 4] = ["destination", "time", "number", "account"];

fn example(text: &str, intent: &str, entities: Vec<Entity>) -> TrainingExample {
    TrainingExample {
        text: text.to_string(),
        intent: intent.to_string(),
        entities,
    }
}

pub fn sample_training_examples() -> Vec<TrainingExample> {
    vec![
        example(
            "I want to book a flight to New York",
            "book_flight",
            vec![Entity::new("destination", "New York").with_offsets(26, 34)],
        ),
        example("Cancel my reservation", "cancel_booking", vec![]),
        example(
            "What's the weather like today?",
            "weather_query",
            vec![Entity::new("time", "today").with_offsets(24, 29)],
        ),
        example(
            "Book a table for 4 people",
            "book_table",
            vec![Entity::new("number", "4").with_offsets(17, 18)],
        ),
        example("I need help with my account", "help_request", vec![]),
    ]
}

pub fn sample_intents() -> Vec<IntentName> {
    SAMPLE_INTENTS.iter().map(|intent| intent.to_string()).collect()
}

pub fn sample_dataset() -> Dataset {
    Dataset {
        training_data: sample_training_examples(),
        intents: sample_intents(),
        entities: SAMPLE_ENTITIES.iter().map(|e| e.to_string()).collect(),
    }
}

pub fn sample_training_data_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&sample_training_examples())?)
}
