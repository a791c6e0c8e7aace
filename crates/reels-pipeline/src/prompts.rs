//! Prompt templates sent to the language model

/// System instruction for subtopic and script requests
pub const DIRECT_RESPONSE_SYSTEM: &str = "You are a direct response system. Only output the exact requested \
     content with no additional text, formatting, or explanations.";

/// System instruction for turning a script chunk into an image prompt
pub const IMAGE_PROMPT_SYSTEM: &str = "You are a visual prompt engineer. Create a detailed, vivid image \
     generation prompt that captures the main theme or concept from the given text.";

/// Ask for `count` related subtopics as a bare JSON array
pub fn subtopics(topic: &str, count: usize) -> String {
    let example = (1..=count)
        .map(|n| format!("\"topic {n}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Given the research topic \"{topic}\", generate {count} related subtopics. Return ONLY a JSON array \
         of strings with no markdown formatting, backticks, or additional text. For example: [{example}]"
    )
}

/// Ask for a short narration script about one subtopic
pub fn script(subtopic: &str) -> String {
    format!(
        "Tell me in a short educational response about \"{subtopic}\" suitable for a 30-second video. \
         The speech should be engaging and informative."
    )
}

/// Ask for an image prompt capturing one chunk of a script
pub fn image_prompt(chunk: &str) -> String {
    format!(
        "Generate an image prompt that captures the main theme of this text: \"{chunk}\". The prompt should \
         be detailed and specific, focusing on creating an educational and visually appealing image."
    )
}

const TOPIC_IMAGE_TEMPLATES: [&str; 3] = [
    "An image representing",
    "A visual explanation of",
    "An infographic about",
];

/// Image prompts built from the subtopic title alone, at most one per template
pub fn topic_images(subtopic: &str, count: usize) -> Vec<String> {
    TOPIC_IMAGE_TEMPLATES
        .iter()
        .take(count)
        .map(|template| format!("{template} {subtopic}"))
        .collect()
}
