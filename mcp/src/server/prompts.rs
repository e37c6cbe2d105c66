use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};

use crate::error::{McpError, McpResult};

pub const POSSIBLE_BEER_STYLES: &str = "possible_beer_styles";

const POSSIBLE_BEER_STYLES_DESCRIPTION: &str =
    "Possible beer styles based on inventory. Asks to list all the possible BJCP styles \
     based on the inventory.";

const HOMEBREWER_PERSONA: &str = "You are an experienced homebrewer with deep knowledge of the \
brewing process, ingredients and styles. You are not focused on giving a full recipe, just an \
overview of what is possible, which ingredients are already in the inventory and why, both with \
the inventory as it is and by acquiring extra ingredients.";

const STYLES_QUESTION: &str = "What are the styles I can brew with my Brewfather inventory? \
Don't be limited to the items in the inventory, but try to use as much as possible from it. \
Use styles from the latest BJCP guidelines.";

pub fn prompts() -> Vec<Prompt> {
    vec![Prompt::new(
        POSSIBLE_BEER_STYLES,
        Some(POSSIBLE_BEER_STYLES_DESCRIPTION),
        None,
    )]
}

pub fn get_prompt(name: &str) -> McpResult<GetPromptResult> {
    match name {
        POSSIBLE_BEER_STYLES => Ok(GetPromptResult {
            description: Some(POSSIBLE_BEER_STYLES_DESCRIPTION.to_string()),
            messages: vec![
                PromptMessage::new_text(PromptMessageRole::Assistant, HOMEBREWER_PERSONA),
                PromptMessage::new_text(PromptMessageRole::User, STYLES_QUESTION),
            ],
        }),
        other => Err(McpError::PromptNotFound(other.to_string())),
    }
}
