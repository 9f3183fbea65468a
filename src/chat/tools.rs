// ABOUTME: Function declarations offered to the text model
// ABOUTME: Player stats, player comparison and career milestone lookups

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A callable tool described to the text model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments
    pub parameters: Value,
}

impl FunctionDeclaration {
    fn new(name: &str, description: &str, parameters: Value) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters,
        }
    }

    /// Names of the arguments the model must supply
    pub fn required(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Tools attached to every text request
pub fn player_tools() -> Vec<FunctionDeclaration> {
    vec![
        FunctionDeclaration::new(
            "get_nba_player_stats",
            "Fetch real-time or historical NBA player performance statistics.",
            json!({
                "type": "object",
                "properties": {
                    "playerName": { "type": "string", "description": "The name of the NBA player." },
                    "season": { "type": "string", "description": "The season for which to fetch stats (e.g., 2024-25, 2012-13)." }
                },
                "required": ["playerName"]
            }),
        ),
        FunctionDeclaration::new(
            "compare_nba_players",
            "Fetch side-by-side comparison data for two or more NBA players.",
            json!({
                "type": "object",
                "properties": {
                    "playerNames": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of player names to compare."
                    },
                    "season": { "type": "string", "description": "The season to compare (defaults to current)." }
                },
                "required": ["playerNames"]
            }),
        ),
        FunctionDeclaration::new(
            "get_player_career_milestones",
            "Retrieve awards, records, and significant milestones throughout a players career.",
            json!({
                "type": "object",
                "properties": {
                    "playerName": { "type": "string", "description": "The name of the NBA player." }
                },
                "required": ["playerName"]
            }),
        ),
    ]
}
