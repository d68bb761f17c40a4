//! Recipe synthesis from a free-text ingredient list.
//!
//! No external recipe API is involved: suggestions are templated locally from
//! the canonical ingredient phrase, and image URLs point at a keyword search
//! endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The pantry payload as clients send it: either a JSON array of items or a
/// single free-text value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum PantryInput {
    Items(Vec<serde_json::Value>),
    Text(String),
    Other(serde_json::Value),
}

impl Default for PantryInput {
    fn default() -> Self {
        PantryInput::Text(String::new())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Recipe {
    pub title: String,
    pub image: String,
    pub link: String,
    pub instructions: String,
}

/// No recipe pages exist to link to; cards carry a placeholder.
const PLACEHOLDER_LINK: &str = "#";

fn stringify(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Collapses the pantry payload into the canonical ingredient phrase:
/// comma-joined, trimmed, empty parts dropped. Defaults to "food" when
/// nothing usable remains.
pub fn canonical_phrase(input: &PantryInput) -> String {
    let raw = match input {
        PantryInput::Items(items) => items
            .iter()
            .map(stringify)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(","),
        PantryInput::Text(s) => s.clone(),
        PantryInput::Other(v) => stringify(v),
    };

    let cleaned = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(",");

    if cleaned.is_empty() {
        "food".to_string()
    } else {
        cleaned
    }
}

/// Image search URL for the phrase plus a style keyword, percent-encoded.
fn image_url(phrase: &str, style: &str) -> String {
    format!(
        "https://source.unsplash.com/800x600/?{},{}",
        urlencoding::encode(phrase),
        urlencoding::encode(style)
    )
}

/// Derives exactly three recipe suggestions from the pantry payload.
///
/// `diet` is accepted for API compatibility but does not currently filter the
/// output (see DESIGN.md).
pub fn generate(input: &PantryInput, diet: &str) -> Vec<Recipe> {
    let _ = diet;
    let phrase = canonical_phrase(input);

    vec![
        Recipe {
            title: format!("Creative Dish with {phrase}"),
            image: image_url(&phrase, "food"),
            link: PLACEHOLDER_LINK.to_string(),
            instructions: format!(
                "Use {phrase} in a creative way. Mix, cook, and enjoy a delicious {phrase} dish!"
            ),
        },
        Recipe {
            title: format!("Fusion {phrase} Curry"),
            image: image_url(&phrase, "curry"),
            link: PLACEHOLDER_LINK.to_string(),
            instructions: format!("Cook {phrase} with spices and herbs to make a flavorful curry."),
        },
        Recipe {
            title: format!("Healthy {phrase} Salad"),
            image: image_url(&phrase, "salad"),
            link: PLACEHOLDER_LINK.to_string(),
            instructions: format!(
                "Combine {phrase} with fresh veggies and dressing for a healthy salad."
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(values: Vec<serde_json::Value>) -> PantryInput {
        PantryInput::Items(values)
    }

    #[test]
    fn list_input_is_normalized() {
        let input = items(vec![json!("egg"), json!(""), json!(" milk ")]);
        assert_eq!(canonical_phrase(&input), "egg,milk");
    }

    #[test]
    fn empty_list_defaults_to_food() {
        assert_eq!(canonical_phrase(&items(vec![])), "food");
    }

    #[test]
    fn text_input_is_split_and_trimmed() {
        let input = PantryInput::Text(" egg , , milk,,".to_string());
        assert_eq!(canonical_phrase(&input), "egg,milk");
    }

    #[test]
    fn null_input_defaults_to_food() {
        let input = PantryInput::Other(serde_json::Value::Null);
        assert_eq!(canonical_phrase(&input), "food");
    }

    #[test]
    fn numeric_items_are_stringified() {
        let input = items(vec![json!(2), json!("eggs")]);
        assert_eq!(canonical_phrase(&input), "2,eggs");
    }

    #[test]
    fn generates_exactly_three_recipes_referencing_the_phrase() {
        let input = items(vec![json!("egg"), json!(""), json!(" milk ")]);
        let recipes = generate(&input, "vegan");

        assert_eq!(recipes.len(), 3);
        for recipe in &recipes {
            assert!(recipe.instructions.contains("egg,milk"));
            assert_eq!(recipe.link, "#");
        }
    }

    #[test]
    fn empty_input_still_generates_three_recipes() {
        let recipes = generate(&items(vec![]), "");
        assert_eq!(recipes.len(), 3);
        for recipe in &recipes {
            assert!(recipe.instructions.contains("food"));
        }
    }

    #[test]
    fn image_urls_are_percent_encoded() {
        let input = PantryInput::Text("green beans".to_string());
        let recipes = generate(&input, "");
        assert!(recipes[0].image.contains("green%20beans"));
        assert!(!recipes[0].image.contains(' '));
    }

    #[test]
    fn parses_from_json_payloads() {
        let list: PantryInput = serde_json::from_value(json!(["egg", "milk"])).unwrap();
        assert_eq!(canonical_phrase(&list), "egg,milk");

        let text: PantryInput = serde_json::from_value(json!("egg, milk")).unwrap();
        assert_eq!(canonical_phrase(&text), "egg,milk");

        let null: PantryInput = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(canonical_phrase(&null), "food");
    }
}
