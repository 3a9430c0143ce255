//! Companion-app cards.

use serde::Serialize;

use crate::domain::catalog::Artwork;

/// A standard card with an image, rendered in the companion app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub text: String,
    pub image: CardImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub small_image_url: String,
    pub large_image_url: String,
}

/// Builds a standard card from a title, artwork and body text.
pub fn build_card(title: impl Into<String>, artwork: &Artwork, text: impl Into<String>) -> Card {
    Card {
        kind: "Standard",
        title: title.into(),
        text: text.into(),
        image: CardImage {
            small_image_url: artwork.url.clone(),
            large_image_url: artwork.url.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_standard_card_with_artwork_for_both_sizes() {
        let artwork = Artwork::new("https://img.example/dune.jpg");
        let card = build_card("Dune (2021)", &artwork, "Already wanted.");

        assert_eq!(
            serde_json::to_value(&card).unwrap(),
            json!({
                "type": "Standard",
                "title": "Dune (2021)",
                "text": "Already wanted.",
                "image": {
                    "smallImageUrl": "https://img.example/dune.jpg",
                    "largeImageUrl": "https://img.example/dune.jpg"
                }
            })
        );
    }
}
