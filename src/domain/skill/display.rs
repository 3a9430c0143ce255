//! Display directives for screen-equipped devices.
//!
//! Uses `Display.RenderTemplate` with `BodyTemplate2`: image on one side,
//! text on the other, and the item's slug as the template token so a later
//! touch event can be traced back to the result.

use serde::Serialize;

use crate::domain::catalog::Artwork;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayDirective {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub template: BodyTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyTemplate {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub token: String,
    pub back_button: &'static str,
    pub title: String,
    pub image: TemplateImage,
    pub text_content: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateImage {
    pub content_description: String,
    pub sources: Vec<ImageSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSource {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub primary_text: PlainText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl DisplayDirective {
    /// The template token (the item's slug).
    pub fn token(&self) -> &str {
        &self.template.token
    }
}

/// Builds a display directive for a single catalog item.
pub fn build_display(
    title: impl Into<String>,
    artwork: &Artwork,
    text: impl Into<String>,
    token: impl Into<String>,
) -> DisplayDirective {
    let title = title.into();
    DisplayDirective {
        kind: "Display.RenderTemplate",
        template: BodyTemplate {
            kind: "BodyTemplate2",
            token: token.into(),
            back_button: "HIDDEN",
            image: TemplateImage {
                content_description: title.clone(),
                sources: vec![ImageSource {
                    url: artwork.url.clone(),
                }],
            },
            title,
            text_content: TextContent {
                primary_text: PlainText {
                    kind: "PlainText",
                    text: text.into(),
                },
            },
        },
    }
}
