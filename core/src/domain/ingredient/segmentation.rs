use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::ingredient::{entities::IngredientList, ports::IngredientSegmenter};

/// Anchor keyword, optional colon, then the shortest run of text up to the
/// first terminator keyword or the end of the text.
static INGREDIENTS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:ingredients|contains)\s*:?\s*(.*?)(?:nutrition|allergy|manufactured|warning|$)")
        .expect("ingredients block pattern is valid")
});

/// Innermost parenthesized group; applied repeatedly to peel nested groups.
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("parenthesized pattern is valid"));

/// Unbalanced leftovers: an unclosed `(` up to the next separator, or a lone `)`.
static STRAY_PARENTHESIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^,;]*|\)").expect("stray parenthesis pattern is valid"));

/// Keyword-window extraction over OCR text.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordWindowSegmenter;

impl IngredientSegmenter for KeywordWindowSegmenter {
    fn segment(&self, raw_text: &str) -> IngredientList {
        segment(raw_text)
    }
}

/// Locates the ingredients block in `raw_text` and splits it into names.
///
/// Returns an empty list when no anchor keyword is present or when the block
/// between anchor and terminator is empty.
pub fn segment(raw_text: &str) -> IngredientList {
    let text_blob = raw_text.replace(['\n', '\r'], " ");

    let Some(block) = INGREDIENTS_BLOCK
        .captures(&text_blob)
        .and_then(|captures| captures.get(1))
    else {
        debug!("no ingredients anchor found in text");
        return IngredientList::default();
    };

    let cleaned = strip_parenthesized(block.as_str()).replace(';', ",");
    let ingredients = IngredientList::from_tokens(cleaned.split(','));

    debug!(
        ingredient_count = ingredients.len(),
        "segmented ingredients block"
    );

    ingredients
}

fn strip_parenthesized(block: &str) -> String {
    let mut current = block.to_string();
    while PARENTHESIZED.is_match(&current) {
        current = PARENTHESIZED.replace_all(&current, "").into_owned();
    }
    STRAY_PARENTHESIS.replace_all(&current, "").into_owned()
}
