use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Characters stripped from both ends of a token on top of whitespace.
const EDGE_NOISE: &[char] = &['.', ':', '*', '•'];

/// Ordered ingredient names in label order. Duplicates are kept.
///
/// Every stored name is trimmed and longer than one character; construction
/// goes through [`IngredientList::from_tokens`] so the invariant cannot be
/// bypassed, including when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
#[schema(value_type = Vec<String>)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tokens
                .into_iter()
                .filter_map(|token| clean_token(token.as_ref()))
                .collect(),
        )
    }

    /// Splits a comma separated ingredient string, as returned by product databases.
    pub fn from_delimited(text: &str) -> Self {
        Self::from_tokens(text.split(','))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|ingredient| ingredient == name)
    }
}

fn clean_token(token: &str) -> Option<String> {
    let trimmed = token.trim().trim_matches(EDGE_NOISE).trim();

    (trimmed.chars().count() > 1).then(|| trimmed.to_string())
}

impl From<Vec<String>> for IngredientList {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl From<IngredientList> for Vec<String> {
    fn from(list: IngredientList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_delimited_trims_tokens() {
        let list = IngredientList::from_delimited(" oats,sugar , salt ");
        assert_eq!(list.as_slice(), ["oats", "sugar", "salt"]);
    }

    #[test]
    fn test_noise_tokens_are_dropped() {
        let list = IngredientList::from_delimited("sugar,, a, salt,.,   ");
        assert_eq!(list.as_slice(), ["sugar", "salt"]);
    }

    #[test]
    fn test_duplicates_and_order_are_kept() {
        let list = IngredientList::from_tokens(["salt", "sugar", "salt"]);
        assert_eq!(list.as_slice(), ["salt", "sugar", "salt"]);
    }

    #[test]
    fn test_edge_punctuation_is_stripped() {
        let list = IngredientList::from_tokens(["salt.", "*palm oil", "vit. c"]);
        assert_eq!(list.as_slice(), ["salt", "palm oil", "vit. c"]);
    }

    #[test]
    fn test_deserialize_applies_cleaning() {
        let list: IngredientList = serde_json::from_str(r#"["  cocoa ", "x", ""]"#).unwrap();
        assert_eq!(list.as_slice(), ["cocoa"]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["cocoa"]"#);
    }

    #[test]
    fn test_multibyte_single_char_is_noise() {
        let list = IngredientList::from_tokens(["é", "éa"]);
        assert_eq!(list.as_slice(), ["éa"]);
    }
}
