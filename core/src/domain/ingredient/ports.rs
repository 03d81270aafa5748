use crate::domain::ingredient::entities::IngredientList;

/// Turns raw label text into an ordered ingredient list.
///
/// Implementations are pure: no I/O, same input gives the same output.
#[cfg_attr(test, mockall::automock)]
pub trait IngredientSegmenter: Send + Sync {
    fn segment(&self, raw_text: &str) -> IngredientList;
}
