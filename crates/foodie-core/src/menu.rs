use crate::i18n::{translate, Language, TranslationKey};
use crate::product::ProductItem;

/// Menu category selection. `All` is listed first and shows the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn label(&self, language: Language) -> &str {
        match self {
            CategoryFilter::All => translate(language, TranslationKey::All),
            CategoryFilter::Category(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &ProductItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => item.category == *name,
        }
    }
}

/// `All`, then each distinct category in the order it first appears.
#[must_use]
pub fn categories(catalog: &[ProductItem]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    for item in catalog {
        let filter = CategoryFilter::Category(item.category.clone());
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }
    filters
}

#[must_use]
pub fn filter_by_category<'a>(
    catalog: &'a [ProductItem],
    selection: &CategoryFilter,
) -> Vec<&'a ProductItem> {
    catalog.iter().filter(|item| selection.matches(item)).collect()
}
