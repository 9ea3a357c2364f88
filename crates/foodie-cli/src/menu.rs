//! `menu` command: print the catalog grouped by the selected category.

use chrono::Local;
use foodie_core::{
    format_amount, translate, CategoryFilter, Language, ProductItem, ShopConfig, ShopSession,
    TranslationKey,
};

/// Print the menu for `category` (or every category).
///
/// # Errors
///
/// Returns an error if `category` does not name a category in the catalog.
pub(crate) fn run_menu(session: &ShopSession, category: Option<&str>) -> anyhow::Result<()> {
    let mut session = session.clone();
    session.refresh_availability(&Local::now());

    if let Some(name) = category {
        let filter = CategoryFilter::Category(name.to_string());
        if !session.categories().contains(&filter) {
            anyhow::bail!("unknown category '{name}'");
        }
        session.select_category(filter);
    }

    print!("{}", render_menu(&session));
    Ok(())
}

fn render_menu(session: &ShopSession) -> String {
    let config = session.config();
    let language = config.language();

    let mut lines = vec![format!(
        "{} - {}",
        config.shop_name,
        translate(language, TranslationKey::Menu)
    )];
    if !session.store_open() {
        lines.push(format!(
            "{}: {}",
            translate(language, TranslationKey::StoreClosed),
            translate(language, TranslationKey::StoreClosedDescription)
        ));
    }

    let labels: Vec<String> = session
        .categories()
        .iter()
        .map(|filter| {
            if filter == session.selected_category() {
                format!("[{}]", filter.label(language))
            } else {
                filter.label(language).to_string()
            }
        })
        .collect();
    lines.push(labels.join(" | "));
    lines.push(String::new());

    for item in session.visible_products() {
        lines.extend(render_item(item, config, language));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_item(item: &ProductItem, config: &ShopConfig, language: Language) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<12} {:<28} {}{}",
        item.id,
        item.name,
        config.currency_sign,
        format_amount(item.price, config.price_decimals)
    )];
    if let Some(description) = &item.description {
        lines.push(format!("    {description}"));
    }

    let mut details = Vec::new();
    if let Some(calories) = item.calories {
        details.push(format!(
            "{}: {calories}",
            translate(language, TranslationKey::Calories)
        ));
    }
    if let Some(preparation_time) = &item.preparation_time {
        details.push(format!(
            "{}: {preparation_time}",
            translate(language, TranslationKey::PreparationTime)
        ));
    }
    if !item.allergens.is_empty() {
        details.push(format!(
            "{}: {}",
            translate(language, TranslationKey::Allergens),
            item.allergens.join(", ")
        ));
    }
    if !details.is_empty() {
        lines.push(format!("    {}", details.join(" | ")));
    }
    lines
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use foodie_core::DisplayOption;
    use rust_decimal::Decimal;

    use super::*;

    fn item(id: &str, category: &str, cents: i64) -> ProductItem {
        ProductItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            price: Decimal::new(cents, 2),
            category: category.to_string(),
            description: None,
            image: None,
            calories: None,
            preparation_time: None,
            allergens: Vec::new(),
            display_option: DisplayOption::Base,
        }
    }

    fn english_session() -> ShopSession {
        let config = ShopConfig {
            language: "en".to_string(),
            ..ShopConfig::default()
        };
        let mut burger = item("burger", "Mains", 500);
        burger.calories = Some(650);
        burger.allergens = vec!["gluten".to_string(), "sesame".to_string()];
        burger.description = Some("Beef, cheddar".to_string());

        let mut session = ShopSession::new(config);
        session.load_catalog(vec![burger, item("fries", "Sides", 350)]);
        session
    }

    #[test]
    fn render_lists_categories_and_item_details() {
        let menu = render_menu(&english_session());

        assert!(menu.starts_with("Foodie - Menu\n"));
        assert!(menu.contains("[All] | Mains | Sides"));
        assert!(menu.contains("$5.00"));
        assert!(menu.contains("    Beef, cheddar\n"));
        assert!(menu.contains("Calories: 650 | Allergens: gluten, sesame"));
        assert!(menu.contains("fries"));
    }

    #[test]
    fn render_respects_category_selection() {
        let mut session = english_session();
        session.select_category(CategoryFilter::Category("Sides".to_string()));

        let menu = render_menu(&session);

        assert!(menu.contains("All | Mains | [Sides]"));
        assert!(!menu.contains("burger"));
        assert!(menu.contains("fries"));
    }

    #[test]
    fn render_shows_closed_notice() {
        let mut session = english_session();
        // Monday 2026-10-12 at 23:00 is after closing.
        let late = NaiveDate::from_ymd_opt(2026, 10, 12)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap();
        session.refresh_availability(&late);

        let menu = render_menu(&session);

        assert!(menu.contains("Store Closed: Sorry, we are currently closed."));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = run_menu(&english_session(), Some("Desserts")).unwrap_err();
        assert!(err.to_string().contains("unknown category 'Desserts'"));
    }
}
