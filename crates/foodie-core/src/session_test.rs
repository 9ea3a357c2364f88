use chrono::NaiveDate;

use super::*;
use crate::product::DisplayOption;
use crate::CheckoutError;

fn product(id: &str, category: &str, cents: i64) -> ProductItem {
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

fn catalog() -> Vec<ProductItem> {
    vec![
        product("a", "Mains", 500),
        product("b", "Sides", 350),
        product("c", "Mains", 800),
    ]
}

/// Monday 2026-10-12; the default schedule opens 09–22 on Mondays.
fn monday_at(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 12)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn loaded_session() -> ShopSession {
    let mut session = ShopSession::new(ShopConfig::default());
    session.load_catalog(catalog());
    session
}

#[test]
fn new_session_is_loading_and_open() {
    let session = ShopSession::default();
    assert_eq!(session.status(), &LoadStatus::Loading);
    assert!(session.store_open());
    assert!(session.catalog().is_empty());
    assert!(session.errors().is_clear());
}

#[test]
fn load_catalog_marks_ready_and_zeroes_cart() {
    let session = loaded_session();
    assert_eq!(session.status(), &LoadStatus::Ready);
    assert_eq!(session.cart().iter().count(), 3);
    assert!(session.cart().is_empty());
}

#[test]
fn reloading_identical_catalog_resets_quantities() {
    let mut session = loaded_session();
    session.update_quantity("a", 3);
    session.update_quantity("b", 1);

    session.load_catalog(catalog());

    assert_eq!(session.cart().quantity("a"), 0);
    assert_eq!(session.cart().quantity("b"), 0);
}

#[test]
fn fail_load_records_generic_notice() {
    let mut session = ShopSession::default();
    session.fail_load();
    assert_eq!(
        session.status(),
        &LoadStatus::Failed(LOAD_FAILED_NOTICE.to_string())
    );
}

#[test]
fn drawer_closes_when_cart_empties() {
    let mut session = loaded_session();
    assert!(!session.open_order_drawer(), "empty cart keeps drawer shut");

    session.update_quantity("a", 1);
    assert!(session.open_order_drawer());

    session.update_quantity("a", -1);
    assert!(!session.order_drawer_open());
}

#[test]
fn remove_line_closes_drawer_when_last_line_goes() {
    let mut session = loaded_session();
    session.update_quantity("a", 2);
    session.update_quantity("b", 1);
    session.open_order_drawer();

    session.remove_line("a");
    assert!(session.order_drawer_open());
    session.remove_line("b");
    assert!(!session.order_drawer_open());
}

#[test]
fn visible_products_follow_category_selection() {
    let mut session = loaded_session();
    assert_eq!(session.visible_products().len(), 3);

    session.select_category(CategoryFilter::Category("Mains".to_string()));
    let ids: Vec<&str> = session
        .visible_products()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "c"]);
    assert_eq!(session.categories().len(), 3);
}

#[test]
fn refresh_availability_tracks_clock() {
    let mut session = loaded_session();
    assert!(!session.refresh_availability(&monday_at(8)));
    assert!(!session.store_open());
    assert!(session.refresh_availability(&monday_at(9)));
    assert!(session.store_open());
}

#[test]
fn staged_edits_do_not_touch_active_config_until_saved() {
    let mut session = loaded_session();
    session.update_quantity("a", 2);

    session.stage_config(|config| {
        config.tax_percentage = Decimal::from(21);
        config.shop_name = "Renamed".to_string();
    });
    assert_eq!(session.config().tax_percentage, Decimal::TEN);
    assert_eq!(session.staged_config().shop_name, "Renamed");

    session.save_config();
    assert_eq!(session.config().tax_percentage, Decimal::from(21));
    assert_eq!(session.config().shop_name, "Renamed");
    assert_eq!(session.cart().quantity("a"), 2, "saving config keeps the cart");
}

#[test]
fn reset_config_restores_defaults_into_staged_copy() {
    let fetched = ShopConfig {
        shop_name: "Fetched".to_string(),
        ..ShopConfig::default()
    };
    let mut session = ShopSession::default();
    session.apply_config(fetched);

    session.reset_config();

    assert_eq!(session.config().shop_name, "Fetched");
    assert_eq!(session.staged_config(), &ShopConfig::default());
}

#[test]
fn checkout_blocked_when_closed() {
    let mut session = loaded_session();
    session.update_quantity("a", 1);
    session.select_collection_option("1");
    session.refresh_availability(&monday_at(23));

    let errors = session
        .checkout(OrderNumber::new(1).unwrap(), &monday_at(23))
        .unwrap_err();

    assert_eq!(errors.notices(), vec![CheckoutError::StoreClosed]);
    assert_eq!(session.errors(), errors);
}

#[test]
fn checkout_flags_clear_as_user_fixes_inputs() {
    let mut session = loaded_session();
    session.refresh_availability(&monday_at(12));

    let errors = session
        .checkout(OrderNumber::new(1).unwrap(), &monday_at(12))
        .unwrap_err();
    assert!(errors.collection_option && errors.empty_order);

    session.select_collection_option("2");
    assert!(!session.errors().collection_option);
    assert!(session.errors().empty_order);

    session.update_quantity("c", 1);
    assert!(session.errors().is_clear());
}

#[test]
fn successful_checkout_closes_drawer_and_returns_link() {
    let mut session = loaded_session();
    session.refresh_availability(&monday_at(12));
    session.update_quantity("a", 2);
    session.update_quantity("b", 1);
    session.select_collection_option("2");
    session.open_order_drawer();

    let submission = session
        .checkout(OrderNumber::new(42).unwrap(), &monday_at(12))
        .expect("checkout passes");

    assert!(!session.order_drawer_open());
    assert!(submission.message.contains("$13.50"));
    assert!(submission.message.contains("$1.35"));
    assert!(submission.message.contains("$14.85"));
    assert!(submission.dispatch_url.starts_with("https://wa.me/353830297520?text="));
}

#[test]
fn preview_ignores_gate() {
    let mut session = loaded_session();
    session.refresh_availability(&monday_at(3));

    let message = session.preview(OrderNumber::new(7).unwrap(), &monday_at(3));

    assert!(message.contains("#007"));
    assert!(message.contains("Not selected"));
}
