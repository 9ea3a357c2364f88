//! `order` command: fill the cart, run the checkout gate and print the
//! dispatch link.

use chrono::{Local, NaiveDateTime};
use clap::Args;
use foodie_core::{translate, OrderNumber, ShopSession, TranslationKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineItem {
    pub product_id: String,
    pub quantity: i64,
}

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Quantity change as `<product-id>=<delta>`; repeat for more lines
    #[arg(long = "item", value_parser = parse_line_item)]
    pub items: Vec<LineItem>,

    /// Collection option id
    #[arg(long)]
    pub location: Option<String>,

    /// Order number (0-999); random when omitted
    #[arg(long, value_parser = clap::value_parser!(u16).range(0..=999))]
    pub order_number: Option<u16>,

    /// Print the formatted message without running the checkout gate
    #[arg(long)]
    pub preview: bool,
}

/// Parse `<product-id>=<delta>`.
pub(crate) fn parse_line_item(raw: &str) -> Result<LineItem, String> {
    let (id, quantity) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected <product-id>=<quantity>, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing product id in '{raw}'"));
    }
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity in '{raw}': {e}"))?;
    Ok(LineItem {
        product_id: id.to_string(),
        quantity,
    })
}

/// # Errors
///
/// Returns an error if an item or location is unknown, or the checkout gate
/// refuses the order.
pub(crate) fn run_order(session: &mut ShopSession, args: &OrderArgs) -> anyhow::Result<()> {
    apply_args(session, args)?;

    let order_number = match args.order_number {
        Some(value) => OrderNumber::new(value),
        None => OrderNumber::new(rand::random_range(0..1000)),
    }
    .ok_or_else(|| anyhow::anyhow!("order number out of range"))?;

    let output = submit(session, order_number, &Local::now().naive_local(), args.preview)?;
    print!("{output}");
    Ok(())
}

/// Apply the requested quantity changes and collection option to the session.
fn apply_args(session: &mut ShopSession, args: &OrderArgs) -> anyhow::Result<()> {
    for item in &args.items {
        if !session
            .catalog()
            .iter()
            .any(|product| product.id == item.product_id)
        {
            anyhow::bail!("unknown product '{}'", item.product_id);
        }
        let quantity = session.update_quantity(&item.product_id, item.quantity);
        tracing::debug!(product_id = %item.product_id, quantity, "quantity updated");
    }

    if let Some(location) = args.location.as_deref() {
        if session.config().collection_option(location).is_none() {
            anyhow::bail!("unknown collection location '{location}'");
        }
        session.select_collection_option(location);
    }
    Ok(())
}

/// Preview or check out, returning the text to print.
fn submit(
    session: &mut ShopSession,
    order_number: OrderNumber,
    now: &NaiveDateTime,
    preview: bool,
) -> anyhow::Result<String> {
    if preview {
        return Ok(session.preview(order_number, now));
    }

    session.refresh_availability(now);
    let language = session.config().language();

    match session.checkout(order_number, now) {
        Ok(submission) => {
            Ok(format!(
                "{}{}\n{}\n{}\n",
                submission.message,
                translate(language, TranslationKey::OrderPlacedSuccessfully),
                translate(language, TranslationKey::OrderSentViaWhatsApp),
                submission.dispatch_url
            ))
        }
        Err(errors) => {
            let notices: Vec<&str> = errors
                .notices()
                .into_iter()
                .map(|notice| translate(language, notice.notice_key()))
                .collect();
            anyhow::bail!(
                "{}: {}",
                translate(language, TranslationKey::ErrorTitle),
                notices.join(" ")
            )
        }
    }
}
