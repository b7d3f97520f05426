//! Shopify order webhook.
//!
//! Shopify delivers `orders/create` payloads signed with HMAC-SHA256 over the
//! raw body. The handler verifies the signature before touching the payload,
//! resolves the owning dropshipper from the shop domain header, and records
//! the order. Redeliveries of an already-recorded order are acknowledged
//! without inserting a duplicate.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use serde::Deserialize;

use backoffice_core::error::CoreError;
use backoffice_db::models::order::CreateOrder;
use backoffice_db::repositories::{DropshipperRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::response::{ok_entity, ok_message};
use crate::signature;
use crate::state::AppState;

const HMAC_HEADER: &str = "x-shopify-hmac-sha256";
const SHOP_DOMAIN_HEADER: &str = "x-shopify-shop-domain";

/// Subset of Shopify's `orders/create` payload that we record.
#[derive(Debug, Deserialize)]
pub struct ShopifyOrderPayload {
    pub id: i64,
    pub name: Option<String>,
    pub total_price: Option<String>,
    pub financial_status: Option<String>,
    pub customer: Option<ShopifyCustomer>,
}

#[derive(Debug, Deserialize)]
pub struct ShopifyCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// POST /api/webhooks/shopify/orders
///
/// The raw body must be taken as bytes: signature verification covers the
/// exact bytes Shopify sent, and JSON parsing only happens afterwards.
pub async fn receive_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let secret = &state.config.shopify_webhook_secret;
    if secret.is_empty() {
        return Err(AppError::InternalError(
            "Shopify webhook secret is not configured".to_string(),
        ));
    }

    let provided = headers
        .get(HMAC_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing webhook signature".to_string(),
            ))
        })?;

    if !signature::verify(secret, &body, provided) {
        tracing::warn!("Rejected webhook delivery with invalid signature");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid webhook signature".to_string(),
        )));
    }

    let shop_domain = headers
        .get(SHOP_DOMAIN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing shop domain header".to_string()))?;

    let dropshipper = DropshipperRepo::find_by_shopify_domain(&state.pool, shop_domain)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No dropshipper registered for shop {shop_domain}"))
        })?;

    let payload: ShopifyOrderPayload = serde_json::from_slice(&body)
        .map_err(|err| AppError::BadRequest(format!("Malformed order payload: {err}")))?;

    // Shopify retries deliveries; an order we already hold is acknowledged
    // with 200 so the retry loop stops.
    if let Some(existing) =
        OrderRepo::find_by_shopify_order_id(&state.pool, dropshipper.id, payload.id).await?
    {
        tracing::debug!(
            order_id = existing.id,
            shopify_order_id = payload.id,
            "Webhook redelivery for already-recorded order"
        );
        return Ok(ok_message("Order already recorded").into_response());
    }

    let input = CreateOrder {
        order_number: payload.name.clone(),
        shopify_order_id: Some(payload.id),
        status: payload.financial_status.clone(),
        customer_name: payload.customer.as_ref().map(customer_name),
        total_cents: payload.total_price.as_deref().map(parse_price_cents),
    };

    let order = OrderRepo::create(&state.pool, dropshipper.id, &input).await?;

    tracing::info!(
        order_id = order.id,
        shopify_order_id = payload.id,
        dropshipper_id = dropshipper.id,
        "Order recorded from webhook"
    );

    Ok((StatusCode::CREATED, ok_entity("order", &order)).into_response())
}

/// Join the customer's first and last name, skipping missing parts.
fn customer_name(customer: &ShopifyCustomer) -> String {
    let mut parts = Vec::new();
    if let Some(first) = customer.first_name.as_deref() {
        parts.push(first);
    }
    if let Some(last) = customer.last_name.as_deref() {
        parts.push(last);
    }
    parts.join(" ")
}

/// Parse Shopify's decimal-string price ("19.90") into integer cents.
/// Unparseable values fall back to zero rather than failing the delivery.
fn parse_price_cents(price: &str) -> i64 {
    let (whole, frac) = match price.split_once('.') {
        Some((w, f)) => (w, f),
        None => (price, ""),
    };
    let whole: i64 = match whole.parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };
    let cents: i64 = match frac.chars().take(2).collect::<String>().parse() {
        Ok(v) if frac.len() >= 2 => v,
        Ok(v) => v * 10,
        Err(_) if frac.is_empty() => 0,
        Err(_) => return 0,
    };
    whole * 100 + if whole < 0 { -cents } else { cents }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_price() {
        assert_eq!(parse_price_cents("19.90"), 1990);
        assert_eq!(parse_price_cents("0.05"), 5);
        assert_eq!(parse_price_cents("100"), 10000);
    }

    #[test]
    fn parses_single_fraction_digit() {
        assert_eq!(parse_price_cents("4.5"), 450);
    }

    #[test]
    fn garbage_price_becomes_zero() {
        assert_eq!(parse_price_cents("free"), 0);
        assert_eq!(parse_price_cents(""), 0);
    }

    #[test]
    fn joins_customer_name_parts() {
        let customer = ShopifyCustomer {
            first_name: Some("Ada".to_string()),
            last_name: None,
        };
        assert_eq!(customer_name(&customer), "Ada");
    }
}
