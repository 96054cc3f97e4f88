//! # Cart Commands
//!
//! The product-page side of the cart: writes go straight to local storage,
//! and the checkout picks them up on its next mount.
//!
//! ```text
//! product page ──add_to_cart──► local_storage["cart"] ──mount──► checkout
//! ```

use serde::{Deserialize, Serialize};
use shoez_core::cart::{add_line_item, cart_subtotal, CartRepository};
use shoez_core::{CartLineItem, Money};
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::DbState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub subtotal: Money,
}

impl From<Vec<CartLineItem>> for CartResponse {
    fn from(items: Vec<CartLineItem>) -> Self {
        let subtotal = cart_subtotal(&items);
        CartResponse { items, subtotal }
    }
}

/// A product-page "add to cart" click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub name: String,
    pub price: Money,
    pub image: String,
    /// Defaults to 1.
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Current persisted cart. Unreadable storage reads as an error here; only
/// the checkout mount degrades it to empty.
pub async fn get_cart(db: &DbState) -> ApiResult<CartResponse> {
    debug!("get_cart command");
    let items = db.inner().carts().load().await?;
    Ok(items.into())
}

/// Adds an item, merging quantities with an entry of the same name.
///
/// ## Arguments
/// * `request.quantity` - 1..=999 after merging
/// * `request.price` - must not be negative
pub async fn add_to_cart(db: &DbState, request: AddToCartRequest) -> ApiResult<CartResponse> {
    let quantity = request.quantity.unwrap_or(1);
    debug!(name = %request.name, quantity, "add_to_cart command");

    let repo = db.inner().carts();
    let mut items = repo.load().await?;
    add_line_item(
        &mut items,
        CartLineItem {
            name: request.name,
            image_ref: request.image,
            unit_price: request.price,
            quantity,
        },
    )?;
    repo.save(&items).await?;

    info!(lines = items.len(), "Cart updated");
    Ok(items.into())
}

/// Empties the persisted cart.
pub async fn clear_cart(db: &DbState) -> ApiResult<CartResponse> {
    debug!("clear_cart command");
    db.inner().carts().clear().await?;
    Ok(CartResponse::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::db_state;
    use crate::error::ErrorCode;

    fn request(name: &str, cents: i64, quantity: Option<i64>) -> AddToCartRequest {
        AddToCartRequest {
            name: name.to_string(),
            price: Money::from_cents(cents),
            image: format!("/{name}.png"),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_add_merges_by_name() {
        let db = db_state().await;

        add_to_cart(&db, request("Air Runner", 4500, None)).await.unwrap();
        add_to_cart(&db, request("Beach Flip", 1200, Some(2))).await.unwrap();
        let cart = add_to_cart(&db, request("Air Runner", 4500, Some(3)))
            .await
            .unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].quantity, 4);
        assert_eq!(cart.subtotal, Money::from_cents(4500 * 4 + 1200 * 2));
        assert_eq!(get_cart(&db).await.unwrap(), cart);
    }

    #[tokio::test]
    async fn test_invalid_add_leaves_cart_untouched() {
        let db = db_state().await;
        add_to_cart(&db, request("Air Runner", 4500, Some(999))).await.unwrap();

        let err = add_to_cart(&db, request("Air Runner", 4500, Some(1)))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_to_cart(&db, request("Ghost", -1, None)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let cart = get_cart(&db).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 999);
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let db = db_state().await;
        add_to_cart(&db, request("Air Runner", 4500, None)).await.unwrap();

        assert_eq!(clear_cart(&db).await.unwrap(), CartResponse::default());
        assert!(get_cart(&db).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_get_cart_reports_malformed_storage() {
        let db = db_state().await;
        db.inner().carts().write_raw("{not json").await.unwrap();

        let err = get_cart(&db).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_request_wire_format() {
        let req: AddToCartRequest =
            serde_json::from_str(r#"{"name":"Air Runner","price":4500,"image":"/a.png"}"#).unwrap();
        assert_eq!(req.quantity, None);
        assert_eq!(req.price, Money::from_cents(4500));
    }
}
