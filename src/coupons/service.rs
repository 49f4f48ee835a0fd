//! Coupon Service
//!
//! Orchestrates the coupon store and the discount engine. Handlers stay thin
//! and call into these functions, which keeps the behaviour testable without
//! an HTTP round trip.

use tracing::{debug, info, warn};

use super::{
    errors::CouponsServiceError,
    models::{
        ApplicableCoupon, ApplicableCouponsResponse, ApplyCouponResponse, Coupon,
        CreateCouponRequest,
    },
    state::CouponStore,
};
use crate::{
    cart::{helpers::format_item_summary, Cart},
    discount::{apply_discount, compute_discount, CouponRule},
};

/// Stores a new coupon.
///
/// Details that do not fit the coupon type are still stored (the engine
/// will treat the coupon as granting nothing), but are reported in the logs.
pub fn create_coupon(store: &CouponStore, request: CreateCouponRequest) -> Coupon {
    warn_on_invalid_details(&request);

    let coupon = store.insert(request.coupon_type, request.details);
    info!(coupon_id = coupon.id, coupon_type = %coupon.coupon_type, "coupon created");

    coupon
}

pub fn list_coupons(store: &CouponStore) -> Vec<Coupon> {
    store.list()
}

/// # Errors
///
/// Returns [`CouponsServiceError::NotFound`] if no coupon has this id.
pub fn get_coupon(store: &CouponStore, id: u64) -> Result<Coupon, CouponsServiceError> {
    store.get(id).ok_or(CouponsServiceError::NotFound(id))
}

/// Replaces the type and details of a coupon in place.
///
/// # Errors
///
/// Returns [`CouponsServiceError::NotFound`] if no coupon has this id.
pub fn update_coupon(
    store: &CouponStore,
    id: u64,
    request: CreateCouponRequest,
) -> Result<Coupon, CouponsServiceError> {
    warn_on_invalid_details(&request);

    let coupon = store
        .update(id, request.coupon_type, request.details)
        .ok_or(CouponsServiceError::NotFound(id))?;
    info!(coupon_id = id, coupon_type = %coupon.coupon_type, "coupon updated");

    Ok(coupon)
}

/// # Errors
///
/// Returns [`CouponsServiceError::NotFound`] if no coupon has this id.
pub fn delete_coupon(store: &CouponStore, id: u64) -> Result<(), CouponsServiceError> {
    store.remove(id).ok_or(CouponsServiceError::NotFound(id))?;
    info!(coupon_id = id, "coupon deleted");

    Ok(())
}

/// Every stored coupon granting a positive discount on `cart`, in store
/// order.
///
/// A cart without an item list is evaluated as empty.
pub fn list_applicable_coupons(store: &CouponStore, cart: &Cart) -> ApplicableCouponsResponse {
    let items = cart.items.as_deref().unwrap_or_default();

    let applicable_coupons: Vec<ApplicableCoupon> = store
        .list()
        .iter()
        .filter_map(|coupon| {
            let discount = compute_discount(coupon, items);
            (discount > 0.0).then_some(ApplicableCoupon {
                coupon_id: coupon.id,
                coupon_type: coupon.coupon_type,
                discount,
            })
        })
        .collect();

    debug!(
        cart = %format_item_summary(items),
        applicable = applicable_coupons.len(),
        "evaluated applicable coupons"
    );

    ApplicableCouponsResponse { applicable_coupons }
}

/// Applies one coupon to `cart`.
///
/// # Errors
///
/// * [`CouponsServiceError::BadRequest`] if the cart or its item list is
///   missing (checked before the coupon is looked up).
/// * [`CouponsServiceError::NotFound`] if no coupon has this id.
pub fn apply_coupon(
    store: &CouponStore,
    id: u64,
    cart: Option<Cart>,
) -> Result<ApplyCouponResponse, CouponsServiceError> {
    let Some(items) = cart.and_then(|c| c.items) else {
        return Err(CouponsServiceError::BadRequest(
            "Cart or cart.items is missing".to_string(),
        ));
    };

    let coupon = get_coupon(store, id)?;
    let updated_cart = apply_discount(&coupon, &items);

    info!(
        coupon_id = id,
        total_price = updated_cart.total_price,
        total_discount = updated_cart.total_discount,
        "coupon applied"
    );

    Ok(ApplyCouponResponse { updated_cart })
}

fn warn_on_invalid_details(request: &CreateCouponRequest) {
    if let Err(error) = CouponRule::parse(request.coupon_type, &request.details) {
        warn!(%error, "coupon details will not grant any discount");
    }
}
