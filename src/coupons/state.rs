//! Coupon State Management
//!
//! This module manages the application state: the in-memory coupon store
//! shared by every request handler.

use super::models::{Coupon, CouponType};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Persisted coupon records
    pub coupons: CouponStore,
}

impl AppState {
    /// Creates a new AppState with an empty coupon store
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Coupon Store
// =============================================================================

/// In-memory coupon records, keyed by id.
///
/// DashMap allows concurrent access without external Mutexes; each
/// operation is atomic with respect to a single record.
#[derive(Debug)]
pub struct CouponStore {
    records: DashMap<u64, Coupon>,
    next_id: AtomicU64,
}

impl Default for CouponStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CouponStore {
    /// Creates an empty store whose first coupon gets id 1
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Stores a new coupon under a freshly generated id
    pub fn insert(&self, coupon_type: CouponType, details: Value) -> Coupon {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let coupon = Coupon {
            id,
            coupon_type,
            details,
        };

        self.records.insert(id, coupon.clone());
        coupon
    }

    pub fn get(&self, id: u64) -> Option<Coupon> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    /// All coupons in insertion order
    pub fn list(&self) -> Vec<Coupon> {
        let mut coupons: Vec<Coupon> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Ids are handed out in increasing order.
        coupons.sort_by_key(|c| c.id);
        coupons
    }

    /// Replaces the type and details of an existing coupon, keeping its id
    pub fn update(&self, id: u64, coupon_type: CouponType, details: Value) -> Option<Coupon> {
        let mut entry = self.records.get_mut(&id)?;
        entry.coupon_type = coupon_type;
        entry.details = details;

        Some(entry.value().clone())
    }

    pub fn remove(&self, id: u64) -> Option<Coupon> {
        self.records.remove(&id).map(|(_, coupon)| coupon)
    }
}
