//! # Cart
//!
//! A customer's shopping cart and the shared handle through which the
//! customer record and the active transaction both see it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                  Operation                 Cart Change          │
//! │  ──────                  ─────────                 ───────────          │
//! │                                                                         │
//! │  Manager ──────────────► add_product() ──────────► items.push(p)       │
//! │                                                                         │
//! │  Active transaction ───► contents() ─────────────► (read only copy)    │
//! │                                                                         │
//! │  finalise() ───────────► take_contents() ────────► copy, then clear    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sharing
//! A `Customer` owns its cart through a [`SharedCart`]. While a transaction
//! is active it holds a second handle to the same cart, so reading the
//! transaction's purchases always reflects the live cart. Once finalised, the
//! transaction drops that handle in favour of its own snapshot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::types::Product;

/// Ordered bag of products. Duplicates are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a product to the end of the cart.
    pub fn add_product(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Returns a copy of the contents in the order they were added.
    pub fn contents(&self) -> Vec<Product> {
        self.items.clone()
    }

    /// Copies the contents out and empties the cart in one step.
    pub fn take_contents(&mut self) -> Vec<Product> {
        std::mem::take(&mut self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Cloneable handle to a single cart.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>` so that handles can be cloned into a transaction
/// and still be `Send`. The shop is single-actor, so the lock is never
/// contended; a poisoned lock is recovered rather than propagated since a
/// cart has no invariant a panic could break halfway.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    cart: Arc<Mutex<Cart>>,
}

impl SharedCart {
    /// Creates a handle to a new empty cart.
    pub fn new() -> Self {
        SharedCart {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        f(&mut self.lock())
    }

    pub fn add_product(&self, product: Product) {
        self.with_cart_mut(|cart| cart.add_product(product));
    }

    pub fn contents(&self) -> Vec<Product> {
        self.with_cart(Cart::contents)
    }

    pub fn take_contents(&self) -> Vec<Product> {
        self.with_cart_mut(Cart::take_contents)
    }

    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    pub fn len(&self) -> usize {
        self.with_cart(Cart::len)
    }

    /// True when both handles point at the same cart.
    pub fn same_cart(&self, other: &SharedCart) -> bool {
        Arc::ptr_eq(&self.cart, &other.cart)
    }
}
