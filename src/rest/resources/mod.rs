//! Checkout resource implementations.
//!
//! Each resource wraps a [`CheckoutResource`](crate::rest::CheckoutResource)
//! and implements the operations it supports:
//!
//! | Resource | Operations |
//! |---|---|
//! | [`Order`] | create, fetch, update |
//! | [`RecurringStatus`] | fetch |
//! | [`RecurringOrder`] | create |

mod order;
mod recurring_order;
mod recurring_status;

pub use order::Order;
pub use recurring_order::RecurringOrder;
pub use recurring_status::RecurringStatus;
