//! Fixtures shared by the unit tests.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub use futures::executor::block_on;

use crate::models::{Identity, Parcel, ParcelSize, ParcelStatus, PaymentType, Role, User};

pub fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        email: format!("{}@example.com", id),
        role,
        created_at: None,
    }
}

pub fn identity(id: &str, role: Role) -> Identity {
    Identity::new(user(id, role), format!("token-{}", id))
}

pub fn parcel(id: &str, status: ParcelStatus) -> Parcel {
    Parcel {
        id: id.to_string(),
        tracking_number: format!("TRK-{}", id),
        customer_name: "Ana".to_string(),
        customer_email: "ana@example.com".to_string(),
        pickup_address: "1 Main St".to_string(),
        delivery_address: "2 High St".to_string(),
        parcel_size: ParcelSize::Small,
        parcel_type: "documents".to_string(),
        payment_type: PaymentType::Cod,
        amount: 80.0,
        cod_amount: 0.0,
        status,
        agent_id: None,
        notes: None,
        location: None,
        created_at: None,
    }
}

/// Devuelve `Pending` una vez (despertándose) antes de completar,
/// como una respuesta HTTP real.
pub struct YieldOnce(bool);

pub fn yield_once() -> YieldOnce {
    YieldOnce(false)
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            return Poll::Ready(());
        }
        self.0 = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_on_drives_futures_that_yield() {
        let value = block_on(async {
            yield_once().await;
            yield_once().await;
            7
        });
        assert_eq!(value, 7);
    }
}
