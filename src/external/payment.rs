use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Receipt {
    pub reference: String,
    pub amount: i64,
    pub confirmation: String,
}

/// Payment is an external collaborator whose real contract is still to be
/// defined; the booking flow is written against this trait so a real
/// gateway can replace the simulation without touching any view.
#[async_trait]
pub trait PaymentGateway {
    async fn charge(&self, reference: &str, amount: i64) -> Result<Receipt, Error>;
}

pub type DynGateway = Arc<dyn PaymentGateway + Send + Sync>;

/// Always approves. No money moves anywhere.
pub struct SimulatedGateway;

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    #[tracing::instrument(skip(self))]
    async fn charge(&self, reference: &str, amount: i64) -> Result<Receipt, Error> {
        if amount <= 0 {
            return Err(invalid_input_error());
        }

        let confirmation = format!("sim-{}", rand::random::<u32>());

        tracing::info!("simulated charge approved: {}", confirmation);

        Ok(Receipt {
            reference: reference.into(),
            amount,
            confirmation,
        })
    }
}
