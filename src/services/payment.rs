//! Payment authorization seam.
//!
//! The payment screen talks to `PaymentAuthorizer` only, so the demo UPI
//! gateway can be swapped for a real integration without touching the funnel
//! state machine.

use thiserror::Error;

/// The only UPI id the demo gateway accepts.
pub const DEMO_UPI_ID: &str = "success@razorpay";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Invalid UPI ID (demo mode)")]
    Declined,
}

/// Result of a successful authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub enrollment_id: String,
}

pub trait PaymentAuthorizer {
    fn authorize(&self, upi_id: &str) -> Result<PaymentReceipt, PaymentError>;
}

/// Demo stand-in for a real payment gateway: exact-literal match, unlimited
/// retries on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoUpiGateway;

impl PaymentAuthorizer for DemoUpiGateway {
    fn authorize(&self, upi_id: &str) -> Result<PaymentReceipt, PaymentError> {
        if upi_id == DEMO_UPI_ID {
            Ok(PaymentReceipt {
                enrollment_id: new_enrollment_id(),
            })
        } else {
            Err(PaymentError::Declined)
        }
    }
}

/// `ENR` followed by nine uppercase hex characters.
pub fn new_enrollment_id() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("ENR{}", hex[..9].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_literal_authorizes() {
        let receipt = DemoUpiGateway.authorize(DEMO_UPI_ID).unwrap();
        assert!(receipt.enrollment_id.starts_with("ENR"));
        assert_eq!(receipt.enrollment_id.len(), 12);
    }

    #[test]
    fn test_padded_literal_is_declined() {
        // the match is exact; surrounding whitespace is not forgiven
        assert_eq!(
            DemoUpiGateway.authorize("  success@razorpay  ").unwrap_err(),
            PaymentError::Declined
        );
        assert_eq!(
            DemoUpiGateway.authorize("success@razorpay ").unwrap_err(),
            PaymentError::Declined
        );
    }

    #[test]
    fn test_anything_else_is_declined() {
        let err = DemoUpiGateway.authorize("wrong@id").unwrap_err();
        assert_eq!(err, PaymentError::Declined);
        assert_eq!(err.to_string(), "Invalid UPI ID (demo mode)");
        // unlimited retries: a later attempt with the literal still works
        assert!(DemoUpiGateway.authorize(DEMO_UPI_ID).is_ok());
    }

    #[test]
    fn test_enrollment_id_format() {
        let id = new_enrollment_id();
        assert!(id.starts_with("ENR"));
        assert_eq!(id.len(), 12);
        assert!(id[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
