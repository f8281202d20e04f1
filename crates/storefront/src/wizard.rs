//! Order wizard state machine.
//!
//! ```text
//! Cart --(cart not empty)--> Details --(name, email, phone)--> Payment --(place)--> Confirmation
//!  ^                            |                                  |
//!  +----------- back -----------+<------------- back --------------+
//! ```
//!
//! Forward moves are validated before the step changes; a failed move leaves
//! the wizard exactly where it was. Backward moves are unconditional.
//! `Confirmation` is terminal.

use resto_core::OrderStep;
use thiserror::Error;

use crate::order::{CustomerDetails, ValidationError};

/// Why a wizard move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The cart must contain at least one line before entering details.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// Required customer details are missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The move is not available from the current step.
    #[error("cannot {action} from the {from} step")]
    InvalidTransition {
        from: OrderStep,
        action: &'static str,
    },
}

/// Linear multi-step order flow.
#[derive(Debug, Clone, Default)]
pub struct OrderWizard {
    step: OrderStep,
    details: Option<CustomerDetails>,
}

impl OrderWizard {
    /// A wizard on the cart step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    #[must_use]
    pub const fn step(&self) -> OrderStep {
        self.step
    }

    /// Details accepted on the details step, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&CustomerDetails> {
        self.details.as_ref()
    }

    /// Whether the forward control on the cart step is enabled.
    #[must_use]
    pub const fn can_proceed_from_cart(cart_is_empty: bool) -> bool {
        !cart_is_empty
    }

    /// `Cart -> Details`.
    ///
    /// # Errors
    ///
    /// [`WizardError::EmptyCart`] if the cart is empty, or
    /// [`WizardError::InvalidTransition`] if not on the cart step.
    pub fn proceed_to_details(&mut self, cart_is_empty: bool) -> Result<(), WizardError> {
        self.expect_step(OrderStep::Cart, "continue to details")?;
        if !Self::can_proceed_from_cart(cart_is_empty) {
            return Err(WizardError::EmptyCart);
        }
        self.enter(OrderStep::Details);
        Ok(())
    }

    /// `Details -> Payment`, accepting the submitted form.
    ///
    /// # Errors
    ///
    /// [`WizardError::Validation`] if name, email, or phone is empty, or
    /// [`WizardError::InvalidTransition`] if not on the details step.
    pub fn proceed_to_payment(&mut self, details: CustomerDetails) -> Result<(), WizardError> {
        self.expect_step(OrderStep::Details, "continue to payment")?;
        details.validate()?;
        self.details = Some(details);
        self.enter(OrderStep::Payment);
        Ok(())
    }

    /// Step back once: `Details -> Cart` or `Payment -> Details`.
    ///
    /// # Errors
    ///
    /// [`WizardError::InvalidTransition`] on the cart step (nothing to go
    /// back to) or on the terminal confirmation step.
    pub fn back(&mut self) -> Result<OrderStep, WizardError> {
        let previous = match self.step {
            OrderStep::Details => OrderStep::Cart,
            OrderStep::Payment => OrderStep::Details,
            OrderStep::Cart | OrderStep::Confirmation => {
                return Err(WizardError::InvalidTransition {
                    from: self.step,
                    action: "go back",
                });
            }
        };
        self.enter(previous);
        Ok(previous)
    }

    /// Check that an order may be placed now and return the accepted details.
    ///
    /// Does not change the step; call [`OrderWizard::confirm`] once the
    /// order has been recorded.
    ///
    /// # Errors
    ///
    /// [`WizardError::InvalidTransition`] if not on the payment step.
    pub fn ready_to_place(&self) -> Result<&CustomerDetails, WizardError> {
        self.expect_step(OrderStep::Payment, "place the order")?;
        self.details.as_ref().ok_or(WizardError::InvalidTransition {
            from: self.step,
            action: "place the order",
        })
    }

    /// `Payment -> Confirmation`.
    ///
    /// # Errors
    ///
    /// [`WizardError::InvalidTransition`] if not on the payment step.
    pub fn confirm(&mut self) -> Result<(), WizardError> {
        self.ready_to_place()?;
        self.enter(OrderStep::Confirmation);
        Ok(())
    }

    fn expect_step(&self, expected: OrderStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }

    fn enter(&mut self, step: OrderStep) {
        tracing::info!(from = %self.step, to = %step, "Order wizard step changed");
        self.step = step;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_details() -> CustomerDetails {
        CustomerDetails::new("Asha", "asha@example.com", "555-0100")
    }

    #[test]
    fn test_empty_cart_blocks_details() {
        let mut wizard = OrderWizard::new();
        assert_eq!(wizard.proceed_to_details(true), Err(WizardError::EmptyCart));
        assert_eq!(wizard.step(), OrderStep::Cart);
    }

    #[test]
    fn test_missing_phone_stays_on_details() {
        let mut wizard = OrderWizard::new();
        wizard.proceed_to_details(false).unwrap();

        let result = wizard.proceed_to_payment(CustomerDetails::new("Asha", "asha@example.com", ""));
        assert!(matches!(result, Err(WizardError::Validation(_))));
        assert_eq!(wizard.step(), OrderStep::Details);
        assert!(wizard.details().is_none());
    }

    #[test]
    fn test_full_forward_walk() {
        let mut wizard = OrderWizard::new();
        wizard.proceed_to_details(false).unwrap();
        wizard.proceed_to_payment(complete_details()).unwrap();
        assert_eq!(wizard.step(), OrderStep::Payment);
        assert_eq!(wizard.ready_to_place().unwrap().name, "Asha");
        wizard.confirm().unwrap();
        assert_eq!(wizard.step(), OrderStep::Confirmation);
    }

    #[test]
    fn test_no_skipping() {
        let mut wizard = OrderWizard::new();
        assert!(matches!(
            wizard.proceed_to_payment(complete_details()),
            Err(WizardError::InvalidTransition { from: OrderStep::Cart, .. })
        ));
        assert!(wizard.confirm().is_err());
        assert_eq!(wizard.step(), OrderStep::Cart);
    }

    #[test]
    fn test_back_is_unconditional_until_confirmation() {
        let mut wizard = OrderWizard::new();
        assert!(wizard.back().is_err());

        wizard.proceed_to_details(false).unwrap();
        wizard.proceed_to_payment(complete_details()).unwrap();
        assert_eq!(wizard.back().unwrap(), OrderStep::Details);
        assert_eq!(wizard.back().unwrap(), OrderStep::Cart);

        wizard.proceed_to_details(false).unwrap();
        wizard.proceed_to_payment(complete_details()).unwrap();
        wizard.confirm().unwrap();
        assert!(wizard.back().is_err());
        assert_eq!(wizard.step(), OrderStep::Confirmation);
    }
}
