use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use erp_core::{DomainError, DomainResult, ValueObject, ensure_not_blank};

/// Non-negative amount in a single currency.
///
/// Arithmetic never mutates; every operation returns a new instance.
/// Equality and hashing are structural over `(amount, currency)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

/// Wire shape; deserialization goes through [`Money::new`].
#[derive(Deserialize)]
struct MoneyRecord {
    amount: Decimal,
    currency: String,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = DomainError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Money::new(record.amount, &record.currency)
    }
}

impl Money {
    /// Currency is stored trimmed and uppercased (e.g. " usd " -> "USD").
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::invalid_argument("amount cannot be negative"));
        }
        ensure_not_blank(currency, "currency")?;

        Ok(Self {
            amount,
            currency: currency.trim().to_uppercase(),
        })
    }

    pub fn zero(currency: &str) -> DomainResult<Self> {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other, "add")?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invalid_operation("amount overflow"))?;
        Ok(self.with_amount(amount))
    }

    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other, "subtract")?;
        if self.amount < other.amount {
            return Err(DomainError::invalid_operation("result cannot be negative"));
        }
        Ok(self.with_amount(self.amount - other.amount))
    }

    pub fn multiply(&self, factor: Decimal) -> DomainResult<Money> {
        if factor < Decimal::ZERO {
            return Err(DomainError::invalid_argument("multiplier cannot be negative"));
        }
        let amount = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| DomainError::invalid_operation("amount overflow"))?;
        Ok(self.with_amount(amount))
    }

    fn ensure_same_currency(&self, other: &Money, op: &str) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::invalid_operation(format!(
                "cannot {op} money with different currencies ({} vs {})",
                self.currency, other.currency
            )));
        }
        Ok(())
    }

    fn with_amount(&self, amount: Decimal) -> Money {
        Money {
            amount,
            currency: self.currency.clone(),
        }
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, "USD").unwrap()
    }

    #[test]
    fn currency_is_uppercased() {
        let m = Money::new(dec("10"), "usd").unwrap();
        assert_eq!(m.currency(), "USD");
        assert_eq!(m.amount(), dec("10"));
    }

    #[test]
    fn currency_is_trimmed_before_comparison() {
        let padded = Money::new(dec("5"), " usd ").unwrap();
        assert_eq!(padded.currency(), "USD");
        assert_eq!(usd(dec("5")).add(&padded).unwrap(), usd(dec("10")));
    }

    #[test]
    fn negative_amount_is_rejected() {
        match Money::new(dec("-0.01"), "USD") {
            Err(DomainError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn blank_currency_is_rejected() {
        match Money::new(dec("1"), "  ") {
            Err(DomainError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn zero_amount_is_allowed() {
        let m = Money::zero("eur").unwrap();
        assert_eq!(m, Money::new(Decimal::ZERO, "EUR").unwrap());
    }

    #[test]
    fn add_same_currency() {
        assert_eq!(usd(dec("10")).add(&usd(dec("5"))).unwrap(), usd(dec("15")));
    }

    #[test]
    fn add_different_currency_fails() {
        let eur = Money::new(dec("5"), "EUR").unwrap();
        match usd(dec("5")).add(&eur) {
            Err(DomainError::InvalidOperation(_)) => {}
            other => panic!("Expected InvalidOperation, got {other:?}"),
        }
    }

    #[test]
    fn subtract_to_negative_fails() {
        match usd(dec("5")).subtract(&usd(dec("10"))) {
            Err(DomainError::InvalidOperation(_)) => {}
            other => panic!("Expected InvalidOperation, got {other:?}"),
        }
    }

    #[test]
    fn subtract_to_zero_is_allowed() {
        assert_eq!(usd(dec("5")).subtract(&usd(dec("5"))).unwrap(), usd(dec("0")));
    }

    #[test]
    fn subtract_different_currency_fails() {
        let eur = Money::new(dec("1"), "EUR").unwrap();
        assert!(matches!(
            usd(dec("5")).subtract(&eur),
            Err(DomainError::InvalidOperation(_))
        ));
    }

    #[test]
    fn multiply_scales_amount() {
        assert_eq!(usd(dec("2.50")).multiply(dec("3")).unwrap(), usd(dec("7.50")));
    }

    #[test]
    fn multiply_by_negative_fails() {
        match usd(dec("2")).multiply(dec("-1")) {
            Err(DomainError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn arithmetic_leaves_operands_untouched() {
        let a = usd(dec("10"));
        let b = usd(dec("4"));
        let _ = a.add(&b).unwrap();
        let _ = a.subtract(&b).unwrap();
        let _ = a.multiply(dec("2")).unwrap();
        assert_eq!(a, usd(dec("10")));
        assert_eq!(b, usd(dec("4")));
    }

    #[test]
    fn displays_amount_and_currency() {
        assert_eq!(usd(dec("12.5")).to_string(), "12.5 USD");
    }

    #[test]
    fn deserialization_validates() {
        let m: Money = serde_json::from_str(r#"{"amount":"3.20","currency":"gbp"}"#).unwrap();
        assert_eq!(m, Money::new(dec("3.20"), "GBP").unwrap());

        let err = serde_json::from_str::<Money>(r#"{"amount":"-1","currency":"GBP"}"#);
        assert!(err.is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: constructed currency is always the uppercased input.
            #[test]
            fn currency_normalized(cents in 0i64..1_000_000_000, currency in "[a-zA-Z]{3}") {
                let m = Money::new(Decimal::new(cents, 2), &currency).unwrap();
                prop_assert_eq!(m.currency(), currency.to_uppercase());
            }

            /// Property: negative amounts never construct.
            #[test]
            fn negative_never_constructs(cents in 1i64..1_000_000_000) {
                let result = Money::new(Decimal::new(-cents, 2), "USD");
                prop_assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
            }

            /// Property: subtract undoes add within one currency.
            #[test]
            fn subtract_inverts_add(a in 0i64..1_000_000_000, b in 0i64..1_000_000_000) {
                let x = usd(Decimal::new(a, 2));
                let y = usd(Decimal::new(b, 2));
                let sum = x.add(&y).unwrap();
                prop_assert_eq!(sum.subtract(&y).unwrap(), x.clone());
                prop_assert_eq!(sum, y.add(&x).unwrap());
            }
        }
    }
}
