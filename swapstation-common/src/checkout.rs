//! Payment options for a reservation book

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::reservation::ReservationBook;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPlan {
    #[default]
    Full,
    Deposit,
}

impl PaymentPlan {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Pay in full",
            Self::Deposit => "Deposit only",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Wallet,
    Qr,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Wallet, PaymentMethod::Qr];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Credit/debit card",
            Self::Wallet => "E-wallet",
            Self::Qr => "QR banking",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Card => "Visa, Mastercard, JCB",
            Self::Wallet => "MoMo, ZaloPay, ViettelPay",
            Self::Qr => "Scan a QR code to pay",
        }
    }
}

/// Amounts owed for the complete entries of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub reservations: usize,
    pub subtotal_vnd: u64,
    pub processing_fee_vnd: u64,
    pub total_vnd: u64,
}

impl Quote {
    pub fn new(book: &ReservationBook, plan: PaymentPlan, pricing: &PricingConfig) -> Self {
        let reservations = book.complete_count();
        let (subtotal_vnd, processing_fee_vnd) = match plan {
            PaymentPlan::Full => (book.total_cost(), pricing.processing_fee_vnd),
            PaymentPlan::Deposit => ((reservations as u64).saturating_mul(pricing.deposit_vnd), 0),
        };
        let processing_fee_vnd = if reservations == 0 { 0 } else { processing_fee_vnd };

        Self {
            reservations,
            subtotal_vnd,
            processing_fee_vnd,
            total_vnd: subtotal_vnd.saturating_add(processing_fee_vnd),
        }
    }

    pub fn is_payable(&self) -> bool {
        self.reservations > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::{SlotPatch, TimeSlot};
    use crate::StationId;
    use chrono::NaiveDate;

    fn book_with_two_complete() -> ReservationBook {
        let date = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let mut book = ReservationBook::new(150_000);
        for id in [1, 2] {
            book.update(StationId(id), SlotPatch { date: Some(date), time: Some(TimeSlot::ALL[id as usize]) });
        }
        book.update(StationId(3), SlotPatch::date(date));
        book
    }

    #[test]
    fn test_full_quote() {
        let pricing = PricingConfig { processing_fee_vnd: 5_000, ..Default::default() };
        let quote = Quote::new(&book_with_two_complete(), PaymentPlan::Full, &pricing);
        assert_eq!(quote.reservations, 2);
        assert_eq!(quote.subtotal_vnd, 300_000);
        assert_eq!(quote.total_vnd, 305_000);
    }

    #[test]
    fn test_deposit_quote() {
        let quote = Quote::new(&book_with_two_complete(), PaymentPlan::Deposit, &PricingConfig::default());
        assert_eq!(quote.total_vnd, 100_000);
        assert_eq!(quote.processing_fee_vnd, 0);
    }

    #[test]
    fn test_empty_book_is_not_payable() {
        let pricing = PricingConfig { processing_fee_vnd: 5_000, ..Default::default() };
        let quote = Quote::new(&ReservationBook::new(150_000), PaymentPlan::Full, &pricing);
        assert!(!quote.is_payable());
        assert_eq!(quote.total_vnd, 0);
    }
}
