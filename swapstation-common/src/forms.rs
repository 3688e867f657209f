//! Form validation for the dialog-driven actions
//!
//! A rejected form returns an [`Error`](crate::Error) for the page to show
//! as a notification; the form itself is left as typed.

use serde::{Deserialize, Serialize};

use crate::{
    Battery, BatteryKind, BatteryStatus, Error, InspectionRecord, InspectionVerdict,
    PendingInspection, Result,
};

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::debug!(field, "required field missing");
        Err(Error::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Bank details collected when a driver cancels a deposit
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefundRequest {
    pub account_number: String,
    pub bank_name: String,
    pub account_holder: String,
    pub reason: String,
}

impl RefundRequest {
    pub fn validate(&self) -> Result<()> {
        let missing = [&self.account_number, &self.bank_name, &self.account_holder]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            tracing::debug!("refund request rejected: incomplete bank details");
            return Err(Error::MissingBankDetails);
        }
        Ok(())
    }
}

/// Star rating left on a finished swap
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapFeedback {
    pub rating: Option<u8>,
    pub comment: String,
}

impl SwapFeedback {
    pub fn validate(&self) -> Result<u8> {
        match self.rating {
            None => Err(Error::RatingRequired),
            Some(rating @ 1..=5) => Ok(rating),
            Some(other) => Err(Error::InvalidRating(other)),
        }
    }
}

/// Add/edit battery dialog, with every field as typed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatteryDraft {
    pub id: String,
    pub kind: Option<BatteryKind>,
    pub status: BatteryStatus,
    pub soh: String,
    pub slot: String,
}

impl Default for BatteryDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: None,
            status: BatteryStatus::Maintenance,
            soh: "100".to_string(),
            slot: String::new(),
        }
    }
}

impl BatteryDraft {
    /// Pre-fill the edit dialog from an inventory row
    pub fn from_battery(battery: &Battery) -> Self {
        Self {
            id: battery.id.clone(),
            kind: Some(battery.kind),
            status: battery.status,
            soh: battery.soh.to_string(),
            slot: battery.slot.clone(),
        }
    }

    pub fn validate(&self, updated_at: &str) -> Result<Battery> {
        let id = required(&self.id, "Battery ID")?;
        let kind = self.kind.ok_or(Error::MissingField("Battery type"))?;
        let soh = self
            .soh
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|soh| *soh <= 100)
            .ok_or_else(|| Error::InvalidStateOfHealth(self.soh.clone()))?;
        let slot = required(&self.slot, "Location")?;

        Ok(Battery {
            id,
            kind,
            status: self.status,
            soh,
            slot,
            updated_at: updated_at.to_string(),
        })
    }
}

/// Staff inspection sheet for one returned battery
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InspectionForm {
    pub inspector: String,
    pub physical_condition: String,
    pub notes: String,
}

impl InspectionForm {
    pub fn validate(
        &self,
        battery: &PendingInspection,
        verdict: InspectionVerdict,
        inspected_at: &str,
    ) -> Result<InspectionRecord> {
        let inspector = required(&self.inspector, "Inspector")?;
        let physical_condition = required(&self.physical_condition, "Physical condition")?;

        Ok(InspectionRecord {
            battery_id: battery.battery_id.clone(),
            kind: battery.kind,
            inspected_at: inspected_at.to_string(),
            inspector,
            physical_condition,
            notes: self.notes.trim().to_string(),
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_refund_requires_bank_details() {
        let mut request = RefundRequest {
            account_number: "0123456789".to_string(),
            bank_name: "Vietcombank".to_string(),
            account_holder: "  ".to_string(),
            reason: String::new(),
        };
        assert!(matches!(request.validate(), Err(Error::MissingBankDetails)));

        request.account_holder = "NGUYEN VAN A".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_feedback_rating() {
        let mut feedback = SwapFeedback::default();
        assert!(matches!(feedback.validate(), Err(Error::RatingRequired)));

        feedback.rating = Some(6);
        assert!(matches!(feedback.validate(), Err(Error::InvalidRating(6))));

        feedback.rating = Some(4);
        assert_eq!(feedback.validate().unwrap(), 4);
    }

    #[test]
    fn test_battery_draft() {
        let mut draft = BatteryDraft {
            id: " BAT006 ".to_string(),
            kind: Some(BatteryKind::Lfp),
            slot: "Slot C1".to_string(),
            ..Default::default()
        };
        let battery = draft.validate("15/12/2024 15:00").unwrap();
        assert_eq!(battery.id, "BAT006");
        assert_eq!(battery.soh, 100);
        assert_eq!(battery.status, BatteryStatus::Maintenance);

        draft.soh = "101".to_string();
        assert!(matches!(draft.validate(""), Err(Error::InvalidStateOfHealth(_))));

        draft.soh = "9x".to_string();
        assert!(matches!(draft.validate(""), Err(Error::InvalidStateOfHealth(_))));

        draft.soh = "80".to_string();
        draft.kind = None;
        assert!(matches!(draft.validate(""), Err(Error::MissingField("Battery type"))));
    }

    #[test]
    fn test_draft_from_battery() {
        let battery = &catalog::batteries()[1];
        let draft = BatteryDraft::from_battery(battery);
        assert_eq!(draft.soh, "92");
        assert_eq!(draft.validate(&battery.updated_at).unwrap(), *battery);
    }

    #[test]
    fn test_inspection_form() {
        let pending = &catalog::pending_inspections()[0];
        let mut form = InspectionForm {
            inspector: String::new(),
            physical_condition: "Good".to_string(),
            notes: "ok".to_string(),
        };
        assert!(matches!(
            form.validate(pending, InspectionVerdict::Passed, "now"),
            Err(Error::MissingField("Inspector"))
        ));

        form.inspector = catalog::INSPECTORS[1].to_string();
        let record = form.validate(pending, InspectionVerdict::Maintenance, "now").unwrap();
        assert_eq!(record.battery_id, "BAT005");
        assert_eq!(record.verdict, InspectionVerdict::Maintenance);
    }
}
