// models/src/medical/reminder.rs

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::PatientOwned;
use crate::errors::ValidationErrors;
use crate::identifiers::Identifier;
use crate::serde_helpers::deserialize_time;
use crate::validation::Validate;

/// Voice is the accessible default; `sms` and `notification` are also used
/// by clients but the channel is not restricted.
pub const DEFAULT_CHANNEL: &str = "voice";

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReminder {
    pub patient_id: Identifier,
    pub message: String,
    #[serde(deserialize_with = "deserialize_time")]
    pub reminder_time: NaiveTime,
    #[serde(default = "default_channel")]
    pub channel: String,
}

impl Validate for NewReminder {
    // Presence, types and the time format are all enforced while decoding.
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Identifier,
    pub patient_id: Identifier,
    pub message: String,
    pub reminder_time: NaiveTime,
    pub channel: String,
}

impl Reminder {
    pub fn from_new_reminder(id: Identifier, new_reminder: NewReminder) -> Self {
        Reminder {
            id,
            patient_id: new_reminder.patient_id,
            message: new_reminder.message,
            reminder_time: new_reminder.reminder_time,
            channel: new_reminder.channel,
        }
    }
}

impl PatientOwned for Reminder {
    fn patient_id(&self) -> &Identifier {
        &self.patient_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn channel_defaults_to_voice() {
        let parsed: NewReminder = serde_json::from_value(json!({
            "patient_id": "p-1",
            "message": "Time for physiotherapy session",
            "reminder_time": "15:30:00",
        }))
        .unwrap();
        assert_eq!(parsed.channel, DEFAULT_CHANNEL);
    }

    #[test]
    fn time_round_trips_as_hh_mm_ss() {
        let parsed: NewReminder = serde_json::from_value(json!({
            "patient_id": "p-1",
            "message": "Evening medication",
            "reminder_time": "21:00",
            "channel": "sms",
        }))
        .unwrap();
        let reminder = Reminder::from_new_reminder(Identifier::generate(), parsed);
        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["reminder_time"], "21:00:00");
        assert_eq!(value["channel"], "sms");
    }

    #[test]
    fn missing_time_is_rejected() {
        let result = serde_json::from_value::<NewReminder>(json!({
            "patient_id": "p-1",
            "message": "Evening medication",
        }));
        assert!(result.is_err());
    }
}
