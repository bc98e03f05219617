//! Preheat policy domain record.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::models::encoded::Encoded;
use crate::naming;
use crate::types::{DbId, Timestamp};

/// What a filter matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    Repository,
    Tag,
    Label,
    Signature,
    Vulnerability,
}

/// A single artifact filter. `value` is a pattern, label list, severity or
/// flag depending on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(rename = "type")]
    pub kind: FilterType,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Manual,
    Scheduled,
    EventBased,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSettings {
    /// Cron expression; only meaningful for [`TriggerType::Scheduled`].
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cron: String,
}

/// When a policy fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(rename = "type")]
    pub kind: TriggerType,
    #[serde(rename = "trigger_setting", default)]
    pub settings: TriggerSettings,
}

/// A preheat policy as stored and scheduled.
///
/// `filters` and `trigger` carry their JSON text (authoritative for storage)
/// and, once decoded, the structured value. Records built from wire payloads
/// hold text only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Policy {
    /// `0` for a policy that has not been persisted yet.
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub project_id: DbId,
    pub provider_id: DbId,
    pub filters: Encoded<Vec<Filter>>,
    pub trigger: Encoded<Trigger>,
    pub enabled: bool,
    /// `None` when unset.
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl Policy {
    /// Parse the text forms of `filters` and `trigger`.
    pub fn decode(self) -> CoreResult<Self> {
        let filters = self
            .filters
            .decode()
            .map_err(|e| CoreError::InvalidFilters(e.to_string()))?;
        let trigger = self
            .trigger
            .decode()
            .map_err(|e| CoreError::InvalidTrigger(e.to_string()))?;
        Ok(Self {
            filters,
            trigger,
            ..self
        })
    }

    /// Replace the filters, re-encoding their text form.
    pub fn set_filters(&mut self, filters: Vec<Filter>) -> CoreResult<()> {
        self.filters =
            Encoded::encode(filters).map_err(|e| CoreError::InvalidFilters(e.to_string()))?;
        Ok(())
    }

    /// Replace the trigger, re-encoding its text form.
    pub fn set_trigger(&mut self, trigger: Trigger) -> CoreResult<()> {
        self.trigger =
            Encoded::encode(trigger).map_err(|e| CoreError::InvalidTrigger(e.to_string()))?;
        Ok(())
    }

    /// Check the name and, when decoded, that a scheduled trigger has a cron
    /// expression.
    pub fn validate(&self) -> CoreResult<()> {
        naming::validate_name(&self.name)?;

        if let Some(trigger) = self.trigger.value() {
            if trigger.kind == TriggerType::Scheduled && trigger.settings.cron.trim().is_empty() {
                return Err(CoreError::InvalidTrigger(
                    "scheduled trigger requires a cron expression".to_string(),
                ));
            }
        }
        Ok(())
    }
}
