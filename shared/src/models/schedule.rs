//! Irrigation schedule models and derived aggregates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::weather::is_dry_condition;

/// Clear-or-sunny days at or above this count flag a dry spell
pub const DRY_SPELL_THRESHOLD_DAYS: usize = 3;

/// One simulated day of the irrigation schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    /// Soil moisture before any irrigation that day (%), rounded to 1 decimal
    pub soil_moisture: f64,
    pub irrigation_needed: bool,
    /// Present if and only if `irrigation_needed` is true
    pub irrigation_volume_mm: Option<f64>,
    /// Provider condition label for the day
    pub condition: String,
}

/// Result of planning one forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationPlan {
    /// Schedule entries, date ascending, one per forecast day
    pub entries: Vec<ScheduleEntry>,
    /// Moisture carried out of the last day (%), after any irrigation
    pub final_moisture: f64,
}

/// Aggregates derived from a schedule. Computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    /// Days on which irrigation is required
    pub irrigation_days: usize,
    /// Days on which no irrigation is required
    pub rest_days: usize,
    /// Total irrigation volume over the horizon (mm, absent volumes count 0)
    pub total_volume_mm: f64,
    /// Clear-or-sunny days over the horizon
    pub dry_days: usize,
    /// True when `dry_days` reaches the dry-spell threshold
    pub dry_spell: bool,
    /// 0-based index of the first day needing irrigation, if any
    pub days_until_irrigation: Option<usize>,
}

impl ScheduleSummary {
    /// Derive the summary aggregates from a schedule
    pub fn from_entries(entries: &[ScheduleEntry]) -> Self {
        let irrigation_days = entries.iter().filter(|e| e.irrigation_needed).count();
        let total_volume_mm = entries
            .iter()
            .map(|e| e.irrigation_volume_mm.unwrap_or(0.0))
            .sum();
        let dry_days = entries
            .iter()
            .filter(|e| is_dry_condition(&e.condition))
            .count();
        let days_until_irrigation = entries.iter().position(|e| e.irrigation_needed);

        Self {
            irrigation_days,
            rest_days: entries.len() - irrigation_days,
            total_volume_mm,
            dry_days,
            dry_spell: dry_days >= DRY_SPELL_THRESHOLD_DAYS,
            days_until_irrigation,
        }
    }
}
