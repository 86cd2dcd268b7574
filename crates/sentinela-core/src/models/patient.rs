// ABOUTME: Patient roster types consumed by the roster aggregator
// ABOUTME: BiologicalSex gating enum parsed from stored "M"/"F" codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sentinela

use crate::models::checkin::CheckinRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Biological sex, gating which sex-conditional fields participate in
/// rule evaluation (`erecao_matinal` for males, `ciclo_menstrual_alterado`
/// for females)
///
/// Stored records carry this as `"M"`, `"F"`, or nothing at all; anything
/// else degrades to `Unknown` rather than failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BiologicalSex {
    /// Male ("M")
    Male,
    /// Female ("F")
    Female,
    /// Not recorded; no sex-gated rule applies
    #[default]
    Unknown,
}

impl BiologicalSex {
    /// Parse a stored sex code; absent or unrecognized codes map to `Unknown`
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("M" | "m") => Self::Male,
            Some("F" | "f") => Self::Female,
            _ => Self::Unknown,
        }
    }

    /// The stored single-letter code, if this sex has one
    #[must_use]
    pub const fn code(self) -> Option<&'static str> {
        match self {
            Self::Male => Some("M"),
            Self::Female => Some("F"),
            Self::Unknown => None,
        }
    }
}

impl Serialize for BiologicalSex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.code() {
            Some(code) => serializer.serialize_str(code),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for BiologicalSex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_code(code.as_deref()))
    }
}

/// One roster entry: a patient and their (unordered) check-in history
///
/// This is the only shape the aggregator demands from storage. The check-in
/// list carries whatever the caller fetched; windowing and latest-selection
/// happen inside the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Opaque patient identifier from storage
    pub id: String,
    /// Display name used in alert entries
    #[serde(alias = "nome")]
    pub name: String,
    /// Biological sex code ("M"/"F"/absent)
    #[serde(default, alias = "sexo")]
    pub sex: BiologicalSex,
    /// Check-in history, any order
    #[serde(default)]
    pub checkins: Vec<CheckinRecord>,
}
