use serde::{Deserialize, Serialize};

use super::costs::Category;
use crate::error::{Result, StackcostError};

// ---------------------------------------------------------------------------
// UsageProfile — field access shared by the five category profiles
// ---------------------------------------------------------------------------

/// Named numeric fields of one category's usage profile.
///
/// Field names are the wire names (`storageGB`, `readsPerMonth`, ...).
pub trait UsageProfile {
    const CATEGORY: Category;
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<f64>;
    fn field_mut(&mut self, name: &str) -> Option<&mut f64>;
}

macro_rules! usage_fields {
    ($ty:ty, $category:expr, { $($wire:literal => $field:ident),+ $(,)? }) => {
        impl UsageProfile for $ty {
            const CATEGORY: Category = $category;
            const FIELDS: &'static [&'static str] = &[$($wire),+];

            fn field(&self, name: &str) -> Option<f64> {
                match name {
                    $($wire => Some(self.$field),)+
                    _ => None,
                }
            }

            fn field_mut(&mut self, name: &str) -> Option<&mut f64> {
                match name {
                    $($wire => Some(&mut self.$field),)+
                    _ => None,
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// DatabaseUsage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseUsage {
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
    pub monthly_active_rows: f64,
    pub reads_per_month: f64,
    pub writes_per_month: f64,
}

usage_fields!(DatabaseUsage, Category::Database, {
    "storageGB" => storage_gb,
    "monthlyActiveRows" => monthly_active_rows,
    "readsPerMonth" => reads_per_month,
    "writesPerMonth" => writes_per_month,
});

// ---------------------------------------------------------------------------
// AuthUsage
// ---------------------------------------------------------------------------

/// `sign_ups_per_month` and `email_verifications` are carried for display
/// only; no provider formula reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthUsage {
    pub monthly_active_users: f64,
    pub sign_ups_per_month: f64,
    pub email_verifications: f64,
}

usage_fields!(AuthUsage, Category::Auth, {
    "monthlyActiveUsers" => monthly_active_users,
    "signUpsPerMonth" => sign_ups_per_month,
    "emailVerifications" => email_verifications,
});

// ---------------------------------------------------------------------------
// StorageUsage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageUsage {
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
    #[serde(rename = "downloadsGB")]
    pub downloads_gb: f64,
    /// Display only.
    #[serde(rename = "uploadsGB")]
    pub uploads_gb: f64,
}

usage_fields!(StorageUsage, Category::Storage, {
    "storageGB" => storage_gb,
    "downloadsGB" => downloads_gb,
    "uploadsGB" => uploads_gb,
});

// ---------------------------------------------------------------------------
// FunctionsUsage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FunctionsUsage {
    pub invocations_per_month: f64,
    pub average_duration_ms: f64,
    #[serde(rename = "memoryGB")]
    pub memory_gb: f64,
}

impl FunctionsUsage {
    /// Compute volume in GB-seconds: invocations × seconds × GB.
    pub fn gb_seconds(&self) -> f64 {
        self.invocations_per_month * (self.average_duration_ms / 1000.0) * self.memory_gb
    }
}

usage_fields!(FunctionsUsage, Category::Functions, {
    "invocationsPerMonth" => invocations_per_month,
    "averageDurationMs" => average_duration_ms,
    "memoryGB" => memory_gb,
});

// ---------------------------------------------------------------------------
// RealtimeUsage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealtimeUsage {
    pub concurrent_connections: f64,
    pub messages_per_month: f64,
}

usage_fields!(RealtimeUsage, Category::Realtime, {
    "concurrentConnections" => concurrent_connections,
    "messagesPerMonth" => messages_per_month,
});

// ---------------------------------------------------------------------------
// UsageProfileSet
// ---------------------------------------------------------------------------

/// One usage profile per category.
///
/// `Default` is all zeros; [`UsageProfileSet::seed`] gives the calculator's
/// starting values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageProfileSet {
    pub database: DatabaseUsage,
    pub auth: AuthUsage,
    pub storage: StorageUsage,
    pub functions: FunctionsUsage,
    pub realtime: RealtimeUsage,
}

impl UsageProfileSet {
    pub fn seed() -> Self {
        Self {
            database: DatabaseUsage {
                storage_gb: 1.0,
                monthly_active_rows: 10_000.0,
                reads_per_month: 100_000.0,
                writes_per_month: 50_000.0,
            },
            auth: AuthUsage {
                monthly_active_users: 10_000.0,
                sign_ups_per_month: 1_000.0,
                email_verifications: 500.0,
            },
            storage: StorageUsage {
                storage_gb: 10.0,
                downloads_gb: 50.0,
                uploads_gb: 20.0,
            },
            functions: FunctionsUsage {
                invocations_per_month: 100_000.0,
                average_duration_ms: 100.0,
                memory_gb: 0.5,
            },
            realtime: RealtimeUsage {
                concurrent_connections: 100.0,
                messages_per_month: 1_000_000.0,
            },
        }
    }

    /// Wire names of the fields belonging to `category`.
    pub fn fields(category: Category) -> &'static [&'static str] {
        match category {
            Category::Database => DatabaseUsage::FIELDS,
            Category::Auth => AuthUsage::FIELDS,
            Category::Storage => StorageUsage::FIELDS,
            Category::Functions => FunctionsUsage::FIELDS,
            Category::Realtime => RealtimeUsage::FIELDS,
        }
    }

    pub fn field(&self, category: Category, name: &str) -> Option<f64> {
        match category {
            Category::Database => self.database.field(name),
            Category::Auth => self.auth.field(name),
            Category::Storage => self.storage.field(name),
            Category::Functions => self.functions.field(name),
            Category::Realtime => self.realtime.field(name),
        }
    }

    /// Set one field. Negative and non-finite values are stored as 0.
    pub fn set_field(&mut self, category: Category, name: &str, value: f64) -> Result<()> {
        let slot = match category {
            Category::Database => self.database.field_mut(name),
            Category::Auth => self.auth.field_mut(name),
            Category::Storage => self.storage.field_mut(name),
            Category::Functions => self.functions.field_mut(name),
            Category::Realtime => self.realtime.field_mut(name),
        };
        let slot = slot.ok_or_else(|| {
            StackcostError::InvalidArgument(format!(
                "Unknown {} field: {}",
                category, name
            ))
        })?;
        *slot = sanitize(value);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Input coercion
// ---------------------------------------------------------------------------

/// Coerce raw form input into a usable quantity.
///
/// Reads the longest leading decimal number (`"12.5GB"` -> 12.5); anything
/// unparsable, negative or non-finite becomes 0.
pub fn parse_input(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    sanitize(s[..end].parse::<f64>().unwrap_or(0.0))
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
