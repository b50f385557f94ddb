use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StackcostError;
use crate::money::Money;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A billable service area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Database,
    Auth,
    Storage,
    Functions,
    Realtime,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Database,
        Category::Auth,
        Category::Storage,
        Category::Functions,
        Category::Realtime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Database => "database",
            Category::Auth => "auth",
            Category::Storage => "storage",
            Category::Functions => "functions",
            Category::Realtime => "realtime",
        }
    }

    /// Providers priced for this category, primary first.
    pub fn providers(&self) -> &'static [Provider] {
        match self {
            Category::Database => &[
                Provider::Supabase,
                Provider::Firebase,
                Provider::Aws,
                Provider::Neon,
                Provider::Planetscale,
            ],
            _ => &[Provider::Supabase, Provider::Firebase, Provider::Aws],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StackcostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StackcostError::InvalidArgument(format!("Unknown category: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// A vendor whose pricing is modelled. `Supabase` is the primary provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Supabase,
    Firebase,
    Aws,
    Neon,
    Planetscale,
}

impl Provider {
    pub const PRIMARY: Provider = Provider::Supabase;

    /// Stable wire/export key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Supabase => "supabase",
            Provider::Firebase => "firebase",
            Provider::Aws => "aws",
            Provider::Neon => "neon",
            Provider::Planetscale => "planetscale",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Supabase => "Supabase",
            Provider::Firebase => "Firebase",
            Provider::Aws => "AWS",
            Provider::Neon => "Neon",
            Provider::Planetscale => "PlanetScale",
        }
    }

    /// The product compared within a category, e.g. `AWS RDS` for database.
    pub fn product_name(&self, category: Category) -> &'static str {
        match (self, category) {
            (Provider::Firebase, Category::Database) => "Firebase Firestore",
            (Provider::Firebase, Category::Auth) => "Firebase Auth",
            (Provider::Firebase, Category::Storage) => "Firebase Storage",
            (Provider::Firebase, Category::Functions) => "Cloud Functions",
            (Provider::Firebase, Category::Realtime) => "Firebase Realtime Database",
            (Provider::Aws, Category::Database) => "AWS RDS",
            (Provider::Aws, Category::Auth) => "AWS Cognito",
            (Provider::Aws, Category::Storage) => "AWS S3",
            (Provider::Aws, Category::Functions) => "AWS Lambda",
            (Provider::Aws, Category::Realtime) => "AWS AppSync",
            (p, _) => p.display_name(),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = StackcostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::config::EXPORT_PROVIDERS
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StackcostError::InvalidArgument(format!("Unknown provider: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// ProviderCosts — read access over a per-category breakdown
// ---------------------------------------------------------------------------

pub trait ProviderCosts {
    /// Cost for `provider`, or `None` if the category does not price it.
    fn get(&self, provider: Provider) -> Option<Money>;

    fn primary(&self) -> Money {
        self.get(Provider::PRIMARY).unwrap_or_default()
    }

    /// `(provider, cost)` pairs in the category's provider order.
    fn entries(&self) -> Vec<(Provider, Money)>;
}

// ---------------------------------------------------------------------------
// DatabaseCosts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseCosts {
    pub supabase: Money,
    pub firebase: Money,
    pub aws: Money,
    pub neon: Money,
    pub planetscale: Money,
}

impl ProviderCosts for DatabaseCosts {
    fn get(&self, provider: Provider) -> Option<Money> {
        Some(match provider {
            Provider::Supabase => self.supabase,
            Provider::Firebase => self.firebase,
            Provider::Aws => self.aws,
            Provider::Neon => self.neon,
            Provider::Planetscale => self.planetscale,
        })
    }

    fn entries(&self) -> Vec<(Provider, Money)> {
        vec![
            (Provider::Supabase, self.supabase),
            (Provider::Firebase, self.firebase),
            (Provider::Aws, self.aws),
            (Provider::Neon, self.neon),
            (Provider::Planetscale, self.planetscale),
        ]
    }
}

// ---------------------------------------------------------------------------
// ServiceCosts — auth, storage, functions, realtime
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCosts {
    pub supabase: Money,
    pub firebase: Money,
    pub aws: Money,
}

impl ProviderCosts for ServiceCosts {
    fn get(&self, provider: Provider) -> Option<Money> {
        match provider {
            Provider::Supabase => Some(self.supabase),
            Provider::Firebase => Some(self.firebase),
            Provider::Aws => Some(self.aws),
            Provider::Neon | Provider::Planetscale => None,
        }
    }

    fn entries(&self) -> Vec<(Provider, Money)> {
        vec![
            (Provider::Supabase, self.supabase),
            (Provider::Firebase, self.firebase),
            (Provider::Aws, self.aws),
        ]
    }
}

// ---------------------------------------------------------------------------
// CostBreakdownSet
// ---------------------------------------------------------------------------

/// Per-provider costs for all five categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostBreakdownSet {
    pub database: DatabaseCosts,
    pub auth: ServiceCosts,
    pub storage: ServiceCosts,
    pub functions: ServiceCosts,
    pub realtime: ServiceCosts,
}

impl CostBreakdownSet {
    pub fn breakdown(&self, category: Category) -> &dyn ProviderCosts {
        match category {
            Category::Database => &self.database,
            Category::Auth => &self.auth,
            Category::Storage => &self.storage,
            Category::Functions => &self.functions,
            Category::Realtime => &self.realtime,
        }
    }

    pub fn cost(&self, category: Category, provider: Provider) -> Option<Money> {
        self.breakdown(category).get(provider)
    }

    pub fn primary(&self, category: Category) -> Money {
        self.breakdown(category).primary()
    }

    /// Cheapest provider for a category. Ties go to the earlier provider.
    pub fn cheapest(&self, category: Category) -> (Provider, Money) {
        self.breakdown(category)
            .entries()
            .into_iter()
            .fold(None, |best: Option<(Provider, Money)>, (p, m)| match best {
                Some((_, bm)) if bm <= m => best,
                _ => Some((p, m)),
            })
            .unwrap_or((Provider::PRIMARY, Money::ZERO))
    }
}
