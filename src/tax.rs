//! Tax bracket table
//!
//! A fixed mapping of bracket id to tax rate, supplied at startup and
//! consumed read-only. The catalog core only ever asks "does this bracket
//! exist" and "what is its rate"; nothing mutates the table after load.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// Tax bracket primary key
pub type TaxBracketId = u32;

/// Read-only lookup of bracket id to rate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxBracketTable {
    rates: BTreeMap<TaxBracketId, Decimal>,
}

impl TaxBracketTable {
    /// Build a table from (bracket id, rate) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (TaxBracketId, Decimal)>) -> Self {
        Self {
            rates: pairs.into_iter().collect(),
        }
    }

    /// Parse a table from a YAML mapping of bracket id to rate
    ///
    /// ```yaml
    /// 0: 0.00
    /// 1: 0.05
    /// 2: 0.12
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        let rates: BTreeMap<TaxBracketId, Decimal> = serde_yaml::from_str(source)?;
        Ok(Self { rates })
    }

    /// The default bracket set used when no config file is supplied
    pub fn standard() -> Self {
        Self::from_pairs([
            (0, Decimal::ZERO),
            (1, Decimal::new(5, 2)),
            (2, Decimal::new(12, 2)),
            (3, Decimal::new(18, 2)),
            (4, Decimal::new(28, 2)),
        ])
    }

    pub fn rate(&self, id: TaxBracketId) -> Option<Decimal> {
        self.rates.get(&id).copied()
    }

    pub fn contains(&self, id: TaxBracketId) -> bool {
        self.rates.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
