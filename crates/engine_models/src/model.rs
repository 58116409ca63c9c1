//! Static-dispatch model selection.
//!
//! The batch engine is generic over [`PricingModel`], so callers that know the
//! model at compile time pass it directly. Callers that pick the model at
//! runtime (config files, CLI flags) go through [`ModelKind`] and [`Model`],
//! which keep dispatch static instead of boxing a trait object.

use std::fmt;
use std::str::FromStr;

use engine_core::market_data::MarketDataRow;
use engine_core::traits::PricingModel;
use engine_core::types::PricingError;
use thiserror::Error;

use crate::black76::Black76;

/// Identifies a pricing model by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ModelKind {
    /// Black-76 for European options on futures.
    Black76,
}

impl ModelKind {
    /// Canonical display name of the model.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black76 => "Black76",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a model name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pricing model: {0}")]
pub struct UnknownModelError(String);

impl FromStr for ModelKind {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black76" | "black-76" | "b76" => Ok(Self::Black76),
            _ => Err(UnknownModelError(s.to_string())),
        }
    }
}

/// A concrete pricing model selected at runtime.
///
/// Wraps each model variant in an enum so the batch engine sees one sized
/// type with static dispatch.
///
/// # Examples
/// ```
/// use engine_core::traits::PricingModel;
/// use engine_models::{Model, ModelKind};
///
/// let model = Model::new(ModelKind::Black76);
/// assert_eq!(model.model_name(), "Black76");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Model {
    /// Black-76 with its configured conventions.
    Black76(Black76),
}

impl Model {
    /// Builds the named model with its default configuration.
    pub fn new(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Black76 => Self::Black76(Black76::default()),
        }
    }

    /// The kind of this model.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Black76(_) => ModelKind::Black76,
        }
    }
}

impl From<Black76> for Model {
    fn from(model: Black76) -> Self {
        Self::Black76(model)
    }
}

impl PricingModel for Model {
    fn model_name(&self) -> &'static str {
        match self {
            Self::Black76(m) => m.model_name(),
        }
    }

    fn price_one(&self, row: &MarketDataRow) -> Result<f64, PricingError> {
        match self {
            Self::Black76(m) => m.price_one(row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::market_data::OptionType;

    #[test]
    fn test_model_kind_parsing() {
        assert_eq!("Black76".parse::<ModelKind>().unwrap(), ModelKind::Black76);
        assert_eq!("black76".parse::<ModelKind>().unwrap(), ModelKind::Black76);
        assert_eq!("b76".parse::<ModelKind>().unwrap(), ModelKind::Black76);
        assert!("Bachelier".parse::<ModelKind>().is_err());
    }

    #[test]
    fn test_model_kind_display_roundtrip() {
        let kind = ModelKind::Black76;
        assert_eq!(kind.to_string().parse::<ModelKind>().unwrap(), kind);
    }

    #[test]
    fn test_model_dispatches_to_wrapped_model() {
        let row = MarketDataRow {
            date_as_of: 20220101,
            future_expiry_date: 20230130,
            option_type: OptionType::Call,
            strike_price: 50.0,
            current_price: 40.0,
            implied_vol: 0.15,
        };
        let wrapped = Model::new(ModelKind::Black76);
        let direct = Black76::default();
        assert_eq!(wrapped.model_name(), "Black76");
        assert_eq!(wrapped.kind(), ModelKind::Black76);
        assert_eq!(
            wrapped.price_one(&row).unwrap().to_bits(),
            direct.price_one(&row).unwrap().to_bits()
        );
    }

    #[test]
    fn test_model_from_configured_black76() {
        let configured = Black76::new(0.03).with_settlement_offset_months(1);
        let model = Model::from(configured);
        assert!(matches!(model, Model::Black76(m) if m.rate() == 0.03));
    }
}
