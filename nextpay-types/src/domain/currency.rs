//! Currencies accepted by the gateway.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the gateway settles in.
///
/// `IRT` is toman, `IRR` is rial (1 toman = 10 rial). The gateway accepts
/// nothing else, so the enum is the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    IRT,
    IRR,
}

impl Currency {
    /// Returns the wire form of the currency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::IRT => "IRT",
            Currency::IRR => "IRR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IRT" => Ok(Currency::IRT),
            "IRR" => Ok(Currency::IRR),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse() {
        assert_eq!("IRT".parse::<Currency>().unwrap(), Currency::IRT);
        assert_eq!("irr".parse::<Currency>().unwrap(), Currency::IRR);
        assert!("USD".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::IRT.to_string(), "IRT");
        assert_eq!(Currency::IRR.to_string(), "IRR");
    }
}
