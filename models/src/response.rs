use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

/// The validation error codes a downstream approval check can produce.
///
/// The serialized names are part of the wire contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorCode {
    #[serde(rename = "maxOpportunityPassed")]
    MaxOpportunityPassed,

    #[serde(rename = "notEnoughDaysPassed")]
    NotEnoughDaysPassed,

    #[serde(rename = "simulationEnvironmentRequired")]
    SimulationEnvironmentRequired,

    #[serde(rename = "sessionTypeMismatch")]
    SessionTypeMismatch,

    #[serde(rename = "examAlreadyOpen")]
    ExamAlreadyOpen,
}

/// One named validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: ValidationErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result wrapper holding either a success payload or a list of
/// validation errors, never both.
///
/// The private fields, the two constructors and the hand-written
/// Deserialize impl are what enforce the exactly-one invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<ValidationError>>,
}

impl<T> Response<T> {
    /// Wrap a success payload.
    pub fn from_data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Wrap a set of validation errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            data: None,
            errors: Some(errors),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> Option<&[ValidationError]> {
        self.errors.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Response<T> {
    /// Deserialize through a raw mirror so wire payloads cannot smuggle
    /// in a state the constructors would never produce.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawResponse<T> {
            data: Option<T>,
            errors: Option<Vec<ValidationError>>,
        }

        let raw = RawResponse::deserialize(deserializer)?;

        match (raw.data, raw.errors) {
            (Some(_), Some(_)) => Err(D::Error::custom(
                "response cannot carry both data and errors",
            )),
            (None, None) => Err(D::Error::custom(
                "response must carry either data or errors",
            )),
            (data, errors) => Ok(Self { data, errors }),
        }
    }
}
