use std::fmt;
use strum_macros::{Display, EnumString};

/// Error codes for the streak analysis system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Analysis errors (0-99)
    #[strum(serialize = "_ANALYSIS_ERR_BEGIN")]
    AnalysisErrBegin = 0,
    #[strum(serialize = "COMMON_ERROR")]
    CommonError = 1,
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 2,
    #[strum(serialize = "PROJECTION_ERR")]
    ProjectionErr = 3,
    #[strum(serialize = "_ANALYSIS_ERR_END")]
    AnalysisErrEnd = 99,

    // Price data errors (100-199)
    #[strum(serialize = "_DATA_ERR_BEGIN")]
    DataErrBegin = 100,
    #[strum(serialize = "PRICE_BELOW_ZERO")]
    PriceBelowZero = 101,
    #[strum(serialize = "PRICE_NOT_FINITE")]
    PriceNotFinite = 102,
    #[strum(serialize = "NO_DATA")]
    NoData = 103,
    #[strum(serialize = "INSUFFICIENT_DATA")]
    InsufficientData = 104,
    #[strum(serialize = "_DATA_ERR_END")]
    DataErrEnd = 199,
}

impl ErrCode {
    pub fn is_analysis_err(&self) -> bool {
        let code = *self as i32;
        code > Self::AnalysisErrBegin as i32 && code < Self::AnalysisErrEnd as i32
    }

    pub fn is_data_err(&self) -> bool {
        let code = *self as i32;
        code > Self::DataErrBegin as i32 && code < Self::DataErrEnd as i32
    }
}

#[derive(Debug)]
pub struct StreakException {
    pub errcode: ErrCode,
    pub msg: String,
}

impl StreakException {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn is_analysis_err(&self) -> bool {
        self.errcode.is_analysis_err()
    }

    pub fn is_data_err(&self) -> bool {
        self.errcode.is_data_err()
    }
}

impl std::error::Error for StreakException {}

impl fmt::Display for StreakException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.errcode, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_code_ranges() {
        assert!(ErrCode::ParaError.is_analysis_err());
        assert!(!ErrCode::ParaError.is_data_err());
        assert!(ErrCode::InsufficientData.is_data_err());
        assert!(!ErrCode::InsufficientData.is_analysis_err());
    }

    #[test]
    fn test_display() {
        let e = StreakException::new("3 closes, need 10", ErrCode::InsufficientData);
        assert_eq!(e.to_string(), "INSUFFICIENT_DATA: 3 closes, need 10");
    }
}
