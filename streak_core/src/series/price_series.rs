use crate::common::streak_exception::{ErrCode, StreakException};

/// Validate a closing-price series before analysis
pub fn check_closes(closes: &[f64]) -> Result<(), StreakException> {
    if closes.is_empty() {
        return Err(StreakException::new(
            "empty closing-price series".to_string(),
            ErrCode::NoData,
        ));
    }

    for (i, &close) in closes.iter().enumerate() {
        if !close.is_finite() {
            return Err(StreakException::new(
                format!("close[{}]={} is not finite", i, close),
                ErrCode::PriceNotFinite,
            ));
        }
        if close <= 0.0 {
            return Err(StreakException::new(
                format!("close[{}]={} is not a positive price", i, close),
                ErrCode::PriceBelowZero,
            ));
        }
    }

    Ok(())
}

/// Keep only the most recent `lookback` closes, 0 meaning no window
pub fn tail_window(closes: &[f64], lookback: usize) -> &[f64] {
    if lookback == 0 || lookback >= closes.len() {
        closes
    } else {
        &closes[closes.len() - lookback..]
    }
}
