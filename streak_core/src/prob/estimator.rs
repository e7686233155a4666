use crate::common::func_util::safe_percent;

/// Empirical probability, in percent, that a run having reached `length`
/// extends past it.
///
/// A historical run of length N reached every length up to N and went past
/// every length below N, so it must count toward every intermediate pair:
/// opportunities are runs with length >= `length`, extensions are runs with
/// length > `length`. Bucketing by final length only would undercount both.
/// Zero opportunities yields 0.0.
pub fn extension_probability(runs: &[usize], length: usize) -> f64 {
    let opportunities = runs.iter().filter(|&&run| run >= length).count();
    let extended = runs.iter().filter(|&&run| run > length).count();
    safe_percent(extended, opportunities)
}
