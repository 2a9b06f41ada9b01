use crate::Outcome;

/// Placeholder for the formatted distance in [`Messages::distance`].
pub const DISTANCE_PLACEHOLDER: &str = "{distance}";

const DEFAULT_DISTANCE: &str = "一直線に突っ切る: {distance} km";
const DEFAULT_NO_DATA: &str = "距離情報が取得できませんでした。";
const DEFAULT_ERROR_PREFIX: &str = "エラー: ";

/// Texts shown in the result element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub distance: String,
    pub no_data: String,
    pub error_prefix: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE.to_string(),
            no_data: DEFAULT_NO_DATA.to_string(),
            error_prefix: DEFAULT_ERROR_PREFIX.to_string(),
        }
    }
}

impl Messages {
    #[must_use]
    pub fn render(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Distance(km) => self
                .distance
                .replace(DISTANCE_PLACEHOLDER, &format_km(*km)),
            Outcome::NoData => self.no_data.clone(),
            Outcome::Rejected(msg) | Outcome::Failed(msg) => {
                format!("{}{msg}", self.error_prefix)
            }
        }
    }
}

/// Two fixed decimals, exact halves are rounded away from zero.
///
/// The formatter rounds exact halves to even. A binary float lies exactly
/// halfway between two hundredths only if it is an odd multiple of 1/8.
#[allow(clippy::float_cmp)]
fn format_km(km: f64) -> String {
    let eighths = km * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let nudged = km + km.signum() * 0.0025;
        return format!("{nudged:.2}");
    }
    format!("{km:.2}")
}
