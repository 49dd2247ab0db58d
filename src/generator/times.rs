//! Time axis construction
//!
//! The stock fixture ships a fixed, hand-captured list of 21 timestamps and
//! uses it whatever the column count is. A grid with 40 columns therefore has
//! a time axis shorter than its data; consumers are expected to cope.

use crate::Result;
use chrono::{DateTime, Duration, FixedOffset, Local, SecondsFormat};

/// The literal time axis shipped with the stock fixture
pub const FIXED_TIMES: [&str; 21] = [
    "2019-10-25T22:45:47.9344274+08:00",
    "2019-10-25T22:46:48.9337329+08:00",
    "2019-10-25T22:47:49.9240867+08:00",
    "2019-10-25T22:48:50.9353787+08:00",
    "2019-10-25T22:49:51.9307719+08:00",
    "2019-10-25T22:50:52.9402905+08:00",
    "2019-10-25T22:51:53.9631405+08:00",
    "2019-10-25T22:52:54.9436482+08:00",
    "2019-10-25T22:53:55.9300509+08:00",
    "2019-10-25T22:54:56.9323304+08:00",
    "2019-10-25T22:55:57.9356675+08:00",
    "2019-10-25T22:56:58.9269951+08:00",
    "2019-10-25T22:57:59.923645+08:00",
    "2019-10-25T22:58:00.9249693+08:00",
    "2019-10-25T22:59:01.9224322+08:00",
    "2019-10-25T23:00:57.9356675+08:00",
    "2019-10-25T23:01:58.9269951+08:00",
    "2019-10-25T23:02:59.923645+08:00",
    "2019-10-25T23:03:00.9249693+08:00",
    "2019-10-25T23:04:01.9224322+08:00",
    "2019-10-25T23:05:01.9224322+08:00",
];

/// Spacing between generated timestamps
pub const GENERATED_STEP_SECS: i64 = 60;

/// Largest column count the generated axis accepts
pub const MAX_GENERATED_COLS: usize = 1_000_000;

/// Fixed time axis
///
/// `_cols` is accepted for symmetry with [`generated_times`] and ignored.
pub fn fixed_times(_cols: usize) -> Vec<String> {
    FIXED_TIMES.iter().map(|t| t.to_string()).collect()
}

/// Generated time axis: `cols + 1` boundaries, one minute apart, ending at `end`
///
/// Fails when the earliest boundary falls outside chrono's representable range.
pub fn generated_times(cols: usize, end: DateTime<FixedOffset>) -> Result<Vec<String>> {
    (0..=cols)
        .rev()
        .map(|back| {
            let at = i64::try_from(back)
                .ok()
                .and_then(|back| back.checked_mul(GENERATED_STEP_SECS))
                .and_then(Duration::try_seconds)
                .and_then(|offset| end.checked_sub_signed(offset))
                .ok_or_else(|| anyhow::anyhow!("time axis of {} columns ending at {} is out of range", cols, end))?;
            Ok(at.to_rfc3339_opts(SecondsFormat::Secs, false))
        })
        .collect()
}

/// Current local time with its UTC offset
pub fn now() -> DateTime<FixedOffset> {
    Local::now().into()
}
