use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::types::{FormatClass, MetricDescriptor, XValue};

/// Universal "no data" sentinel rendered for missing samples in both
/// formatting modes.
pub const NO_DATA: &str = "—";

/// Output locale for numeric separators and date ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NumberLocale {
    #[default]
    EnUs,
    EsEs,
}

impl NumberLocale {
    fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }
}

/// Formatting-relevant slice of a metric descriptor, carried on every series
/// directive so tooltip formatting needs no registry round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ValueFormat {
    pub class: FormatClass,
    pub currency_decimals: u8,
    pub signed_delta: bool,
}

impl ValueFormat {
    #[must_use]
    pub fn of_class(class: FormatClass) -> Self {
        Self {
            class,
            currency_decimals: 0,
            signed_delta: false,
        }
    }

    #[must_use]
    pub fn from_descriptor(descriptor: &MetricDescriptor) -> Self {
        Self {
            class: descriptor.format_class,
            currency_decimals: descriptor.currency_decimals,
            signed_delta: descriptor.signed_delta,
        }
    }
}

/// Compact, low-precision formatting for axis tick labels.
#[must_use]
pub fn format_axis_tick(value: Option<f64>, class: FormatClass, locale: NumberLocale) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return NO_DATA.to_owned();
    };

    match class {
        FormatClass::Currency => with_sign(value, |abs| {
            format!("${}", abbreviate_magnitude(abs, locale))
        }),
        FormatClass::Percentage => format!("{}%", value.round() as i64),
        FormatClass::Multiplier => format!("{}x", localized_decimal(value, 1, locale)),
        FormatClass::Compact | FormatClass::Number => {
            with_sign(value, |abs| abbreviate_magnitude(abs, locale))
        }
    }
}

/// Higher-precision, locale-grouped formatting for tooltip rows.
#[must_use]
pub fn format_tooltip_value(value: Option<f64>, format: ValueFormat, locale: NumberLocale) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return NO_DATA.to_owned();
    };

    match format.class {
        FormatClass::Currency => with_sign(value, |abs| {
            format!(
                "${}",
                grouped_decimal(abs, usize::from(format.currency_decimals), locale)
            )
        }),
        FormatClass::Percentage => {
            let text = format!("{}%", localized_decimal(value, 1, locale));
            if format.signed_delta && value >= 0.0 {
                format!("+{text}")
            } else {
                text
            }
        }
        FormatClass::Multiplier => format!("{}x", localized_decimal(value, 2, locale)),
        FormatClass::Compact | FormatClass::Number => with_sign(value, |abs| {
            if abs >= 10_000.0 {
                abbreviate_magnitude(abs, locale)
            } else {
                grouped_decimal(abs, 0, locale)
            }
        }),
    }
}

/// X-axis tick label: hour:minute in single-day mode, month/day otherwise.
#[must_use]
pub fn format_x_axis_label(x: XValue, is_single_day: bool, locale: NumberLocale) -> String {
    match x {
        XValue::Timestamp(time) => {
            if is_single_day {
                format_hour_minute(time)
            } else {
                match locale {
                    NumberLocale::EnUs => format!("{}/{}", time.month(), time.day()),
                    NumberLocale::EsEs => format!("{}/{}", time.day(), time.month()),
                }
            }
        }
        XValue::Ordinal(ordinal) => format_ordinal(ordinal, locale),
    }
}

/// Tooltip x label: like the axis label but with the year in multi-day mode.
#[must_use]
pub fn format_x_tooltip_label(x: XValue, is_single_day: bool, locale: NumberLocale) -> String {
    match x {
        XValue::Timestamp(time) => {
            if is_single_day {
                format_hour_minute(time)
            } else {
                match locale {
                    NumberLocale::EnUs => {
                        format!("{}/{}/{}", time.month(), time.day(), time.year())
                    }
                    NumberLocale::EsEs => {
                        format!("{}/{}/{}", time.day(), time.month(), time.year())
                    }
                }
            }
        }
        XValue::Ordinal(ordinal) => format_ordinal(ordinal, locale),
    }
}

fn format_hour_minute(time: DateTime<Utc>) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

fn format_ordinal(ordinal: f64, locale: NumberLocale) -> String {
    if !ordinal.is_finite() {
        return NO_DATA.to_owned();
    }
    if ordinal.fract() == 0.0 {
        format!("{ordinal:.0}")
    } else {
        localized_decimal(ordinal, 2, locale)
    }
}

fn with_sign(value: f64, format_abs: impl FnOnce(f64) -> String) -> String {
    if value < 0.0 {
        format!("-{}", format_abs(-value))
    } else {
        format_abs(value)
    }
}

/// Magnitude abbreviation shared by the currency and count classes.
///
/// Values that would round up to `1000.0k` are promoted to the `M` tier so a
/// tick never reads as a four-digit kilocount.
fn abbreviate_magnitude(abs: f64, locale: NumberLocale) -> String {
    debug_assert!(abs >= 0.0);

    if abs >= 1_000_000.0 {
        return format!("{}M", localized_decimal(abs / 1_000_000.0, 1, locale));
    }
    if abs >= 1_000.0 {
        let kilo = abs / 1_000.0;
        if (kilo * 10.0).round() / 10.0 >= 1_000.0 {
            return format!("{}M", localized_decimal(abs / 1_000_000.0, 1, locale));
        }
        return format!("{}k", localized_decimal(kilo, 1, locale));
    }
    format!("{abs:.0}")
}

fn localized_decimal(value: f64, precision: usize, locale: NumberLocale) -> String {
    let text = format!("{value:.precision$}");
    match locale {
        NumberLocale::EnUs => text,
        NumberLocale::EsEs => text.replace('.', ","),
    }
}

/// Fixed-precision rendering of a non-negative value with thousands grouping.
fn grouped_decimal(abs: f64, precision: usize, locale: NumberLocale) -> String {
    debug_assert!(abs >= 0.0);

    let plain = format!("{abs:.precision$}");
    let (integer, fraction) = match plain.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    let digits = integer.len();
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            grouped.push(locale.group_separator());
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{grouped}{}{fraction}", locale.decimal_separator()),
        None => grouped,
    }
}
