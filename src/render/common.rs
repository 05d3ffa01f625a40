//! Shared rendering helpers: pt-BR currency and date formatting and WinAnsi
//! text encoding for the built-in PDF fonts.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::proposal::models::MONTHS;

lazy_static! {
    static ref CURRENCY_MARKERS: Regex = Regex::new(r"[R$\s]").unwrap();
}

/// Format a table-cell value as `R$ 1.234,56`.
///
/// Strips currency markers, then parses the leading numeric prefix (pt-BR
/// separators when `.` or `,` is present, plain otherwise) and reformats
/// with two decimal places. Values with no numeric interpretation are
/// emitted unchanged.
pub fn format_currency(value: &str) -> String {
    let clean = CURRENCY_MARKERS.replace_all(value, "");

    if clean.contains(',') || clean.contains('.') {
        let normalized = clean.replace('.', "").replace(',', ".");
        if let Some(number) = parse_leading_number(&normalized) {
            return format!("R$ {}", group_pt_br(number));
        }
    }

    if let Some(number) = parse_leading_number(&clean) {
        return format!("R$ {}", group_pt_br(number));
    }

    value.to_string()
}

/// Parse the leading numeric prefix of a string, the way the form's users
/// type values ("1200.00/mensal" parses as 1200.0).
fn parse_leading_number(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (idx, ch) in text.char_indices() {
        match ch {
            '-' | '+' if idx == 0 => end = idx + 1,
            '0'..='9' => {
                seen_digit = true;
                end = idx + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

/// Group a non-negative amount with pt-BR separators and two decimals.
fn group_pt_br(number: f64) -> String {
    let negative = number < 0.0;
    let fixed = format!("{:.2}", number.abs());
    let (int_part, dec_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    if negative {
        format!("-{},{}", grouped, dec_part)
    } else {
        format!("{},{}", grouped, dec_part)
    }
}

/// Human-readable validity date: the last calendar day of the selected
/// month in the given year, e.g. `"30 de Abril de 2026"`.
///
/// Unknown month labels pass through unchanged.
pub fn validity_date_label(month_name: &str, year: i32) -> String {
    let Some(index) = MONTHS.iter().position(|month| *month == month_name) else {
        return month_name.to_string();
    };
    let month = index as u32 + 1;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match NaiveDate::from_ymd_opt(next_year, next_month, 1).and_then(|first| first.pred_opt()) {
        Some(last_day) => format!("{} de {} de {}", last_day.day(), month_name, year),
        None => month_name.to_string(),
    }
}

/// Encode text for the WinAnsi-encoded built-in fonts.
///
/// ASCII and Latin-1 map straight through, which covers the Portuguese
/// template text; anything outside that repertoire becomes `?` so encoding
/// never fails on exotic input.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            match code {
                0x20..=0x7E | 0xA0..=0xFF => code as u8,
                _ => b'?',
            }
        })
        .collect()
}
