use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use reqwest::{
    ClientBuilder,
    header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT},
};

use crate::models::FeedError;

pub static USER_AGENT_STR: &str = "hackernews-clone-api (github.com/hackernews-clone)";

pub const TAKE_MIN: i32 = 1;
pub const TAKE_MAX: i32 = 50;
pub const TAKE_DEFAULT: i32 = 30;

static ALL_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Strict integer parse: only strings made entirely of digits are accepted,
/// so "12abc", "-3" and "1.5" all come back as `None`.
pub fn parse_int_safe(value: &str) -> Option<i32> {
    if !ALL_DIGITS.is_match(value) {
        return None;
    }
    value.parse().ok()
}

pub fn apply_take_constraints(value: i32) -> Result<i32, FeedError> {
    if value < TAKE_MIN || value > TAKE_MAX {
        return Err(FeedError::TakeOutOfRange {
            value,
            min: TAKE_MIN,
            max: TAKE_MAX,
        });
    }
    Ok(value)
}

pub fn get_base_http_client(headers: Option<Vec<(HeaderName, HeaderValue)>>) -> reqwest::Client {
    let mut req_headers = HeaderMap::new();
    req_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STR));
    for (header, value) in headers.unwrap_or_default().into_iter() {
        req_headers.insert(header, value);
    }
    ClientBuilder::new()
        .default_headers(req_headers)
        .timeout(Duration::from_secs(15))
        .build()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_safe_accepts_only_digit_strings() {
        assert_eq!(parse_int_safe("0"), Some(0));
        assert_eq!(parse_int_safe("42"), Some(42));
        assert_eq!(parse_int_safe("007"), Some(7));
        assert_eq!(parse_int_safe(""), None);
        assert_eq!(parse_int_safe("-3"), None);
        assert_eq!(parse_int_safe("+3"), None);
        assert_eq!(parse_int_safe("1.5"), None);
        assert_eq!(parse_int_safe("12abc"), None);
        assert_eq!(parse_int_safe("abc"), None);
    }

    #[test]
    fn parse_int_safe_rejects_values_past_i32() {
        assert_eq!(parse_int_safe("99999999999999999999"), None);
    }

    #[test]
    fn take_constraints_allow_the_full_inclusive_range() {
        assert_eq!(apply_take_constraints(TAKE_MIN).unwrap(), 1);
        assert_eq!(apply_take_constraints(TAKE_DEFAULT).unwrap(), 30);
        assert_eq!(apply_take_constraints(TAKE_MAX).unwrap(), 50);
    }

    #[test]
    fn take_constraints_reject_out_of_range_values() {
        for value in [0, 51, -5, 1000] {
            let err = apply_take_constraints(value).unwrap_err();
            let message = err.to_string();
            assert!(message.contains(&format!("'{value}'")));
            assert!(message.contains("'1'"));
            assert!(message.contains("'50'"));
        }
    }
}
