//! Status-code families.

/// Classification of an HTTP status code by numeric range.
///
/// The redirect and validation logic look at nothing but the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFamily {
    /// 100–199
    Informational,
    /// 200–299
    Success,
    /// 300–399
    Redirect,
    /// 400–499
    ClientError,
    /// 500–599
    ServerError,
    /// Anything outside 100–599
    Unknown,
}

impl StatusFamily {
    /// Classify a numeric status code.
    ///
    /// ```
    /// use undertow::http::StatusFamily;
    ///
    /// assert_eq!(StatusFamily::of(204), StatusFamily::Success);
    /// assert_eq!(StatusFamily::of(301), StatusFamily::Redirect);
    /// assert_eq!(StatusFamily::of(404), StatusFamily::ClientError);
    /// ```
    pub fn of(code: u16) -> Self {
        match code {
            100..=199 => StatusFamily::Informational,
            200..=299 => StatusFamily::Success,
            300..=399 => StatusFamily::Redirect,
            400..=499 => StatusFamily::ClientError,
            500..=599 => StatusFamily::ServerError,
            _ => StatusFamily::Unknown,
        }
    }
}

impl From<reqwest::StatusCode> for StatusFamily {
    fn from(status: reqwest::StatusCode) -> Self {
        StatusFamily::of(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_range_edges() {
        assert_eq!(StatusFamily::of(199), StatusFamily::Informational);
        assert_eq!(StatusFamily::of(200), StatusFamily::Success);
        assert_eq!(StatusFamily::of(299), StatusFamily::Success);
        assert_eq!(StatusFamily::of(300), StatusFamily::Redirect);
        assert_eq!(StatusFamily::of(399), StatusFamily::Redirect);
        assert_eq!(StatusFamily::of(400), StatusFamily::ClientError);
        assert_eq!(StatusFamily::of(599), StatusFamily::ServerError);
        assert_eq!(StatusFamily::of(600), StatusFamily::Unknown);
        assert_eq!(StatusFamily::of(99), StatusFamily::Unknown);
    }

    proptest! {
        #[test]
        fn prop_success_family_is_exactly_2xx(code in 0u16..1000) {
            let success = StatusFamily::of(code) == StatusFamily::Success;
            prop_assert_eq!(success, (200..300).contains(&code));
        }

        #[test]
        fn prop_redirect_family_is_exactly_3xx(code in 0u16..1000) {
            let redirect = StatusFamily::of(code) == StatusFamily::Redirect;
            prop_assert_eq!(redirect, (300..400).contains(&code));
        }
    }
}
