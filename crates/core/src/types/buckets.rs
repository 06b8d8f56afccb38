//! Fixed demographic and channel buckets.
//!
//! The dashboard renders demographics and traffic sources against fixed
//! bucket sets; raw API labels are matched into them here. Matching is by
//! substring so that minor label variations from the API ("Organic Search",
//! "Organic Social") still land in a bucket, and anything that matches no
//! bucket is dropped rather than defaulted into a catch-all.

use serde::Serialize;

/// Age bracket buckets shown on the demographics card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AgeBracket {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55+")]
    Over55,
}

impl AgeBracket {
    /// All brackets in display order.
    pub const ALL: [Self; 5] = [
        Self::From18To24,
        Self::From25To34,
        Self::From35To44,
        Self::From45To54,
        Self::Over55,
    ];

    /// The bucket label as rendered (and as matched against API brackets).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::Over55 => "55+",
        }
    }

    /// Match a raw `userAgeBracket` dimension value into a bucket.
    ///
    /// Substring match against the fixed labels; `(not set)` and brackets
    /// outside the fixed set match nothing.
    #[must_use]
    pub fn from_api_bracket(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bracket| raw.contains(bracket.label()))
    }
}

/// Gender buckets shown on the demographics card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All buckets in display order.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// The bucket label as rendered.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Match a raw `userGender` dimension value into a bucket.
    ///
    /// Case-insensitive substring match; "female" is tested before "male"
    /// because the former contains the latter. Everything else (including
    /// `(not set)`) is `Other`.
    #[must_use]
    pub fn from_api_gender(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("female") {
            Self::Female
        } else if lower.contains("male") {
            Self::Male
        } else {
            Self::Other
        }
    }
}

/// Traffic channel buckets.
///
/// Maps the API's session default channel grouping into the five channels
/// the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Direct,
    Organic,
    Social,
    Paid,
    Referral,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Self; 5] = [
        Self::Direct,
        Self::Organic,
        Self::Social,
        Self::Paid,
        Self::Referral,
    ];

    /// The grouping label fragment matched against API channel groupings.
    #[must_use]
    pub const fn grouping_label(self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Organic => "Organic",
            Self::Social => "Social",
            Self::Paid => "Paid",
            Self::Referral => "Referral",
        }
    }

    /// The lowercase key used in serialized summaries.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Organic => "organic",
            Self::Social => "social",
            Self::Paid => "paid",
            Self::Referral => "referral",
        }
    }

    /// Match a raw `sessionDefaultChannelGrouping` value into a channel.
    ///
    /// Substring match in display order, so "Organic Social" counts as
    /// organic. Groupings matching no channel ("Email", "Unassigned", ...)
    /// return `None` and are dropped by aggregation.
    #[must_use]
    pub fn from_grouping(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|channel| raw.contains(channel.grouping_label()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bracket_exact_labels() {
        assert_eq!(
            AgeBracket::from_api_bracket("25-34"),
            Some(AgeBracket::From25To34)
        );
        assert_eq!(AgeBracket::from_api_bracket("55+"), Some(AgeBracket::Over55));
    }

    #[test]
    fn test_age_bracket_not_set_matches_nothing() {
        assert_eq!(AgeBracket::from_api_bracket("(not set)"), None);
    }

    #[test]
    fn test_age_bracket_outside_fixed_set_matches_nothing() {
        // GA4 also reports 55-64 and 65+, which are not in the fixed set.
        assert_eq!(AgeBracket::from_api_bracket("65+"), None);
        assert_eq!(AgeBracket::from_api_bracket("55-64"), None);
    }

    #[test]
    fn test_gender_female_before_male() {
        assert_eq!(Gender::from_api_gender("female"), Gender::Female);
        assert_eq!(Gender::from_api_gender("Female"), Gender::Female);
        assert_eq!(Gender::from_api_gender("male"), Gender::Male);
        assert_eq!(Gender::from_api_gender("MALE"), Gender::Male);
    }

    #[test]
    fn test_gender_unknown_is_other() {
        assert_eq!(Gender::from_api_gender("(not set)"), Gender::Other);
        assert_eq!(Gender::from_api_gender("unknown"), Gender::Other);
    }

    #[test]
    fn test_channel_groupings() {
        assert_eq!(Channel::from_grouping("Direct"), Some(Channel::Direct));
        assert_eq!(Channel::from_grouping("Organic Search"), Some(Channel::Organic));
        assert_eq!(Channel::from_grouping("Paid Search"), Some(Channel::Paid));
        assert_eq!(Channel::from_grouping("Referral"), Some(Channel::Referral));
    }

    #[test]
    fn test_organic_social_counts_as_organic() {
        // Display-order matching: "Organic" is tested before "Social".
        assert_eq!(Channel::from_grouping("Organic Social"), Some(Channel::Organic));
    }

    #[test]
    fn test_unknown_grouping_is_dropped() {
        assert_eq!(Channel::from_grouping("Email"), None);
        assert_eq!(Channel::from_grouping("Unassigned"), None);
    }

    #[test]
    fn test_bucket_serialization_labels() {
        assert_eq!(
            serde_json::to_value(AgeBracket::From18To24).unwrap(),
            serde_json::json!("18-24")
        );
        assert_eq!(
            serde_json::to_value(Gender::Female).unwrap(),
            serde_json::json!("Female")
        );
        assert_eq!(
            serde_json::to_value(Channel::Paid).unwrap(),
            serde_json::json!("paid")
        );
    }
}
