use serde::{Deserialize, Serialize};

/// Display icon identifier for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Sun,
    Cloud,
    CloudRain,
    Snowflake,
    CloudShowersHeavy,
    Bolt,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Sun => "sun",
            IconId::Cloud => "cloud",
            IconId::CloudRain => "cloud-rain",
            IconId::Snowflake => "snowflake",
            IconId::CloudShowersHeavy => "cloud-showers-heavy",
            IconId::Bolt => "bolt",
        }
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon and description for one WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub icon: IconId,
    pub description: &'static str,
}

/// Map a WMO weather code to an icon and description.
///
/// Buckets are inclusive upper bounds checked in ascending order, first match
/// wins. Every `i32` maps to some bucket (negative codes land in the first
/// one), so the function is total and never panics.
///
/// See <https://open-meteo.com/en/docs> for the WMO interpretation codes.
pub fn classify(code: i32) -> Classified {
    if code <= 3 {
        Classified { icon: IconId::Sun, description: "Clear to partly cloudy" }
    } else if code <= 48 {
        Classified { icon: IconId::Cloud, description: "Cloudy" }
    } else if code <= 67 {
        Classified { icon: IconId::CloudRain, description: "Rainy" }
    } else if code <= 77 {
        Classified { icon: IconId::Snowflake, description: "Snowy" }
    } else if code <= 82 {
        Classified { icon: IconId::CloudShowersHeavy, description: "Rain showers" }
    } else if code <= 86 {
        Classified { icon: IconId::Snowflake, description: "Snow showers" }
    } else if code <= 99 {
        Classified { icon: IconId::Bolt, description: "Thunderstorm" }
    } else {
        Classified { icon: IconId::Cloud, description: "Unknown" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_bucket_upper_bound() {
        assert_eq!(classify(3).icon, IconId::Sun);
        assert_eq!(classify(3).description, "Clear to partly cloudy");
        assert_eq!(classify(4).icon, IconId::Cloud);
        assert_eq!(classify(4).description, "Cloudy");
    }

    #[test]
    fn cloudy_bucket_upper_bound() {
        assert_eq!(classify(48).description, "Cloudy");
        assert_eq!(classify(49).description, "Rainy");
        assert_eq!(classify(49).icon, IconId::CloudRain);
    }

    #[test]
    fn rainy_bucket_upper_bound() {
        assert_eq!(classify(67).description, "Rainy");
        assert_eq!(classify(68).description, "Snowy");
        assert_eq!(classify(68).icon, IconId::Snowflake);
    }

    #[test]
    fn snowy_bucket_upper_bound() {
        assert_eq!(classify(77).description, "Snowy");
        assert_eq!(classify(78).description, "Rain showers");
        assert_eq!(classify(78).icon, IconId::CloudShowersHeavy);
    }

    #[test]
    fn shower_buckets_upper_bounds() {
        assert_eq!(classify(82).description, "Rain showers");
        assert_eq!(classify(83).description, "Snow showers");
        assert_eq!(classify(83).icon, IconId::Snowflake);
        assert_eq!(classify(86).description, "Snow showers");
        assert_eq!(classify(87).description, "Thunderstorm");
        assert_eq!(classify(87).icon, IconId::Bolt);
    }

    #[test]
    fn thunderstorm_bucket_upper_bound() {
        assert_eq!(classify(99).description, "Thunderstorm");
        assert_eq!(classify(100).description, "Unknown");
        assert_eq!(classify(100).icon, IconId::Cloud);
    }

    #[test]
    fn negative_codes_fall_into_first_bucket() {
        assert_eq!(classify(-1).icon, IconId::Sun);
        assert_eq!(classify(i32::MIN).description, "Clear to partly cloudy");
    }

    #[test]
    fn total_over_a_wide_range() {
        let known = [
            (IconId::Sun, "Clear to partly cloudy"),
            (IconId::Cloud, "Cloudy"),
            (IconId::CloudRain, "Rainy"),
            (IconId::Snowflake, "Snowy"),
            (IconId::CloudShowersHeavy, "Rain showers"),
            (IconId::Snowflake, "Snow showers"),
            (IconId::Bolt, "Thunderstorm"),
            (IconId::Cloud, "Unknown"),
        ];

        for code in -100..=200 {
            let got = classify(code);
            assert!(
                known.contains(&(got.icon, got.description)),
                "code {code} produced an unexpected pair: {got:?}"
            );
        }
    }

    #[test]
    fn icon_id_serializes_kebab_case() {
        let json = serde_json::to_string(&IconId::CloudShowersHeavy).expect("serialize");
        assert_eq!(json, "\"cloud-showers-heavy\"");
        assert_eq!(IconId::CloudShowersHeavy.to_string(), "cloud-showers-heavy");
    }
}
