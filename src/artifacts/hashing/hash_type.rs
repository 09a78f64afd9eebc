use std::fmt::Display;
use std::str::FromStr;

/// How a normalised line is turned into its fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashType {
    /// Leading four bytes of the SHA-1 digest
    #[default]
    Content,
    Crc32,
    /// Every line gets a fresh value, so no two lines ever match
    Unique,
}

const HASH_TYPE_NAMES: phf::Map<&'static str, HashType> = phf::phf_map! {
    "content" => HashType::Content,
    "crc32" => HashType::Crc32,
    "crc-32" => HashType::Crc32,
    "unique" => HashType::Unique,
};

impl HashType {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        HASH_TYPE_NAMES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown hash type '{}', expected one of: content, crc32, unique",
                    name
                )
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashType::Content => "content",
            HashType::Crc32 => "crc32",
            HashType::Unique => "unique",
        }
    }
}

impl FromStr for HashType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl Display for HashType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("content", HashType::Content)]
    #[case("CRC32", HashType::Crc32)]
    #[case("crc-32", HashType::Crc32)]
    #[case(" Unique ", HashType::Unique)]
    fn parses_known_names(#[case] name: &str, #[case] expected: HashType) {
        assert_eq!(HashType::try_parse(name).unwrap(), expected);
    }

    #[rstest]
    #[case("float")]
    #[case("")]
    #[case("md5")]
    fn rejects_unknown_names(#[case] name: &str) {
        let error = name.parse::<HashType>().unwrap_err();
        assert!(error.to_string().contains("unknown hash type"));
    }

    #[test]
    fn names_round_trip_through_display() {
        for hash_type in [HashType::Content, HashType::Crc32, HashType::Unique] {
            assert_eq!(hash_type.to_string().parse::<HashType>().unwrap(), hash_type);
        }
    }
}
