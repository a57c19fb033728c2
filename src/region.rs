//! Regions and their hosts.
//!
//! Every region other than China shares the global `oauth.battle.net` OAuth namespace and is
//! served from `{region}.api.blizzard.com`. China is operated separately under `.com.cn`
//! domains.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// An API region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// North America.
    Us,
    /// Europe.
    Eu,
    /// Korea.
    Kr,
    /// Taiwan.
    Tw,
    /// China (uses `.com.cn` domains).
    Cn,
}

impl Region {
    /// All supported regions.
    pub const ALL: [Region; 5] = [
        Region::Us,
        Region::Eu,
        Region::Kr,
        Region::Tw,
        Region::Cn,
    ];

    /// The lowercase region code, e.g. `"us"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Tw => "tw",
            Self::Cn => "cn",
        }
    }

    /// The hosts for this region.
    pub fn hosts(&self) -> Hosts {
        HostResolver::resolve(*self)
    }

    /// The locale used when a request does not name one.
    pub fn default_locale(&self) -> &'static str {
        self.hosts().default_locale
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Self::Us),
            "eu" => Ok(Self::Eu),
            "kr" => Ok(Self::Kr),
            "tw" => Ok(Self::Tw),
            "cn" => Ok(Self::Cn),
            _ => Err(ConfigError::UnknownRegion(s.into())),
        }
    }
}

impl TryFrom<&str> for Region {
    type Error = ConfigError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// The hosts serving a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hosts {
    /// Host serving game data, community and profile resources.
    pub api_host: &'static str,
    /// Host serving the OAuth token and user info endpoints.
    pub oauth_host: &'static str,
    /// Locale used when a request does not name one.
    pub default_locale: &'static str,
}

/// Maps regions to their [`Hosts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HostResolver;

impl HostResolver {
    /// Resolves the hosts for `region`.
    pub fn resolve(region: Region) -> Hosts {
        match region {
            Region::Us => Hosts {
                api_host: "us.api.blizzard.com",
                oauth_host: "oauth.battle.net",
                default_locale: "en_US",
            },
            Region::Eu => Hosts {
                api_host: "eu.api.blizzard.com",
                oauth_host: "oauth.battle.net",
                default_locale: "en_GB",
            },
            Region::Kr => Hosts {
                api_host: "kr.api.blizzard.com",
                oauth_host: "oauth.battle.net",
                default_locale: "ko_KR",
            },
            Region::Tw => Hosts {
                api_host: "tw.api.blizzard.com",
                oauth_host: "oauth.battle.net",
                default_locale: "zh_TW",
            },
            Region::Cn => Hosts {
                api_host: "gateway.battlenet.com.cn",
                oauth_host: "www.battlenet.com.cn",
                default_locale: "zh_CN",
            },
        }
    }

    /// Resolves the hosts for a region code such as `"eu"`.
    pub fn resolve_code(code: &str) -> Result<Hosts, ConfigError> {
        let region = code.parse::<Region>()?;

        Ok(Self::resolve(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_resolves_to_hosts() {
        for region in Region::ALL {
            let hosts = HostResolver::resolve_code(region.code()).unwrap();

            assert!(!hosts.api_host.is_empty());
            assert!(!hosts.oauth_host.is_empty());
            assert!(!hosts.default_locale.is_empty());
        }
    }

    #[test]
    fn unknown_region_is_config_error() {
        let error = HostResolver::resolve_code("mars").unwrap_err();

        assert!(matches!(error, ConfigError::UnknownRegion(code) if code == "mars"));
    }

    #[test]
    fn china_uses_its_own_namespace() {
        let hosts = Region::Cn.hosts();

        assert_eq!(hosts.api_host, "gateway.battlenet.com.cn");
        assert_eq!(hosts.oauth_host, "www.battlenet.com.cn");
        assert_ne!(hosts.oauth_host, Region::Us.hosts().oauth_host);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EU".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!(Region::try_from("kr").unwrap(), Region::Kr);
        assert_eq!(Region::Tw.to_string(), "tw");
    }
}
