//! World of Warcraft APIs.
//!
//! Every WoW resource lives in a namespace: static data changes only with patches, dynamic
//! data (realms, auctions, leaderboards) changes continually and profile data belongs to
//! characters and accounts. Methods add the right `namespace` parameter for the region.

mod game_data;
mod profile;

pub use game_data::WowGameDataApi;
pub use profile::WowProfileApi;

use crate::dispatcher::RequestDispatcher;
use crate::region::Region;
use std::fmt;
use std::sync::Arc;

/// A WoW data namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Static,
    Dynamic,
    Profile,
}

impl Namespace {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
            Self::Profile => "profile",
        }
    }
    
    /// The retail namespace for `region`, e.g. `static-us`.
    pub fn for_region(&self, region: Region) -> String {
        format!("{}-{region}", self.prefix())
    }
    
    /// The classic namespace for `region`, e.g. `static-classic-us`.
    pub fn classic_for_region(&self, region: Region) -> String {
        format!("{}-classic-{region}", self.prefix())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// World of Warcraft APIs.
#[derive(Debug, Clone)]
pub struct WowApi {
    pub game_data: WowGameDataApi,
    pub profile: WowProfileApi,
}

impl WowApi {
    pub(crate) fn new(dispatcher: Arc<RequestDispatcher>) -> Self {
        Self {
            game_data: WowGameDataApi::new(Arc::clone(&dispatcher)),
            profile: WowProfileApi::new(dispatcher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn formats_namespaces() {
        assert_eq!(Namespace::Static.for_region(Region::Us), "static-us");
        assert_eq!(Namespace::Dynamic.for_region(Region::Eu), "dynamic-eu");
        assert_eq!(Namespace::Profile.for_region(Region::Kr), "profile-kr");
        assert_eq!(Namespace::Static.classic_for_region(Region::Tw), "static-classic-tw");
        assert_eq!(Namespace::Dynamic.classic_for_region(Region::Cn), "dynamic-classic-cn");
    }
}
