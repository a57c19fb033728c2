use crate::region::Region;
use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::String(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! query_value_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    Self::Integer(value as i64)
                }
            }
        )*
    };
}

query_value_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

/// Query parameters for a request. Keys are unique; setting a key again replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    inner: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates empty [`QueryParams`].
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Adds a parameter, returning the params.
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.insert(key, value);
        self
    }
    
    /// Sets a parameter.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        let key = key.into();
        let value = value.into();
        
        if let Some((_, existing)) = self.inner.iter_mut().find(|(k, _)| *k == key) {
            *existing = value;
        } else {
            self.inner.push((key, value));
        }
    }
    
    /// Gets a parameter.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.inner
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
    
    /// Checks if a parameter is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
    
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    
    /// Converts the params into string pairs for encoding.
    pub fn to_pairs(&self) -> Vec<(&str, String)> {
        self.inner
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_string()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        
        for (key, value) in iter {
            params.insert(key, value);
        }
        
        params
    }
}

/// A resource request built by a facade method.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub region: Region,
    pub resource: String,
    pub query: QueryParams,
}

impl RequestSpec {
    /// Creates a new [`RequestSpec`] with `locale` set.
    pub fn new<R>(region: Region, resource: R, locale: &str) -> Self
    where
        R: Into<String>,
    {
        Self {
            region,
            resource: resource.into(),
            query: QueryParams::new().with("locale", locale),
        }
    }
    
    /// Adds a parameter.
    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<QueryValue>,
    {
        self.query.insert(key, value);
        self
    }
    
    /// Merges caller-supplied parameters. Parameters already set by the method win.
    pub fn extend(mut self, extra: QueryParams) -> Self {
        for (key, value) in extra.inner {
            if !self.query.contains_key(&key) {
                self.query.insert(key, value);
            }
        }
        
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn insert_replaces_existing_key_in_place() {
        let params = QueryParams::new()
            .with("locale", "en_US")
            .with("page", 2)
            .with("locale", "de_DE");
        
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_pairs(), vec![("locale", "de_DE".to_string()), ("page", "2".to_string())]);
    }
    
    #[test]
    fn values_render_like_query_strings() {
        assert_eq!(QueryValue::from(true).to_string(), "true");
        assert_eq!(QueryValue::from(42u32).to_string(), "42");
        assert_eq!(QueryValue::from(-1i64).to_string(), "-1");
        assert_eq!(QueryValue::from(1.5).to_string(), "1.5");
        assert_eq!(QueryValue::from("mage").to_string(), "mage");
    }
    
    #[test]
    fn accepts_unsigned_ids() {
        let id: u64 = 18_446_744_073_709_551_615;
        let params = QueryParams::new()
            .with("id", id)
            .with("page", 3usize);
        
        assert_eq!(params.get("id"), Some(&QueryValue::Unsigned(id)));
        assert_eq!(
            params.to_pairs(),
            vec![("id", "18446744073709551615".to_string()), ("page", "3".to_string())],
        );
    }
    
    #[test]
    fn method_params_win_over_extras() {
        let extra = QueryParams::new()
            .with("locale", "fr_FR")
            .with("class", "mage");
        let spec = RequestSpec::new(Region::Us, "/hearthstone/cards", "en_US")
            .extend(extra);
        
        assert_eq!(spec.query.get("locale"), Some(&QueryValue::from("en_US")));
        assert_eq!(spec.query.get("class"), Some(&QueryValue::from("mage")));
    }
    
    #[test]
    fn collects_from_pairs() {
        let params = [("a", 1), ("b", 2)].into_iter().collect::<QueryParams>();
        
        assert_eq!(params.get("b"), Some(&QueryValue::Integer(2)));
    }
}
