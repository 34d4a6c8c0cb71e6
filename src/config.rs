use serde::{Deserialize, Serialize};

use crate::registry::ServiceLifetime;

/// Options applied to every store registered by the resolver. Hosts usually load them
/// from their own configuration file, e.g. an `identity.stores` JSON section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Lifetime the stores are registered with. Scoped unless configured otherwise.
    pub lifetime: ServiceLifetime,
}

impl StoreOptions {
    pub fn with_lifetime(lifetime: ServiceLifetime) -> Self {
        Self { lifetime }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_scoped() {
        let options: StoreOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.lifetime, ServiceLifetime::Scoped);
        assert_eq!(options, StoreOptions::default());
    }

    #[test]
    fn test_lifetime_names() {
        let options: StoreOptions = serde_json::from_str(r#"{ "lifetime": "singleton" }"#).unwrap();
        assert_eq!(options, StoreOptions::with_lifetime(ServiceLifetime::Singleton));
        assert_eq!(
            serde_json::to_string(&StoreOptions::with_lifetime(ServiceLifetime::Transient)).unwrap(),
            r#"{"lifetime":"transient"}"#,
        );
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(serde_json::from_str::<StoreOptions>(r#"{ "lifetme": "scoped" }"#).is_err());
    }
}
