//! Mock cloud provider catalog.

/// Providers in catalog order. Order matters: worst-case selection keeps
/// the first of equally priced providers, and the planner indexes into it.
pub const PROVIDERS: [&str; 4] = ["AWS", "GCP", "Azure", "OVHcloud"];

/// Multiplier assumed for providers missing from the catalog.
pub const UNKNOWN_PROVIDER_MULTIPLIER: f64 = 1.2;

/// Relative price multiplier of a provider (mock figures).
pub fn cost_multiplier(provider: &str) -> f64 {
    match provider {
        "AWS" => 1.25,
        "GCP" => 1.18,
        "Azure" => 1.22,
        "OVHcloud" => 1.0,
        _ => UNKNOWN_PROVIDER_MULTIPLIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_provider_uses_default_multiplier() {
        assert_eq!(cost_multiplier("Linode"), UNKNOWN_PROVIDER_MULTIPLIER);
        assert_eq!(cost_multiplier("OVHcloud"), 1.0);
    }
}
