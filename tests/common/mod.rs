#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use wa_link_helper::application::services::LinkService;
use wa_link_helper::infrastructure::registry::StaticCountryRegistry;
use wa_link_helper::state::AppState;
use wa_link_helper::utils::SeparatorPolicy;
use wa_link_helper::web::site::SiteMeta;

pub const SITE_URL: &str = "https://wa.example.com";

/// Small registry with Indonesia, the United States and the United Kingdom.
pub fn test_registry() -> StaticCountryRegistry {
    let names: HashMap<String, String> = [
        ("ID", "Indonesia"),
        ("US", "United States"),
        ("GB", "United Kingdom"),
    ]
    .into_iter()
    .map(|(code, name)| (code.to_string(), name.to_string()))
    .collect();

    StaticCountryRegistry::from_table([("ID", "62"), ("US", "1"), ("GB", "44")], &names).unwrap()
}

pub fn empty_registry() -> StaticCountryRegistry {
    StaticCountryRegistry::from_table(Vec::<(String, String)>::new(), &HashMap::new()).unwrap()
}

pub fn state_with(registry: StaticCountryRegistry) -> AppState {
    let link_service = Arc::new(LinkService::new(
        Arc::new(registry),
        SeparatorPolicy::Strip,
    ));

    AppState::new(link_service, Arc::new(SiteMeta::new(SITE_URL)), "ID")
}

pub fn create_test_state() -> AppState {
    state_with(test_registry())
}
