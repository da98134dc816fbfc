use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Base URL of the catalog backend, e.g. "http://localhost:4000"
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Categories offered in the toolbar ("all" is always prepended)
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            categories: default_categories(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_page_size() -> u32 {
    6
}

fn default_categories() -> Vec<String> {
    ["Electronics", "Home", "Clothing", "Books"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
