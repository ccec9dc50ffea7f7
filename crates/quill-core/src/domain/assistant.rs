use serde::{Deserialize, Serialize};

/// Structured result of an SEO optimization pass.
///
/// Every field has a usable default when the upstream response omits it:
/// the original title, a truncation of the content, and empty lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoOptimization {
    pub optimized_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub suggestions: Vec<String>,
}
