use url::Url;

use crate::product::Product;

/// Destination and branding for WhatsApp inquiry links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryConfig {
    /// Phone number in international format, digits only.
    pub phone: String,
    /// Business name interpolated at the top of every message.
    pub business_name: String,
}

/// Build a `https://wa.me/<phone>?text=<message>` deep link for a product
/// inquiry. With no product, a generic catalog inquiry message is
/// substituted. Pure string construction; the only failure mode is a
/// malformed phone, which `new`-time config validation prevents.
pub fn inquiry_link(config: &InquiryConfig, product: Option<&Product>) -> String {
    let message = match product {
        Some(p) => message_for(config, &p.name, &p.category, &p.description),
        None => message_for(config, "Catálogo Geral", "Geral", "Catálogo completo"),
    };

    let base = format!("https://wa.me/{}", config.phone);
    let mut url = Url::parse(&base).unwrap_or_else(|_| {
        // Digits-only phone numbers always parse; anything else falls back
        // to the bare service root.
        Url::parse("https://wa.me/").unwrap()
    });
    url.query_pairs_mut().append_pair("text", &message);
    url.into()
}

fn message_for(config: &InquiryConfig, name: &str, category: &str, description: &str) -> String {
    format!(
        "🏢 {}\n\n📋 {}\n📂 {}\n📝 {}\n\n💼 Solicitar orçamento!",
        config.business_name, name, category, description
    )
}
