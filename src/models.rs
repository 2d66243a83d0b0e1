//! Data records consumed by the rendering layer.

use serde::{Deserialize, Serialize};

/// Site-wide configuration rendered into page metadata and the footer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Business name displayed in the masthead and page titles.
    pub name: String,
    /// Tagline used for page descriptions.
    pub description: String,
    /// Canonical URL of the published site.
    pub url: String,
    /// Logical path of the Open Graph preview image.
    pub og_image: String,
    /// Social profile links rendered in the footer.
    pub links: SocialLinks,
    /// Contact details rendered in the contact section.
    pub contact: ContactInfo,
}

/// Social profile links for the business.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SocialLinks {
    /// Instagram profile URL.
    pub instagram: String,
    /// Facebook page URL.
    pub facebook: String,
}

/// Contact details for the business.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactInfo {
    /// Pickup and delivery address line.
    pub address: String,
}

/// A named service offering with its showcase media.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceItem {
    /// Stable identifier for the offering.
    pub id: String,
    /// Human readable offering title.
    pub title: String,
    /// Marketing description rendered on the service card.
    pub description: String,
    /// Logical media paths shown in the offering's gallery.
    pub images: Vec<String>,
    /// URL slug for the offering's anchor.
    pub slug: String,
}
